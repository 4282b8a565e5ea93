use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Formats a number the way PRINT shows it.
///
/// Shortest digits that read back to the same value. Integral values have
/// no decimal point. Exponent form is used below 1e-4 and from 1e21 up.
pub fn format(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let sci = format!("{:e}", value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exp: i32 = match exp.parse() {
        Ok(exp) => exp,
        Err(_) => return sci,
    };
    if exp < -4 || exp >= 21 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    } else {
        format!("{}", value)
    }
}

/// Parses one field typed in response to INPUT.
pub fn parse(field: &str) -> Result<f64> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(0.0);
    }
    match field.parse::<f64>() {
        Ok(value) => Ok(value),
        Err(_) => Err(error!(MalformedNumber; field)),
    }
}

/// BASIC truth: -1 for true, 0 for false.
pub fn truth(value: bool) -> f64 {
    if value {
        -1.0
    } else {
        0.0
    }
}
