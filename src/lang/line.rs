use super::{Error, LineNumber};

/// ## A line of input
///
/// Text beginning with a digit, after any blanks, is a numbered program
/// line; anything else is a direct mode statement.

#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: Option<LineNumber>,
    text: String,
}

impl Line {
    pub fn new(s: &str) -> Result<Line, Error> {
        let s = s.trim_end_matches(|c| c == '\n' || c == '\r').trim_start();
        if !s.starts_with(|c: char| c.is_ascii_digit()) {
            return Ok(Line {
                number: None,
                text: s.trim().to_string(),
            });
        }
        let digits = s.bytes().take_while(u8::is_ascii_digit).count();
        let number = match s[..digits].parse::<LineNumber>() {
            Ok(number) => number,
            Err(_) => return Err(error!(SyntaxError; "Line number out of range")),
        };
        let mut rest = &s[digits..];
        // A fractional line number is truncated: "10.5 PRINT" is line 10.
        if rest.starts_with('.') {
            rest = rest[1..].trim_start_matches(|c: char| c.is_ascii_digit());
        }
        Ok(Line {
            number: Some(number),
            text: rest.trim().to_string(),
        })
    }

    pub fn number(&self) -> Option<LineNumber> {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, "{} {}", number, self.text),
            None => write!(f, "{}", self.text),
        }
    }
}
