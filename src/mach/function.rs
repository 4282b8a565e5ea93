use crate::error;
use crate::lang::Error;
use rand::rngs::StdRng;
use rand::Rng;
use std::f64::consts::PI;

type Result<T> = std::result::Result<T, Error>;

/// ## Builtin functions
///
/// Fixed arity numeric functions. There is no coercion and no
/// optional argument; the count must match exactly.

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Function {
    Timer,
    Rnd,
    Pi,
    Int,
    Abs,
    Sqr,
    Sin,
    Cos,
    Rad,
    Deg,
    Min,
    Max,
    Mod,
    Hypot2,
    Hypot3,
    Iif,
}

impl Function {
    pub fn from_name(name: &str) -> Option<Function> {
        use Function::*;
        Some(match name {
            "timer" => Timer,
            "rnd" => Rnd,
            "pi" => Pi,
            "int" => Int,
            "abs" => Abs,
            "sqr" => Sqr,
            "sin" => Sin,
            "cos" => Cos,
            "rad" => Rad,
            "deg" => Deg,
            "min" => Min,
            "max" => Max,
            "mod" => Mod,
            "hypot2" => Hypot2,
            "hypot3" => Hypot3,
            "iif" => Iif,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        use Function::*;
        match self {
            Timer => "timer",
            Rnd => "rnd",
            Pi => "pi",
            Int => "int",
            Abs => "abs",
            Sqr => "sqr",
            Sin => "sin",
            Cos => "cos",
            Rad => "rad",
            Deg => "deg",
            Min => "min",
            Max => "max",
            Mod => "mod",
            Hypot2 => "hypot2",
            Hypot3 => "hypot3",
            Iif => "iif",
        }
    }

    pub fn arity(self) -> usize {
        use Function::*;
        match self {
            Timer | Rnd | Pi => 0,
            Int | Abs | Sqr | Sin | Cos | Rad | Deg => 1,
            Min | Max | Mod | Hypot2 => 2,
            Hypot3 | Iif => 3,
        }
    }

    pub fn call(self, args: &[f64], rng: &mut StdRng) -> Result<f64> {
        use Function::*;
        if args.len() != self.arity() {
            return Err(error!(BadArgumentCount; self.name()));
        }
        Ok(match self {
            Timer => timer(),
            Rnd => rng.gen::<f64>(),
            Pi => PI,
            Int => args[0].trunc(),
            Abs => args[0].abs(),
            Sqr => args[0].sqrt(),
            Sin => args[0].sin(),
            Cos => args[0].cos(),
            Rad => args[0] * (PI / 180.0),
            Deg => args[0] * (180.0 / PI),
            Min => args[0].min(args[1]),
            Max => args[0].max(args[1]),
            Mod => {
                let (lhs, rhs) = (args[0] as i64, args[1] as i64);
                if rhs == 0 {
                    return Err(error!(DivisionByZero; self.name()));
                }
                lhs.wrapping_rem(rhs) as f64
            }
            Hypot2 => (args[0] * args[0] + args[1] * args[1]).sqrt(),
            Hypot3 => (args[0] * args[0] + args[1] * args[1] + args[2] * args[2]).sqrt(),
            Iif => {
                if args[0] != 0.0 {
                    args[1]
                } else {
                    args[2]
                }
            }
        })
    }
}

/// Calls a builtin by its lowercased name.
pub fn call(name: &str, args: &[f64], rng: &mut StdRng) -> Result<f64> {
    match Function::from_name(name) {
        Some(function) => function.call(args, rng),
        None => Err(error!(UnknownFunction; name)),
    }
}

/// Wall clock seconds.
fn timer() -> f64 {
    let now = chrono::Utc::now();
    now.timestamp() as f64 + f64::from(now.timestamp_subsec_nanos()) / 1e9
}
