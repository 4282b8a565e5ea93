use super::{function, number::truth, Function, Var};
use crate::error;
use crate::lang::{Error, Scanner};
use rand::rngs::StdRng;

type Result<T> = std::result::Result<T, Error>;

/// ## Expression evaluator
///
/// Evaluates while it scans; nothing is kept between calls.
///
/// ```text
/// expression  = conjunction { OR conjunction }
/// conjunction = negation { AND negation }
/// negation    = NOT negation | comparison
/// comparison  = arithmetic [ relation arithmetic ]
/// arithmetic  = term { (+|-) term }
/// term        = factor { (*|/) factor }
/// factor      = [+|-] ( number | name [ args ] | "(" expression ")" )
/// ```
///
/// Logical results are -1 for true and 0 for false.

pub struct Evaluator<'a> {
    vars: &'a Var,
    rng: &'a mut StdRng,
    depth: usize,
}

/// How deep parentheses, calls, NOTs and nested IFs may go.
pub const MAX_NESTING: usize = 255;

impl<'a> Evaluator<'a> {
    pub fn new(vars: &'a Var, rng: &'a mut StdRng) -> Evaluator<'a> {
        Evaluator {
            vars,
            rng,
            depth: 0,
        }
    }

    pub fn expression(&mut self, scan: &mut Scanner) -> Result<f64> {
        let mut lhs = self.conjunction(scan)?;
        while scan.keyword_nocase("or") {
            let rhs = self.conjunction(scan)?;
            lhs = truth(lhs != 0.0 || rhs != 0.0);
        }
        Ok(lhs)
    }

    fn conjunction(&mut self, scan: &mut Scanner) -> Result<f64> {
        let mut lhs = self.negation(scan)?;
        while scan.keyword_nocase("and") {
            let rhs = self.negation(scan)?;
            lhs = truth(lhs != 0.0 && rhs != 0.0);
        }
        Ok(lhs)
    }

    /// Runs `f` one nesting level deeper.
    fn nested<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        if self.depth >= MAX_NESTING {
            return Err(error!(OutOfMemory; "EXPRESSION TOO COMPLEX"));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn negation(&mut self, scan: &mut Scanner) -> Result<f64> {
        if scan.keyword_nocase("not") {
            let value = self.nested(|eval| eval.negation(scan))?;
            Ok(truth(value == 0.0))
        } else {
            self.comparison(scan)
        }
    }

    /// At most one relational operator; `1<2<3` leaves `<3` unscanned.
    fn comparison(&mut self, scan: &mut Scanner) -> Result<f64> {
        let lhs = self.arithmetic(scan)?;
        match scan.relation() {
            Some(relation) => {
                let rhs = self.arithmetic(scan)?;
                Ok(truth(relation.compare(lhs, rhs)))
            }
            None => Ok(lhs),
        }
    }

    /// Sums and differences only. FOR, GOTO and friends use this so
    /// that a following `=` or keyword is left alone.
    pub fn arithmetic(&mut self, scan: &mut Scanner) -> Result<f64> {
        let mut lhs = self.term(scan)?;
        loop {
            if scan.literal("+") {
                lhs += self.term(scan)?;
            } else if scan.literal("-") {
                lhs -= self.term(scan)?;
            } else {
                return Ok(lhs);
            }
        }
    }

    fn term(&mut self, scan: &mut Scanner) -> Result<f64> {
        let mut lhs = self.factor(scan)?;
        loop {
            if scan.literal("*") {
                lhs *= self.factor(scan)?;
            } else if scan.literal("/") {
                lhs /= self.factor(scan)?;
            } else {
                return Ok(lhs);
            }
        }
    }

    fn factor(&mut self, scan: &mut Scanner) -> Result<f64> {
        let signum = if scan.literal("-") {
            -1.0
        } else {
            scan.literal("+");
            1.0
        };
        if let Some(literal) = scan.number() {
            return match literal.parse::<f64>() {
                Ok(value) => Ok(value * signum),
                Err(_) => Err(scan.expected("Number")),
            };
        }
        if let Some(name) = scan.identifier() {
            let is_call = Function::from_name(&name).is_some()
                || scan.rest().trim_start().starts_with('(');
            if is_call {
                // The sign is not applied to a call result.
                let args = self.nested(|eval| eval.args(scan))?;
                return function::call(&name, &args, self.rng);
            }
            return Ok(self.vars.fetch(&name)? * signum);
        }
        if scan.literal("(") {
            let value = self.nested(|eval| eval.expression(scan))?;
            if !scan.literal(")") {
                return Err(scan.expected("')'"));
            }
            return Ok(value * signum);
        }
        Err(scan.expected("Expression"))
    }

    /// A parenthesized argument list, or nothing at all.
    fn args(&mut self, scan: &mut Scanner) -> Result<Vec<f64>> {
        let mut args = Vec::with_capacity(3);
        if !scan.literal("(") {
            return Ok(args);
        }
        if scan.literal(")") {
            return Ok(args);
        }
        loop {
            args.push(self.expression(scan)?);
            if scan.literal(")") {
                return Ok(args);
            }
            if !scan.literal(",") {
                return Err(scan.expected("')'"));
            }
        }
    }
}
