use super::{number, Address, Console, Evaluator, Frame, Runtime, MAX_NESTING};
use crate::error;
use crate::lang::{token::Word, Error, Scanner};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

impl<C: Console> Runtime<C> {
    /// Executes the statement at the cursor. Every statement scans to the
    /// end of its line before it changes anything.
    pub(super) fn statement(&mut self, scan: &mut Scanner) -> Result<()> {
        scan.skip_whitespace();
        let word = match scan.keyword() {
            Some(word) => word,
            None => return Err(scan.expected("Statement")),
        };
        let word = match Word::from_str(&word) {
            Some(word) => word,
            None => return Err(error!(UnknownStatement; word)),
        };
        trace!(%word, "statement");
        use Word::*;
        match word {
            Let => self.r#let(scan),
            If => self.r#if(scan),
            Goto => self.r#goto(scan),
            Gosub => self.r#gosub(scan),
            Return => self.r#return(scan),
            For => self.r#for(scan),
            Next => self.r#next(scan),
            Do => self.r#do(scan),
            Loop => self.r#loop(scan),
            Print => self.r#print(scan),
            Input => self.r#input(scan),
            Randomize => self.r#randomize(scan),
            Rem => {
                scan.skip_to_end();
                Ok(())
            }
            Stop => {
                scan.expect_eol()?;
                self.halted = true;
                Ok(())
            }
            End => {
                scan.expect_eol()?;
                self.pc = self.table.len();
                Ok(())
            }
        }
    }

    fn expression(&mut self, scan: &mut Scanner) -> Result<f64> {
        Evaluator::new(&self.vars, &mut self.rng).expression(scan)
    }

    fn arithmetic(&mut self, scan: &mut Scanner) -> Result<f64> {
        Evaluator::new(&self.vars, &mut self.rng).arithmetic(scan)
    }

    fn variable(&mut self, scan: &mut Scanner) -> Result<String> {
        match scan.identifier() {
            Some(name) => Ok(name),
            None => Err(scan.expected("Variable")),
        }
    }

    fn r#let(&mut self, scan: &mut Scanner) -> Result<()> {
        let var_name = self.variable(scan)?;
        if !scan.literal("=") {
            return Err(scan.expected("'='"));
        }
        let value = self.expression(scan)?;
        scan.expect_eol()?;
        self.vars.store(&var_name, value)
    }

    fn r#if(&mut self, scan: &mut Scanner) -> Result<()> {
        let condition = self.expression(scan)?;
        if !scan.keyword_nocase("then") {
            return Err(error!(SyntaxError; "IF without THEN"));
        }
        if condition == 0.0 {
            scan.skip_to_end();
            return Ok(());
        }
        if self.nesting >= MAX_NESTING {
            return Err(error!(OutOfMemory; "STATEMENT TOO COMPLEX"));
        }
        self.nesting += 1;
        let result = self.statement(scan);
        self.nesting -= 1;
        result
    }

    /// Evaluates a jump target and resolves it against the address table.
    fn target(&mut self, scan: &mut Scanner) -> Result<Address> {
        if !self.running {
            return Err(error!(ProgramNotRunning));
        }
        let line_number = self.arithmetic(scan)?;
        scan.expect_eol()?;
        self.table.resolve(line_number)
    }

    fn r#goto(&mut self, scan: &mut Scanner) -> Result<()> {
        let addr = self.target(scan)?;
        debug!(to = ?self.table.line_number(addr), "goto");
        self.pc = addr;
        Ok(())
    }

    fn r#gosub(&mut self, scan: &mut Scanner) -> Result<()> {
        let addr = self.target(scan)?;
        debug!(to = ?self.table.line_number(addr), depth = self.stack.len(), "gosub");
        self.stack.push(Frame::Return(self.pc))?;
        self.pc = addr;
        Ok(())
    }

    fn r#return(&mut self, scan: &mut Scanner) -> Result<()> {
        scan.expect_eol()?;
        self.pc = self.stack.pop_return()?;
        debug!(to = ?self.table.line_number(self.pc), "return");
        Ok(())
    }

    fn r#for(&mut self, scan: &mut Scanner) -> Result<()> {
        let var_name = self.variable(scan)?;
        if !scan.literal("=") {
            return Err(scan.expected("'='"));
        }
        let init = self.arithmetic(scan)?;
        if !scan.keyword_nocase("to") {
            return Err(scan.expected("TO"));
        }
        let limit = self.arithmetic(scan)?;
        let step = if scan.keyword_nocase("step") {
            self.arithmetic(scan)?
        } else {
            1.0
        };
        if step == 0.0 {
            return Err(error!(InfiniteLoop));
        }
        scan.expect_eol()?;
        self.vars.store(&var_name, init)?;
        self.stack.push(Frame::Count {
            step,
            limit,
            addr: self.pc,
        })
    }

    fn r#next(&mut self, scan: &mut Scanner) -> Result<()> {
        let var_name = self.variable(scan)?;
        scan.expect_eol()?;
        let value = self.vars.fetch(&var_name)?;
        let (step, limit, addr) = self.stack.last_count()?;
        let value = value + step;
        self.vars.store(&var_name, value)?;
        let done = if step > 0.0 {
            value > limit
        } else {
            value < limit
        };
        if done {
            self.stack.pop()?;
        } else {
            self.pc = addr;
        }
        Ok(())
    }

    fn r#do(&mut self, scan: &mut Scanner) -> Result<()> {
        scan.expect_eol()?;
        self.stack.push(Frame::Repeat(self.pc))
    }

    fn r#loop(&mut self, scan: &mut Scanner) -> Result<()> {
        let repeat = if scan.keyword_nocase("while") {
            self.expression(scan)? != 0.0
        } else if scan.keyword_nocase("until") {
            self.expression(scan)? == 0.0
        } else {
            return Err(scan.expected("WHILE or UNTIL"));
        };
        scan.expect_eol()?;
        let addr = self.stack.last_repeat()?;
        if repeat {
            self.pc = addr;
        } else {
            self.stack.pop()?;
        }
        Ok(())
    }

    fn printable(&mut self, scan: &mut Scanner) -> Result<String> {
        match scan.string()? {
            Some(s) => Ok(s.to_string()),
            None => Ok(number::format(self.expression(scan)?)),
        }
    }

    fn r#print(&mut self, scan: &mut Scanner) -> Result<()> {
        if scan.is_eol() {
            self.console.print("\n")?;
            return Ok(());
        }
        let mut text = self.printable(scan)?;
        let mut newline = true;
        loop {
            if scan.literal(";") {
                newline = false;
                if scan.is_eol() {
                    break;
                }
            } else if !scan.literal(",") {
                break;
            }
            text.push_str(&self.printable(scan)?);
        }
        scan.expect_eol()?;
        if newline {
            text.push('\n');
        }
        self.console.print(&text)?;
        Ok(())
    }

    fn r#input(&mut self, scan: &mut Scanner) -> Result<()> {
        let prompt = match scan.string()? {
            Some(prompt) => {
                if !scan.literal(",") {
                    return Err(scan.expected("','"));
                }
                prompt
            }
            None => "",
        };
        let mut var_names = vec![self.variable(scan)?];
        while scan.literal(",") {
            var_names.push(self.variable(scan)?);
        }
        scan.expect_eol()?;
        let fields = match self.console.input(prompt)? {
            Some(line) => line
                .split(',')
                .take(var_names.len())
                .map(number::parse)
                .collect::<Result<Vec<f64>>>()?,
            None => vec![],
        };
        for (index, var_name) in var_names.iter().enumerate() {
            let value = fields.get(index).copied().unwrap_or(0.0);
            self.vars.store(var_name, value)?;
        }
        Ok(())
    }

    fn r#randomize(&mut self, scan: &mut Scanner) -> Result<()> {
        let seed = if scan.is_eol() {
            let now = chrono::Utc::now();
            (now.timestamp() as u64)
                .wrapping_mul(1_000_000_000)
                .wrapping_add(u64::from(now.timestamp_subsec_nanos()))
        } else {
            let seed = self.arithmetic(scan)?;
            scan.expect_eol()?;
            seed.trunc() as i64 as u64
        };
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
