use super::{Address, AddressTable, Console, Frame, Listing, Stack, Var};
use crate::error;
use crate::lang::{token::Command, Error, Line, LineNumber, Scanner};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, trace};

type Result<T> = std::result::Result<T, Error>;

/// What the terminal has to do after a line was entered.
#[derive(Debug, PartialEq, Eq)]
pub enum Event {
    Stopped,
    Load(String),
    Save(String),
    Bye,
}

/// ## The interpreter
///
/// Owns the program, the variables, the control stack and the position
/// of a run. One instance is one session; nothing is shared.
pub struct Runtime<C: Console> {
    pub(super) listing: Listing,
    pub(super) table: AddressTable,
    pub(super) vars: Var,
    pub(super) stack: Stack<Frame>,
    pub(super) pc: Address,
    pub(super) running: bool,
    pub(super) halted: bool,
    pub(super) rng: StdRng,
    pub(super) console: C,
    pub(super) nesting: usize,
    interrupted: Arc<AtomicBool>,
}

impl<C: Console> Runtime<C> {
    pub fn new(console: C) -> Runtime<C> {
        Runtime {
            listing: Listing::default(),
            table: AddressTable::default(),
            vars: Var::new(),
            stack: Stack::new("CONTROL STACK OVERFLOW"),
            pc: 0,
            running: false,
            halted: false,
            rng: StdRng::from_entropy(),
            console,
            nesting: 0,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn set_listing(&mut self, listing: Listing) {
        self.new_program();
        self.listing = listing;
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    /// Setting the flag breaks a run before its next line, like STOP.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    pub fn interrupt(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }

    /// Interactive entry: commands, numbered lines and direct statements.
    pub fn enter(&mut self, s: &str) -> Result<Event> {
        let line = Line::new(s)?;
        if let Some(number) = line.number() {
            self.store(number, line.into_text());
            return Ok(Event::Stopped);
        }
        if line.is_empty() {
            return Ok(Event::Stopped);
        }
        let mut scan = Scanner::new(line.text());
        if let Some(command) = scan.keyword().and_then(|word| Command::from_str(&word)) {
            return self.command(command, &mut scan);
        }
        self.execute(line.text())?;
        Ok(Event::Stopped)
    }

    /// Stores a numbered line or executes anything else immediately.
    pub fn ingest(&mut self, s: &str) -> Result<()> {
        let line = Line::new(s)?;
        match line.number() {
            Some(number) => {
                self.store(number, line.into_text());
                Ok(())
            }
            None => self.execute(line.text()),
        }
    }

    /// Executes one direct mode statement.
    pub fn execute(&mut self, statement: &str) -> Result<()> {
        let mut scan = Scanner::new(statement);
        self.statement(&mut scan)
    }

    pub fn run(&mut self) -> Result<()> {
        self.table = AddressTable::snapshot(&self.listing);
        self.stack.clear();
        self.pc = 0;
        debug!(lines = self.table.len(), "run");
        self.cont()
    }

    /// Resumes where STOP, an error or a break left off.
    /// A break requested while nothing was running is dropped.
    pub fn cont(&mut self) -> Result<()> {
        self.interrupted.store(false, Ordering::SeqCst);
        self.halted = false;
        self.running = true;
        let result = self.execute_loop();
        self.running = false;
        result
    }

    fn execute_loop(&mut self) -> Result<()> {
        while self.pc < self.table.len() && !self.halted {
            if self.interrupted.swap(false, Ordering::SeqCst) {
                let line_number = self.table.line_number(self.pc);
                info!(line = ?line_number, "break");
                self.halted = true;
                if let Some(line_number) = line_number {
                    self.console
                        .print(&format!("Break in line {}\n", line_number))?;
                }
                break;
            }
            let (line_number, text) = match self.table.line(self.pc) {
                Some(line) => line,
                None => return Err(error!(InternalError; "ADDRESS OUT OF RANGE")),
            };
            self.pc += 1;
            trace!(line = line_number, "execute");
            let mut scan = Scanner::new(&text);
            if let Err(error) = self.statement(&mut scan) {
                let error = error
                    .in_line_number(line_number)
                    .in_column(scan.cursor());
                debug!(%error, "run aborted");
                return Err(error);
            }
        }
        if self.halted {
            debug!(addr = self.pc, "stopped");
        }
        Ok(())
    }

    fn store(&mut self, number: LineNumber, text: String) {
        trace!(line = number, "stored");
        self.listing.insert(number, text);
    }

    pub fn delete(&mut self, number: LineNumber) -> Result<()> {
        match self.listing.remove(number) {
            Some(_) => {
                trace!(line = number, "deleted");
                Ok(())
            }
            None => Err(error!(UndefinedLine; number.to_string())),
        }
    }

    /// Erases the program along with any run in progress.
    pub fn new_program(&mut self) {
        self.listing.clear();
        self.table = AddressTable::default();
        self.stack.clear();
        self.pc = 0;
        self.halted = false;
    }

    pub fn clear_vars(&mut self) {
        self.vars.clear();
    }

    fn command(&mut self, command: Command, scan: &mut Scanner) -> Result<Event> {
        use Command::*;
        match command {
            Run => {
                scan.expect_eol()?;
                self.run()?;
            }
            Continue => {
                scan.expect_eol()?;
                self.cont()?;
            }
            List => {
                scan.expect_eol()?;
                for line in self.listing.list() {
                    self.console.print(&format!("{}\n", line))?;
                }
            }
            New => {
                scan.expect_eol()?;
                self.new_program();
            }
            Clear => {
                scan.expect_eol()?;
                self.clear_vars();
            }
            Delete => {
                let number = match scan.number() {
                    Some(number) => number,
                    None => return Err(scan.expected("Line number")),
                };
                scan.expect_eol()?;
                let number = match Line::new(number)?.number() {
                    Some(number) => number,
                    None => return Err(error!(InternalError; "BAD LINE NUMBER")),
                };
                self.delete(number)?;
            }
            Load | Save => {
                let filename = match scan.string()? {
                    Some(filename) => filename.to_string(),
                    None => return Err(scan.expected("String")),
                };
                scan.expect_eol()?;
                return Ok(if command == Load {
                    Event::Load(filename)
                } else {
                    Event::Save(filename)
                });
            }
            Bye => {
                scan.expect_eol()?;
                return Ok(Event::Bye);
            }
        }
        Ok(Event::Stopped)
    }
}
