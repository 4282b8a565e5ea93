/*!
## Rust Terminal Module

The interactive side of the interpreter: a line editor for entering
programs and commands, Ctrl-C handling, and program files.

*/

use crate::error;
use crate::lang::Error;
use crate::mach::{Console, Event, Listing, Runtime};
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` overrides the default
/// filter; everything goes to stderr.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Runs the interactive session, optionally starting with a program file.
pub fn main(program: Option<&Path>, run: bool) {
    if let Err(error) = main_loop(program, run) {
        eprintln!("{}", error);
    }
}

fn main_loop(program: Option<&Path>, run: bool) -> io::Result<()> {
    let command = Interface::new("BASIC")?;
    command.set_prompt("> ")?;
    let mut runtime = Runtime::new(LinefeedConsole::new()?);
    let interrupted = runtime.interrupt_handle();
    runtime.console_mut().watch(interrupted.clone());
    if let Err(error) = ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "Ctrl-C handler not installed");
    }

    if let Some(path) = program {
        match load(path) {
            Ok(listing) => {
                runtime.set_listing(listing);
                if run {
                    if let Err(error) = runtime.run() {
                        report(&command, &error)?;
                    }
                }
            }
            Err(error) => report(&command, &error)?,
        }
    }

    loop {
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if !string.trim().is_empty() {
            command.add_history_unique(string.clone());
        }
        match runtime.enter(&string) {
            Ok(Event::Stopped) => {}
            Ok(Event::Load(filename)) => match load(Path::new(&filename)) {
                Ok(listing) => runtime.set_listing(listing),
                Err(error) => report(&command, &error)?,
            },
            Ok(Event::Save(filename)) => {
                if let Err(error) = save(runtime.listing(), Path::new(&filename)) {
                    report(&command, &error)?;
                }
            }
            Ok(Event::Bye) => break,
            Err(error) => report(&command, &error)?,
        }
    }
    Ok(())
}

fn report(command: &Interface<DefaultTerminal>, error: &Error) -> io::Result<()> {
    command.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(format!("?{}", error))
    ))
}

/// PRINT and INPUT on the terminal. INPUT gets its own line editor so
/// its history stays apart from the command history.
struct LinefeedConsole {
    input: Interface<DefaultTerminal>,
    interrupted: Arc<AtomicBool>,
}

impl LinefeedConsole {
    fn new() -> io::Result<LinefeedConsole> {
        let input = Interface::new("INPUT")?;
        input.set_report_signal(Signal::Interrupt, true);
        Ok(LinefeedConsole {
            input,
            interrupted: Arc::new(AtomicBool::new(false)),
        })
    }

    fn watch(&mut self, interrupted: Arc<AtomicBool>) {
        self.interrupted = interrupted;
    }
}

impl Console for LinefeedConsole {
    fn print(&mut self, text: &str) -> io::Result<()> {
        self.input.write_fmt(format_args!("{}", text))
    }

    fn input(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.input.set_prompt(prompt)?;
        match self.input.read_line()? {
            ReadResult::Input(string) => {
                self.input.add_history_unique(string.clone());
                Ok(Some(string))
            }
            ReadResult::Signal(Signal::Interrupt) => {
                self.input.set_buffer("")?;
                self.input.lock_reader().cancel_read_line()?;
                self.interrupted.store(true, Ordering::SeqCst);
                Ok(None)
            }
            ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
        }
    }
}

/// Reads a program file. Replaces nothing until the whole file loaded.
pub fn load(path: &Path) -> Result<Listing, Error> {
    let reader = BufReader::new(File::open(path)?);
    let mut listing = Listing::default();
    for (index, line) in reader.lines().enumerate() {
        if let Err(error) = listing.load_str(&line?) {
            let place = format!("line {} of {}", index + 1, path.display());
            let detail = if error.detail().is_empty() {
                place
            } else {
                format!("{} ({})", error.detail(), place)
            };
            return Err(Error::new(error.code()).message(detail));
        }
    }
    info!(path = %path.display(), lines = listing.len(), "loaded");
    Ok(listing)
}

/// Writes the program, one `<number> <text>` line per stored line.
pub fn save(listing: &Listing, path: &Path) -> Result<(), Error> {
    if listing.is_empty() {
        return Err(error!(IoError; "Nothing to save"));
    }
    let mut file = File::create(path)?;
    for line in listing.list() {
        writeln!(file, "{}", line)?;
    }
    debug!(path = %path.display(), lines = listing.len(), "saved");
    Ok(())
}
