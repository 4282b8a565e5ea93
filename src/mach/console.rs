use std::collections::VecDeque;
use std::io;

/// ## Where PRINT goes and INPUT comes from
pub trait Console {
    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Shows `prompt` and reads one line. `None` at end of input.
    fn input(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// In-memory console. Input lines are queued up front and
/// everything written is kept for inspection.
#[derive(Debug, Default)]
pub struct Transcript {
    output: String,
    input: VecDeque<String>,
}

impl Transcript {
    pub fn new() -> Transcript {
        Transcript::default()
    }

    pub fn push_input(&mut self, line: &str) {
        self.input.push_back(line.to_string());
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl Console for Transcript {
    fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn input(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.push_str(prompt);
        Ok(self.input.pop_front())
    }
}
