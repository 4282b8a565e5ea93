#![allow(dead_code)]
use tinycat::mach::{Event, Runtime, Transcript};

pub fn runtime() -> Runtime<Transcript> {
    Runtime::new(Transcript::new())
}

/// Enters one line the way the terminal would and returns what was
/// printed, with an error rendered as a final `?` line.
pub fn exec(r: &mut Runtime<Transcript>, line: &str) -> String {
    let result = r.enter(line);
    let mut s = r.console_mut().take_output();
    match result {
        Ok(Event::Stopped) => {}
        Ok(event) => s.push_str(&format!("<{:?}>\n", event)),
        Err(error) => s.push_str(&format!("?{}\n", error)),
    }
    s
}

/// Enters every line, returning the output of the last one.
pub fn exec_all(r: &mut Runtime<Transcript>, lines: &[&str]) -> String {
    let mut s = String::new();
    for line in lines {
        s = exec(r, line);
    }
    s
}
