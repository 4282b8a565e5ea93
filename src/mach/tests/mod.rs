use crate::mach::{Runtime, Transcript};

mod control_test;
mod print_test;

fn runtime(lines: &[&str]) -> Runtime<Transcript> {
    let mut r = Runtime::new(Transcript::new());
    for line in lines {
        r.enter(line).unwrap();
    }
    r
}

/// Runs the program and returns everything it printed, followed by
/// the error if the run failed.
fn run(r: &mut Runtime<Transcript>) -> String {
    let result = r.run();
    let mut s = r.console_mut().take_output();
    if let Err(error) = result {
        s.push_str(&format!("?{}\n", error));
    }
    s
}
