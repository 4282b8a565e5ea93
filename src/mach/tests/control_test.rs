use super::*;
use crate::lang::ErrorCode;
use crate::mach::{Console, MAX_NESTING};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[test]
fn test_gosub_return() {
    let mut r = runtime(&[
        "10 GOSUB 100",
        "20 PRINT \"back\"",
        "30 END",
        "100 PRINT \"sub\"",
        "110 RETURN",
    ]);
    assert_eq!(run(&mut r), "sub\nback\n");
}

#[test]
fn test_gosub_computed_target() {
    let mut r = runtime(&["10 LET T=5", "20 GOSUB T*20", "30 END", "100 PRINT T", "110 RETURN"]);
    assert_eq!(run(&mut r), "5\n");
}

#[test]
fn test_return_without_gosub() {
    let mut r = runtime(&["10 RETURN"]);
    let e = r.run().unwrap_err();
    assert_eq!(e.code(), ErrorCode::ReturnWithoutGosub);
    assert_eq!(e.to_string(), "RETURN without GOSUB in line 10, column 6");
}

#[test]
fn test_return_inside_for() {
    let mut r = runtime(&["10 GOSUB 30", "20 END", "30 FOR I=1 TO 2", "40 RETURN"]);
    let e = r.run().unwrap_err();
    assert_eq!(e.code(), ErrorCode::ReturnWithoutGosub);
    assert_eq!(e.detail(), "innermost block is FOR");
}

#[test]
fn test_goto_missing_line() {
    let mut r = runtime(&["10 GOTO 99"]);
    assert_eq!(run(&mut r), "?Line not found: 99 in line 10, column 7\n");
}

#[test]
fn test_goto_truncates_target() {
    let mut r = runtime(&["10 GOTO 30.9", "20 PRINT 2", "30 PRINT 3"]);
    assert_eq!(run(&mut r), "3\n");
}

#[test]
fn test_goto_direct() {
    let mut r = runtime(&["10 PRINT 1"]);
    let e = r.execute("GOTO 10").unwrap_err();
    assert_eq!(e.code(), ErrorCode::ProgramNotRunning);
    assert!(e.is_direct());
    assert_eq!(
        r.execute("GOSUB 10").unwrap_err().code(),
        ErrorCode::ProgramNotRunning
    );
}

#[test]
fn test_end() {
    let mut r = runtime(&["10 PRINT 1", "20 END", "30 PRINT 2"]);
    assert_eq!(run(&mut r), "1\n");
}

#[test]
fn test_stop_and_continue() {
    let mut r = runtime(&["10 PRINT 1", "20 STOP", "30 PRINT 2"]);
    assert_eq!(run(&mut r), "1\n");
    r.enter("30 PRINT 3").unwrap();
    r.cont().unwrap();
    assert_eq!(r.console_mut().take_output(), "2\n");
    assert_eq!(run(&mut r), "1\n");
    r.cont().unwrap();
    assert_eq!(r.console_mut().take_output(), "3\n");
}

#[test]
fn test_continue_after_end_does_nothing() {
    let mut r = runtime(&["10 PRINT 1"]);
    assert_eq!(run(&mut r), "1\n");
    r.cont().unwrap();
    assert_eq!(r.console().output(), "");
}

/// Requests a break the first time anything is printed.
#[derive(Default)]
struct BreakOnPrint {
    output: String,
    interrupt: Option<Arc<AtomicBool>>,
}

impl Console for BreakOnPrint {
    fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        if let Some(interrupt) = self.interrupt.take() {
            interrupt.store(true, Ordering::SeqCst);
        }
        Ok(())
    }

    fn input(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(None)
    }
}

#[test]
fn test_interrupt_while_running() {
    let mut r = Runtime::new(BreakOnPrint::default());
    for line in &["10 PRINT 1", "20 PRINT 2", "30 PRINT 3"] {
        r.enter(line).unwrap();
    }
    let handle = r.interrupt_handle();
    r.console_mut().interrupt = Some(handle);
    r.run().unwrap();
    assert_eq!(r.console().output, "1\nBreak in line 20\n");
    r.cont().unwrap();
    assert_eq!(r.console().output, "1\nBreak in line 20\n2\n3\n");
}

#[test]
fn test_stale_interrupt_is_dropped() {
    let mut r = runtime(&["10 PRINT 1", "20 PRINT 2"]);
    r.interrupt();
    assert_eq!(run(&mut r), "1\n2\n");
    r.interrupt();
    r.cont().unwrap();
    assert_eq!(r.console().output(), "");
}

#[test]
fn test_nested_if_limit() {
    let mut r = runtime(&[]);
    let ok = format!("{}PRINT 1", "IF 1 THEN ".repeat(MAX_NESTING));
    r.execute(&ok).unwrap();
    assert_eq!(r.console_mut().take_output(), "1\n");
    let deep = format!("{}PRINT 1", "IF 1 THEN ".repeat(5000));
    let e = r.execute(&deep).unwrap_err();
    assert_eq!(e.code(), ErrorCode::OutOfMemory);
    assert_eq!(e.detail(), "STATEMENT TOO COMPLEX");
    assert_eq!(r.console().output(), "");
    r.execute(&ok).unwrap();
    assert_eq!(r.console().output(), "1\n");
}

#[test]
fn test_deep_parentheses_in_program() {
    let mut r = runtime(&[]);
    let line = format!("10 PRINT {}1{}", "(".repeat(500), ")".repeat(500));
    r.enter(&line).unwrap();
    let e = r.run().unwrap_err();
    assert_eq!(e.code(), ErrorCode::OutOfMemory);
    assert_eq!(e.detail(), "EXPRESSION TOO COMPLEX");
    assert_eq!(e.line_number(), Some(10));
}

#[test]
fn test_do_loop_while() {
    let mut r = runtime(&[
        "10 LET N=0",
        "20 DO",
        "30 LET N=N+1",
        "40 LOOP WHILE N<3",
        "50 PRINT N",
    ]);
    assert_eq!(run(&mut r), "3\n");
}

#[test]
fn test_do_loop_until() {
    let mut r = runtime(&[
        "10 LET N=10",
        "20 DO",
        "30 PRINT N;",
        "40 LET N=N-3",
        "50 LOOP UNTIL N<0",
    ]);
    assert_eq!(run(&mut r), "10741");
}

#[test]
fn test_loop_without_do() {
    let mut r = runtime(&["10 LOOP WHILE 1"]);
    assert_eq!(r.run().unwrap_err().code(), ErrorCode::LoopWithoutDo);
    let mut r = runtime(&["10 DO", "20 LOOP AGAIN"]);
    let e = r.run().unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.detail(), "WHILE or UNTIL expected, found: AGAIN");
}

#[test]
fn test_if_then() {
    let mut r = runtime(&[]);
    r.execute("IF 1 < 2 THEN PRINT \"yes\"").unwrap();
    r.execute("IF 2 < 1 THEN PRINT \"no\"").unwrap();
    r.execute("IF 0 THEN this is never scanned").unwrap();
    assert_eq!(r.console().output(), "yes\n");
}

#[test]
fn test_if_then_goto() {
    let mut r = runtime(&[
        "10 LET I=0",
        "20 LET I=I+1",
        "30 IF I<4 THEN GOTO 20",
        "40 PRINT I",
    ]);
    assert_eq!(run(&mut r), "4\n");
}

#[test]
fn test_if_without_then() {
    let mut r = runtime(&[]);
    let e = r.execute("IF 1 PRINT 2").unwrap_err();
    assert_eq!(e.to_string(), "Syntax error: IF without THEN");
}

#[test]
fn test_unknown_statement() {
    let mut r = runtime(&[]);
    let e = r.execute("FROB 1").unwrap_err();
    assert_eq!(e.to_string(), "Unknown statement: frob");
}

#[test]
fn test_let_failure_leaves_variable() {
    let mut r = runtime(&[]);
    r.execute("LET A=1").unwrap();
    assert!(r.execute("LET A=nope+1").is_err());
    assert_eq!(r.vars().get("a"), Some(1.0));
}

#[test]
fn test_error_in_line_keeps_earlier_output() {
    let mut r = runtime(&["10 PRINT 1", "20 PRINT Q", "30 PRINT 3"]);
    assert_eq!(run(&mut r), "1\n?Variable not found: q in line 20, column 7\n");
}

#[test]
fn test_randomize_seeds() {
    let mut r = runtime(&[]);
    r.execute("RANDOMIZE 42").unwrap();
    r.execute("LET A=RND").unwrap();
    r.execute("RANDOMIZE 42").unwrap();
    r.execute("LET B=RND()").unwrap();
    assert_eq!(r.vars().get("a"), r.vars().get("b"));
    r.execute("RANDOMIZE").unwrap();
}

#[test]
fn test_rem() {
    let mut r = runtime(&["10 REM PRINT 1 \"unclosed", "20 PRINT 2"]);
    assert_eq!(run(&mut r), "2\n");
}

#[test]
fn test_ingest() {
    let mut r = runtime(&[]);
    r.ingest("20 PRINT \"stored\"").unwrap();
    r.ingest("PRINT \"now\"").unwrap();
    assert_eq!(r.console_mut().take_output(), "now\n");
    assert_eq!(r.listing().get(20), Some("PRINT \"stored\""));
    assert_eq!(run(&mut r), "stored\n");
}
