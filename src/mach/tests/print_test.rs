use super::*;
use crate::lang::ErrorCode;

fn print(s: &str) -> String {
    let mut r = runtime(&[]);
    r.execute("LET X=5").unwrap();
    match r.execute(s) {
        Ok(()) => r.console_mut().take_output(),
        Err(error) => format!("?{}\n", error),
    }
}

#[test]
fn test_print_separators() {
    assert_eq!(print("PRINT \"X=\";X"), "X=5");
    assert_eq!(print("PRINT \"A\",\"B\""), "AB\n");
    assert_eq!(print("PRINT 1;"), "1");
    assert_eq!(print("PRINT 1,2;3"), "123");
    assert_eq!(print("PRINT"), "\n");
}

#[test]
fn test_print_numbers() {
    assert_eq!(print("PRINT 1/4"), "0.25\n");
    assert_eq!(print("PRINT 10^2"), "?Syntax error: Unexpected text: ^2\n");
    assert_eq!(print("PRINT 1e3"), "?Syntax error: Unexpected text: e3\n");
    assert_eq!(print("PRINT 1000000*1000000*1000000*1000"), "1e+21\n");
    assert_eq!(print("PRINT 1/0"), "+Inf\n");
    assert_eq!(print("PRINT -1/0"), "-Inf\n");
    assert_eq!(print("PRINT 0/0"), "NaN\n");
}

#[test]
fn test_print_comparison_chain() {
    let mut r = runtime(&[]);
    let e = r.execute("PRINT 1<2<3").unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.detail(), "Unexpected text: <3");
    assert_eq!(r.console().output(), "");
}

#[test]
fn test_print_nothing_on_error() {
    assert_eq!(print("PRINT \"A\";nope"), "?Variable not found: nope\n");
    assert_eq!(print("PRINT \"open"), "?Syntax error: Unclosed string\n");
}

#[test]
fn test_print_builtins() {
    assert_eq!(print("PRINT abs(-3), int(2.7)"), "32\n");
    assert_eq!(print("PRINT mod(7, 3)"), "1\n");
    assert_eq!(print("PRINT mod(7, 0)"), "?Division by zero: mod\n");
    assert_eq!(print("PRINT nosuch(1)"), "?No such function: nosuch\n");
    assert_eq!(
        print("PRINT sin(1, 2)"),
        "?Bad argument count in call to: sin\n"
    );
}
