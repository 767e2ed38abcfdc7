use std::process::{Command, Output};

fn calc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_calc"))
        .args(args)
        .output()
        .expect("failed to run calc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn prints_the_result() {
    let output = calc(&["let(a, 5, let(b, mult(a, 10), add(b, a)))"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "55\n");
}

#[test]
fn prints_negative_results() {
    let output = calc(&["sub(1, 10)"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "-9\n");
}

#[test]
fn failure_reports_and_exits_non_zero() {
    let output = calc(&["add(1, y)"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.contains("parse:1:8: error parsing operand: 'y' is not a declared variable"));
    assert!(err.contains("add(1, y)"));
}

#[test]
fn arithmetic_failure_names_the_operation() {
    let output = calc(&["add(2147483647, 1)"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("integer overflow while computing add(2147483647, 1)"));
}

#[test]
fn no_arguments_prints_usage() {
    let output = calc(&[]);
    assert!(output.status.success());
    let text = format!("{}{}", stdout(&output), stderr(&output));
    assert!(text.contains("Usage"));
}

#[test]
fn extra_arguments_are_rejected() {
    let output = calc(&["add(1, 2)", "add(3, 4)"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Usage"));
}

#[test]
fn tokens_flag_lists_tokens() {
    let output = calc(&["--tokens", "add(x, -1)"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "1:1: Keyword(\"add\")\n1:4: ParenLeft\n1:5: Keyword(\"x\")\n1:6: Comma\n1:8: Integer(-1)\n1:10: ParenRight\n"
    );
}

#[test]
fn tokens_flag_prints_nothing_on_lexical_error() {
    let output = calc(&["--tokens", "add(1, #)"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).starts_with("lexical:1:8: cannot match character '#'"));
}

#[test]
fn tree_flag_prints_canonical_form() {
    let output = calc(&["--tree", "let(a,5,add(a,a))"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "let(a, 5, add(a, a))\n");
}

#[test]
fn completions_are_generated() {
    let output = calc(&["--completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("calc"));
}
