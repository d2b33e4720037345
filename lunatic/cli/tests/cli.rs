//! End-to-end tests for the lunatic binary.
//! Run with: cargo test --test cli

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lunatic"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run lunatic");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().expect("failed to wait for lunatic")
}

fn stdout_of(args: &[&str], stdin: &str) -> String {
    let out = run(args, stdin);
    assert!(
        out.status.success(),
        "lunatic failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).trim().to_string()
}

#[test]
fn test_decode_scalars() {
    let out = stdout_of(
        &["decode"],
        r#"{"Speed":"4","Title":"Main Menu","Debug":"false","Rate":"0.25"}"#,
    );
    assert_eq!(out, r#"{"Speed":4,"Title":"Main Menu","Debug":false,"Rate":0.25}"#);
}

#[test]
fn test_decode_nested_struct() {
    let out = stdout_of(&["decode"], r#"{"Window":"{\"x\":\"10\",\"visible\":\"true\"}"}"#);
    assert_eq!(out, r#"{"Window":{"x":10,"visible":true}}"#);
}

#[test]
fn test_decode_only_numbers() {
    let out = stdout_of(&["decode", "--only", "number"], r#"{"a":"1","b":"no","c":"3"}"#);
    assert_eq!(out, r#"{"a":1,"c":3}"#);
}

#[test]
fn test_decode_pretty() {
    let out = stdout_of(&["decode", "--pretty"], r#"{"a":"1"}"#);
    assert_eq!(out, "{\n  \"a\": 1\n}");
}

#[test]
fn test_decode_invalid_json() {
    let out = run(&["decode"], r#"{"a": ?}"#);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Input error"), "Expected input error, got: {stderr}");
}

#[test]
fn test_decode_non_object() {
    let out = run(&["decode"], "[1, 2, 3]");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("must be a JSON object"),
        "Expected object error, got: {stderr}"
    );
}

#[test]
fn test_text_title() {
    assert_eq!(stdout_of(&["text", "title"], "the dark forest\n"), "The Dark Forest");
}

#[test]
fn test_text_mono_space() {
    assert_eq!(stdout_of(&["text", "mono-space"], "too    many   spaces"), "too many spaces");
}

#[test]
fn test_text_words() {
    assert_eq!(stdout_of(&["text", "words"], "one two\nthree"), "3");
}
