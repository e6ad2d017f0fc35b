// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! End-to-end tests for the `slate` binary.
//! Each test writes a source file to a temp dir, runs one phase command
//! and checks the exit code and output.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn source_file(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(source.as_bytes()).expect("write temp file");
    file
}

fn slate(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_slate"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("SLATE_LOG")
        .output()
        .expect("failed to run slate")
}

fn run(command: &str, source: &str, extra: &[&str]) -> (Output, String, String) {
    let file = source_file(source);
    let path = file.path().to_str().expect("utf-8 temp path");
    let mut args = extra.to_vec();
    args.push(command);
    args.push(path);
    let out = slate(&args);
    let stdout = String::from_utf8_lossy(&out.stdout).to_string();
    let stderr = String::from_utf8_lossy(&out.stderr).to_string();
    (out, stdout, stderr)
}

#[test]
fn lex_prints_tokens() {
    let (out, stdout, _) = run("lex", "let x = 1;", &[]);
    assert!(out.status.success());
    assert!(stdout.contains("Tokens"));
    assert!(stdout.contains("Lex OK"));
}

#[test]
fn lex_error_exits_nonzero() {
    let (out, _, stderr) = run("lex", "let s = \"open;", &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr.contains("error[E0002]"), "stderr: {stderr}");
}

#[test]
fn parse_clean_file() {
    let (out, stdout, stderr) = run("parse", "fn add(a: int, b: int) -> int { return a + b; }", &[]);
    assert!(out.status.success(), "stderr: {stderr}");
    assert!(stdout.contains("fn add"));
    assert!(stdout.contains("Parse OK"));
}

#[test]
fn parse_error_is_rendered_with_location() {
    let (out, _, stderr) = run("parse", "fn f( {", &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr.contains("error[E0100]"), "stderr: {stderr}");
    assert!(stderr.contains("-->"));
    assert!(stderr.contains("Parse FAILED"));
}

#[test]
fn resolve_prints_bindings() {
    let (out, stdout, stderr) = run("resolve", "fn a() { b(); }\nfn b() {}", &[]);
    assert!(out.status.success(), "stderr: {stderr}");
    assert!(stdout.contains("-> fn b"), "stdout: {stdout}");
}

#[test]
fn resolve_reports_undefined_value() {
    let (out, _, stderr) = run("resolve", "fn f() { y; }", &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr.contains("error[E0200]"), "stderr: {stderr}");
    assert!(stderr.contains("use of undefined value `y`"));
}

#[test]
fn check_prints_signatures() {
    let (out, stdout, stderr) = run("check", "fn add(a: int, b: bool) -> str {}", &[]);
    assert!(out.status.success(), "stderr: {stderr}");
    assert!(stdout.contains("fn add(a: int, b: bool) -> str"), "stdout: {stdout}");
}

#[test]
fn json_report_on_failure() {
    let (out, stdout, _) = run("resolve", "fn f() {}\nfn f() {}", &["--format", "json"]);
    assert_eq!(out.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(report["success"], false);
    assert_eq!(report["phase"], "resolve");
    assert_eq!(report["error_count"], 1);
    assert_eq!(report["diagnostics"][0]["code"], "E0201");
    assert_eq!(report["diagnostics"][0]["location"]["line"], 2);
}

#[test]
fn json_report_on_success() {
    let (out, stdout, _) = run("parse", "let x = 1;", &["--format", "json"]);
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(report["success"], true);
    assert_eq!(report["diagnostics"].as_array().map(Vec::len), Some(0));
}

#[test]
fn max_errors_caps_output() {
    let (out, stdout, _) = run("resolve", "fn f() { a; b; c; d; }", &["--format", "json", "--max-errors", "2"]);
    assert_eq!(out.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(report["error_count"], 2);
}

#[test]
fn missing_file() {
    let out = slate(&["parse", "/nonexistent/input.sl"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("reading"));
}

#[test]
fn explain_known_and_unknown_codes() {
    let out = slate(&["explain", "e0200"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("E0200"));

    let out = slate(&["explain", "E9999"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown error code"));
}

#[test]
fn deep_nesting_is_reported_not_a_crash() {
    let source = format!("let x = {}1{};", "(".repeat(10_000), ")".repeat(10_000));
    let (out, _, stderr) = run("parse", &source, &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr.contains("expression nested too deeply"), "stderr: {stderr}");
}
