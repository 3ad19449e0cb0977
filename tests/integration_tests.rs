//! Integration tests for the `lexer` binary.
//!
//! The rendered token stream is compared against golden files under
//! `tests/fixtures`.

use std::fs;

use assert_cmd::Command;
use pascal_lexer::{lexer::lexer::tokenize, render_tokens};
use predicates::prelude::*;
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn test_program_matches_golden_output() {
    let expected = fs::read_to_string(fixture("program.tokens")).unwrap();

    let mut cmd = Command::cargo_bin("lexer").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg(fixture("program.pas"))
        .assert()
        .success()
        .stdout(expected)
        .stderr("");
}

#[test]
fn test_library_rendering_matches_golden_output() {
    let source = fs::read_to_string(fixture("program.pas")).unwrap();
    let expected = fs::read_to_string(fixture("program.tokens")).unwrap();

    assert_eq!(render_tokens(&tokenize(source)), expected);
}

#[test]
fn test_bad_tokens_are_printed_not_fatal() {
    let expected = fs::read_to_string(fixture("bad.tokens")).unwrap();

    let mut cmd = Command::cargo_bin("lexer").unwrap();
    cmd.arg(fixture("bad.pas"))
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_strict_reports_bad_tokens() {
    let expected = fs::read_to_string(fixture("bad.tokens")).unwrap();

    let mut cmd = Command::cargo_bin("lexer").unwrap();
    cmd.arg("--strict")
        .arg(fixture("bad.pas"))
        .assert()
        .code(1)
        .stdout(expected)
        .stderr(predicate::str::contains("Could not classify `@`"))
        .stderr(predicate::str::contains("Could not classify `open`"))
        .stderr(predicate::str::contains("2 | x := @;"))
        .stderr(predicate::str::contains("Error: found 2 malformed token(s)"));
}

#[test]
fn test_strict_accepts_clean_source() {
    let mut cmd = Command::cargo_bin("lexer").unwrap();
    cmd.arg("--strict")
        .arg(fixture("program.pas"))
        .assert()
        .success();
}

#[test]
fn test_missing_argument() {
    let mut cmd = Command::cargo_bin("lexer").unwrap();
    cmd.env_remove("RUST_LOG")
        .assert()
        .code(1)
        .stdout("")
        .stderr("Usage: lexer <input_file>\n");
}

#[test]
fn test_unreadable_file() {
    let mut cmd = Command::cargo_bin("lexer").unwrap();
    cmd.arg(fixture("does_not_exist.pas"))
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("Error: Cannot open file"))
        .stderr(predicate::str::contains("does_not_exist.pas"));
}

#[test]
fn test_unknown_flag_exits_with_one() {
    let mut cmd = Command::cargo_bin("lexer").unwrap();
    cmd.arg("--frobnicate").assert().code(1);
}

#[test]
fn test_empty_file() {
    let dir = std::env::temp_dir().join(format!("pascal-lexer-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("empty.pas");
    fs::write(&path, "").unwrap();

    let mut cmd = Command::cargo_bin("lexer").unwrap();
    cmd.arg(&path)
        .assert()
        .success()
        .stdout("EOF (1, 0) \"\"\n");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_non_utf8_bytes_are_echoed_raw() {
    let dir = std::env::temp_dir().join(format!("pascal-lexer-raw-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("latin1.pas");
    fs::write(&path, [b'x', 0xFF, b' ', b'y']).unwrap();

    let mut expected = b"IDENTIFIER (1, 0) \"x\"\nBAD (1, 1) \"".to_vec();
    expected.push(0xFF);
    expected.extend_from_slice(b"\"\nIDENTIFIER (1, 3) \"y\"\nEOF (1, 4) \"\"\n");

    let mut cmd = Command::cargo_bin("lexer").unwrap();
    cmd.arg(&path).assert().success().stdout(expected);

    fs::remove_dir_all(&dir).unwrap();
}
