//! Smoke tests for the brainctl CLI
//!
//! These run the compiled binary end to end.

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the brainctl binary
fn brainctl() -> Command {
    Command::cargo_bin("brainctl").expect("brainctl binary should exist")
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_help_flag() {
    brainctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("symbols"));
}

#[test]
fn test_version_flag() {
    brainctl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("brainctl"));
}

#[test]
fn test_no_args_fails() {
    brainctl().assert().failure();
}

// ============================================================================
// eval
// ============================================================================

#[test]
fn test_eval_addition() {
    brainctl()
        .args(["eval", "4", "+", "5", "="])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_eval_pi() {
    brainctl()
        .args(["eval", "π"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("3.14159265358979"));
}

#[test]
fn test_eval_sqrt() {
    brainctl()
        .args(["eval", "9", "√"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_eval_divide_by_zero() {
    brainctl()
        .args(["eval", "8", "÷", "0", "="])
        .assert()
        .success()
        .stdout("inf\n");
}

#[test]
fn test_eval_clear() {
    brainctl()
        .args(["eval", "7", "C"])
        .assert()
        .success()
        .stdout("none\n");
}

#[test]
fn test_eval_negative_operand_and_subtraction() {
    brainctl()
        .args(["eval", "-3", "-", "2", "="])
        .assert()
        .success()
        .stdout("-5\n");
}

#[test]
fn test_eval_unknown_symbol_ignored() {
    brainctl()
        .args(["eval", "2", "tan", "x²"])
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn test_eval_trace() {
    brainctl()
        .args(["eval", "--trace", "6", "×", "7", "="])
        .assert()
        .success()
        .stdout("6 → 6\n× → none\n7 → 7\n= → 42\n42\n");
}

#[test]
fn test_eval_json() {
    let output = brainctl()
        .args(["--format", "json", "eval", "2", "+"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["result"], serde_json::Value::Null);
    assert_eq!(json["state"]["pending"]["first_operand"], 2.0);
}

#[test]
fn test_eval_json_divide_by_zero() {
    let output = brainctl()
        .args(["--format", "json", "eval", "8", "÷", "0", "="])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["result"], "inf");
    assert_eq!(json["state"]["accumulator"], "inf");
    assert_eq!(json["tape"][3]["result"], "inf");
}

#[test]
fn test_eval_quiet_suppresses_trace() {
    brainctl()
        .args(["-q", "eval", "--trace", "6", "×", "7", "="])
        .assert()
        .success()
        .stdout("42\n");
}

// ============================================================================
// run
// ============================================================================

#[test]
fn test_run_stdin() {
    brainctl()
        .arg("run")
        .write_stdin("4 +\n5\n=\n")
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_run_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tokens.txt");
    fs::write(&path, "10 mod 4 =").unwrap();

    brainctl()
        .arg("run")
        .arg(&path)
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_run_missing_file() {
    brainctl()
        .args(["run", "/nonexistent/tokens.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_run_directory_rejected() {
    let dir = TempDir::new().unwrap();
    brainctl()
        .arg("run")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a directory"));
}

// ============================================================================
// config / symbols
// ============================================================================

#[test]
fn test_symbols_lists_table() {
    brainctl()
        .arg("symbols")
        .assert()
        .success()
        .stdout(predicate::str::contains("√\tunary"))
        .stdout(predicate::str::contains("=\tequals"));
}

#[test]
fn test_config_constant() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("brain.yaml");
    fs::write(&path, "constants:\n  g: 9.81\n").unwrap();

    brainctl()
        .arg("--config")
        .arg(&path)
        .args(["eval", "g", "×", "2", "="])
        .assert()
        .success()
        .stdout("19.62\n");
}

#[test]
fn test_config_rejects_shadowed_symbol() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("brain.json");
    fs::write(&path, r#"{"constants": {"π": 3}}"#).unwrap();

    brainctl()
        .arg("--config")
        .arg(&path)
        .arg("symbols")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Symbol already defined"));
}
