//! CLI smoke tests for the `threeway` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn generates_workbook_at_requested_path() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("model.xlsx");

    Command::cargo_bin("threeway")
        .unwrap()
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Model saved to:"));

    assert!(output.exists());
}

#[test]
fn verbose_lists_every_sheet() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("model.xlsx");

    Command::cargo_bin("threeway")
        .unwrap()
        .arg("--output")
        .arg(&output)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income Statement:"))
        .stdout(predicate::str::contains("Notes:"));
}

#[test]
fn unwritable_output_path_fails_with_error() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("missing").join("model.xlsx");

    Command::cargo_bin("threeway")
        .unwrap()
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn help_describes_the_model() {
    Command::cargo_bin("threeway")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transurban"));
}
