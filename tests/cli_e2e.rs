//! End-to-end CLI tests for querycsv.
//!
//! These tests verify the complete CLI workflow by running the actual binary
//! with various arguments and checking the output.
//!
//! # Test Categories
//!
//! - **Basic functionality**: JSON in, CSV out
//! - **Flags**: field ordering, header overrides, delimiters, datestamps
//! - **Error handling**: proper error messages for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

const BOM: &str = "\u{FEFF}";

const PEOPLE_JSON: &str = r#"[
  {"name": "Alice", "age": 30},
  {"name": "Bob", "age": null}
]"#;

fn setup() -> (TempDir, PathBuf) {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("people.json");
    fs::write(&input, PEOPLE_JSON).unwrap();
    (dir, input)
}

fn cmd() -> Command {
    Command::cargo_bin("querycsv").expect("binary should build")
}

// ============================================================================
// Basic functionality
// ============================================================================

#[test]
fn test_basic_export() {
    let (dir, input) = setup();
    let output = dir.path().join("people.csv");

    cmd()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 records"))
        .stdout(predicate::str::contains("Done!"));

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, format!("{BOM}name,age\r\nAlice,30\r\nBob\r\n"));
}

#[test]
fn test_null_row_is_narrower_than_header() {
    let (dir, input) = setup();
    let output = dir.path().join("people.csv");

    cmd().arg(&input).arg("-o").arg(&output).assert().success();

    let content = fs::read_to_string(&output).unwrap();
    let bob_row = content.lines().last().unwrap();
    assert_eq!(bob_row, "Bob");
}

// ============================================================================
// Flags
// ============================================================================

#[test]
fn test_fields_flag_reorders_columns() {
    let (dir, input) = setup();
    let output = dir.path().join("out.csv");

    cmd()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--fields")
        .arg("age,name")
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with(&format!("{BOM}age,name\r\n30,Alice\r\n")));
}

#[test]
fn test_header_flag_overrides_column_title() {
    let (dir, input) = setup();
    let output = dir.path().join("out.csv");

    cmd()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--header")
        .arg("age=Age in Years")
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("name,Age in Years\r\n"));
}

#[test]
fn test_tab_delimiter() {
    let (dir, input) = setup();
    let output = dir.path().join("out.csv");

    cmd()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--tab")
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("name\tage\r\n"));
    assert!(content.contains("Alice\t30\r\n"));
}

#[test]
fn test_custom_delimiter() {
    let (dir, input) = setup();
    let output = dir.path().join("out.csv");

    cmd()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--delimiter")
        .arg(";")
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("name;age\r\n"));
}

#[test]
fn test_always_quote() {
    let (dir, input) = setup();
    let output = dir.path().join("out.csv");

    cmd()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--always-quote")
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("\"name\",\"age\"\r\n"));
}

#[test]
fn test_datestamp_renames_output() {
    let (dir, input) = setup();
    let output = dir.path().join("report.csv");

    cmd()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--datestamp")
        .assert()
        .success();

    let stamp = chrono::Local::now().format("%Y%m%d").to_string();
    let expected = dir.path().join(format!("report_{stamp}.csv"));
    assert!(expected.exists(), "expected {} to exist", expected.display());
    assert!(!output.exists());
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn test_empty_input_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.json");
    fs::write(&input, "[]").unwrap();

    cmd()
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty record set"));
}

#[test]
fn test_non_record_rows_fail() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("numbers.json");
    fs::write(&input, "[1, 2, 3]").unwrap();

    cmd()
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a record source"));
}

#[test]
fn test_non_array_input_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("object.json");
    fs::write(&input, r#"{"name": "Alice"}"#).unwrap();

    cmd()
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a JSON array"));
}

#[test]
fn test_invalid_json_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.json");
    fs::write(&input, "{not json").unwrap();

    cmd()
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn test_missing_input_file_fails() {
    let dir = tempdir().unwrap();

    cmd()
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_datestamp_rejects_bad_output_extension() {
    let (dir, input) = setup();

    cmd()
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("report.txt"))
        .arg("--datestamp")
        .assert()
        .failure()
        .stderr(predicate::str::contains(".csv"));
}
