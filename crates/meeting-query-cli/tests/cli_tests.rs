//! Integration tests for the `meetq` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise `find` and `check`
//! through the actual binary, including stdin/stdout piping, file I/O, and
//! error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn day_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/day.json")
}

fn blocked_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/blocked.json")
}

fn day_json() -> String {
    std::fs::read_to_string(day_json_path()).expect("day.json fixture must exist")
}

// ─────────────────────────────────────────────────────────────────────────────
// find
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn find_stdin_to_stdout_json() {
    let output = Command::cargo_bin("meetq")
        .unwrap()
        .args(["find", "--sort"])
        .write_stdin(day_json())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["attendance"], "everyone");
    assert_eq!(
        value["slots"],
        serde_json::json!([
            { "start": 0, "end": 540 },
            { "start": 570, "end": 600 },
            { "start": 720, "end": 1440 },
        ])
    );
}

#[test]
fn find_file_as_text() {
    Command::cargo_bin("meetq")
        .unwrap()
        .args(["find", "-i", day_json_path(), "--sort", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00:00-09:00 (540 min)"))
        .stdout(predicate::str::contains("09:30-10:00 (30 min)"))
        .stdout(predicate::str::contains("12:00-24:00 (720 min)"));
}

#[test]
fn find_drops_optional_attendees_when_needed() {
    Command::cargo_bin("meetq")
        .unwrap()
        .args(["find", "-i", blocked_json_path(), "--sort", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# optional attendees dropped"))
        .stdout(predicate::str::contains("00:00-07:00 (420 min)"))
        .stdout(predicate::str::contains("08:00-24:00 (960 min)"));
}

#[test]
fn find_reports_no_available_times() {
    let input = r#"{
        "events": [{ "name": "Offsite", "when": { "start": 0, "end": 1440 }, "attendees": ["alice"] }],
        "request": { "attendees": ["alice"], "duration": 30 }
    }"#;

    Command::cargo_bin("meetq")
        .unwrap()
        .args(["find", "--format", "text"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("no available times"));
}

#[test]
fn find_file_to_file() {
    let output_path = std::env::temp_dir().join("meetq-test-find-output.json");
    let _ = std::fs::remove_file(&output_path);

    Command::cargo_bin("meetq")
        .unwrap()
        .args(["find", "-i", day_json_path(), "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["slots"].as_array().unwrap().len(), 3);

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn events_default_to_empty() {
    Command::cargo_bin("meetq")
        .unwrap()
        .args(["find", "--format", "text"])
        .write_stdin(r#"{ "request": { "attendees": ["alice"], "duration": 30 } }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("00:00-24:00 (1440 min)"));
}

// ─────────────────────────────────────────────────────────────────────────────
// check
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_summarizes_document() {
    Command::cargo_bin("meetq")
        .unwrap()
        .args(["check", "-i", day_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Events:              3"))
        .stdout(predicate::str::contains("Optional attendees:  1"))
        .stdout(predicate::str::contains("Duration:            30 min"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn negative_duration_is_rejected() {
    Command::cargo_bin("meetq")
        .unwrap()
        .arg("find")
        .write_stdin(r#"{ "request": { "attendees": ["alice"], "duration": -30 } }"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse meeting query document"))
        .stderr(predicate::str::contains("must not be negative"));
}

#[test]
fn inverted_event_range_is_rejected() {
    let input = r#"{
        "events": [{ "name": "Bad", "when": { "start": "11:00", "end": "10:00" }, "attendees": ["alice"] }],
        "request": { "attendees": ["alice"], "duration": 30 }
    }"#;

    Command::cargo_bin("meetq")
        .unwrap()
        .arg("find")
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time range"));
}

#[test]
fn missing_input_file_fails() {
    Command::cargo_bin("meetq")
        .unwrap()
        .args(["find", "-i", "/nonexistent/day.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn malformed_json_fails() {
    Command::cargo_bin("meetq")
        .unwrap()
        .arg("check")
        .write_stdin("{ not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}
