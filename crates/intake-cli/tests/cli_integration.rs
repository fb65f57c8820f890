//! CLI Integration Tests
//!
//! These tests drive the `intake` binary end-to-end with answers files in a
//! temporary directory.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("intake").expect("Failed to find intake binary")
}

/// Write `json` to `answers.json` inside `dir`
fn answers_file(dir: &TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("answers.json");
    std::fs::write(&path, json).expect("Failed to write answers file");
    path
}

const COMPLETE: &str = r#"{
    "kidAge": 5,
    "kidDiagnosisInfo": "ASD",
    "educationalSetting": "Public School",
    "requestedServices": ["Speech Therapy", "Occupational Therapy"],
    "serviceFrequency": "Weekly",
    "parentName": "Jane Doe",
    "parentEmail": "jane@example.com",
    "parentContact": "123-456-7890"
}"#;

// ============================================================================
// Steps / Template Tests
// ============================================================================

#[test]
fn test_steps_lists_every_field() {
    cli_cmd()
        .arg("steps")
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1 (Child's Details)"))
        .stdout(predicate::str::contains("Step 2 (Required Services)"))
        .stdout(predicate::str::contains("Step 3 (Parent/Guardian Information)"))
        .stdout(predicate::str::contains("parentContact"))
        .stdout(predicate::str::contains("Additional Comments (optional)"));
}

#[test]
fn test_template_is_an_empty_record() {
    let output = cli_cmd().arg("template").output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 9);
    assert_eq!(object["kidAge"], "");
    assert_eq!(object["requestedServices"], serde_json::json!([]));
}

// ============================================================================
// Submit Tests
// ============================================================================

#[test]
fn test_submit_complete_answers() {
    let dir = TempDir::new().unwrap();
    let path = answers_file(&dir, COMPLETE);

    cli_cmd()
        .arg("submit")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Thank You! Your Request Has Been Submitted.",
        ))
        .stdout(predicate::str::contains(
            "Requested Services: Speech Therapy, Occupational Therapy",
        ))
        .stdout(predicate::str::contains("Additional Comments: (none)"))
        .stdout(predicate::str::contains("\"parentEmail\": \"jane@example.com\""));
}

#[test]
fn test_submit_blocks_on_first_step() {
    let dir = TempDir::new().unwrap();
    let path = answers_file(&dir, r#"{ "kidAge": -1 }"#);

    cli_cmd()
        .arg("submit")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Step 1 (Child's Details)"))
        .stdout(predicate::str::contains("kidAge: Age cannot be negative."))
        .stdout(predicate::str::contains(
            "kidDiagnosisInfo: A diagnosis or reason for services is required.",
        ))
        .stdout(predicate::str::contains("Thank You").not());
}

#[test]
fn test_submit_blocks_on_guardian_step() {
    let dir = TempDir::new().unwrap();
    let json = COMPLETE.replace("jane@example.com", "a@b");
    let path = answers_file(&dir, &json);

    cli_cmd()
        .arg("submit")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Step 3 (Parent/Guardian Information)"))
        .stdout(predicate::str::contains("parentEmail: Invalid email address."))
        .stdout(predicate::str::contains("parentName").not());
}

#[test]
fn test_submit_missing_file() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .arg("submit")
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read answers"));
}

#[test]
fn test_submit_unknown_field() {
    let dir = TempDir::new().unwrap();
    let path = answers_file(&dir, r#"{ "petName": "Rex" }"#);

    cli_cmd()
        .arg("submit")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("petName"));
}

#[test]
fn test_verbose_flag_accepted() {
    cli_cmd().args(["-vv", "steps"]).assert().success();
}
