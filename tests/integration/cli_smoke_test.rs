//! CLI Smoke Test
//!
//! Runs each subcommand of the compiled binary and checks exit status and
//! output. Runs inside a temporary working directory so no stray config.toml
//! is picked up.

use rust_decimal::Decimal;
use std::io::Write;
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    let workdir = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_collection-quiz"))
        .args(args)
        .current_dir(workdir.path())
        .env_remove("QUIZ_LETTERS__SCOPE")
        .env_remove("QUIZ_OUTPUT__FORMAT")
        .output()
        .unwrap()
}

fn run_cli_with_env(args: &[&str], key: &str, value: &str) -> Output {
    let workdir = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_collection-quiz"))
        .args(args)
        .current_dir(workdir.path())
        .env(key, value)
        .output()
        .unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn decimal_at(value: &serde_json::Value) -> Decimal {
    value.as_str().unwrap().parse().unwrap()
}

#[test]
fn test_even_numbers_command() {
    let output = run_cli(&["even-numbers", "10"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Values: 2 4 6 8"));
}

#[test]
fn test_even_numbers_out_of_range_fails() {
    let output = run_cli(&["even-numbers", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Argument out of range"));
}

#[test]
fn test_squares_command_json() {
    let output = run_cli(&["squares", "10", "--format", "json"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let parsed: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(parsed["values"], serde_json::json!([49]));
}

#[test]
fn test_squares_overflow_fails() {
    let output = run_cli(&["squares", "40000"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Overflow"));
}

#[test]
fn test_family_stats_command() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id": 1, "persons": [{{"age": 10}}, {{"age": 20}}, {{"age": 30}}]}}, {{"id": 2, "persons": []}}]"#
    )
    .unwrap();

    let output = run_cli(&[
        "family-stats",
        "--input",
        file.path().to_str().unwrap(),
        "--format",
        "json",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let parsed: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(parsed[0]["family_id"], 1);
    assert_eq!(parsed[0]["member_count"], 3);
    assert_eq!(decimal_at(&parsed[0]["average_age"]), Decimal::from(20));
    assert_eq!(parsed[1]["member_count"], 0);
    assert_eq!(decimal_at(&parsed[1]["average_age"]), Decimal::ZERO);
}

#[test]
fn test_family_stats_null_document_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "null").unwrap();

    let output = run_cli(&["family-stats", "--input", file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("must not be null"));
}

#[test]
fn test_letters_command() {
    let output = run_cli(&["letters", "Hello, World! 123"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Distinct letters: 7"));
    assert!(stdout.contains("Total letters: 10"));
}

#[test]
fn test_letters_without_text_fails() {
    let output = run_cli(&["letters"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("must not be null: text"));
}

#[test]
fn test_letters_ascii_scope_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "Ärger über Öl").unwrap();

    let output = run_cli(&[
        "letters",
        "--input",
        file.path().to_str().unwrap(),
        "--scope",
        "ascii",
        "--format",
        "json",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let parsed: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    let letters: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["letter"].as_str().unwrap())
        .collect();
    assert_eq!(letters, vec!["R", "G", "E", "B", "L"]);
}

#[test]
fn test_invalid_configured_scope_fails() {
    let output = run_cli_with_env(&["letters", "Hello"], "QUIZ_LETTERS__SCOPE", "klingon");
    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Configuration error"), "stderr: {}", stderr);
    assert!(stderr.contains("klingon"), "stderr: {}", stderr);
}

#[test]
fn test_configured_scope_from_env() {
    let output = run_cli_with_env(
        &["letters", "Ärger", "--format", "json"],
        "QUIZ_LETTERS__SCOPE",
        "ascii",
    );
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let parsed: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 3);
}
