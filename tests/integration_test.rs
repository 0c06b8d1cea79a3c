//! Integration tests for the LLM Council CLI

use std::process::Command;

#[test]
fn test_help_command() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration and conversation storage"));
    assert!(stdout.contains("config"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("--env-file"));
    assert!(stdout.contains("--data-dir"));
}

#[test]
fn test_version_command() {
    let output = Command::new("cargo")
        .args(["run", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("llm-council"));
    assert!(stdout.contains("0.1.0"));
}

#[test]
fn test_config_command_prints_constants() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let env_file = dir.path().join("absent.env");

    let output = Command::new("cargo")
        .args(["run", "--", "--env-file"])
        .arg(&env_file)
        .arg("config")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("chairman_model: gemini-3-pro-preview"));
    assert!(stdout.contains("api_url: https://api.tu-zi.com/v1/chat/completions"));
    assert!(stdout.contains("data_dir: data/conversations"));
    assert!(stdout.contains("gpt-5.1"));
    assert!(stdout.contains("grok-4.1"));
}
