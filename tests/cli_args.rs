//! Tests for the demo binary's command line handling.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn demo_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shared-state-demo"))
}

#[test]
fn help_lists_overrides() {
    let output = demo_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--duration-secs"));
    assert!(stdout.contains("--temperature-interval-ms"));
}

#[test]
fn invalid_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[producer]\ngreetings = []\n").unwrap();

    let output = demo_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("At least one greeting must be configured"));
}

#[test]
fn short_run_prints_summary() {
    let dir = TempDir::new().unwrap();
    let output = demo_cmd()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["--duration-secs", "1"])
        .args(["--temperature-interval-ms", "20"])
        .args(["--greeting-interval-ms", "20"])
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("producer:"));
    assert!(stdout.contains("dashboard:"));
    assert!(stdout.contains("thermometer:"));
}
