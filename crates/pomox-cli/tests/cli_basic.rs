//! Basic CLI E2E tests.
//!
//! Each test runs the compiled binary against its own temporary data
//! directory.

use std::path::Path;
use std::process::Command;

const QUIET_CONFIG: &str = r#"{
  "integrations": {
    "focusMode": false,
    "notifications": false,
    "apps": { "kill": [], "reopen": [] },
    "slack": { "workspaces": [] }
  }
}"#;

const STALE_STATE: &str = r#"{
  "active": true,
  "startTime": "2024-01-15T10:00:00.000Z",
  "duration": 25,
  "endTime": "2024-01-15T10:25:00.000Z",
  "daemonPid": 4194000
}"#;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_pomox"))
        .args(args)
        .env("POMOX_HOME", home)
        .env_remove("POMOX_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn read_state(home: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(home.join("state.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_status_ready_when_idle() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["status"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "Ready");
}

#[test]
fn test_status_completing_after_end_time() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("state.json"), STALE_STATE).unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["status"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "Completing...");
}

#[test]
fn test_start_rejected_while_active() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("state.json"), STALE_STATE).unwrap();

    let (stdout, _, code) = run_cli(home.path(), &["start"]);
    assert_ne!(code, 0);
    assert!(stdout.contains("Pomodoro already active - 00:00 remaining"));
    assert!(stdout.contains("Run \"pomox end\" to end early."));
}

#[test]
fn test_start_rejects_zero_duration() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["start", "--duration", "0"]);
    assert_ne!(code, 0);
    assert!(!home.path().join("state.json").exists());
}

#[test]
fn test_end_when_idle() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["end"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "No active pomodoro");
}

#[test]
fn test_end_clears_stale_timer() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("config.json"), QUIET_CONFIG).unwrap();
    std::fs::write(home.path().join("state.json"), STALE_STATE).unwrap();
    std::fs::write(home.path().join("daemon.pid"), "4194000").unwrap();

    let (stdout, _, code) = run_cli(home.path(), &["end"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "Pomodoro ended");

    let state = read_state(home.path());
    assert_eq!(state["active"], false);
    assert_eq!(state["endTime"], "");
    assert!(!home.path().join("daemon.pid").exists());

    let (stdout, _, _) = run_cli(home.path(), &["status"]);
    assert_eq!(stdout.trim(), "Ready");
}

#[test]
fn test_config_show() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["config"]);
    assert_eq!(code, 0);

    let expected_path = home.path().join("config.json");
    let (header, body) = stdout.split_once("\n\n").unwrap();
    assert_eq!(header, format!("Config file: {}", expected_path.display()));
    let config: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(config["duration"], 25);
    assert_eq!(config["integrations"]["focusMode"], true);
}

#[test]
fn test_config_set_then_get() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["config", "set", "duration", "50"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "duration"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "50");
}

#[test]
fn test_config_set_unknown_key_fails() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "nope", "1"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown config key: nope"));
}

#[test]
fn test_daemon_rejects_invalid_duration() {
    let home = tempfile::tempdir().unwrap();
    for raw in ["invalid", "0", "-1000"] {
        let (_, stderr, code) = run_cli(home.path(), &["daemon", raw]);
        assert_eq!(code, 1, "daemon {raw}");
        assert!(stderr.contains("Invalid duration"));
    }
}
