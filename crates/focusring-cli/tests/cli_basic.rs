//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data directory
//! and verify outputs.

use std::process::Command;
use std::sync::{Mutex, MutexGuard};

// All tests share the dev data directory; serialize them.
static CLI_LOCK: Mutex<()> = Mutex::new(());

fn lock() -> MutexGuard<'static, ()> {
    CLI_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "focusring-cli", "--"])
        .args(args)
        .env("FOCUSRING_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn timer_status_prints_snapshot_json() {
    let _guard = lock();
    let (stdout, _stderr, code) = run_cli(&["timer", "status"]);
    assert_eq!(code, 0, "timer status failed");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("status is JSON");
    assert_eq!(value["type"], "StateSnapshot");
    assert!(value["remaining_secs"].is_u64());
}

#[test]
fn timer_start_then_pause() {
    let _guard = lock();
    let (_stdout, _stderr, code) = run_cli(&["timer", "start"]);
    assert_eq!(code, 0, "timer start failed");
    let (_stdout, _stderr, code) = run_cli(&["timer", "pause"]);
    assert_eq!(code, 0, "timer pause failed");

    let (stdout, _stderr, code) = run_cli(&["timer", "status"]);
    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["running"], false);
}

#[test]
fn timer_reset_returns_to_fresh_work_period() {
    let _guard = lock();
    let (_stdout, _stderr, code) = run_cli(&["timer", "reset"]);
    assert_eq!(code, 0, "timer reset failed");

    let (stdout, _stderr, code) = run_cli(&["timer", "status"]);
    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["mode"], "work");
    assert_eq!(value["completed_sessions"], 0);
    assert_eq!(value["running"], false);
}

#[test]
fn timer_toggle_flips_running() {
    let _guard = lock();
    let (_stdout, _stderr, code) = run_cli(&["timer", "reset"]);
    assert_eq!(code, 0);
    let (stdout, _stderr, code) = run_cli(&["timer", "toggle"]);
    assert_eq!(code, 0, "timer toggle failed");
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["type"], "TimerStarted");
}

#[test]
fn todo_add_toggle_delete_flow() {
    let _guard = lock();
    let (stdout, _stderr, code) = run_cli(&["todo", "add", "integration test entry"]);
    assert_eq!(code, 0, "todo add failed");
    let id = stdout
        .trim()
        .strip_prefix("Todo added: ")
        .expect("add output format")
        .to_string();

    let (stdout, _stderr, code) = run_cli(&["todo", "list"]);
    assert_eq!(code, 0, "todo list failed");
    let list: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(list
        .as_array()
        .unwrap()
        .iter()
        .any(|t| t["id"].to_string() == id));

    let (stdout, _stderr, code) = run_cli(&["todo", "toggle", &id]);
    assert_eq!(code, 0, "todo toggle failed");
    assert!(stdout.contains("Todo toggled"));

    let (stdout, _stderr, code) = run_cli(&["todo", "delete", &id]);
    assert_eq!(code, 0, "todo delete failed");
    assert!(stdout.contains("Todo deleted"));
}

#[test]
fn todo_unknown_id_is_a_no_op() {
    let _guard = lock();
    let (stdout, _stderr, code) = run_cli(&["todo", "toggle", "1"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Todo not found: 1"));
}

#[test]
fn todo_empty_text_fails() {
    let _guard = lock();
    let (_stdout, stderr, code) = run_cli(&["todo", "add", "   "]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}

#[test]
fn config_get_and_set() {
    let _guard = lock();
    let (stdout, _stderr, code) = run_cli(&["config", "get", "timer.work_minutes"]);
    assert_eq!(code, 0, "config get failed");
    assert!(!stdout.trim().is_empty());

    let (_stdout, _stderr, code) = run_cli(&["config", "set", "timer.work_minutes", "25"]);
    assert_eq!(code, 0, "config set failed");
}

#[test]
fn config_list_is_json() {
    let _guard = lock();
    let (stdout, _stderr, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(value["timer"].is_object());
}

#[test]
fn config_unknown_key_fails() {
    let _guard = lock();
    let (_stdout, _stderr, code) = run_cli(&["config", "get", "timer.no_such_key"]);
    assert_ne!(code, 0);
}

#[test]
fn theme_list_and_select() {
    let _guard = lock();
    let (stdout, _stderr, code) = run_cli(&["theme", "list"]);
    assert_eq!(code, 0, "theme list failed");
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(value.as_object().unwrap().contains_key("default"));

    let (_stdout, _stderr, code) = run_cli(&["theme", "set", "dark"]);
    assert_eq!(code, 0, "theme set failed");

    let (stdout, _stderr, code) = run_cli(&["theme", "current"]);
    assert_eq!(code, 0, "theme current failed");
    assert_eq!(stdout.trim(), "dark");
}

#[test]
fn theme_set_unknown_key_fails() {
    let _guard = lock();
    let (_stdout, stderr, code) = run_cli(&["theme", "set", "no-such-theme"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}
