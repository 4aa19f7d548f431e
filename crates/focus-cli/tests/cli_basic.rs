//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data directory
//! and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "focus-cli", "--"])
        .args(args)
        .env("FOCUS_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_timer_status() {
    let (stdout, _, code) = run_cli(&["timer", "status"]);
    assert!(code == 0, "Timer status failed");
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("status is not valid JSON");
    assert!(parsed.get("mode").is_some());
    assert!(parsed.get("remaining_seconds").is_some());
}

#[test]
fn test_timer_reset() {
    let (stdout, _, code) = run_cli(&["timer", "reset"]);
    assert!(code == 0, "Timer reset failed");
    assert!(stdout.contains("TimerReset"));
}

#[test]
fn test_timer_switch_rejects_unknown_mode() {
    let (_, stderr, code) = run_cli(&["timer", "switch", "nap"]);
    assert!(code != 0);
    assert!(stderr.contains("unknown mode"));
}

#[test]
fn test_timer_custom_range() {
    let (_, _, code) = run_cli(&["timer", "custom", "45"]);
    assert!(code == 0, "Custom minutes failed");

    let (_, stderr, code) = run_cli(&["timer", "custom", "300"]);
    assert!(code != 0);
    assert!(!stderr.is_empty());
}

#[test]
fn test_goals_add_and_list() {
    let (stdout, _, code) = run_cli(&["goals", "add", "ship", "the", "report"]);
    assert!(code == 0, "Goals add failed");
    let goal: serde_json::Value = serde_json::from_str(&stdout).expect("goal is not valid JSON");
    assert_eq!(goal["text"], "ship the report");
    assert_eq!(goal["completed"], false);

    let (stdout, _, code) = run_cli(&["goals", "list"]);
    assert!(code == 0, "Goals list failed");
    let list: serde_json::Value = serde_json::from_str(&stdout).expect("list is not valid JSON");
    assert!(list.as_array().is_some_and(|g| !g.is_empty()));
}

#[test]
fn test_goals_add_rejects_blank_text() {
    let (_, _, code) = run_cli(&["goals", "add", "   "]);
    assert!(code != 0, "Blank goal was accepted");
}

#[test]
fn test_stats_show() {
    let (stdout, _, code) = run_cli(&["stats", "show"]);
    assert!(code == 0, "Stats show failed");
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("stats is not valid JSON");
    assert!(parsed.get("streak").is_some());
    assert!(parsed.get("sessionsToday").is_some());
}

#[test]
fn test_sounds_list_and_current() {
    let (stdout, _, code) = run_cli(&["sounds", "list"]);
    assert!(code == 0, "Sounds list failed");
    assert!(stdout.contains("Lofi"));

    let (stdout, _, code) = run_cli(&["sounds", "current"]);
    assert!(code == 0, "Sounds current failed");
    let track: serde_json::Value =
        serde_json::from_str(&stdout).expect("track is not valid JSON");
    assert!(track.get("url").is_some());
}

#[test]
fn test_config_list() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert!(code == 0, "Config list failed");
    assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());
}

#[test]
fn test_config_get_set() {
    let (_, _, code) = run_cli(&["config", "set", "sounds.click_volume", "75"]);
    assert!(code == 0, "Config set failed");

    let (stdout, _, code) = run_cli(&["config", "get", "sounds.click_volume"]);
    assert!(code == 0, "Config get failed");
    assert_eq!(stdout.trim(), "75");
}
