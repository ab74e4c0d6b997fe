//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against a throwaway HOME so the
//! real user data directory is never touched.

use std::path::Path;
use std::process::Command;

fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "idealot-cli", "--"])
        .args(args)
        .env("HOME", home)
        .env("IDEALOT_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn add_card(home: &Path, text: &str) -> String {
    let (stdout, stderr, code) = run_cli(home, &["card", "add", text]);
    assert_eq!(code, 0, "card add failed: {stderr}");
    let event: serde_json::Value = serde_json::from_str(&stdout).expect("event JSON");
    assert_eq!(event["type"], "CardAdded");
    event["id"].as_str().expect("card id").to_string()
}

#[test]
fn test_card_add_and_list() {
    let home = tempfile::tempdir().unwrap();
    let id = add_card(home.path(), "water the plants");

    let (stdout, _, code) = run_cli(home.path(), &["card", "list"]);
    assert_eq!(code, 0);
    let cards: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let cards = cards.as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["id"], id.as_str());
    assert_eq!(cards[0]["zone"], "Someday");
}

#[test]
fn test_add_rejects_empty_text() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["card", "add", "   "]);
    assert_ne!(code, 0);
}

#[test]
fn test_board_status_counts() {
    let home = tempfile::tempdir().unwrap();
    add_card(home.path(), "one");
    add_card(home.path(), "two");

    let (stdout, _, code) = run_cli(home.path(), &["board", "status"]);
    assert_eq!(code, 0);
    let snapshot: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(snapshot["type"], "BoardSnapshot");
    assert_eq!(snapshot["total"], 2);
    assert_eq!(snapshot["someday_count"], 2);
}

#[test]
fn test_drift_tick_moves_a_fresh_card_toward_do() {
    let home = tempfile::tempdir().unwrap();
    let id = add_card(home.path(), "drifter");

    let (stdout, _, _) = run_cli(home.path(), &["card", "list"]);
    let cards: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let x_before = cards[0]["x"].as_f64().unwrap();

    let (stdout, stderr, code) = run_cli(home.path(), &["drift", "tick", "--count", "10"]);
    assert_eq!(code, 0, "drift tick failed: {stderr}");
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["type"], "DriftTicked");
    assert_eq!(event["moved"], 10);

    let (stdout, _, _) = run_cli(home.path(), &["card", "list"]);
    let cards: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(cards[0]["id"], id.as_str());
    let x_after = cards[0]["x"].as_f64().unwrap();
    assert!(x_after < x_before, "fresh card should drift left toward Do");
}

#[test]
fn test_pinned_card_ignores_drift() {
    let home = tempfile::tempdir().unwrap();
    let id = add_card(home.path(), "pinned idea");
    let (_, _, code) = run_cli(home.path(), &["card", "pin", &id]);
    assert_eq!(code, 0);

    let (stdout, _, _) = run_cli(home.path(), &["drift", "tick", "--count", "5"]);
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["moved"], 0);
}

#[test]
fn test_remove_requires_confirmation() {
    let home = tempfile::tempdir().unwrap();
    let id = add_card(home.path(), "doomed");

    let (_, stderr, code) = run_cli(home.path(), &["card", "remove", &id]);
    assert_ne!(code, 0);
    assert!(stderr.contains("confirmation"), "got: {stderr}");

    let (stdout, _, code) = run_cli(home.path(), &["card", "remove", &id, "--yes"]);
    assert_eq!(code, 0);
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["type"], "CardRemoved");
}

#[test]
fn test_drag_reclassifies_zone() {
    let home = tempfile::tempdir().unwrap();
    let id = add_card(home.path(), "urgent after all");

    let (stdout, _, code) = run_cli(home.path(), &["card", "drag", &id, "10", "100"]);
    assert_eq!(code, 0);
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["type"], "CardDragged");
    assert_eq!(event["zone"], "Do");
}

#[test]
fn test_review_list_empty_for_fresh_board() {
    let home = tempfile::tempdir().unwrap();
    add_card(home.path(), "brand new");
    let (stdout, _, code) = run_cli(home.path(), &["review", "list"]);
    assert_eq!(code, 0);
    let due: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(due.as_array().unwrap().is_empty());
}

#[test]
fn test_config_get_and_set() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "drift.cooldown_ms"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "30000");

    let (_, _, code) = run_cli(home.path(), &["config", "set", "drift.cooldown_ms", "60000"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(home.path(), &["config", "get", "drift.cooldown_ms"]);
    assert_eq!(stdout.trim(), "60000");
}
