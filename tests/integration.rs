//! Integration tests for the conquest binary.
//!
//! Runs the executable with various flags and checks the report written to
//! stdout.

use std::process::{Command, Output, Stdio};

/// Runs the simulator with the given arguments and captures its output.
fn run_conquest(args: &[&str]) -> Output {
    let exe = env!("CARGO_BIN_EXE_conquest");
    Command::new(exe)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run conquest")
}

fn stdout_of(args: &[&str]) -> String {
    let output = run_conquest(args);
    assert!(output.status.success(), "exit status: {:?}", output.status);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn text_report_with_forced_wins() {
    let out = stdout_of(&["--dice", "6,1"]);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "=== CONQUEST SIMULATOR ===");
    assert_eq!(lines[1], "=== TERRITORIES ===");
    assert!(lines.contains(&"Player 1: Conquer 3 blue territories"));
    assert!(lines.contains(&"Europe now belongs to Red with 3 troops"));
    assert!(lines.contains(&"Rejected: South America -> South America: same territory"));
    assert!(lines.contains(&"Rejected: North America -> South America: same faction"));
    assert!(lines.contains(&"Africa now belongs to Blue with 2 troops"));
    assert_eq!(
        lines.last().copied(),
        Some("Territory 6: Oceania         | Faction: Blue     | Troops:  2")
    );
}

#[test]
fn text_report_with_forced_losses() {
    let out = stdout_of(&["--dice", "1,6"]);
    assert!(out.contains("North America lost 1 troop. Now has 4 troops"));
    assert!(out.contains("Asia lost 1 troop. Now has 6 troops"));
    assert!(!out.contains("now belongs to"));
}

#[test]
fn seeded_runs_are_identical() {
    let first = stdout_of(&["--seed", "2024"]);
    let second = stdout_of(&["--seed", "2024"]);
    assert_eq!(first, second);
    assert!(first.contains("Dice seed: 2024"));
}

#[test]
fn json_report_is_valid() {
    let out = stdout_of(&["--dice", "6,1", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&out).expect("stdout should be JSON");

    assert!(value["seed"].is_null());
    assert_eq!(value["attempts"].as_array().unwrap().len(), 4);
    assert_eq!(value["attempts"][0]["battle"]["attack_roll"], 6);
    assert_eq!(value["attempts"][1]["rejected"], "same territory");
    assert_eq!(value["final"][3]["name"], "Europe");
    assert_eq!(value["final"][3]["faction"], "red");
}

#[test]
fn json_report_records_seed() {
    let out = stdout_of(&["--seed", "7", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["seed"], 7);
}

#[test]
fn random_run_reports_its_seed() {
    let out = stdout_of(&["--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let seed = value["seed"].as_u64().expect("seed should be recorded");

    let replay = stdout_of(&["--seed", &seed.to_string(), "--format", "json"]);
    assert_eq!(out, replay);
}

#[test]
fn invalid_dice_fail_before_simulating() {
    let output = run_conquest(&["--dice", "6,9"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn seed_and_dice_conflict() {
    let output = run_conquest(&["--seed", "1", "--dice", "6,1"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn unparsable_dice_token_is_named() {
    let output = run_conquest(&["--dice", "6,300"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'300' is not a die value"), "stderr: {stderr}");
}
