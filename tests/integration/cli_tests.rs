use serial_test::serial;
use std::{
    fs,
    path::PathBuf,
    process::{Command, Output}
};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_challenge-rated"))
        .args(args)
        .env("RUST_LOG", "error")
        .env_remove("DECAY_TABLE")
        .output()
        .expect("Failed to execute challenge-rated")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("challenge-rated-{}-{}", std::process::id(), name));
    fs::write(&path, contents).expect("Failed to write temp file");

    path
}

#[test]
#[serial]
fn test_text_output() {
    let output = run(&["-e", "5,3,2", "-a", "4,2", "-p", "3,4"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stdout(&output).trim_end(),
        "Wave 1: Mild - 18% hp lost, 12% resources spent (power decay x1)\n\
         Total: Mild - 18% hp lost, 12% resources spent"
    );
}

#[test]
#[serial]
fn test_json_output_with_waves() {
    let output = run(&["-e", "30", "-e", "1/8,1/8", "--party-size", "1", "--party-level", "1", "-f", "json"]);

    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["waves"][0]["multiplier"], "0.53");
    assert_eq!(value["waves"][0]["encounterDifficulty"], "Impossible");
    assert_eq!(value["waves"][1]["encounterDifficulty"], "Mild");
    assert_eq!(value["encounterDifficulty"], "Impossible");
}

#[test]
#[serial]
fn test_no_power_decay_flag() {
    let output = run(&["-e", "30", "-p", "1", "--no-power-decay", "-f", "json"]);

    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["waves"][0]["multiplier"], "1");
}

#[test]
#[serial]
fn test_input_document() {
    let path = temp_file(
        "input.json",
        r#"{"enemyChallengeRatings": [], "allyChallengeRatings": [4, 2], "partyLevels": [3, 4]}"#
    );

    let output = run(&["-i", path.to_str().unwrap(), "-f", "json"]);
    fs::remove_file(&path).ok();

    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["encounterDifficulty"], "Unknown");
    assert_eq!(value["totalResourcesSpent"], 0);
}

#[test]
#[serial]
fn test_input_document_with_misspelled_key() {
    let path = temp_file("misspelled.json", r#"{"enemies": [30], "partyLevels": [1]}"#);

    let output = run(&["-i", path.to_str().unwrap()]);
    fs::remove_file(&path).ok();

    assert!(!output.status.success(), "Unknown keys should be rejected, not ignored");
    assert!(stdout(&output).is_empty());
}

#[test]
#[serial]
fn test_tiny_decay_multiplier_fails_cleanly() {
    let path = temp_file("tiny-decay.json", r#"{"30": {"1": 0.00000000000001}}"#);

    let output = run(&["-e", "30,30,30,30,30,30,30,30,30,30", "-p", "1", "--decay-table", path.to_str().unwrap()]);
    fs::remove_file(&path).ok();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
}

#[test]
#[serial]
fn test_custom_decay_table_file() {
    let path = temp_file("decay.json", r#"{"1": {"1": 0.5}}"#);

    let output = run(&["-e", "1", "-p", "1", "--decay-table", path.to_str().unwrap(), "-f", "json"]);
    fs::remove_file(&path).ok();

    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["waves"][0]["multiplier"], "0.5");
    assert_eq!(value["waves"][0]["encounterDifficulty"], "Brutal");
}

#[test]
#[serial]
fn test_exits_on_missing_table_entry() {
    let output = run(&["-e", "31", "-p", "1"]);

    assert!(!output.status.success(), "Process should fail with an unknown challenge rating");
    assert!(stdout(&output).is_empty());
}

#[test]
#[serial]
fn test_exits_on_invalid_rating() {
    let output = run(&["-e", "five", "-p", "1"]);

    assert!(!output.status.success());
}
