//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(
        json["config"]["log_level"], "info",
        "should use default log level"
    );
    assert!(
        json["config"]["config_file"].is_null(),
        "no config file should be reported"
    );
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".prose-vet.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "debug");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".prose-vet.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_regular_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("prose-vet.toml"), r#"log_level = "warn""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "warn");
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("nested").join("deep");
    fs::create_dir_all(&sub_dir).unwrap();

    // Config in root, run from nested/deep
    fs::write(tmp.path().join(".prose-vet.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["log_level"], "debug");
    assert!(
        json["config"]["config_file"].as_str().is_some(),
        "should find parent config"
    );
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();

    // Both configs exist — regular file (higher precedence) should win
    fs::write(tmp.path().join(".prose-vet.toml"), r#"log_level = "debug""#).unwrap();
    fs::write(tmp.path().join("prose-vet.toml"), r#"log_level = "error""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(
        json["config"]["log_level"], "error",
        "regular file should override dotfile"
    );
}

// =============================================================================
// Config Format Parsing
// =============================================================================

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("prose-vet.yaml"),
        "log_level: warn\ncheckers:\n  - spelling\n  - grammar\n",
    )
    .unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "warn");
    let checkers = json["config"]["checkers"].as_array().unwrap();
    assert_eq!(checkers.len(), 2);
    assert_eq!(checkers[0], "spelling");
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("prose-vet.json"),
        r#"{"log_level": "error", "max_input_bytes": 2048}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "error");
    assert_eq!(json["config"]["max_input_bytes"], 2048);
}

// =============================================================================
// Explicit Config & Precedence
// =============================================================================

#[test]
fn explicit_config_flag_overrides_discovery() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".prose-vet.toml"), r#"log_level = "warn""#).unwrap();

    let explicit = tmp.path().join("explicit.toml");
    fs::write(&explicit, r#"log_level = "error""#).unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["config"]["log_level"], "error");
}

#[test]
fn config_checkers_limit_check_command() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("prose-vet.toml"),
        "checkers = [\"placeholder\"]\n",
    )
    .unwrap();
    // Misspelling would normally fail; with only the placeholder checker
    // enabled the file passes.
    fs::write(tmp.path().join("doc.md"), "This has recieve in it.\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "check", "doc.md"])
        .assert()
        .success();
}

#[test]
fn cli_checkers_flag_overrides_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("prose-vet.toml"),
        "checkers = [\"placeholder\"]\n",
    )
    .unwrap();
    fs::write(tmp.path().join("doc.md"), "This has recieve in it.\n").unwrap();

    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "check",
            "--checkers",
            "spelling",
            "doc.md",
        ])
        .assert()
        .failure();
}
