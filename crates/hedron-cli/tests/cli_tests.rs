//! CLI integration tests for hedron-cli
//!
//! Tests command parsing, output formatting, and config handling.

use std::path::Path;
use std::process::Command;

/// Helper to run the CLI with arguments and an isolated home directory
fn run_hedron(home: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_hedron"))
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

// ==================== Help & Version Tests ====================

#[test]
fn test_cli_help() {
    let home = tempfile::tempdir().unwrap();
    let output = run_hedron(home.path(), &["--help"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("hedron"));
    assert!(out.contains("selector"));
    assert!(out.contains("encode"));
    assert!(out.contains("config"));
}

#[test]
fn test_cli_version() {
    let home = tempfile::tempdir().unwrap();
    let output = run_hedron(home.path(), &["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("hedron"));
}

// ==================== Selector Command Tests ====================

#[test]
fn test_selector_from_types() {
    let home = tempfile::tempdir().unwrap();
    let output = run_hedron(
        home.path(),
        &["selector", "f", "-t", "uint32", "-t", "bytes", "-t", "uint64", "-t", "bytes", "-t", "string"],
    );
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("0x4fec5a19"));
    assert!(out.contains("f(uint32,bytes,uint64,bytes,string)"));
}

#[test]
fn test_selector_from_signature_json() {
    let home = tempfile::tempdir().unwrap();
    let output = run_hedron(home.path(), &["--json", "selector", "f(uint32,uint64)"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["signature"], "f(uint32,uint64)");
    assert_eq!(json["selector"], "0xe5ec48e9");
}

#[test]
fn test_selector_expect() {
    let home = tempfile::tempdir().unwrap();
    let output = run_hedron(home.path(), &["selector", "f(uint32)", "--expect", "af4e6e52"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("0xaf4e6e52"));

    let output = run_hedron(home.path(), &["selector", "f(uint32)", "--expect", "0x4fec5a19"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("selector mismatch"));

    // not four bytes
    let output = run_hedron(home.path(), &["selector", "f(uint32)", "--expect", "0x4fec5a"]);
    assert!(!output.status.success());
}

#[test]
fn test_selector_invalid_type() {
    let home = tempfile::tempdir().unwrap();
    let output = run_hedron(home.path(), &["selector", "f", "-t", "int8"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid type name: int8"));
}

// ==================== Encode Command Tests ====================

#[test]
fn test_encode_declared_uint32() {
    let home = tempfile::tempdir().unwrap();
    let output = run_hedron(home.path(), &["encode", "f(uint32)", "-p", "16909060"]);
    assert!(output.status.success());
    let out = stdout(&output);
    let line = out.trim();
    assert_eq!(line, format!("0xaf4e6e52{}01020304", "0".repeat(56)));
}

#[test]
fn test_encode_uint256_above_u64() {
    let home = tempfile::tempdir().unwrap();
    let output = run_hedron(
        home.path(),
        &["encode", "f(uint256)", "-p", "18446744073709551616"],
    );
    assert!(output.status.success());
    let out = stdout(&output);
    let expected = format!("0xb3de648b{}1{}", "0".repeat(47), "0".repeat(16));
    assert_eq!(out.trim(), expected);
}

#[test]
fn test_encode_inferred_json() {
    let home = tempfile::tempdir().unwrap();
    let output = run_hedron(
        home.path(),
        &["--json", "encode", "f", "-p", "\"hello\"", "-p", "[\"one\",\"two\"]"],
    );
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["signature"], "f(string,string[])");
    // two head words, string entry, array with count, two offsets and two entries
    assert_eq!(json["length"], 4 + 32 * 2 + 64 + 32 * 3 + 64 * 2);
    assert!(json["data"].as_str().unwrap().starts_with("0x"));
}

#[test]
fn test_encode_arity_mismatch() {
    let home = tempfile::tempdir().unwrap();
    let output = run_hedron(home.path(), &["encode", "f(uint32,uint64)", "-p", "1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid number of parameters provided: expected 2, got 1"));
}

#[test]
fn test_encode_error_json() {
    let home = tempfile::tempdir().unwrap();
    let output = run_hedron(home.path(), &["--json", "encode", "f(uint32)", "-p", "[true]"]);
    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().is_some());
}

// ==================== Config Command Tests ====================

#[test]
fn test_config_show_defaults() {
    let home = tempfile::tempdir().unwrap();
    let output = run_hedron(home.path(), &["--json", "config", "--show"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["hex_prefix"], true);
    assert_eq!(json["output_format"], "hex");
}

#[test]
fn test_config_set_changes_output() {
    let home = tempfile::tempdir().unwrap();

    let output = run_hedron(
        home.path(),
        &["config", "--set-hex-prefix", "false", "--set-output-format", "words"],
    );
    assert!(output.status.success());
    assert!(stdout(&output).contains("Configuration saved"));
    assert!(home.path().join(".hedron").join("config.toml").exists());

    let output = run_hedron(home.path(), &["encode", "f(uint32)", "-p", "16909060"]);
    assert!(output.status.success());
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["af4e6e52", &format!("{}01020304", "0".repeat(56))[..]]);
}
