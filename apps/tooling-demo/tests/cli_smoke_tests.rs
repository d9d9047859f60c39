//! CLI smoke tests for the tooling-demo binary
//!
//! These tests verify that the CLI commands work correctly, including
//! configuration handling, help output, and the printed demo sequences.

use std::fs;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Helper to run the tooling-demo binary with given arguments
fn run_tooling_demo(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_tooling-demo"))
        .args(args)
        .env_remove("APP__HOME_DIR")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute tooling-demo")
}

fn write_config(dir: &TempDir, yaml: &str) -> String {
    let path = dir.path().join("config.yaml");
    fs::write(&path, yaml).expect("Failed to write config");
    path.to_string_lossy().to_string()
}

#[test]
fn test_cli_help_command() {
    let output = run_tooling_demo(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("tooling-demo"), "Should contain binary name");
    assert!(
        stdout.contains("Usage:") || stdout.contains("USAGE:"),
        "Should contain usage information"
    );
    assert!(stdout.contains("users"), "Should contain 'users' subcommand");
    assert!(stdout.contains("utils"), "Should contain 'utils' subcommand");
    assert!(stdout.contains("idioms"), "Should contain 'idioms' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
}

#[test]
fn test_cli_version_command() {
    let output = run_tooling_demo(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("tooling-demo"));
    assert!(stdout.contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    let output = run_tooling_demo(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error:") || stderr.contains("unrecognized"),
        "Should report the unknown subcommand"
    );
}

#[test]
fn test_default_command_runs_users_demo() {
    let output = run_tooling_demo(&[]);

    assert!(output.status.success(), "Default run should exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Hello, alice! Your account is active."));
    assert!(stdout.contains("Hello, bob! Your account is inactive."));
    assert!(stdout.contains("User Statistics:"));
    assert!(stdout.contains("  Total: 3"));
    assert!(stdout.contains("  Active: 2"));
    assert!(stdout.contains("  Inactive: 1"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let output = run_tooling_demo(&["-vv", "users"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stdout.contains("Tooling demo starting"));
    assert!(stderr.contains("Tooling demo starting"));
}

#[test]
fn test_utils_command() {
    let output = run_tooling_demo(&["utils"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("5 + 3 = 8"));
    assert!(stdout.contains("Formatted name: John Doe"));
    assert!(stdout.contains("Calculator result: 12.0"));
}

#[test]
fn test_idioms_command() {
    let output = run_tooling_demo(&["idioms"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("append_to_list: [1] then [2]"));
}

#[test]
fn test_print_config() {
    let output = run_tooling_demo(&["--print-config"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("logging:"));
    assert!(stdout.contains("console_level"));
    assert!(
        !stdout.contains("User Statistics"),
        "print-config should exit before the demo"
    );
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.yaml");
    let output = run_tooling_demo(&["--config", &missing.to_string_lossy()]);

    assert!(!output.status.success(), "Missing config should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config file not found"));
}

#[test]
fn test_config_disables_validation() {
    let dir = TempDir::new().unwrap();
    let cfg = write_config(
        &dir,
        r#"
modules:
  users_info:
    validation: "off"
"#,
    );

    let output = run_tooling_demo(&["--config", &cfg, "users"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("accepted eve <not-an-email>"));
    assert!(!stdout.contains("rejected:"));
}

#[test]
fn test_invalid_module_config_fails() {
    let dir = TempDir::new().unwrap();
    let cfg = write_config(
        &dir,
        r#"
modules:
  users_info:
    validation: "sometimes"
"#,
    );

    let output = run_tooling_demo(&["--config", &cfg, "users"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid users_info config"));
}

#[test]
fn test_file_logging_writes_under_home_dir() {
    let dir = TempDir::new().unwrap();
    let cfg = write_config(
        &dir,
        &format!(
            r#"
home_dir: "{}"
logging:
  default:
    console_level: "off"
    file: "logs/demo.log"
    file_level: "info"
"#,
            dir.path().to_string_lossy()
        ),
    );

    let output = run_tooling_demo(&["--config", &cfg, "utils"]);

    assert!(output.status.success());
    let log = fs::read_to_string(dir.path().join("logs/demo.log")).unwrap();
    assert!(log.contains("Tooling demo starting"));
}
