mod common;

use assert_cmd::prelude::*;
use common::live_params;
use std::process::Command;
use tempfile::TempDir;

#[test]
fn test_cli_help_command() {
    let mut cmd = Command::cargo_bin("dbconn").unwrap();
    let output = cmd.arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("connect"));
    assert!(stdout.contains("init"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = Command::cargo_bin("dbconn").unwrap();
    let output = cmd.arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dbconn"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_command_prints_hint() {
    let mut cmd = Command::cargo_bin("dbconn").unwrap();
    let output = cmd.output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--help"));
}

#[test]
fn test_connect_to_closed_port_reports_error() {
    let mut cmd = Command::cargo_bin("dbconn").unwrap();
    cmd.args(["connect", "--host", "127.0.0.1", "--port", "1"]);
    let output = cmd.output().unwrap();

    assert!(!output.status.success(), "Failed connect should exit non-zero");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error while connecting to MySQL:"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not connect to 127.0.0.1:1"));
}

#[test]
fn test_connect_with_missing_config_fails() {
    let mut cmd = Command::cargo_bin("dbconn").unwrap();
    cmd.args(["connect", "--config", "no-such-file.toml"]);
    let output = cmd.output().unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no-such-file.toml"));
}

#[test]
fn test_init_then_refuse_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dbconn.toml");
    let path_arg = path.to_string_lossy().into_owned();

    let mut first = Command::cargo_bin("dbconn").unwrap();
    let output = first.args(["init", "--output", &path_arg]).output().unwrap();
    assert!(output.status.success());
    assert!(path.exists());

    let mut second = Command::cargo_bin("dbconn").unwrap();
    let output = second.args(["init", "--output", &path_arg]).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
}

#[test]
fn test_connect_to_live_server_reports_success() {
    let Some(params) = live_params() else {
        println!("⚠️  DBCONN_TEST_HOST not set, skipping live test");
        return;
    };

    let mut cmd = Command::cargo_bin("dbconn").unwrap();
    cmd.env("DBCONN_CLI_TEST_PASSWORD", &params.password)
        .args(["connect", "--host", &params.host])
        .args(["--port", &params.port.to_string()])
        .args(["--user", &params.user])
        .args(["--password-env", "DBCONN_CLI_TEST_PASSWORD"]);
    if let Some(database) = &params.database {
        cmd.args(["--database", database]);
    }
    let output = cmd.output().unwrap();

    assert!(output.status.success(), "Connect should exit 0 on success");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Database connection successful"));
    assert!(!stdout.contains("Error while connecting"));
}
