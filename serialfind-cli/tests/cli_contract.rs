//! Integration tests for core CLI contract behavior.
//!
//! These run against whatever serial hardware the host has, so they only
//! assert on outcomes that hold with or without attached devices.

use {predicates::prelude::*, std::fs, tempfile::tempdir};

/// A token no real device carries.
const IMPOSSIBLE_TOKEN: &str = "serialfind-no-such-device-7f3a";

fn cli_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("serialfind");
    cmd.env_remove("SERIALFIND_BAUD").env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_exits_zero_and_writes_stdout_only() {
    cli_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serialfind"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn version_exits_zero_and_writes_stdout_only() {
    cli_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("serialfind"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn missing_subcommand_is_usage_error() {
    cli_cmd().assert().code(2);
}

#[test]
fn list_usb_json_returns_array() {
    let output = cli_cmd()
        .args(["list-usb", "--json"])
        .output()
        .expect("command should execute");

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let ports = parsed.as_array().expect("should be a JSON array");
    for port in ports {
        assert!(
            port["hwid"]
                .as_str()
                .is_some_and(|hwid| hwid.contains("USB"))
        );
    }
}

#[test]
fn list_usb_plain_output_uses_descriptor_lines() {
    let output = cli_cmd()
        .arg("list-usb")
        .output()
        .expect("command should execute");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout should be UTF-8");
    for line in stdout.lines() {
        assert!(line.contains(" - "), "unexpected line: {line}");
        assert!(line.ends_with(']') && line.contains("[USB"), "unexpected line: {line}");
    }
}

#[test]
fn find_impossible_token_fails_with_not_found() {
    cli_cmd()
        .args(["find", IMPOSSIBLE_TOKEN])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No USB serial device"));
}

#[test]
fn find_json_error_keeps_stdout_clean() {
    cli_cmd()
        .args(["find", "--json", IMPOSSIBLE_TOKEN])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn connect_without_baud_is_usage_error() {
    let dir = tempdir().expect("tempdir should be created");
    let missing_config = dir.path().join("none.toml");

    cli_cmd()
        .current_dir(dir.path())
        .arg("--config")
        .arg(missing_config.as_os_str())
        .args(["connect", IMPOSSIBLE_TOKEN])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("baud"));
}

#[test]
fn connect_uses_baud_from_config_file() {
    let dir = tempdir().expect("tempdir should be created");
    let config = dir.path().join("serialfind.toml");
    fs::write(&config, "[connection]\nbaud = 9600\n").expect("write config");

    // Baud resolves from the file, so the failure is the search, not usage.
    cli_cmd()
        .current_dir(dir.path())
        .arg("--config")
        .arg(config.as_os_str())
        .args(["connect", IMPOSSIBLE_TOKEN])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No USB serial device"));
}

#[test]
fn connect_uses_baud_from_env() {
    let dir = tempdir().expect("tempdir should be created");

    cli_cmd()
        .current_dir(dir.path())
        .arg("--config")
        .arg(dir.path().join("none.toml").as_os_str())
        .env("SERIALFIND_BAUD", "115200")
        .args(["connect", IMPOSSIBLE_TOKEN])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No USB serial device"));
}

#[test]
fn completions_bash_writes_script() {
    cli_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("serialfind"));
}
