use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn hook() -> Command {
    Command::new(env!("CARGO_BIN_EXE_version_stamp"))
}

#[test]
fn writes_version_module_from_stdin_props() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("fritzexporter")).unwrap();

    hook()
        .current_dir(root.path())
        .write_stdin(r#"{"version":"1.4.2"}"#)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(root.path().join("fritzexporter/_version.py")).unwrap();
    assert_eq!(written, "VERSION = \"1.4.2\"");
}

#[test]
fn fails_when_package_directory_is_missing() {
    let root = tempfile::tempdir().unwrap();

    let assert = hook()
        .current_dir(root.path())
        .write_stdin(r#"{"version":"0.0.1-rc1"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: Failed to write file"));

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert_eq!(stderr.matches("os error").count(), 1, "stderr: {stderr}");

    assert!(!root.path().join("fritzexporter").exists());
}

#[test]
fn fails_on_props_without_version() {
    let root = tempfile::tempdir().unwrap();

    hook()
        .current_dir(root.path())
        .write_stdin(r#"{"tag":"v1"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid hook properties"));
}
