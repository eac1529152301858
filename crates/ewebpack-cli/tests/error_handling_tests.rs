//! Tests for error messages, suggestions and exit codes.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ewebpack(cwd: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("ewebpack");
    cmd.current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("EWEBPACK_TEMPLATES__DIR")
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_malformed_config_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("ewebpack.json"), "{ not json").unwrap();

    ewebpack(temp.path())
        .arg("init")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("ewebpack.json"))
        .stderr(predicate::str::contains("not valid JSON"));

    assert!(!temp.path().join("src").exists());
}

#[test]
fn test_wrongly_typed_field_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("ewebpack.json"), r#"{"main": {"src": 42}}"#).unwrap();

    ewebpack(temp.path())
        .arg("init")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("main.src"));
}

#[test]
fn test_dot_dot_build_config_name_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("ewebpack.json"),
        r#"{"main": {"webpack-config": ".."}}"#,
    )
    .unwrap();

    ewebpack(temp.path())
        .arg("init")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("main.webpack-config"));

    assert!(!temp.path().join("src").exists());
}

#[test]
fn test_missing_target_is_user_error() {
    let temp = TempDir::new().unwrap();

    ewebpack(temp.path())
        .args(["init", "does-not-exist"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_missing_settings_file_is_configuration_error() {
    let temp = TempDir::new().unwrap();

    ewebpack(temp.path())
        .args(["--config", "absent.toml", "init"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_template_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    let empty = temp.path().join("empty-templates");
    fs::create_dir(&empty).unwrap();
    let project = temp.path().join("app");
    fs::create_dir(&project).unwrap();

    ewebpack(temp.path())
        .env("EWEBPACK_TEMPLATES__DIR", &empty)
        .args(["init", "app"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("electron-main"));

    assert!(!project.join("ewebpack.json").exists());
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let temp = TempDir::new().unwrap();

    ewebpack(temp.path())
        .args(["--quiet", "--verbose", "init"])
        .assert()
        .code(2);
}

#[test]
fn test_verbose_logs_resolved_path() {
    let temp = TempDir::new().unwrap();

    ewebpack(temp.path())
        .args(["init", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Resolved path"));
}
