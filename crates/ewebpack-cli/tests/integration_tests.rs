//! Integration tests for the `ewebpack` binary.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use assert_cmd::Command;
use ewebpack_adapters::builtin_templates;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the user's settings and log filter.
fn ewebpack(cwd: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("ewebpack");
    cmd.current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("EWEBPACK_TEMPLATES__DIR")
        .env_remove("EWEBPACK_OUTPUT__NO_COLOR")
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env("NO_COLOR", "1");
    cmd
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    ewebpack(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Electron"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    ewebpack(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_command_warns_and_succeeds() {
    let temp = TempDir::new().unwrap();
    ewebpack(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("You didn't specify a command. Try --help"));
}

#[test]
fn test_init_empty_directory() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    ewebpack(root)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("initialized"));

    let config: serde_json::Value = serde_json::from_str(&read(root.join("ewebpack.json"))).unwrap();
    assert_eq!(config["main"]["src"], "src/main");
    assert_eq!(config["renderer"]["webpack-override"], false);

    assert_eq!(read(root.join("src/main/main.js")), builtin_templates::ELECTRON_MAIN);
    assert_eq!(read(root.join("src/renderer/renderer.js")), "");
    assert_eq!(
        read(root.join("src/main/webpack.config.js")),
        builtin_templates::MAIN_WEBPACK_CONFIG
    );
    assert_eq!(
        read(root.join("src/renderer/webpack.config.js")),
        builtin_templates::RENDERER_WEBPACK_CONFIG
    );
}

#[test]
fn test_init_aliases() {
    for alias in ["initialize", "i"] {
        let temp = TempDir::new().unwrap();
        ewebpack(temp.path()).arg(alias).assert().success();
        assert!(temp.path().join("src/main/main.js").exists());
    }
}

#[test]
fn test_rerun_keeps_config_and_refreshes_build_configs() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    ewebpack(root).arg("init").assert().success();

    let config_before = read(root.join("ewebpack.json"));
    fs::write(root.join("src/renderer/webpack.config.js"), "stale").unwrap();

    ewebpack(root)
        .args(["init", "."])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(read(root.join("ewebpack.json")), config_before);
    assert_eq!(
        read(root.join("src/renderer/webpack.config.js")),
        builtin_templates::RENDERER_WEBPACK_CONFIG
    );
}

#[test]
fn test_existing_source_dir_refused_for_named_target() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("app");
    fs::create_dir_all(project.join("src/main")).unwrap();

    ewebpack(temp.path())
        .args(["init", "app"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    assert!(!project.join("src/main/main.js").exists());
    assert!(!project.join("src/main/webpack.config.js").exists());
    assert!(!project.join("src/renderer").exists());
}

#[test]
fn test_force_overwrites_entry_scripts() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("app");
    fs::create_dir_all(project.join("src/main")).unwrap();
    fs::create_dir_all(project.join("src/renderer")).unwrap();
    fs::write(project.join("src/main/main.js"), "old").unwrap();
    fs::write(project.join("src/renderer/renderer.js"), "old").unwrap();

    ewebpack(temp.path())
        .args(["init", "app", "--force", "--yes"])
        .assert()
        .success();

    assert_eq!(read(project.join("src/main/main.js")), builtin_templates::ELECTRON_MAIN);
    assert_eq!(read(project.join("src/renderer/renderer.js")), "");
}

#[test]
fn test_partial_config_is_merged() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("ewebpack.json"), r#"{"main": {"src": "app/main"}}"#).unwrap();

    ewebpack(root).arg("init").assert().success();

    assert!(root.join("app/main/main.js").exists());
    assert!(root.join("app/main/webpack.config.js").exists());
    assert!(root.join("src/renderer/renderer.js").exists());
    assert_eq!(read(root.join("ewebpack.json")), r#"{"main": {"src": "app/main"}}"#);
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    ewebpack(temp.path())
        .args(["init", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("write config"))
        .stdout(predicate::str::contains("main.js"));

    assert!(fs::read_dir(temp.path()).unwrap().next().is_none());
}

#[test]
fn test_config_show_prints_merged_configuration() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("ewebpack.json"),
        r#"{"renderer": {"src": "ui"}}"#,
    )
    .unwrap();

    ewebpack(temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""src": "ui""#))
        .stdout(predicate::str::contains(r#""src": "src/main""#));
}

#[test]
fn test_config_list_prints_settings() {
    let temp = TempDir::new().unwrap();
    ewebpack(temp.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no_color"));
}

#[test]
fn test_templates_dir_setting_overrides_embedded() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("tpl");
    fs::create_dir(&templates).unwrap();
    fs::write(templates.join("electron-main.js"), "// custom main").unwrap();
    fs::write(templates.join("main-webpack.config.js"), "// main cfg").unwrap();
    fs::write(templates.join("renderer-webpack.config.js"), "// renderer cfg").unwrap();
    let project = temp.path().join("app");
    fs::create_dir(&project).unwrap();

    ewebpack(temp.path())
        .env("EWEBPACK_TEMPLATES__DIR", &templates)
        .args(["init", "app"])
        .assert()
        .success();

    assert_eq!(read(project.join("src/main/main.js")), "// custom main");
    assert_eq!(read(project.join("src/renderer/webpack.config.js")), "// renderer cfg");
}

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();
    ewebpack(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ewebpack"));
}
