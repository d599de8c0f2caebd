//! End-to-end tests for the `addons` binary.

use addon_test_utils::{TestAddonDir, manifest};
use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command for the addons binary, run inside `dir`
fn addons_cmd(dir: &TestAddonDir) -> Command {
    let mut cmd = Command::cargo_bin("addons").expect("Failed to find addons binary");
    cmd.current_dir(dir.root())
        .env_remove("ADDONS_CONFIG")
        .env_remove("ADDONS_CATALOG")
        .env_remove("ADDONS_DIR")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// pfQuest -> pfUI -> libs, with pfUI already installed.
fn quest_dir() -> TestAddonDir {
    let dir = TestAddonDir::new();
    dir.write_catalog(&[
        manifest("pfQuest", &["pfUI"]),
        manifest("pfUI", &["libs"]),
        manifest("libs", &[]),
        manifest("loopA", &["loopB"]),
        manifest("loopB", &["loopA"]),
        manifest("broken", &["ghost"]),
    ]);
    dir.write_installed(&["pfUI"]);
    dir.write_settings("");
    dir
}

#[test]
fn test_no_command_shows_hint() {
    let dir = TestAddonDir::new();
    addons_cmd(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("addons --help"));
}

#[test]
fn test_resolve_lists_dependencies() {
    let dir = quest_dir();
    addons_cmd(&dir)
        .args(["resolve", "pfQuest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("depends on 2 addon(s)"))
        .stdout(predicate::str::contains("pfUI"))
        .stdout(predicate::str::contains("libs"));
}

#[test]
fn test_resolve_json() {
    let dir = quest_dir();
    let output = addons_cmd(&dir)
        .args(["resolve", "pfQuest", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let deps = value["dependencies"].as_array().unwrap();
    assert_eq!(deps.len(), 2);
    assert_eq!(deps[0]["manifest"]["name"], "pfUI");
    assert_eq!(deps[0]["is_installed"], true);
    assert_eq!(deps[1]["manifest"]["name"], "libs");
    assert_eq!(deps[1]["depth"], 1);
    assert!(value["errors"].as_array().unwrap().is_empty());
}

#[test]
fn test_resolve_reports_cycle_as_warning() {
    let dir = quest_dir();
    addons_cmd(&dir)
        .args(["resolve", "loopA"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Circular dependency detected: loopA",
        ));
}

#[test]
fn test_plan_orders_deepest_first() {
    let dir = quest_dir();
    let output = addons_cmd(&dir)
        .args(["plan", "pfQuest", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let steps: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let steps = steps.as_array().unwrap();
    let summary: Vec<(&str, &str)> = steps
        .iter()
        .map(|s| (s["name"].as_str().unwrap(), s["action"].as_str().unwrap()))
        .collect();
    assert_eq!(
        summary,
        vec![("libs", "install"), ("pfUI", "skip"), ("pfQuest", "install")]
    );
}

#[test]
fn test_plan_text_output() {
    let dir = quest_dir();
    addons_cmd(&dir)
        .args(["plan", "pfQuest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Install plan for pfQuest Alias"))
        .stdout(predicate::str::contains("root"));
}

#[test]
fn test_check_clean_addon_succeeds() {
    let dir = quest_dir();
    addons_cmd(&dir)
        .args(["check", "pfQuest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("resolves cleanly"));
}

#[test]
fn test_check_fails_on_missing_dependency() {
    let dir = quest_dir();
    addons_cmd(&dir)
        .args(["check", "broken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to resolve dependency ghost",
        ))
        .stderr(predicate::str::contains("1 dependency issue(s) found"));
}

#[test]
fn test_max_depth_flag_limits_resolution() {
    let dir = quest_dir();
    addons_cmd(&dir)
        .args(["check", "pfQuest", "--max-depth", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Maximum dependency depth exceeded for: pfUI",
        ));
}

#[test]
fn test_unknown_addon_fails() {
    let dir = quest_dir();
    addons_cmd(&dir)
        .args(["resolve", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("addon not found: nope"));
}

#[test]
fn test_missing_catalog_fails_with_hint() {
    let dir = TestAddonDir::new();
    addons_cmd(&dir)
        .args(["resolve", "pfQuest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no addon catalog configured"));
}

#[test]
fn test_completions_bash() {
    let dir = TestAddonDir::new();
    addons_cmd(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("addons"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = quest_dir();
    addons_cmd(&dir)
        .args(["resolve", "pfQuest", "--config", "typo.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("settings file not found"))
        .stderr(predicate::str::contains("typo.toml"));
}

#[test]
fn test_completions_ignore_settings() {
    let dir = TestAddonDir::new();
    addons_cmd(&dir)
        .args(["completions", "zsh", "--config", "typo.toml"])
        .assert()
        .success();
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = quest_dir();
    addons_cmd(&dir)
        .args(["resolve", "pfQuest", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Verbose mode enabled"));
}
