//! Binary smoke tests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn devsweep() -> Command {
    let mut cmd = Command::cargo_bin("devsweep").unwrap();
    cmd.env_remove("XDG_CONFIG_HOME");
    cmd
}

#[test]
fn help_lists_subcommands() {
    devsweep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("clean"));
}

#[test]
fn scan_json_produces_valid_inventory() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join(".gradle/caches")).unwrap();
    fs::write(home.path().join(".gradle/caches/module.jar"), "x".repeat(128)).unwrap();

    let assert = devsweep()
        .env("HOME", home.path())
        .args(["scan", "--json", "--categories", "gradle"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let items: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let items = items.as_array().unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["category"], "gradle");
    assert_eq!(items[0]["size"], 128);
}

#[test]
fn scan_reports_nothing_on_pristine_home() {
    let home = TempDir::new().unwrap();

    devsweep()
        .env("HOME", home.path())
        .args(["scan", "--categories", "gradle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No cleanable caches found."));
}

#[test]
fn clean_dry_run_leaves_files_in_place() {
    let home = TempDir::new().unwrap();
    let caches = home.path().join(".gradle/caches");
    fs::create_dir_all(&caches).unwrap();
    fs::write(caches.join("module.jar"), "x".repeat(256)).unwrap();

    devsweep()
        .env("HOME", home.path())
        .args(["clean", "--dry-run", "--categories", "gradle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN"))
        .stdout(predicate::str::contains("Results:"));

    assert!(caches.join("module.jar").exists());
}

#[test]
fn clean_force_deletes_and_reports() {
    let home = TempDir::new().unwrap();
    let caches = home.path().join(".gradle/caches");
    fs::create_dir_all(&caches).unwrap();
    fs::write(caches.join("module.jar"), "x".repeat(512)).unwrap();

    devsweep()
        .env("HOME", home.path())
        .args(["clean", "--force", "--categories", "gradle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaned: 1 item"));

    assert!(!caches.exists());
}
