//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{newsboard_cmd, newsboard_in};

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    newsboard_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized newsboard"));

    assert!(temp.path().join(".newsboard").is_dir());
    assert!(temp.path().join(".newsboard/store").is_dir());

    let config_path = temp.path().join(".newsboard/config.toml");
    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("storage_key = \"news\""));
    assert!(content.contains("log_level = \"warn\""));
    assert!(content.contains("created"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    newsboard_cmd().arg("init").arg(temp.path()).assert().success();

    newsboard_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_commands_outside_board_fail() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("empty");
    fs::create_dir(&root).unwrap();

    newsboard_cmd()
        .env("NEWSBOARD_ROOT", &root)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NEWSBOARD_ROOT"));
}

#[test]
fn test_newsboard_root_env() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    newsboard_cmd().arg("init").arg(temp.path()).assert().success();

    newsboard_cmd()
        .current_dir(elsewhere.path())
        .env("NEWSBOARD_ROOT", temp.path())
        .args(["add", "Hello", "World"])
        .assert()
        .success();

    assert!(temp.path().join(".newsboard/store/news.json").exists());
}

#[test]
fn test_config_get_storage_key() {
    let temp = TempDir::new().unwrap();

    newsboard_cmd().arg("init").arg(temp.path()).assert().success();

    newsboard_in(temp.path())
        .args(["config", "storage_key"])
        .assert()
        .success()
        .stdout(predicate::str::contains("news"));
}

#[test]
fn test_config_set_storage_key_switches_list() {
    let temp = TempDir::new().unwrap();

    newsboard_cmd().arg("init").arg(temp.path()).assert().success();

    newsboard_in(temp.path())
        .args(["add", "First board", "text"])
        .assert()
        .success();

    newsboard_in(temp.path())
        .args(["config", "storage_key", "archive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set storage_key = archive"));

    newsboard_in(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No news yet"));

    newsboard_in(temp.path())
        .args(["config", "storage_key", "news"])
        .assert()
        .success();

    newsboard_in(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("First board"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();

    newsboard_cmd().arg("init").arg(temp.path()).assert().success();

    newsboard_in(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("storage_key = news"))
        .stdout(predicate::str::contains("log_level = warn"))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_set_created_fails() {
    let temp = TempDir::new().unwrap();

    newsboard_cmd().arg("init").arg(temp.path()).assert().success();

    newsboard_in(temp.path())
        .args(["config", "created", "2025-01-01T00:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn test_config_invalid_log_level() {
    let temp = TempDir::new().unwrap();

    newsboard_cmd().arg("init").arg(temp.path()).assert().success();

    newsboard_in(temp.path())
        .args(["config", "log_level", "loud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid levels"));
}
