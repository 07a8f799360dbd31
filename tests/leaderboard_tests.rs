//! Integration tests for leaderboard and export

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{extally_cmd, init_workspace, seed_record};

#[test]
fn test_leaderboard_for_month() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    seed_record(temp.path(), "Alice", "2024-01-01");
    seed_record(temp.path(), "Alice", "2024-01-02");
    seed_record(temp.path(), "Bob", "2024-01-01");
    seed_record(temp.path(), "Carol", "2024-02-01");

    extally_cmd()
        .current_dir(temp.path())
        .args(["leaderboard", "2024-01"])
        .assert()
        .success()
        .stdout("Leaderboard for 2024-01\n  1. Alice  2\n  2. Bob  1\n");
}

#[test]
fn test_leaderboard_empty_month() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    seed_record(temp.path(), "Alice", "2024-01-01");

    extally_cmd()
        .current_dir(temp.path())
        .args(["leaderboard", "2023-12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records for 2023-12"));
}

#[test]
fn test_leaderboard_defaults_to_this_month() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    extally_cmd()
        .current_dir(temp.path())
        .args(["record", "Alice"])
        .assert()
        .success();

    let month = chrono::Local::now().date_naive().format("%Y-%m").to_string();
    extally_cmd()
        .current_dir(temp.path())
        .arg("leaderboard")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Leaderboard for {}", month)))
        .stdout(predicate::str::contains("1. Alice  1"));
}

#[test]
fn test_leaderboard_invalid_month() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    extally_cmd()
        .current_dir(temp.path())
        .args(["leaderboard", "2024-13"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid month"));
}

#[test]
fn test_export_to_stdout() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    seed_record(temp.path(), "Alice", "2024-01-01");
    seed_record(temp.path(), "Bob", "2024-01-02");

    extally_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout("Name,Date\nAlice,2024-01-01\nBob,2024-01-02\n");
}

#[test]
fn test_export_filtered_to_file() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    seed_record(temp.path(), "Alice", "2024-01-01");
    seed_record(temp.path(), "Bob", "2024-01-02");
    let out = temp.path().join("bob.csv");

    extally_cmd()
        .current_dir(temp.path())
        .args(["export", "--name", "BOB", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Exported 1 records"));

    assert_eq!(
        fs::read_to_string(out).unwrap(),
        "Name,Date\nBob,2024-01-02"
    );
}

#[test]
fn test_export_empty_is_header_only() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    extally_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout("Name,Date\n");
}
