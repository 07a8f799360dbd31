#![allow(dead_code)]

use assert_cmd::Command;
use chrono::NaiveDate;
use extally::domain::{NewExerciseRecord, RecordId};
use extally::infrastructure::{ExerciseStore, SqliteStore};
use std::path::Path;

pub fn extally_cmd() -> Command {
    let mut cmd = Command::cargo_bin("extally").unwrap();
    cmd.env_remove("EXTALLY_ROOT");
    cmd.env_remove("EXTALLY_LOG");
    cmd
}

/// Run `extally init` in `dir`
pub fn init_workspace(dir: &Path) {
    extally_cmd().arg("init").arg(dir).assert().success();
}

/// Insert a record on any day, straight into the workspace database
pub fn seed_record(dir: &Path, name: &str, date: &str) -> RecordId {
    let store = SqliteStore::open(&dir.join(".extally").join("exercises.db")).unwrap();
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    store.insert(&NewExerciseRecord::new(name, date)).unwrap()
}

pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
