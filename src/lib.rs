//! extally - Local exercise log
//!
//! Records that someone exercised on a given day, searches and deletes past
//! records, lists users and ranks them on a monthly leaderboard. All data
//! lives in a SQLite file under `.extally/`.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::ExtallyError;
