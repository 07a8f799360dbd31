//! Error types for extally

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for extally application
#[derive(Debug, Error)]
pub enum ExtallyError {
    #[error("Not an extally directory: {0}")]
    NotExtallyDirectory(PathBuf),

    #[error("{name} already recorded today ({date})")]
    DuplicateRecord { name: String, date: NaiveDate },

    #[error("Name must not be empty")]
    InvalidName,

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("Unsupported schema version {found} (this build supports {supported})")]
    UnsupportedSchema { found: i64, supported: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ExtallyError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ExtallyError::NotExtallyDirectory(_) => 2,
            ExtallyError::InvalidTimeReference(_) | ExtallyError::InvalidMonth(_) => 3,
            ExtallyError::DuplicateRecord { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ExtallyError::NotExtallyDirectory(path) => {
                format!(
                    "Not an extally directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'extally init' in this directory to start tracking\n\
                    • Navigate to an existing extally directory\n\
                    • Set EXTALLY_ROOT environment variable to your data directory",
                    path.display()
                )
            }
            ExtallyError::DuplicateRecord { name, date } => {
                format!(
                    "{} already recorded today ({})\n\n\
                    Only one record per person per day is kept.\n\
                    Names are compared case-insensitively.\n\
                    Use 'extally search --date today' to see today's records.",
                    name, date
                )
            }
            ExtallyError::InvalidTimeReference(ref_str) => {
                format!(
                    "Invalid time reference: '{}'\n\n\
                    Valid time references:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2025-01-17)\n\n\
                    Examples:\n\
                    extally search --date today\n\
                    extally search --date 2025-01-15",
                    ref_str
                )
            }
            ExtallyError::InvalidMonth(month) => {
                format!(
                    "Invalid month: '{}'\n\n\
                    Valid months:\n\
                    • this month, last month\n\
                    • Specific months: YYYY-MM (e.g., 2025-01)\n\n\
                    Example:\n\
                    extally leaderboard 2025-01",
                    month
                )
            }
            ExtallyError::InvalidName => "Name must not be empty\n\n\
                Pass a name ('extally record alice') or set a default:\n\
                extally config user alice"
                .to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type using ExtallyError
pub type Result<T> = std::result::Result<T, ExtallyError>;
