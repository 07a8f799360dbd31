//! Exercise record model

use chrono::NaiveDate;
use std::fmt;

/// ISO date format used for stored and displayed dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Store-assigned record identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub i64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A single logged exercise event for one user on one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseRecord {
    pub id: RecordId,
    pub name: String,
    pub date: NaiveDate,
}

impl ExerciseRecord {
    pub fn new(id: RecordId, name: impl Into<String>, date: NaiveDate) -> Self {
        ExerciseRecord {
            id,
            name: name.into(),
            date,
        }
    }

    /// Date rendered as `YYYY-MM-DD`
    pub fn iso_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// A record that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExerciseRecord {
    pub name: String,
    pub date: NaiveDate,
}

impl NewExerciseRecord {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        NewExerciseRecord {
            name: name.into(),
            date,
        }
    }

    /// Attach the id the store assigned
    pub fn with_id(self, id: RecordId) -> ExerciseRecord {
        ExerciseRecord {
            id,
            name: self.name,
            date: self.date,
        }
    }
}
