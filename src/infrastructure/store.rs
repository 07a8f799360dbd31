//! Local record store backed by SQLite

use crate::domain::record::DATE_FORMAT;
use crate::domain::{ExerciseRecord, NewExerciseRecord, RecordId};
use crate::error::{ExtallyError, Result};
use chrono::NaiveDate;
use rusqlite::{params, types::Type, Connection, ErrorCode, OptionalExtension};
use std::path::Path;

/// Schema version written by this build. There are no migrations.
pub const SCHEMA_VERSION: i64 = 1;

const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL
);
"#;

// Version 1 layout. Applied only after the recorded version is checked.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS exercises (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    date TEXT NOT NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_exercises_name_date
    ON exercises (name COLLATE NOCASE, date);
"#;

/// Minimal persistence contract the repository relies on
pub trait ExerciseStore {
    /// Persist a record and return the id the store assigned.
    fn insert(&self, record: &NewExerciseRecord) -> Result<RecordId>;

    /// All records in ascending id order.
    fn list_all(&self) -> Result<Vec<ExerciseRecord>>;

    /// Remove a record. Returns false if no record had that id.
    fn delete(&self, id: RecordId) -> Result<bool>;
}

/// SQLite implementation of ExerciseStore
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the database at `path`, creating it and its schema if absent.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        tracing::debug!(path = %path.display(), "opened exercise store");
        Self::with_connection(conn)
    }

    /// Open a throwaway in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        let store = SqliteStore { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA_VERSION_TABLE)?;

        let version = self.schema_version()?;
        if let Some(found) = version.filter(|v| *v > SCHEMA_VERSION) {
            tracing::warn!(found, "refusing to open exercise store with newer schema");
            return Err(ExtallyError::UnsupportedSchema {
                found,
                supported: SCHEMA_VERSION,
            });
        }

        self.conn.execute_batch(SCHEMA)?;

        if version.is_none() {
            self.conn.execute(
                "INSERT INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
                params![SCHEMA_VERSION],
            )?;
            tracing::info!("created exercise store at schema version {}", SCHEMA_VERSION);
        }

        Ok(())
    }

    /// Highest recorded schema version, if any
    pub fn schema_version(&self) -> Result<Option<i64>> {
        let version = self
            .conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| {
                row.get::<_, Option<i64>>(0)
            })
            .optional()?
            .flatten();
        Ok(version)
    }
}

fn map_record_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ExerciseRecord> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let date_text: String = row.get(2)?;
    let date = NaiveDate::parse_from_str(&date_text, DATE_FORMAT)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(err)))?;
    Ok(ExerciseRecord::new(RecordId(id), name, date))
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

impl ExerciseStore for SqliteStore {
    fn insert(&self, record: &NewExerciseRecord) -> Result<RecordId> {
        let date = record.date.format(DATE_FORMAT).to_string();
        let inserted = self.conn.execute(
            "INSERT INTO exercises (name, date) VALUES (?1, ?2)",
            params![record.name, date],
        );

        match inserted {
            Ok(_) => {
                let id = RecordId(self.conn.last_insert_rowid());
                tracing::debug!(%id, name = %record.name, %date, "inserted record");
                Ok(id)
            }
            // The unique index on (name, date) caught a same-day duplicate
            Err(err) if is_constraint_violation(&err) => Err(ExtallyError::DuplicateRecord {
                name: record.name.clone(),
                date: record.date,
            }),
            Err(err) => Err(err.into()),
        }
    }

    fn list_all(&self) -> Result<Vec<ExerciseRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, date FROM exercises ORDER BY id")?;
        let records = stmt
            .query_map([], map_record_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    fn delete(&self, id: RecordId) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM exercises WHERE id = ?1", params![id.0])?;
        tracing::debug!(%id, removed, "delete record");
        Ok(removed > 0)
    }
}
