//! Exercise record repository
//!
//! Sole authority for reading and writing exercise records. Every call
//! re-reads the store; nothing is cached between calls.

use crate::domain::user_name::fold;
use crate::domain::{
    distinct_names, export_to_csv, leaderboard, ExerciseRecord, LeaderboardEntry,
    NewExerciseRecord, RecordId, UserName,
};
use crate::error::{ExtallyError, Result};
use crate::infrastructure::ExerciseStore;
use chrono::{Local, NaiveDate};

pub struct ExerciseRepository<S: ExerciseStore> {
    store: S,
}

impl<S: ExerciseStore> ExerciseRepository<S> {
    pub fn new(store: S) -> Self {
        ExerciseRepository { store }
    }

    /// Record that `name` exercised today.
    ///
    /// Fails with `DuplicateRecord` if the same user (ignoring case) already
    /// has a record dated today; nothing is written in that case.
    pub fn record_exercise(&self, name: &str) -> Result<ExerciseRecord> {
        self.record_exercise_on(name, Local::now().date_naive())
    }

    fn record_exercise_on(&self, name: &str, today: NaiveDate) -> Result<ExerciseRecord> {
        let user = UserName::parse(name)?;

        let already = self
            .store
            .list_all()?
            .into_iter()
            .any(|r| r.date == today && fold(&r.name) == user.folded());
        if already {
            tracing::info!(name = %user, %today, "duplicate record rejected");
            return Err(ExtallyError::DuplicateRecord {
                name: user.to_string(),
                date: today,
            });
        }

        let new = NewExerciseRecord::new(user.as_str(), today);
        let id = self.store.insert(&new)?;
        tracing::info!(%id, name = %user, %today, "recorded exercise");
        Ok(new.with_id(id))
    }

    /// Records matching every supplied filter, in store order.
    ///
    /// `name` is a case-insensitive substring; an empty string matches
    /// everything. `date` must match exactly.
    pub fn search_records(
        &self,
        name: Option<&str>,
        date: Option<NaiveDate>,
    ) -> Result<Vec<ExerciseRecord>> {
        let name = name.filter(|n| !n.is_empty());
        let needle = name.map(fold);
        let mut records = self.store.list_all()?;
        records.retain(|r| {
            needle.as_deref().is_none_or(|n| fold(&r.name).contains(n))
                && date.is_none_or(|d| r.date == d)
        });
        tracing::debug!(?name, ?date, matched = records.len(), "search records");
        Ok(records)
    }

    /// Remove a record by id. Absent ids are a no-op; the return value says
    /// whether anything was removed.
    pub fn delete_record(&self, id: RecordId) -> Result<bool> {
        let removed = self.store.delete(id)?;
        if removed {
            tracing::info!(%id, "deleted record");
        }
        Ok(removed)
    }

    /// Distinct names by exact spelling, first-seen order
    pub fn list_users(&self) -> Result<Vec<String>> {
        Ok(distinct_names(&self.store.list_all()?))
    }

    /// Users ranked by record count for dates starting with `month`
    pub fn get_leaderboard(&self, month: &str) -> Result<Vec<LeaderboardEntry>> {
        Ok(leaderboard(&self.store.list_all()?, month))
    }

    pub fn export_to_csv(records: &[ExerciseRecord]) -> String {
        export_to_csv(records)
    }
}
