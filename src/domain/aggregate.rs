//! Grouping and ranking over record lists

use crate::domain::ExerciseRecord;
use std::collections::{HashMap, HashSet};

/// One row of the monthly leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub count: usize,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        LeaderboardEntry {
            name: name.into(),
            count,
        }
    }
}

/// Rank users by the number of records whose ISO date starts with `month`.
///
/// Names are grouped by exact string equality. The sort is stable, so users
/// with equal counts keep the order in which they were first encountered.
pub fn leaderboard(records: &[ExerciseRecord], month: &str) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records
        .iter()
        .filter(|r| r.iso_date().starts_with(month))
    {
        match index.get(record.name.as_str()) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(record.name.as_str(), entries.len());
                entries.push(LeaderboardEntry::new(record.name.clone(), 1));
            }
        }
    }

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// Distinct names by exact string equality, in first-seen order
pub fn distinct_names(records: &[ExerciseRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.name.as_str()))
        .map(|r| r.name.clone())
        .collect()
}
