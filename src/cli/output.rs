//! Output formatting utilities

use crate::domain::{ExerciseRecord, LeaderboardEntry};

/// Format records as an id/date/name table
pub fn format_record_list(records: &[ExerciseRecord]) -> String {
    if records.is_empty() {
        return "No records found".to_string();
    }

    let width = records
        .iter()
        .map(|r| r.id.to_string().len())
        .max()
        .unwrap_or(1);

    let mut output = String::new();
    for record in records {
        output.push_str(&format!(
            "{:>width$}  {}  {}\n",
            record.id,
            record.iso_date(),
            record.name,
            width = width
        ));
    }
    output
}

/// Format user names, one per line
pub fn format_user_list(users: &[String]) -> String {
    if users.is_empty() {
        return "No users found".to_string();
    }

    let mut output = String::new();
    for user in users {
        output.push_str(user);
        output.push('\n');
    }
    output
}

/// Format a leaderboard with rank and count
pub fn format_leaderboard(month: &str, entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return format!("No records for {}", month);
    }

    let mut output = format!("Leaderboard for {}\n", month);
    for (rank, entry) in entries.iter().enumerate() {
        output.push_str(&format!("{:>3}. {}  {}\n", rank + 1, entry.name, entry.count));
    }
    output
}
