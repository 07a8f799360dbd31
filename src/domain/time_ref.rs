//! Date reference parsing for search filters

use crate::domain::record::DATE_FORMAT;
use crate::error::{ExtallyError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A day named relative to today or given explicitly
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeReference {
    Today,
    Yesterday,
    Tomorrow,
    /// Today if it is that weekday, otherwise the most recent one
    Weekday(Weekday),
    /// Strictly before today
    LastWeekday(Weekday),
    /// Strictly after today
    NextWeekday(Weekday),
    Date(NaiveDate),
}

impl TimeReference {
    /// Parse `today`, `yesterday`, `tomorrow`, weekday names (optionally
    /// prefixed by `last`/`next`) or an ISO `YYYY-MM-DD` date.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || ExtallyError::InvalidTimeReference(input.to_string());

        match normalized.as_str() {
            "today" | "now" => return Ok(TimeReference::Today),
            "yesterday" => return Ok(TimeReference::Yesterday),
            "tomorrow" => return Ok(TimeReference::Tomorrow),
            _ => {}
        }

        if let Some(rest) = normalized.strip_prefix("last ") {
            return parse_weekday(rest.trim())
                .map(TimeReference::LastWeekday)
                .ok_or_else(invalid);
        }
        if let Some(rest) = normalized.strip_prefix("next ") {
            return parse_weekday(rest.trim())
                .map(TimeReference::NextWeekday)
                .ok_or_else(invalid);
        }
        if let Some(day) = parse_weekday(&normalized) {
            return Ok(TimeReference::Weekday(day));
        }

        NaiveDate::parse_from_str(&normalized, DATE_FORMAT)
            .map(TimeReference::Date)
            .map_err(|_| invalid())
    }

    /// Resolve against `today`
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            TimeReference::Today => today,
            TimeReference::Yesterday => today - Duration::days(1),
            TimeReference::Tomorrow => today + Duration::days(1),
            TimeReference::Weekday(day) => today - Duration::days(days_back(today, *day)),
            TimeReference::LastWeekday(day) => {
                let back = match days_back(today, *day) {
                    0 => 7,
                    n => n,
                };
                today - Duration::days(back)
            }
            TimeReference::NextWeekday(day) => {
                let ahead = match (7 - days_back(today, *day)) % 7 {
                    0 => 7,
                    n => n,
                };
                today + Duration::days(ahead)
            }
            TimeReference::Date(date) => *date,
        }
    }
}

/// Days from the most recent `target` (inclusive of today) to `today`, in 0..7
fn days_back(today: NaiveDate, target: Weekday) -> i64 {
    let from = today.weekday().num_days_from_monday() as i64;
    let to = target.num_days_from_monday() as i64;
    (from - to).rem_euclid(7)
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    match name {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}
