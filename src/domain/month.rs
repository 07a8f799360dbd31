//! Month references for the leaderboard

use crate::error::{ExtallyError, Result};
use chrono::{Datelike, NaiveDate};

/// A calendar month named relative to today or given as `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthReference {
    ThisMonth,
    LastMonth,
    Specific { year: i32, month: u32 },
}

impl MonthReference {
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase().replace('-', " ");

        match normalized.as_str() {
            "this month" | "now" => return Ok(MonthReference::ThisMonth),
            "last month" => return Ok(MonthReference::LastMonth),
            _ => {}
        }

        // Validate by parsing the first day of the month
        NaiveDate::parse_from_str(&format!("{}-01", input.trim()), "%Y-%m-%d")
            .ok()
            .filter(|_| input.trim().len() == 7)
            .map(|d| MonthReference::Specific {
                year: d.year(),
                month: d.month(),
            })
            .ok_or_else(|| ExtallyError::InvalidMonth(input.to_string()))
    }

    /// Resolve to the `YYYY-MM` prefix that record dates are matched against
    pub fn resolve(&self, today: NaiveDate) -> String {
        let (year, month) = match *self {
            MonthReference::ThisMonth => (today.year(), today.month()),
            MonthReference::LastMonth if today.month() == 1 => (today.year() - 1, 12),
            MonthReference::LastMonth => (today.year(), today.month() - 1),
            MonthReference::Specific { year, month } => (year, month),
        };
        format!("{:04}-{:02}", year, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_months() {
        assert_eq!(
            MonthReference::parse("this month").unwrap(),
            MonthReference::ThisMonth
        );
        assert_eq!(
            MonthReference::parse("this-month").unwrap(),
            MonthReference::ThisMonth
        );
        assert_eq!(
            MonthReference::parse("Last Month").unwrap(),
            MonthReference::LastMonth
        );
    }

    #[test]
    fn test_parse_specific_month() {
        assert_eq!(
            MonthReference::parse("2024-01").unwrap(),
            MonthReference::Specific {
                year: 2024,
                month: 1
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_months() {
        for bad in ["2024-13", "2024-1", "2024", "2024-01-05", "january", ""] {
            assert!(
                matches!(MonthReference::parse(bad), Err(ExtallyError::InvalidMonth(_))),
                "expected '{}' to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_resolve() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(MonthReference::ThisMonth.resolve(today), "2025-03");
        assert_eq!(MonthReference::LastMonth.resolve(today), "2025-02");
        assert_eq!(
            MonthReference::Specific {
                year: 2024,
                month: 11
            }
            .resolve(today),
            "2024-11"
        );
    }

    #[test]
    fn test_last_month_wraps_year() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(MonthReference::LastMonth.resolve(today), "2024-12");
    }
}
