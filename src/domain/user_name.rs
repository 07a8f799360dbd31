//! User names with case-insensitive identity
//!
//! There is no stored user entity: a user is any distinct name that has
//! appeared in a record. Two names refer to the same user when their
//! [`fold`] keys are equal.

use crate::error::{ExtallyError, Result};
use std::fmt;

/// A non-empty display name
#[derive(Debug, Clone)]
pub struct UserName {
    display: String,
    folded: String,
}

impl UserName {
    /// Build a name from user input, trimming surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self> {
        let display = input.trim();
        if display.is_empty() {
            return Err(ExtallyError::InvalidName);
        }
        Ok(UserName {
            display: display.to_string(),
            folded: fold(display),
        })
    }

    /// Name as the user typed it
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Case-folded identity key, comparable with [`fold`] of a stored name
    pub fn folded(&self) -> &str {
        &self.folded
    }
}

impl PartialEq for UserName {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for UserName {}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// Case-folding used for every name comparison.
pub fn fold(name: &str) -> String {
    name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let name = UserName::parse("  Alice ").unwrap();
        assert_eq!(name.as_str(), "Alice");
        assert_eq!(name.folded(), "alice");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert!(matches!(
            UserName::parse("   "),
            Err(ExtallyError::InvalidName)
        ));
        assert!(UserName::parse("").is_err());
    }

    #[test]
    fn test_equality_ignores_case() {
        let a = UserName::parse("ALICE").unwrap();
        let b = UserName::parse("alice").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.folded(), fold("aLiCe"));
        assert_ne!(a.folded(), fold("alicia"));
        // Display keeps the original casing
        assert_eq!(a.to_string(), "ALICE");
    }

    #[test]
    fn test_equality_folds_non_ascii() {
        let a = UserName::parse("Émile").unwrap();
        assert_eq!(a.folded(), fold("émile"));
        assert_eq!(a, UserName::parse("ÉMILE").unwrap());
    }

    #[test]
    fn test_fold_substring() {
        assert!(fold("Alice").contains(&fold("LIC")));
        assert!(fold("Alice").contains(&fold("")));
        assert!(!fold("Bob").contains(&fold("ali")));
    }
}
