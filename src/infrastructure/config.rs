//! Configuration management

use crate::error::{ExtallyError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the data directory inside a workspace
pub const DATA_DIR: &str = ".extally";

const CONFIG_FILE: &str = "config.toml";
const DEFAULT_DATABASE: &str = "exercises.db";

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Database file name inside the data directory
    #[serde(default = "default_database")]
    pub database: String,
    /// Name used by `record` when none is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            database: default_database(),
            user: None,
            created: Utc::now(),
        }
    }

    /// Load config from .extally/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DATA_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ExtallyError::NotExtallyDirectory(path.to_path_buf())
            } else {
                ExtallyError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ExtallyError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .extally/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let data_dir = path.join(DATA_DIR);

        if !data_dir.exists() {
            fs::create_dir(&data_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(data_dir.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// The database must be a plain file name so it stays inside .extally/
    pub fn validate(&self) -> Result<()> {
        let db = Path::new(&self.database);
        let is_plain = db.file_name().is_some_and(|name| name == db.as_os_str());
        if self.database.trim().is_empty() || !is_plain {
            return Err(ExtallyError::Config(format!(
                "Invalid database file name: '{}'",
                self.database
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_defaults() {
        let config = Config::new();
        assert_eq!(config.database, "exercises.db");
        assert_eq!(config.user, None);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.user = Some("Alice".to_string());

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(".extally/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unset_user_is_omitted() {
        let temp = TempDir::new().unwrap();
        Config::new().save_to_dir(temp.path()).unwrap();

        let content = fs::read_to_string(temp.path().join(".extally/config.toml")).unwrap();
        assert!(content.contains("database = \"exercises.db\""));
        assert!(!content.contains("user"));
    }

    #[test]
    fn test_missing_database_key_uses_default() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".extally")).unwrap();
        fs::write(
            temp.path().join(".extally/config.toml"),
            "created = \"2024-01-01T00:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.database, "exercises.db");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        match Config::load_from_dir(temp.path()) {
            Err(ExtallyError::NotExtallyDirectory(_)) => {}
            other => panic!("Expected NotExtallyDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_garbage_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".extally")).unwrap();
        fs::write(temp.path().join(".extally/config.toml"), "not [valid").unwrap();

        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(ExtallyError::Config(_))
        ));
    }

    #[test]
    fn test_validate_rejects_paths() {
        let mut config = Config::new();
        for bad in ["", "../escape.db", "sub/dir.db"] {
            config.database = bad.to_string();
            assert!(config.validate().is_err(), "expected '{}' to be rejected", bad);
        }
        config.database = "mine.db".to_string();
        assert!(config.validate().is_ok());
    }
}
