//! Config management use case

use crate::error::{ExtallyError, Result};
use crate::infrastructure::{Config, Workspace};

/// Keys accepted by `config`
pub const CONFIG_KEYS: &str = "user, database, created";

/// Service for managing workspace configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value. An unset `user` reads as an empty string.
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "user" => Ok(config.user.unwrap_or_default()),
            "database" => Ok(config.database),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(ExtallyError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, CONFIG_KEYS
            ))),
        }
    }

    /// Set a config value. An empty `user` clears it.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "user" => {
                let value = value.trim();
                config.user = (!value.is_empty()).then(|| value.to_string());
            }
            "database" => {
                config.database = value.trim().to_string();
                config.validate()?;
            }
            "created" => {
                return Err(ExtallyError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(ExtallyError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: user, database",
                    key
                )));
            }
        }

        self.workspace.save_config(&config)?;
        tracing::debug!(key, "config updated");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}
