//! Workspace discovery and layout

use crate::error::{ExtallyError, Result};
use crate::infrastructure::config::DATA_DIR;
use crate::infrastructure::{Config, SqliteStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that pins the workspace root
pub const ROOT_ENV: &str = "EXTALLY_ROOT";

/// A directory holding `.extally/` (config and database)
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Find the workspace: `EXTALLY_ROOT` first, then walk up from the
    /// current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_data_dir(&path) {
                return Ok(Workspace::new(path));
            }
            return Err(ExtallyError::Config(format!(
                "{} is set to '{}' but no {} directory found. \
                Run 'extally init' in that directory or unset {}.",
                ROOT_ENV,
                path.display(),
                DATA_DIR,
                ROOT_ENV
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing `.extally/` is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_data_dir(dir))
            .map(|dir| Workspace::new(dir.to_path_buf()))
            .ok_or_else(|| ExtallyError::NotExtallyDirectory(start.to_path_buf()))
    }

    fn has_data_dir(path: &Path) -> bool {
        path.join(DATA_DIR).is_dir()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    /// Create the `.extally` directory. Fails if it already exists.
    pub fn initialize(&self) -> Result<()> {
        let data_dir = self.data_dir();

        if data_dir.exists() {
            return Err(ExtallyError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&data_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Path of the database named by `config`
    pub fn database_path(&self, config: &Config) -> PathBuf {
        self.data_dir().join(&config.database)
    }

    /// Open (creating if absent) the store configured for this workspace
    pub fn open_store(&self) -> Result<SqliteStore> {
        let config = self.load_config()?;
        let path = self.database_path(&config);
        tracing::debug!(root = %self.root.display(), db = %path.display(), "opening workspace store");
        SqliteStore::open(&path)
    }
}
