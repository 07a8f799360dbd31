//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::{Config, Workspace};
use std::fs;
use std::path::Path;

pub struct InitService;

impl InitService {
    /// Create `.extally/` at `path` with a default config and an empty store.
    pub fn execute(path: &Path) -> Result<Workspace> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let workspace = Workspace::new(path.to_path_buf());
        workspace.initialize()?;

        let config = Config::new();
        workspace.save_config(&config)?;

        // Creates the database and writes schema version 1
        workspace.open_store()?;

        tracing::info!(root = %path.display(), "initialized workspace");
        Ok(workspace)
    }
}
