//! Infrastructure layer - Persistence and workspace layout

pub mod config;
pub mod store;
pub mod workspace;

pub use config::Config;
pub use store::{ExerciseStore, SqliteStore};
pub use workspace::Workspace;
