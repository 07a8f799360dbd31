//! Application layer - Use cases and orchestration

pub mod exercise_repository;
pub mod init;
pub mod manage_config;

pub use exercise_repository::ExerciseRepository;
pub use init::InitService;
pub use manage_config::ConfigService;
