//! Domain layer - Records, names and the pure functions over them

pub mod aggregate;
pub mod csv;
pub mod month;
pub mod record;
pub mod time_ref;
pub mod user_name;

pub use aggregate::{distinct_names, leaderboard, LeaderboardEntry};
pub use csv::export_to_csv;
pub use month::MonthReference;
pub use record::{ExerciseRecord, NewExerciseRecord, RecordId};
pub use time_ref::TimeReference;
pub use user_name::UserName;
