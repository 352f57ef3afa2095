//! Local SQLite persistence for the Mindwell journal.
//!
//! One `SqliteRepository` owns the single database connection for the
//! process; the app crate wraps it in shared state and every operation
//! goes through the repository traits re-exported here.

pub mod date_utils;
pub mod error;
pub mod repository;
pub mod schema;

pub use error::StoreError;
pub use repository::{
    GratitudeRepository, QuoteRepository, ReflectionRepository, RoutineRepository,
    SettingsRepository, SqliteRepository,
};
