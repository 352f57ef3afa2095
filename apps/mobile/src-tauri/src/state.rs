//! Application state.

use journal_store::SqliteRepository;
use std::sync::{Arc, Mutex};

/// Global application state: the single database handle, opened once at
/// startup and shared by every command.
pub struct AppState {
    pub repository: Arc<Mutex<SqliteRepository>>,
}

impl AppState {
    pub fn new(repository: SqliteRepository) -> Self {
        Self {
            repository: Arc::new(Mutex::new(repository)),
        }
    }
}
