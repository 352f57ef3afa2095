//! Storage error types.

use journal_core::settings::SettingTypeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("empty candidate pool")]
    EmptyPool,

    #[error(transparent)]
    SettingType(#[from] SettingTypeError),
}

/// True when `err` is a SQLite constraint violation, e.g. a duplicate
/// primary key on a daily cache insert. Matched by error kind so the
/// daily-value race recovery never depends on message text.
pub fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
