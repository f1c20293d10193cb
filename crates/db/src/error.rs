//! Storage failures.
//!
//! Any of these aborts the current invocation: trends computed against a log
//! that cannot be read or extended would be incomplete.

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Corrupt observation row {id}: {reason}")]
    CorruptRow { id: i64, reason: String },
}
