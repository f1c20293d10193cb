use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod error;
pub mod models;
pub mod repositories;

pub use error::StorageError;

pub type DbPool = sqlx::SqlitePool;

/// Open (creating if missing) the SQLite database at `database_url`.
///
/// Invocations run one step at a time, so the pool holds a single connection
/// that is never recycled. This also keeps `sqlite::memory:` databases alive
/// for the lifetime of the pool.
pub async fn create_pool(database_url: &str) -> Result<DbPool, StorageError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), StorageError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
