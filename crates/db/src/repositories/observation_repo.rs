//! Repository for the append-only `league_lp_trends` table.

use lpwatch_core::observation::Observation;
use lpwatch_core::tier::RankTier;
use lpwatch_core::types::{Lp, Timestamp};

use crate::error::StorageError;
use crate::models::ObservationRow;
use crate::DbPool;

/// Column list for `league_lp_trends` SELECT queries.
const COLUMNS: &str = "id, time, rank, cutoff_rank, region";

const CREATE_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS league_lp_trends ( \
        id INTEGER PRIMARY KEY AUTOINCREMENT, \
        time INTEGER NOT NULL, \
        rank TEXT NOT NULL, \
        cutoff_rank INTEGER NOT NULL, \
        region TEXT NOT NULL \
    )";

const CREATE_INDEX: &str = "\
    CREATE INDEX IF NOT EXISTS idx_league_lp_trends_rank_region_time \
    ON league_lp_trends (rank, region, time)";

/// Provides schema setup, append and range queries for cutoff observations.
pub struct ObservationRepo;

impl ObservationRepo {
    /// Create the table and its lookup index if they do not exist yet.
    ///
    /// Safe to call on every run.
    pub async fn initialize(pool: &DbPool) -> Result<(), StorageError> {
        sqlx::query(CREATE_TABLE).execute(pool).await?;
        sqlx::query(CREATE_INDEX).execute(pool).await?;
        tracing::debug!("Observation store initialized");
        Ok(())
    }

    /// Durably record one cutoff observation.
    pub async fn append(
        pool: &DbPool,
        tier: RankTier,
        cutoff: Lp,
        region: &str,
        timestamp: Timestamp,
    ) -> Result<Observation, StorageError> {
        insert(pool, tier, cutoff, region, timestamp).await?;
        tracing::debug!(tier = %tier, cutoff, region, "Observation appended");
        Ok(observation(tier, cutoff, region, timestamp))
    }

    /// Record several cutoffs sharing one timestamp in a single transaction.
    ///
    /// Either every row is committed or none is.
    pub async fn append_all(
        pool: &DbPool,
        cutoffs: &[(RankTier, Lp)],
        region: &str,
        timestamp: Timestamp,
    ) -> Result<Vec<Observation>, StorageError> {
        let mut tx = pool.begin().await?;
        for &(tier, cutoff) in cutoffs {
            insert(&mut *tx, tier, cutoff, region, timestamp).await?;
        }
        tx.commit().await?;

        tracing::debug!(region, rows = cutoffs.len(), "Observations appended");

        Ok(cutoffs
            .iter()
            .map(|&(tier, cutoff)| observation(tier, cutoff, region, timestamp))
            .collect())
    }

    /// All observations for `(tier, region)` with `start <= time <= end`,
    /// oldest first. Ties keep insertion order.
    pub async fn query_range(
        pool: &DbPool,
        tier: RankTier,
        region: &str,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<Observation>, StorageError> {
        let query = format!(
            "SELECT {COLUMNS} FROM league_lp_trends \
             WHERE rank = ? AND region = ? AND time >= ? AND time <= ? \
             ORDER BY time ASC, id ASC"
        );
        let rows = sqlx::query_as::<_, ObservationRow>(&query)
            .bind(tier.as_str())
            .bind(region)
            .bind(start.timestamp_millis())
            .bind(end.timestamp_millis())
            .fetch_all(pool)
            .await?;

        rows.into_iter().map(ObservationRow::into_observation).collect()
    }

    /// Most recent observation for `(tier, region)`, if any.
    pub async fn latest(
        pool: &DbPool,
        tier: RankTier,
        region: &str,
    ) -> Result<Option<Observation>, StorageError> {
        let query = format!(
            "SELECT {COLUMNS} FROM league_lp_trends \
             WHERE rank = ? AND region = ? \
             ORDER BY time DESC, id DESC LIMIT 1"
        );
        let row = sqlx::query_as::<_, ObservationRow>(&query)
            .bind(tier.as_str())
            .bind(region)
            .fetch_optional(pool)
            .await?;

        row.map(ObservationRow::into_observation).transpose()
    }

    /// Number of observations stored for `(tier, region)`.
    pub async fn count(pool: &DbPool, tier: RankTier, region: &str) -> Result<i64, StorageError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM league_lp_trends WHERE rank = ? AND region = ?",
        )
        .bind(tier.as_str())
        .bind(region)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Delete every observation for a region. Returns the number of rows removed.
    ///
    /// Only used to replace synthetic history; the worker never deletes.
    pub async fn clear_region(pool: &DbPool, region: &str) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM league_lp_trends WHERE region = ?")
            .bind(region)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

async fn insert<'e, E>(
    executor: E,
    tier: RankTier,
    cutoff: Lp,
    region: &str,
    timestamp: Timestamp,
) -> Result<(), sqlx::Error>
where
    E: sqlx::SqliteExecutor<'e>,
{
    sqlx::query(
        "INSERT INTO league_lp_trends (time, rank, cutoff_rank, region) \
         VALUES (?, ?, ?, ?)",
    )
    .bind(timestamp.timestamp_millis())
    .bind(tier.as_str())
    .bind(cutoff)
    .bind(region)
    .execute(executor)
    .await?;
    Ok(())
}

fn observation(tier: RankTier, cutoff: Lp, region: &str, timestamp: Timestamp) -> Observation {
    Observation {
        timestamp,
        rank_tier: tier,
        cutoff,
        region: region.to_string(),
    }
}
