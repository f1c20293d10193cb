//! Store-backed window resolution.

use lpwatch_core::tier::RankTier;
use lpwatch_core::types::Timestamp;
use lpwatch_core::window::{reduce_window, window_bounds};
use lpwatch_db::repositories::ObservationRepo;
use lpwatch_db::{DbPool, StorageError};

/// Approximate the cutoff `target_hours` before `now` for `(tier, region)`.
///
/// Returns `Ok(None)` when the window holds fewer than `tolerance_hours / 2`
/// observations; only storage failures are errors.
pub async fn resolve(
    pool: &DbPool,
    tier: RankTier,
    region: &str,
    target_hours: f64,
    tolerance_hours: f64,
    now: Timestamp,
) -> Result<Option<f64>, StorageError> {
    let (earliest, latest) = window_bounds(now, target_hours, tolerance_hours);
    let observations = ObservationRepo::query_range(pool, tier, region, earliest, latest).await?;
    let cutoffs: Vec<i64> = observations.iter().map(|o| o.cutoff).collect();
    let resolved = reduce_window(&cutoffs, tolerance_hours);

    tracing::debug!(
        tier = %tier,
        region,
        target_hours,
        tolerance_hours,
        matched = cutoffs.len(),
        resolved = ?resolved,
        "Resolved lookback window"
    );

    Ok(resolved)
}
