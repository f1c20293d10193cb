//! One aggregation pass: record current cutoffs, then compare each against
//! every configured lookback window.

use lpwatch_core::observation::TierCutoffs;
use lpwatch_core::tier::RankTier;
use lpwatch_core::trend::{TrendRecord, DEFAULT_FLAT_THRESHOLD_LP};
use lpwatch_core::types::{Lp, Timestamp};
use lpwatch_core::window::{IntervalSpec, DEFAULT_INTERVALS};
use lpwatch_db::repositories::ObservationRepo;
use lpwatch_db::{DbPool, StorageError};

use crate::resolver::resolve;

pub use lpwatch_core::trend::TierTrends;

/// Builds per-tier trend records for a run.
#[derive(Debug, Clone)]
pub struct AggregationDriver {
    intervals: Vec<IntervalSpec>,
    flat_threshold: Lp,
}

impl Default for AggregationDriver {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVALS.to_vec(), DEFAULT_FLAT_THRESHOLD_LP)
    }
}

impl AggregationDriver {
    /// Intervals are reported in the order given.
    pub fn new(intervals: Vec<IntervalSpec>, flat_threshold: Lp) -> Self {
        Self {
            intervals,
            flat_threshold,
        }
    }

    /// Append every tier's cutoff at `now` in one transaction, then resolve
    /// and classify each interval per tier.
    ///
    /// Tiers come back highest first. A sparse window yields an unavailable
    /// record; any storage failure aborts the whole pass, and a failed append
    /// leaves no rows behind.
    pub async fn run(
        &self,
        pool: &DbPool,
        cutoffs: TierCutoffs,
        region: &str,
        now: Timestamp,
    ) -> Result<Vec<TierTrends>, StorageError> {
        let rows: Vec<(RankTier, Lp)> = cutoffs.iter().collect();
        ObservationRepo::append_all(pool, &rows, region, now).await?;

        let mut results = Vec::with_capacity(rows.len());
        for (tier, current) in rows {
            let mut records = Vec::with_capacity(self.intervals.len());
            for interval in &self.intervals {
                let resolved = resolve(
                    pool,
                    tier,
                    region,
                    interval.target_hours,
                    interval.tolerance_hours,
                    now,
                )
                .await?;
                records.push(TrendRecord::new(
                    interval.label,
                    current,
                    resolved,
                    self.flat_threshold,
                ));
            }

            tracing::info!(
                tier = %tier,
                region,
                cutoff = current,
                available = records.iter().filter(|r| r.resolved_value.is_some()).count(),
                intervals = records.len(),
                "Tier trends computed"
            );

            results.push(TierTrends {
                tier,
                current_value: current,
                records,
            });
        }

        Ok(results)
    }
}
