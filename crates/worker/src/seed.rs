//! Synthetic cutoff history for local testing.
//!
//! Replaces one region's history with hourly samples ending an hour before
//! `now`: four days of Challenger and eight days of Grandmaster, so the 7d
//! window is available for one tier and unavailable for the other.

use chrono::Duration;
use lpwatch_core::tier::RankTier;
use lpwatch_core::types::{Lp, Timestamp};
use lpwatch_db::repositories::ObservationRepo;
use lpwatch_db::{DbPool, StorageError};
use rand::Rng;

/// Shape of the synthetic series for one tier.
#[derive(Debug, Clone, Copy)]
pub struct SeedPlan {
    pub tier: RankTier,
    /// Number of hourly samples.
    pub points: i64,
    pub base_lp: Lp,
    /// Inclusive noise range added to `base_lp`.
    pub jitter: (Lp, Lp),
}

pub const DEFAULT_PLANS: [SeedPlan; 2] = [
    SeedPlan {
        tier: RankTier::Challenger,
        points: 96,
        base_lp: 700,
        jitter: (-10, 5),
    },
    SeedPlan {
        tier: RankTier::Grandmaster,
        points: 192,
        base_lp: 500,
        jitter: (-10, 10),
    },
];

/// A generated sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSample {
    pub tier: RankTier,
    pub timestamp: Timestamp,
    pub cutoff: Lp,
}

/// Generate hourly samples for `plan`, oldest first, the last one an hour
/// before `now`.
pub fn synthetic_series<R: Rng>(plan: &SeedPlan, now: Timestamp, rng: &mut R) -> Vec<SeedSample> {
    let start = now - Duration::hours(plan.points);
    (0..plan.points)
        .map(|i| SeedSample {
            tier: plan.tier,
            timestamp: start + Duration::hours(i),
            cutoff: plan.base_lp + rng.random_range(plan.jitter.0..=plan.jitter.1),
        })
        .collect()
}

/// Replace `region`'s history with freshly generated samples.
///
/// Returns the number of samples written.
pub async fn seed_region<R: Rng>(
    pool: &DbPool,
    region: &str,
    plans: &[SeedPlan],
    now: Timestamp,
    rng: &mut R,
) -> Result<usize, StorageError> {
    ObservationRepo::initialize(pool).await?;
    let removed = ObservationRepo::clear_region(pool, region).await?;
    tracing::info!(region, removed, "Cleared existing history");

    let mut written = 0;
    for plan in plans {
        for sample in synthetic_series(plan, now, rng) {
            ObservationRepo::append(pool, sample.tier, sample.cutoff, region, sample.timestamp)
                .await?;
            written += 1;
        }
        tracing::info!(tier = %plan.tier, points = plan.points, "Seeded tier history");
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> Timestamp {
        chrono::Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    #[test]
    fn series_is_hourly_and_ends_an_hour_ago() {
        let mut rng = StdRng::seed_from_u64(7);
        let series = synthetic_series(&DEFAULT_PLANS[0], now(), &mut rng);

        assert_eq!(series.len(), 96);
        assert_eq!(series[0].timestamp, now() - Duration::days(4));
        assert_eq!(series[95].timestamp, now() - Duration::hours(1));
        for pair in series.windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, Duration::hours(1));
        }
    }

    #[test]
    fn cutoffs_stay_within_jitter() {
        let mut rng = StdRng::seed_from_u64(11);
        for plan in &DEFAULT_PLANS {
            for sample in synthetic_series(plan, now(), &mut rng) {
                assert_eq!(sample.tier, plan.tier);
                assert!(sample.cutoff >= plan.base_lp + plan.jitter.0);
                assert!(sample.cutoff <= plan.base_lp + plan.jitter.1);
            }
        }
    }

    #[test]
    fn grandmaster_history_covers_eight_days() {
        let mut rng = StdRng::seed_from_u64(3);
        let series = synthetic_series(&DEFAULT_PLANS[1], now(), &mut rng);
        assert_eq!(series.len(), 192);
        assert_eq!(series[0].timestamp, now() - Duration::days(8));
    }
}
