//! Row model for the `league_lp_trends` table.
//!
//! `time` is stored as UTC epoch milliseconds so that range filters compare
//! integers rather than formatted text.

use lpwatch_core::observation::Observation;
use lpwatch_core::tier::RankTier;
use lpwatch_core::types::Timestamp;
use sqlx::FromRow;

use crate::error::StorageError;

/// A raw `league_lp_trends` row.
#[derive(Debug, Clone, FromRow)]
pub struct ObservationRow {
    pub id: i64,
    pub time: i64,
    pub rank: String,
    pub cutoff_rank: i64,
    pub region: String,
}

impl ObservationRow {
    /// Decode into the domain type, rejecting unknown tiers and out-of-range
    /// timestamps.
    pub fn into_observation(self) -> Result<Observation, StorageError> {
        let rank_tier: RankTier = self.rank.parse().map_err(|e| StorageError::CorruptRow {
            id: self.id,
            reason: format!("{e}"),
        })?;
        let timestamp =
            Timestamp::from_timestamp_millis(self.time).ok_or_else(|| StorageError::CorruptRow {
                id: self.id,
                reason: format!("timestamp {} out of range", self.time),
            })?;

        Ok(Observation {
            timestamp,
            rank_tier,
            cutoff: self.cutoff_rank,
            region: self.region,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn row(rank: &str, time: i64) -> ObservationRow {
        ObservationRow {
            id: 7,
            time,
            rank: rank.to_string(),
            cutoff_rank: 712,
            region: "NA".to_string(),
        }
    }

    #[test]
    fn decodes_valid_row() {
        let obs = row("grandmaster", 1_760_000_000_000).into_observation().unwrap();
        assert_eq!(obs.rank_tier, RankTier::Grandmaster);
        assert_eq!(obs.cutoff, 712);
        assert_eq!(obs.timestamp.timestamp_millis(), 1_760_000_000_000);
    }

    #[test]
    fn unknown_rank_is_corrupt() {
        assert_matches!(
            row("master", 0).into_observation(),
            Err(StorageError::CorruptRow { id: 7, .. })
        );
    }

    #[test]
    fn out_of_range_time_is_corrupt() {
        assert_matches!(
            row("challenger", i64::MAX).into_observation(),
            Err(StorageError::CorruptRow { id: 7, reason }) if reason.contains("out of range")
        );
    }
}
