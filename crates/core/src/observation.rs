//! The persisted unit of cutoff history.

use serde::Serialize;

use crate::tier::RankTier;
use crate::types::{Lp, Timestamp};

/// One recorded cutoff for a tier in a region. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub timestamp: Timestamp,
    pub rank_tier: RankTier,
    pub cutoff: Lp,
    pub region: String,
}

/// Current cutoffs for every tracked tier, as computed from one ladder fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierCutoffs {
    pub challenger: Lp,
    pub grandmaster: Lp,
}

impl TierCutoffs {
    pub fn get(&self, tier: RankTier) -> Lp {
        match tier {
            RankTier::Challenger => self.challenger,
            RankTier::Grandmaster => self.grandmaster,
        }
    }

    /// Cutoffs paired with their tier, in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (RankTier, Lp)> + '_ {
        RankTier::ALL.into_iter().map(move |tier| (tier, self.get(tier)))
    }
}
