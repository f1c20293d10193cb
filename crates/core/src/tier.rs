//! Tracked apex tiers.
//!
//! Only the two tiers whose membership is capped by population are tracked.
//! Master has no upper bound, so it has no cutoff of its own.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Number of players admitted to Challenger after a bracket update.
pub const CHALLENGER_SLOTS: usize = 300;

/// Number of players admitted to Grandmaster after a bracket update.
pub const GRANDMASTER_SLOTS: usize = 700;

/// An apex tier with a population-based LP cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankTier {
    Challenger,
    Grandmaster,
}

impl RankTier {
    /// Tiers in reporting order, highest first.
    pub const ALL: [RankTier; 2] = [RankTier::Challenger, RankTier::Grandmaster];

    /// Value stored in the `rank` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Challenger => "challenger",
            Self::Grandmaster => "grandmaster",
        }
    }

    /// Human-readable name for notifications.
    pub fn label(self) -> &'static str {
        match self {
            Self::Challenger => "Challenger",
            Self::Grandmaster => "Grandmaster",
        }
    }
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "challenger" => Ok(Self::Challenger),
            "grandmaster" => Ok(Self::Grandmaster),
            other => Err(CoreError::UnknownTier(other.to_string())),
        }
    }
}
