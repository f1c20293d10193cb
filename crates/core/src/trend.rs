//! Trend classification of a current cutoff against a resolved past value.

use serde::Serialize;

use crate::tier::RankTier;
use crate::types::Lp;

/// Changes within this many LP (inclusive) are reported as flat.
pub const DEFAULT_FLAT_THRESHOLD_LP: Lp = 15;

/// Placeholder rendered when no past value could be resolved.
pub const UNAVAILABLE_MARKER: &str = "UNAVAILABLE";

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Flat,
    Unavailable,
}

impl Direction {
    /// Arrow shown between the past and current value.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Up => "↗",
            Self::Down => "↘",
            Self::Flat => "→",
            Self::Unavailable => "?",
        }
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub direction: Direction,
    pub rendered: String,
}

/// Classify `current` against a resolved `historical` value.
///
/// The flat band is measured against the past value rounded half away from
/// zero; up/down is decided against the unrounded one.
pub fn classify(current: Lp, historical: Option<f64>, flat_threshold: Lp) -> Classification {
    let Some(historical) = historical else {
        return Classification {
            direction: Direction::Unavailable,
            rendered: UNAVAILABLE_MARKER.to_string(),
        };
    };

    let rounded = historical.round() as Lp;
    let direction = if (current - rounded).abs() <= flat_threshold {
        Direction::Flat
    } else if current as f64 > historical {
        Direction::Up
    } else {
        Direction::Down
    };

    Classification {
        direction,
        rendered: format!("{rounded} {} {current}", direction.glyph()),
    }
}

// ---------------------------------------------------------------------------
// Trend record
// ---------------------------------------------------------------------------

/// Result of comparing one tier's current cutoff against one lookback window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendRecord {
    pub label: String,
    pub resolved_value: Option<f64>,
    pub current_value: Lp,
    pub direction: Direction,
    pub rendered: String,
}

impl TrendRecord {
    pub fn new(label: &str, current_value: Lp, resolved_value: Option<f64>, flat_threshold: Lp) -> Self {
        let Classification { direction, rendered } =
            classify(current_value, resolved_value, flat_threshold);
        Self {
            label: label.to_string(),
            resolved_value,
            current_value,
            direction,
            rendered,
        }
    }
}

/// All trend records for one tier, in interval order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierTrends {
    pub tier: RankTier,
    pub current_value: Lp,
    pub records: Vec<TrendRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(current: Lp, historical: f64) -> Direction {
        classify(current, Some(historical), DEFAULT_FLAT_THRESHOLD_LP).direction
    }

    #[test]
    fn delta_of_fifteen_is_flat() {
        assert_eq!(dir(720, 705.0), Direction::Flat);
    }

    #[test]
    fn delta_of_sixteen_is_up() {
        assert_eq!(dir(721, 705.0), Direction::Up);
    }

    #[test]
    fn negative_delta_past_threshold_is_down() {
        assert_eq!(dir(689, 705.0), Direction::Down);
        assert_eq!(dir(690, 705.0), Direction::Flat);
    }

    #[test]
    fn flat_band_uses_rounded_history() {
        // 704.6 rounds to 705: raw delta 15.4 is still flat.
        assert_eq!(dir(720, 704.6), Direction::Flat);
        // 704.4 rounds to 704: delta 16 leaves the band.
        assert_eq!(dir(720, 704.4), Direction::Up);
    }

    #[test]
    fn half_lp_history_rounds_away_from_zero() {
        // 700.5 renders as 701, so 716 sits on the flat boundary.
        let c = classify(716, Some(700.5), DEFAULT_FLAT_THRESHOLD_LP);
        assert_eq!(c.direction, Direction::Flat);
        assert_eq!(c.rendered, "701 → 716");

        // 699.5 renders as 700; 684 is 16 below it.
        let c = classify(684, Some(699.5), DEFAULT_FLAT_THRESHOLD_LP);
        assert_eq!(c.direction, Direction::Down);
        assert_eq!(c.rendered, "700 ↘ 684");
    }

    #[test]
    fn missing_history_is_unavailable_for_any_current() {
        for current in [-50, 0, 700, 2_000] {
            let c = classify(current, None, DEFAULT_FLAT_THRESHOLD_LP);
            assert_eq!(c.direction, Direction::Unavailable);
            assert_eq!(c.rendered, UNAVAILABLE_MARKER);
        }
    }

    #[test]
    fn renders_rounded_history_glyph_and_current() {
        let c = classify(720, Some(704.6), DEFAULT_FLAT_THRESHOLD_LP);
        assert_eq!(c.rendered, "705 → 720");

        let c = classify(760, Some(700.2), DEFAULT_FLAT_THRESHOLD_LP);
        assert_eq!(c.rendered, "700 ↗ 760");

        let c = classify(640, Some(700.0), DEFAULT_FLAT_THRESHOLD_LP);
        assert_eq!(c.rendered, "700 ↘ 640");
    }

    #[test]
    fn zero_threshold_only_accepts_exact_match() {
        assert_eq!(classify(700, Some(700.0), 0).direction, Direction::Flat);
        assert_eq!(classify(701, Some(700.0), 0).direction, Direction::Up);
    }

    #[test]
    fn record_carries_classification() {
        let record = TrendRecord::new("3h", 721, Some(705.0), DEFAULT_FLAT_THRESHOLD_LP);
        assert_eq!(record.label, "3h");
        assert_eq!(record.direction, Direction::Up);
        assert_eq!(record.resolved_value, Some(705.0));
        assert_eq!(record.rendered, "705 ↗ 721");
    }
}
