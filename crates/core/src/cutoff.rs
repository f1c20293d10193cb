//! Tier cutoffs from the merged apex ladder.
//!
//! After a bracket update the top [`CHALLENGER_SLOTS`] players by LP form
//! Challenger and the next [`GRANDMASTER_SLOTS`] form Grandmaster, regardless
//! of which list they were fetched from. A tier's cutoff is one LP above the
//! last player seated in it.

use crate::error::CoreError;
use crate::observation::TierCutoffs;
use crate::tier::{RankTier, CHALLENGER_SLOTS, GRANDMASTER_SLOTS};
use crate::types::Lp;

/// Compute both tier cutoffs from the LP values of every apex player.
///
/// `league_points` may be in any order and may come from any mix of the
/// Challenger, Grandmaster and Master lists.
pub fn compute_cutoffs(league_points: &[Lp]) -> Result<TierCutoffs, CoreError> {
    let mut sorted = league_points.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let challenger = seat_cutoff(&sorted, 0, CHALLENGER_SLOTS, RankTier::Challenger)?;
    let grandmaster = seat_cutoff(
        &sorted,
        CHALLENGER_SLOTS,
        CHALLENGER_SLOTS + GRANDMASTER_SLOTS,
        RankTier::Grandmaster,
    )?;

    Ok(TierCutoffs {
        challenger,
        grandmaster,
    })
}

/// Cutoff for seats `[start, end)` of a descending ladder, clamped to its
/// length.
fn seat_cutoff(sorted_desc: &[Lp], start: usize, end: usize, tier: RankTier) -> Result<Lp, CoreError> {
    let end = end.min(sorted_desc.len());
    if start >= end {
        return Err(CoreError::Validation(format!(
            "{} has no seated players: ladder holds {} apex players",
            tier.label(),
            sorted_desc.len()
        )));
    }
    Ok(sorted_desc[end - 1] + 1)
}
