//! Lookback windows over irregularly sampled cutoff history.
//!
//! "The cutoff N hours ago" is approximated by averaging every observation in
//! `[now - (N + tol), now - (N - tol)]`. Runs are scheduled roughly hourly but
//! may be skipped, so a window is only trusted when it holds at least
//! `tol / 2` samples.

use chrono::Duration;

use crate::types::{Lp, Timestamp};

/// Milliseconds per hour, for converting fractional hour offsets.
const MS_PER_HOUR: f64 = 3_600_000.0;

// ---------------------------------------------------------------------------
// Interval specs
// ---------------------------------------------------------------------------

/// A lookback target with its tolerance band and display label.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct IntervalSpec {
    pub target_hours: f64,
    pub tolerance_hours: f64,
    pub label: &'static str,
}

impl IntervalSpec {
    pub const fn new(target_hours: f64, tolerance_hours: f64, label: &'static str) -> Self {
        Self {
            target_hours,
            tolerance_hours,
            label,
        }
    }
}

/// Short, medium and long lookbacks, in reporting order.
pub const DEFAULT_INTERVALS: [IntervalSpec; 3] = [
    IntervalSpec::new(3.0, 1.0, "3h"),
    IntervalSpec::new(24.0, 3.0, "1d"),
    IntervalSpec::new(168.0, 12.0, "7d"),
];

// ---------------------------------------------------------------------------
// Window math
// ---------------------------------------------------------------------------

/// Convert a fractional hour count into a [`Duration`], rounded to the
/// nearest millisecond.
pub fn hours(h: f64) -> Duration {
    Duration::milliseconds((h * MS_PER_HOUR).round() as i64)
}

/// Inclusive bounds of the window centred `target_hours` before `now`.
pub fn window_bounds(
    now: Timestamp,
    target_hours: f64,
    tolerance_hours: f64,
) -> (Timestamp, Timestamp) {
    let earliest = now - hours(target_hours + tolerance_hours);
    let latest = now - hours(target_hours - tolerance_hours);
    (earliest, latest)
}

/// Minimum number of samples a window of the given tolerance must hold.
///
/// Assumes hourly sampling: a `2 * tol` hour window should hold about
/// `2 * tol` samples, and fewer than a quarter of that is not trusted.
/// Deliberately fractional; a tolerance of 1 hour yields 0.5.
pub fn expected_min_count(tolerance_hours: f64) -> f64 {
    tolerance_hours / 2.0
}

/// Whether `count` samples are enough for a window of this tolerance.
pub fn is_sufficient(count: usize, tolerance_hours: f64) -> bool {
    count > 0 && (count as f64) >= expected_min_count(tolerance_hours)
}

/// Reduce the cutoffs matched by a window to a single representative value.
///
/// Returns `None` when the window is too sparse to be trusted.
pub fn reduce_window(cutoffs: &[Lp], tolerance_hours: f64) -> Option<f64> {
    if !is_sufficient(cutoffs.len(), tolerance_hours) {
        return None;
    }
    let sum: f64 = cutoffs.iter().map(|&c| c as f64).sum();
    Some(sum / cutoffs.len() as f64)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
