//! Plain-text rendering of a run's trend records.

use lpwatch_core::trend::TierTrends;

/// Render a chat message summarizing the current cutoffs and their trends.
///
/// ```text
/// Challenger cutoff in NA: >= 721 LP
/// 3h: 705 ↗ 721
/// 1d: UNAVAILABLE
/// ```
///
/// Tiers are separated by a blank line and keep the order they are given in.
pub fn render_summary(region: &str, tiers: &[TierTrends]) -> String {
    tiers
        .iter()
        .map(|t| render_tier(region, t))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_tier(region: &str, trends: &TierTrends) -> String {
    let mut lines = Vec::with_capacity(trends.records.len() + 1);
    lines.push(format!(
        "{} cutoff in {region}: >= {} LP",
        trends.tier.label(),
        trends.current_value
    ));
    for record in &trends.records {
        lines.push(format!("{}: {}", record.label, record.rendered));
    }
    lines.join("\n")
}
