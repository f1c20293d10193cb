//! A single tracking run: fetch, record, aggregate, publish.

use lpwatch_core::cutoff::compute_cutoffs;
use lpwatch_core::error::CoreError;
use lpwatch_core::observation::TierCutoffs;
use lpwatch_core::tier::RankTier;
use lpwatch_core::types::Timestamp;
use lpwatch_db::repositories::ObservationRepo;
use lpwatch_db::{DbPool, StorageError};
use lpwatch_events::{render_summary, Notifier, WebhookError};
use lpwatch_pipeline::{AggregationDriver, TierTrends};
use lpwatch_riot::{LadderSource, RiotApiError};

/// Why a run failed. Every variant is fatal for the invocation.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Storage failure: {0}")]
    Storage(#[from] StorageError),

    #[error("Ladder fetch failed: {0}")]
    Fetch(#[from] RiotApiError),

    #[error("Cutoff computation failed: {0}")]
    Cutoff(#[from] CoreError),

    #[error("Notification delivery failed: {0}")]
    Delivery(#[from] WebhookError),
}

/// What a successful run recorded and published.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub cutoffs: TierCutoffs,
    pub trends: Vec<TierTrends>,
    pub summary: String,
    pub delivered: bool,
}

/// Execute one run at `now`.
///
/// The store is initialized before anything is fetched, so an unusable
/// database fails the run without touching the API. The summary is only
/// published after both observations are durably appended. With no
/// `notifier` the summary is logged instead.
pub async fn run_once(
    pool: &DbPool,
    region: &str,
    source: &dyn LadderSource,
    notifier: Option<&dyn Notifier>,
    driver: &AggregationDriver,
    now: Timestamp,
) -> Result<RunOutcome, RunError> {
    ObservationRepo::initialize(pool).await?;

    let ladder = source.fetch_apex_ladder().await?;
    let cutoffs = compute_cutoffs(&ladder.league_points())?;
    tracing::info!(
        players = ladder.len(),
        challenger = cutoffs.challenger,
        grandmaster = cutoffs.grandmaster,
        "Computed tier cutoffs"
    );

    for (tier, cutoff) in cutoffs.iter() {
        if let Some(previous) = ObservationRepo::latest(pool, tier, region).await? {
            tracing::info!(
                tier = %tier,
                previous = previous.cutoff,
                change = cutoff - previous.cutoff,
                since = %previous.timestamp,
                "Previous observation"
            );
        }
    }

    let trends = driver.run(pool, cutoffs, region, now).await?;

    for tier in RankTier::ALL {
        let stored = ObservationRepo::count(pool, tier, region).await?;
        tracing::info!(tier = %tier, region, stored, "History depth");
    }

    let summary = render_summary(region, &trends);

    let delivered = match notifier {
        Some(notifier) => {
            notifier.notify(&summary).await?;
            tracing::info!("Summary delivered");
            true
        }
        None => {
            tracing::info!(%summary, "Dry run, summary not delivered");
            false
        }
    };

    Ok(RunOutcome {
        cutoffs,
        trends,
        summary,
        delivered,
    })
}
