//! Replace one region's cutoff history with synthetic hourly samples.

use anyhow::Context;
use chrono::Utc;
use lpwatch_worker::seed::{seed_region, DEFAULT_PLANS};
use lpwatch_worker::{telemetry, StoreConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    telemetry::init("lpwatch_seed=info,lpwatch_worker=info,lpwatch_db=info");

    let config = StoreConfig::from_env();
    let pool = lpwatch_db::create_pool(&config.database_url)
        .await
        .context("Failed to open observation store")?;

    let written = seed_region(
        &pool,
        &config.region,
        &DEFAULT_PLANS,
        Utc::now(),
        &mut rand::rng(),
    )
    .await
    .context("Failed to seed history")?;

    tracing::info!(
        database_url = %config.database_url,
        region = %config.region,
        written,
        "Synthetic history written"
    );

    pool.close().await;
    Ok(())
}
