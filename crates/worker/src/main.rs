use anyhow::Context;
use chrono::Utc;
use lpwatch_events::{Notifier, WebhookDelivery};
use lpwatch_pipeline::AggregationDriver;
use lpwatch_riot::RiotApi;
use lpwatch_worker::{run_once, telemetry, WorkerConfig};
use tracing::Instrument;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    telemetry::init("lpwatch_worker=info,lpwatch_pipeline=info,lpwatch_db=info,lpwatch_riot=info");

    let config = WorkerConfig::from_env().context("Invalid configuration")?;
    let run_id = uuid::Uuid::now_v7();
    let span = tracing::info_span!("run", %run_id, region = %config.store.region);

    let result = run(config).instrument(span).await;
    if let Err(e) = &result {
        tracing::error!(%run_id, error = %format!("{e:#}"), "Run failed");
    }
    result
}

async fn run(config: WorkerConfig) -> anyhow::Result<()> {
    let pool = lpwatch_db::create_pool(&config.store.database_url)
        .await
        .context("Failed to open observation store")?;
    lpwatch_db::health_check(&pool)
        .await
        .context("Observation store health check failed")?;
    tracing::info!(database_url = %config.store.database_url, "Observation store opened");

    let riot = RiotApi::new(
        &config.riot_platform,
        config.riot_api_key.clone(),
        config.http_timeout,
    )
    .context("Failed to build Riot API client")?;

    let webhook = match (&config.discord_webhook, config.dry_run) {
        (Some(url), false) => Some(
            WebhookDelivery::new(url.clone(), config.http_timeout)
                .context("Failed to build webhook client")?,
        ),
        _ => None,
    };
    let notifier = webhook.as_ref().map(|w| w as &dyn Notifier);

    let outcome = run_once(
        &pool,
        &config.store.region,
        &riot,
        notifier,
        &AggregationDriver::default(),
        Utc::now(),
    )
    .await
    .context("Tracking run failed")?;

    tracing::info!(
        challenger = outcome.cutoffs.challenger,
        grandmaster = outcome.cutoffs.grandmaster,
        delivered = outcome.delivered,
        "Run complete"
    );

    pool.close().await;
    Ok(())
}
