use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use btc_ladder_scanner::api::EventPageClient;
use btc_ladder_scanner::config::Config;
use btc_ladder_scanner::matching::LadderRungMatcher;
use btc_ladder_scanner::workers::{LadderScannerWorker, ScannerSettings};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout carries the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "btc_ladder_scanner=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting btc-ladder-scanner");

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded");

    let client = EventPageClient::new(&config.polymarket_web_url, &config.user_agent);
    let matcher = LadderRungMatcher::new(&config.slug_marker, &config.date_label);

    let scanner = LadderScannerWorker::new(
        client,
        matcher,
        ScannerSettings {
            event_slug: config.event_slug.clone(),
            date_label: config.date_label.clone(),
            scan_interval: Duration::from_millis(config.scan_interval_ms),
            clear_screen: config.clear_screen,
        },
    );

    let handle = scanner.spawn();
    info!("Scanner started");

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    handle.stop().await?;

    info!("Shutting down btc-ladder-scanner");
    Ok(())
}
