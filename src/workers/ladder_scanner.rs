use std::time::Duration;

use chrono::Local;
use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::api::{extract_next_data, locate_markets, EventPageClient};
use crate::error::ScanError;
use crate::matching::MarketMatcher;
use crate::models::LadderMarket;
use crate::report::{render_report, render_scan_banner, CLEAR_SCREEN};

/// Shortest accepted interval; a zero period would make the timer panic
const MIN_SCAN_INTERVAL: Duration = Duration::from_millis(1);

/// What to scan and how often
#[derive(Debug, Clone)]
pub struct ScannerSettings {
    /// Parent event page to fetch
    pub event_slug: String,

    /// Date label used for console output (e.g. "january-14")
    pub date_label: String,

    /// Delay between scans (raised to 1ms if zero)
    pub scan_interval: Duration,

    /// Clear the terminal before each scan banner
    pub clear_screen: bool,
}

/// Worker that periodically scrapes an event page for ladder rungs
pub struct LadderScannerWorker {
    client: EventPageClient,
    matcher: Box<dyn MarketMatcher>,
    settings: ScannerSettings,
}

/// Owns a running scanner task
pub struct ScannerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl ScannerHandle {
    /// Ask the scanner to stop and wait for it.
    ///
    /// A scan already in progress finishes before the task exits.
    pub async fn stop(self) -> Result<(), JoinError> {
        let _ = self.shutdown.send(true);
        self.task.await
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl LadderScannerWorker {
    /// Create a new ladder scanner worker
    pub fn new(
        client: EventPageClient,
        matcher: impl MarketMatcher + 'static,
        mut settings: ScannerSettings,
    ) -> Self {
        settings.scan_interval = settings.scan_interval.max(MIN_SCAN_INTERVAL);

        Self {
            client,
            matcher: Box::new(matcher),
            settings,
        }
    }

    /// Start the worker loop on its own task
    pub fn spawn(self) -> ScannerHandle {
        let (shutdown, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(async move {
            self.run(shutdown_rx).await;
        });

        ScannerHandle { shutdown, task }
    }

    /// Run the worker loop until shutdown is signalled.
    ///
    /// Scans once immediately, then on every interval tick. Scans never
    /// overlap: ticks missed while a scan is running are skipped.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        info!(
            "Ladder scanner started (event: {}, interval: {:?})",
            self.settings.event_slug, self.settings.scan_interval
        );

        let mut interval = time::interval(self.settings.scan_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.changed() => break,
                // First tick completes immediately
                _ = interval.tick() => {
                    self.tick().await;
                }
            }
        }

        info!("Ladder scanner stopped");
    }

    /// Run one scan and print its result; failures are logged, never propagated.
    ///
    /// Returns whether the scan succeeded.
    pub async fn tick(&self) -> bool {
        if self.settings.clear_screen {
            print!("{}", CLEAR_SCREEN);
        }
        println!(
            "{}",
            render_scan_banner(&Local::now(), &self.settings.date_label)
        );

        match self.scan_once().await {
            Ok(markets) => {
                print!("{}", render_report(&markets, &self.settings.date_label));
                true
            }
            Err(e) => {
                error!("Scanner error: {}", e);
                false
            }
        }
    }

    /// Fetch the event page and return the rungs accepted by the matcher
    pub async fn scan_once(&self) -> Result<Vec<LadderMarket>, ScanError> {
        let html = self
            .client
            .fetch_event_html(&self.settings.event_slug)
            .await?;
        let payload = extract_next_data(&html)?;
        let markets = locate_markets(&payload, self.matcher.as_ref());

        debug!("Scan matched {} markets", markets.len());
        Ok(markets)
    }
}
