use std::env;

use anyhow::{ensure, Context, Result};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Polymarket website base URL (event pages live under `/event/<slug>`)
    pub polymarket_web_url: String,

    /// Parent event whose page lists the ladder rungs
    pub event_slug: String,

    /// Substring every rung slug must contain
    pub slug_marker: String,

    /// Resolution date label in slug form (e.g. "january-14")
    pub date_label: String,

    /// Interval in milliseconds between scans
    pub scan_interval_ms: u64,

    /// User-Agent sent with the page request
    pub user_agent: String,

    /// Clear the terminal before each scan
    pub clear_screen: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let scan_interval_ms: u64 = env::var("SCAN_INTERVAL_MS")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .context("SCAN_INTERVAL_MS must be a valid number")?;
        ensure!(scan_interval_ms > 0, "SCAN_INTERVAL_MS must be greater than zero");

        Ok(Config {
            polymarket_web_url: env::var("POLYMARKET_WEB_URL")
                .unwrap_or_else(|_| "https://polymarket.com".to_string()),

            event_slug: env::var("LADDER_EVENT_SLUG")
                .unwrap_or_else(|_| "bitcoin-above-on-january-14".to_string()),

            slug_marker: env::var("LADDER_SLUG_MARKER")
                .unwrap_or_else(|_| "bitcoin-above".to_string()),

            date_label: env::var("LADDER_DATE_LABEL")
                .unwrap_or_else(|_| "january-14".to_string()),

            scan_interval_ms,

            user_agent: env::var("SCAN_USER_AGENT").unwrap_or_else(|_| "Mozilla/5.0".to_string()),

            clear_screen: env::var("SCAN_CLEAR_SCREEN")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .context("SCAN_CLEAR_SCREEN must be true or false")?,
        })
    }
}
