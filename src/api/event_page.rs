use reqwest::Client;
use tracing::{debug, warn};

use crate::error::ScanError;

/// Client for Polymarket event pages (server-rendered HTML)
pub struct EventPageClient {
    client: Client,
    base_url: String,
    user_agent: String,
}

impl EventPageClient {
    /// Create a new event page client
    pub fn new(base_url: &str, user_agent: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: user_agent.to_string(),
        }
    }

    /// URL of the page for an event slug
    pub fn event_url(&self, event_slug: &str) -> String {
        format!("{}/event/{}", self.base_url, urlencoding::encode(event_slug))
    }

    /// Fetch the raw HTML of an event page
    pub async fn fetch_event_html(&self, event_slug: &str) -> Result<String, ScanError> {
        let url = self.event_url(event_slug);
        debug!("Fetching event page: {}", url);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Event page error: {} for {}", status, url);
            return Err(ScanError::Transport { status });
        }

        let html = response.text().await?;
        debug!("Fetched {} bytes from {}", html.len(), url);

        Ok(html)
    }
}
