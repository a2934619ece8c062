//! Extraction of the Next.js `__NEXT_DATA__` payload and the market list
//! buried in its dehydrated react-query state.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::error::ScanError;
use crate::matching::MarketMatcher;
use crate::models::LadderMarket;

static NEXT_DATA_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<script id="__NEXT_DATA__"[^>]*>(.*?)</script>"#).expect("valid regex")
});

const QUERIES_POINTER: &str = "/props/pageProps/dehydratedState/queries";

/// Extract and parse the `__NEXT_DATA__` script body from an HTML page
pub fn extract_next_data(html: &str) -> Result<Value, ScanError> {
    let body = NEXT_DATA_PATTERN
        .captures(html)
        .and_then(|captures| captures.get(1))
        .ok_or(ScanError::NextDataNotFound)?;

    debug!("__NEXT_DATA__ payload is {} bytes", body.as_str().len());

    Ok(serde_json::from_str(body.as_str())?)
}

/// Return the `markets` array of the first dehydrated query that has one
pub fn find_market_list(payload: &Value) -> Option<&Vec<Value>> {
    let queries = payload.pointer(QUERIES_POINTER).and_then(Value::as_array)?;

    queries.iter().enumerate().find_map(|(index, query)| {
        let markets = query
            .pointer("/state/data")
            .and_then(|data| data.get("markets"))
            .and_then(Value::as_array)?;

        debug!("Using markets from query {} ({} markets)", index, markets.len());
        Some(markets)
    })
}

/// Locate the page's market list and keep the entries the matcher accepts.
///
/// Only the first query carrying a `markets` array is consulted; later
/// queries are never merged in. Missing structure yields an empty list.
pub fn locate_markets(payload: &Value, matcher: &dyn MarketMatcher) -> Vec<LadderMarket> {
    let Some(markets) = find_market_list(payload) else {
        debug!("No query with a markets list in payload");
        return Vec::new();
    };

    markets
        .iter()
        .map(LadderMarket::from_value)
        .filter(|market| matcher.matches(market))
        .collect()
}
