//! Console rendering of scan results.

use std::fmt::Write;

use chrono::{DateTime, TimeZone};

use crate::models::LadderMarket;

const MISSING: &str = "undefined";

/// ANSI sequence that clears the terminal and homes the cursor
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// "january-14" -> "January 14"
pub fn display_date_label(date_label: &str) -> String {
    date_label
        .split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Header line printed at the start of each scan
pub fn render_scan_banner<Tz>(now: &DateTime<Tz>, date_label: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "[{}] Scanning Bitcoin {} ladder markets…",
        now.format("%H:%M:%S"),
        display_date_label(date_label)
    )
}

/// Render matching rungs, or a not-found notice when there are none
pub fn render_report(markets: &[LadderMarket], date_label: &str) -> String {
    if markets.is_empty() {
        return format!(
            "❌ No {} Bitcoin ladder markets found.\n",
            display_date_label(date_label)
        );
    }

    let mut out = format!("\n✅ Found {} Bitcoin ladder rungs:\n\n", markets.len());

    for market in markets {
        // Writing into a String cannot fail
        let _ = write!(
            out,
            "🪜 {}\n   Slug: {}\n   Market ID: {}\n   YES Token: {}\n   NO  Token: {}\n\n",
            market.question.as_deref().unwrap_or(MISSING),
            market.slug.as_deref().unwrap_or(MISSING),
            market.id.as_deref().unwrap_or(MISSING),
            market.yes_token().unwrap_or(MISSING),
            market.no_token().unwrap_or(MISSING),
        );
    }

    out
}
