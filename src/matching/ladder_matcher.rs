use crate::models::LadderMarket;

/// Decides whether a market belongs in the report
pub trait MarketMatcher: Send + Sync {
    fn matches(&self, market: &LadderMarket) -> bool;
}

impl<F> MarketMatcher for F
where
    F: Fn(&LadderMarket) -> bool + Send + Sync,
{
    fn matches(&self, market: &LadderMarket) -> bool {
        self(market)
    }
}

/// Matches rungs of a dated ladder by free-text heuristics on slug and question.
///
/// A market is a rung when its slug contains `slug_marker` and either its slug
/// contains `date_label` or its question contains the label with dashes
/// replaced by spaces ("january-14" -> "january 14"). All comparisons are
/// case-insensitive.
#[derive(Debug, Clone)]
pub struct LadderRungMatcher {
    slug_marker: String,
    date_slug: String,
    date_question: String,
}

impl LadderRungMatcher {
    pub fn new(slug_marker: &str, date_label: &str) -> Self {
        let date_slug = date_label.trim().to_lowercase();

        Self {
            slug_marker: slug_marker.trim().to_lowercase(),
            date_question: date_slug.replace('-', " "),
            date_slug,
        }
    }
}

impl Default for LadderRungMatcher {
    fn default() -> Self {
        Self::new("bitcoin-above", "january-14")
    }
}

impl MarketMatcher for LadderRungMatcher {
    fn matches(&self, market: &LadderMarket) -> bool {
        let slug = market.slug_or_empty().to_lowercase();
        let question = market.question_or_empty().to_lowercase();

        slug.contains(&self.slug_marker)
            && (slug.contains(&self.date_slug) || question.contains(&self.date_question))
    }
}
