pub mod ladder_matcher;

pub use ladder_matcher::{LadderRungMatcher, MarketMatcher};
