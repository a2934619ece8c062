pub mod market;

pub use market::LadderMarket;
