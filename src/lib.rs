//! Polls a Polymarket event page and reports the rungs of a Bitcoin price ladder.

pub mod api;
pub mod config;
pub mod error;
pub mod matching;
pub mod models;
pub mod report;
pub mod workers;

#[cfg(test)]
mod test_support;
