use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single scan tick
#[derive(Error, Debug)]
pub enum ScanError {
    /// Event page answered with a non-success status
    #[error("HTTP {status}")]
    Transport { status: StatusCode },

    /// Connection failed or the body could not be read
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Page has no `__NEXT_DATA__` script tag
    #[error("__NEXT_DATA__ not found")]
    NextDataNotFound,

    /// `__NEXT_DATA__` body is not valid JSON
    #[error("invalid __NEXT_DATA__ JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
