//! Error types for the NEO feed.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for feed operations.
pub type NeoResult<T> = Result<T, NeoError>;

/// Errors that can occur while requesting or decoding the feed.
#[derive(Error, Debug)]
pub enum NeoError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API rate limit reached; wait or use a different key")]
    RateLimited,

    #[error("feed request failed with status {0}")]
    Status(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid date range {start} .. {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}
