//! Feed request parameters and URL construction.

use chrono::NaiveDate;

use crate::error::{NeoError, NeoResult};

/// Public NeoWs endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/neo/rest/v1";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "NASA_API_KEY";

/// Shared, heavily rate-limited key used when none is configured.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Longest span the feed endpoint accepts (days, inclusive).
pub const MAX_SPAN_DAYS: i64 = 7;

/// A feed query over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub api_key: String,
    pub detailed: bool,
}

impl FeedRequest {
    /// Query a date range. Rejects reversed ranges and spans over a week.
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        api_key: impl Into<String>,
    ) -> NeoResult<Self> {
        let span = (end_date - start_date).num_days();
        if !(0..MAX_SPAN_DAYS).contains(&span) {
            return Err(NeoError::InvalidRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
            api_key: api_key.into(),
            detailed: true,
        })
    }

    /// Query a single day.
    pub fn for_day(date: NaiveDate, api_key: impl Into<String>) -> Self {
        Self {
            start_date: date,
            end_date: date,
            api_key: api_key.into(),
            detailed: true,
        }
    }

    /// Full request URL against `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/feed?start_date={}&end_date={}&api_key={}&detailed={}",
            base_url.trim_end_matches('/'),
            self.start_date.format("%Y-%m-%d"),
            self.end_date.format("%Y-%m-%d"),
            self.api_key,
            self.detailed,
        )
    }
}

/// API key from `NASA_API_KEY`, falling back to the demo key.
pub fn api_key_from_env() -> String {
    std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .unwrap_or_else(|| DEMO_API_KEY.to_string())
}

/// Feed map key for `date`.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
