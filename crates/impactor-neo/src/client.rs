//! Feed sources: the HTTP client and the trait the store fetches through.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::error::{NeoError, NeoResult};
use crate::feed::NeoFeed;
use crate::request::{FeedRequest, DEFAULT_BASE_URL};

/// Anything that can answer a feed request.
pub trait NeoSource {
    fn fetch_feed(&self, request: &FeedRequest) -> NeoResult<NeoFeed>;
}

/// Blocking HTTP client for the NeoWs API. Single attempt, no retries.
pub struct HttpNeoClient {
    client: Client,
    base_url: String,
}

impl HttpNeoClient {
    pub fn new() -> NeoResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> NeoResult<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Use a preconfigured HTTP client (proxy, TLS or timeout settings).
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl NeoSource for HttpNeoClient {
    fn fetch_feed(&self, request: &FeedRequest) -> NeoResult<NeoFeed> {
        let url = request.url(&self.base_url);
        log::debug!(
            "fetching NEO feed {} .. {}",
            request.start_date,
            request.end_date
        );

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(NeoError::RateLimited);
        }
        if !status.is_success() {
            return Err(NeoError::Status(status.as_u16()));
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}
