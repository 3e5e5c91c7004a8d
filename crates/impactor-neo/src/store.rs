//! Feed store: the last successfully fetched feed plus fetch status.
//!
//! A failed fetch leaves the previous date and data in place and only
//! raises the error flag.

use chrono::NaiveDate;

use crate::client::NeoSource;
use crate::error::NeoResult;
use crate::feed::{NearEarthObject, NeoFeed};
use crate::request::{date_key, FeedRequest};

#[derive(Debug, Clone, Default)]
pub struct NeoStore {
    date: Option<NaiveDate>,
    is_fetching: bool,
    error: bool,
    detail: Option<NeoFeed>,
}

impl NeoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Date of the data currently held.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    /// Whether the most recent fetch failed.
    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn detail(&self) -> Option<&NeoFeed> {
        self.detail.as_ref()
    }

    /// Mark a fetch as in progress.
    pub fn begin(&mut self) {
        self.is_fetching = true;
    }

    /// Record the outcome of a fetch for `date`.
    pub fn apply(&mut self, date: NaiveDate, result: NeoResult<NeoFeed>) -> NeoResult<()> {
        self.is_fetching = false;
        match result {
            Ok(feed) => {
                log::info!("loaded {} near-earth objects for {date}", feed.element_count);
                self.date = Some(date);
                self.detail = Some(feed);
                self.error = false;
                Ok(())
            }
            Err(err) => {
                log::error!("NEO fetch for {date} failed: {err}");
                self.error = true;
                Err(err)
            }
        }
    }

    /// Fetch one day's feed from `source` and record the outcome.
    pub fn fetch<S: NeoSource + ?Sized>(
        &mut self,
        source: &S,
        date: NaiveDate,
        api_key: &str,
    ) -> NeoResult<()> {
        self.begin();
        let result = source.fetch_feed(&FeedRequest::for_day(date, api_key));
        self.apply(date, result)
    }

    /// Objects approaching on `date`; empty when none are held.
    pub fn objects_for(&self, date: NaiveDate) -> &[NearEarthObject] {
        self.detail
            .as_ref()
            .and_then(|feed| feed.near_earth_objects.get(&date_key(date)))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Objects for the held date.
    pub fn current_objects(&self) -> &[NearEarthObject] {
        match self.date {
            Some(date) => self.objects_for(date),
            None => &[],
        }
    }
}
