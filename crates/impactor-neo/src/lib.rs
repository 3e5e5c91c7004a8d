//! Near-Earth object feed for IMPACTOR.
//!
//! Typed models of the public NeoWs feed, a blocking HTTP client keyed by
//! date, and a store that keeps the last good data when a fetch fails.

pub mod client;
pub mod error;
pub mod feed;
pub mod request;
pub mod store;

pub use client::{HttpNeoClient, NeoSource};
pub use error::{NeoError, NeoResult};
pub use feed::{NearEarthObject, NeoFeed};
pub use request::FeedRequest;
pub use store::NeoStore;
