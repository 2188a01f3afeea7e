//! Feed source capability.
//!
//! The collector talks to feeds through the [`FeedSource`] trait so
//! the pipeline can be exercised with fakes in tests. The production
//! implementation is [`FeedFetcher`].

pub mod fetcher;
pub mod types;

pub use fetcher::{validate_url, FeedFetcher};
pub use types::{FetchedEntry, FetchedFeed};

use async_trait::async_trait;

use crate::Result;

/// Capability for fetching raw entries from a feed URL.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch and parse the feed at `url`.
    async fn fetch(&self, url: &str) -> Result<FetchedFeed>;
}
