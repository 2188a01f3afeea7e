//! HTTP feed fetcher.
//!
//! Fetches and parses RSS/Atom feeds with timeouts, a redirect cap and
//! a response size limit.

use async_trait::async_trait;
use feed_rs::parser;
use reqwest::Client;
use std::time::Duration;

use crate::config::CollectorConfig;
use crate::error::{DigestError, Result};
use crate::feed::types::{FetchedEntry, FetchedFeed};
use crate::feed::FeedSource;

/// Maximum number of redirects to follow.
const MAX_REDIRECTS: usize = 5;

/// User agent string for feed fetching.
const USER_AGENT: &str = "newsdigest/0.1 (feed collector)";

/// Feed fetcher backed by reqwest and feed-rs.
pub struct FeedFetcher {
    client: Client,
    max_feed_size: u64,
}

impl FeedFetcher {
    /// Create a fetcher with timeouts and size limit from the config.
    pub fn new(config: &CollectorConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.total_timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DigestError::Feed(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            max_feed_size: config.max_feed_size_bytes,
        })
    }
}

#[async_trait]
impl FeedSource for FeedFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedFeed> {
        validate_url(url)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DigestError::Feed(format!("failed to fetch feed: {}", e)))?;

        if !response.status().is_success() {
            return Err(DigestError::Feed(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        if let Some(content_length) = response.content_length() {
            if content_length > self.max_feed_size {
                return Err(DigestError::Feed(format!(
                    "feed too large: {} bytes (max {} bytes)",
                    content_length, self.max_feed_size
                )));
            }
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DigestError::Feed(format!("failed to read response: {}", e)))?;

        if bytes.len() as u64 > self.max_feed_size {
            return Err(DigestError::Feed(format!(
                "feed too large: {} bytes (max {} bytes)",
                bytes.len(),
                self.max_feed_size
            )));
        }

        parse_feed(&bytes)
    }
}

/// Validate a feed URL: must parse and use http or https.
pub fn validate_url(url: &str) -> Result<()> {
    let parsed =
        url::Url::parse(url).map_err(|e| DigestError::Feed(format!("invalid URL: {}", e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(DigestError::Feed(format!(
            "unsupported URL scheme: {}",
            scheme
        ))),
    }
}

/// Parse feed bytes into a FetchedFeed.
fn parse_feed(bytes: &[u8]) -> Result<FetchedFeed> {
    let feed = parser::parse(bytes)
        .map_err(|e| DigestError::Feed(format!("failed to parse feed: {}", e)))?;

    let title = feed
        .title
        .map(|t| t.content)
        .unwrap_or_else(|| "Untitled Feed".to_string());
    let link = feed.links.first().map(|l| l.href.clone()).unwrap_or_default();

    let entries: Vec<FetchedEntry> = feed
        .entries
        .into_iter()
        .map(|entry| {
            let entry_title = entry
                .title
                .map(|t| t.content)
                .unwrap_or_else(|| "Untitled".to_string());
            let entry_link = entry.links.first().map(|l| l.href.clone()).unwrap_or_default();
            let description = entry
                .summary
                .map(|t| t.content)
                .or(entry.content.and_then(|c| c.body));

            FetchedEntry {
                title: entry_title,
                description,
                link: entry_link,
                updated: entry.updated,
                published: entry.published,
            }
        })
        .collect();

    Ok(FetchedFeed {
        title,
        link,
        entries,
    })
}
