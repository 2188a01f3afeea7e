//! Test helpers for pipeline tests.
//!
//! Provides fake feed sources and notifiers plus config builders, so
//! tests can drive the full collect-then-digest pipeline without any
//! network access.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use newsdigest::config::{CollectorConfig, DigestConfig};
use newsdigest::{DigestError, FeedSource, FetchedEntry, FetchedFeed, Notifier, Result};

/// Feed source fake: maps URLs to canned feeds; unknown URLs fail.
pub struct FakeFeedSource {
    feeds: HashMap<String, FetchedFeed>,
}

impl FakeFeedSource {
    pub fn new() -> Self {
        Self {
            feeds: HashMap::new(),
        }
    }

    pub fn with_feed(mut self, url: &str, feed: FetchedFeed) -> Self {
        self.feeds.insert(url.to_string(), feed);
        self
    }
}

#[async_trait]
impl FeedSource for FakeFeedSource {
    async fn fetch(&self, url: &str) -> Result<FetchedFeed> {
        self.feeds
            .get(url)
            .cloned()
            .ok_or_else(|| DigestError::Feed(format!("unreachable: {}", url)))
    }
}

/// Notifier fake that records every send and can fail per subscriber.
pub struct FakeNotifier {
    sent: Mutex<Vec<(String, String)>>,
    failing: HashSet<String>,
}

impl FakeNotifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: HashSet::new(),
        }
    }

    #[allow(dead_code)]
    pub fn failing_for(mut self, subscriber: &str) -> Self {
        self.failing.insert(subscriber.to_string());
        self
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for FakeNotifier {
    async fn send(&self, subscriber: &str, text: &str) -> Result<()> {
        if self.failing.contains(subscriber) {
            return Err(DigestError::Notify("unreachable subscriber".to_string()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((subscriber.to_string(), text.to_string()));
        Ok(())
    }
}

/// Build a feed with the given title and entries, hosted at example.com.
pub fn feed(title: &str, entries: Vec<FetchedEntry>) -> FetchedFeed {
    FetchedFeed {
        title: title.to_string(),
        link: "https://example.com".to_string(),
        entries,
    }
}

/// Build an undated entry with a derived description and link.
pub fn entry(title: &str) -> FetchedEntry {
    FetchedEntry {
        title: title.to_string(),
        description: Some(format!("{} description", title)),
        link: format!("https://example.com/{}", title.replace(' ', "-")),
        updated: None,
        published: None,
    }
}

/// Collector config over the given URLs, defaults elsewhere.
pub fn collector_config(urls: Vec<&str>) -> CollectorConfig {
    CollectorConfig {
        urls: urls.into_iter().map(String::from).collect(),
        ..Default::default()
    }
}

/// Digest config with the given quota, defaults elsewhere.
pub fn digest_config(daily_quota: usize) -> DigestConfig {
    DigestConfig {
        daily_quota,
        ..Default::default()
    }
}
