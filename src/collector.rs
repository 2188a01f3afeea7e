//! Feed collector.
//!
//! Ingestion phase of a run: fetches every configured feed URL,
//! normalizes the returned entries into store records and submits them
//! as one idempotent batch. A failing feed is logged and skipped; it
//! never aborts ingestion of the other feeds.

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::config::CollectorConfig;
use crate::datetime::to_store_format;
use crate::feed::{FeedSource, FetchedEntry, FetchedFeed};
use crate::store::{EntryRepository, NewEntry};
use crate::{Database, Result};

/// Summary of one ingestion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorReport {
    /// Feeds fetched and parsed successfully.
    pub feeds_ok: usize,
    /// Feeds skipped after a fetch or parse failure.
    pub feeds_failed: usize,
    /// Entries collected across all successful feeds.
    pub entries_collected: usize,
    /// Entries newly inserted into the store.
    pub entries_inserted: u64,
}

/// Collector for the ingestion phase.
pub struct Collector<'a> {
    db: &'a Database,
    source: &'a dyn FeedSource,
    config: &'a CollectorConfig,
}

impl<'a> Collector<'a> {
    /// Create a collector over the given store and feed source.
    pub fn new(db: &'a Database, source: &'a dyn FeedSource, config: &'a CollectorConfig) -> Self {
        Self { db, source, config }
    }

    /// Run one ingestion pass over all configured feed URLs.
    ///
    /// Feeds are fetched concurrently (bounded by the configured worker
    /// count); the store is written once, after all fetches settle.
    /// Only a storage failure is fatal.
    pub async fn run(&self) -> Result<CollectorReport> {
        let concurrency = self.config.concurrency.max(1);

        let results: Vec<(String, Result<FetchedFeed>)> =
            stream::iter(self.config.urls.iter().cloned())
                .map(|url| async move {
                    info!("Collecting from {}", url);
                    let result = self.source.fetch(&url).await;
                    (url, result)
                })
                .buffer_unordered(concurrency)
                .collect()
                .await;

        let mut batch = Vec::new();
        let mut feeds_ok = 0;
        let mut feeds_failed = 0;

        for (url, result) in results {
            match result {
                Ok(feed) => {
                    feeds_ok += 1;
                    for entry in &feed.entries {
                        batch.push(build_entry(&feed, entry));
                    }
                }
                Err(e) => {
                    feeds_failed += 1;
                    warn!("Skipping feed {}: {}", url, e);
                }
            }
        }

        info!(
            "Collected {} entries from {} feed(s) ({} failed)",
            batch.len(),
            feeds_ok,
            feeds_failed
        );

        let repo = EntryRepository::new(self.db.pool());
        let entries_inserted = repo.insert_if_absent(&batch).await?;

        info!("{} new entries inserted into the store", entries_inserted);

        Ok(CollectorReport {
            feeds_ok,
            feeds_failed,
            entries_collected: batch.len(),
            entries_inserted,
        })
    }
}

/// Build a store record from a raw feed entry.
///
/// The publish timestamp prefers the updated time, falls back to the
/// published time and is empty when the feed supplied neither.
fn build_entry(feed: &FetchedFeed, entry: &FetchedEntry) -> NewEntry {
    let published_at = entry
        .updated
        .or(entry.published)
        .map(|dt| to_store_format(&dt))
        .unwrap_or_default();

    NewEntry::new(&feed.title, &feed.link, &entry.title, &entry.link)
        .with_description(entry.description.clone().unwrap_or_default())
        .with_published_at(published_at)
}
