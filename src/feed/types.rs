//! Raw feed data returned by a feed source.

use chrono::{DateTime, Utc};

/// A fetched and parsed feed.
#[derive(Debug, Clone)]
pub struct FetchedFeed {
    /// Feed title.
    pub title: String,
    /// Site link of the feed.
    pub link: String,
    /// Entries in document order.
    pub entries: Vec<FetchedEntry>,
}

/// A raw entry from a fetched feed.
#[derive(Debug, Clone)]
pub struct FetchedEntry {
    /// Entry title.
    pub title: String,
    /// Entry description/summary, when the feed supplied one.
    pub description: Option<String>,
    /// Link to the original article.
    pub link: String,
    /// When the entry was last updated.
    pub updated: Option<DateTime<Utc>>,
    /// When the entry was published.
    pub published: Option<DateTime<Utc>>,
}
