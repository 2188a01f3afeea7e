//! Entry types for the deduplicated feed store.

use crate::fingerprint::fingerprint;

/// A stored feed entry.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Dedup key: content hash of the lowercased title.
    pub fingerprint: String,
    /// Title of the feed this entry came from.
    pub feed_name: String,
    /// Link of the feed this entry came from.
    pub feed_url: String,
    /// Entry title as supplied by the feed (may carry markup).
    pub title: String,
    /// Entry description as supplied by the feed (may carry markup).
    pub description: String,
    /// Canonical URL to the item.
    pub link: String,
    /// Normalized timestamp ('YYYY-MM-DD HH:MM:SS') or empty string.
    pub published_at: String,
    /// Whether this entry was already included in a digest.
    pub delivered: bool,
}

/// A new entry being ingested.
///
/// The fingerprint is derived from the title at construction time, so
/// it can never disagree with the stored title.
#[derive(Debug, Clone)]
pub struct NewEntry {
    /// Dedup key, computed from `title`.
    pub fingerprint: String,
    /// Source feed title.
    pub feed_name: String,
    /// Source feed link.
    pub feed_url: String,
    /// Entry title.
    pub title: String,
    /// Entry description, empty when the feed supplied none.
    pub description: String,
    /// Canonical URL to the item.
    pub link: String,
    /// Normalized timestamp or empty string.
    pub published_at: String,
}

impl NewEntry {
    /// Create a new entry with empty description and timestamp.
    pub fn new(
        feed_name: impl Into<String>,
        feed_url: impl Into<String>,
        title: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        let title = title.into();
        Self {
            fingerprint: fingerprint(&title),
            feed_name: feed_name.into(),
            feed_url: feed_url.into(),
            title,
            description: String::new(),
            link: link.into(),
            published_at: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the normalized publish timestamp.
    pub fn with_published_at(mut self, published_at: impl Into<String>) -> Self {
        self.published_at = published_at.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_defaults() {
        let entry = NewEntry::new("Feed", "https://example.com", "Title", "https://example.com/1");
        assert_eq!(entry.feed_name, "Feed");
        assert_eq!(entry.title, "Title");
        assert_eq!(entry.description, "");
        assert_eq!(entry.published_at, "");
        assert_eq!(entry.fingerprint.len(), 64);
    }

    #[test]
    fn test_new_entry_builders() {
        let entry = NewEntry::new("Feed", "https://example.com", "Title", "https://example.com/1")
            .with_description("Summary text")
            .with_published_at("2024-01-15 10:30:00");
        assert_eq!(entry.description, "Summary text");
        assert_eq!(entry.published_at, "2024-01-15 10:30:00");
    }

    #[test]
    fn test_fingerprint_tracks_title_case_insensitively() {
        let a = NewEntry::new("A", "ua", "AI Breakthrough", "la");
        let b = NewEntry::new("B", "ub", "ai breakthrough", "lb");
        assert_eq!(a.fingerprint, b.fingerprint);

        let c = NewEntry::new("A", "ua", "Other Title", "la");
        assert_ne!(a.fingerprint, c.fingerprint);
    }
}
