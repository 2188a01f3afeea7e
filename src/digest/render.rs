//! Digest message rendering.
//!
//! Messages use the small markdown subset the notifier understands:
//! a link for the title, plain text for the rest.

use crate::store::Entry;
use crate::text::{strip_html, truncate_words};

/// Maximum number of description tokens per message.
const DESCRIPTION_WORDS: usize = 40;

/// Render the digest header for the given date (YYYY-MM-DD).
pub fn render_header(date: &str) -> String {
    format!("News of the Day {}", date)
}

/// Render one digest message for an entry.
///
/// Title and description are sanitized; the description is truncated
/// to its first 40 whitespace tokens and the timestamp to its date part.
pub fn render_entry(entry: &Entry) -> String {
    let title = strip_html(&entry.title);
    let description = truncate_words(&strip_html(&entry.description), DESCRIPTION_WORDS);
    let date: String = entry.published_at.chars().take(10).collect();

    format!(
        "[{}]({})\n{} - {}\n> {} ...",
        title, entry.link, date, entry.feed_name, description
    )
}
