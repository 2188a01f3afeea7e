//! newsdigest - feed deduplication and digest delivery
//!
//! Collects entries from RSS/Atom feeds into a persistent SQLite store,
//! deduplicating by a case-insensitive title fingerprint, then delivers
//! a bounded random digest of undelivered entries to Telegram
//! subscribers.

pub mod collector;
pub mod config;
pub mod datetime;
pub mod db;
pub mod digest;
pub mod error;
pub mod feed;
pub mod fingerprint;
pub mod logging;
pub mod notify;
pub mod store;
pub mod text;

pub use collector::{Collector, CollectorReport};
pub use config::Config;
pub use db::Database;
pub use digest::{DigestReport, DigestSelector};
pub use error::{DigestError, Result};
pub use feed::{FeedFetcher, FeedSource, FetchedEntry, FetchedFeed};
pub use fingerprint::fingerprint;
pub use notify::{Notifier, TelegramNotifier};
pub use store::{Entry, EntryRepository, NewEntry};
