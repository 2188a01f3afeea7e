//! Deduplicated entry store.
//!
//! Entries are keyed by a fingerprint of their title; insertion is
//! idempotent and the delivered flag moves false to true exactly once.

pub mod repository;
pub mod types;

pub use repository::EntryRepository;
pub use types::{Entry, NewEntry};
