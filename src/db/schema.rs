//! Database schema and migrations for newsdigest.
//!
//! Migrations are applied sequentially when the database is opened.

/// Database migrations.
///
/// Each migration is a SQL script executed in order. The schema_version
/// table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Initial schema - entries table
    r#"
-- Deduplicated feed entries, keyed by title fingerprint
CREATE TABLE entries (
    fingerprint  TEXT PRIMARY KEY,        -- SHA-256 of lowercased title
    feed_name    TEXT NOT NULL,
    feed_url     TEXT NOT NULL,
    title        TEXT NOT NULL,
    description  TEXT NOT NULL DEFAULT '',
    link         TEXT NOT NULL,
    published_at TEXT NOT NULL DEFAULT '', -- 'YYYY-MM-DD HH:MM:SS' or ''
    delivered    INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX idx_entries_undelivered ON entries(delivered, published_at);
"#,
];
