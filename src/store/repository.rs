//! Entry repository for newsdigest.

use super::types::{Entry, NewEntry};
use crate::db::DbPool;
use crate::{DigestError, Result};

/// Row type for an entry from the database.
#[derive(Debug, Clone, sqlx::FromRow)]
struct EntryRow {
    fingerprint: String,
    feed_name: String,
    feed_url: String,
    title: String,
    description: String,
    link: String,
    published_at: String,
    delivered: bool,
}

impl From<EntryRow> for Entry {
    fn from(row: EntryRow) -> Self {
        Entry {
            fingerprint: row.fingerprint,
            feed_name: row.feed_name,
            feed_url: row.feed_url,
            title: row.title,
            description: row.description,
            link: row.link,
            published_at: row.published_at,
            delivered: row.delivered,
        }
    }
}

/// Repository for entry store operations.
pub struct EntryRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> EntryRepository<'a> {
    /// Create a new repository instance.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert entries whose fingerprint is not yet present.
    ///
    /// Existing rows keep all stored fields, including the delivered
    /// flag. The whole batch runs in one transaction. Returns the
    /// number of rows actually inserted.
    pub async fn insert_if_absent(&self, entries: &[NewEntry]) -> Result<u64> {
        if entries.is_empty() {
            return Ok(0);
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DigestError::Database(e.to_string()))?;

        let mut inserted = 0;
        for entry in entries {
            let result = sqlx::query(
                r#"
                INSERT OR IGNORE INTO entries
                    (fingerprint, feed_name, feed_url, title, description, link, published_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(&entry.fingerprint)
            .bind(&entry.feed_name)
            .bind(&entry.feed_url)
            .bind(&entry.title)
            .bind(&entry.description)
            .bind(&entry.link)
            .bind(&entry.published_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| DigestError::Database(e.to_string()))?;

            inserted += result.rows_affected();
        }

        tx.commit()
            .await
            .map_err(|e| DigestError::Database(e.to_string()))?;

        Ok(inserted)
    }

    /// Get an entry by fingerprint.
    pub async fn get(&self, fingerprint: &str) -> Result<Option<Entry>> {
        let row = sqlx::query_as::<_, EntryRow>(
            r#"
            SELECT fingerprint, feed_name, feed_url, title, description,
                   link, published_at, delivered
            FROM entries
            WHERE fingerprint = $1
            "#,
        )
        .bind(fingerprint)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| DigestError::Database(e.to_string()))?;

        Ok(row.map(Entry::from))
    }

    /// List undelivered entries, most recent first, capped at `limit`.
    ///
    /// Entries without a publish timestamp sort last.
    pub async fn list_undelivered(&self, limit: usize) -> Result<Vec<Entry>> {
        let rows = sqlx::query_as::<_, EntryRow>(
            r#"
            SELECT fingerprint, feed_name, feed_url, title, description,
                   link, published_at, delivered
            FROM entries
            WHERE delivered = 0
            ORDER BY (published_at = '') ASC, published_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(self.pool)
        .await
        .map_err(|e| DigestError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Entry::from).collect())
    }

    /// Mark the given fingerprints as delivered.
    ///
    /// Unknown fingerprints are ignored; the empty set is a no-op.
    /// The delivered flag only ever transitions false to true.
    /// Returns the number of rows updated.
    pub async fn mark_delivered(&self, fingerprints: &[String]) -> Result<u64> {
        if fingerprints.is_empty() {
            return Ok(0);
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DigestError::Database(e.to_string()))?;

        let mut updated = 0;
        for fp in fingerprints {
            let result = sqlx::query("UPDATE entries SET delivered = 1 WHERE fingerprint = $1")
                .bind(fp)
                .execute(&mut *tx)
                .await
                .map_err(|e| DigestError::Database(e.to_string()))?;
            updated += result.rows_affected();
        }

        tx.commit()
            .await
            .map_err(|e| DigestError::Database(e.to_string()))?;

        Ok(updated)
    }

    /// Count all entries.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM entries")
            .fetch_one(self.pool)
            .await
            .map_err(|e| DigestError::Database(e.to_string()))?;
        Ok(count)
    }

    /// Count undelivered entries.
    pub async fn count_undelivered(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM entries WHERE delivered = 0")
            .fetch_one(self.pool)
            .await
            .map_err(|e| DigestError::Database(e.to_string()))?;
        Ok(count)
    }
}
