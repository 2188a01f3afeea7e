//! Entry fingerprinting.
//!
//! The fingerprint is the dedup key for the entry store: a SHA-256
//! digest of the case-folded title, hex-encoded. Two entries whose
//! titles differ only in case collide to the same key on purpose, so a
//! re-fetched headline (from the same feed or a different one) is
//! treated as the same item.

use sha2::{Digest, Sha256};

/// Compute the fingerprint for an entry title.
///
/// Lowercases the title, then hashes it. No other normalization is
/// applied: whitespace or punctuation differences produce different
/// fingerprints.
pub fn fingerprint(title: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.to_lowercase().as_bytes());
    hex::encode(hasher.finalize())
}
