//! Digest selection and delivery.
//!
//! Selection phase of a run: loads the most recent undelivered entries
//! up to the candidate ceiling, shuffles them uniformly and truncates
//! to the daily quota. Selected entries are marked delivered before
//! the first notifier call; a notifier failure therefore never causes
//! a re-send in a later run, at the cost of skipping entries nobody
//! received. Per-subscriber failures are isolated.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{info, warn};

use crate::config::DigestConfig;
use crate::datetime::today_in_timezone;
use crate::digest::render::{render_entry, render_header};
use crate::notify::Notifier;
use crate::store::{Entry, EntryRepository};
use crate::{Database, Result};

/// Summary of one selection/delivery run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestReport {
    /// Undelivered candidates considered (after the recency ceiling).
    pub candidates: usize,
    /// Entries selected, marked delivered and rendered.
    pub selected: usize,
    /// Subscribers that received the full digest.
    pub subscribers_ok: usize,
    /// Subscribers skipped after a delivery failure.
    pub subscribers_failed: usize,
}

/// Digest selector over the entry store and a notifier.
pub struct DigestSelector<'a> {
    db: &'a Database,
    notifier: &'a dyn Notifier,
    config: &'a DigestConfig,
    subscribers: &'a [String],
}

impl<'a> DigestSelector<'a> {
    /// Create a selector for the given store, notifier and subscribers.
    pub fn new(
        db: &'a Database,
        notifier: &'a dyn Notifier,
        config: &'a DigestConfig,
        subscribers: &'a [String],
    ) -> Self {
        Self {
            db,
            notifier,
            config,
            subscribers,
        }
    }

    /// Run one selection and delivery pass.
    ///
    /// With zero undelivered entries nothing is sent (not even the
    /// header) and the store is left untouched.
    pub async fn run(&self) -> Result<DigestReport> {
        let repo = EntryRepository::new(self.db.pool());

        let candidates = repo.list_undelivered(self.config.candidate_limit).await?;
        if candidates.is_empty() {
            info!("No undelivered entries, skipping digest");
            return Ok(DigestReport {
                candidates: 0,
                selected: 0,
                subscribers_ok: 0,
                subscribers_failed: 0,
            });
        }

        let candidate_count = candidates.len();
        let selected = {
            let mut rng = rand::rng();
            select(candidates, self.config.daily_quota, &mut rng)
        };

        info!(
            "Selected {} of {} undelivered entries for the digest",
            selected.len(),
            candidate_count
        );

        let fingerprints: Vec<String> =
            selected.iter().map(|e| e.fingerprint.clone()).collect();

        let mut messages = Vec::with_capacity(selected.len() + 1);
        messages.push(render_header(&today_in_timezone(&self.config.timezone)));
        for entry in &selected {
            messages.push(render_entry(entry));
        }

        // Mark before sending; see module docs for the tradeoff.
        repo.mark_delivered(&fingerprints).await?;

        let mut subscribers_ok = 0;
        let mut subscribers_failed = 0;

        for subscriber in self.subscribers {
            info!("Sending digest to {}", subscriber);
            match self.deliver_to(subscriber, &messages).await {
                Ok(()) => subscribers_ok += 1,
                Err(e) => {
                    subscribers_failed += 1;
                    warn!("Delivery to {} failed: {}", subscriber, e);
                }
            }
        }

        info!(
            "Digest delivered: {} entries, {} subscriber(s) ok, {} failed",
            selected.len(),
            subscribers_ok,
            subscribers_failed
        );

        Ok(DigestReport {
            candidates: candidate_count,
            selected: selected.len(),
            subscribers_ok,
            subscribers_failed,
        })
    }

    /// Send all digest messages to one subscriber, in order.
    async fn deliver_to(&self, subscriber: &str, messages: &[String]) -> Result<()> {
        for message in messages {
            self.notifier.send(subscriber, message).await?;
        }
        Ok(())
    }
}

/// Uniformly shuffle the candidates, then truncate to `quota`.
///
/// The candidates are already recency-capped by the caller; this
/// two-stage policy (recent pool first, random pick second) is what
/// keeps the digest fresh without always favoring the same feeds.
pub fn select<R: Rng + ?Sized>(mut candidates: Vec<Entry>, quota: usize, rng: &mut R) -> Vec<Entry> {
    candidates.shuffle(rng);
    candidates.truncate(quota);
    candidates
}
