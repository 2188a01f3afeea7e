//! Notifier capability.
//!
//! The digest selector hands messages to a [`Notifier`]; the production
//! implementation is [`TelegramNotifier`]. Per-subscriber failures are
//! the caller's to isolate.

pub mod telegram;

pub use telegram::TelegramNotifier;

use async_trait::async_trait;

use crate::Result;

/// Capability for delivering a text message to one subscriber.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send `text` to the subscriber. The text uses a small markdown
    /// subset (links and emphasis).
    async fn send(&self, subscriber: &str, text: &str) -> Result<()>;
}
