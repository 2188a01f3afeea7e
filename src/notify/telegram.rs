//! Telegram Bot API notifier.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::TelegramConfig;
use crate::error::{DigestError, Result};
use crate::notify::Notifier;

/// Base URL of the Telegram Bot API.
const API_BASE: &str = "https://api.telegram.org";

/// Response envelope of the Bot API.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Notifier that delivers digest messages via Telegram.
pub struct TelegramNotifier {
    client: Client,
    api_url: String,
}

impl TelegramNotifier {
    /// Create a notifier from the Telegram configuration.
    pub fn new(config: &TelegramConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.send_timeout_secs))
            .build()
            .map_err(|e| DigestError::Notify(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: format!("{}/bot{}", API_BASE, config.token),
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, subscriber: &str, text: &str) -> Result<()> {
        let url = format!("{}/sendMessage", self.api_url);
        let body = serde_json::json!({
            "chat_id": subscriber,
            "text": text,
            "parse_mode": "Markdown",
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| DigestError::Notify(format!("request failed: {}", e)))?;

        let status = response.status();
        let api: ApiResponse = response
            .json()
            .await
            .map_err(|e| DigestError::Notify(format!("invalid API response: {}", e)))?;

        if !api.ok {
            return Err(DigestError::Notify(format!(
                "sendMessage failed ({}): {}",
                status,
                api.description.unwrap_or_else(|| "unknown error".to_string())
            )));
        }

        Ok(())
    }
}
