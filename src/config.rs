//! Configuration module for newsdigest.

use serde::Deserialize;
use std::path::Path;

use crate::{DigestError, Result};

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/newsdigest.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/newsdigest.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Collector configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectorConfig {
    /// Feed URLs to ingest.
    #[serde(default)]
    pub urls: Vec<String>,
    /// Maximum number of feeds fetched concurrently.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds.
    #[serde(default = "default_total_timeout")]
    pub total_timeout_secs: u64,
    /// Maximum feed size in bytes.
    #[serde(default = "default_max_feed_size")]
    pub max_feed_size_bytes: u64,
}

fn default_concurrency() -> usize {
    4
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_total_timeout() -> u64 {
    30
}

fn default_max_feed_size() -> u64 {
    5 * 1024 * 1024 // 5MB
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            concurrency: default_concurrency(),
            connect_timeout_secs: default_connect_timeout(),
            total_timeout_secs: default_total_timeout(),
            max_feed_size_bytes: default_max_feed_size(),
        }
    }
}

/// Digest selection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DigestConfig {
    /// Number of entries delivered per digest.
    #[serde(default = "default_daily_quota")]
    pub daily_quota: usize,
    /// Recency ceiling: undelivered entries considered per run.
    #[serde(default = "default_candidate_limit")]
    pub candidate_limit: usize,
    /// Timezone for the digest header date (e.g., "Asia/Tokyo", "UTC").
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_daily_quota() -> usize {
    10
}

fn default_candidate_limit() -> usize {
    200
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            daily_quota: default_daily_quota(),
            candidate_limit: default_candidate_limit(),
            timezone: default_timezone(),
        }
    }
}

/// Telegram notifier configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot API token. Can also be set via NEWSDIGEST_BOT_TOKEN.
    #[serde(default)]
    pub token: String,
    /// Subscriber chat ids (numeric id or @channel).
    #[serde(default)]
    pub subscribers: Vec<String>,
    /// Request timeout in seconds per send.
    #[serde(default = "default_send_timeout")]
    pub send_timeout_secs: u64,
}

fn default_send_timeout() -> u64 {
    10
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            subscribers: Vec::new(),
            send_timeout_secs: default_send_timeout(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Collector settings.
    #[serde(default)]
    pub collector: CollectorConfig,
    /// Digest settings.
    #[serde(default)]
    pub digest: DigestConfig,
    /// Telegram settings.
    #[serde(default)]
    pub telegram: TelegramConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(DigestError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| DigestError::Validation(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `NEWSDIGEST_BOT_TOKEN`: Override the Telegram bot token
    pub fn apply_env_overrides(&mut self) {
        if let Ok(token) = std::env::var("NEWSDIGEST_BOT_TOKEN") {
            if !token.is_empty() {
                self.telegram.token = token;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - Subscribers are configured but the bot token is not set
    /// - The daily quota is zero or exceeds the candidate limit
    pub fn validate(&self) -> Result<()> {
        if !self.telegram.subscribers.is_empty() && self.telegram.token.is_empty() {
            return Err(DigestError::Validation(
                "telegram subscribers are configured but token is not set. \
                 Set it in config.toml or via NEWSDIGEST_BOT_TOKEN."
                    .to_string(),
            ));
        }
        if self.digest.daily_quota == 0 {
            return Err(DigestError::Validation(
                "digest.daily_quota must be at least 1".to_string(),
            ));
        }
        if self.digest.daily_quota > self.digest.candidate_limit {
            return Err(DigestError::Validation(format!(
                "digest.daily_quota ({}) exceeds digest.candidate_limit ({})",
                self.digest.daily_quota, self.digest.candidate_limit
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.database.path, "data/newsdigest.db");
        assert_eq!(config.logging.level, "info");
        assert!(config.collector.urls.is_empty());
        assert_eq!(config.collector.concurrency, 4);
        assert_eq!(config.digest.daily_quota, 10);
        assert_eq!(config.digest.candidate_limit, 200);
        assert_eq!(config.digest.timezone, "UTC");
        assert!(config.telegram.subscribers.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [database]
            path = "test.db"

            [logging]
            level = "debug"
            file = "test.log"

            [collector]
            urls = ["https://example.com/feed.xml", "https://example.org/atom"]
            concurrency = 2

            [digest]
            daily_quota = 5
            candidate_limit = 100
            timezone = "Asia/Tokyo"

            [telegram]
            token = "123:abc"
            subscribers = ["1001", "@channel"]
        "#;
        let config = Config::parse(toml).unwrap();

        assert_eq!(config.database.path, "test.db");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.collector.urls.len(), 2);
        assert_eq!(config.collector.concurrency, 2);
        assert_eq!(config.digest.daily_quota, 5);
        assert_eq!(config.digest.timezone, "Asia/Tokyo");
        assert_eq!(config.telegram.token, "123:abc");
        assert_eq!(config.telegram.subscribers, vec!["1001", "@channel"]);
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let toml = r#"
            [collector]
            urls = ["https://example.com/feed.xml"]
        "#;
        let config = Config::parse(toml).unwrap();

        assert_eq!(config.collector.urls.len(), 1);
        assert_eq!(config.collector.connect_timeout_secs, 10);
        assert_eq!(config.digest.daily_quota, 10);
    }

    #[test]
    fn test_parse_invalid_config() {
        assert!(Config::parse("not valid toml [[").is_err());
    }

    #[test]
    fn test_validate_ok() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_subscribers_without_token() {
        let mut config = Config::default();
        config.telegram.subscribers = vec!["1001".to_string()];
        assert!(matches!(
            config.validate(),
            Err(DigestError::Validation(_))
        ));

        config.telegram.token = "123:abc".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_quota_bounds() {
        let mut config = Config::default();
        config.digest.daily_quota = 0;
        assert!(config.validate().is_err());

        config.digest.daily_quota = 300;
        config.digest.candidate_limit = 200;
        assert!(config.validate().is_err());

        config.digest.daily_quota = 200;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_override_token() {
        let mut config = Config::default();
        std::env::set_var("NEWSDIGEST_BOT_TOKEN", "env:token");
        config.apply_env_overrides();
        std::env::remove_var("NEWSDIGEST_BOT_TOKEN");

        assert_eq!(config.telegram.token, "env:token");
    }
}
