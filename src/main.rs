use std::process::ExitCode;

use tracing::{error, info};

use newsdigest::{Collector, Config, Database, DigestSelector, FeedFetcher, TelegramNotifier};

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    // Initialize logging
    if let Err(e) = newsdigest::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        newsdigest::logging::init_console_only(&config.logging.level);
    }

    info!("newsdigest starting");

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Run failed: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config) -> newsdigest::Result<()> {
    let db = Database::open(&config.database.path).await?;
    info!(
        "Opened entry store at {} (schema v{})",
        config.database.path,
        db.schema_version().await?
    );

    let fetcher = FeedFetcher::new(&config.collector)?;
    let collector = Collector::new(&db, &fetcher, &config.collector);
    let report = collector.run().await?;
    info!(
        "Collection finished: {} feed(s) ok, {} failed, {} of {} entries were new",
        report.feeds_ok, report.feeds_failed, report.entries_inserted, report.entries_collected
    );

    let notifier = TelegramNotifier::new(&config.telegram)?;
    let selector = DigestSelector::new(&db, &notifier, &config.digest, &config.telegram.subscribers);
    let digest = selector.run().await?;
    info!(
        "Digest finished: {} of {} candidates sent to {} subscriber(s), {} failed",
        digest.selected, digest.candidates, digest.subscribers_ok, digest.subscribers_failed
    );

    Ok(())
}
