use blogmap::config::Config;
use blogmap::domain::{extractor, sitemap};
use blogmap::infrastructure::fetcher::FeedFetcher;
use blogmap::infrastructure::writer::{self, WriteOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blogmap=info".into()),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Fetching blog feed: {}", config.feed_url);
    let fetcher = FeedFetcher::new()?;
    let feed_json = fetcher.fetch(&config.feed_url).await?;

    let records = extractor::extract_records(&feed_json);
    tracing::info!("Found {} posts", records.len());

    let content = sitemap::build(&config.site_url, &records)?;

    match writer::write_if_changed(&config.output_path, &content)? {
        WriteOutcome::Updated => tracing::info!("Updated {}", config.output_path),
        WriteOutcome::Unchanged => {
            tracing::info!("No changes in {}", config.output_path);
            tracing::info!("Nothing to commit.");
        }
    }

    Ok(())
}
