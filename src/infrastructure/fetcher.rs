use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed with status {status}: {message}")]
    RequestFailed { status: StatusCode, message: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Feed is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub struct FeedFetcher {
    client: Client,
}

impl FeedFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(crate::user_agent())
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client })
    }

    /// Issues the single GET for the feed and decodes the body as JSON.
    ///
    /// One shot by design: no retries, no conditional headers. A failure
    /// here aborts the whole run.
    pub async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        tracing::debug!("Fetching feed: {}", url);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("Feed fetch failed with status {}: {}", status, url);

            let message = format!(
                "{} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );

            return Err(FetchError::RequestFailed { status, message });
        }

        let body = response.text().await?;
        let feed: Value = serde_json::from_str(&body)?;

        tracing::debug!("Feed response decoded ({} bytes)", body.len());

        Ok(feed)
    }
}

impl Default for FeedFetcher {
    fn default() -> Self {
        Self::new().expect("Failed to create FeedFetcher")
    }
}
