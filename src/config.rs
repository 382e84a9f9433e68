use std::env;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set (put it in the environment or a .env file)")]
    Missing(&'static str),

    #[error("Invalid {name}: {reason}")]
    InvalidUrl { name: &'static str, reason: String },
}

#[derive(Clone)]
pub struct Config {
    /// Blogger JSON feed endpoint, e.g.
    /// `https://example.blogspot.com/feeds/posts/default?alt=json&max-results=500`.
    pub feed_url: String,
    /// Canonical site root, used as the homepage `<loc>`.
    pub site_url: String,
    /// Where the sitemap lands on disk.
    pub output_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let feed_url = env::var("BLOG_FEED_URL").map_err(|_| ConfigError::Missing("BLOG_FEED_URL"))?;
        validate_http_url("BLOG_FEED_URL", &feed_url)?;

        let site_url = env::var("SITE_URL").map_err(|_| ConfigError::Missing("SITE_URL"))?;
        validate_http_url("SITE_URL", &site_url)?;

        let output_path = env::var("SITEMAP_PATH").unwrap_or_else(|_| "sitemap.xml".to_string());

        Ok(Config {
            feed_url,
            site_url,
            output_path,
        })
    }
}

/// Both configured URLs have to be absolute http(s) URLs; anything else is a
/// configuration mistake worth failing on before the network call.
fn validate_http_url(name: &'static str, value: &str) -> Result<(), ConfigError> {
    let parsed = Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        name,
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidUrl {
            name,
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
