pub mod config;
pub mod domain;
pub mod infrastructure;

/// Returns the user agent sent with the feed request.
///
/// Blogger serves the JSON feed to browser-like agents; the string is kept
/// stable across versions so feed-side logs stay consistent.
pub fn user_agent() -> &'static str {
    "Mozilla/5.0 (compatible; SitemapGenerator/1.0)"
}
