use serde::{Deserialize, Serialize};

/// One `<url>` entry of the sitemap, derived from a single feed post.
///
/// `loc` is always present; entries the extractor cannot derive a URL for
/// never become records. `lastmod` is an ISO calendar date (`2024-03-15`)
/// when the post carried a parseable timestamp, a best-effort 10-character
/// prefix when it did not, or absent when the post had no date at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapRecord {
    pub loc: String,
    pub lastmod: Option<String>,
}
