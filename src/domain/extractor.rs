use crate::domain::models::SitemapRecord;
use chrono::DateTime;
use serde_json::Value;

/// Maps the Blogger feed document to the ordered list of sitemap records.
///
/// Feed data quality varies a lot in the wild, so this is deliberately
/// tolerant: a missing `feed.entry` is an empty feed, an entry without a
/// derivable URL is dropped, and a date that will not parse degrades to a
/// truncated string. Nothing here returns an error.
pub fn extract_records(feed_json: &Value) -> Vec<SitemapRecord> {
    let entries = feed_json
        .get("feed")
        .and_then(|feed| feed.get("entry"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut records = Vec::with_capacity(entries.len());

    for entry in entries {
        let Some(loc) = entry_loc(entry) else {
            tracing::debug!("Skipping feed entry without a usable post URL");
            continue;
        };

        records.push(SitemapRecord {
            loc,
            lastmod: entry_lastmod(entry),
        });
    }

    records
}

/// Canonical post URL: the first `rel="alternate"` link, falling back to the
/// entry id (plain string or Blogger's `{"$t": ...}` wrapper).
fn entry_loc(entry: &Value) -> Option<String> {
    if let Some(links) = entry.get("link").and_then(Value::as_array) {
        for link in links {
            if link.get("rel").and_then(Value::as_str) == Some("alternate") {
                if let Some(href) = link.get("href").and_then(Value::as_str) {
                    if !href.is_empty() {
                        return Some(href.to_string());
                    }
                }
            }
        }
    }

    let id = match entry.get("id") {
        Some(Value::Object(map)) => map.get("$t").and_then(Value::as_str),
        Some(Value::String(s)) => Some(s.as_str()),
        _ => None,
    };

    id.filter(|s| !s.is_empty()).map(str::to_string)
}

/// Last-modified date for the entry. The first of `published`/`updated`
/// that exists decides; if its value carries no usable string the entry
/// simply gets no `lastmod`.
fn entry_lastmod(entry: &Value) -> Option<String> {
    let raw = ["published", "updated"]
        .iter()
        .find_map(|key| entry.get(*key))?;

    let raw = match raw {
        Value::Object(map) => map.get("$t").and_then(Value::as_str)?,
        Value::String(s) => s.as_str(),
        _ => return None,
    };

    if raw.is_empty() {
        return None;
    }

    Some(normalize_date(raw))
}

/// Normalizes a feed timestamp to an ISO calendar date.
///
/// Blogger emits RFC 3339 timestamps (`2024-03-15T10:00:00Z` or with a
/// numeric offset). Anything that fails to parse falls back to the first
/// ten characters of the raw string, unvalidated.
fn normalize_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.date_naive().to_string(),
        Err(_) => raw.chars().take(10).collect(),
    }
}
