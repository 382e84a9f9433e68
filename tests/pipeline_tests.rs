use blogmap::domain::{extractor, sitemap};
use blogmap::infrastructure::writer::{self, WriteOutcome};
use serde_json::json;

const SITE: &str = "https://example.blogspot.com/";

fn sample_feed() -> serde_json::Value {
    json!({"feed": {"entry": [
        {
            "id": {"$t": "tag:blogger.com,1999:blog-1.post-1"},
            "link": [
                {"rel": "self", "href": "https://example.blogspot.com/feeds/posts/default/1"},
                {"rel": "alternate", "href": "https://example.blogspot.com/2024/03/first.html"}
            ],
            "published": {"$t": "2024-03-15T10:00:00Z"}
        },
        {
            "id": {"$t": "tag:blogger.com,1999:blog-1.post-2"},
            "updated": "2024-04-02T08:30:00-07:00"
        },
        {
            "title": {"$t": "draft without any identifier"}
        }
    ]}})
}

#[test]
fn sitemap_counts_valid_entries_plus_homepage() {
    let records = extractor::extract_records(&sample_feed());
    assert_eq!(records.len(), 2);

    let xml = sitemap::build(SITE, &records).unwrap();
    let xml = String::from_utf8(xml).unwrap();

    // Two posts with a usable loc, plus the pinned homepage.
    assert_eq!(xml.matches("<url>").count(), 3);
    assert!(xml.contains("<loc>https://example.blogspot.com/2024/03/first.html</loc>"));
    assert!(xml.contains("<lastmod>2024-03-15</lastmod>"));
    assert!(xml.contains("<loc>tag:blogger.com,1999:blog-1.post-2</loc>"));
    assert!(xml.contains("<lastmod>2024-04-02</lastmod>"));
}

#[test]
fn empty_feed_produces_homepage_only_sitemap() {
    let records = extractor::extract_records(&json!({"feed": {}}));
    let xml = String::from_utf8(sitemap::build(SITE, &records).unwrap()).unwrap();

    assert_eq!(xml.matches("<url>").count(), 1);
    assert!(xml.contains("<loc>https://example.blogspot.com/</loc>"));
}

#[test]
fn second_run_with_identical_feed_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sitemap.xml");

    let first = sitemap::build(SITE, &extractor::extract_records(&sample_feed())).unwrap();
    assert_eq!(writer::write_if_changed(&path, &first).unwrap(), WriteOutcome::Updated);

    let second = sitemap::build(SITE, &extractor::extract_records(&sample_feed())).unwrap();
    assert_eq!(first, second);
    assert_eq!(writer::write_if_changed(&path, &second).unwrap(), WriteOutcome::Unchanged);

    assert_eq!(std::fs::read(&path).unwrap(), first);
}

#[test]
fn changed_entry_triggers_a_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sitemap.xml");

    let original = sitemap::build(SITE, &extractor::extract_records(&sample_feed())).unwrap();
    writer::write_if_changed(&path, &original).unwrap();

    // Same feed, but the first post picked up a newer published date.
    let mut feed = sample_feed();
    feed["feed"]["entry"][0]["published"]["$t"] = json!("2024-05-01T12:00:00Z");

    let updated = sitemap::build(SITE, &extractor::extract_records(&feed)).unwrap();
    assert_ne!(original, updated);
    assert_eq!(writer::write_if_changed(&path, &updated).unwrap(), WriteOutcome::Updated);
    assert_eq!(std::fs::read(&path).unwrap(), updated);
}
