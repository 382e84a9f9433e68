use crate::domain::models::SitemapRecord;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io;
use thiserror::Error;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// The homepage entry is pinned: search engines should re-crawl the blog root
// daily and weight it above individual posts.
const HOMEPAGE_CHANGEFREQ: &str = "daily";
const HOMEPAGE_PRIORITY: &str = "1.0";

#[derive(Error, Debug)]
pub enum SitemapError {
    #[error("XML write failed: {0}")]
    Write(#[from] io::Error),

    #[error("XML serialization failed: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Serializes the sitemap document: homepage first, then one `<url>` per
/// record in feed order.
///
/// Output is a complete UTF-8 XML document with declaration, pretty-printed
/// with 2-space indentation and a trailing newline. Serialization is
/// deterministic, which is what makes the change-detecting write downstream
/// meaningful.
pub fn build(site_url: &str, records: &[SitemapRecord]) -> Result<Vec<u8>, SitemapError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    writer.write_event(Event::Start(urlset))?;

    writer.write_event(Event::Start(BytesStart::new("url")))?;
    write_text_element(&mut writer, "loc", site_url)?;
    write_text_element(&mut writer, "changefreq", HOMEPAGE_CHANGEFREQ)?;
    write_text_element(&mut writer, "priority", HOMEPAGE_PRIORITY)?;
    writer.write_event(Event::End(BytesEnd::new("url")))?;

    for record in records {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &record.loc)?;
        if let Some(lastmod) = &record.lastmod {
            write_text_element(&mut writer, "lastmod", lastmod)?;
        }
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    let mut xml = writer.into_inner();
    xml.push(b'\n');
    Ok(xml)
}

fn write_text_element<W: io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), SitemapError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
