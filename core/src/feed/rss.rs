//! RSS builder
//!
//! Renders newsletters to an RSS 2.0 document. Titles and summaries go into
//! CDATA sections; everything else is XML-escaped text.

use chrono::{DateTime, Utc};

use crate::config::SiteConfig;
use crate::domain::entities::NewsletterRecord;

use super::url::resolve_url;

const CDATA_END: &str = "]]>";
const CDATA_END_ESCAPED: &str = "]]]]><![CDATA[>";

/// Make text safe to embed in a CDATA section.
///
/// Every `]]>` is split across two sections so the enclosing one is not
/// closed early.
pub fn escape_cdata(text: &str) -> String {
    text.replace(CDATA_END, CDATA_END_ESCAPED)
}

/// Escape character data for use outside CDATA
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// RFC 1123 date as RSS readers expect it, e.g. `Wed, 03 Sep 2025 00:00:00 GMT`
pub fn rfc1123(date: &DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Build the feed, stamping undated records with the current time
pub fn build_rss_feed(records: &[NewsletterRecord], site: &SiteConfig) -> String {
    build_rss_feed_at(records, site, Utc::now())
}

/// Build the feed with an explicit generation time
pub fn build_rss_feed_at(
    records: &[NewsletterRecord],
    site: &SiteConfig,
    now: DateTime<Utc>,
) -> String {
    let items: String = records
        .iter()
        .map(|record| render_item(record, &site.base_url, now))
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rss version=\"2.0\">\n  <channel>\n    <title>{}</title>\n    <link>{}/newsletter</link>\n    <description>{}</description>{}\n  </channel>\n</rss>",
        escape_text(&site.feed_title),
        escape_text(&site.base_url),
        escape_text(&site.feed_description),
        items
    )
}

fn render_item(record: &NewsletterRecord, base_url: &str, now: DateTime<Utc>) -> String {
    let pub_date = record.publish_date().unwrap_or(now);

    format!(
        "\n      <item>\n        <title><![CDATA[{}]]></title>\n        <link>{}</link>\n        <guid isPermaLink=\"false\">{}</guid>\n        <pubDate>{}</pubDate>\n        <description><![CDATA[{}]]></description>\n      </item>",
        escape_cdata(record.display_title()),
        escape_text(&resolve_url(record, base_url)),
        escape_text(&record.id),
        rfc1123(&pub_date),
        escape_cdata(record.summary().unwrap_or_default())
    )
}
