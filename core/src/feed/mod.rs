//! Feed module
//!
//! Renders fetched newsletters into HTML page fragments and RSS 2.0.

pub mod html;
pub mod rss;
pub mod url;

pub use html::{archive_html, format_display_date, latest_html, render_page};
pub use rss::{build_rss_feed, build_rss_feed_at, escape_cdata, rfc1123};
pub use url::{is_external_link, resolve_url};
