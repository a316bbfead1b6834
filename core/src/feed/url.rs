//! Record URL resolution
//!
//! One rule for the page and the feed: a well-formed external link wins,
//! otherwise the issue lives at `{base}/newsletter/{slug-or-id}`.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::NewsletterRecord;

static EXTERNAL_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("external link pattern is valid"));

/// True for absolute `http://` or `https://` URLs
pub fn is_external_link(link: &str) -> bool {
    EXTERNAL_LINK.is_match(link)
}

/// Resolve where a record should link to.
///
/// `base` is the site origin without a trailing slash; pass `""` for a
/// site-relative path.
pub fn resolve_url(record: &NewsletterRecord, base: &str) -> String {
    match record.link() {
        Some(link) if is_external_link(link) => link.to_string(),
        _ => format!("{}/newsletter/{}", base, record.path_segment()),
    }
}
