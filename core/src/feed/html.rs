//! HTML renderer
//!
//! Renders the newsletter page: a card for the latest issue and a list of
//! older issues. Title and summary come from the CMS editorial workflow and
//! are inserted as-is.

use crate::domain::entities::{parse_publish_date, Issues, NewsletterRecord};
use crate::domain::ports::{RenderTarget, ARCHIVE_CONTAINER, LATEST_CONTAINER};

use super::url::resolve_url;

const COMING_SOON: &str = "<div class=\"card\">\n  <h3>Coming Soon</h3>\n  <p class=\"muted\">Stay tuned for our next newsletter issue.</p>\n</div>";

const NO_PAST_ISSUES: &str = "<p class=\"muted\">No past issues yet.</p>";

/// Format a CMS date for display, e.g. `Sep 3, 2025`.
///
/// Dates are shown in UTC. Unparseable input is returned unchanged.
pub fn format_display_date(raw: &str) -> String {
    match parse_publish_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

fn display_date(record: &NewsletterRecord) -> String {
    record
        .publish_date_raw()
        .map(format_display_date)
        .unwrap_or_default()
}

/// Card for the latest issue, or the "coming soon" placeholder
pub fn latest_html(issue: Option<&NewsletterRecord>) -> String {
    let Some(issue) = issue else {
        return COMING_SOON.to_string();
    };

    let mut buf = String::new();
    buf.push_str("<div class=\"card\">\n");
    buf.push_str(&format!("  <h3>{}</h3>\n", issue.display_title()));
    buf.push_str(&format!("  <p class=\"muted\">{}</p>\n", display_date(issue)));
    if let Some(summary) = issue.summary() {
        buf.push_str(&format!("  <p>{}</p>\n", summary));
    }
    buf.push_str(&format!(
        "  <a href=\"{}\" class=\"btn\" style=\"margin-top: 16px;\">Read more</a>\n",
        resolve_url(issue, "")
    ));
    buf.push_str("</div>");
    buf
}

/// One entry per older issue in input order, or the "no past issues" line
pub fn archive_html(issues: &[NewsletterRecord]) -> String {
    if issues.is_empty() {
        return NO_PAST_ISSUES.to_string();
    }

    issues
        .iter()
        .map(render_archive_item)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_archive_item(issue: &NewsletterRecord) -> String {
    format!(
        "<div class=\"archive-item\">\n  <a href=\"{}\">{}</a>\n  <span class=\"muted\">{}</span>\n</div>",
        resolve_url(issue, ""),
        issue.display_title(),
        display_date(issue)
    )
}

/// Populate both page containers from an ordered sequence.
///
/// A container missing from the target is skipped.
pub fn render_page<T: RenderTarget + ?Sized>(target: &mut T, records: &[NewsletterRecord]) {
    let issues = Issues::split(records);

    if !target.set_content(LATEST_CONTAINER, &latest_html(issues.latest)) {
        tracing::debug!(container = LATEST_CONTAINER, "Container not found, skipping");
    }
    if !target.set_content(ARCHIVE_CONTAINER, &archive_html(issues.archive)) {
        tracing::debug!(container = ARCHIVE_CONTAINER, "Container not found, skipping");
    }
}
