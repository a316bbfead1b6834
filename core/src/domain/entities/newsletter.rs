//! Newsletter domain entity
//!
//! Newsletters are authored in Sanity (source of truth). This entity is the
//! read-only view the fetcher receives from the query API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

/// Title shown when a record has none
pub const UNTITLED: &str = "Untitled";

/// A newsletter issue as returned by the CMS query
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewsletterRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, rename = "publishDate")]
    pub publish_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_slug")]
    pub slug: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl NewsletterRecord {
    /// Display title, `Untitled` when missing or blank
    pub fn display_title(&self) -> &str {
        non_empty(&self.title).unwrap_or(UNTITLED)
    }

    pub fn summary(&self) -> Option<&str> {
        non_empty(&self.summary)
    }

    pub fn slug(&self) -> Option<&str> {
        non_empty(&self.slug)
    }

    pub fn link(&self) -> Option<&str> {
        non_empty(&self.link)
    }

    /// Raw publish date string as stored in the CMS
    pub fn publish_date_raw(&self) -> Option<&str> {
        non_empty(&self.publish_date)
    }

    /// Parsed publish date.
    ///
    /// Accepts RFC 3339 datetimes and bare `YYYY-MM-DD` dates (midnight UTC).
    pub fn publish_date(&self) -> Option<DateTime<Utc>> {
        self.publish_date_raw().and_then(parse_publish_date)
    }

    /// Path segment for internal URLs: the slug, or the id when there is none
    pub fn path_segment(&self) -> &str {
        self.slug().unwrap_or(&self.id)
    }
}

/// Parse a CMS datetime string into UTC
pub fn parse_publish_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Sanity returns `slug` either projected (`"slug": slug.current`) or as the
/// raw `{ "_type": "slug", "current": "..." }` object.
fn deserialize_slug<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SlugField {
        Plain(String),
        Object { current: Option<String> },
    }

    Ok(match Option::<SlugField>::deserialize(deserializer)? {
        Some(SlugField::Plain(s)) => Some(s),
        Some(SlugField::Object { current }) => current,
        None => None,
    })
}

/// Envelope of the Sanity query API
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default, deserialize_with = "deserialize_records")]
    pub result: Vec<NewsletterRecord>,
}

/// Deserialize `result` one record at a time so a single malformed document
/// does not empty the whole page. `null` counts as no records.
fn deserialize_records<'de, D>(deserializer: D) -> Result<Vec<NewsletterRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;

    Ok(values
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<NewsletterRecord>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping malformed newsletter record: {}", e);
                None
            }
        })
        .collect())
}

/// The page view of a fetched sequence: newest issue plus everything older
#[derive(Debug, Clone, Copy)]
pub struct Issues<'a> {
    pub latest: Option<&'a NewsletterRecord>,
    pub archive: &'a [NewsletterRecord],
}

impl<'a> Issues<'a> {
    /// Split an already-ordered sequence. No re-sorting happens here.
    pub fn split(records: &'a [NewsletterRecord]) -> Self {
        match records.split_first() {
            Some((latest, archive)) => Self {
                latest: Some(latest),
                archive,
            },
            None => Self {
                latest: None,
                archive: &[],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn deserializes_projected_record() {
        let json = r#"{
            "_id": "abc",
            "title": "Issue One",
            "summary": "Teaser",
            "publishDate": "2025-09-03T00:00:00Z",
            "slug": "issue-one",
            "link": null
        }"#;
        let record: NewsletterRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "abc");
        assert_eq!(record.display_title(), "Issue One");
        assert_eq!(record.summary(), Some("Teaser"));
        assert_eq!(record.slug(), Some("issue-one"));
        assert_eq!(record.link(), None);
    }

    #[test]
    fn deserializes_raw_slug_object() {
        let json = r#"{"_id": "abc", "slug": {"_type": "slug", "current": "from-object"}}"#;
        let record: NewsletterRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.slug(), Some("from-object"));
    }

    #[test]
    fn missing_fields_default_to_none() {
        let record: NewsletterRecord = serde_json::from_str(r#"{"_id": "only-id"}"#).unwrap();
        assert_eq!(record.display_title(), UNTITLED);
        assert_eq!(record.summary(), None);
        assert_eq!(record.publish_date(), None);
        assert_eq!(record.path_segment(), "only-id");
    }

    #[test]
    fn empty_strings_behave_like_missing() {
        let record = NewsletterRecord {
            id: "x".to_string(),
            title: Some(String::new()),
            summary: Some(String::new()),
            publish_date: None,
            slug: Some(String::new()),
            link: Some(String::new()),
        };
        assert_eq!(record.display_title(), UNTITLED);
        assert_eq!(record.summary(), None);
        assert_eq!(record.path_segment(), "x");
        assert_eq!(record.link(), None);
    }

    #[test]
    fn parses_datetime_and_bare_date() {
        let dt = parse_publish_date("2025-09-03T14:30:00.000Z").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2025, 9, 3, 14));

        let dt = parse_publish_date("2025-09-03T01:00:00+02:00").unwrap();
        assert_eq!((dt.day(), dt.hour()), (2, 23));

        let d = parse_publish_date("2025-09-03").unwrap();
        assert_eq!((d.month(), d.day(), d.hour()), (9, 3, 0));

        assert!(parse_publish_date("next tuesday").is_none());
    }

    #[test]
    fn null_result_is_empty() {
        let response: QueryResponse = serde_json::from_str(r#"{"result": null}"#).unwrap();
        assert!(response.result.is_empty());

        let response: QueryResponse = serde_json::from_str(r#"{"ms": 3}"#).unwrap();
        assert!(response.result.is_empty());
    }

    #[test]
    fn malformed_records_are_skipped_individually() {
        let json = r#"{"result": [
            {"_id": "1", "title": 42},
            {"_id": "2", "title": "Kept"},
            {"title": "No id"},
            "not an object",
            {"_id": "3", "publishDate": "2025-09-03T00:00:00Z"}
        ]}"#;
        let response: QueryResponse = serde_json::from_str(json).unwrap();

        let ids: Vec<&str> = response.result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
        assert_eq!(response.result[0].display_title(), "Kept");
    }

    #[test]
    fn split_separates_latest_from_archive() {
        let records: Vec<NewsletterRecord> = ["a", "b", "c"]
            .iter()
            .map(|id| serde_json::from_str(&format!(r#"{{"_id": "{}"}}"#, id)).unwrap())
            .collect();

        let issues = Issues::split(&records);
        assert_eq!(issues.latest.map(|r| r.id.as_str()), Some("a"));
        let archive: Vec<&str> = issues.archive.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(archive, vec!["b", "c"]);

        let empty = Issues::split(&[]);
        assert!(empty.latest.is_none());
        assert!(empty.archive.is_empty());
    }
}
