//! Test fixtures
//!
//! Factory functions for newsletter records with sensible defaults.

use chrono::{Duration, TimeZone, Utc};

use crate::domain::entities::NewsletterRecord;

/// Create a record with the fields the renderers care about
pub fn test_record(id: &str, title: &str, publish_date: &str, slug: Option<&str>) -> NewsletterRecord {
    NewsletterRecord {
        id: id.to_string(),
        title: Some(title.to_string()),
        summary: None,
        publish_date: Some(publish_date.to_string()),
        slug: slug.map(str::to_string),
        link: None,
    }
}

/// `n` records ordered newest first: ids `1..=n`, titles `Issue {i}`,
/// slugs `issue-{i}`, one week apart.
pub fn test_records(n: usize) -> Vec<NewsletterRecord> {
    let newest = Utc.with_ymd_and_hms(2025, 9, 3, 0, 0, 0).unwrap();
    (1..=n)
        .map(|i| {
            let date = newest - Duration::weeks(i as i64 - 1);
            let mut record = test_record(
                &i.to_string(),
                &format!("Issue {}", i),
                &date.to_rfc3339(),
                Some(format!("issue-{}", i).as_str()),
            );
            record.summary = Some(format!("Summary of issue {}", i));
            record
        })
        .collect()
}
