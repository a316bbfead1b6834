//! CMS port trait
//!
//! Defines the interface for reading newsletters from the content platform.

use async_trait::async_trait;

use crate::domain::entities::NewsletterRecord;
use crate::error::CmsError;

/// Read-only source of newsletter records
#[async_trait]
pub trait NewsletterSource: Send + Sync {
    /// Fetch up to `limit` records ordered by publish date, newest first.
    ///
    /// Ordering is the source's job; callers never re-sort.
    async fn query_newsletters(&self, limit: usize) -> Result<Vec<NewsletterRecord>, CmsError>;
}
