//! Newsletter service
//!
//! Fetches newsletters from a source and hands them to the renderers. The page
//! path is fail-soft (errors collapse to an empty sequence); the feed paths
//! see the error so they can fail loudly.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::domain::entities::NewsletterRecord;
use crate::domain::ports::{NewsletterSource, RenderTarget};
use crate::error::CmsError;
use crate::feed::{build_rss_feed, render_page};

/// Service for fetching and rendering newsletters
pub struct NewsletterService<S>
where
    S: NewsletterSource + ?Sized,
{
    source: Arc<S>,
    site: SiteConfig,
}

impl<S> NewsletterService<S>
where
    S: NewsletterSource + ?Sized,
{
    pub fn new(source: Arc<S>, site: SiteConfig) -> Self {
        Self { source, site }
    }

    /// Fetch up to `limit` records, newest first.
    ///
    /// Never fails: any error is logged and yields an empty sequence.
    pub async fn fetch_newsletters(&self, limit: usize) -> Vec<NewsletterRecord> {
        match self.try_fetch(limit).await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Error fetching newsletters: {}", e);
                Vec::new()
            }
        }
    }

    /// Fetch up to `limit` records, surfacing failures
    pub async fn try_fetch(&self, limit: usize) -> Result<Vec<NewsletterRecord>, CmsError> {
        let records = self.source.query_newsletters(limit).await?;
        tracing::debug!(count = records.len(), limit, "Fetched newsletters");
        Ok(records)
    }

    /// Fetch and render the page containers into `target`
    pub async fn render_page<T: RenderTarget + ?Sized>(&self, target: &mut T, limit: usize) {
        let records = self.fetch_newsletters(limit).await;
        render_page(target, &records);
    }

    /// Fetch and build the RSS document. Fetch failures are returned.
    pub async fn rss_feed(&self, limit: usize) -> Result<String, CmsError> {
        let records = self.try_fetch(limit).await?;
        Ok(build_rss_feed(&records, &self.site))
    }
}
