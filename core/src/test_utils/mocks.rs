//! Mock implementations of port traits
//!
//! In-memory sources and render targets that record what they were asked.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::NewsletterRecord;
use crate::domain::ports::{NewsletterSource, RenderTarget};
use crate::error::CmsError;

// ============================================================================
// In-Memory Newsletter Source
// ============================================================================

#[derive(Default)]
pub struct InMemoryNewsletterSource {
    records: Vec<NewsletterRecord>,
    requested: Arc<RwLock<Vec<usize>>>,
}

impl InMemoryNewsletterSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with records, already in newest-first order
    pub fn with_records(mut self, records: Vec<NewsletterRecord>) -> Self {
        self.records = records;
        self
    }

    /// Limits passed to each query, in call order
    pub fn requested_limits(&self) -> Vec<usize> {
        self.requested.read().unwrap().clone()
    }
}

#[async_trait]
impl NewsletterSource for InMemoryNewsletterSource {
    async fn query_newsletters(&self, limit: usize) -> Result<Vec<NewsletterRecord>, CmsError> {
        self.requested.write().unwrap().push(limit);
        Ok(self.records.iter().take(limit).cloned().collect())
    }
}

// ============================================================================
// Failing Newsletter Source
// ============================================================================

/// Source whose every query fails with an API error
pub struct FailingNewsletterSource {
    status: u16,
}

impl FailingNewsletterSource {
    pub fn new(status: u16) -> Self {
        Self { status }
    }
}

#[async_trait]
impl NewsletterSource for FailingNewsletterSource {
    async fn query_newsletters(&self, _limit: usize) -> Result<Vec<NewsletterRecord>, CmsError> {
        Err(CmsError::Api {
            status: self.status,
            message: "mock failure".to_string(),
        })
    }
}

// ============================================================================
// Memory Render Target
// ============================================================================

/// Render target backed by a map of container id to content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTarget {
    containers: HashMap<String, String>,
}

impl MemoryTarget {
    pub fn with_containers(ids: &[&str]) -> Self {
        Self {
            containers: ids
                .iter()
                .map(|id| (id.to_string(), String::new()))
                .collect(),
        }
    }

    /// Current content, `None` if the container does not exist
    pub fn content(&self, id: &str) -> Option<&str> {
        self.containers.get(id).map(String::as_str)
    }
}

impl RenderTarget for MemoryTarget {
    fn set_content(&mut self, container: &str, html: &str) -> bool {
        match self.containers.get_mut(container) {
            Some(content) => {
                *content = html.to_string();
                true
            }
            None => false,
        }
    }
}
