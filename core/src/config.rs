//! Configuration
//!
//! Explicit configuration passed into each component. Values come from the
//! environment (optionally via `.env`), each with a hardcoded default.

use std::env;

pub const DEFAULT_PROJECT_ID: &str = "qwsgqgyz";
pub const DEFAULT_DATASET: &str = "production";
pub const DEFAULT_API_VERSION: &str = "v2025-01-01";
pub const DEFAULT_SITE_URL: &str = "https://paceflow.io";
pub const DEFAULT_FEED_TITLE: &str = "Paceflow Newsletter";
pub const DEFAULT_FEED_DESCRIPTION: &str = "Latest newsletters and product updates from Paceflow";

/// Records shown on the newsletter page
pub const PAGE_LIMIT: usize = 10;
/// Records served by the HTTP feed
pub const HTTP_FEED_LIMIT: usize = 20;
/// Records written by the batch feed generator
pub const BATCH_FEED_LIMIT: usize = 100;

/// Sanity query API settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    /// Always carries the leading `v` (e.g. `v2025-01-01`)
    pub api_version: String,
    /// Read token for private datasets
    pub token: Option<String>,
    /// Query the edge cache (`apicdn.sanity.io`) instead of the live API
    pub use_cdn: bool,
    /// Overrides the `https://{project}.api.sanity.io` origin
    pub api_host: Option<String>,
}

impl Default for SanityConfig {
    fn default() -> Self {
        Self {
            project_id: DEFAULT_PROJECT_ID.to_string(),
            dataset: DEFAULT_DATASET.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            token: None,
            use_cdn: false,
            api_host: None,
        }
    }
}

impl SanityConfig {
    /// Query endpoint without the `?query=` part
    pub fn query_endpoint(&self) -> String {
        let origin = match &self.api_host {
            Some(host) => host.clone(),
            None if self.use_cdn => format!("https://{}.apicdn.sanity.io", self.project_id),
            None => format!("https://{}.api.sanity.io", self.project_id),
        };
        format!(
            "{}/{}/data/query/{}",
            origin, self.api_version, self.dataset
        )
    }
}

/// Public site settings used for feed links and channel metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// No trailing slash
    pub base_url: String,
    pub feed_title: String,
    pub feed_description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SITE_URL.to_string(),
            feed_title: DEFAULT_FEED_TITLE.to_string(),
            feed_description: DEFAULT_FEED_DESCRIPTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub sanity: SanityConfig,
    pub site: SiteConfig,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let sanity = SanityConfig {
            project_id: var("SANITY_PROJECT_ID").unwrap_or_else(|| DEFAULT_PROJECT_ID.to_string()),
            dataset: var("SANITY_DATASET").unwrap_or_else(|| DEFAULT_DATASET.to_string()),
            api_version: normalize_api_version(
                &var("SANITY_API_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            ),
            token: var("SANITY_TOKEN"),
            use_cdn: var("SANITY_USE_CDN")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            api_host: var("SANITY_API_HOST").map(|h| h.trim_end_matches('/').to_string()),
        };

        let site = SiteConfig {
            base_url: var("SITE_URL")
                .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            feed_title: var("FEED_TITLE").unwrap_or_else(|| DEFAULT_FEED_TITLE.to_string()),
            feed_description: var("FEED_DESCRIPTION")
                .unwrap_or_else(|| DEFAULT_FEED_DESCRIPTION.to_string()),
        };

        Self { sanity, site }
    }
}

/// Sanity API versions are dates addressed as `v{date}`
pub fn normalize_api_version(version: &str) -> String {
    if version.starts_with('v') {
        version.to_string()
    } else {
        format!("v{}", version)
    }
}
