//! Paceflow newsletter core
//!
//! Fetches newsletter issues from the Sanity query API and renders them as
//! HTML page fragments or an RSS 2.0 feed.
//!
//! - `domain`: The record contract and the ports it is read and written through
//! - `adapters`: Sanity client and HTML template target
//! - `app`: Fetch service with the fail-soft page contract
//! - `feed`: HTML and RSS renderers

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use adapters::{SanityClient, TemplatePage};
pub use app::NewsletterService;
pub use config::{Config, SanityConfig, SiteConfig};
pub use domain::entities::NewsletterRecord;
pub use domain::ports::{NewsletterSource, RenderTarget};
pub use error::CmsError;
