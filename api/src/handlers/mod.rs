//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod health;
pub mod rss;

pub use health::health;
pub use rss::get_newsletter_rss;
