//! RSS feed handler
//!
//! Serves the newest newsletters as RSS 2.0 so RSS-to-email services can pick
//! up new issues as soon as they are published in Sanity.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use newsletter_core::config::HTTP_FEED_LIMIT;

use crate::error::AppError;
use crate::AppState;

pub const RSS_CONTENT_TYPE: &str = "application/rss+xml; charset=utf-8";

/// Shared caches keep the feed for an hour and may serve it stale for ten
/// minutes while revalidating.
pub const RSS_CACHE_CONTROL: &str = "s-maxage=3600, stale-while-revalidate=600";

/// GET /api/newsletter-rss
///
/// Returns the feed, or a plain-text 500 if Sanity cannot be queried.
pub async fn get_newsletter_rss(State(state): State<AppState>) -> Result<Response, AppError> {
    let xml = state.newsletter_service.rss_feed(HTTP_FEED_LIMIT).await?;

    Ok((
        [
            (header::CONTENT_TYPE, RSS_CONTENT_TYPE),
            (header::CACHE_CONTROL, RSS_CACHE_CONTROL),
        ],
        xml,
    )
        .into_response())
}
