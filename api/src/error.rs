//! Error types for the newsletter API
//!
//! `AppError` wraps lower-layer errors for HTTP responses. Feed consumers get
//! a plain-text 500 and never a partial or stale feed.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use newsletter_core::CmsError;
use thiserror::Error;

/// Body sent with every failed feed request
pub const FEED_ERROR_BODY: &str = "Error generating RSS feed";

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("CMS error: {0}")]
    Cms(#[from] CmsError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Cms(e) => tracing::error!("Error generating RSS feed: {}", e),
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            FEED_ERROR_BODY,
        )
            .into_response()
    }
}
