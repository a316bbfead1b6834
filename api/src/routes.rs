//! Router construction

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::AppState;

/// Route served by the feed handler
pub const RSS_ROUTE: &str = "/api/newsletter-rss";

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Newsletter feed
        .route(RSS_ROUTE, get(handlers::get_newsletter_rss))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use newsletter_core::config::HTTP_FEED_LIMIT;
    use newsletter_core::test_utils::{
        test_records, FailingNewsletterSource, InMemoryNewsletterSource,
    };
    use newsletter_core::{NewsletterService, NewsletterSource, SiteConfig};
    use tower::ServiceExt;

    use super::*;
    use crate::error::FEED_ERROR_BODY;
    use crate::handlers::rss::{RSS_CACHE_CONTROL, RSS_CONTENT_TYPE};

    fn state_with(source: Arc<dyn NewsletterSource>) -> AppState {
        AppState {
            newsletter_service: Arc::new(NewsletterService::new(source, SiteConfig::default())),
        }
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, header::HeaderMap, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn serves_rss_with_cache_headers() {
        let source = Arc::new(InMemoryNewsletterSource::new().with_records(test_records(3)));
        let app = router(state_with(source.clone()));

        let (status, headers, body) = get(app, RSS_ROUTE).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], RSS_CONTENT_TYPE);
        assert_eq!(headers[header::CACHE_CONTROL], RSS_CACHE_CONTROL);
        assert!(body.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert_eq!(body.matches("<item>").count(), 3);
        assert!(body.contains("<link>https://paceflow.io/newsletter/issue-1</link>"));
        assert_eq!(source.requested_limits(), vec![HTTP_FEED_LIMIT]);
    }

    #[tokio::test]
    async fn empty_result_is_still_a_feed() {
        let app = router(state_with(Arc::new(InMemoryNewsletterSource::new())));

        let (status, _, body) = get(app, RSS_ROUTE).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<channel>"));
        assert!(!body.contains("<item>"));
    }

    #[tokio::test]
    async fn fetch_failure_is_500() {
        let app = router(state_with(Arc::new(FailingNewsletterSource::new(503))));

        let (status, headers, body) = get(app, RSS_ROUTE).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(headers[header::CONTENT_TYPE], "text/plain; charset=utf-8");
        assert_eq!(body, FEED_ERROR_BODY);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = router(state_with(Arc::new(InMemoryNewsletterSource::new())));

        let (status, _, body) = get(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }
}
