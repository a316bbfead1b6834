//! Newsletter API Server
//!
//! Serves the Paceflow newsletter RSS feed, generated on each request from
//! the Sanity query API and cached downstream via `Cache-Control`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use newsletter_core::{Config, NewsletterService, NewsletterSource, SanityClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod handlers;
mod routes;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub newsletter_service: Arc<NewsletterService<dyn NewsletterSource>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,newsletter_api=debug,newsletter_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting newsletter API...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!(
        project = %config.sanity.project_id,
        dataset = %config.sanity.dataset,
        site = %config.site.base_url,
        "Configuration loaded"
    );

    let source: Arc<dyn NewsletterSource> =
        Arc::new(SanityClient::new(&config.sanity).context("Failed to build Sanity client")?);

    let state = AppState {
        newsletter_service: Arc::new(NewsletterService::new(source, config.site.clone())),
    };

    let app = routes::router(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
