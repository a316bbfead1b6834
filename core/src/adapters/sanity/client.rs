//! Sanity query API client implementation

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use urlencoding::encode;

use crate::config::SanityConfig;
use crate::domain::entities::{NewsletterRecord, QueryResponse};
use crate::domain::ports::NewsletterSource;
use crate::error::CmsError;

/// GROQ query for the newest `limit` newsletters, projected to the fields the
/// renderers consume.
pub fn newsletter_query(limit: usize) -> String {
    format!(
        r#"*[_type == "newsletter"] | order(publishDate desc)[0...{}]{{_id, title, summary, publishDate, "slug": slug.current, link}}"#,
        limit
    )
}

/// Implementation of the Sanity query client
#[derive(Clone)]
pub struct SanityClient {
    http: Client,
    endpoint: String,
}

impl SanityClient {
    /// Build a client for the configured project.
    ///
    /// The bearer header is attached only when a token is configured;
    /// otherwise requests carry no credentials.
    pub fn new(config: &SanityConfig) -> Result<Self, CmsError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &config.token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| CmsError::InvalidToken)?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            endpoint: config.query_endpoint(),
        })
    }

    /// Full request URL for a query limited to `limit` records
    pub fn query_url(&self, limit: usize) -> String {
        format!("{}?query={}", self.endpoint, encode(&newsletter_query(limit)))
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<QueryResponse, CmsError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CmsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| CmsError::Deserialization(e.to_string()))
    }
}

#[async_trait]
impl NewsletterSource for SanityClient {
    async fn query_newsletters(&self, limit: usize) -> Result<Vec<NewsletterRecord>, CmsError> {
        let url = self.query_url(limit);
        tracing::debug!(limit, "Querying Sanity for newsletters");

        let response = self.http.get(&url).send().await?;
        let envelope = self.handle_response(response).await?;

        Ok(envelope.result)
    }
}
