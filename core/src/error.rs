//! Error types for the newsletter core

use thiserror::Error;

/// Sanity query API errors
#[derive(Debug, Error)]
pub enum CmsError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Sanity API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Invalid access token")]
    InvalidToken,
}

/// Page template errors
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template parse error {0}")]
    Parse(String),

    #[error("Template write error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Template is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
