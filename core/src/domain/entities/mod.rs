//! Domain entities

pub mod newsletter;

pub use newsletter::{parse_publish_date, Issues, NewsletterRecord, QueryResponse, UNTITLED};
