//! Sanity adapter
//!
//! Read-only client for the Sanity query API.

mod client;

pub use client::{newsletter_query, SanityClient};
