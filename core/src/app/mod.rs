//! Application layer
//!
//! Use cases that coordinate the CMS port with the renderers.

pub mod newsletter_service;

pub use newsletter_service::NewsletterService;
