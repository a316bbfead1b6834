//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod page;
pub mod sanity;

pub use page::TemplatePage;
pub use sanity::SanityClient;
