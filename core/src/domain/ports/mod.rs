//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod cms;
pub mod render_target;

pub use cms::NewsletterSource;
pub use render_target::{RenderTarget, ARCHIVE_CONTAINER, LATEST_CONTAINER};
