//! Rendering target port
//!
//! Named insertion points the HTML renderer writes into.

/// Container holding the latest issue card
pub const LATEST_CONTAINER: &str = "latest-issue-container";

/// Container holding the list of older issues
pub const ARCHIVE_CONTAINER: &str = "archive-container";

/// A document with named containers whose content can be replaced
pub trait RenderTarget {
    /// Replace the content of `container` with `html`.
    ///
    /// Returns `false` if the container does not exist. Nothing is written in
    /// that case.
    fn set_content(&mut self, container: &str, html: &str) -> bool;
}
