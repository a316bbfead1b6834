//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing. Enabled for
//! this crate's tests and, through the `test-utils` feature, for the binaries'.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
