//! Domain layer
//!
//! Contains the newsletter data contract with no I/O.
//! - `entities`: Records as delivered by the CMS
//! - `ports`: Trait definitions for the CMS and rendering targets

pub mod entities;
pub mod ports;
