//! Shared formatting helpers and error types for the badgecraft crates.

pub mod error;
pub mod format;

pub use error::*;
pub use format::*;
