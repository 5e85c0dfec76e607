//! Public API traits and types for the edcurve library
//!
//! This crate provides the public API surface for the edcurve ecosystem:
//! the error type shared by every member crate and the group traits that
//! higher-level protocols (key exchange, signatures, secret sharing) are
//! written against.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

// Re-export all traits from the traits module
pub use traits::{Group, GroupElement};
