//! Reference arithmetic for twisted Edwards curve groups
//!
//! This crate provides the prime field arithmetic and the affine point
//! arithmetic behind the edcurve library. It favours being obviously
//! correct over being fast: nothing here is constant time, and it is meant
//! for testing, for cross-checking optimised implementations and for
//! protocols that do not handle secrets.
//!
//! # Layout
//!
//! - [`field`]: [`ModInt`], an integer modulo a prime
//! - [`ec::edwards`]: curve parameters, the compressed point format,
//!   [`BasicCurve`] and [`BasicPoint`]
//! - [`error`]: the crate error type and validation helpers

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Prime field arithmetic
pub mod field;
pub use field::ModInt;

// Elliptic curve groups
pub mod ec;
pub use ec::{BasicCurve, BasicPoint, GroupKind, Params};
