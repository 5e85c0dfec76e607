//! Constant values for the edcurve library
//!
//! Big integers are stored as decimal strings so this crate stays free of
//! any arithmetic dependency; `edcurve-algorithms` parses them.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod traditional;

pub use traditional::edwards;
