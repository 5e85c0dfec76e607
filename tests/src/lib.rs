//! Test support for the edcurve library
//!
//! Shared curve fixtures and a small known-answer vector engine. The tests
//! themselves live under `tests/`.

pub mod fixtures;
pub mod vectors;
