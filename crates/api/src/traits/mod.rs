//! Trait definitions for group-based cryptography
//!
//! Protocol code is written against these traits so that it does not care
//! which coordinate system or curve backs the group.

pub mod group;

pub use group::{Group, GroupElement};
