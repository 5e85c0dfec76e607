//! Elliptic curve groups
//!
//! Only twisted Edwards curves are provided, through the affine reference
//! implementation in [`edwards`].

pub mod edwards;

pub use edwards::{BasicCurve, BasicPoint, GroupKind, Params};
