//! Twisted Edwards curves in affine coordinates
//!
//! Reference arithmetic for curves `a·x² + y² = 1 + d·x²·y²` over a prime
//! field, with Curve25519 as the standard instance:
//! - p = 2^255 - 19
//! - r = 2^252 + 27742317777372353535851937790883648493
//! - a = -1, d = -121665/121666
//!
//! The group law is the unified Edwards addition formula, scalar
//! multiplication is plain double-and-add, and points are compressed the
//! way Ed25519 compresses them. Nothing here runs in constant time.
//!
//! ```
//! use edcurve_algorithms::ec::edwards::{BasicCurve, GroupKind};
//! use num_bigint::BigUint;
//!
//! let curve = BasicCurve::curve25519(GroupKind::PrimeOrder).unwrap();
//! let b = curve.base();
//! let two = BigUint::from(2u32);
//! assert_eq!(b.mul(&two), b.double());
//! assert!(b.mul(curve.curve().order()).is_identity());
//! ```

mod basic;
mod constants;
mod curve;
mod params;
mod point;
pub mod scalar;

pub use basic::BasicCurve;
pub use constants::{
    CURVE25519_EMBED_CAPACITY, CURVE25519_FIELD_ELEMENT_SIZE, CURVE25519_POINT_COMPRESSED_SIZE,
    CURVE25519_SCALAR_WIDE_SIZE,
};
pub use curve::Curve;
pub use params::{GroupKind, Params};
pub use point::BasicPoint;
pub use scalar::{random_scalar, scalar_from_bytes_mod_order, scalar_from_canonical_bytes};
