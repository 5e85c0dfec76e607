//! Shared constants for Curve25519 point operations

use edcurve_params::edwards::curve25519;

/// Size of a Curve25519 field element in bytes
pub const CURVE25519_FIELD_ELEMENT_SIZE: usize = curve25519::FIELD_ELEMENT_SIZE;

/// Size of a compressed Curve25519 point in bytes: y || sign(x)
pub const CURVE25519_POINT_COMPRESSED_SIZE: usize = curve25519::POINT_COMPRESSED_SIZE;

/// Payload bytes a single Curve25519 point can carry
pub const CURVE25519_EMBED_CAPACITY: usize = curve25519::EMBED_CAPACITY;

/// Random bytes drawn per scalar before reduction modulo the group order
pub const CURVE25519_SCALAR_WIDE_SIZE: usize = curve25519::SCALAR_WIDE_SIZE;

/// Bits of headroom kept between the payload and the top of the field
pub(crate) const EMBED_HEADROOM_BITS: u64 = 16;

/// Candidate y values tried when a parameter set carries no base point
pub(crate) const BASE_SEARCH_LIMIT: u64 = 1000;
