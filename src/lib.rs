//! # edcurve
//!
//! Reference arithmetic for the twisted Edwards form of Curve25519.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! edcurve = "0.3"
//! ```
//!
//! ```
//! use edcurve::prelude::*;
//!
//! let curve = BasicCurve::curve25519(GroupKind::PrimeOrder).unwrap();
//! let mut rng = rand::rngs::OsRng;
//!
//! let a = curve.random_scalar(&mut rng);
//! let public = curve.mul_base(&a);
//!
//! let mut decoded = curve.point();
//! decoded.decode(&public.encode()).unwrap();
//! assert_eq!(decoded, public);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Params`](prelude::Params) and
//!   [`GroupKind`](prelude::GroupKind)
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`edcurve-api`]: public error type and the `Group` / `GroupElement` traits
//! - [`edcurve-params`]: literal Curve25519 constants
//! - [`edcurve-algorithms`]: field arithmetic, points and curves
//!
//! Nothing in this library is constant time.

#![forbid(unsafe_code)]

pub use edcurve_algorithms as algorithms;
pub use edcurve_api as api;
pub use edcurve_params as params;

/// Common imports for edcurve users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Group, GroupElement};

    // Re-export the Edwards implementation
    pub use crate::algorithms::ec::edwards::{
        BasicCurve, BasicPoint, Curve, GroupKind, Params,
    };
    pub use crate::algorithms::field::ModInt;

    pub use num_bigint::BigUint;
}
