//! Known-answer vectors for Edwards groups
//!
//! Vector files are JSON, in the camelCase layout of
//! `vectors/curve25519.json`. The runner is written against the
//! [`edcurve_api::Group`] trait, so any implementation of the group can be
//! checked against the same file.

pub mod error;
pub mod model;
pub mod runner;

pub use error::{Result, VectorError};
pub use model::{DecodeCase, ScalarMultCase, VectorFile};
pub use runner::{load, run_decode, run_scalar_mult, CURVE25519_VECTORS};
