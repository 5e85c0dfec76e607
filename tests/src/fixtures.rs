//! Curves and randomness shared between test binaries

use edcurve_algorithms::ec::edwards::{BasicCurve, GroupKind};
use once_cell::sync::Lazy;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Curve25519 restricted to the prime-order subgroup
pub static PRIME_ORDER: Lazy<BasicCurve> = Lazy::new(|| {
    BasicCurve::curve25519(GroupKind::PrimeOrder).expect("Curve25519 derivation must succeed")
});

/// Curve25519 as the full group of order 8·r
pub static FULL: Lazy<BasicCurve> = Lazy::new(|| {
    BasicCurve::curve25519(GroupKind::Full).expect("Curve25519 derivation must succeed")
});

/// Deterministic generator for reproducible runs
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
