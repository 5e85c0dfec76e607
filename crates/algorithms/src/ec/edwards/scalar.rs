//! Scalars for Edwards curve arithmetic
//!
//! Scalars are plain `BigUint`s taken modulo the prime subgroup order.

use crate::error::{validate, Result};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

fn byte_len(order: &BigUint) -> usize {
    ((order.bits() + 7) / 8) as usize
}

/// Uniform scalar in `[0, order)`.
///
/// Twice the byte length of `order` is drawn and reduced, which makes the
/// bias negligible. The random bytes are wiped afterwards.
pub fn random_scalar<R: RngCore + CryptoRng>(order: &BigUint, rng: &mut R) -> BigUint {
    let mut wide = Zeroizing::new(vec![0u8; 2 * byte_len(order)]);
    rng.fill_bytes(&mut wide);
    BigUint::from_bytes_le(&wide) % order
}

/// Little-endian bytes of any length, reduced modulo `order`
pub fn scalar_from_bytes_mod_order(bytes: &[u8], order: &BigUint) -> BigUint {
    BigUint::from_bytes_le(bytes) % order
}

/// Little-endian bytes that must already be reduced modulo `order`
pub fn scalar_from_canonical_bytes(bytes: &[u8], order: &BigUint) -> Result<BigUint> {
    validate::length("scalar", bytes.len(), byte_len(order))?;
    let s = BigUint::from_bytes_le(bytes);
    validate::parameter(&s < order, "scalar", "not reduced modulo the group order")?;
    Ok(s)
}

/// Little-endian encoding of `s` padded to the byte length of `order`
pub fn scalar_to_bytes(s: &BigUint, order: &BigUint) -> Vec<u8> {
    let mut out = s.to_bytes_le();
    out.resize(byte_len(order).max(out.len()), 0);
    out
}
