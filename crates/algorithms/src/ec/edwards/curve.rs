//! Curve parameters and the compressed point format
//!
//! A point `(x, y)` is encoded the way Ed25519 does it: the canonical `y`
//! in little-endian order, with the low bit of `x` stored in the most
//! significant bit of the last byte. When the field size is a multiple of
//! eight bits an extra byte is appended to hold that bit.
//!
//! Embedding reuses the same layout. Byte 0 of the encoding carries the
//! payload length, the next bytes carry the payload and the rest is random.

use super::constants::EMBED_HEADROOM_BITS;
use super::params::{GroupKind, Params};
use crate::error::{validate, Error, Result};
use crate::field::ModInt;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use std::sync::Arc;

/// Parsed parameters of a twisted Edwards curve
#[derive(Debug, Clone)]
pub struct Curve {
    pub(crate) name: String,
    pub(crate) p: Arc<BigUint>,
    pub(crate) r: BigUint,
    pub(crate) cofactor: BigUint,
    pub(crate) a: ModInt,
    pub(crate) d: ModInt,
    pub(crate) zero: ModInt,
    pub(crate) one: ModInt,
    pub(crate) kind: GroupKind,
    field_bits: u64,
}

impl Curve {
    /// Parse and validate a parameter record
    pub fn new(params: &Params, kind: GroupKind) -> Result<Self> {
        params.validate()?;
        let p = Arc::new(params.p.clone());
        Ok(Curve {
            name: params.name.clone(),
            r: params.r.clone(),
            cofactor: params.cofactor.clone(),
            a: ModInt::new(params.a.clone(), &p),
            d: ModInt::new(params.d.clone(), &p),
            zero: ModInt::zero(&p),
            one: ModInt::one(&p),
            kind,
            field_bits: params.p.bits(),
            p,
        })
    }

    /// Curve name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field prime
    pub fn prime(&self) -> &Arc<BigUint> {
        &self.p
    }

    /// Prime subgroup order
    pub fn order(&self) -> &BigUint {
        &self.r
    }

    /// Cofactor
    pub fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }

    /// Group served by this curve
    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    /// Field element with a small literal value
    pub fn coord(&self, value: i64) -> ModInt {
        ModInt::from_i64(value, &self.p)
    }

    /// Test `a·x² + y² = 1 + d·x²·y²`
    pub fn on_curve(&self, x: &ModInt, y: &ModInt) -> bool {
        let xx = x.square();
        let yy = y.square();
        let lhs = self.a.mul(&xx).add(&yy);
        let rhs = self.d.mul(&xx).mul(&yy).add(&self.one);
        lhs == rhs
    }

    /// Sign of a coordinate: 1 for odd canonical values, 0 otherwise
    pub fn coord_sign(&self, x: &ModInt) -> u8 {
        u8::from(x.is_odd())
    }

    /// The non-negative `x` with `(x, y)` on the curve, if there is one.
    ///
    /// Solves `x² = (1 - y²) / (a - d·y²)`.
    pub fn solve_for_x(&self, y: &ModInt) -> Option<ModInt> {
        let yy = y.square();
        let num = self.one.sub(&yy);
        let den = self.a.sub(&self.d.mul(&yy));
        if den.is_zero() {
            return None;
        }
        let mut x = num.div(&den).sqrt()?;
        if self.coord_sign(&x) != 0 {
            x.set_neg();
        }
        Some(x)
    }

    /// Length in bytes of an encoded point
    pub fn encoded_len(&self) -> usize {
        ((self.field_bits + 1 + 7) / 8) as usize
    }

    /// Compressed encoding of `(x, y)`
    pub fn encode_point(&self, x: &ModInt, y: &ModInt) -> Vec<u8> {
        let len = self.encoded_len();
        let mut b = y.to_bytes_le(len);
        b[len - 1] |= self.coord_sign(x) << 7;
        b
    }

    /// Decode a compressed point, checking that it lies on the curve
    pub fn decode_point(&self, bytes: &[u8]) -> Result<(ModInt, ModInt)> {
        let len = self.encoded_len();
        validate::length("Edwards point", bytes.len(), len)?;

        let mut b = bytes.to_vec();
        let sign = b[len - 1] >> 7;
        b[len - 1] &= 0x7f;

        let y_int = BigUint::from_bytes_le(&b);
        validate::encoding(y_int < *self.p, "Edwards point", "y is not reduced")?;
        let y = ModInt::new(y_int, &self.p);

        let mut x = self.solve_for_x(&y).ok_or(Error::Encoding {
            context: "Edwards point",
            details: "no x satisfies the curve equation",
        })?;
        if x.is_zero() {
            validate::encoding(sign == 0, "Edwards point", "sign bit set on zero x")?;
        } else if self.coord_sign(&x) != sign {
            x.set_neg();
        }
        Ok((x, y))
    }

    /// Payload bytes a single point can carry
    ///
    /// The length travels in a single byte, so large fields still carry at
    /// most 255 bytes per point.
    pub fn embed_len(&self) -> usize {
        let room = (self.field_bits.saturating_sub(EMBED_HEADROOM_BITS) / 8) as usize;
        room.min(usize::from(u8::MAX))
    }

    /// One trial of the embedding sampler
    ///
    /// Draws a random encoding, overlays `data` (at most
    /// [`Curve::embed_len`] bytes) and tries to solve for `x`. Returns
    /// `None` when the candidate `y` has no point; the caller redraws.
    pub fn pick_candidate<R: RngCore + CryptoRng>(
        &self,
        data: Option<&[u8]>,
        rng: &mut R,
    ) -> Option<(ModInt, ModInt)> {
        let len = self.encoded_len();
        let mut b = vec![0u8; len];
        rng.fill_bytes(&mut b);

        if let Some(data) = data {
            debug_assert!(data.len() <= self.embed_len());
            b[0] = data.len() as u8;
            b[1..1 + data.len()].copy_from_slice(data);
        }

        let sign = b[len - 1] >> 7;
        for bit in self.field_bits as usize..len * 8 {
            b[bit / 8] &= !(1u8 << (bit % 8));
        }

        let y_int = BigUint::from_bytes_le(&b);
        if y_int >= *self.p {
            return None;
        }
        let y = ModInt::new(y_int, &self.p);
        let mut x = self.solve_for_x(&y)?;
        if sign != 0 {
            x.set_neg();
        }
        Some((x, y))
    }

    /// Recover the payload written by the embedding sampler
    pub fn extract_payload(&self, x: &ModInt, y: &ModInt) -> Result<Vec<u8>> {
        // no length byte is written on fields too small to embed into
        if self.embed_len() == 0 {
            return Ok(Vec::new());
        }
        let b = self.encode_point(x, y);
        let len = usize::from(b[0]);
        if len > self.embed_len() {
            return Err(Error::Embedding {
                details: "embedded length exceeds capacity",
            });
        }
        Ok(b[1..1 + len].to_vec())
    }

    /// Human readable form of a point
    pub fn point_string(&self, x: &ModInt, y: &ModInt) -> String {
        format!("({},{})", x, y)
    }
}
