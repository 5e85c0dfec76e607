//! Affine points on a twisted Edwards curve

use super::basic::BasicCurve;
use super::params::GroupKind;
use crate::error::{to_core_result, Result};
use crate::field::ModInt;
use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use edcurve_api::GroupElement;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

/// A point `(x, y)` in affine coordinates
///
/// Points borrow the curve they were created from and are only ever
/// combined with points of the same curve. Arithmetic does not re-check the
/// curve equation: a point that came from outside must go through
/// [`BasicPoint::decode`] first.
#[derive(Clone)]
pub struct BasicPoint<'c> {
    pub(crate) x: ModInt,
    pub(crate) y: ModInt,
    pub(crate) c: &'c BasicCurve,
}

impl<'c> BasicPoint<'c> {
    pub(crate) fn from_coordinates(c: &'c BasicCurve, x: ModInt, y: ModInt) -> Self {
        BasicPoint { x, y, c }
    }

    /// The curve this point lives on
    pub fn curve(&self) -> &'c BasicCurve {
        self.c
    }

    /// Affine coordinates `(x, y)`
    pub fn coordinates(&self) -> (&ModInt, &ModInt) {
        (&self.x, &self.y)
    }

    /// Copy `other` into `self`
    pub fn set(&mut self, other: &BasicPoint<'c>) -> &mut Self {
        self.c = other.c;
        self.x.set(&other.x);
        self.y.set(&other.y);
        self
    }

    /// Reset to the neutral element `(0, 1)`
    pub fn set_identity(&mut self) -> &mut Self {
        let (x, y) = self.c.identity_coordinates();
        self.x.set(x);
        self.y.set(y);
        self
    }

    /// Reset to the curve's standard base point
    pub fn set_base(&mut self) -> &mut Self {
        let (x, y) = self.c.base_coordinates();
        self.x.set(x);
        self.y.set(y);
        self
    }

    /// Replace with a random generator of unknown discrete logarithm
    ///
    /// In [`GroupKind::PrimeOrder`] mode the random point is multiplied by
    /// the cofactor so that it generates the prime-order subgroup.
    pub fn pick_base<R: RngCore + CryptoRng>(&mut self, rng: &mut R) -> &mut Self {
        let c = self.c;
        let curve = c.curve();
        loop {
            let Some((x, y)) = curve.pick_candidate(None, rng) else {
                continue;
            };
            let mut candidate = BasicPoint::from_coordinates(c, x, y);
            if curve.kind() == GroupKind::PrimeOrder {
                candidate *= curve.cofactor();
            }
            if !candidate.is_identity() {
                return self.set(&candidate);
            }
        }
    }

    /// True for the neutral element
    pub fn is_identity(&self) -> bool {
        let (x, y) = self.c.identity_coordinates();
        self.x == *x && self.y == *y
    }

    /// Check the curve equation
    pub fn is_on_curve(&self) -> bool {
        self.c.curve().on_curve(&self.x, &self.y)
    }

    /// True when `r·self` is the identity, `r` being the subgroup order
    pub fn has_prime_order(&self) -> bool {
        self.mul(self.c.curve().order()).is_identity()
    }

    /// Unified addition:
    ///
    /// ```text
    /// x' = (x1·y2 + x2·y1) / (1 + d·x1·x2·y1·y2)
    /// y' = (y1·y2 - a·x1·x2) / (1 - d·x1·x2·y1·y2)
    /// ```
    ///
    /// The same formula covers doubling and the identity.
    pub fn add(&self, other: &Self) -> Self {
        let curve = self.c.curve();
        let (x1, y1) = (&self.x, &self.y);
        let (x2, y2) = (&other.x, &other.y);

        let mut dm = curve.d.mul(x1);
        dm *= x2;
        dm *= y1;
        dm *= y2;

        let nx = x1.mul(y2).add(&x2.mul(y1));
        let dx = curve.one.add(&dm);

        let ny = y1.mul(y2).sub(&curve.a.mul(&x1.mul(x2)));
        let dy = curve.one.sub(&dm);

        // one inversion for both coordinates
        let inv = dx.mul(&dy).invert().unwrap_or_else(|| curve.zero.clone());
        BasicPoint {
            x: nx.mul(&dy).mul(&inv),
            y: ny.mul(&dx).mul(&inv),
            c: self.c,
        }
    }

    /// `self + self`
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// `(-x, y)`
    pub fn neg(&self) -> Self {
        BasicPoint {
            x: self.x.neg(),
            y: self.y.clone(),
            c: self.c,
        }
    }

    /// `self + (-other)`
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Scalar multiple by double-and-add, most significant bit first.
    ///
    /// Runs in time linear in the bit length of `scalar` and leaks it.
    pub fn mul(&self, scalar: &BigUint) -> Self {
        let mut acc = self.c.identity();
        for i in (0..scalar.bits()).rev() {
            acc = acc.double();
            if scalar.bit(i) {
                acc = acc.add(self);
            }
        }
        acc
    }

    /// Replace with `scalar · B`, `B` being the standard base point
    pub fn set_mul_base(&mut self, scalar: &BigUint) -> &mut Self {
        let product = self.c.mul_base(scalar);
        self.set(&product)
    }

    /// Length in bytes of [`BasicPoint::encode`]
    pub fn encoded_len(&self) -> usize {
        self.c.curve().encoded_len()
    }

    /// Compressed encoding
    pub fn encode(&self) -> Vec<u8> {
        self.c.curve().encode_point(&self.x, &self.y)
    }

    /// Overwrite with the point encoded by `bytes`
    ///
    /// On error `self` is left unchanged.
    pub fn decode(&mut self, bytes: &[u8]) -> Result<()> {
        let (x, y) = self.c.curve().decode_point(bytes)?;
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// Payload bytes [`BasicPoint::embed`] can store
    pub fn embed_capacity(&self) -> usize {
        self.c.curve().embed_len()
    }

    /// Replace with a random point carrying a prefix of `data`
    ///
    /// Returns what did not fit; longer payloads are split across several
    /// points by calling this repeatedly. Candidates are redrawn until one
    /// lies on the curve (and, for [`GroupKind::PrimeOrder`], in the prime
    /// subgroup), so the number of random bytes consumed varies.
    pub fn embed<'d, R: RngCore + CryptoRng>(&mut self, data: &'d [u8], rng: &mut R) -> &'d [u8] {
        let capacity = self.embed_capacity();
        let take = data.len().min(capacity);
        let chunk = if capacity == 0 { None } else { Some(&data[..take]) };

        let c = self.c;
        let curve = c.curve();
        loop {
            let Some((x, y)) = curve.pick_candidate(chunk, rng) else {
                continue;
            };
            let candidate = BasicPoint::from_coordinates(c, x, y);
            if curve.kind() == GroupKind::Full || candidate.has_prime_order() {
                self.set(&candidate);
                return &data[take..];
            }
        }
    }

    /// Recover the payload stored by [`BasicPoint::embed`]
    pub fn extract(&self) -> Result<Vec<u8>> {
        self.c.curve().extract_payload(&self.x, &self.y)
    }
}

impl PartialEq for BasicPoint<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for BasicPoint<'_> {}

impl fmt::Debug for BasicPoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicPoint")
            .field("curve", &self.c.curve().name())
            .field("x", &format_args!("{}", self.x))
            .field("y", &format_args!("{}", self.y))
            .finish()
    }
}

impl fmt::Display for BasicPoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.c.curve().point_string(&self.x, &self.y))
    }
}

impl<'a, 'c> Add<&'a BasicPoint<'c>> for &'a BasicPoint<'c> {
    type Output = BasicPoint<'c>;
    fn add(self, rhs: &'a BasicPoint<'c>) -> BasicPoint<'c> {
        BasicPoint::add(self, rhs)
    }
}

impl<'a, 'c> Sub<&'a BasicPoint<'c>> for &'a BasicPoint<'c> {
    type Output = BasicPoint<'c>;
    fn sub(self, rhs: &'a BasicPoint<'c>) -> BasicPoint<'c> {
        BasicPoint::sub(self, rhs)
    }
}

impl<'a, 'c> Neg for &'a BasicPoint<'c> {
    type Output = BasicPoint<'c>;
    fn neg(self) -> BasicPoint<'c> {
        BasicPoint::neg(self)
    }
}

impl<'a, 'c> Mul<&'a BigUint> for &'a BasicPoint<'c> {
    type Output = BasicPoint<'c>;
    fn mul(self, scalar: &'a BigUint) -> BasicPoint<'c> {
        BasicPoint::mul(self, scalar)
    }
}

impl<'a, 'c> AddAssign<&'a BasicPoint<'c>> for BasicPoint<'c> {
    fn add_assign(&mut self, rhs: &'a BasicPoint<'c>) {
        *self = BasicPoint::add(self, rhs);
    }
}

impl<'a, 'c> SubAssign<&'a BasicPoint<'c>> for BasicPoint<'c> {
    fn sub_assign(&mut self, rhs: &'a BasicPoint<'c>) {
        *self = BasicPoint::sub(self, rhs);
    }
}

impl<'a, 'c> MulAssign<&'a BigUint> for BasicPoint<'c> {
    /// The product is accumulated separately, so `self` may serve as its
    /// own generator.
    fn mul_assign(&mut self, scalar: &'a BigUint) {
        *self = BasicPoint::mul(self, scalar);
    }
}

impl<'c> GroupElement for BasicPoint<'c> {
    type Scalar = BigUint;

    fn set_identity(&mut self) -> &mut Self {
        BasicPoint::set_identity(self)
    }

    fn set_base(&mut self) -> &mut Self {
        BasicPoint::set_base(self)
    }

    fn pick_base<R: RngCore + CryptoRng>(&mut self, rng: &mut R) -> &mut Self {
        BasicPoint::pick_base(self, rng)
    }

    fn add(&self, other: &Self) -> Self {
        BasicPoint::add(self, other)
    }

    fn sub(&self, other: &Self) -> Self {
        BasicPoint::sub(self, other)
    }

    fn neg(&self) -> Self {
        BasicPoint::neg(self)
    }

    fn mul(&self, scalar: &BigUint) -> Self {
        BasicPoint::mul(self, scalar)
    }

    fn encoded_len(&self) -> usize {
        BasicPoint::encoded_len(self)
    }

    fn encode(&self) -> Vec<u8> {
        BasicPoint::encode(self)
    }

    fn decode(&mut self, bytes: &[u8]) -> edcurve_api::Result<()> {
        to_core_result(BasicPoint::decode(self, bytes), "decode")
    }

    fn embed_capacity(&self) -> usize {
        BasicPoint::embed_capacity(self)
    }

    fn embed<'d, R: RngCore + CryptoRng>(&mut self, data: &'d [u8], rng: &mut R) -> &'d [u8] {
        BasicPoint::embed(self, data, rng)
    }

    fn extract(&self) -> edcurve_api::Result<Vec<u8>> {
        to_core_result(BasicPoint::extract(self), "extract")
    }
}
