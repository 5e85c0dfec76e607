//! Reference curve object
//!
//! [`BasicCurve`] owns the parameters, the identity and the base point of a
//! twisted Edwards curve and hands out [`BasicPoint`]s bound to it. It is
//! unoptimised and not constant time: use it for testing, for checking
//! faster implementations against, and for learning.

use super::constants::BASE_SEARCH_LIMIT;
use super::curve::Curve;
use super::params::{GroupKind, Params};
use super::point::BasicPoint;
use super::scalar;
use crate::error::{validate, Error, Result};
use crate::field::ModInt;
use edcurve_api::Group;
use edcurve_params::edwards::curve25519;
use num_bigint::BigUint;
use num_traits::One;
use rand::{CryptoRng, RngCore};
use std::sync::Arc;

/// An immutable twisted Edwards curve with validated distinguished points
///
/// Build it once, share it by reference (it is `Send + Sync`) and create
/// points from it.
#[derive(Debug, Clone)]
pub struct BasicCurve {
    curve: Curve,
    null: (ModInt, ModInt),
    base: (ModInt, ModInt),
}

impl BasicCurve {
    /// Build a curve from a parameter record.
    ///
    /// When `params.base` is `None` the base point is the point with the
    /// smallest `y ≥ 2` and non-negative `x` that lies in the group selected
    /// by `kind`.
    ///
    /// Fails with [`Error::Parameter`] for an unusable record and with
    /// [`Error::Construction`] when the identity or the base point do not
    /// check out.
    pub fn new(params: &Params, kind: GroupKind) -> Result<Self> {
        let curve = Curve::new(params, kind)?;
        match &params.base {
            Some((x, y)) => {
                let base = (ModInt::new(x.clone(), &curve.p), ModInt::new(y.clone(), &curve.p));
                Self::assemble(curve, base)
            }
            None => {
                let placeholder = (curve.zero.clone(), curve.one.clone());
                let searching = BasicCurve {
                    null: placeholder.clone(),
                    base: placeholder,
                    curve,
                };
                let base = searching.find_base()?;
                Self::assemble(searching.curve, base)
            }
        }
    }

    /// Curve25519 with every parameter computed rather than looked up
    ///
    /// The base point is the point with `y = 4/5` and even `x`, as in
    /// Ed25519.
    pub fn curve25519(kind: GroupKind) -> Result<Self> {
        // p = 2^255 - 19
        let p = (BigUint::one() << 255u32) - 19u32;

        // r = 2^252 + 27742317777372353535851937790883648493
        let r_low = BigUint::parse_bytes(curve25519::R_LOW.as_bytes(), 10)
            .ok_or_else(|| Error::construction("Curve25519", "malformed subgroup order"))?;
        let r = (BigUint::one() << 252u32) + r_low;

        let modulus = Arc::new(p.clone());
        let a = ModInt::from_i64(curve25519::A, &modulus);
        let d = ModInt::from_i64(curve25519::D_NUM, &modulus)
            .div(&ModInt::from_i64(curve25519::D_DEN, &modulus));

        let params = Params {
            name: curve25519::NAME.to_string(),
            p,
            r,
            cofactor: BigUint::from(curve25519::COFACTOR),
            a: a.value().clone(),
            d: d.value().clone(),
            base: None,
        };
        let curve = Curve::new(&params, kind)?;

        let y = curve.coord(4).div(&curve.coord(5));
        let mut x = curve
            .solve_for_x(&y)
            .ok_or_else(|| Error::construction("Curve25519", "no point with y = 4/5"))?;
        if curve.coord_sign(&x) != 0 {
            x.set_neg();
        }

        Self::assemble(curve, (x, y))
    }

    fn assemble(curve: Curve, base: (ModInt, ModInt)) -> Result<Self> {
        let null = (curve.zero.clone(), curve.one.clone());
        validate::construction(
            curve.on_curve(&null.0, &null.1),
            "Edwards curve",
            "identity point not on curve",
        )?;
        validate::construction(
            curve.on_curve(&base.0, &base.1),
            "Edwards curve",
            "base point not on curve",
        )?;

        let built = BasicCurve { curve, null, base };
        if built.curve.kind() == GroupKind::PrimeOrder {
            let b = built.base();
            validate::construction(!b.is_identity(), "Edwards curve", "base point is the identity")?;
            validate::construction(
                b.has_prime_order(),
                "Edwards curve",
                "base point is not in the prime-order subgroup",
            )?;
        }
        Ok(built)
    }

    fn find_base(&self) -> Result<(ModInt, ModInt)> {
        let kind = self.curve.kind();
        for v in 2..2 + BASE_SEARCH_LIMIT {
            let y = ModInt::from_u64(v, &self.curve.p);
            let Some(x) = self.curve.solve_for_x(&y) else {
                continue;
            };
            let candidate = BasicPoint::from_coordinates(self, x, y);
            if kind == GroupKind::Full || candidate.has_prime_order() {
                return Ok((candidate.x, candidate.y));
            }
        }
        Err(Error::construction(
            "Edwards curve",
            format!("no base point with y below {}", 2 + BASE_SEARCH_LIMIT),
        ))
    }

    /// Parameter and encoding service backing this curve
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The parameter record this curve was built from, base point included
    pub fn params(&self) -> Params {
        Params {
            name: self.curve.name.clone(),
            p: (*self.curve.p).clone(),
            r: self.curve.r.clone(),
            cofactor: self.curve.cofactor.clone(),
            a: self.curve.a.value().clone(),
            d: self.curve.d.value().clone(),
            base: Some((self.base.0.value().clone(), self.base.1.value().clone())),
        }
    }

    pub(crate) fn identity_coordinates(&self) -> (&ModInt, &ModInt) {
        (&self.null.0, &self.null.1)
    }

    pub(crate) fn base_coordinates(&self) -> (&ModInt, &ModInt) {
        (&self.base.0, &self.base.1)
    }

    /// A new point set to the identity
    pub fn point(&self) -> BasicPoint<'_> {
        self.identity()
    }

    /// The neutral element `(0, 1)`
    pub fn identity(&self) -> BasicPoint<'_> {
        BasicPoint::from_coordinates(self, self.null.0.clone(), self.null.1.clone())
    }

    /// The standard base point
    pub fn base(&self) -> BasicPoint<'_> {
        BasicPoint::from_coordinates(self, self.base.0.clone(), self.base.1.clone())
    }

    /// `scalar · B`
    pub fn mul_base(&self, scalar: &BigUint) -> BasicPoint<'_> {
        self.base().mul(scalar)
    }

    /// Length of an encoded point in bytes
    pub fn point_len(&self) -> usize {
        self.curve.encoded_len()
    }

    /// Uniformly random scalar modulo the subgroup order
    pub fn random_scalar<R: RngCore + CryptoRng>(&self, rng: &mut R) -> BigUint {
        scalar::random_scalar(&self.curve.r, rng)
    }
}

impl Group for BasicCurve {
    type Scalar = BigUint;
    type Element<'g> = BasicPoint<'g> where Self: 'g;

    fn name(&self) -> &str {
        self.curve.name()
    }

    fn order(&self) -> &BigUint {
        self.curve.order()
    }

    fn element_len(&self) -> usize {
        self.point_len()
    }

    fn identity(&self) -> BasicPoint<'_> {
        BasicCurve::identity(self)
    }

    fn base(&self) -> BasicPoint<'_> {
        BasicCurve::base(self)
    }

    fn random_scalar<R: RngCore + CryptoRng>(&self, rng: &mut R) -> BigUint {
        BasicCurve::random_scalar(self, rng)
    }
}
