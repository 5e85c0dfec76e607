//! Parameter records for twisted Edwards curves

use crate::error::{validate, Error, Result};
use crate::field::ModInt;
use edcurve_params::edwards::curve25519;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which group a curve hands out
///
/// Curve25519 has order `8·r`. Most protocols want the prime-order subgroup;
/// a few are happy with the full group and its cheaper sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GroupKind {
    /// The subgroup of prime order `r`
    #[default]
    PrimeOrder,
    /// Every point on the curve
    Full,
}

/// Parameters of a curve `a·x² + y² = 1 + d·x²·y²` over `GF(p)`
///
/// Coefficients are stored reduced modulo `p`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Params {
    /// Human readable curve name
    pub name: String,
    /// Field prime
    pub p: BigUint,
    /// Order of the prime subgroup
    pub r: BigUint,
    /// Ratio of the full curve order to `r`
    pub cofactor: BigUint,
    /// Coefficient of `x²`
    pub a: BigUint,
    /// Coefficient of `x²·y²`
    pub d: BigUint,
    /// Standard base point `(x, y)`, or `None` to let the curve pick one
    pub base: Option<(BigUint, BigUint)>,
}

fn parse_decimal(name: &'static str, digits: &str) -> Result<BigUint> {
    BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| Error::construction(name, "constant is not a decimal integer"))
}

impl Params {
    /// The literal Curve25519 parameter set
    pub fn curve25519() -> Result<Self> {
        let p = Arc::new(parse_decimal("Curve25519 p", curve25519::P)?);
        let a = ModInt::from_i64(curve25519::A, &p);
        Ok(Params {
            name: curve25519::NAME.to_string(),
            r: parse_decimal("Curve25519 r", curve25519::R)?,
            cofactor: BigUint::from(curve25519::COFACTOR),
            a: a.value().clone(),
            d: parse_decimal("Curve25519 d", curve25519::D)?,
            base: Some((
                parse_decimal("Curve25519 base x", curve25519::BASE_X)?,
                parse_decimal("Curve25519 base y", curve25519::BASE_Y)?,
            )),
            p: (*p).clone(),
        })
    }

    /// Check the record for parameters the group law cannot work with.
    ///
    /// Primality of `p` and `r` is assumed, not tested.
    pub fn validate(&self) -> Result<()> {
        let three = BigUint::from(3u32);
        validate::parameter(self.p > three, "p", "field prime must exceed 3")?;
        validate::parameter(self.p.bit(0), "p", "field prime must be odd")?;
        validate::parameter(self.r > BigUint::one(), "r", "subgroup order must exceed 1")?;
        validate::parameter(!self.cofactor.is_zero(), "cofactor", "cofactor must be non-zero")?;
        validate::parameter(self.a < self.p, "a", "coefficient must be reduced modulo p")?;
        validate::parameter(self.d < self.p, "d", "coefficient must be reduced modulo p")?;
        validate::parameter(!self.a.is_zero(), "a", "coefficient must be non-zero")?;
        validate::parameter(!self.d.is_zero(), "d", "coefficient must be non-zero")?;
        validate::parameter(self.a != self.d, "d", "coefficients a and d must differ")?;
        if let Some((x, y)) = &self.base {
            validate::parameter(x < &self.p && y < &self.p, "base", "coordinates must be reduced")?;
        }
        Ok(())
    }
}
