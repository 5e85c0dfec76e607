//! Prime field arithmetic
//!
//! [`ModInt`] is an integer modulo a prime `p`, carrying a shared handle to
//! its modulus. Every value is kept in `[0, p)`.
//!
//! Two calling styles are provided and agree with each other:
//!
//! - value-returning methods (`a.mul(&b)`) and operators on references
//!   (`&a * &b`), and
//! - compute-into assignment (`a *= &b`, [`ModInt::set`], [`ModInt::set_neg`])
//!   for hot loops that want to reuse a destination.
//!
//! None of this is constant time. Inversion uses Fermat's little theorem
//! and therefore assumes the modulus is prime.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::sync::Arc;

/// An element of the prime field `Z/pZ`
#[derive(Clone, Debug)]
pub struct ModInt {
    pub(crate) v: BigUint,
    pub(crate) m: Arc<BigUint>,
}

impl ModInt {
    /// Reduce `value` modulo `modulus`.
    ///
    /// `modulus` must be non-zero.
    pub fn new(value: BigUint, modulus: &Arc<BigUint>) -> Self {
        ModInt {
            v: value % &**modulus,
            m: Arc::clone(modulus),
        }
    }

    /// Build an element from a small unsigned literal
    pub fn from_u64(value: u64, modulus: &Arc<BigUint>) -> Self {
        Self::new(BigUint::from(value), modulus)
    }

    /// Build an element from a small signed literal; negative values wrap
    pub fn from_i64(value: i64, modulus: &Arc<BigUint>) -> Self {
        let magnitude = Self::from_u64(value.unsigned_abs(), modulus);
        if value < 0 {
            magnitude.neg()
        } else {
            magnitude
        }
    }

    /// Interpret `bytes` as a little-endian integer and reduce it
    pub fn from_bytes_le(bytes: &[u8], modulus: &Arc<BigUint>) -> Self {
        Self::new(BigUint::from_bytes_le(bytes), modulus)
    }

    /// The additive identity
    pub fn zero(modulus: &Arc<BigUint>) -> Self {
        ModInt {
            v: BigUint::zero(),
            m: Arc::clone(modulus),
        }
    }

    /// The multiplicative identity
    pub fn one(modulus: &Arc<BigUint>) -> Self {
        Self::new(BigUint::one(), modulus)
    }

    /// Canonical representative in `[0, p)`
    pub fn value(&self) -> &BigUint {
        &self.v
    }

    /// The field prime
    pub fn modulus(&self) -> &Arc<BigUint> {
        &self.m
    }

    /// True for the additive identity
    pub fn is_zero(&self) -> bool {
        self.v.is_zero()
    }

    /// True when the canonical representative is odd
    pub fn is_odd(&self) -> bool {
        self.v.bit(0)
    }

    /// Test bit `i` of the canonical representative
    pub fn bit(&self, i: u64) -> bool {
        self.v.bit(i)
    }

    /// Number of significant bits of the canonical representative
    pub fn bit_len(&self) -> u64 {
        self.v.bits()
    }

    /// Little-endian encoding zero-padded to `len` bytes.
    ///
    /// `len` must be at least the byte length of the modulus.
    pub fn to_bytes_le(&self, len: usize) -> Vec<u8> {
        let mut out = self.v.to_bytes_le();
        debug_assert!(out.len() <= len, "field element does not fit in {} bytes", len);
        out.resize(len, 0);
        out
    }

    #[inline]
    fn with_value(&self, v: BigUint) -> Self {
        ModInt {
            v,
            m: Arc::clone(&self.m),
        }
    }

    #[inline]
    fn check_modulus(&self, other: &Self) {
        debug_assert!(
            Arc::ptr_eq(&self.m, &other.m) || self.m == other.m,
            "field elements with different moduli"
        );
    }

    /* ------------------------------------------------------------------ */
    /*  Value-returning arithmetic                                        */
    /* ------------------------------------------------------------------ */

    /// `self + other`
    pub fn add(&self, other: &Self) -> Self {
        self.check_modulus(other);
        let sum = &self.v + &other.v;
        if sum >= *self.m {
            self.with_value(sum - &*self.m)
        } else {
            self.with_value(sum)
        }
    }

    /// `self - other`
    pub fn sub(&self, other: &Self) -> Self {
        self.check_modulus(other);
        if self.v >= other.v {
            self.with_value(&self.v - &other.v)
        } else {
            self.with_value(&*self.m - &other.v + &self.v)
        }
    }

    /// `self · other`
    pub fn mul(&self, other: &Self) -> Self {
        self.check_modulus(other);
        self.with_value((&self.v * &other.v) % &*self.m)
    }

    /// `self²`
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// `-self`
    pub fn neg(&self) -> Self {
        if self.v.is_zero() {
            self.clone()
        } else {
            self.with_value(&*self.m - &self.v)
        }
    }

    /// `self^exponent`
    pub fn pow(&self, exponent: &BigUint) -> Self {
        self.with_value(self.v.modpow(exponent, &self.m))
    }

    /// Multiplicative inverse, `None` for zero
    pub fn invert(&self) -> Option<Self> {
        if self.v.is_zero() {
            return None;
        }
        let exponent = &*self.m - 2u32;
        Some(self.pow(&exponent))
    }

    /// `self / other`.
    ///
    /// Division by zero yields zero. The group law never divides by zero
    /// for points that satisfy the curve equation.
    pub fn div(&self, other: &Self) -> Self {
        match other.invert() {
            Some(inv) => self.mul(&inv),
            None => self.with_value(BigUint::zero()),
        }
    }

    /// Euler's criterion: true for zero and for quadratic residues
    pub fn is_square(&self) -> bool {
        if self.v.is_zero() {
            return true;
        }
        let exponent = (&*self.m - 1u32) / 2u32;
        self.pow(&exponent).v.is_one()
    }

    /// A square root of `self`, or `None` if `self` is not a square.
    ///
    /// Which of the two roots is returned is unspecified; callers fix the
    /// sign themselves.
    pub fn sqrt(&self) -> Option<Self> {
        if self.v.is_zero() {
            return Some(self.clone());
        }
        let m = &*self.m;
        let root = if m.bit(0) && m.bit(1) {
            // p = 3 (mod 4)
            self.pow(&((m + 1u32) / 4u32))
        } else if m.bit(0) && !m.bit(1) && m.bit(2) {
            // p = 5 (mod 8): candidate r = a^((p+3)/8) satisfies r² = ±a
            let candidate = self.pow(&((m + 3u32) / 8u32));
            if candidate.square() == *self {
                candidate
            } else {
                // 2 is a non-residue here, so 2^((p-1)/4) is a square root of -1
                let two = self.with_value(BigUint::from(2u32));
                let sqrt_m1 = two.pow(&((m - 1u32) / 4u32));
                candidate.mul(&sqrt_m1)
            }
        } else {
            self.tonelli_shanks()?
        };
        if root.square() == *self {
            Some(root)
        } else {
            None
        }
    }

    fn tonelli_shanks(&self) -> Option<Self> {
        if !self.is_square() {
            return None;
        }
        let m = &*self.m;
        let p_minus_1 = m - 1u32;
        let s = p_minus_1.trailing_zeros()?;
        let q = &p_minus_1 >> s;

        // Smallest quadratic non-residue
        let mut z = self.with_value(BigUint::from(2u32));
        while z.is_square() {
            z = z.add(&ModInt::one(&self.m));
        }

        let mut big_m = s;
        let mut c = z.pow(&q);
        let mut t = self.pow(&q);
        let mut r = self.pow(&((&q + 1u32) / 2u32));

        while !t.v.is_one() {
            // least i with t^(2^i) = 1
            let mut i = 0u64;
            let mut t2i = t.clone();
            while !t2i.v.is_one() {
                t2i = t2i.square();
                i += 1;
                if i == big_m {
                    return None;
                }
            }
            let mut b = c.clone();
            for _ in 0..(big_m - i - 1) {
                b = b.square();
            }
            big_m = i;
            c = b.square();
            t = t.mul(&c);
            r = r.mul(&b);
        }
        Some(r)
    }

    /* ------------------------------------------------------------------ */
    /*  Compute-into arithmetic                                           */
    /* ------------------------------------------------------------------ */

    /// Overwrite with `other`, adopting its modulus
    pub fn set(&mut self, other: &Self) -> &mut Self {
        self.v.clone_from(&other.v);
        self.m = Arc::clone(&other.m);
        self
    }

    /// Negate in place
    pub fn set_neg(&mut self) -> &mut Self {
        if !self.v.is_zero() {
            self.v = &*self.m - &self.v;
        }
        self
    }
}

impl PartialEq for ModInt {
    fn eq(&self, other: &Self) -> bool {
        self.check_modulus(other);
        self.v == other.v
    }
}

impl Eq for ModInt {}

impl fmt::Display for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.v)
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl<'a, 'b> $trait<&'b ModInt> for &'a ModInt {
            type Output = ModInt;
            fn $method(self, rhs: &'b ModInt) -> ModInt {
                ModInt::$method(self, rhs)
            }
        }

        impl $assign_trait<&ModInt> for ModInt {
            fn $assign_method(&mut self, rhs: &ModInt) {
                *self = ModInt::$method(self, rhs);
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign);
impl_binop!(Sub, sub, SubAssign, sub_assign);
impl_binop!(Mul, mul, MulAssign, mul_assign);
impl_binop!(Div, div, DivAssign, div_assign);

impl<'a> Neg for &'a ModInt {
    type Output = ModInt;
    fn neg(self) -> ModInt {
        ModInt::neg(self)
    }
}
