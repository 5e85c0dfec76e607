//! Prime-order group traits
//!
//! A [`Group`] hands out [`GroupElement`]s. Elements borrow their group, so
//! an element can never outlive the parameters it was computed with.

use crate::Result;
use core::fmt::{Debug, Display};
use rand::{CryptoRng, RngCore};

/// An element of a cryptographic group
///
/// The group law is written additively. Mutating setters return `&mut Self`
/// so calls can be chained; arithmetic returns fresh values.
pub trait GroupElement: Clone + PartialEq + Debug + Display {
    /// Exponent type accepted by [`GroupElement::mul`]
    type Scalar;

    /// Reset to the neutral element
    fn set_identity(&mut self) -> &mut Self;

    /// Reset to the group's standard generator
    fn set_base(&mut self) -> &mut Self;

    /// Replace with an independent generator drawn from `rng`
    ///
    /// Nobody, including the caller, learns the discrete logarithm of the
    /// result with respect to the standard generator.
    fn pick_base<R: RngCore + CryptoRng>(&mut self, rng: &mut R) -> &mut Self;

    /// Group law
    fn add(&self, other: &Self) -> Self;

    /// `self + (-other)`
    fn sub(&self, other: &Self) -> Self;

    /// Additive inverse
    fn neg(&self) -> Self;

    /// Scalar multiple `scalar · self`
    fn mul(&self, scalar: &Self::Scalar) -> Self;

    /// Length in bytes of [`GroupElement::encode`]
    fn encoded_len(&self) -> usize;

    /// Canonical byte encoding
    fn encode(&self) -> Vec<u8>;

    /// Overwrite with the element encoded by `bytes`
    ///
    /// Fails without modifying `self` when `bytes` do not denote an element.
    fn decode(&mut self, bytes: &[u8]) -> Result<()>;

    /// Number of payload bytes a single element can carry
    fn embed_capacity(&self) -> usize;

    /// Replace with an element carrying a prefix of `data`
    ///
    /// Returns the part of `data` that did not fit.
    fn embed<'d, R: RngCore + CryptoRng>(&mut self, data: &'d [u8], rng: &mut R) -> &'d [u8];

    /// Recover the payload stored by [`GroupElement::embed`]
    fn extract(&self) -> Result<Vec<u8>>;
}

/// A group with a fixed generator
pub trait Group {
    /// Exponent type shared by all elements
    type Scalar;

    /// Element type, bound to the lifetime of the group
    type Element<'g>: GroupElement<Scalar = Self::Scalar>
    where
        Self: 'g;

    /// Human readable group name
    fn name(&self) -> &str;

    /// Order of the prime-order subgroup generated by the base point
    fn order(&self) -> &Self::Scalar;

    /// Length in bytes of an encoded element
    fn element_len(&self) -> usize;

    /// A fresh neutral element
    fn identity(&self) -> Self::Element<'_>;

    /// The standard generator
    fn base(&self) -> Self::Element<'_>;

    /// A uniformly random scalar modulo [`Group::order`]
    fn random_scalar<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Self::Scalar;
}
