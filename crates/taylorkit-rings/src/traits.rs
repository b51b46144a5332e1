//! Algebraic structure traits for series coefficients.
//!
//! The hierarchy is shallow: every truncated-series kernel needs
//! ring arithmetic, division-based kernels need a field, and the
//! transcendental kernels additionally need the elementary functions of the
//! coefficient type itself.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A commutative ring usable as a series coefficient.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
///
/// Floating-point types satisfy these laws only up to rounding.
pub trait Ring:
    Clone + PartialEq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// Whether every non-zero element has a multiplicative inverse.
    const HAS_RECIPROCAL: bool;

    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// The image of an integer under the canonical ring map.
    fn from_int(n: i64) -> Self;

    /// Divides by `other` if the quotient is a well-defined element.
    ///
    /// Returns `None` for types without reciprocals, for division by an exact
    /// zero, and for floating quotients that come out infinite or NaN.
    fn checked_div(&self, other: &Self) -> Option<Self>;

    /// Multiplies, returning `None` if the product is not representable.
    ///
    /// Only fixed-width integers override this.
    fn checked_mul(&self, other: &Self) -> Option<Self> {
        Some(self.clone() * other.clone())
    }
}

/// A field is a ring where every non-zero element has a multiplicative inverse.
pub trait Field: Ring + Div<Output = Self> {}

/// A field closed under the elementary transcendental functions.
///
/// Only these coefficient types can be fed to `exp`, `log`, the trigonometric
/// functions, square roots and non-integer powers of a series.
pub trait Elementary: Field {
    /// Embeds a real number.
    fn from_f64(x: f64) -> Self;

    /// The exponential function.
    fn exp(&self) -> Self;

    /// The natural logarithm (principal branch for complex types).
    fn ln(&self) -> Self;

    /// The sine.
    fn sin(&self) -> Self;

    /// The cosine.
    fn cos(&self) -> Self;

    /// The tangent.
    fn tan(&self) -> Self;

    /// The principal square root.
    fn sqrt(&self) -> Self;

    /// Raises to a real power (principal branch).
    fn powf(&self, x: f64) -> Self;

    /// Sine and cosine together.
    fn sin_cos(&self) -> (Self, Self) {
        (self.sin(), self.cos())
    }
}
