//! Exact rationals as series coefficients.
//!
//! Arbitrary precision rationals from `dashu` form a field, so series over
//! them support exact division and integration. They are not closed under the
//! transcendental functions and therefore do not implement [`Elementary`].
//!
//! [`Elementary`]: crate::traits::Elementary

use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;

use crate::traits::{Field, Ring};

/// Builds the rational `num / den`.
///
/// # Panics
///
/// Panics if `den` is zero.
#[must_use]
pub fn rational(num: i64, den: u64) -> RBig {
    assert!(den != 0, "denominator cannot be zero");
    RBig::from_parts(IBig::from(num), UBig::from(den))
}

/// Returns the value as an `i64` if it is an integer that fits.
#[must_use]
pub fn to_integer(q: &RBig) -> Option<i64> {
    if q.denominator().is_one() {
        i64::try_from(q.numerator().clone()).ok()
    } else {
        None
    }
}

/// Nearest `f64` to an exact rational.
#[must_use]
pub fn to_f64(q: &RBig) -> f64 {
    q.to_f64().value()
}

impl Ring for RBig {
    const HAS_RECIPROCAL: bool = true;

    fn zero() -> Self {
        RBig::ZERO
    }

    fn one() -> Self {
        RBig::ONE
    }

    fn is_zero(&self) -> bool {
        *self == RBig::ZERO
    }

    fn is_one(&self) -> bool {
        *self == RBig::ONE
    }

    fn from_int(n: i64) -> Self {
        RBig::from(IBig::from(n))
    }

    fn checked_div(&self, other: &Self) -> Option<Self> {
        if Ring::is_zero(other) {
            None
        } else {
            Some(self.clone() / other.clone())
        }
    }
}

impl Field for RBig {}
