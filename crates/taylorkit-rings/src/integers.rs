//! Machine integers as series coefficients.
//!
//! `i64` is a ring without reciprocals: integer series support the ring
//! operations, non-negative integer powers, differentiation and evaluation,
//! but never division.

use crate::traits::Ring;

impl Ring for i64 {
    const HAS_RECIPROCAL: bool = false;

    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn is_one(&self) -> bool {
        *self == 1
    }

    fn from_int(n: i64) -> Self {
        n
    }

    fn checked_div(&self, _other: &Self) -> Option<Self> {
        None
    }

    fn checked_mul(&self, other: &Self) -> Option<Self> {
        i64::checked_mul(*self, *other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities() {
        assert!(<i64 as Ring>::zero().is_zero());
        assert!(<i64 as Ring>::one().is_one());
        assert_eq!(<i64 as Ring>::from_int(-4), -4);
    }

    #[test]
    fn test_no_reciprocal() {
        assert!(!<i64 as Ring>::HAS_RECIPROCAL);
        assert_eq!(Ring::checked_div(&6i64, &3), None);
    }

    #[test]
    fn test_checked_mul_overflow() {
        assert_eq!(Ring::checked_mul(&-7i64, &6), Some(-42));
        assert_eq!(Ring::checked_mul(&i64::MAX, &2), None);
    }
}
