//! Coefficient type promotion.
//!
//! Binary operations on series with different coefficient types first lift
//! both sides to a common type. The promotion lattice is totally ordered:
//!
//! ```text
//! i64 < RBig < f32 < f64 < Complex64
//! ```
//!
//! and the common type of two coefficient types is the larger of the two.

use dashu::integer::IBig;
use dashu::rational::RBig;
use num_complex::Complex64;

use crate::traits::Ring;

/// Lossless (or nearest-value) conversion into a larger coefficient type.
pub trait Lift<To> {
    /// Converts `self` into the larger type.
    fn lift(self) -> To;
}

/// Pairs of coefficient types with a common supertype.
///
/// `<T as Promote<S>>::Common` is the coefficient type of any binary
/// operation between a `Series<T>` and a `Series<S>`.
pub trait Promote<Rhs: Ring>: Ring {
    /// The common supertype.
    type Common: Ring;

    /// Lifts a left-hand operand into the common type.
    fn lift_left(self) -> Self::Common;

    /// Lifts a right-hand operand into the common type.
    fn lift_right(rhs: Rhs) -> Self::Common;
}

impl Lift<RBig> for i64 {
    fn lift(self) -> RBig {
        RBig::from(IBig::from(self))
    }
}

impl Lift<f32> for i64 {
    #[allow(clippy::cast_precision_loss)]
    fn lift(self) -> f32 {
        self as f32
    }
}

impl Lift<f64> for i64 {
    #[allow(clippy::cast_precision_loss)]
    fn lift(self) -> f64 {
        self as f64
    }
}

impl Lift<Complex64> for i64 {
    fn lift(self) -> Complex64 {
        Complex64::new(Lift::<f64>::lift(self), 0.0)
    }
}

impl Lift<f32> for RBig {
    fn lift(self) -> f32 {
        self.to_f32().value()
    }
}

impl Lift<f64> for RBig {
    fn lift(self) -> f64 {
        self.to_f64().value()
    }
}

impl Lift<Complex64> for RBig {
    fn lift(self) -> Complex64 {
        Complex64::new(Lift::<f64>::lift(self), 0.0)
    }
}

impl Lift<f64> for f32 {
    fn lift(self) -> f64 {
        f64::from(self)
    }
}

impl Lift<Complex64> for f32 {
    fn lift(self) -> Complex64 {
        Complex64::new(f64::from(self), 0.0)
    }
}

impl Lift<Complex64> for f64 {
    fn lift(self) -> Complex64 {
        Complex64::new(self, 0.0)
    }
}

macro_rules! promote_same {
    ($($t:ty),*) => {
        $(
            impl Promote<$t> for $t {
                type Common = $t;

                fn lift_left(self) -> $t {
                    self
                }

                fn lift_right(rhs: $t) -> $t {
                    rhs
                }
            }
        )*
    };
}

macro_rules! promote_pair {
    ($lo:ty => $hi:ty) => {
        impl Promote<$hi> for $lo {
            type Common = $hi;

            fn lift_left(self) -> $hi {
                Lift::<$hi>::lift(self)
            }

            fn lift_right(rhs: $hi) -> $hi {
                rhs
            }
        }

        impl Promote<$lo> for $hi {
            type Common = $hi;

            fn lift_left(self) -> $hi {
                self
            }

            fn lift_right(rhs: $lo) -> $hi {
                Lift::<$hi>::lift(rhs)
            }
        }
    };
}

promote_same!(i64, RBig, f32, f64, Complex64);

promote_pair!(i64 => RBig);
promote_pair!(i64 => f32);
promote_pair!(i64 => f64);
promote_pair!(i64 => Complex64);
promote_pair!(RBig => f32);
promote_pair!(RBig => f64);
promote_pair!(RBig => Complex64);
promote_pair!(f32 => f64);
promote_pair!(f32 => Complex64);
promote_pair!(f64 => Complex64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rationals::rational;

    fn common<T: Promote<S>, S: Ring>(a: T, b: S) -> (T::Common, T::Common) {
        (a.lift_left(), T::lift_right(b))
    }

    #[test]
    fn test_integer_rational() {
        let (a, b) = common(3i64, rational(1, 2));
        assert_eq!(a, rational(3, 1));
        assert_eq!(b, rational(1, 2));
    }

    #[test]
    fn test_rational_float() {
        let (a, b) = common(rational(1, 4), 2.0f64);
        assert!((a - 0.25).abs() < f64::EPSILON);
        assert!((b - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_float_complex() {
        let (a, b) = common(Complex64::new(0.0, 1.0), 2.0f32);
        assert_eq!(a, Complex64::new(0.0, 1.0));
        assert_eq!(b, Complex64::new(2.0, 0.0));
    }

    fn lifted_product<T: Promote<S>, S: Ring>(a: T, b: S) -> <T as Promote<S>>::Common {
        let x: T::Common = a.lift_left();
        x * T::lift_right(b)
    }

    #[test]
    fn test_common_type_in_generic_arithmetic() {
        assert_eq!(lifted_product(3i64, rational(1, 6)), rational(1, 2));
        assert_eq!(lifted_product(2.0f32, Complex64::new(0.0, 1.5)), Complex64::new(0.0, 3.0));
        assert_eq!(lifted_product(-4i64, 5i64), -20);
    }

    #[test]
    fn test_same_type_is_identity() {
        let (a, b) = common(5i64, -2i64);
        assert_eq!((a, b), (5, -2));
    }
}
