//! Floating-point coefficients: `f32`, `f64` and `Complex<f64>`.
//!
//! Division is reported as undefined whenever the IEEE quotient is not
//! finite, which is how a vanishing divisor shows up for these types.

use num_complex::Complex64;
use num_traits::{One, Zero};

use crate::traits::{Elementary, Field, Ring};

macro_rules! impl_real {
    ($t:ty) => {
        impl Ring for $t {
            const HAS_RECIPROCAL: bool = true;

            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            fn is_zero(&self) -> bool {
                *self == 0.0
            }

            fn is_one(&self) -> bool {
                *self == 1.0
            }

            #[allow(clippy::cast_precision_loss)]
            fn from_int(n: i64) -> Self {
                n as $t
            }

            fn checked_div(&self, other: &Self) -> Option<Self> {
                let q = *self / *other;
                q.is_finite().then_some(q)
            }
        }

        impl Field for $t {}

        impl Elementary for $t {
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(x: f64) -> Self {
                x as $t
            }

            fn exp(&self) -> Self {
                <$t>::exp(*self)
            }

            fn ln(&self) -> Self {
                <$t>::ln(*self)
            }

            fn sin(&self) -> Self {
                <$t>::sin(*self)
            }

            fn cos(&self) -> Self {
                <$t>::cos(*self)
            }

            fn tan(&self) -> Self {
                <$t>::tan(*self)
            }

            fn sqrt(&self) -> Self {
                <$t>::sqrt(*self)
            }

            #[allow(clippy::cast_possible_truncation)]
            fn powf(&self, x: f64) -> Self {
                <$t>::powf(*self, x as $t)
            }

            fn sin_cos(&self) -> (Self, Self) {
                <$t>::sin_cos(*self)
            }
        }
    };
}

impl_real!(f32);
impl_real!(f64);

impl Ring for Complex64 {
    const HAS_RECIPROCAL: bool = true;

    fn zero() -> Self {
        <Complex64 as Zero>::zero()
    }

    fn one() -> Self {
        <Complex64 as One>::one()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        One::is_one(self)
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_int(n: i64) -> Self {
        Complex64::new(n as f64, 0.0)
    }

    fn checked_div(&self, other: &Self) -> Option<Self> {
        if Zero::is_zero(other) {
            return None;
        }
        let q = *self / *other;
        q.is_finite().then_some(q)
    }
}

impl Field for Complex64 {}

impl Elementary for Complex64 {
    fn from_f64(x: f64) -> Self {
        Complex64::new(x, 0.0)
    }

    fn exp(&self) -> Self {
        Complex64::exp(*self)
    }

    fn ln(&self) -> Self {
        Complex64::ln(*self)
    }

    fn sin(&self) -> Self {
        Complex64::sin(*self)
    }

    fn cos(&self) -> Self {
        Complex64::cos(*self)
    }

    fn tan(&self) -> Self {
        Complex64::tan(*self)
    }

    fn sqrt(&self) -> Self {
        Complex64::sqrt(*self)
    }

    fn powf(&self, x: f64) -> Self {
        Complex64::powf(*self, x)
    }
}
