//! Ring operations and division.
//!
//! Binary operators reconcile their operands first, so a `Series<i64>` can
//! be added to a `Series<f64>` and the result has the larger order of the two.

use std::ops::{Add, Mul, Neg, Sub};

use taylorkit_rings::{Field, Promote, Ring};
use tracing::{debug, trace};

use crate::error::{Result, SeriesError};
use crate::kernels::{div_coeff, mul_coeff};
use crate::reconcile::reconcile;
use crate::series::Series;

fn add_aligned<R: Ring>(a: &Series<R>, b: &Series<R>) -> Series<R> {
    let coeffs = a
        .coeffs()
        .iter()
        .zip(b.coeffs())
        .map(|(x, y)| x.clone() + y.clone())
        .collect();
    Series::from_buffer(coeffs)
}

fn sub_aligned<R: Ring>(a: &Series<R>, b: &Series<R>) -> Series<R> {
    let coeffs = a
        .coeffs()
        .iter()
        .zip(b.coeffs())
        .map(|(x, y)| x.clone() - y.clone())
        .collect();
    Series::from_buffer(coeffs)
}

/// Truncated Cauchy product of two series of equal order.
pub(crate) fn mul_aligned<R: Ring>(a: &Series<R>, b: &Series<R>) -> Series<R> {
    let (a, b) = (a.coeffs(), b.coeffs());
    let mut coeffs = vec![R::zero(); a.len()];
    coeffs[0] = a[0].clone() * b[0].clone();
    for k in 1..a.len() {
        coeffs[k] = mul_coeff(a, b, k);
    }
    Series::from_buffer(coeffs)
}

/// Quotient of two series of equal order.
///
/// Both operands are divided by `t^m`, `m` being the smaller of their
/// vanishing orders, before the convolution equation is solved degree by
/// degree. Degrees above `order - m` need dividend coefficients that were
/// truncated away and stay zero.
pub(crate) fn div_aligned<R: Ring>(a: &Series<R>, b: &Series<R>) -> Result<Series<R>> {
    let order = a.order();
    let p = a.first_nonzero();
    let q = b.first_nonzero();
    let m = p.min(q).min(order);
    trace!(p, q, m, "division factorization");

    let undefined = || SeriesError::DivisionUndefined { degree: m };
    let (ac, bc) = (a.coeffs(), b.coeffs());
    let mut coeffs = vec![R::zero(); order + 1];
    for j in 0..=order - m {
        coeffs[j] = div_coeff(ac, bc, &coeffs, m, j).ok_or_else(undefined)?;
    }
    if m > 0 {
        debug!(from = order - m + 1, "quotient coefficients zero-filled");
    }
    Ok(Series::from_buffer(coeffs))
}

macro_rules! impl_binop {
    ($Trait:ident, $method:ident, $aligned:ident) => {
        impl<T, S> $Trait<Series<S>> for Series<T>
        where
            T: Promote<S>,
            S: Ring,
        {
            type Output = Series<T::Common>;

            fn $method(self, rhs: Series<S>) -> Self::Output {
                let (a, b) = reconcile(&self, &rhs);
                $aligned(&a, &b)
            }
        }

        impl<'a, 'b, T, S> $Trait<&'b Series<S>> for &'a Series<T>
        where
            T: Promote<S>,
            S: Ring,
        {
            type Output = Series<T::Common>;

            fn $method(self, rhs: &'b Series<S>) -> Self::Output {
                let (a, b) = reconcile(self, rhs);
                $aligned(&a, &b)
            }
        }
    };
}

impl_binop!(Add, add, add_aligned);
impl_binop!(Sub, sub, sub_aligned);
impl_binop!(Mul, mul, mul_aligned);

impl<T: Ring> Neg for Series<T> {
    type Output = Series<T>;

    fn neg(self) -> Self::Output {
        Series::from_buffer(self.into_coeffs().into_iter().map(|c| -c).collect())
    }
}

impl<T: Ring> Neg for &Series<T> {
    type Output = Series<T>;

    fn neg(self) -> Self::Output {
        self.map(|c| -c.clone())
    }
}

impl<T: Ring> Series<T> {
    /// Divides by another series.
    ///
    /// A common factor `t^m` is cancelled first, so `t / t == 1`.
    ///
    /// # Errors
    ///
    /// [`SeriesError::DivisionUndefined`] if the divisor vanishes to a higher
    /// order than the dividend (the quotient has a pole at the origin).
    #[allow(clippy::should_implement_trait)]
    pub fn div<S>(&self, other: &Series<S>) -> Result<Series<T::Common>>
    where
        T: Promote<S>,
        S: Ring,
        T::Common: Field,
    {
        let (a, b) = reconcile(self, other);
        div_aligned(&a, &b)
    }
}

impl<T: Field> Series<T> {
    /// Computes `1 / self`.
    ///
    /// # Errors
    ///
    /// [`SeriesError::DivisionUndefined`] if the constant term is zero.
    pub fn reciprocal(&self) -> Result<Self> {
        div_aligned(&self.one_like(), self)
    }
}
