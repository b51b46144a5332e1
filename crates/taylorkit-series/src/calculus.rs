//! Differentiation, integration and evaluation.

use taylorkit_rings::{Field, Promote, Ring};

use crate::arith::mul_aligned;
use crate::error::{Result, SeriesError};
use crate::kernels::int;
use crate::reconcile::reconcile;
use crate::series::Series;

impl<T: Ring> Series<T> {
    /// Computes the formal derivative.
    ///
    /// `(f')_i = (i+1) f_{i+1}`. The order is kept, so the top coefficient
    /// becomes zero.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let a = self.coeffs();
        let mut coeffs: Vec<T> = (1..a.len()).map(|i| int::<T>(i) * a[i].clone()).collect();
        coeffs.push(T::zero());
        Series::from_buffer(coeffs)
    }

    /// Differentiates `n` times.
    #[must_use]
    pub fn nth_derivative(&self, n: usize) -> Self {
        if n > self.order() {
            return self.zero_like();
        }
        (0..n).fold(self.clone(), |d, _| d.derivative())
    }

    /// The `n`-th derivative at the origin, `n! c_n`.
    ///
    /// # Errors
    ///
    /// [`SeriesError::InsufficientOrder`] if `n` exceeds the order, and
    /// [`SeriesError::CoefficientOverflow`] if `n! c_n` does not fit the
    /// coefficient type (`i64` from `n = 21` on).
    pub fn derivative_at_origin(&self, n: usize) -> Result<T> {
        if n > self.order() {
            return Err(SeriesError::InsufficientOrder {
                requested: n,
                order: self.order(),
            });
        }
        let overflow = || SeriesError::CoefficientOverflow { degree: n };
        let factorial = (2..=n)
            .try_fold(T::one(), |acc, i| acc.checked_mul(&int::<T>(i)))
            .ok_or_else(overflow)?;
        factorial.checked_mul(&self[n]).ok_or_else(overflow)
    }

    /// Evaluates at a point using Horner's rule.
    pub fn evaluate(&self, x: &T) -> T {
        self.coeffs()
            .iter()
            .rev()
            .fold(T::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    /// Substitutes another series for the variable, `self(g(t))`.
    ///
    /// Horner's rule runs in the truncated series ring after reconciling the
    /// two operands, so the result has their common order.
    pub fn evaluate_series<S>(&self, g: &Series<S>) -> Series<T::Common>
    where
        T: Promote<S>,
        S: Ring,
    {
        let (f, g) = reconcile(self, g);
        let f = f.coeffs();
        let order = g.order();
        let mut result = Series::constant(f[order].clone(), order);
        for c in f[..order].iter().rev() {
            result = mul_aligned(&result, &g).add_scalar(c);
        }
        result
    }
}

impl<T: Field> Series<T> {
    /// Computes the antiderivative with zero constant term.
    #[must_use]
    pub fn integrate(&self) -> Self {
        self.integrate_with(T::zero())
    }

    /// Computes the antiderivative with constant term `c`.
    ///
    /// `(∫f)_{i+1} = f_i / (i+1)`. The order grows by one so that no
    /// coefficient of `self` is lost.
    #[must_use]
    pub fn integrate_with(&self, c: T) -> Self {
        let mut coeffs = Vec::with_capacity(self.len() + 1);
        coeffs.push(c);
        for (i, a) in self.coeffs().iter().enumerate() {
            coeffs.push(a.clone() / int::<T>(i + 1));
        }
        Series::from_buffer(coeffs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taylorkit_rings::{rational, RBig};

    fn q(n: i64, d: u64) -> RBig {
        rational(n, d)
    }

    #[test]
    fn test_derivative() {
        // d/dt (1 + 2t + 3t^2) = 2 + 6t
        let f = Series::new(vec![1i64, 2, 3], 2);
        assert_eq!(f.derivative().coeffs(), &[2, 6, 0]);
    }

    #[test]
    fn test_nth_derivative() {
        let f = Series::new(vec![1i64, 1, 1, 1], 3);
        assert_eq!(f.nth_derivative(2).coeffs(), &[2, 6, 0, 0]);
        assert_eq!(f.nth_derivative(0), f);
        assert!(f.nth_derivative(4).is_zero());
    }

    #[test]
    fn test_derivative_at_origin() {
        let f = Series::new(vec![1i64, 1, 1, 1], 3);
        assert_eq!(f.derivative_at_origin(0), Ok(1));
        assert_eq!(f.derivative_at_origin(3), Ok(6));
        assert_eq!(
            f.derivative_at_origin(4),
            Err(SeriesError::InsufficientOrder { requested: 4, order: 3 })
        );
    }

    #[test]
    fn test_derivative_at_origin_integer_overflow() {
        let mut coeffs = vec![0i64; 23];
        coeffs[20] = 1;
        coeffs[21] = 1;
        coeffs[22] = 1;
        let f = Series::new(coeffs, 22);
        assert_eq!(f.derivative_at_origin(20), Ok(2_432_902_008_176_640_000));
        assert_eq!(
            f.derivative_at_origin(21),
            Err(SeriesError::CoefficientOverflow { degree: 21 })
        );
        assert_eq!(
            f.derivative_at_origin(22),
            Err(SeriesError::CoefficientOverflow { degree: 22 })
        );

        // exact rationals never overflow
        let g = f.map(|c| q(*c, 1));
        assert_eq!(g.derivative_at_origin(21).unwrap(), q(21, 1) * q(2_432_902_008_176_640_000, 1));
    }

    #[test]
    fn test_integrate() {
        // ∫(2 + 6t) = 2t + 3t^2
        let f = Series::new(vec![q(2, 1), q(6, 1)], 1);
        let g = f.integrate();
        assert_eq!(g.order(), 2);
        assert_eq!(g.coeffs(), &[q(0, 1), q(2, 1), q(3, 1)]);
        assert_eq!(f.integrate_with(q(5, 1))[0], q(5, 1));
    }

    #[test]
    fn test_derivative_undoes_integrate() {
        let f = Series::new(vec![q(1, 2), q(-3, 1), q(2, 7)], 2);
        assert_eq!(f.integrate_with(q(9, 1)).derivative(), f);
    }

    #[test]
    fn test_evaluate() {
        // f(t) = 1 + t + t^2, f(2) = 7
        let f = Series::new(vec![q(1, 1), q(1, 1), q(1, 1)], 2);
        assert_eq!(f.evaluate(&q(2, 1)), q(7, 1));
        assert_eq!(Series::new(vec![3i64, -1], 1).evaluate(&0), 3);
    }

    #[test]
    fn test_evaluate_series_composition() {
        // f(t) = 1 + t + t^2, g(t) = 2t  =>  f(g) = 1 + 2t + 4t^2
        let f = Series::new(vec![1i64, 1, 1], 3);
        let g = Series::new(vec![0i64, 2], 3);
        assert_eq!(f.evaluate_series(&g).coeffs(), &[1, 2, 4, 0]);
    }

    #[test]
    fn test_evaluate_series_with_constant_term() {
        // f(t) = t^2, g(t) = 1 + t  =>  1 + 2t + t^2 at the common order 2
        let f = Series::new(vec![0.0f64, 0.0, 1.0], 2);
        let g = Series::new(vec![1i64, 1], 1);
        assert_eq!(f.evaluate_series(&g).coeffs(), &[1.0, 2.0, 1.0]);
    }
}
