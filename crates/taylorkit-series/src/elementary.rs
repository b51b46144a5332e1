//! Exponential, logarithm and trigonometric functions of a series.
//!
//! Each driver seeds degree 0 with the coefficient function and runs its
//! kernel upward; all of them keep the order of the argument.

use taylorkit_rings::Elementary;

use crate::error::{Result, SeriesError};
use crate::kernels::{exp_coeff, log_coeff, sincos_coeff, square_coeff, tan_coeff};
use crate::series::Series;

impl<T: Elementary> Series<T> {
    /// Computes `exp(self)`.
    #[must_use]
    pub fn exp(&self) -> Self {
        let a = self.coeffs();
        let mut coeffs = vec![T::zero(); a.len()];
        coeffs[0] = a[0].exp();
        for k in 1..a.len() {
            coeffs[k] = exp_coeff(a, &coeffs, k);
        }
        Series::from_buffer(coeffs)
    }

    /// Computes the natural logarithm.
    ///
    /// # Errors
    ///
    /// [`SeriesError::LogAtRoot`] if the constant term is zero.
    pub fn log(&self) -> Result<Self> {
        let p = self.first_nonzero();
        if p > 0 {
            return Err(SeriesError::LogAtRoot { degree: p });
        }

        let a = self.coeffs();
        let mut coeffs = vec![T::zero(); a.len()];
        coeffs[0] = a[0].ln();
        for k in 1..a.len() {
            coeffs[k] = log_coeff(a, &coeffs, k);
        }
        Ok(Series::from_buffer(coeffs))
    }

    /// Computes `(sin(self), cos(self))` in one coupled pass.
    #[must_use]
    pub fn sin_cos(&self) -> (Self, Self) {
        let a = self.coeffs();
        let mut sin = vec![T::zero(); a.len()];
        let mut cos = vec![T::zero(); a.len()];
        (sin[0], cos[0]) = a[0].sin_cos();
        for k in 1..a.len() {
            (sin[k], cos[k]) = sincos_coeff(a, &sin, &cos, k);
        }
        (Series::from_buffer(sin), Series::from_buffer(cos))
    }

    /// Computes `sin(self)`.
    #[must_use]
    pub fn sin(&self) -> Self {
        self.sin_cos().0
    }

    /// Computes `cos(self)`.
    #[must_use]
    pub fn cos(&self) -> Self {
        self.sin_cos().1
    }

    /// Computes `tan(self)`.
    ///
    /// `tan' = a' (1 + tan^2)` feeds the square of the partial result back
    /// into the recurrence, so `tan^2` is advanced one degree behind it.
    #[must_use]
    pub fn tan(&self) -> Self {
        let a = self.coeffs();
        let mut coeffs = vec![T::zero(); a.len()];
        let mut squared = vec![T::zero(); a.len()];
        coeffs[0] = a[0].tan();
        squared[0] = square_coeff(&coeffs, 0);
        for k in 1..a.len() {
            coeffs[k] = tan_coeff(a, &squared, k);
            squared[k] = square_coeff(&coeffs, k);
        }
        Series::from_buffer(coeffs)
    }
}
