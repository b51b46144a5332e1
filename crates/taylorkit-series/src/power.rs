//! Integer, real, rational, complex and series-valued powers.
//!
//! Integer exponents use exponentiation by squaring over the exact ring
//! operations. Non-integer exponents factor out the leading term
//! `a_p t^p` of the base, so the result starts at degree `l = x p`, which
//! must be a non-negative integer.

use taylorkit_rings::{Complex64, Elementary, Promote, RBig, Ring};
use tracing::{debug, trace};

use crate::arith::{div_aligned, mul_aligned};
use crate::error::{Result, SeriesError};
use crate::kernels::{pow_coeff, sqrt_coeff, square_coeff};
use crate::reconcile::reconcile;
use crate::series::Series;

/// A series produced by a recurrence that could not fill every degree.
///
/// When the base vanishes to order `p > 0`, the coefficient of degree `k` of
/// a root or fractional power depends on base coefficients up to degree
/// `k - l + p`. Degrees whose inputs lie beyond the truncation order are left
/// at zero; `zero_filled_from` names the first of them.
#[derive(Clone, Debug)]
pub struct Expansion<T> {
    /// The computed series.
    pub series: Series<T>,
    /// First degree that was zero-filled instead of computed.
    pub zero_filled_from: Option<usize>,
}

impl<T: Ring> Expansion<T> {
    fn complete(series: Series<T>) -> Self {
        Self {
            series,
            zero_filled_from: None,
        }
    }

    /// Returns true if every degree up to the order was computed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.zero_filled_from.is_none()
    }

    /// Discards the zero-fill report, logging it if present.
    #[must_use]
    pub fn into_series(self) -> Series<T> {
        if let Some(from) = self.zero_filled_from {
            debug!(from, order = self.series.order(), "trailing coefficients zero-filled");
        }
        self.series
    }
}

/// The last degree a factored recurrence can fill, and the zero-fill report.
fn fill_bound(order: usize, p: usize, l: usize) -> (usize, Option<usize>) {
    let last = (order - p + l).max(l).min(order);
    let zero_filled_from = (last < order).then_some(last + 1);
    (last, zero_filled_from)
}

/// `x` as an `i64` if it is an integer well inside the `i64` range.
#[allow(clippy::cast_possible_truncation)]
fn as_integer(x: f64) -> Option<i64> {
    (x.fract() == 0.0 && x.abs() < 9.0e18).then(|| x as i64)
}

impl<T: Ring> Series<T> {
    /// Computes `self * self` with roughly half the multiplications of a
    /// general product.
    #[must_use]
    pub fn square(&self) -> Self {
        let a = self.coeffs();
        let coeffs = (0..a.len()).map(|k| square_coeff(a, k)).collect();
        Series::from_buffer(coeffs)
    }

    /// Raises to a non-negative power by repeated squaring.
    fn pow_unsigned(&self, n: u64) -> Self {
        match n {
            0 => self.one_like(),
            1 => self.clone(),
            2 => self.square(),
            _ => {
                let mut result: Option<Self> = None;
                let mut base = self.clone();
                let mut exp = n;
                loop {
                    if exp & 1 == 1 {
                        result = Some(match result {
                            None => base.clone(),
                            Some(r) => mul_aligned(&r, &base),
                        });
                    }
                    exp >>= 1;
                    if exp == 0 {
                        break;
                    }
                    base = base.square();
                }
                result.unwrap_or_else(|| self.one_like())
            }
        }
    }

    /// Raises to an integer power.
    ///
    /// Negative exponents compute `1 / self^(-n)`.
    ///
    /// # Errors
    ///
    /// - [`SeriesError::NegativeIntegerPowerOnNonInvertibleType`] for a
    ///   negative exponent on a coefficient type without reciprocals.
    /// - [`SeriesError::DivisionUndefined`] for a negative exponent on a
    ///   series with zero constant term.
    pub fn powi(&self, n: i64) -> Result<Self> {
        if n >= 0 {
            return Ok(self.pow_unsigned(n.unsigned_abs()));
        }
        if !T::HAS_RECIPROCAL {
            return Err(SeriesError::NegativeIntegerPowerOnNonInvertibleType { exponent: n });
        }
        let denom = self.pow_unsigned(n.unsigned_abs());
        div_aligned(&self.one_like(), &denom)
    }

    /// Raises to a series-valued power, `exp(e log(self))`.
    ///
    /// # Errors
    ///
    /// [`SeriesError::LogAtRoot`] if `self` has zero constant term.
    pub fn pow_series<S>(&self, e: &Series<S>) -> Result<Series<T::Common>>
    where
        T: Promote<S>,
        S: Ring,
        T::Common: Elementary,
    {
        let (base, e) = reconcile(self, e);
        let log = base.log()?;
        Ok(mul_aligned(&e, &log).exp())
    }

    /// Raises to a complex power, `exp(z log(self))`.
    ///
    /// # Errors
    ///
    /// [`SeriesError::LogAtRoot`] if `self` has zero constant term.
    pub fn powc(&self, z: Complex64) -> Result<Series<Complex64>>
    where
        T: Promote<Complex64, Common = Complex64>,
    {
        self.pow_series(&Series::constant(z, 0))
    }
}

impl<T: Elementary> Series<T> {
    /// Square root, reporting trailing zero-fill.
    ///
    /// # Errors
    ///
    /// [`SeriesError::OddLeadingDegree`] if the first non-zero coefficient
    /// sits at an odd degree.
    pub fn sqrt_expansion(&self) -> Result<Expansion<T>> {
        let order = self.order();
        let p = self.first_nonzero();
        if p > order {
            return Ok(Expansion::complete(self.zero_like()));
        }
        if p % 2 == 1 {
            return Err(SeriesError::OddLeadingDegree { degree: p });
        }

        let l = p / 2;
        let (last, zero_filled_from) = fill_bound(order, p, l);
        trace!(p, l, last, "sqrt expansion");

        let a = self.coeffs();
        let mut coeffs = vec![T::zero(); order + 1];
        coeffs[l] = a[p].sqrt();
        for k in l + 1..=last {
            coeffs[k] = sqrt_coeff(a, &coeffs, p, k);
        }
        Ok(Expansion {
            series: Series::from_buffer(coeffs),
            zero_filled_from,
        })
    }

    /// Square root.
    ///
    /// # Errors
    ///
    /// [`SeriesError::OddLeadingDegree`] if the first non-zero coefficient
    /// sits at an odd degree.
    pub fn sqrt(&self) -> Result<Self> {
        self.sqrt_expansion().map(Expansion::into_series)
    }

    /// Real power, reporting trailing zero-fill.
    ///
    /// Integer exponents delegate to [`powi`](Self::powi) and `0.5` to
    /// [`sqrt_expansion`](Self::sqrt_expansion).
    ///
    /// # Errors
    ///
    /// - [`SeriesError::NonIntegerExpansionOrder`] if `x` times the leading
    ///   degree is not an integer.
    /// - [`SeriesError::NegativeExpansionOrder`] if it is a negative integer.
    /// - [`SeriesError::DivisionUndefined`] for a negative integer `x` on a
    ///   series with zero constant term.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn powf_expansion(&self, x: f64) -> Result<Expansion<T>> {
        if let Some(n) = as_integer(x) {
            return self.powi(n).map(Expansion::complete);
        }
        if x == 0.5 {
            return self.sqrt_expansion();
        }

        let order = self.order();
        let p = self.first_nonzero();
        if p > order {
            return Ok(Expansion::complete(self.zero_like()));
        }
        let lead = x * p as f64;
        if !lead.is_finite() || lead.fract() != 0.0 {
            return Err(SeriesError::NonIntegerExpansionOrder {
                exponent: x,
                leading_degree: p,
            });
        }
        if lead < 0.0 {
            return Err(SeriesError::NegativeExpansionOrder { degree: lead as i64 });
        }
        let l = lead as usize;
        if l > order {
            return Ok(Expansion::complete(self.zero_like()));
        }

        let (last, zero_filled_from) = fill_bound(order, p, l);
        trace!(x, p, l, last, "real power expansion");

        let a = self.coeffs();
        let mut coeffs = vec![T::zero(); order + 1];
        coeffs[l] = a[p].powf(x);
        for k in l + 1..=last {
            coeffs[k] = pow_coeff(a, &coeffs, x, p, l, k);
        }
        Ok(Expansion {
            series: Series::from_buffer(coeffs),
            zero_filled_from,
        })
    }

    /// Real power.
    ///
    /// # Errors
    ///
    /// See [`powf_expansion`](Self::powf_expansion).
    pub fn powf(&self, x: f64) -> Result<Self> {
        self.powf_expansion(x).map(Expansion::into_series)
    }

    /// Rational power. Integral rationals take the exact integer path.
    ///
    /// # Errors
    ///
    /// See [`powf_expansion`](Self::powf_expansion).
    pub fn pow_rational(&self, r: &RBig) -> Result<Self> {
        match taylorkit_rings::rationals::to_integer(r) {
            Some(n) => self.powi(n),
            None => self.powf(taylorkit_rings::rationals::to_f64(r)),
        }
    }
}
