//! The truncated power series type.
//!
//! A [`Series`] stores the coefficients `c_0 ..= c_order` of a Taylor
//! polynomial in a single indeterminate `t`. The coefficient buffer always
//! holds exactly `order + 1` entries; shorter input is zero-padded and longer
//! input raises the order instead of being dropped.

use std::fmt;
use std::ops::Index;

use taylorkit_rings::Ring;

/// A Taylor polynomial truncated at a fixed order.
#[derive(Clone, Debug)]
pub struct Series<T> {
    coeffs: Vec<T>,
}

impl<T: Ring> Series<T> {
    /// Creates a series of the given order from (a prefix of) its coefficients.
    ///
    /// Missing coefficients are zero. If more than `order + 1` coefficients
    /// are supplied the order is raised to fit them.
    #[must_use]
    pub fn new(mut coeffs: Vec<T>, order: usize) -> Self {
        let len = coeffs.len().max(order + 1);
        coeffs.resize(len, T::zero());
        Self { coeffs }
    }

    /// Creates a series whose order is fixed by the number of coefficients.
    ///
    /// An empty vector gives the zero series of order 0.
    #[must_use]
    pub fn from_coeffs(coeffs: Vec<T>) -> Self {
        let order = coeffs.len().saturating_sub(1);
        Self::new(coeffs, order)
    }

    /// The constant series `c`.
    #[must_use]
    pub fn constant(c: T, order: usize) -> Self {
        Self::new(vec![c], order)
    }

    /// The independent variable `t`.
    ///
    /// Order 0 cannot hold `t` and is raised to 1.
    #[must_use]
    pub fn variable(order: usize) -> Self {
        Self::new(vec![T::zero(), T::one()], order)
    }

    /// The zero series of the given order.
    #[must_use]
    pub fn zero(order: usize) -> Self {
        Self::new(Vec::new(), order)
    }

    /// The constant series 1 of the given order.
    #[must_use]
    pub fn one(order: usize) -> Self {
        Self::constant(T::one(), order)
    }

    /// The zero series with the same order as `self`.
    #[must_use]
    pub fn zero_like(&self) -> Self {
        Self::zero(self.order())
    }

    /// The constant series 1 with the same order as `self`.
    #[must_use]
    pub fn one_like(&self) -> Self {
        Self::one(self.order())
    }

    /// Wraps a buffer filled by a driver. The buffer must not be empty.
    pub(crate) fn from_buffer(coeffs: Vec<T>) -> Self {
        debug_assert!(!coeffs.is_empty(), "series buffer must hold c_0");
        Self { coeffs }
    }

    /// The truncation order.
    #[must_use]
    pub fn order(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// The number of stored coefficients (`order + 1`).
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Name of the coefficient type.
    #[must_use]
    pub fn coefficient_type(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    /// Returns the coefficient of `t^n`, zero above the order.
    #[must_use]
    pub fn coeff(&self, n: usize) -> T {
        self.coeffs.get(n).cloned().unwrap_or_else(T::zero)
    }

    /// The coefficient buffer.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// A copy of the coefficient buffer.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.coeffs.clone()
    }

    /// Consumes the series, returning its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<T> {
        self.coeffs
    }

    /// The lowest degree with a non-zero coefficient, or `order + 1` for the
    /// zero series.
    #[must_use]
    pub fn first_nonzero(&self) -> usize {
        self.coeffs
            .iter()
            .position(|c| !c.is_zero())
            .unwrap_or(self.coeffs.len())
    }

    /// Returns true if every retained coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Ring::is_zero)
    }

    /// Re-pads to a higher order. Never drops coefficients: a lower `order`
    /// leaves the series unchanged.
    #[must_use]
    pub fn with_order(&self, order: usize) -> Self {
        Self::new(self.coeffs.clone(), order)
    }

    /// Discards all coefficients above `order`.
    #[must_use]
    pub fn truncate(&self, order: usize) -> Self {
        let keep = (order + 1).min(self.coeffs.len());
        Self::new(self.coeffs[..keep].to_vec(), order)
    }

    /// Multiplies every coefficient by a scalar.
    #[must_use]
    pub fn scale(&self, c: &T) -> Self {
        Self::from_buffer(self.coeffs.iter().map(|a| a.clone() * c.clone()).collect())
    }

    /// Adds a scalar to the constant term.
    #[must_use]
    pub fn add_scalar(&self, c: &T) -> Self {
        let mut coeffs = self.coeffs.clone();
        coeffs[0] = coeffs[0].clone() + c.clone();
        Self::from_buffer(coeffs)
    }

    /// Applies `f` to every coefficient, keeping the order.
    pub fn map<U: Ring>(&self, f: impl FnMut(&T) -> U) -> Series<U> {
        Series::from_buffer(self.coeffs.iter().map(f).collect())
    }
}

impl<T> Index<usize> for Series<T> {
    type Output = T;

    fn index(&self, n: usize) -> &T {
        &self.coeffs[n]
    }
}

impl<T: Ring + fmt::Display> fmt::Display for Series<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            // A coefficient printing as "-x" where -c prints as "x" is shown
            // as a subtracted term; anything else (e.g. complex) keeps "+".
            let neg = -c.clone();
            let (negative, magnitude) = {
                let text = c.to_string();
                let flipped = neg.to_string();
                if text == format!("-{flipped}") {
                    (true, flipped)
                } else {
                    (false, text)
                }
            };
            let unit = if negative { neg.is_one() } else { c.is_one() };
            match (first, negative) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            first = false;
            match i {
                0 => write!(f, "{magnitude}")?,
                _ if unit => write!(f, "t")?,
                _ => write!(f, "{magnitude} t")?,
            }
            if i > 1 {
                write!(f, "^{i}")?;
            }
        }
        if first {
            write!(f, "0")?;
        }
        write!(f, " + O(t^{})", self.order() + 1)
    }
}
