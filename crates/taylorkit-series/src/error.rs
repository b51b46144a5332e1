//! Errors raised by series operations.
//!
//! Every failure is a structural impossibility detected from the inputs; none
//! of them is transient, and no partial result is returned alongside one.

use thiserror::Error;

/// Errors that can occur while computing a series operation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SeriesError {
    /// The dividend vanishes to a lower order than the divisor, or the
    /// factored leading ratio is otherwise infinite or undefined.
    #[error("division does not define a Taylor polynomial: leading ratio at degree {degree} is undefined")]
    DivisionUndefined {
        /// The common vanishing order at which the ratio was taken.
        degree: usize,
    },

    /// A non-integer exponent applied to a series whose scaled leading degree
    /// is not an integer.
    #[error("exponent {exponent} times leading degree {leading_degree} is not an integer")]
    NonIntegerExpansionOrder {
        /// The real exponent.
        exponent: f64,
        /// The first non-vanishing degree of the base.
        leading_degree: usize,
    },

    /// A non-integer exponent whose result would start at a negative degree.
    #[error("power would have leading degree {degree}, which is a pole at the origin")]
    NegativeExpansionOrder {
        /// The (negative) leading degree of the would-be result.
        degree: i64,
    },

    /// Square root of a series whose first non-zero coefficient has odd degree.
    #[error("first non-vanishing coefficient has odd degree {degree}; square root is not a Taylor polynomial")]
    OddLeadingDegree {
        /// The first non-vanishing degree.
        degree: usize,
    },

    /// Logarithm of a series that vanishes at the origin.
    #[error("logarithm requires a non-zero constant term, first non-vanishing degree is {degree}")]
    LogAtRoot {
        /// The first non-vanishing degree.
        degree: usize,
    },

    /// Negative integer power on a coefficient type without reciprocals.
    #[error("negative exponent {exponent} requires a coefficient type with reciprocals")]
    NegativeIntegerPowerOnNonInvertibleType {
        /// The requested exponent.
        exponent: i64,
    },

    /// A coefficient left the range of a fixed-width coefficient type.
    #[error("coefficient overflow while computing degree {degree}")]
    CoefficientOverflow {
        /// The degree being computed.
        degree: usize,
    },

    /// A derivative of higher degree than the stored order.
    #[error("derivative of order {requested} requested from a series truncated at order {order}")]
    InsufficientOrder {
        /// The requested derivative order.
        requested: usize,
        /// The order of the series.
        order: usize,
    },
}

/// Result type for series operations.
pub type Result<T> = std::result::Result<T, SeriesError>;
