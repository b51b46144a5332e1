//! Truncated Taylor series arithmetic for the taylorkit library.
//!
//! This crate provides:
//! - [`Series`]: a Taylor polynomial with an explicit truncation order
//! - Ring operations across coefficient types via [`reconcile`]
//! - Division, integer/real/rational/complex/series powers, square roots
//! - `exp`, `log`, `sin`, `cos`, `tan`
//! - Differentiation, integration, evaluation and composition
//!
//! # Key algorithms
//!
//! Every non-linear operation is computed degree by degree from a recurrence
//! derived from the differential equation its result satisfies. The
//! per-degree recurrences live in [`kernels`]; the drivers allocate a result
//! buffer, seed its leading coefficient and run the kernel upward. Work is
//! `O(order)` for linear operations and `O(order^2)` otherwise.
//!
//! ```
//! use taylorkit_series::Series;
//!
//! let x = Series::<f64>::variable(3);
//! let e = x.exp();
//! assert_eq!(e.coeffs(), &[1.0, 1.0, 0.5, 1.0 / 6.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arith;
pub mod calculus;
pub mod elementary;
pub mod error;
pub mod kernels;
pub mod power;
pub mod reconcile;
pub mod series;

#[cfg(test)]
mod proptests;

pub use error::{Result, SeriesError};
pub use power::Expansion;
pub use reconcile::reconcile;
pub use series::Series;
