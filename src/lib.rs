//! # taylorkit
//!
//! Arithmetic on truncated power series ("Taylor polynomials") in one
//! variable over a generic coefficient type.
//!
//! ## Features
//!
//! - **Generic coefficients**: integers, exact rationals, `f32`, `f64` and
//!   complex numbers, mixed freely through type promotion
//! - **Explicit truncation**: the order is part of every value and is
//!   reconciled at each binary operation
//! - **Recurrence kernels**: division, powers, roots, `exp`, `log`, `sin`,
//!   `cos` and `tan` computed degree by degree
//! - **Calculus**: differentiation, integration, evaluation and composition
//!
//! ## Quick Start
//!
//! ```
//! use taylorkit::prelude::*;
//!
//! let x = Series::<f64>::variable(4);
//! let one_plus_x = x.add_scalar(&1.0);
//! let squared = one_plus_x.powi(2)?;
//! assert_eq!(squared.coeffs(), &[1.0, 2.0, 1.0, 0.0, 0.0]);
//! # Ok::<(), SeriesError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use taylorkit_rings as rings;
pub use taylorkit_series as series;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use taylorkit_rings::{rational, Complex64, Elementary, Field, Promote, RBig, Ring};
    pub use taylorkit_series::{reconcile, Expansion, Series, SeriesError};
}
