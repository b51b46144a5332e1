//! # taylorkit-rings
//!
//! Coefficient algebra for truncated power series.
//!
//! This crate provides:
//! - Abstract traits: [`Ring`], [`Field`], [`Elementary`]
//! - Coefficient implementations for `i64`, `dashu::rational::RBig`,
//!   `f32`, `f64` and `num_complex::Complex64`
//! - The [`Promote`] lattice used to reconcile mixed-type operands
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring            i64, RBig, f32, f64, Complex64
//!  └── Field      RBig, f32, f64, Complex64
//!       └── Elementary   f32, f64, Complex64
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod floats;
pub mod integers;
pub mod promote;
pub mod rationals;
pub mod traits;

pub use dashu::rational::RBig;
pub use num_complex::Complex64;
pub use promote::{Lift, Promote};
pub use rationals::rational;
pub use traits::{Elementary, Field, Ring};
