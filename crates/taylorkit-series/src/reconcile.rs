//! Shape reconciliation of two series.
//!
//! Every binary operation first brings its operands to a common coefficient
//! type (via [`Promote`]) and a common order (the larger of the two, by
//! zero-extension). Inputs are never modified.

use taylorkit_rings::{Promote, Ring};

use crate::series::Series;

/// Lifts `coeffs` into `R` and zero-pads to `order`.
fn lift_padded<C, R: Ring>(coeffs: &[C], order: usize, lift: impl Fn(C) -> R) -> Series<R>
where
    C: Clone,
{
    let lifted = coeffs.iter().cloned().map(lift).collect();
    Series::new(lifted, order)
}

/// Aligns two series to the same coefficient type and order.
///
/// Coefficients at matching degrees keep their values; the shorter series is
/// zero-extended.
pub fn reconcile<T, S>(a: &Series<T>, b: &Series<S>) -> (Series<T::Common>, Series<T::Common>)
where
    T: Promote<S>,
    S: Ring,
{
    let order = a.order().max(b.order());
    (
        lift_padded(a.coeffs(), order, T::lift_left),
        lift_padded(b.coeffs(), order, T::lift_right),
    )
}

impl<T, S> PartialEq<Series<S>> for Series<T>
where
    T: Promote<S>,
    S: Ring,
{
    fn eq(&self, other: &Series<S>) -> bool {
        let (a, b) = reconcile(self, other);
        a.coeffs() == b.coeffs()
    }
}
