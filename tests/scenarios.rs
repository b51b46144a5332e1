//! End-to-end scenarios through the public facade.

use taylorkit::prelude::*;

#[test]
fn binomial_square() {
    let a = Series::new(vec![1i64, 1], 4);
    assert_eq!(a.powi(2).unwrap(), Series::new(vec![1i64, 2, 1, 0, 0], 4));
}

#[test]
fn exp_of_variable() {
    let x = Series::new(vec![q(0, 1), q(1, 1)], 3);
    // exp is not available over exact rationals; lift to f64 first
    let e = (&x + &Series::<f64>::zero(0)).exp();
    assert_eq!(e, Series::new(vec![1.0, 1.0, 0.5, 1.0 / 6.0], 3));
}

#[test]
fn quotient_of_equal_vanishing_order() {
    let x = Series::new(vec![0.0f64, 1.0], 2);
    assert_eq!(x.div(&x).unwrap(), Series::new(vec![1.0f64, 0.0, 0.0], 2));
}

#[test]
fn sqrt_of_square_monomial() {
    let a = Series::new(vec![0.0f64, 0.0, 1.0], 4);
    assert_eq!(a.sqrt().unwrap(), Series::new(vec![0.0f64, 1.0, 0.0, 0.0, 0.0], 4));
}

#[test]
fn mixed_coefficient_types_promote() {
    let ints = Series::new(vec![1i64, 2], 1);
    let rats = Series::new(vec![q(1, 2)], 3);
    let sum: Series<RBig> = &ints + &rats;
    assert_eq!(sum.order(), 3);
    assert_eq!(sum.coeffs(), &[q(3, 2), q(2, 1), q(0, 1), q(0, 1)]);

    let z = Series::new(vec![Complex64::new(0.0, 1.0)], 0);
    let prod: Series<Complex64> = &sum * &z;
    assert_eq!(prod[1], Complex64::new(0.0, 2.0));
}

#[test]
fn errors_are_reported() {
    let x = Series::<f64>::variable(3);
    assert!(matches!(x.log(), Err(SeriesError::LogAtRoot { degree: 1 })));
    assert!(matches!(x.sqrt(), Err(SeriesError::OddLeadingDegree { degree: 1 })));
    assert!(matches!(
        x.derivative_at_origin(9),
        Err(SeriesError::InsufficientOrder { requested: 9, order: 3 })
    ));
    assert!(matches!(
        Series::new(vec![1i64, 1], 2).powi(-1),
        Err(SeriesError::NegativeIntegerPowerOnNonInvertibleType { exponent: -1 })
    ));
}

fn q(n: i64, d: u64) -> RBig {
    rational(n, d)
}
