//! Property-based tests for the series algebra.
//!
//! Ring laws are checked exactly over rationals; identities involving
//! transcendental functions are checked over `f64` with a relative tolerance.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use taylorkit_rings::{rational, RBig};

    use crate::Series;

    // Strategy for generating small rationals
    fn small_rational() -> impl Strategy<Value = RBig> {
        (-20i64..20i64, 1u64..10u64).prop_map(|(n, d)| rational(n, d))
    }

    // Strategy for generating non-zero rationals
    fn non_zero_rational() -> impl Strategy<Value = RBig> {
        (prop_oneof![(-20i64..=-1i64), (1i64..=20i64)], 1u64..10u64)
            .prop_map(|(n, d)| rational(n, d))
    }

    fn rational_series() -> impl Strategy<Value = Series<RBig>> {
        prop::collection::vec(small_rational(), 1..7).prop_map(Series::from_coeffs)
    }

    fn rational_series_of_order(order: usize) -> impl Strategy<Value = Series<RBig>> {
        prop::collection::vec(small_rational(), order + 1).prop_map(Series::from_coeffs)
    }

    fn invertible_rational_series(order: usize) -> impl Strategy<Value = Series<RBig>> {
        (non_zero_rational(), prop::collection::vec(small_rational(), order))
            .prop_map(move |(c0, rest)| {
                let mut coeffs = vec![c0];
                coeffs.extend(rest);
                Series::new(coeffs, order)
            })
    }

    fn int_series() -> impl Strategy<Value = Series<i64>> {
        prop::collection::vec(-50i64..50i64, 1..8).prop_map(Series::from_coeffs)
    }

    // Float series with constant term in [0.5, 4) and bounded higher terms
    fn positive_float_series() -> impl Strategy<Value = Series<f64>> {
        (0.5f64..4.0, prop::collection::vec(-1.0f64..1.0, 0..7)).prop_map(|(c0, rest)| {
            let mut coeffs = vec![c0];
            coeffs.extend(rest);
            Series::from_coeffs(coeffs)
        })
    }

    fn float_series() -> impl Strategy<Value = Series<f64>> {
        prop::collection::vec(-2.0f64..2.0, 1..8).prop_map(Series::from_coeffs)
    }

    fn close(a: &Series<f64>, b: &Series<f64>) -> bool {
        a.order() == b.order()
            && a.coeffs()
                .iter()
                .zip(b.coeffs())
                .all(|(x, y)| (x - y).abs() <= 1e-9 * (1.0 + y.abs()))
    }

    proptest! {
        // Ring laws

        #[test]
        fn add_then_sub_roundtrips(a in rational_series(), b in rational_series()) {
            prop_assert_eq!(&(&a + &b) - &b, a);
        }

        #[test]
        fn mul_commutative(a in rational_series(), b in rational_series()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn mul_identity_and_zero(a in rational_series()) {
            prop_assert_eq!(&a * &a.one_like(), a.clone());
            prop_assert_eq!(&a * &a.zero_like(), a.zero_like());
        }

        #[test]
        fn mul_distributive(
            (a, b, c) in (0usize..6).prop_flat_map(|n| {
                (rational_series_of_order(n), rational_series_of_order(n), rational_series_of_order(n))
            })
        ) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn square_matches_product(a in int_series()) {
            prop_assert_eq!(a.square(), &a * &a);
        }

        #[test]
        fn powi_matches_repeated_product(a in int_series(), n in 0i64..6i64) {
            let expected = (0..n).fold(a.one_like(), |acc, _| &acc * &a);
            prop_assert_eq!(a.powi(n).unwrap(), expected);
        }

        // Division

        #[test]
        fn div_then_mul_roundtrips(
            (a, b) in (1usize..6).prop_flat_map(|n| {
                (invertible_rational_series(n), invertible_rational_series(n))
            })
        ) {
            let quotient = a.div(&b).unwrap();
            prop_assert_eq!(&quotient * &b, a);
        }

        #[test]
        fn negative_power_is_reciprocal(a in invertible_rational_series(4), n in 1i64..4i64) {
            let inv = a.powi(-n).unwrap();
            prop_assert_eq!(&inv * &a.powi(n).unwrap(), a.one_like());
        }

        // Calculus

        #[test]
        fn derivative_undoes_integral(a in rational_series()) {
            prop_assert_eq!(a.integrate().derivative(), a);
        }

        #[test]
        fn integral_of_derivative_drops_constant(a in rational_series()) {
            let back = a.derivative().integrate_with(a[0].clone());
            prop_assert_eq!(back.truncate(a.order()), a);
        }

        // Elementary functions

        #[test]
        fn sqrt_squared_roundtrips(a in positive_float_series(), shift in 0usize..2) {
            // Multiply by t^(2 shift) to exercise the factored path
            let mut coeffs = vec![0.0; 2 * shift];
            coeffs.extend_from_slice(a.coeffs());
            let a = Series::from_coeffs(coeffs);
            let root = a.sqrt().unwrap();
            prop_assert!(close(&root.square(), &a), "{:?} vs {:?}", root.square(), a);
        }

        #[test]
        fn exp_log_roundtrips(a in positive_float_series()) {
            prop_assert!(close(&a.log().unwrap().exp(), &a));
        }

        #[test]
        fn pythagorean_identity(a in float_series()) {
            let (s, c) = a.sin_cos();
            prop_assert!(close(&(&s.square() + &c.square()), &a.one_like()));
        }

        #[test]
        fn cube_root_cubed_roundtrips(a in positive_float_series()) {
            let root = a.powf(1.0 / 3.0).unwrap();
            prop_assert!(close(&root.powi(3).unwrap(), &a));
        }
    }
}
