//! Property-based tests for polynomial arithmetic.
//!
//! Degrees and coefficients are small integers so that every sum and
//! product is exact in `f64`.

use proptest::prelude::*;

use crate::{Polynomial, Term};

fn non_zero_coeff() -> impl Strategy<Value = i32> {
    prop_oneof![(-20i32..=-1i32), (1i32..=20i32)]
}

fn poly() -> impl Strategy<Value = Polynomial> {
    prop::collection::btree_map(-4i32..8, non_zero_coeff(), 0..6).prop_map(|m|
        m.into_iter()
            .map(|(d, c)| (d as f64, c as f64))
            .collect::<Polynomial>()
    )
}

fn is_valid(p: &Polynomial) -> bool {
    let terms = p.terms();
    terms.iter().all(|t| !t.is_zero()) &&
    terms.iter().enumerate().all(|(i, t)|
        terms[i + 1..].iter().all(|s| s.degree != t.degree)
    )
}

proptest! {
    #[test]
    fn degree_is_max_or_zero(p in poly()) {
        let max = p.iter().map(|t| t.degree).fold(f64::NEG_INFINITY, f64::max);
        let expected = if p.is_empty() || max < 0.0 { 0.0 } else { max };
        prop_assert_eq!(p.degree(), expected);
    }

    #[test]
    fn add_commutative(a in poly(), b in poly()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn add_associative(a in poly(), b in poly(), c in poly()) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn add_sub_round_trip(a in poly(), b in poly()) {
        prop_assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn sub_is_add_neg(a in poly(), b in poly()) {
        prop_assert_eq!(&a - &b, &a + &(-&b));
    }

    #[test]
    fn mul_commutative(a in poly(), b in poly()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn mul_distributive(a in poly(), b in poly(), c in poly()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn results_stay_valid(a in poly(), b in poly(), d in -3i32..3, c in -3i32..3) {
        let t = (d as f64, c as f64);
        prop_assert!(is_valid(&(&a + &b)));
        prop_assert!(is_valid(&(&a - &b)));
        prop_assert!(is_valid(&(&a * &b)));
        prop_assert!(is_valid(&(&a + t)));
        prop_assert!(is_valid(&(&a - t)));
        prop_assert!(is_valid(&(&a * t)));
    }

    #[test]
    fn mul_zero_term_clears(a in poly(), d in -3i32..3) {
        prop_assert!((a * (d as f64, 0.0)).is_empty());
    }

    #[test]
    fn add_member_rejects_existing(a in poly(), c in non_zero_coeff()) {
        let mut p = a.clone();
        for t in a.iter() {
            prop_assert!(p.add_member(Term::new(t.degree, c as f64)).is_err());
            prop_assert!(p.add_member((t.degree + 100.0, 0.0)).is_err());
        }
        prop_assert_eq!(p.terms(), a.terms());
    }
}
