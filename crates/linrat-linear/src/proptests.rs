//! Property-based tests for linear expression algebra.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{LinearExpression, Rational};

    type Expr = LinearExpression<u8>;

    fn small_coeff() -> impl Strategy<Value = Rational> {
        (-20i64..20i64, 1i64..6i64).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn non_zero_coeff() -> impl Strategy<Value = Rational> {
        small_coeff().prop_filter("coefficient must be non-zero", |c| !c.is_zero())
    }

    // A handful of variables so sums actually collide and cancel
    fn small_expr() -> impl Strategy<Value = Expr> {
        proptest::collection::vec((0u8..5u8, small_coeff()), 0..8).prop_map(Expr::from_terms)
    }

    fn nonempty_expr() -> impl Strategy<Value = Expr> {
        small_expr().prop_filter("expression must be non-empty", |e| !e.is_empty())
    }

    fn no_zero_terms(e: &Expr) -> bool {
        e.iter().all(|(_, c)| !c.is_zero())
    }

    proptest! {
        #[test]
        fn canonical_after_every_operation(a in small_expr(), b in small_expr(), k in small_coeff()) {
            prop_assert!(no_zero_terms(&a));
            prop_assert!(no_zero_terms(&a.add(&b)));
            prop_assert!(no_zero_terms(&a.sub(&b)));
            prop_assert!(no_zero_terms(&a.mult_by_const(&k)));
            prop_assert!(no_zero_terms(&a.negate()));
        }

        #[test]
        fn present_keys_have_non_zero_coeff(a in small_expr(), b in small_expr()) {
            let sum = a.add(&b);
            for v in sum.variables() {
                prop_assert!(!sum.get_coeff(v).is_zero());
            }
        }

        #[test]
        fn identity_laws(e in small_expr()) {
            prop_assert_eq!(e.add(&Expr::empty()), e.clone());
            prop_assert!(e.sub(&e).is_empty());
            prop_assert_eq!(e.mult_by_const(&Rational::one()), e.clone());
            prop_assert!(e.mult_by_const(&Rational::zero()).is_empty());
        }

        #[test]
        fn add_commutative(a in small_expr(), b in small_expr()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn add_associative(a in small_expr(), b in small_expr(), c in small_expr()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn negation(e in small_expr()) {
            prop_assert_eq!(e.negate().negate(), e.clone());
            prop_assert!(e.add(&e.negate()).is_empty());
        }

        #[test]
        fn coefficients_add_pointwise(a in small_expr(), b in small_expr(), v in 0u8..5u8) {
            prop_assert_eq!(a.add(&b).get_coeff(&v), a.get_coeff(&v) + b.get_coeff(&v));
        }

        #[test]
        fn divide_recovers_scalar(e in nonempty_expr(), k in non_zero_coeff()) {
            prop_assert_eq!(e.mult_by_const(&k).divide(&e), Some(k));
            prop_assert_eq!(e.divide(&e), Some(Rational::one()));
        }

        #[test]
        fn divide_witness_is_exact(a in small_expr(), b in small_expr()) {
            if let Some(k) = a.divide(&b) {
                prop_assert_eq!(b.mult_by_const(&k), a);
            }
        }

        #[test]
        fn equal_values_hash_equal(a in small_expr(), b in small_expr()) {
            use std::collections::hash_map::DefaultHasher;
            use std::hash::{Hash, Hasher};

            let hash = |e: &Expr| {
                let mut h = DefaultHasher::new();
                e.hash(&mut h);
                h.finish()
            };
            let ab = a.add(&b);
            let ba = b.add(&a);
            prop_assert_eq!(hash(&ab), hash(&ba));
        }
    }
}
