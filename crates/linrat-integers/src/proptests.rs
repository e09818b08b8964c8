//! Property-based tests for exact rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn gcd(a: i64, b: i64) -> i64 {
        let (mut a, mut b) = (a.abs(), b.abs());
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        #[test]
        fn rational_add_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                (a.clone() + b.clone()) + c.clone(),
                a + (b + c)
            );
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                &a * &(&b + &c),
                &a * &b + &a * &c
            );
        }

        #[test]
        fn rational_multiplicative_inverse(a in non_zero_rational()) {
            prop_assert!((&a * &a.recip()).is_one());
        }

        #[test]
        fn checked_div_agrees_with_div(a in rational(), b in non_zero_rational()) {
            prop_assert_eq!(a.checked_div(&b), Some(a.clone() / b.clone()));
            prop_assert_eq!(a.checked_div(&Rational::zero()), None);
        }

        #[test]
        fn lowest_terms_positive_denominator(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d);
            let g = gcd(n, d);
            let sign = d.signum();
            prop_assert!(!r.denominator().is_negative());
            prop_assert_eq!(r.numerator(), Integer::new(sign * n / g));
            prop_assert_eq!(r.denominator(), Integer::new(d.abs() / g));
        }

        #[test]
        fn signum_matches_components(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d);
            let expected = i8::try_from((n * d).signum()).unwrap();
            prop_assert_eq!(r.signum(), expected);
        }

        #[test]
        fn integer_iff_denominator_divides(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d);
            prop_assert_eq!(r.is_integer(), n % d == 0);
        }

        #[test]
        fn display_parses_back(a in rational()) {
            prop_assert_eq!(a.to_string().parse::<Rational>(), Ok(a));
        }
    }
}
