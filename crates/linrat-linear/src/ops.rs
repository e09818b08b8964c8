//! Operator overloads delegating to the named methods.
//!
//! `+` and `-` are only implemented on references, so `a.add(&b)` keeps
//! resolving to the inherent method when the operator traits are in scope.

use std::hash::Hash;
use std::ops::{Add, Mul, Neg, Sub};

use linrat_integers::Rational;

use crate::LinearExpression;

impl<V: Eq + Hash + Clone> Add for &LinearExpression<V> {
    type Output = LinearExpression<V>;

    fn add(self, rhs: Self) -> Self::Output {
        LinearExpression::add(self, rhs)
    }
}

impl<V: Eq + Hash + Clone> Sub for &LinearExpression<V> {
    type Output = LinearExpression<V>;

    fn sub(self, rhs: Self) -> Self::Output {
        LinearExpression::sub(self, rhs)
    }
}

impl<V: Eq + Hash + Clone> Neg for &LinearExpression<V> {
    type Output = LinearExpression<V>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<V: Eq + Hash + Clone> Neg for LinearExpression<V> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<V: Eq + Hash + Clone> Mul<&Rational> for &LinearExpression<V> {
    type Output = LinearExpression<V>;

    fn mul(self, rhs: &Rational) -> Self::Output {
        self.mult_by_const(rhs)
    }
}

impl<V: Eq + Hash + Clone> Mul<Rational> for LinearExpression<V> {
    type Output = Self;

    fn mul(self, rhs: Rational) -> Self::Output {
        self.mult_by_const(&rhs)
    }
}
