//! The immutable sparse linear expression type.
//!
//! Terms live in an insertion-ordered map behind an `Arc`. Ordering only
//! makes iteration and printing reproducible; equality and hashing
//! ignore it.

use std::hash::{BuildHasher, Hash, Hasher};
use std::sync::Arc;

use indexmap::map::Entry;
use indexmap::IndexMap;
use linrat_integers::Rational;
use num_traits::{One, Zero};
use rustc_hash::FxBuildHasher;
use tracing::trace;

use crate::LinearError;

type Terms<V> = IndexMap<V, Rational, FxBuildHasher>;

/// A sparse linear expression `Σ aᵢ·xᵢ` with exact coefficients.
///
/// # Invariants
///
/// - No stored coefficient is zero.
/// - The terms never change after construction.
/// - The cached hash is a function of the terms alone.
pub struct LinearExpression<V> {
    terms: Arc<Terms<V>>,
    hash: u64,
}

impl<V> LinearExpression<V> {
    /// Number of variables with non-zero coefficients.
    #[must_use]
    pub fn size(&self) -> usize {
        self.terms.len()
    }

    /// Returns true for the zero expression.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if every coefficient is an integer.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        self.terms.values().all(Rational::is_integer)
    }

    /// Iterates over `(variable, coefficient)` terms.
    pub fn iter(&self) -> indexmap::map::Iter<'_, V, Rational> {
        self.terms.iter()
    }

    /// Iterates over the variables that occur in this expression.
    pub fn variables(&self) -> indexmap::map::Keys<'_, V, Rational> {
        self.terms.keys()
    }
}

impl<V: Eq + Hash> LinearExpression<V> {
    /// Wraps a map that already satisfies the no-zero invariant.
    fn from_map(terms: Terms<V>) -> Self {
        debug_assert!(terms.values().all(|c| !c.is_zero()));
        let hash = order_independent_hash(&terms);
        Self {
            terms: Arc::new(terms),
            hash,
        }
    }

    /// The zero expression.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_map(Terms::default())
    }

    /// The single-term expression `coeff·var`.
    ///
    /// A zero coefficient yields the empty expression.
    #[must_use]
    pub fn pair(var: V, coeff: Rational) -> Self {
        if coeff.is_zero() {
            return Self::empty();
        }
        let mut terms = Terms::with_capacity_and_hasher(1, FxBuildHasher);
        terms.insert(var, coeff);
        Self::from_map(terms)
    }

    /// Like [`pair`](Self::pair), for callers whose variable may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`LinearError::InvalidArgument`] if `var` is `None`.
    pub fn try_pair(var: Option<V>, coeff: Rational) -> Result<Self, LinearError> {
        let var = var.ok_or(LinearError::InvalidArgument("variable must be present"))?;
        Ok(Self::pair(var, coeff))
    }

    /// The expression `1·var`.
    #[must_use]
    pub fn of_variable(var: V) -> Self {
        Self::pair(var, Rational::one())
    }

    /// Sums a sequence of `(variable, coefficient)` terms.
    ///
    /// Repeated variables are combined; variables whose total is zero are
    /// dropped. The first occurrence of each variable fixes its position.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (V, Rational)>,
    {
        let mut acc = Terms::default();
        for (var, coeff) in terms {
            match acc.entry(var) {
                Entry::Occupied(mut e) => {
                    let sum = &*e.get() + &coeff;
                    *e.get_mut() = sum;
                }
                Entry::Vacant(e) => {
                    e.insert(coeff);
                }
            }
        }
        acc.retain(|_, c| !c.is_zero());
        Self::from_map(acc)
    }

    /// Returns the coefficient of `var`, or zero if it does not occur.
    #[must_use]
    pub fn get_coeff(&self, var: &V) -> Rational {
        self.terms.get(var).cloned().unwrap_or_else(Rational::zero)
    }

    /// Returns true if `var` has a (necessarily non-zero) coefficient.
    #[must_use]
    pub fn contains(&self, var: &V) -> bool {
        self.terms.contains_key(var)
    }

    /// Finds `a` such that `other.mult_by_const(a) == self`.
    ///
    /// Returns `None` when no such constant exists. Two empty expressions
    /// also yield `None`: every constant fits, so none is canonical.
    #[must_use]
    pub fn divide(&self, other: &Self) -> Option<Rational> {
        if self.size() != other.size() {
            trace!(lhs = self.size(), rhs = other.size(), "divide: term counts differ");
            return None;
        }
        let mut multiplier: Option<Rational> = None;
        for (var, coeff) in self.terms.iter() {
            let Some(ratio) = coeff.checked_div(&other.get_coeff(var)) else {
                trace!("divide: variable missing from divisor");
                return None;
            };
            match &multiplier {
                None => multiplier = Some(ratio),
                Some(m) if *m != ratio => {
                    trace!(%m, %ratio, "divide: ratios disagree");
                    return None;
                }
                Some(_) => {}
            }
        }
        multiplier
    }
}

impl<V: Eq + Hash + Clone> LinearExpression<V> {
    /// Multiplies every coefficient by `constant`.
    #[must_use]
    pub fn mult_by_const(&self, constant: &Rational) -> Self {
        if constant.is_zero() {
            return Self::empty();
        }
        if constant.is_one() {
            return self.clone();
        }
        let mut terms = Terms::with_capacity_and_hasher(self.terms.len(), FxBuildHasher);
        for (var, coeff) in self.terms.iter() {
            terms.insert(var.clone(), coeff * constant);
        }
        Self::from_map(terms)
    }

    /// Returns `-self`.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.mult_by_const(&Rational::neg_one())
    }

    /// Returns `self + other`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        let mut terms = (*self.terms).clone();
        for (var, coeff) in other.terms.iter() {
            match terms.entry(var.clone()) {
                Entry::Occupied(mut e) => {
                    let sum = &*e.get() + coeff;
                    if sum.is_zero() {
                        e.shift_remove();
                    } else {
                        *e.get_mut() = sum;
                    }
                }
                Entry::Vacant(e) => {
                    e.insert(coeff.clone());
                }
            }
        }
        Self::from_map(terms)
    }

    /// Returns `self - other`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }
}

/// Wrapping sum of per-term hashes, so equal maps in different orders agree.
fn order_independent_hash<V: Hash>(terms: &Terms<V>) -> u64 {
    let build = FxBuildHasher;
    terms.iter().fold(terms.len() as u64, |acc, (var, coeff)| {
        let mut h = build.build_hasher();
        var.hash(&mut h);
        coeff.hash(&mut h);
        acc.wrapping_add(h.finish())
    })
}

impl<V> Clone for LinearExpression<V> {
    fn clone(&self) -> Self {
        Self {
            terms: Arc::clone(&self.terms),
            hash: self.hash,
        }
    }
}

impl<V: Eq + Hash> Default for LinearExpression<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: Eq + Hash> PartialEq for LinearExpression<V> {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.terms, &other.terms) {
            return true;
        }
        // IndexMap equality ignores order
        self.hash == other.hash && *self.terms == *other.terms
    }
}

impl<V: Eq + Hash> Eq for LinearExpression<V> {}

impl<V> Hash for LinearExpression<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for LinearExpression<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.terms.iter()).finish()
    }
}

impl<'a, V> IntoIterator for &'a LinearExpression<V> {
    type Item = (&'a V, &'a Rational);
    type IntoIter = indexmap::map::Iter<'a, V, Rational>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl<V: Eq + Hash> FromIterator<(V, Rational)> for LinearExpression<V> {
    fn from_iter<I: IntoIterator<Item = (V, Rational)>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}
