//! Human-readable rendering of linear expressions.
//!
//! `2x + 3y`, `x - y`, `-2x + 2/3y`: unit coefficients are elided, other
//! coefficients are written directly in front of the variable, and terms
//! after the first are joined with ` + ` or ` - `.

use std::fmt::{self, Display, Write};

use linrat_integers::Rational;
use num_traits::One;

use crate::LinearExpression;

/// Writes one monomial, `first` selecting the leading-term form.
fn fmt_monomial<W: Write>(out: &mut W, var: &dyn Display, coeff: &Rational, first: bool) -> fmt::Result {
    let negative = coeff.is_negative();
    if !first {
        out.write_str(if negative { " - " } else { " + " })?;
    }
    if coeff.is_one() {
        write!(out, "{var}")
    } else if *coeff == Rational::neg_one() {
        if first {
            out.write_str("- ")?;
        }
        write!(out, "{var}")
    } else if negative && !first {
        write!(out, "{}{var}", coeff.abs())
    } else {
        write!(out, "{coeff}{var}")
    }
}

/// Appends the monomial `coeff·var` to `out`.
///
/// An empty buffer receives the leading-term form; otherwise the term is
/// joined to what is already there.
pub fn write_monomial(var: &dyn Display, coeff: &Rational, out: &mut String) {
    let first = out.is_empty();
    // writing into a String cannot fail
    let _ = fmt_monomial(out, var, coeff, first);
}

impl<V: Display> Display for LinearExpression<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (var, coeff)) in self.iter().enumerate() {
            fmt_monomial(f, var, coeff, i == 0)?;
        }
        Ok(())
    }
}
