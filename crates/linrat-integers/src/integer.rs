//! Arbitrary precision integers.
//!
//! `Integer` only exists to carry the numerator and denominator of a
//! [`Rational`](crate::Rational) across the API boundary; all arithmetic
//! happens on rationals.

use dashu::base::Signed as DashuSigned;
use dashu::integer::IBig;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use crate::RationalError;

/// An arbitrary precision integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    pub(crate) fn into_inner(self) -> IBig {
        self.0
    }
}

impl Integer {
    /// Returns the integer zero.
    #[must_use]
    pub fn zero() -> Self {
        Self(IBig::ZERO)
    }

    /// Returns true if this integer is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Integer {
    type Err = RationalError;

    /// Parses an optional single sign followed by decimal digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || RationalError::Parse {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(parse_err());
        }
        let magnitude = IBig::from_str_radix(digits, 10).map_err(|_| parse_err())?;
        Ok(Self(if negative { -magnitude } else { magnitude }))
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}
