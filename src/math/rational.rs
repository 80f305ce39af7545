use crate::error::MathError;
use crate::math::format::{format_fixed, format_rational};
use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::fmt;

/// An exact ratio of two arbitrary‑precision signed integers.
///
/// The sign lives in whichever of the two parts carries it; nothing here
/// assumes a positive denominator. Equality is structural (`1/2 != 2/4`),
/// use [`Rational::cmp_value`] to compare magnitudes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    pub numerator: BigInt,
    pub denominator: BigInt,
}

impl Rational {
    pub fn new(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> Result<Self, MathError> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self {
            numerator: numerator.into(),
            denominator,
        })
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        !self.numerator.is_zero() && self.numerator.is_negative() != self.denominator.is_negative()
    }

    /// `(|numerator|, |denominator|)`.
    pub fn magnitude(&self) -> (&BigUint, &BigUint) {
        (self.numerator.magnitude(), self.denominator.magnitude())
    }

    /// Swaps numerator and denominator, failing on a zero numerator.
    pub fn recip(&self) -> Result<Self, MathError> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Multiplies the numerator by `factor`.
    pub fn scale_up(mut self, factor: &BigUint) -> Self {
        self.numerator *= BigInt::from(factor.clone());
        self
    }

    /// Multiplies the denominator by a non‑zero `factor`.
    pub fn scale_down(mut self, factor: &BigUint) -> Result<Self, MathError> {
        if factor.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        self.denominator *= BigInt::from(factor.clone());
        Ok(self)
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self {
            numerator: &self.numerator * &other.numerator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    /// Same value with the sign moved onto the numerator.
    fn with_positive_denominator(&self) -> (BigInt, BigInt) {
        if self.denominator.is_negative() {
            (-&self.numerator, -&self.denominator)
        } else {
            (self.numerator.clone(), self.denominator.clone())
        }
    }

    /// Compares the values of two ratios by cross multiplication.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        let (lhs_num, lhs_den) = self.with_positive_denominator();
        let (rhs_num, rhs_den) = other.with_positive_denominator();
        (lhs_num * rhs_den).cmp(&(rhs_num * lhs_den))
    }

    /// Rounded to `digits` decimals, see [`format_fixed`].
    pub fn to_fixed(&self, digits: u32) -> String {
        format_fixed(&self.numerator, &self.denominator, digits)
    }

    /// Adaptive rendering with at most `max_significant_digits`, see [`format_rational`].
    pub fn to_significant(&self, max_significant_digits: usize) -> String {
        format_rational(&self.numerator, &self.denominator, max_significant_digits)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_significant(18))
    }
}
