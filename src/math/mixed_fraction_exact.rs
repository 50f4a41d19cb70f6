use anyhow::{Result, anyhow};
use fraction::{BigFraction, BigUint, Zero};
use num_integer::Integer;

use super::mixed_fraction::{MAX_SAFE_INTEGER, MixedFraction};

impl MixedFraction {
    /**
     * The exact rational value of this fraction, in lowest terms.
     */
    pub fn to_exact(&self) -> BigFraction {
        let denominator = BigUint::from(self.denominator());
        let numerator = BigUint::from(self.whole_number()) * &denominator + BigUint::from(self.numerator());
        if self.is_negative_flag() && !numerator.is_zero() {
            BigFraction::new_neg(numerator, denominator)
        } else {
            BigFraction::new(numerator, denominator)
        }
    }

    /**
     * Reduce the fractional part to lowest terms. The whole number is left alone, so 1 6/4 becomes 1 3/2.
     */
    pub fn to_simplest_form(&self) -> Self {
        if self.numerator() == 0 {
            return Self::new(self.is_negative_flag(), self.whole_number(), 0, 1);
        }
        let gcd = self.numerator().gcd(&self.denominator());
        Self::new(
            self.is_negative_flag(),
            self.whole_number(),
            self.numerator() / gcd,
            self.denominator() / gcd,
        )
    }

    /**
     * Carry an improper fractional part into the whole number and reduce: 7/2 becomes 3 1/2.
     */
    pub fn to_mixed_form(&self) -> Result<Self> {
        let simplest = self.to_simplest_form();
        let (carry, numerator) = simplest.numerator().div_rem(&simplest.denominator());
        let whole_number = simplest
            .whole_number()
            .checked_add(carry)
            .filter(|whole| *whole <= MAX_SAFE_INTEGER)
            .ok_or_else(|| anyhow!("the whole number of {} exceeds {}", self, MAX_SAFE_INTEGER))?;
        let denominator = if numerator == 0 { 1 } else { simplest.denominator() };
        Ok(Self::new(
            simplest.is_negative_flag(),
            whole_number,
            numerator,
            denominator,
        ))
    }
}
