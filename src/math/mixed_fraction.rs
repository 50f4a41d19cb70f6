use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::traits::{Signed, Zero};

/// The largest integer any part of a fraction may hold: 2^53 - 1.
/// Every value up to this bound is also exactly representable as an f64.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/**
 * A fraction as a person writes it down: a sign, a whole number and a fractional part.
 * The value is -(whole_number + numerator / denominator) when is_negative, and the positive version otherwise.
 *
 * The fractional part is stored as given: 4/8 stays 4/8, and 7/2 is not carried into the whole number.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MixedFraction {
    is_negative: bool,
    whole_number: u64,
    numerator: u64,
    denominator: u64,
}

/**
 * A loose record of a fraction, in which every field may be missing.
 */
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredFraction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_negative: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whole_number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numerator: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denominator: Option<u64>,
}

impl MixedFraction {
    /**
     * Construct a fraction from trusted parts. Use MixedFraction::from_str for user input.
     */
    pub(crate) fn new(is_negative: bool, whole_number: u64, numerator: u64, denominator: u64) -> Self {
        debug_assert!(denominator > 0);
        Self {
            is_negative,
            whole_number,
            numerator,
            denominator,
        }
    }

    /**
     * Construct a fraction from a structured record. Missing fields default to a positive 0 0/1.
     *
     * The record is trusted and is not validated further, with one exception: a denominator of zero cannot be held, and is replaced by 1.
     */
    pub fn from_structured(record: &StructuredFraction) -> Self {
        let denominator = match record.denominator {
            Some(0) => {
                log::warn!("structured fraction has denominator 0; using 1 instead");
                1
            }
            Some(d) => d,
            None => 1,
        };

        Self {
            is_negative: record.is_negative.unwrap_or(false),
            whole_number: record.whole_number.unwrap_or(0),
            numerator: record.numerator.unwrap_or(0),
            denominator,
        }
    }

    pub fn to_structured(&self) -> StructuredFraction {
        StructuredFraction {
            is_negative: Some(self.is_negative),
            whole_number: Some(self.whole_number),
            numerator: Some(self.numerator),
            denominator: Some(self.denominator),
        }
    }

    /// Whether the sign flag is set. A zero value may still carry it; see Signed::is_negative for the value's sign.
    pub fn is_negative_flag(&self) -> bool {
        self.is_negative
    }

    pub fn whole_number(&self) -> u64 {
        self.whole_number
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /**
     * The whole number with the sign applied. Safe, as the whole number of a parsed fraction never exceeds MAX_SAFE_INTEGER.
     */
    pub fn integer_part(&self) -> i64 {
        let whole = self.whole_number.min(i64::MAX as u64) as i64;
        if self.is_negative { -whole } else { whole }
    }

    pub fn has_nonzero_integer_part(&self) -> bool {
        self.whole_number != 0
    }

    pub fn is_improper(&self) -> bool {
        self.numerator >= self.denominator
    }

    /**
     * Approximate value. Exact for every whole number up to MAX_SAFE_INTEGER.
     */
    pub fn to_f64(&self) -> f64 {
        let value = self.whole_number as f64 + self.numerator as f64 / self.denominator as f64;
        if self.is_negative && value != 0.0 { -value } else { value }
    }
}

impl Display for MixedFraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.numerator == 0 {
            if self.is_negative && self.whole_number != 0 {
                write!(f, "-")?;
            }
            write!(f, "{}", self.whole_number)
        } else {
            if self.is_negative {
                write!(f, "-")?;
            }
            if self.whole_number == 0 {
                write!(f, "{}/{}", self.numerator, self.denominator)
            } else {
                write!(
                    f,
                    "{} {}/{}",
                    self.whole_number, self.numerator, self.denominator
                )
            }
        }
    }
}

impl Default for MixedFraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<&StructuredFraction> for MixedFraction {
    fn from(value: &StructuredFraction) -> Self {
        Self::from_structured(value)
    }
}

impl From<u64> for MixedFraction {
    fn from(value: u64) -> Self {
        Self::new(false, value, 0, 1)
    }
}

impl Zero for MixedFraction {
    fn zero() -> Self {
        Self::new(false, 0, 0, 1)
    }

    fn is_zero(&self) -> bool {
        self.whole_number == 0 && self.numerator == 0
    }
}

impl Signed for MixedFraction {
    fn abs(&self) -> Self {
        Self {
            is_negative: false,
            ..*self
        }
    }

    fn is_positive(&self) -> bool {
        !self.is_negative && !self.is_zero()
    }

    fn is_negative(&self) -> bool {
        self.is_negative && !self.is_zero()
    }
}
