use anyhow::Result;
use fraction::BigFraction;

use crate::{
    json,
    math::{mixed_fraction::MixedFraction, traits::Signed},
};

pub trait Infoable {
    fn info(&self, f: &mut impl std::io::Write) -> Result<()>;
}

impl Infoable for BigFraction {
    fn info(&self, f: &mut impl std::io::Write) -> Result<()> {
        match self {
            fraction::GenericFraction::Rational(_, ratio) => write!(
                f,
                "{} bits / {} bits",
                ratio.numer().bits(),
                ratio.denom().bits()
            )?,
            fraction::GenericFraction::Infinity(sign) => write!(f, "{} infinity", sign)?,
            fraction::GenericFraction::NaN => write!(f, "NaN")?,
        }
        Ok(write!(f, "")?)
    }
}

impl Infoable for MixedFraction {
    fn info(&self, f: &mut impl std::io::Write) -> Result<()> {
        let sign = if self.is_negative() {
            "negative"
        } else if self.is_positive() {
            "positive"
        } else {
            "zero"
        };
        writeln!(f, "Canonical form\t{}", self)?;
        writeln!(f, "Sign\t{}", sign)?;
        writeln!(f, "Whole number\t{}", self.whole_number())?;
        writeln!(f, "Numerator\t{}", self.numerator())?;
        writeln!(f, "Denominator\t{}", self.denominator())?;
        writeln!(f, "Improper\t{}", self.is_improper())?;
        writeln!(f, "Simplest form\t{}", self.to_simplest_form())?;
        writeln!(f, "Approximate value\t{}", self.to_f64())?;

        let exact = self.to_exact();
        write!(f, "Exact value\t{} (", exact)?;
        exact.info(&mut *f)?;
        writeln!(f, ")")?;

        Ok(write!(f, "Structured\t{}", json::write_structured_fraction(self)?)?)
    }
}
