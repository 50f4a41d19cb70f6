use anyhow::Result;

use crate::{json, math::mixed_fraction::MixedFraction};

pub trait Exportable {
    fn export(&self, f: &mut dyn std::io::Write) -> Result<()>;
}

impl Exportable for String {
    fn export(&self, f: &mut dyn std::io::Write) -> Result<()> {
        Ok(writeln!(f, "{}", self)?)
    }
}

impl Exportable for MixedFraction {
    fn export(&self, f: &mut dyn std::io::Write) -> Result<()> {
        Ok(writeln!(f, "{}", self)?)
    }
}

/**
 * Write a fraction as a structured json record instead of its canonical text.
 */
pub fn export_structured(fraction: &MixedFraction, f: &mut dyn std::io::Write) -> Result<()> {
    Ok(writeln!(f, "{}", json::write_structured_fraction(fraction)?)?)
}
