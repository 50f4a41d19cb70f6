use std::{fmt::{self, Display}, fs::File, io::Write, path::PathBuf};
use anyhow::{Context, Result};

use crate::math::mixed_fraction::MixedFraction;

use super::exportable::{self, Exportable};

pub enum MixfracOutput {
    String(String),
    Fraction(MixedFraction),
}

impl MixfracOutput {
    pub fn get_type(&self) -> MixfracOutputType {
        match self {
            MixfracOutput::String(_) => MixfracOutputType::String,
            MixfracOutput::Fraction(_) => MixfracOutputType::Fraction,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MixfracOutputType {
    String,
    Fraction,
}

impl MixfracOutputType {
    /**
     * Returns all exporters that can handle this output type. The first one is the default.
     */
    pub fn get_exporters(&self) -> Vec<MixfracExporter> {
        match self {
            MixfracOutputType::String => vec![MixfracExporter::String],
            MixfracOutputType::Fraction => vec![MixfracExporter::Fraction, MixfracExporter::StructuredFraction],
        }
    }
}

impl Display for MixfracOutputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MixfracOutputType::String => Display::fmt(&"text", f),
            MixfracOutputType::Fraction => Display::fmt(&"fraction", f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixfracExporter {
    String,
    Fraction,
    StructuredFraction,
}

impl MixfracExporter {
    pub fn export_from_object(&self, output: MixfracOutput, f: &mut dyn std::io::Write) -> Result<()> {
        match (self, output) {
            (MixfracExporter::String, MixfracOutput::String(object)) => object.export(f),
            (MixfracExporter::String, _) => unreachable!(),
            (MixfracExporter::Fraction, MixfracOutput::Fraction(object)) => object.export(f),
            (MixfracExporter::Fraction, _) => unreachable!(),
            (MixfracExporter::StructuredFraction, MixfracOutput::Fraction(object)) => exportable::export_structured(&object, f),
            (MixfracExporter::StructuredFraction, _) => unreachable!(),
        }
    }

    pub fn get_article(&self) -> &str {
        match self {
            MixfracExporter::String => "",
            MixfracExporter::Fraction => "a",
            MixfracExporter::StructuredFraction => "a",
        }
    }

    pub fn get_file_extension(&self) -> Option<&str> {
        match self {
            MixfracExporter::String => None,
            MixfracExporter::Fraction => None,
            MixfracExporter::StructuredFraction => Some("json"),
        }
    }
}

impl Display for MixfracExporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MixfracExporter::String => Display::fmt(&"text", f),
            MixfracExporter::Fraction => Display::fmt(&"fraction", f),
            MixfracExporter::StructuredFraction => Display::fmt(&"structured fraction", f),
        }
    }
}

pub fn export_object(to_file: &PathBuf, object: MixfracOutput, exporter: MixfracExporter) -> Result<()> {
    let file = File::create(to_file).with_context(|| format!("Writing result to file {:?}.", to_file))?;
    let mut writer = std::io::BufWriter::new(&file);
    exporter.export_from_object(object, &mut writer).with_context(|| format!("Writing result to file {:?}.", to_file))?;
    return writer.flush().with_context(|| format!("writing result to file {:?}", to_file));
}

pub fn export_to_string(object: MixfracOutput, exporter: MixfracExporter) -> Result<String> {
    let mut f = vec![];
    exporter.export_from_object(object, &mut f)?;
    Ok(String::from_utf8(f)?)
}
