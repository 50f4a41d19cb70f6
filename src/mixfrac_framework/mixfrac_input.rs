use std::fmt::Display;

use anyhow::{Result, anyhow};
use clap::{ArgMatches, builder::ValueParser};
use strum_macros::EnumIter;

use crate::{
    json,
    math::mixed_fraction::{MixedFraction, StructuredFraction},
};

pub enum MixfracInput {
    Fraction(MixedFraction),
    StructuredFraction(StructuredFraction),
    String(String),
}

impl MixfracInput {
    pub fn get_type(&self) -> MixfracInputType {
        match self {
            MixfracInput::Fraction(_) => MixfracInputType::Fraction,
            MixfracInput::StructuredFraction(_) => MixfracInputType::StructuredFraction,
            MixfracInput::String(_) => MixfracInputType::String,
        }
    }

    pub fn to_fraction(self) -> Result<MixedFraction> {
        match self {
            MixfracInput::Fraction(fraction) => Ok(fraction),
            MixfracInput::StructuredFraction(record) => Ok(MixedFraction::from_structured(&record)),
            other => Err(anyhow!("cannot use {} as a fraction", other.get_type())),
        }
    }

    pub fn to_text(self) -> Result<String> {
        match self {
            MixfracInput::String(s) => Ok(s),
            other => Err(anyhow!("cannot use {} as text", other.get_type())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum MixfracInputType {
    Fraction,
    StructuredFraction,
    String,
}

impl MixfracInputType {
    /**
     * Get the parser for an input type. Values that do not parse are reported by clap before any command executes.
     */
    pub fn get_parser(&self) -> ValueParser {
        match self {
            MixfracInputType::Fraction => ValueParser::new(|s: &str| s.parse::<MixedFraction>()),
            MixfracInputType::StructuredFraction => {
                ValueParser::new(|s: &str| json::parse_structured_fraction(s))
            }
            MixfracInputType::String => ValueParser::string(),
        }
    }

    pub fn get_article(&self) -> &str {
        match self {
            MixfracInputType::Fraction => "a",
            MixfracInputType::StructuredFraction => "a",
            MixfracInputType::String => "",
        }
    }

    pub fn read(&self, cli_matches: &ArgMatches, cli_id: &str) -> Result<MixfracInput> {
        match self {
            MixfracInputType::Fraction => match cli_matches.get_one::<MixedFraction>(cli_id) {
                Some(value) => Ok(MixfracInput::Fraction(*value)),
                None => Err(anyhow!("argument `{}` not given", cli_id)),
            },
            MixfracInputType::StructuredFraction => {
                match cli_matches.get_one::<StructuredFraction>(cli_id) {
                    Some(value) => Ok(MixfracInput::StructuredFraction(value.clone())),
                    None => Err(anyhow!("argument `{}` not given", cli_id)),
                }
            }
            MixfracInputType::String => match cli_matches.get_one::<String>(cli_id) {
                Some(value) => Ok(MixfracInput::String(value.clone())),
                None => Err(anyhow!("argument `{}` not given", cli_id)),
            },
        }
    }
}

impl Display for MixfracInputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MixfracInputType::Fraction => Display::fmt(&"fraction", f),
            MixfracInputType::StructuredFraction => Display::fmt(&"structured fraction", f),
            MixfracInputType::String => Display::fmt(&"text", f),
        }
    }
}
