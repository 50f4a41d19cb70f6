use anyhow::Context;

use crate::mixfrac_framework::{infoable::Infoable, mixfrac_command::MixfracCommand, mixfrac_input::MixfracInputType, mixfrac_output::{MixfracOutput, MixfracOutputType}};

pub const MIXFRAC_INFO: MixfracCommand = MixfracCommand::Command {
    name_short: "info",
    name_long: Some("information"),
    explanation_short: "Show the parts and the value of a fraction.",
    explanation_long: None,
    cli_command: None,
    input_types: &[ &MixfracInputType::Fraction ],
    input_names: &[ "FRACTION" ],
    input_helps: &[ "The fraction to inspect." ],
    execute: |mut inputs, _| {
        let fraction = inputs.remove(0).to_fraction()?;
        let mut f = vec![];
        fraction.info(&mut f).context("gathering information")?;
        Ok(MixfracOutput::String(String::from_utf8(f)?))
    },
    output_type: &MixfracOutputType::String,
};
