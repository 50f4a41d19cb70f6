use crate::mixfrac_framework::{mixfrac_command::MixfracCommand, mixfrac_input::MixfracInputType, mixfrac_output::{MixfracOutput, MixfracOutputType}};

pub const MIXFRAC_PARSE: MixfracCommand = MixfracCommand::Command {
    name_short: "par",
    name_long: Some("parse"),
    explanation_short: "Parse a fraction and write it in its canonical form.",
    explanation_long: Some("Parse a fraction and write it in its canonical form.
        Surrounding whitespace is removed and leading zeroes are dropped; the fraction is not simplified.
        Use --json to obtain the structured record instead."),
    cli_command: None,
    input_types: &[ &MixfracInputType::Fraction ],
    input_names: &[ "FRACTION" ],
    input_helps: &[ "The fraction to parse." ],
    execute: |mut inputs, _| {
        let fraction = inputs.remove(0).to_fraction()?;
        Ok(MixfracOutput::Fraction(fraction))
    },
    output_type: &MixfracOutputType::Fraction,
};
