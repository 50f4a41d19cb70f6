use crate::mixfrac_framework::{mixfrac_command::MixfracCommand, mixfrac_input::MixfracInputType, mixfrac_output::{MixfracOutput, MixfracOutputType}};

pub const MIXFRAC_FORMAT: MixfracCommand = MixfracCommand::Command {
    name_short: "for",
    name_long: Some("format"),
    explanation_short: "Write a structured fraction in its canonical form.",
    explanation_long: Some("Write a structured fraction in its canonical form.
        The structured fraction is a json object with the optional fields `isNegative`, `wholeNumber`, `numerator` and `denominator`.
        Missing fields default to false, 0, 0 and 1."),
    cli_command: None,
    input_types: &[ &MixfracInputType::StructuredFraction ],
    input_names: &[ "JSON" ],
    input_helps: &[ "The structured fraction to format." ],
    execute: |mut inputs, _| {
        let fraction = inputs.remove(0).to_fraction()?;
        log::info!("The structured fraction is {}", fraction);
        Ok(MixfracOutput::String(fraction.to_string()))
    },
    output_type: &MixfracOutputType::String,
};
