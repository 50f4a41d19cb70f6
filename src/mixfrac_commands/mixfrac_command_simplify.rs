use clap::{Arg, ArgAction};

use crate::mixfrac_framework::{mixfrac_command::MixfracCommand, mixfrac_input::MixfracInputType, mixfrac_output::{MixfracOutput, MixfracOutputType}};

pub const ARG_ID_MIXED: &str = "mixed";

pub const MIXFRAC_SIMPLIFY: MixfracCommand = MixfracCommand::Command {
    name_short: "sim",
    name_long: Some("simplify"),
    explanation_short: "Reduce the fractional part of a fraction to lowest terms.",
    explanation_long: Some("Reduce the fractional part of a fraction to lowest terms.
        By default, the whole number is left as it is, so `1 6/4` becomes `1 3/2`.
        With --mixed, an improper fractional part is carried into the whole number, so `1 6/4` becomes `2 1/2`."),
    cli_command: Some(|command| {
        command.arg(
            Arg::new(ARG_ID_MIXED)
            .short('m')
            .long(ARG_ID_MIXED)
            .action(ArgAction::SetTrue)
            .help("Carry an improper fractional part into the whole number.")
            .required(false)
        )
    }),
    input_types: &[ &MixfracInputType::Fraction ],
    input_names: &[ "FRACTION" ],
    input_helps: &[ "The fraction to simplify." ],
    execute: |mut inputs, cli_matches| {
        let fraction = inputs.remove(0).to_fraction()?;
        let mixed = cli_matches.map(|matches| matches.get_flag(ARG_ID_MIXED)).unwrap_or(false);

        let result = if mixed {
            fraction.to_mixed_form()?
        } else {
            fraction.to_simplest_form()
        };
        log::info!("{} simplifies to {}", fraction, result);
        Ok(MixfracOutput::Fraction(result))
    },
    output_type: &MixfracOutputType::Fraction,
};
