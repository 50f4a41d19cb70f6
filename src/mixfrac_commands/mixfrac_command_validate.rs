use crate::{math::mixed_fraction_parser, mixfrac_framework::{mixfrac_command::MixfracCommand, mixfrac_input::MixfracInputType, mixfrac_output::{MixfracOutput, MixfracOutputType}}};

pub const MIXFRAC_VALIDATE: MixfracCommand = MixfracCommand::Command {
    name_short: "vali",
    name_long: Some("validate"),
    explanation_short: "Check whether text is a fraction, and report the problem if it is not.",
    explanation_long: Some("Check whether text is a fraction, and report the problem if it is not.
        Text that consists of nothing but whitespace and at most one minus sign is reported as incomplete rather than as an error.
        A rejected fraction is a regular result, not a failure of the command."),
    cli_command: None,
    input_types: &[ &MixfracInputType::String ],
    input_names: &[ "TEXT" ],
    input_helps: &[ "The text to check." ],
    execute: |mut inputs, _| {
        let raw = inputs.remove(0).to_text()?;
        Ok(MixfracOutput::String(validate(&raw)))
    },
    output_type: &MixfracOutputType::String,
};

pub fn validate(raw: &str) -> String {
    if mixed_fraction_parser::is_intermediate_input(raw) {
        return "Input is incomplete.".to_string();
    }
    match mixed_fraction_parser::parse(raw) {
        Ok(fraction) => format!("Input is a valid fraction: {}.", fraction),
        Err(error) => {
            let kind: &str = error.kind().into();
            format!("{}: {}.", kind, error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validate;

    #[test]
    fn validate_outcomes() {
        assert_eq!(validate(" - "), "Input is incomplete.");
        assert_eq!(validate(" 007/2 "), "Input is a valid fraction: 7/2.");
        assert_eq!(validate("1/0"), "InvalidDenominator: Please do not put 0 in the denominator.");
        assert!(validate("1.5").starts_with("InvalidFormat: "));
    }
}
