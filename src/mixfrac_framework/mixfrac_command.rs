use std::path::PathBuf;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use anyhow::{anyhow, Context, Result};

use crate::mixfrac_commands::{mixfrac_command_format, mixfrac_command_info, mixfrac_command_parse, mixfrac_command_simplify, mixfrac_command_validate};

use super::{mixfrac_input::{MixfracInput, MixfracInputType}, mixfrac_output::{self, MixfracExporter, MixfracOutput, MixfracOutputType}};

pub const MIXFRAC_COMMANDS: MixfracCommand = MixfracCommand::Group {
    name_short: "Mixfrac",
    name_long: None,
    explanation_short: "Mixfrac: parse and format fractions and mixed numbers.",
    explanation_long: Some("Mixfrac: parse and format fractions and mixed numbers.
        A fraction is written as a whole number (`3`), a simple fraction (`5/2`) or a mixed number (`3 1/2`), each optionally preceded by a minus sign.
        Fractions that start with a minus sign can be given as arguments directly, as in `mixfrac parse \"-3 1/2\"`."),
    children: &[
        &mixfrac_command_format::MIXFRAC_FORMAT,
        &mixfrac_command_info::MIXFRAC_INFO,
        &mixfrac_command_parse::MIXFRAC_PARSE,
        &mixfrac_command_simplify::MIXFRAC_SIMPLIFY,
        &mixfrac_command_validate::MIXFRAC_VALIDATE,
    ]
};

pub const ARG_SHORT_OUTPUT: char = 'o';
pub const ARG_ID_OUTPUT: &str = "output";
pub const ARG_SHORT_JSON: char = 'j';
pub const ARG_ID_JSON: &str = "json";
pub const ARG_SHORT_VERBOSE: char = 'v';
pub const ARG_ID_VERBOSE: &str = "verbose";

pub enum MixfracCommand {
    Group{
        name_short: &'static str,
        name_long: Option<&'static str>,
        explanation_short: &'static str,
        explanation_long: Option<&'static str>,
        children: &'static [&'static MixfracCommand]
    },
    Command{
        name_short: &'static str,
        name_long: Option<&'static str>,
        explanation_short: &'static str,
        explanation_long: Option<&'static str>,
        cli_command: Option<fn(command: Command) -> Command>, //create the cli command. An output -o argument is always added

        input_types: &'static [&'static MixfracInputType], //for each fixed-position input parameter, the type that is accepted
        input_names: &'static [&'static str],
        input_helps: &'static [&'static str],

        execute: fn(inputs: Vec<MixfracInput>, cli_matches: Option<&ArgMatches>) -> Result<MixfracOutput>, //the cli_matches are provided only when called from the cli
        output_type: &'static MixfracOutputType
    }
}

impl MixfracCommand {
    pub fn build_cli(&self) -> Command {
        let mut command;
        match self {
            MixfracCommand::Group { name_short, name_long, explanation_short, explanation_long, children } => {
                let name = if let Some(x) = name_long {x} else {name_short};
                command = Command::new(name)
                    .about(explanation_short)
                    .subcommand_required(true)
                    .allow_external_subcommands(false);

                if name_long.is_some() {
                    command = command.alias(name_short);
                }

                if let Some(l) = explanation_long {
                    command = command.long_about(l);
                }

                for child in children.iter() {
                    let subcommand = child.build_cli();
                    command = command.subcommand(subcommand);
                }
            },
            MixfracCommand::Command { name_short, name_long, explanation_short, explanation_long, cli_command, input_types, input_helps, input_names, output_type, ..} => {
                let name = if let Some(x) = name_long {x} else {name_short};
                command = Command::new(name)
                    .about(explanation_short);

                if name_long.is_some() {
                    command = command.alias(name_short);
                }

                if let Some(l) = explanation_long {
                    command = command.long_about(l);
                }

                for (i, (input_name, (input_type, input_help))) in input_names.iter().zip(input_types.iter().zip(input_helps.iter())).enumerate() {
                    let arg = Arg::new(format!("{}x{}", input_name, i))
                        .action(ArgAction::Set)
                        .value_name(input_name)
                        .help(input_help)
                        .long_help(format!("{} Expects {} {}.", input_help, input_type.get_article(), input_type).replace("  ", " "))
                        .required(true)
                        .allow_hyphen_values(true)
                        .value_parser(input_type.get_parser());

                    command = command.arg(arg);
                }

                if let Some(f) = cli_command {
                    command = (f)(command);
                }

                command = command.arg(
                    Arg::new(ARG_ID_OUTPUT)
                    .short(ARG_SHORT_OUTPUT)
                    .long(ARG_ID_OUTPUT)
                    .action(ArgAction::Set)
                    .value_name("FILE")
                    .help("Saves the result to a file.")
                    .required(false)
                    .value_parser(value_parser!(PathBuf))
                );

                if output_type.get_exporters().contains(&MixfracExporter::StructuredFraction) {
                    command = command.arg(
                        Arg::new(ARG_ID_JSON)
                        .short(ARG_SHORT_JSON)
                        .long(ARG_ID_JSON)
                        .action(ArgAction::SetTrue)
                        .help("Write the result as a structured json record instead of as text.")
                        .required(false)
                    );
                }
            },
        };
        return command;
    }

    pub fn long_name(&self) -> &str {
        match self {
            MixfracCommand::Group { name_short, name_long, .. } => match name_long {
                Some(x) => x,
                None => &name_short,
            },
            MixfracCommand::Command { name_short, name_long, .. } => match name_long {
                Some(x) => x,
                None => &name_short,
            },
        }
    }

    pub fn execute(&self, cli_matches: &ArgMatches) -> Result<()> {
        match self {
            MixfracCommand::Group { children, ..} => {
                for child in children.iter() {
                    if let Some(sub_matches) = cli_matches.subcommand_matches(child.long_name()) {
                        return child.execute(sub_matches);
                    }
                }
            },
            MixfracCommand::Command { input_types, execute, output_type, input_names, .. } => {
                //read the inputs
                let mut inputs = vec![];
                for (i, (input_type, input_name)) in input_types.iter().zip(input_names.iter()).enumerate() {
                    let cli_id = format!("{}x{}", input_name, i);

                    log::info!("Reading {}", input_name);
                    let input = input_type.read(cli_matches, &cli_id).with_context(|| format!("Reading parameter {}.", input_name))?;
                    inputs.push(input);
                }

                log::info!("Starting {}", self.long_name());

                let result = (execute)(inputs, Some(cli_matches))?;

                if &&result.get_type() != output_type {
                    return Err(anyhow!("Output type {} does not match the declared output of {}.", result.get_type(), output_type))
                }

                let json = cli_matches.try_get_one::<bool>(ARG_ID_JSON).ok().flatten().copied().unwrap_or(false);
                let to_file = cli_matches.get_one::<PathBuf>(ARG_ID_OUTPUT);
                let exporter = Self::select_exporter(output_type, to_file, json);

                if let Some(to_file) = to_file {
                    //write result to file
                    log::info!("Writing result to {:?} as {} {}", to_file, exporter.get_article(), exporter);
                    mixfrac_output::export_object(to_file, result, exporter)?;
                } else {
                    //write result to STDOUT
                    log::info!("Writing result as {} {}", exporter.get_article(), exporter);
                    print!("{}", mixfrac_output::export_to_string(result, exporter)?);
                }

                return Ok(());
            },
        }
        Err(anyhow!("command not recognised"))
    }

    /**
     * Pick the structured exporter if it was asked for, either explicitly or by the extension of the output file.
     * Otherwise, take the first exporter of the output type.
     */
    pub fn select_exporter(output_type: &MixfracOutputType, to_file: Option<&PathBuf>, json: bool) -> MixfracExporter {
        let exporters = output_type.get_exporters();

        if json && exporters.contains(&MixfracExporter::StructuredFraction) {
            return MixfracExporter::StructuredFraction;
        }

        if let Some(to_file) = to_file {
            for exporter in exporters.iter() {
                if let Some(extension) = exporter.get_file_extension() {
                    if to_file.display().to_string().ends_with(&(".".to_string() + extension)) {
                        return *exporter;
                    }
                }
            }
        }

        //otherwise, take the first one that was mentioned
        return exporters[0];
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::mixfrac_framework::mixfrac_output::{MixfracExporter, MixfracOutputType};

    use super::{MixfracCommand, MIXFRAC_COMMANDS};

    #[test]
    fn cli_builds() {
        MIXFRAC_COMMANDS.build_cli().debug_assert();
    }

    #[test]
    fn cli_parses_negative_fraction() {
        let matches = MIXFRAC_COMMANDS.build_cli().try_get_matches_from(["mixfrac", "parse", "-3 1/2"]).unwrap();
        assert!(matches.subcommand_matches("parse").is_some());
    }

    #[test]
    fn cli_rejects_invalid_fraction() {
        assert!(MIXFRAC_COMMANDS.build_cli().try_get_matches_from(["mixfrac", "parse", "1/0"]).is_err());
    }

    #[test]
    fn exporter_selection() {
        let json_file = PathBuf::from("result.json");
        let text_file = PathBuf::from("result.txt");

        assert_eq!(MixfracCommand::select_exporter(&MixfracOutputType::Fraction, None, false), MixfracExporter::Fraction);
        assert_eq!(MixfracCommand::select_exporter(&MixfracOutputType::Fraction, None, true), MixfracExporter::StructuredFraction);
        assert_eq!(MixfracCommand::select_exporter(&MixfracOutputType::Fraction, Some(&json_file), false), MixfracExporter::StructuredFraction);
        assert_eq!(MixfracCommand::select_exporter(&MixfracOutputType::Fraction, Some(&text_file), false), MixfracExporter::Fraction);
        assert_eq!(MixfracCommand::select_exporter(&MixfracOutputType::String, Some(&json_file), true), MixfracExporter::String);
    }
}
