use anyhow::{Context, Result};
use clap::{crate_version, Arg, ArgAction};
use env_logger::Builder;
use log::LevelFilter;

use mixfrac::mixfrac_framework::mixfrac_command::{ARG_ID_VERBOSE, ARG_SHORT_VERBOSE, MIXFRAC_COMMANDS};

pub fn main() -> Result<()> {
    let command = MIXFRAC_COMMANDS.build_cli();
    let command = command.version(crate_version!()).arg(
        Arg::new(ARG_ID_VERBOSE)
            .short(ARG_SHORT_VERBOSE)
            .long(ARG_ID_VERBOSE)
            .action(ArgAction::Count)
            .global(true)
            .help("Log more; repeat for even more."),
    );
    let cli_matches = command.get_matches();

    let level = match cli_matches.get_count(ARG_ID_VERBOSE) {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Builder::new().filter_level(level).init();

    log::info!("Mixfrac starting");

    MIXFRAC_COMMANDS.execute(&cli_matches).context("Executing Mixfrac")
}
