//! Checks that every profile record stored in a directory carries the
//! required fields before the data gets published.

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;

pub mod error;
pub mod io;
pub mod report;
pub mod validation;

use crate::io::{CliWriter, OutputType, Style};
use crate::validation::{FailureMode, ProfileValidator, ValidatorConfig, DEFAULT_DATA_DIR};

fn build_command() -> Command {
    Command::new("profcheck")
        .help_expected(true)
        .about("Checks that every profile in a directory has a name and a bio")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_DATA_DIR)
                .help("Directory holding one JSON profile per file"),
        )
        .arg(
            Arg::new("keep-going")
                .long("keep-going")
                .short('k')
                .action(ArgAction::SetTrue)
                .help("Checks every profile instead of stopping at the first error"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Outputs a machine-readable JSON report"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Prints verbose logs"),
        )
}

fn log_level(verbose: u8) -> LevelFilter {
    if verbose >= 3 {
        LevelFilter::Trace
    } else if verbose >= 2 {
        LevelFilter::Debug
    } else if verbose >= 1 {
        LevelFilter::Info
    } else {
        LevelFilter::Off
    }
}

fn config_from_matches(matches: &ArgMatches) -> ValidatorConfig {
    let data_dir = matches
        .get_one::<PathBuf>("data-dir")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
    let mode = if matches.get_flag("keep-going") {
        FailureMode::CollectAll
    } else {
        FailureMode::FailFast
    };

    ValidatorConfig::new(data_dir).with_mode(mode)
}

/// Runs the whole program and returns the process exit code.
pub fn main_with_args(args: &[&str], writer: &mut impl CliWriter) -> i32 {
    let matches = match build_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) => {
            let output_type = if err.use_stderr() {
                OutputType::Error
            } else {
                OutputType::Standard
            };
            writer.write(err.render(), output_type);
            return err.exit_code();
        }
    };

    // Tests call this function repeatedly, only the first logger sticks.
    let _ = env_logger::builder()
        .filter_level(log_level(matches.get_count("verbose")))
        .try_init();

    log::debug!("{:?}", matches);

    let config = config_from_matches(&matches);
    let mode = config.mode;
    let outcome = ProfileValidator::new(config).run();

    if matches.get_flag("json") {
        if let Err(err) = report::print_json(&outcome, writer) {
            writer.writeln(
                format!("{} {}", Style::error("error:"), err),
                OutputType::Error,
            );
            return 1;
        }
    } else {
        report::print_plain(&outcome, mode, writer);
    }

    if outcome.is_valid() {
        log::info!("{} profile(s) checked, all valid", outcome.checked);
        0
    } else {
        log::info!(
            "{} error(s) after checking {} profile(s)",
            outcome.errors.len(),
            outcome.checked
        );
        1
    }
}
