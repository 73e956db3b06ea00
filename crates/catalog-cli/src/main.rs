//! Product-catalog CSV importer CLI.

use catalog_cli::logging::{LogConfig, LogFormat, init_logging};
use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_detect, run_import_command, run_map, run_platforms};

const EXIT_OK: i32 = 0;
/// The import ran but rejected at least one row.
const EXIT_ROW_ERRORS: i32 = 1;
/// The run could not complete.
const EXIT_FAILURE: i32 = 2;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_FAILURE);
    }
    let outcome = match &cli.command {
        Command::Import(args) => run_import_command(args),
        Command::Detect(args) => run_detect(args).map(|()| false),
        Command::Map(args) => run_map(args).map(|()| false),
        Command::Platforms => run_platforms().map(|()| false),
    };
    if let Err(error) = &outcome {
        eprintln!("error: {error:#}");
    }
    std::process::exit(exit_code(&outcome));
}

fn exit_code(outcome: &anyhow::Result<bool>) -> i32 {
    match outcome {
        Ok(false) => EXIT_OK,
        Ok(true) => EXIT_ROW_ERRORS,
        Err(_) => EXIT_FAILURE,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
