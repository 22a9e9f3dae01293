//! cinedex CLI
//!
//! Command-line interface for managing a movie catalog.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::Cli;
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = commands::run(cli) {
        log::error!("{e}");
        std::process::exit(e.exit_code());
    }
}

/// Install the logger. Human output goes through `log::info!`, so the default
/// format is the bare message. `RUST_LOG` overrides the chosen level.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).target(env_logger::Target::Stdout);

    if verbose {
        builder.format_timestamp_millis().format_target(true);
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            _ => writeln!(buf, "{}: {}", record.level(), record.args()),
        });
    }

    builder.parse_default_env();
    builder.init();
}

/// Emit an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
