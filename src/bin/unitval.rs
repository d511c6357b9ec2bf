//! Scriptable one-shot conversions via subcommands; bare invocation drops
//! into the interactive shell.
//!
//! Usage:
//!   unitval                                  Enter interactive shell
//!   unitval convert <value> <interp>         Convert to canonical form
//!   unitval format <number> <interp>         Render a canonical number
//!   unitval check <name> <value> <interp>    Validate against --min/--max
//!   unitval list                             List interpretations

use clap::Parser;
use std::process::ExitCode;
use unitval::cli::{Cli, Command, cmd_check, cmd_convert, cmd_format, cmd_list};
use unitval::config::Config;
use unitval::convert::Registry;

fn main() -> ExitCode {
    // UNITVAL_LOG=debug surfaces config and registry diagnostics on stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("UNITVAL_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Config decides parsing policy — must load before the registry is built
    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(&Config::expand_path(path)),
        None => Config::load(),
    };
    let config = match config {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let registry = Registry::from_config(&config);

    // Default to the interactive shell when invoked without a subcommand
    let Some(command) = cli.command else {
        return match unitval::shell::run(&config, &registry) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Shell error: {e}");
                ExitCode::FAILURE
            }
        };
    };

    match command {
        Command::Convert {
            value,
            interpretation,
        } => cmd_convert(&registry, &value, interpretation.into(), cli.json),
        Command::Format {
            value,
            interpretation,
        } => cmd_format(&registry, value, interpretation.into(), cli.json),
        Command::Check {
            name,
            value,
            interpretation,
            min,
            max,
        } => cmd_check(
            &registry,
            &name,
            &value,
            interpretation.into(),
            min.as_deref(),
            max.as_deref(),
            cli.json,
        ),
        Command::List => cmd_list(&registry, cli.json),
    }
}
