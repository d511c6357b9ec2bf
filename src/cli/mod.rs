//! CLI module for unitval.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Interpretation name for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum InterpretationArg {
    StorageSize,
    Time,
}

impl From<InterpretationArg> for crate::convert::Interpretation {
    fn from(arg: InterpretationArg) -> Self {
        match arg {
            InterpretationArg::StorageSize => Self::StorageSize,
            InterpretationArg::Time => Self::Time,
        }
    }
}

/// unitval - Convert, format, and validate unit-aware values.
#[derive(Parser)]
#[command(
    name = "unitval",
    version,
    about = "Convert, format, and validate unit-aware values"
)]
pub struct Cli {
    /// Config file path (defaults to <config_dir>/unitval.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Emit machine-readable JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a human-friendly value to its canonical number.
    Convert {
        /// Value to convert (e.g., "1.5KiB", "30min", "1:02:07.5")
        value: String,
        /// Unit family
        #[arg(value_enum)]
        interpretation: InterpretationArg,
    },
    /// Format a canonical number with the most natural unit.
    Format {
        /// Canonical numeric value (bytes or seconds)
        value: f64,
        /// Unit family
        #[arg(value_enum)]
        interpretation: InterpretationArg,
    },
    /// Validate a parameter value against an inclusive range.
    Check {
        /// Parameter name used in error messages
        name: String,
        /// Value to validate
        value: String,
        /// Unit family
        #[arg(value_enum)]
        interpretation: InterpretationArg,
        /// Inclusive lower bound (e.g., "1KiB")
        #[arg(long, value_name = "VALUE")]
        min: Option<String>,
        /// Inclusive upper bound (e.g., "1GiB")
        #[arg(long, value_name = "VALUE")]
        max: Option<String>,
    },
    /// List registered interpretations with example inputs.
    List,
}

pub use commands::{cmd_check, cmd_convert, cmd_format, cmd_list};
