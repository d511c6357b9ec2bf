//! `unitval` - Unit-aware value conversion and validation.
//!
//! Command-line tools accept human-friendly quantities ("1.5KiB", "30min",
//! "1:02:07.5") as flag values. This crate converts them to canonical
//! numbers (bytes, seconds), validates them against numeric ranges, and
//! formats results back into the most natural unit:
//!
//! - Converter families ("storage-size", "time") with a shared unit-table
//!   parse/format round trip
//! - A conversion facade with probe (`Option`) and must-succeed (`Result`)
//!   entry points
//! - [`UnitValue`], an immutable numeric wrapper that keeps its unit
//!   formatting across arithmetic
//! - Parameter validation with inclusive min/max bounds
//!
//! # Example
//!
//! ```
//! use unitval::{convert, create_value, format_value};
//!
//! assert_eq!(convert("1KiB", "storage-size"), Some(1024.0));
//! assert_eq!(format_value(3727.5, "time").unwrap(), "1:02:07.5");
//!
//! let a = create_value("1KiB", "storage-size").unwrap();
//! let b = create_value("2KiB", "storage-size").unwrap();
//! assert_eq!((a + b).to_string(), "3KiB");
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `unitval` binary and interactive shell

// Core modules (always available)
pub mod config;
pub mod convert;
pub mod error;
pub mod units;
pub mod validate;
pub mod value;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Shell module (feature-gated)
#[cfg(feature = "cli")]
pub mod shell;

// Re-exports for convenience
pub use config::Config;
pub use convert::{
    ConversionOptions, Converter, Interpretation, RawValue, Registry, convert, convert_or_error,
    convert_or_usage_error, create_value, format_value,
};
pub use error::Error;
pub use validate::parameter_value;
pub use value::UnitValue;
