//! One function per subcommand, each returning the process exit code.
//!
//! Usage-class failures (bad input, out-of-range) exit with 2 so scripts can
//! tell a typo from an internal failure (1).

use crate::convert::{Interpretation, Registry};
use crate::error::Error;
use std::process::ExitCode;

fn fail(error: &Error) -> ExitCode {
    eprintln!("{error}");
    ExitCode::from(error.exit_code())
}

/// Converts a value and prints its canonical number (and round-trip rendering).
#[must_use]
pub fn cmd_convert(
    registry: &Registry,
    value: &str,
    interpretation: Interpretation,
    json: bool,
) -> ExitCode {
    tracing::debug!(value, %interpretation, "convert");
    let canonical = match registry.convert_or_usage_error(value, interpretation.as_str()) {
        Ok(canonical) => canonical,
        Err(e) => return fail(&e),
    };
    let formatted = registry
        .format(canonical, interpretation.as_str())
        .unwrap_or_default();
    if json {
        println!(
            "{}",
            serde_json::json!({
                "input": value,
                "interpretation": interpretation.as_str(),
                "canonical": canonical,
                "formatted": formatted,
            })
        );
    } else {
        println!("{canonical}");
    }
    ExitCode::SUCCESS
}

/// Renders a canonical number with the most natural unit.
#[must_use]
pub fn cmd_format(
    registry: &Registry,
    value: f64,
    interpretation: Interpretation,
    json: bool,
) -> ExitCode {
    let Some(formatted) = registry.format(value, interpretation.as_str()) else {
        // Unreachable through clap's value_enum, kept for direct callers
        return fail(&Error::Usage(format!(
            "couldn't format {value} as {interpretation}: possible interpretations: {}",
            registry.interpretation_names()
        )));
    };
    if json {
        println!(
            "{}",
            serde_json::json!({
                "canonical": value,
                "interpretation": interpretation.as_str(),
                "formatted": formatted,
            })
        );
    } else {
        println!("{formatted}");
    }
    ExitCode::SUCCESS
}

/// Validates a parameter value against inclusive bounds.
#[must_use]
pub fn cmd_check(
    registry: &Registry,
    name: &str,
    value: &str,
    interpretation: Interpretation,
    min: Option<&str>,
    max: Option<&str>,
    json: bool,
) -> ExitCode {
    tracing::debug!(name, value, %interpretation, "check");
    match registry.parameter_value(name, value, interpretation.as_str(), min, max) {
        Ok(checked) => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "parameter": name,
                        "canonical": checked.value(),
                        "formatted": checked.to_string(),
                    })
                );
            } else {
                println!("{checked}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

/// Lists registered interpretations with their example inputs.
#[must_use]
pub fn cmd_list(registry: &Registry, json: bool) -> ExitCode {
    if json {
        let entries: Vec<_> = registry
            .converters()
            .map(|c| {
                serde_json::json!({
                    "interpretation": c.interpretation().as_str(),
                    "examples": c.examples(),
                })
            })
            .collect();
        println!("{}", serde_json::json!(entries));
    } else {
        for converter in registry.converters() {
            println!(
                "{:<14} e.g. {}",
                converter.interpretation().as_str(),
                converter.examples()
            );
        }
    }
    ExitCode::SUCCESS
}
