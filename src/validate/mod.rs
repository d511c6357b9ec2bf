//! CLI-flag validation: conversion plus inclusive min/max bound checking.

use crate::convert::{RawValue, Registry};
use crate::error::Error;
use crate::value::UnitValue;

impl Registry {
    /// Converts a parameter value and checks it against optional bounds.
    ///
    /// Bounds go through the same converter as the value, so `min = "8.1KiB"`
    /// means 8294 bytes. Absent bounds mean unbounded, never zero. Both
    /// bounds are inclusive.
    ///
    /// # Errors
    /// Conversion failures carry a `Parameter '<name>': ` prefix; a violated
    /// bound yields [`Error::OutOfRange`] with both bounds formatted back
    /// into unit notation (empty string for an absent side).
    pub fn parameter_value<'a>(
        &self,
        parameter: &str,
        value: impl Into<RawValue<'a>>,
        interpretation: &str,
        min: Option<&str>,
        max: Option<&str>,
    ) -> Result<UnitValue, Error> {
        let value = self
            .create_value(value, interpretation)
            .map_err(|e| e.with_parameter(parameter))?;

        let min = min
            .map(|text| self.convert_or_error(text, interpretation))
            .transpose()?;
        let max = max
            .map(|text| self.convert_or_error(text, interpretation))
            .transpose()?;

        let below = min.is_some_and(|bound| value.value() < bound);
        let above = max.is_some_and(|bound| value.value() > bound);
        if below || above {
            let format_bound = |bound: Option<f64>| {
                bound
                    .and_then(|b| self.format(b, interpretation))
                    .unwrap_or_default()
            };
            tracing::debug!(parameter, %value, "parameter out of range");
            return Err(Error::OutOfRange {
                parameter: parameter.to_string(),
                value: value.to_string(),
                min: format_bound(min),
                max: format_bound(max),
            });
        }
        Ok(value)
    }
}

/// Parameter validation against the global registry.
///
/// # Errors
/// See [`Registry::parameter_value`].
pub fn parameter_value<'a>(
    parameter: &str,
    value: impl Into<RawValue<'a>>,
    interpretation: &str,
    min: Option<&str>,
    max: Option<&str>,
) -> Result<UnitValue, Error> {
    Registry::global().parameter_value(parameter, value, interpretation, min, max)
}
