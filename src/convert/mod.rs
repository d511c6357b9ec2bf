//! Interpretations, converters, the converter registry, and the conversion
//! facade other code calls.
//!
//! Converters never fail with an error: `parse` answers `None` for anything
//! it does not recognize, and the facade decides whether that becomes a
//! silent `None`, a conversion error, or a caller-facing usage error.

mod storage;
mod time;

use crate::error::Error;
use crate::value::UnitValue;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// The unit families this crate knows about. Closed by design: one canonical
/// converter per name, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interpretation {
    /// Byte counts with decimal (KB = 1000) and binary (KiB = 1024) units.
    StorageSize,
    /// Durations in seconds, with sub-second units and a clock form.
    Time,
}

impl Interpretation {
    /// Kebab-case because CLI flags and config files use kebab-case names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StorageSize => "storage-size",
            Self::Time => "time",
        }
    }

    /// Convenience for iteration — used by the registry, help output, and tests.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::StorageSize, Self::Time]
    }

    /// Example inputs quoted in "couldn't convert" error messages.
    #[must_use]
    pub const fn examples(self) -> &'static str {
        match self {
            Self::StorageSize => storage::EXAMPLES,
            Self::Time => time::EXAMPLES,
        }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can echo the unknown name back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseInterpretationError(String);

impl fmt::Display for ParseInterpretationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown interpretation: '{}'", self.0)
    }
}

impl std::error::Error for ParseInterpretationError {}

impl FromStr for Interpretation {
    type Err = ParseInterpretationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "storage-size" => Ok(Self::StorageSize),
            "time" => Ok(Self::Time),
            _ => Err(ParseInterpretationError(s.to_string())),
        }
    }
}

/// Knobs that change how converters read input. Formatting is unaffected.
#[derive(Debug, Clone, Copy)]
pub struct ConversionOptions {
    /// Whether the storage-size family accepts a bare numeral ("200") as
    /// bytes. Durations always accept bare numerals as seconds.
    pub allow_bare_number: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            allow_bare_number: true,
        }
    }
}

/// A raw value handed to the facade: either user-supplied text or a number
/// that is already canonical and passes through parsing unchanged.
#[derive(Debug, Clone, Copy)]
pub enum RawValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for RawValue<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for RawValue<'_> {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i64> for RawValue<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

impl From<i32> for RawValue<'_> {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<u64> for RawValue<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn from(number: u64) -> Self {
        Self::Number(number as f64)
    }
}

impl fmt::Display for RawValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// The parse/format pair for one interpretation. Stateless once built;
/// cheap to copy, which lets every [`UnitValue`] carry its own.
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    interpretation: Interpretation,
    options: ConversionOptions,
}

impl Converter {
    pub(crate) const fn new(interpretation: Interpretation, options: ConversionOptions) -> Self {
        Self {
            interpretation,
            options,
        }
    }

    #[must_use]
    pub const fn interpretation(&self) -> Interpretation {
        self.interpretation
    }

    /// Example inputs for error messages.
    #[must_use]
    pub const fn examples(&self) -> &'static str {
        self.interpretation.examples()
    }

    /// Text becomes a canonical number; numbers pass through unchanged.
    /// `None` means "not recognized" — never an error at this layer.
    #[must_use]
    pub fn parse(&self, raw: RawValue<'_>) -> Option<f64> {
        match raw {
            RawValue::Number(number) => Some(number),
            RawValue::Text(text) => match self.interpretation {
                Interpretation::StorageSize => {
                    storage::parse(text, self.options.allow_bare_number)
                }
                Interpretation::Time => time::parse(text),
            },
        }
    }

    /// Renders a canonical value with the most natural unit.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        match self.interpretation {
            Interpretation::StorageSize => storage::format(value),
            Interpretation::Time => time::format(value),
        }
    }
}

/// Name -> converter lookup, built once. No re-registration: one canonical
/// family per name.
#[derive(Debug)]
pub struct Registry {
    converters: Vec<Converter>,
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Registry with default options (bare numerals accepted as bytes).
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ConversionOptions::default())
    }

    #[must_use]
    pub fn with_options(options: ConversionOptions) -> Self {
        let converters = Interpretation::all()
            .into_iter()
            .map(|interpretation| Converter::new(interpretation, options))
            .collect();
        tracing::debug!(allow_bare_number = options.allow_bare_number, "registry built");
        Self { converters }
    }

    #[must_use]
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::with_options(ConversionOptions {
            allow_bare_number: config.conversion.allow_bare_number,
        })
    }

    /// Shared default-options registry for the free-function facade.
    /// Built on first use; read-only afterwards.
    #[must_use]
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::new)
    }

    /// Registered converters in registration order.
    pub fn converters(&self) -> impl Iterator<Item = &Converter> {
        self.converters.iter()
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Converter> {
        self.converters
            .iter()
            .find(|c| c.interpretation.as_str() == name)
    }

    /// Comma-joined names for "possible interpretations" error messages.
    #[must_use]
    pub fn interpretation_names(&self) -> String {
        self.converters
            .iter()
            .map(|c| c.interpretation.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Best-effort probe: `None` covers both unknown interpretations and
    /// unrecognized values.
    pub fn convert<'a>(
        &self,
        value: impl Into<RawValue<'a>>,
        interpretation: &str,
    ) -> Option<f64> {
        self.lookup(interpretation)?.parse(value.into())
    }

    /// Like [`Registry::convert`], but failures carry full error messages.
    ///
    /// # Errors
    /// [`Error::UnknownInterpretation`] listing all registered names, or
    /// [`Error::Unparsable`] quoting the converter's examples.
    pub fn convert_or_error<'a>(
        &self,
        value: impl Into<RawValue<'a>>,
        interpretation: &str,
    ) -> Result<f64, Error> {
        let raw = value.into();
        let Some(converter) = self.lookup(interpretation) else {
            return Err(Error::UnknownInterpretation {
                value: raw.to_string(),
                interpretation: interpretation.to_string(),
                known: self.interpretation_names(),
                parameter: None,
            });
        };
        converter.parse(raw).ok_or_else(|| Error::Unparsable {
            value: raw.to_string(),
            interpretation: converter.interpretation(),
            parameter: None,
        })
    }

    /// Conversion for CLI flag values: failures become [`Error::Usage`], the
    /// caller-facing class that terminates an invocation with exit status 2.
    ///
    /// # Errors
    /// [`Error::Usage`] wrapping the conversion failure message.
    pub fn convert_or_usage_error<'a>(
        &self,
        value: impl Into<RawValue<'a>>,
        interpretation: &str,
    ) -> Result<f64, Error> {
        self.convert_or_error(value, interpretation)
            .map_err(|e| Error::Usage(e.to_string()))
    }

    /// `None` only for unknown interpretations — any number formats.
    #[must_use]
    pub fn format(&self, value: f64, interpretation: &str) -> Option<String> {
        Some(self.lookup(interpretation)?.format(value))
    }

    /// The only way to mint a [`UnitValue`]: conversion succeeds, and the
    /// matched converter travels with the result.
    ///
    /// # Errors
    /// Same as [`Registry::convert_or_error`].
    pub fn create_value<'a>(
        &self,
        value: impl Into<RawValue<'a>>,
        interpretation: &str,
    ) -> Result<UnitValue, Error> {
        let raw = value.into();
        let Some(converter) = self.lookup(interpretation) else {
            return Err(Error::UnknownInterpretation {
                value: raw.to_string(),
                interpretation: interpretation.to_string(),
                known: self.interpretation_names(),
                parameter: None,
            });
        };
        let canonical = converter.parse(raw).ok_or_else(|| Error::Unparsable {
            value: raw.to_string(),
            interpretation: converter.interpretation(),
            parameter: None,
        })?;
        Ok(UnitValue::new(canonical, *converter))
    }
}

/// Best-effort conversion against the global registry.
pub fn convert<'a>(value: impl Into<RawValue<'a>>, interpretation: &str) -> Option<f64> {
    Registry::global().convert(value, interpretation)
}

/// Converting-or-failing against the global registry.
///
/// # Errors
/// See [`Registry::convert_or_error`].
pub fn convert_or_error<'a>(
    value: impl Into<RawValue<'a>>,
    interpretation: &str,
) -> Result<f64, Error> {
    Registry::global().convert_or_error(value, interpretation)
}

/// CLI-flag conversion against the global registry.
///
/// # Errors
/// See [`Registry::convert_or_usage_error`].
pub fn convert_or_usage_error<'a>(
    value: impl Into<RawValue<'a>>,
    interpretation: &str,
) -> Result<f64, Error> {
    Registry::global().convert_or_usage_error(value, interpretation)
}

/// Formats a canonical value via the global registry.
#[must_use]
pub fn format_value(value: f64, interpretation: &str) -> Option<String> {
    Registry::global().format(value, interpretation)
}

/// Creates a [`UnitValue`] via the global registry.
///
/// # Errors
/// See [`Registry::create_value`].
pub fn create_value<'a>(
    value: impl Into<RawValue<'a>>,
    interpretation: &str,
) -> Result<UnitValue, Error> {
    Registry::global().create_value(value, interpretation)
}
