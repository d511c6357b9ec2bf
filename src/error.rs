//! Unified error type for all unitval operations.
//!
//! Conversion failures escalate in three layers: converters signal "not
//! recognized" with `None`, the facade turns that into `UnknownInterpretation`
//! or `Unparsable` when asked, and CLI-facing entry points re-signal either
//! as `Usage` so the binary can exit with a distinct status for bad input.

use crate::convert::Interpretation;

/// Error type for unitval operations.
#[derive(Debug)]
pub enum Error {
    /// No converter is registered under the requested interpretation name.
    UnknownInterpretation {
        /// The value whose conversion was attempted.
        value: String,
        /// The unrecognized interpretation name.
        interpretation: String,
        /// Comma-joined list of registered names.
        known: String,
        /// CLI parameter the value belonged to, if any.
        parameter: Option<String>,
    },
    /// Text matched no unit suffix or numeric grammar of the interpretation.
    Unparsable {
        value: String,
        interpretation: Interpretation,
        parameter: Option<String>,
    },
    /// Value converted fine but violates an inclusive min/max bound.
    OutOfRange {
        parameter: String,
        value: String,
        /// Formatted bound, empty when the side is unbounded.
        min: String,
        max: String,
    },
    /// Caller-facing validation failure meant to terminate a CLI invocation.
    Usage(String),
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
}

impl Error {
    /// Attaches the parameter name used in `Parameter '<name>': ` prefixes.
    #[must_use]
    pub fn with_parameter(mut self, name: &str) -> Self {
        match &mut self {
            Self::UnknownInterpretation { parameter, .. } | Self::Unparsable { parameter, .. } => {
                *parameter = Some(name.to_string());
            }
            _ => {}
        }
        self
    }

    /// Bad input and internal failures must exit differently so scripts can
    /// tell a typo from a broken installation.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) | Self::OutOfRange { .. } => 2,
            _ => 1,
        }
    }
}

fn parameter_prefix(parameter: Option<&String>) -> String {
    parameter.map_or_else(String::new, |name| format!("Parameter '{name}': "))
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownInterpretation {
                value,
                interpretation,
                known,
                parameter,
            } => write!(
                f,
                "{}couldn't convert '{value}' as {interpretation}: possible interpretations: {known}",
                parameter_prefix(parameter.as_ref())
            ),
            Self::Unparsable {
                value,
                interpretation,
                parameter,
            } => write!(
                f,
                "{}couldn't convert '{value}' as {interpretation}: examples: {}",
                parameter_prefix(parameter.as_ref()),
                interpretation.examples()
            ),
            Self::OutOfRange {
                parameter,
                value,
                min,
                max,
            } => write!(
                f,
                "Parameter '{parameter}': value {value} is out of valid range: [{min}..{max}]"
            ),
            Self::Usage(message) => f.write_str(message),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
