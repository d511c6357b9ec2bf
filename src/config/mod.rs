//! TOML configuration loading.
//!
//! `#[serde(default)]` on every field so a missing or completely empty
//! config file still produces a working engine — zero-config is the default
//! experience, the file only exists to flip policies.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Root of `unitval.toml`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Parsing policy knobs — they change what input is accepted, so they
    /// belong in persistent config rather than per-call flags.
    pub conversion: ConversionConfig,
    /// REPL-only settings; non-interactive usage never reads them.
    pub shell: ShellConfig,
}

/// `[conversion]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Whether a bare numeral ("200") counts as the base unit for
    /// storage sizes. Historically contested behavior, so it is a
    /// config switch rather than a hardcoded choice.
    pub allow_bare_number: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            allow_bare_number: true,
        }
    }
}

/// `[shell]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub prompt: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "unitval> ".to_string(),
        }
    }
}

impl Config {
    /// Loads the config from the default location, falling back to defaults
    /// when no file exists.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing
    /// hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::config_path()?;
        tracing::debug!(path = %path.display(), "loading config");
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path instead of the default
    /// location — used by `--config` and tests.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            tracing::debug!("config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// XDG-compliant `<config_dir>/unitval.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("unitval.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Resolves a user-supplied config path, expanding a leading `~`.
    #[must_use]
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).as_ref())
    }
}
