//! TOML configuration for the `userform` binary.
//!
//! Resolution order for the config file:
//! 1. `--config <path>`
//! 2. the `USERFORM_CONFIG` environment variable
//! 3. `<platform config dir>/userform/config.toml`
//!
//! A missing file at the default location yields [`UserformConfig::default`];
//! a missing file that was asked for explicitly is an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use userform_core::{CountryTable, FormPolicy};

use crate::error::{Error, Result};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "USERFORM_CONFIG";

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Where country reference data comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountriesConfig {
    /// JSON or TOML country list; the built-in table is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Interactive session settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Ask before deleting an entry
    pub confirm_deletes: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            confirm_deletes: true,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserformConfig {
    /// `[logging]`
    pub logging: LoggingConfig,
    /// `[countries]`
    pub countries: CountriesConfig,
    /// `[form]`
    pub form: FormPolicy,
    /// `[session]`
    pub session: SessionConfig,
}

impl UserformConfig {
    /// Name used for the config directory and in user-facing hints.
    pub fn project_name() -> &'static str {
        "userform"
    }

    /// `<config dir>/userform/config.toml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::project_name()).join("config.toml"))
    }

    /// Resolves the config path from an explicit argument, the environment,
    /// or the platform default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => Self::default_config_path(),
        }
    }

    /// Loads the configuration.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) if explicit.is_some() => Err(Error::config(format!(
                "Config file does not exist at {}",
                path.display()
            ))),
            _ => Ok(Self::default()),
        }
    }

    /// Reads and parses a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parses TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Loads the configured country table, or the built-in one.
    pub fn load_countries(&self) -> Result<CountryTable> {
        match &self.countries.file {
            Some(path) => Ok(CountryTable::load(path)?),
            None => Ok(CountryTable::builtin()),
        }
    }
}
