//! Configuration with layered resolution
//!
//! Resolution order (highest priority first):
//! 1. CLI flags (applied via [`Config::apply_cli_overrides`])
//! 2. Environment variables (`WORDLE_UZ_*`)
//! 3. Config file (`--config`, else `wordle_uz.toml` in the working directory)
//! 4. Compiled defaults

use crate::wordlists::{COMMON, FULL, WordSource};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "wordle_uz.toml";

/// Errors raised while resolving configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid TOML in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid value for {field}: {message}")]
    Invalid { field: String, message: String },
}

/// Colour scheme of the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("unknown theme '{other}' (expected dark or light)")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dark => "dark",
            Self::Light => "light",
        })
    }
}

/// Word list locations; unset paths fall back to the embedded lists
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WordsConfig {
    pub common: Option<PathBuf>,
    pub full: Option<PathBuf>,
}

impl WordsConfig {
    #[must_use]
    pub fn common_source(&self) -> WordSource {
        WordSource::file_or_embedded(self.common.as_deref(), "common", COMMON)
    }

    #[must_use]
    pub fn full_source(&self) -> WordSource {
        WordSource::file_or_embedded(self.full.as_deref(), "full", FULL)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long a notification stays on screen
    pub notification_ms: u64,
    /// Ring the terminal bell with every notification
    pub bell: bool,
    pub theme: Theme,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_ms: 2000,
            bell: true,
            theme: Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directives
    pub filter: String,
    /// Write logs here instead of stderr
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "wordle_uz=warn".to_string(),
            file: None,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub words: WordsConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub common: Option<PathBuf>,
    pub full: Option<PathBuf>,
    pub theme: Option<Theme>,
    pub no_bell: bool,
}

impl Config {
    /// Resolve configuration from every layer
    ///
    /// An explicit `path` must exist; the default file is optional.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a config file cannot be read or parsed, or
    /// if the final values are out of range.
    pub fn load(path: Option<&Path>, cli: &CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.apply_cli_overrides(cli);
        config.validate()?;

        Ok(config)
    }

    /// Read a TOML config file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on invalid TOML.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `WORDLE_UZ_COMMON`, `WORDLE_UZ_WORDS` and `WORDLE_UZ_THEME`
    ///
    /// `lookup` resolves a variable name; pass `std::env::var` in production.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the variable if its value
    /// cannot be used.
    pub fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(path) = lookup("WORDLE_UZ_COMMON").filter(|v| !v.is_empty()) {
            self.words.common = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("WORDLE_UZ_WORDS").filter(|v| !v.is_empty()) {
            self.words.full = Some(PathBuf::from(path));
        }
        if let Some(theme) = lookup("WORDLE_UZ_THEME") {
            self.ui.theme = theme.parse().map_err(|message| ConfigError::Invalid {
                field: "WORDLE_UZ_THEME".to_string(),
                message,
            })?;
        }
        Ok(())
    }

    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(path) = &cli.common {
            self.words.common = Some(path.clone());
        }
        if let Some(path) = &cli.full {
            self.words.full = Some(path.clone());
        }
        if let Some(theme) = cli.theme {
            self.ui.theme = theme;
        }
        if cli.no_bell {
            self.ui.bell = false;
        }
    }

    /// Validate the configuration values
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=60_000).contains(&self.ui.notification_ms) {
            return Err(ConfigError::Invalid {
                field: "ui.notification_ms".to_string(),
                message: "must be between 1 and 60000".to_string(),
            });
        }
        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "log.filter".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
