//! Configuration file support for the oxname CLI.
//!
//! Configuration is stored at `~/.config/oxname/config.toml` (XDG standard)
//! or `~/Library/Application Support/com.oxidized.oxname/config.toml` on macOS.
//! Setting `OXNAME_CONFIG_DIR` replaces the directory part of that path.
//!
//! # Example configuration
//!
//! ```toml
//! [defaults]
//! delimiter = "/"
//! backend = "string"
//! json = false
//! ```
//!
//! Command-line flags win over the file; the file wins over built-in defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use oxname_core::Delimiter;

use crate::commands::Backend;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "OXNAME_CONFIG_DIR";

/// Main configuration structure
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Default settings applied to all commands
    #[serde(default)]
    pub defaults: Defaults,
}

/// Default settings
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Defaults {
    /// Delimiter used to read and write names (one character)
    pub delimiter: Option<String>,

    /// Storage backend (array, string)
    pub backend: Option<Backend>,

    /// Emit JSON instead of tables
    pub json: Option<bool>,
}

impl Config {
    /// Load configuration from the default path, or return empty config if not found.
    pub fn load() -> Result<Self> {
        let path = config_path()?;

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}

/// Get the path to the configuration file.
///
/// Uses `OXNAME_CONFIG_DIR` when set, otherwise the XDG config directory on
/// Linux and Application Support on macOS.
pub fn config_path() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir).join("config.toml"));
    }

    let base_dirs = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    #[cfg(target_os = "macos")]
    {
        let config_dir = base_dirs
            .home_dir()
            .join("Library/Application Support/com.oxidized.oxname");
        Ok(config_dir.join("config.toml"))
    }

    #[cfg(not(target_os = "macos"))]
    {
        let config_dir = base_dirs.config_dir().join("oxname");
        Ok(config_dir.join("config.toml"))
    }
}

/// Effective settings for one invocation, after merging flags over config.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub delimiter: Delimiter,
    pub backend: Backend,
    pub json: bool,
}

impl Settings {
    /// Merge command-line values over the config file's `[defaults]`.
    ///
    /// Delimiters from either source are validated here, so a bad value fails
    /// before any command runs.
    pub fn resolve(
        delimiter: Option<&str>,
        backend: Option<Backend>,
        json: bool,
        config: &Config,
    ) -> Result<Self> {
        let delimiter = match (delimiter, config.defaults.delimiter.as_deref()) {
            (Some(flag), _) => Delimiter::parse(flag).context("Invalid --delimiter")?,
            (None, Some(configured)) => Delimiter::parse(configured)
                .context("Invalid delimiter in config file [defaults]")?,
            (None, None) => Delimiter::DEFAULT,
        };

        Ok(Self {
            delimiter,
            backend: backend.or(config.defaults.backend).unwrap_or_default(),
            json: json || config.defaults.json.unwrap_or(false),
        })
    }
}
