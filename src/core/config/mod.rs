//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `$CLEAN_REACT_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/clean-react/config.toml`
//! 3. `~/.clean-react/config.toml` (canonical write location)
//!
//! # Example
//!
//! ```no_run
//! use clean_react::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Package manager: {}", config.package_manager());
//! println!("Styling: {}", config.styling());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, KEYS};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::types::{FailurePolicy, LanguageVariant, PackageManager, StylingKind};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "CLEAN_REACT_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}'")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}'")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Merged configuration.
///
/// Accessors apply defaults for anything the file leaves unset.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Values read from the config file
    pub global: GlobalConfig,
    /// Path to the config file (if loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed.
    /// A missing config file is not an error (defaults are used).
    pub fn load() -> Result<Config, ConfigError> {
        match Self::find()? {
            Some(path) => {
                let global = Self::read(&path)?;
                Ok(Config {
                    global,
                    path: Some(path),
                })
            }
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let global = Self::read(path)?;
        Ok(Config {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    /// Locate the config file to read, if any exists.
    fn find() -> Result<Option<PathBuf>, ConfigError> {
        // 1. Check $CLEAN_REACT_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Ok(Some(path));
            }
        }

        // 2. Check $XDG_CONFIG_HOME/clean-react/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("clean-react/config.toml");
            if path.exists() {
                return Ok(Some(path));
            }
        }

        // 3. Check ~/.clean-react/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".clean-react/config.toml");
            if path.exists() {
                return Ok(Some(path));
            }
        }

        Ok(None)
    }

    /// Read and parse a config file.
    fn read(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the path a `config set` should write to.
    ///
    /// This is the file that was loaded, or `$CLEAN_REACT_CONFIG` when set,
    /// or `~/.clean-react/config.toml`.
    pub fn write_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".clean-react/config.toml"))
    }

    /// Write config atomically.
    ///
    /// Creates parent directories if needed. Uses atomic write
    /// (write to temp file, then rename) to prevent corruption.
    pub fn write(path: &Path, config: &GlobalConfig) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Language preselected in the prompt.
    ///
    /// Defaults to JavaScript if not configured.
    pub fn default_language(&self) -> LanguageVariant {
        self.global
            .default_language
            .unwrap_or(LanguageVariant::JavaScript)
    }

    /// Tailwind integration.
    ///
    /// Defaults to the Vite plugin if not configured.
    pub fn styling(&self) -> StylingKind {
        self.global.styling.unwrap_or_default()
    }

    /// Package manager.
    ///
    /// Defaults to npm if not configured.
    pub fn package_manager(&self) -> PackageManager {
        self.global.package_manager.unwrap_or_default()
    }

    /// Check if interactive mode is enabled by default.
    ///
    /// Defaults to `true` if not configured.
    pub fn interactive(&self) -> bool {
        self.global.interactive.unwrap_or(true)
    }

    /// Check if the dev server starts after installing.
    ///
    /// Defaults to `true` if not configured.
    pub fn start_dev_server(&self) -> bool {
        self.global.start_dev_server.unwrap_or(true)
    }

    /// Failure policy for external commands.
    ///
    /// Defaults to aborting if not configured.
    pub fn failure_policy(&self) -> FailurePolicy {
        self.global.on_command_failure.unwrap_or_default()
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
