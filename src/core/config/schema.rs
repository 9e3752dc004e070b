//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order:
//! 1. `$CLEAN_REACT_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/clean-react/config.toml`
//! 3. `~/.clean-react/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Enumerated values are parsed into their core types by serde, so an
//! unknown language or package manager is a parse error. Unknown keys are
//! rejected as well.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::{FailurePolicy, LanguageVariant, PackageManager, StylingKind};

/// User configuration.
///
/// # Example
///
/// ```toml
/// default_language = "typescript"
/// styling = "plugin"
/// package_manager = "pnpm"
/// interactive = true
/// start_dev_server = false
/// on_command_failure = "abort"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Language preselected in the language prompt
    pub default_language: Option<LanguageVariant>,

    /// Tailwind integration to install
    pub styling: Option<StylingKind>,

    /// Package manager for generate/install/run
    pub package_manager: Option<PackageManager>,

    /// Default interactive mode
    pub interactive: Option<bool>,

    /// Start the dev server after installing
    pub start_dev_server: Option<bool>,

    /// Behaviour when an external command fails
    pub on_command_failure: Option<FailurePolicy>,
}

impl GlobalConfig {
    /// Set a value by key, parsing it the same way the file would be parsed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for unknown keys or values.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |e: crate::core::types::TypeError| ConfigError::InvalidValue(e.to_string());
        match key {
            "default_language" => self.default_language = Some(value.parse().map_err(invalid)?),
            "styling" => self.styling = Some(value.parse().map_err(invalid)?),
            "package_manager" => self.package_manager = Some(value.parse().map_err(invalid)?),
            "interactive" => self.interactive = Some(parse_bool(key, value)?),
            "start_dev_server" => self.start_dev_server = Some(parse_bool(key, value)?),
            "on_command_failure" => {
                self.on_command_failure = Some(value.parse().map_err(invalid)?)
            }
            _ => {
                return Err(ConfigError::InvalidValue(format!(
                    "unknown configuration key '{}', must be one of: {}",
                    key,
                    KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// Get a value by key, formatted as it would appear in the file.
    ///
    /// Returns `Ok(None)` when the key is valid but not set.
    pub fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let value = match key {
            "default_language" => self.default_language.map(|l| l.label().to_ascii_lowercase()),
            "styling" => self.styling.map(|s| s.to_string()),
            "package_manager" => self.package_manager.map(|p| p.to_string()),
            "interactive" => self.interactive.map(|b| b.to_string()),
            "start_dev_server" => self.start_dev_server.map(|b| b.to_string()),
            "on_command_failure" => self.on_command_failure.map(|p| p.to_string()),
            _ => {
                return Err(ConfigError::InvalidValue(format!(
                    "unknown configuration key '{}'",
                    key
                )))
            }
        };
        Ok(value)
    }
}

/// All settable keys, in display order.
pub const KEYS: [&str; 6] = [
    "default_language",
    "styling",
    "package_manager",
    "interactive",
    "start_dev_server",
    "on_command_failure",
];

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue(format!(
            "'{}' expects true or false, got '{}'",
            key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_file() {
        let config: GlobalConfig = toml::from_str(
            r#"
            default_language = "typescript"
            styling = "config-file"
            package_manager = "pnpm"
            interactive = false
            start_dev_server = false
            on_command_failure = "continue"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_language, Some(LanguageVariant::TypeScript));
        assert_eq!(config.styling, Some(StylingKind::ConfigFile));
        assert_eq!(config.package_manager, Some(PackageManager::Pnpm));
        assert_eq!(config.interactive, Some(false));
        assert_eq!(config.start_dev_server, Some(false));
        assert_eq!(config.on_command_failure, Some(FailurePolicy::Continue));
    }

    #[test]
    fn unknown_enum_value_rejected() {
        let result: Result<GlobalConfig, _> = toml::from_str("package_manager = \"cargo\"");
        assert!(result.is_err());
    }

    #[test]
    fn set_then_get() {
        let mut config = GlobalConfig::default();
        config.set("styling", "config-file").unwrap();
        config.set("start_dev_server", "no").unwrap();
        config.set("default_language", "ts").unwrap();

        assert_eq!(config.get("styling").unwrap().as_deref(), Some("config-file"));
        assert_eq!(config.get("start_dev_server").unwrap().as_deref(), Some("false"));
        assert_eq!(
            config.get("default_language").unwrap().as_deref(),
            Some("typescript")
        );
        assert_eq!(config.get("package_manager").unwrap(), None);
    }

    #[test]
    fn set_rejects_unknown_key_and_value() {
        let mut config = GlobalConfig::default();
        assert!(config.set("theme", "dark").is_err());
        assert!(config.set("interactive", "maybe").is_err());
        assert!(config.set("styling", "sass").is_err());
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn get_rejects_unknown_key() {
        assert!(GlobalConfig::default().get("trunk").is_err());
    }
}
