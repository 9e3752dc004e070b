//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves settings (defaults < config file < flags)
//! 2. Calls the engine to execute the command
//! 3. Formats and displays output
//!
//! Handlers do NOT mutate generated projects directly.

mod completion;
mod config_cmd;
mod create;
mod customize;
mod plan_cmd;

// Re-export command functions for testing and direct invocation
pub use completion::{completion, completion_to};
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use create::{create, create_with};
pub use customize::{customize, customize_with};
pub use plan_cmd::plan;

use crate::cli::args::{Command, ConfigAction, SettingsArgs};
use crate::core::config::Config;
use crate::core::types::{FailurePolicy, LanguageVariant};
use crate::engine::customize::CustomizeOptions;
use crate::engine::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Create(args) => create(ctx, args),
        Command::Customize {
            dir,
            dry_run,
            settings,
        } => customize(ctx, &dir, dry_run, &settings),
        Command::Plan { settings } => plan(ctx, &settings),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion(shell),
    }
}

/// Merge flags over the config file for one run.
pub(crate) fn resolve_settings(
    settings: &SettingsArgs,
    config: &Config,
    language: LanguageVariant,
) -> (CustomizeOptions, FailurePolicy) {
    let options = CustomizeOptions {
        language,
        styling: settings
            .styling
            .map(Into::into)
            .unwrap_or_else(|| config.styling()),
        package_manager: settings
            .package_manager
            .map(Into::into)
            .unwrap_or_else(|| config.package_manager()),
        start_dev_server: !settings.no_start && config.start_dev_server(),
    };

    let policy = if settings.keep_going {
        FailurePolicy::Continue
    } else {
        config.failure_policy()
    };

    (options, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{PackageManagerArg, StylingArg};
    use crate::core::config::GlobalConfig;
    use crate::core::types::{PackageManager, StylingKind};

    fn config(global: GlobalConfig) -> Config {
        let mut config = Config::default();
        config.global = global;
        config
    }

    #[test]
    fn defaults_apply_without_flags_or_file() {
        let (options, policy) = resolve_settings(
            &SettingsArgs::default(),
            &Config::default(),
            LanguageVariant::JavaScript,
        );

        assert_eq!(options, CustomizeOptions::new(LanguageVariant::JavaScript));
        assert_eq!(policy, FailurePolicy::Abort);
    }

    #[test]
    fn file_overrides_defaults() {
        let config = config(GlobalConfig {
            package_manager: Some(PackageManager::Pnpm),
            start_dev_server: Some(false),
            on_command_failure: Some(FailurePolicy::Continue),
            ..GlobalConfig::default()
        });
        let (options, policy) =
            resolve_settings(&SettingsArgs::default(), &config, LanguageVariant::TypeScript);

        assert_eq!(options.package_manager, PackageManager::Pnpm);
        assert!(!options.start_dev_server);
        assert_eq!(policy, FailurePolicy::Continue);
    }

    #[test]
    fn flags_override_file() {
        let config = config(GlobalConfig {
            styling: Some(StylingKind::Plugin),
            package_manager: Some(PackageManager::Yarn),
            ..GlobalConfig::default()
        });
        let settings = SettingsArgs {
            styling: Some(StylingArg::ConfigFile),
            package_manager: Some(PackageManagerArg::Bun),
            no_start: true,
            keep_going: true,
            ..SettingsArgs::default()
        };
        let (options, policy) = resolve_settings(&settings, &config, LanguageVariant::JavaScript);

        assert_eq!(options.styling, StylingKind::ConfigFile);
        assert_eq!(options.package_manager, PackageManager::Bun);
        assert!(!options.start_dev_server);
        assert_eq!(policy, FailurePolicy::Continue);
    }
}
