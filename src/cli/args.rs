//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--interactive` / `--no-interactive`: Control prompts
//! - `--quiet` / `-q`: Minimal output
//!
//! With no subcommand, `clean-react` behaves like `clean-react create` and
//! accepts the `create` flags directly. Those flags are rejected when a
//! subcommand follows them.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::types::{LanguageVariant, PackageManager, StylingKind};

/// clean-react - Scaffold a Vite + React app with Tailwind CSS and nothing else
#[derive(Parser, Debug)]
#[command(name = "clean-react")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if clean-react was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable interactive prompts
    #[arg(long = "interactive", global = true, conflicts_with = "no_interactive")]
    pub interactive_flag: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_interactive: bool,

    #[command(flatten)]
    pub create: CreateArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// Exits with a usage error when top-level `create` flags precede a
    /// subcommand.
    pub fn parse_args() -> Self {
        let cli: Self = Parser::parse();
        if let Err(err) = cli.check_create_flags() {
            err.exit();
        }
        cli
    }

    /// Reject top-level `create` flags combined with a subcommand.
    ///
    /// Global flags may appear anywhere, so clap's own
    /// `args_conflicts_with_subcommands` cannot be used here.
    pub fn check_create_flags(&self) -> Result<(), clap::Error> {
        if self.command.is_none() || self.create == CreateArgs::default() {
            return Ok(());
        }
        Err(Self::command().error(
            ErrorKind::ArgumentConflict,
            "create flags cannot be used with a subcommand; pass them after the subcommand",
        ))
    }

    /// Determine if interactive mode is enabled.
    ///
    /// Returns true if:
    /// - `--interactive` was explicitly set, OR
    /// - Neither `--no-interactive` nor `--quiet` was set, `configured` is
    ///   true, AND stdin is a TTY
    pub fn interactive(&self, configured: bool) -> bool {
        if self.interactive_flag {
            true
        } else if self.no_interactive || self.quiet {
            false
        } else {
            configured && std::io::stdin().is_terminal()
        }
    }

    /// The command to run; `create` when none was given.
    pub fn into_command(self) -> Command {
        match self.command {
            Some(command) => command,
            None => Command::Create(self.create),
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate a React app and clean it up (the default)
    #[command(
        long_about = "Generate a React app with create-vite and clean it up.\n\n\
            Asks for a project name and a language, runs create-vite with the \
            matching React template, removes the demo assets, replaces the root \
            component with a placeholder, sets up Tailwind CSS, installs \
            dependencies and starts the dev server.",
        after_help = "\
EXAMPLES:
    # Answer the prompts
    clean-react

    # No prompts
    clean-react --name shop --language typescript

    # See what would happen
    clean-react --name shop --language typescript --dry-run"
    )]
    Create(CreateArgs),

    /// Apply the cleanup to an already generated project
    #[command(
        long_about = "Apply the cleanup to an already generated Vite + React project.\n\n\
            Every step checks its target first; missing files are reported and \
            skipped. Running it twice leaves the same files as running it once."
    )]
    Customize {
        /// Project directory
        dir: PathBuf,

        /// Show what would be done without making changes
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Print the cleanup plan for the given settings
    Plan {
        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Get, set, or list configuration values
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `create`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateArgs {
    /// Project name (skips the name prompt)
    #[arg(long)]
    pub name: Option<String>,

    /// Show what would be done without running anything
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Settings shared by `create`, `customize` and `plan`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsArgs {
    /// Language variant (skips the language prompt)
    #[arg(long, value_enum)]
    pub language: Option<LanguageArg>,

    /// How Tailwind is wired in
    #[arg(long, value_enum)]
    pub styling: Option<StylingArg>,

    /// Package manager used to generate, install and run
    #[arg(long, value_enum)]
    pub package_manager: Option<PackageManagerArg>,

    /// Install dependencies but do not start the dev server
    #[arg(long)]
    pub no_start: bool,

    /// Keep going when an external command fails
    #[arg(long)]
    pub keep_going: bool,
}

/// Language variant argument.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageArg {
    #[value(alias = "js")]
    Javascript,
    #[value(alias = "ts")]
    Typescript,
}

impl From<LanguageArg> for LanguageVariant {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Javascript => LanguageVariant::JavaScript,
            LanguageArg::Typescript => LanguageVariant::TypeScript,
        }
    }
}

/// Tailwind integration argument.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylingArg {
    /// Tailwind v4 through the Vite plugin
    Plugin,
    /// Tailwind v3 with PostCSS and tailwind.config.js
    ConfigFile,
}

impl From<StylingArg> for StylingKind {
    fn from(arg: StylingArg) -> Self {
        match arg {
            StylingArg::Plugin => StylingKind::Plugin,
            StylingArg::ConfigFile => StylingKind::ConfigFile,
        }
    }
}

/// Package manager argument.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManagerArg {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl From<PackageManagerArg> for PackageManager {
    fn from(arg: PackageManagerArg) -> Self {
        match arg {
            PackageManagerArg::Npm => PackageManager::Npm,
            PackageManagerArg::Pnpm => PackageManager::Pnpm,
            PackageManagerArg::Yarn => PackageManager::Yarn,
            PackageManagerArg::Bun => PackageManager::Bun,
        }
    }
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("clean-react").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_is_create() {
        let cli = parse(&["--name", "shop", "--language", "ts"]);
        match cli.into_command() {
            Command::Create(args) => {
                assert_eq!(args.name.as_deref(), Some("shop"));
                assert_eq!(args.settings.language, Some(LanguageArg::Typescript));
            }
            other => panic!("expected create, got {:?}", other),
        }
    }

    #[test]
    fn explicit_create_subcommand() {
        let cli = parse(&["create", "--name", "shop", "--no-start", "--keep-going"]);
        match cli.into_command() {
            Command::Create(args) => {
                assert!(args.settings.no_start);
                assert!(args.settings.keep_going);
            }
            other => panic!("expected create, got {:?}", other),
        }
    }

    #[test]
    fn customize_takes_dir_and_settings() {
        let cli = parse(&["customize", "app", "--styling", "config-file"]);
        match cli.into_command() {
            Command::Customize { dir, settings, .. } => {
                assert_eq!(dir, PathBuf::from("app"));
                assert_eq!(settings.styling, Some(StylingArg::ConfigFile));
            }
            other => panic!("expected customize, got {:?}", other),
        }
    }

    #[test]
    fn create_flags_conflict_with_subcommands() {
        let cli = parse(&["--language", "ts", "plan"]);
        let err = cli.check_create_flags().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let cli = parse(&["--name", "shop", "customize", "app"]);
        assert!(cli.check_create_flags().is_err());
    }

    #[test]
    fn flags_after_the_subcommand_are_fine() {
        let cli = parse(&["--debug", "--cwd", "/tmp", "plan", "--language", "ts"]);
        assert!(cli.check_create_flags().is_ok());

        let cli = parse(&["--name", "shop", "--language", "ts"]);
        assert!(cli.check_create_flags().is_ok());
    }

    #[test]
    fn unknown_language_rejected() {
        let result = Cli::try_parse_from(["clean-react", "--language", "python"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_disables_interactive() {
        let cli = parse(&["--quiet"]);
        assert!(!cli.interactive(true));

        let cli = parse(&["--interactive"]);
        assert!(cli.interactive(false));
    }

    #[test]
    fn value_enums_map_to_core_types() {
        assert_eq!(LanguageVariant::from(LanguageArg::Javascript), LanguageVariant::JavaScript);
        assert_eq!(StylingKind::from(StylingArg::ConfigFile), StylingKind::ConfigFile);
        assert_eq!(PackageManager::from(PackageManagerArg::Bun), PackageManager::Bun);
    }
}
