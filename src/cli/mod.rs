//! cli
//!
//! Command-line interface layer for clean-react.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT mutate generated projects directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to the
//! [`crate::engine`] for execution. All project changes flow through the
//! engine's executor.

pub mod args;
pub mod commands;

pub use args::{Cli, Command, Shell};

use crate::core::config::Config;
use crate::engine;
use anyhow::Result;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    // A broken config file is reported by the commands that read it.
    let configured = Config::load().map(|c| c.interactive()).unwrap_or(true);

    let ctx = engine::Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
        interactive: cli.interactive(configured),
    };

    commands::dispatch(cli.into_command(), &ctx)
}
