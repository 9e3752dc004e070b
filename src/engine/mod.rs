//! engine
//!
//! Orchestrates a run: Generate -> Plan -> Execute.
//!
//! # Architecture
//!
//! 1. **Generate**: Run `create-vite` in the parent directory and wait for it
//! 2. **Plan**: Build the customization plan as pure data
//! 3. **Execute**: Apply the plan through the single executor
//!
//! # Invariants
//!
//! - Every external command is awaited before the next step starts
//! - The engine never mutates files outside the generated project
//! - Only the Executor mutates the project; all changes flow through a plan
//!
//! # Example
//!
//! ```
//! use clean_react::core::types::LanguageVariant;
//! use clean_react::engine::customize::{self, CustomizeOptions};
//!
//! let plan = customize::plan(&CustomizeOptions::new(LanguageVariant::TypeScript));
//! assert!(plan.preview().contains("src/App.tsx"));
//! ```

pub mod customize;
pub mod exec;
pub mod invocations;
pub mod plan;
pub mod process;
pub mod runner;
pub mod styling;

// Re-exports for convenience
pub use customize::CustomizeOptions;
pub use exec::{ExecuteError, ExecuteReport, Executor, StepOutcome};
pub use plan::{Plan, PlanStep};
pub use process::{CommandRunner, Invocation, ProcessError, RecordingRunner, SystemRunner};
pub use runner::{ScaffoldError, ScaffoldOutcome, ScaffoldRequest};
pub use styling::StylingIntegration;

use std::path::PathBuf;

use crate::ui::output::Verbosity;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command behavior.
#[derive(Debug, Clone)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Interactive mode enabled.
    pub interactive: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            cwd: None,
            debug: false,
            quiet: false,
            interactive: true,
        }
    }
}

impl Context {
    /// Output verbosity for this run.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Directory the run is anchored in: `--cwd`, else the process cwd.
    pub fn working_dir(&self) -> std::io::Result<PathBuf> {
        match &self.cwd {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir(),
        }
    }
}
