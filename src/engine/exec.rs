//! engine::exec
//!
//! The plan executor.
//!
//! # Architecture
//!
//! The Executor is the only component that mutates a generated project.
//! It walks a [`Plan`] in order and applies each step against a
//! [`ProjectLayout`].
//!
//! # Executor Contract
//!
//! The executor MUST:
//! 1. Check a file step's target immediately before acting on it
//! 2. Skip a file step whose target is absent, with a warning naming it
//! 3. Never create a file that did not exist
//! 4. Wait for every command to exit before starting the next step
//! 5. On a failed command, stop (abort policy) or warn and carry on
//!    (continue policy)
//!
//! # Invariants
//!
//! - A missing file affects only its own step
//! - File contents after two runs equal file contents after one run
//! - I/O errors other than a vanished target always stop execution
//!
//! # Example
//!
//! ```
//! use clean_react::core::paths::ProjectLayout;
//! use clean_react::engine::exec::Executor;
//! use clean_react::engine::plan::{Plan, PlanStep};
//! use clean_react::engine::process::RecordingRunner;
//! use clean_react::engine::Context;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let layout = ProjectLayout::new(dir.path());
//! let runner = RecordingRunner::new();
//! let plan = Plan::new("customize").with_step(PlanStep::RemoveFile {
//!     path: "public/vite.svg".to_string(),
//! });
//!
//! let ctx = Context { quiet: true, ..Context::default() };
//! let report = Executor::new(&layout, &runner).execute(&plan, &ctx).unwrap();
//! assert_eq!(report.skipped(), 1);
//! ```

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::plan::{Plan, PlanStep};
use super::process::{CommandRunner, Invocation, ProcessError};
use super::Context;
use crate::core::paths::ProjectLayout;
use crate::core::types::FailurePolicy;
use crate::ui::output::{self, Verbosity};

/// Errors from execution.
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// The project directory is not there.
    #[error("project directory '{}' does not exist", .0.display())]
    MissingProject(PathBuf),

    /// A file operation failed.
    #[error("failed to {action} '{}'", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        source: io::Error,
    },

    /// An external command failed under the abort policy.
    #[error("{description} failed")]
    CommandFailed {
        description: String,
        source: ProcessError,
    },
}

/// What happened to one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step took effect. Carries the path or command acted on.
    Applied(String),
    /// The target was absent. Carries the path(s) probed.
    Skipped(String),
    /// The command failed and the continue policy let execution go on.
    Failed(ProcessError),
}

impl StepOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, StepOutcome::Applied(_))
    }
}

/// Per-step outcomes of one execution, in plan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecuteReport {
    pub outcomes: Vec<StepOutcome>,
}

impl ExecuteReport {
    /// Number of steps that took effect.
    pub fn applied(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_applied()).count()
    }

    /// Number of steps skipped because the target was missing.
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, StepOutcome::Skipped(_)))
            .count()
    }

    /// Number of commands that failed without stopping execution.
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, StepOutcome::Failed(_)))
            .count()
    }

    /// Whether every step took effect.
    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(StepOutcome::is_applied)
    }

    /// One-line summary, e.g. `7 applied, 2 skipped, 0 failed`.
    pub fn summary(&self) -> String {
        format!(
            "{} applied, {} skipped, {} failed",
            self.applied(),
            self.skipped(),
            self.failed()
        )
    }
}

/// The plan executor.
pub struct Executor<'a> {
    layout: &'a ProjectLayout,
    runner: &'a dyn CommandRunner,
    policy: FailurePolicy,
}

impl<'a> Executor<'a> {
    /// Create an executor that aborts on the first failed command.
    pub fn new(layout: &'a ProjectLayout, runner: &'a dyn CommandRunner) -> Self {
        Self {
            layout,
            runner,
            policy: FailurePolicy::Abort,
        }
    }

    /// Set the command failure policy (builder pattern).
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Execute a plan.
    ///
    /// Steps run strictly in order. Returns the per-step report, or the
    /// first error that stopped execution.
    pub fn execute(&self, plan: &Plan, ctx: &Context) -> Result<ExecuteReport, ExecuteError> {
        let verbosity = ctx.verbosity();

        if !self.layout.exists() {
            return Err(ExecuteError::MissingProject(self.layout.root().to_path_buf()));
        }

        output::debug(
            format!("executing {} ({} steps)", plan.command, plan.step_count()),
            verbosity,
        );

        let mut report = ExecuteReport::default();
        for step in &plan.steps {
            output::debug(step.description(), verbosity);
            let outcome = match step {
                PlanStep::RemoveFile { path } => self.remove_file(path, verbosity)?,
                PlanStep::WriteFile {
                    candidates,
                    contents,
                    ..
                } => self.write_file(candidates, contents, verbosity)?,
                PlanStep::RunCommand {
                    invocation,
                    description,
                } => self.run_command(invocation, description, verbosity)?,
            };
            report.outcomes.push(outcome);
        }

        output::debug(format!("done: {}", report.summary()), verbosity);
        Ok(report)
    }

    fn remove_file(&self, path: &str, verbosity: Verbosity) -> Result<StepOutcome, ExecuteError> {
        let target = self.layout.resolve(path);
        if !target.is_file() {
            return Ok(skip(path, verbosity));
        }

        match fs::remove_file(&target) {
            Ok(()) => {
                output::success(format!("Removed {}", path), verbosity);
                Ok(StepOutcome::Applied(path.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(skip(path, verbosity)),
            Err(source) => Err(ExecuteError::Io {
                action: "remove",
                path: target,
                source,
            }),
        }
    }

    fn write_file(
        &self,
        candidates: &[String],
        contents: &str,
        verbosity: Verbosity,
    ) -> Result<StepOutcome, ExecuteError> {
        let found = candidates
            .iter()
            .find(|candidate| self.layout.resolve(candidate).is_file());

        let Some(relative) = found else {
            return Ok(skip(&candidates.join(" or "), verbosity));
        };

        let target = self.layout.resolve(relative);
        // Open without `create` so a file deleted since the existence check stays deleted.
        let written = fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&target)
            .and_then(|mut file| io::Write::write_all(&mut file, contents.as_bytes()));

        match written {
            Ok(()) => {
                let verb = if contents.is_empty() {
                    "Cleared"
                } else {
                    "Modified"
                };
                output::success(format!("{}: {}", verb, relative), verbosity);
                Ok(StepOutcome::Applied(relative.clone()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(skip(relative, verbosity)),
            Err(source) => Err(ExecuteError::Io {
                action: "write",
                path: target,
                source,
            }),
        }
    }

    fn run_command(
        &self,
        invocation: &Invocation,
        description: &str,
        verbosity: Verbosity,
    ) -> Result<StepOutcome, ExecuteError> {
        output::info(description, verbosity);

        match self.runner.run(invocation, self.layout.root()) {
            Ok(()) => Ok(StepOutcome::Applied(invocation.display_command())),
            Err(source) => match self.policy {
                FailurePolicy::Abort => Err(ExecuteError::CommandFailed {
                    description: description.to_string(),
                    source,
                }),
                FailurePolicy::Continue => {
                    output::warn(format!("{}; continuing", source), verbosity);
                    Ok(StepOutcome::Failed(source))
                }
            },
        }
    }
}

fn skip(path: &str, verbosity: Verbosity) -> StepOutcome {
    output::warn(output::missing_file_warning(path), verbosity);
    StepOutcome::Skipped(path.to_string())
}
