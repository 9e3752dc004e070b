//! engine::process
//!
//! External command invocation.
//!
//! # Design
//!
//! Every external command (generator, package manager, Tailwind init, dev
//! server) is an [`Invocation`]: plain data naming a program, its
//! arguments, and where it runs. A [`CommandRunner`] executes it and does
//! not return until the process has exited. A non-zero exit is a typed
//! [`ProcessError`], never ignored.
//!
//! [`SystemRunner`] spawns real processes with inherited stdio, so their
//! output streams straight to the terminal. [`RecordingRunner`] records
//! invocations in memory for tests and can be told to fail.
//!
//! # Example
//!
//! ```
//! use clean_react::engine::process::{CommandRunner, Invocation, RecordingRunner};
//!
//! let runner = RecordingRunner::new();
//! let inv = Invocation::new("npm", ["install"]);
//! runner.run(&inv, std::path::Path::new("/tmp/app")).unwrap();
//!
//! assert_eq!(runner.invocations()[0].0.display_command(), "npm install");
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from running an external command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcessError {
    /// Program is not installed or not on PATH.
    #[error("'{program}' was not found on PATH")]
    NotFound { program: String },

    /// Process could not be started.
    #[error("failed to start '{command}': {message}")]
    SpawnFailed { command: String, message: String },

    /// Process exited unsuccessfully.
    #[error("'{command}' exited with {}", describe_exit(.code))]
    ExitStatus { command: String, code: Option<i32> },

    /// Working directory is missing.
    #[error("cannot run '{command}': directory '{}' does not exist", .dir.display())]
    MissingDirectory { command: String, dir: PathBuf },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

/// One external command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Executable name, resolved through PATH.
    pub program: String,
    /// Arguments, passed without shell interpretation.
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The command line as a user would type it.
    pub fn display_command(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Runs invocations to completion.
pub trait CommandRunner {
    /// Run `invocation` in `dir` and wait for it to exit.
    fn run(&self, invocation: &Invocation, dir: &Path) -> Result<(), ProcessError>;
}

/// Runner that spawns real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation, dir: &Path) -> Result<(), ProcessError> {
        let command = invocation.display_command();

        if !dir.is_dir() {
            return Err(ProcessError::MissingDirectory {
                command,
                dir: dir.to_path_buf(),
            });
        }

        // Resolve through PATH so `npm.cmd` is found on Windows.
        let program = which::which(&invocation.program).map_err(|_| ProcessError::NotFound {
            program: invocation.program.clone(),
        })?;

        let status = Command::new(program)
            .args(&invocation.args)
            .current_dir(dir)
            .status()
            .map_err(|e| ProcessError::SpawnFailed {
                command: command.clone(),
                message: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ProcessError::ExitStatus {
                command,
                code: status.code(),
            })
        }
    }
}

/// Runner that records invocations instead of spawning them.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping, so clones share
/// the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    inner: Arc<Mutex<RecordingInner>>,
}

#[derive(Default)]
struct RecordingInner {
    invocations: Vec<(Invocation, PathBuf)>,
    fail_program: Option<(String, i32)>,
    on_run: Option<SideEffect>,
}

type SideEffect = Arc<dyn Fn(&Invocation, &Path) + Send + Sync>;

impl std::fmt::Debug for RecordingInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingInner")
            .field("invocations", &self.invocations)
            .field("fail_program", &self.fail_program)
            .field("on_run", &self.on_run.is_some())
            .finish()
    }
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every invocation of `program` fail with exit `code`.
    pub fn fail_program(self, program: impl Into<String>, code: i32) -> Self {
        self.lock().fail_program = Some((program.into(), code));
        self
    }

    /// Run `effect` for every successful invocation, e.g. to materialize a
    /// template where the real generator would.
    pub fn on_run<F>(self, effect: F) -> Self
    where
        F: Fn(&Invocation, &Path) + Send + Sync + 'static,
    {
        self.lock().on_run = Some(Arc::new(effect));
        self
    }

    /// Recorded invocations with their working directories, in order.
    pub fn invocations(&self) -> Vec<(Invocation, PathBuf)> {
        self.lock().invocations.clone()
    }

    /// Recorded command lines, in order.
    pub fn commands(&self) -> Vec<String> {
        self.lock()
            .invocations
            .iter()
            .map(|(inv, _)| inv.display_command())
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RecordingInner> {
        // A panic while holding the lock only happens inside a failing test.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation, dir: &Path) -> Result<(), ProcessError> {
        let effect = {
            let mut inner = self.lock();
            inner
                .invocations
                .push((invocation.clone(), dir.to_path_buf()));

            if let Some((program, code)) = &inner.fail_program {
                if *program == invocation.program {
                    return Err(ProcessError::ExitStatus {
                        command: invocation.display_command(),
                        code: Some(*code),
                    });
                }
            }
            inner.on_run.clone()
        };

        if let Some(effect) = effect {
            effect(invocation, dir);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn display_command_joins_args() {
        let inv = Invocation::new("npm", ["create", "vite@latest", "app"]);
        assert_eq!(inv.display_command(), "npm create vite@latest app");
        assert_eq!(Invocation::new("npm", Vec::<String>::new()).display_command(), "npm");
    }

    #[test]
    fn recording_runner_records_in_order() {
        let runner = RecordingRunner::new();
        runner
            .run(&Invocation::new("npm", ["install"]), Path::new("/a"))
            .unwrap();
        runner
            .run(&Invocation::new("npm", ["run", "dev"]), Path::new("/a"))
            .unwrap();

        assert_eq!(runner.commands(), ["npm install", "npm run dev"]);
        assert_eq!(runner.invocations()[1].1, PathBuf::from("/a"));
    }

    #[test]
    fn recording_runner_fails_configured_program() {
        let runner = RecordingRunner::new().fail_program("npx", 2);
        let err = runner
            .run(&Invocation::new("npx", ["tailwindcss", "init"]), Path::new("/a"))
            .unwrap_err();

        assert_eq!(
            err,
            ProcessError::ExitStatus {
                command: "npx tailwindcss init".into(),
                code: Some(2)
            }
        );
        assert!(runner.run(&Invocation::new("npm", ["install"]), Path::new("/a")).is_ok());
        assert_eq!(runner.invocations().len(), 2);
    }

    #[test]
    fn recording_runner_clones_share_state() {
        let runner = RecordingRunner::new();
        let clone = runner.clone();
        clone
            .run(&Invocation::new("bun", ["install"]), Path::new("/a"))
            .unwrap();
        assert_eq!(runner.commands(), ["bun install"]);
    }

    #[test]
    fn system_runner_rejects_missing_dir() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("gone");
        let err = SystemRunner
            .run(&Invocation::new("npm", ["install"]), &missing)
            .unwrap_err();
        assert!(matches!(err, ProcessError::MissingDirectory { .. }));
    }

    #[test]
    fn system_runner_reports_unknown_program() {
        let temp = TempDir::new().unwrap();
        let err = SystemRunner
            .run(
                &Invocation::new("definitely-not-a-real-program-4f1c", Vec::<String>::new()),
                temp.path(),
            )
            .unwrap_err();
        assert!(matches!(err, ProcessError::NotFound { .. }));
    }

    #[test]
    fn error_messages() {
        let err = ProcessError::ExitStatus {
            command: "npm install".into(),
            code: Some(1),
        };
        assert_eq!(err.to_string(), "'npm install' exited with status 1");

        let err = ProcessError::ExitStatus {
            command: "npm run dev".into(),
            code: None,
        };
        assert_eq!(err.to_string(), "'npm run dev' exited with a signal");
    }
}
