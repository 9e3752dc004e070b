//! engine::plan
//!
//! Deterministic customization plans.
//!
//! # Architecture
//!
//! A plan is the sole intermediate representation between the user's
//! choices and mutation of the generated project. Plans are:
//! - **Deterministic**: Same settings always produce the same plan
//! - **Previewable**: Shown by `--dry-run` and `clean-react plan`
//! - **Serializable**: Hashed into a stable digest
//! - **Typed**: Steps carry template-relative paths, never absolute ones
//!
//! # Invariants
//!
//! - Planner does not perform I/O
//! - Every file step is guarded: the executor checks existence right
//!   before acting and skips with a warning when the target is absent
//! - No step creates a file that an earlier step removed
//!
//! # Example
//!
//! ```
//! use clean_react::engine::plan::{Plan, PlanStep};
//!
//! let plan = Plan::new("customize")
//!     .with_step(PlanStep::RemoveFile {
//!         path: "public/vite.svg".to_string(),
//!     })
//!     .with_step(PlanStep::WriteFile {
//!         candidates: vec!["src/App.css".to_string()],
//!         contents: String::new(),
//!         purpose: "clear default styles".to_string(),
//!     });
//!
//! assert!(!plan.is_empty());
//! assert_eq!(plan.step_count(), 2);
//! ```

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::process::Invocation;

/// A typed plan step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlanStep {
    /// Delete a file if it exists.
    RemoveFile {
        /// Template-relative path.
        path: String,
    },

    /// Overwrite the first existing candidate with fixed contents.
    ///
    /// Candidates are probed in order and probing stops at the first hit,
    /// so later candidates are never touched when an earlier one exists.
    /// Nothing is created when no candidate exists.
    WriteFile {
        /// Template-relative paths, most preferred first.
        candidates: Vec<String>,
        /// Full replacement contents (empty clears the file).
        contents: String,
        /// Human-readable reason for the write.
        purpose: String,
    },

    /// Run an external command in the project directory.
    RunCommand {
        /// The command to run.
        invocation: Invocation,
        /// Human-readable description, shown before the command runs.
        description: String,
    },
}

impl PlanStep {
    /// Template-relative paths this step may mutate.
    pub fn touched_paths(&self) -> Vec<&str> {
        match self {
            PlanStep::RemoveFile { path } => vec![path.as_str()],
            PlanStep::WriteFile { candidates, .. } => {
                candidates.iter().map(String::as_str).collect()
            }
            PlanStep::RunCommand { .. } => vec![],
        }
    }

    /// Whether this step edits files directly (as opposed to through a
    /// command).
    pub fn is_file_step(&self) -> bool {
        matches!(self, PlanStep::RemoveFile { .. } | PlanStep::WriteFile { .. })
    }

    /// Get a human-readable description of this step.
    pub fn description(&self) -> String {
        match self {
            PlanStep::RemoveFile { path } => format!("Remove {}", path),
            PlanStep::WriteFile {
                candidates,
                contents,
                purpose,
            } => {
                let target = candidates.join(" or ");
                if contents.is_empty() {
                    format!("Clear {}: {}", target, purpose)
                } else {
                    format!("Overwrite {}: {}", target, purpose)
                }
            }
            PlanStep::RunCommand {
                invocation,
                description,
            } => {
                format!("Run `{}`: {}", invocation.display_command(), description)
            }
        }
    }
}

/// A customization plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    /// Command that generated this plan.
    pub command: String,
    /// Ordered steps to execute.
    pub steps: Vec<PlanStep>,
}

impl Plan {
    /// Create a new empty plan.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            steps: vec![],
        }
    }

    /// Add a step to the plan (builder pattern).
    pub fn with_step(mut self, step: PlanStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Add multiple steps.
    pub fn with_steps(mut self, steps: impl IntoIterator<Item = PlanStep>) -> Self {
        self.steps.extend(steps);
        self
    }

    /// Compute a digest of the plan.
    ///
    /// The digest is a SHA-256 hash of the canonical JSON serialization,
    /// so two runs with the same settings report the same digest.
    ///
    /// # Example
    ///
    /// ```
    /// use clean_react::engine::plan::{Plan, PlanStep};
    ///
    /// let plan = Plan::new("test")
    ///     .with_step(PlanStep::RemoveFile { path: "public/vite.svg".to_string() });
    ///
    /// let digest = plan.digest();
    /// assert!(digest.starts_with("sha256:"));
    /// ```
    pub fn digest(&self) -> String {
        let json = serde_json::to_string(&self).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        let hash = hasher.finalize();
        format!("sha256:{}", hex::encode(hash))
    }

    /// Check if the plan is empty (no-op).
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get the number of steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Get the number of external commands.
    pub fn command_count(&self) -> usize {
        self.steps.iter().filter(|s| !s.is_file_step()).count()
    }

    /// Numbered step descriptions, one per line.
    pub fn preview(&self) -> String {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{:>2}. {}", i + 1, step.description()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod plan_step {
        use super::*;

        #[test]
        fn remove_file() {
            let step = PlanStep::RemoveFile {
                path: "src/assets/react.svg".to_string(),
            };

            assert!(step.is_file_step());
            assert_eq!(step.touched_paths(), ["src/assets/react.svg"]);
            assert_eq!(step.description(), "Remove src/assets/react.svg");
        }

        #[test]
        fn write_file_clear_vs_overwrite() {
            let clear = PlanStep::WriteFile {
                candidates: vec!["src/App.css".to_string()],
                contents: String::new(),
                purpose: "drop default styles".to_string(),
            };
            assert!(clear.description().starts_with("Clear src/App.css"));

            let overwrite = PlanStep::WriteFile {
                candidates: vec!["src/App.tsx".to_string(), "src/App.jsx".to_string()],
                contents: "x".to_string(),
                purpose: "placeholder".to_string(),
            };
            assert_eq!(
                overwrite.description(),
                "Overwrite src/App.tsx or src/App.jsx: placeholder"
            );
            assert_eq!(overwrite.touched_paths().len(), 2);
        }

        #[test]
        fn run_command_touches_nothing() {
            let step = PlanStep::RunCommand {
                invocation: Invocation::new("npm", ["install"]),
                description: "Install dependencies".to_string(),
            };

            assert!(!step.is_file_step());
            assert!(step.touched_paths().is_empty());
            assert_eq!(step.description(), "Run `npm install`: Install dependencies");
        }

        #[test]
        fn serde_tagged() {
            let step = PlanStep::RemoveFile {
                path: "public/vite.svg".to_string(),
            };
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(json, r#"{"type":"remove_file","path":"public/vite.svg"}"#);
        }
    }

    mod plan {
        use super::*;

        fn sample() -> Plan {
            Plan::new("customize")
                .with_step(PlanStep::RemoveFile {
                    path: "public/vite.svg".to_string(),
                })
                .with_step(PlanStep::RunCommand {
                    invocation: Invocation::new("npm", ["install"]),
                    description: "Install".to_string(),
                })
        }

        #[test]
        fn empty_plan() {
            let plan = Plan::new("customize");
            assert!(plan.is_empty());
            assert_eq!(plan.step_count(), 0);
            assert_eq!(plan.preview(), "");
        }

        #[test]
        fn counts() {
            let plan = sample();
            assert_eq!(plan.step_count(), 2);
            assert_eq!(plan.command_count(), 1);
        }

        #[test]
        fn digest_is_stable() {
            assert_eq!(sample().digest(), sample().digest());
            assert_eq!(sample().digest().len(), "sha256:".len() + 64);
        }

        #[test]
        fn digest_changes_with_steps() {
            let other = sample().with_step(PlanStep::RemoveFile {
                path: "src/assets/react.svg".to_string(),
            });
            assert_ne!(sample().digest(), other.digest());
        }

        #[test]
        fn preview_numbers_steps() {
            let preview = sample().preview();
            let lines: Vec<_> = preview.lines().collect();
            assert_eq!(lines[0], " 1. Remove public/vite.svg");
            assert_eq!(lines[1], " 2. Run `npm install`: Install");
        }
    }
}
