//! engine::runner
//!
//! The scaffold pipeline.
//!
//! # Architecture
//!
//! ```text
//! generate (create-vite) -> plan -> execute
//! ```
//!
//! [`scaffold`] runs the generator in the parent directory, waits for it,
//! then plans and executes the customization inside the new project.
//! [`customize_existing`] skips generation and applies the same plan to a
//! project that already exists. [`preview`] renders what either would do
//! without touching anything.

use std::path::Path;

use thiserror::Error;

use super::customize::{self, CustomizeOptions};
use super::exec::{ExecuteError, ExecuteReport, Executor};
use super::invocations;
use super::process::{CommandRunner, Invocation, ProcessError};
use super::Context;
use crate::core::paths::ProjectLayout;
use crate::core::types::{FailurePolicy, ProjectName};
use crate::ui::output;

/// Errors from the scaffold pipeline.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The generator did not produce a project.
    #[error("project generation failed")]
    Generate(#[source] ProcessError),

    /// Customization stopped.
    #[error(transparent)]
    Execute(#[from] ExecuteError),
}

/// Everything a scaffold run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub name: ProjectName,
    pub options: CustomizeOptions,
    pub policy: FailurePolicy,
}

impl ScaffoldRequest {
    /// The generator invocation for this request.
    pub fn generator(&self) -> Invocation {
        invocations::create_project(
            self.options.package_manager,
            &self.name,
            self.options.language,
        )
    }
}

/// Result of a completed scaffold.
#[derive(Debug)]
pub struct ScaffoldOutcome {
    pub layout: ProjectLayout,
    pub report: ExecuteReport,
}

/// Generate a project under `parent` and customize it.
///
/// Generator failure always stops the run: with no project on disk there is
/// nothing to customize, whatever the failure policy says. An existing
/// `<parent>/<name>` is left for the generator to accept or refuse.
pub fn scaffold(
    request: &ScaffoldRequest,
    parent: &Path,
    runner: &dyn CommandRunner,
    ctx: &Context,
) -> Result<ScaffoldOutcome, ScaffoldError> {
    let verbosity = ctx.verbosity();
    let layout = ProjectLayout::for_project(parent, &request.name);

    let generator = request.generator();
    output::debug(
        format!("running `{}` in {}", generator.display_command(), parent.display()),
        verbosity,
    );
    runner
        .run(&generator, parent)
        .map_err(ScaffoldError::Generate)?;
    output::success(
        format!(
            "Created React app with {}: {}",
            request.options.language, request.name
        ),
        verbosity,
    );

    output::success(
        format!("Changed directory to {}", layout.root().display()),
        verbosity,
    );

    let report = customize_existing(&layout, &request.options, request.policy, runner, ctx)?;
    Ok(ScaffoldOutcome { layout, report })
}

/// Apply the customization plan to an existing project.
pub fn customize_existing(
    layout: &ProjectLayout,
    options: &CustomizeOptions,
    policy: FailurePolicy,
    runner: &dyn CommandRunner,
    ctx: &Context,
) -> Result<ExecuteReport, ExecuteError> {
    let plan = customize::plan(options);
    output::debug(format!("plan digest {}", plan.digest()), ctx.verbosity());

    Executor::new(layout, runner)
        .with_policy(policy)
        .execute(&plan, ctx)
}

/// Describe a run without performing it.
///
/// `generator` is shown first when present; the customization plan and its
/// digest follow.
pub fn preview(generator: Option<&Invocation>, options: &CustomizeOptions) -> String {
    let plan = customize::plan(options);
    let mut out = String::new();

    if let Some(generator) = generator {
        out.push_str(&format!("Generate: {}\n", generator.display_command()));
    }
    out.push_str(&format!(
        "Customize ({} steps, {} commands):\n",
        plan.step_count(),
        plan.command_count()
    ));
    out.push_str(&plan.preview());
    out.push_str(&format!("\nDigest: {}", plan.digest()));
    out
}
