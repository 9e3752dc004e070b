//! engine::customize
//!
//! The customization planner.
//!
//! Turns a freshly generated `create-vite` React project into a minimal
//! Tailwind placeholder. The plan, in order:
//!
//! 1. Remove the default logo assets
//! 2. Overwrite the root component with a placeholder
//! 3. Clear the component stylesheet
//! 4. Replace the global stylesheet with Tailwind's bootstrap directives
//! 5. Add the Tailwind packages
//! 6. Enable Tailwind in the build (plugin config, or generated config file)
//! 7. Install everything and start the dev server
//!
//! Every file step is independently guarded, so a missing file only skips
//! its own step. Applying the plan twice leaves the same file contents as
//! applying it once.

use crate::core::paths;
use crate::core::templates;
use crate::core::types::{LanguageVariant, PackageManager, StylingKind};

use super::invocations;
use super::plan::{Plan, PlanStep};
use super::styling;

/// Command name recorded in customization plans.
pub const PLAN_COMMAND: &str = "customize";

/// Settings that shape the customization plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomizeOptions {
    pub language: LanguageVariant,
    pub styling: StylingKind,
    pub package_manager: PackageManager,
    /// Start the dev server after the final install.
    pub start_dev_server: bool,
}

impl CustomizeOptions {
    pub fn new(language: LanguageVariant) -> Self {
        Self {
            language,
            styling: StylingKind::default(),
            package_manager: PackageManager::default(),
            start_dev_server: true,
        }
    }
}

/// Build the customization plan.
pub fn plan(options: &CustomizeOptions) -> Plan {
    let styling = styling::integration(options.styling);
    let pm = options.package_manager;

    let mut plan = Plan::new(PLAN_COMMAND)
        .with_steps(paths::DEFAULT_ASSETS.iter().map(|path| PlanStep::RemoveFile {
            path: path.to_string(),
        }))
        .with_step(PlanStep::WriteFile {
            candidates: paths::app_component_candidates(options.language),
            contents: templates::APP_COMPONENT.to_string(),
            purpose: "replace the root component with a placeholder".to_string(),
        })
        .with_step(PlanStep::WriteFile {
            candidates: vec![paths::APP_CSS.to_string()],
            contents: String::new(),
            purpose: "drop the default component styles".to_string(),
        })
        .with_step(PlanStep::WriteFile {
            candidates: vec![paths::INDEX_CSS.to_string()],
            contents: styling.bootstrap_directives().to_string(),
            purpose: "bootstrap Tailwind".to_string(),
        })
        .with_step(styling.install_dependency(pm))
        .with_steps(styling.write_or_generate_config(pm, options.language))
        .with_step(PlanStep::RunCommand {
            invocation: invocations::install(pm),
            description: "Installing dependencies".to_string(),
        });

    if options.start_dev_server {
        plan = plan.with_step(PlanStep::RunCommand {
            invocation: invocations::run_script(pm, "dev"),
            description: "Running Vite".to_string(),
        });
    }

    plan
}
