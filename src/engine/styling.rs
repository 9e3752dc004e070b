//! engine::styling
//!
//! Tailwind CSS integrations.
//!
//! # Design
//!
//! Two mutually exclusive ways of wiring Tailwind into a Vite project exist.
//! Both implement [`StylingIntegration`], so the customization planner
//! treats them uniformly:
//!
//! | capability                 | [`PluginIntegration`] (v4)        | [`ConfigFileIntegration`] (v3)                 |
//! |----------------------------|-----------------------------------|------------------------------------------------|
//! | `install_dependency`       | `tailwindcss @tailwindcss/vite`   | `-D tailwindcss@3 postcss autoprefixer`        |
//! | `write_or_generate_config` | overwrite `vite.config.{ts,js}`   | `tailwindcss init -p`, overwrite `tailwind.config.js` |
//! | `bootstrap_directives`     | `@import "tailwindcss";`          | `@tailwind base/components/utilities;`         |
//!
//! The integration is chosen once per run with [`integration`].

use crate::core::paths;
use crate::core::templates;
use crate::core::types::{LanguageVariant, PackageManager, StylingKind};

use super::invocations;
use super::plan::PlanStep;

/// A way of enabling Tailwind in the generated project.
pub trait StylingIntegration {
    /// Which integration this is.
    fn kind(&self) -> StylingKind;

    /// Step that adds the Tailwind packages to the project.
    fn install_dependency(&self, pm: PackageManager) -> PlanStep;

    /// Steps that configure the build so Tailwind runs.
    fn write_or_generate_config(&self, pm: PackageManager, language: LanguageVariant)
        -> Vec<PlanStep>;

    /// Contents of the global stylesheet that activate Tailwind.
    fn bootstrap_directives(&self) -> &'static str;
}

/// Get the integration for `kind`.
pub fn integration(kind: StylingKind) -> &'static dyn StylingIntegration {
    match kind {
        StylingKind::Plugin => &PluginIntegration,
        StylingKind::ConfigFile => &ConfigFileIntegration,
    }
}

/// Tailwind v4 through the `@tailwindcss/vite` plugin.
#[derive(Debug, Clone, Copy)]
pub struct PluginIntegration;

impl StylingIntegration for PluginIntegration {
    fn kind(&self) -> StylingKind {
        StylingKind::Plugin
    }

    fn install_dependency(&self, pm: PackageManager) -> PlanStep {
        PlanStep::RunCommand {
            invocation: invocations::add_packages(pm, false, &["tailwindcss", "@tailwindcss/vite"]),
            description: "Installing Tailwind CSS with Vite plugin".to_string(),
        }
    }

    fn write_or_generate_config(
        &self,
        _pm: PackageManager,
        language: LanguageVariant,
    ) -> Vec<PlanStep> {
        vec![PlanStep::WriteFile {
            candidates: paths::vite_config_candidates(language),
            contents: templates::VITE_CONFIG_WITH_TAILWIND.to_string(),
            purpose: "enable the Tailwind Vite plugin".to_string(),
        }]
    }

    fn bootstrap_directives(&self) -> &'static str {
        templates::TAILWIND_V4_DIRECTIVES
    }
}

/// Tailwind v3 through PostCSS and a generated `tailwind.config.js`.
#[derive(Debug, Clone, Copy)]
pub struct ConfigFileIntegration;

impl StylingIntegration for ConfigFileIntegration {
    fn kind(&self) -> StylingKind {
        StylingKind::ConfigFile
    }

    fn install_dependency(&self, pm: PackageManager) -> PlanStep {
        PlanStep::RunCommand {
            invocation: invocations::add_packages(
                pm,
                true,
                &["tailwindcss@3", "postcss", "autoprefixer"],
            ),
            description: "Installing Tailwind CSS with PostCSS".to_string(),
        }
    }

    fn write_or_generate_config(
        &self,
        pm: PackageManager,
        _language: LanguageVariant,
    ) -> Vec<PlanStep> {
        vec![
            PlanStep::RunCommand {
                invocation: invocations::exec(pm, "tailwindcss", &["init", "-p"]),
                description: "Generating Tailwind and PostCSS config".to_string(),
            },
            PlanStep::WriteFile {
                candidates: vec![paths::TAILWIND_CONFIG.to_string()],
                contents: templates::TAILWIND_CONFIG.to_string(),
                purpose: "scan index.html and src/ for classes".to_string(),
            },
        ]
    }

    fn bootstrap_directives(&self) -> &'static str {
        templates::TAILWIND_V3_DIRECTIVES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integration_matches_kind() {
        for kind in [StylingKind::Plugin, StylingKind::ConfigFile] {
            assert_eq!(integration(kind).kind(), kind);
        }
    }

    #[test]
    fn plugin_overwrites_vite_config() {
        let steps = PluginIntegration
            .write_or_generate_config(PackageManager::Npm, LanguageVariant::TypeScript);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].touched_paths(), ["vite.config.ts", "vite.config.js"]);
        assert!(steps[0].is_file_step());
    }

    #[test]
    fn config_file_generates_then_overwrites() {
        let steps = ConfigFileIntegration
            .write_or_generate_config(PackageManager::Pnpm, LanguageVariant::JavaScript);
        assert_eq!(steps.len(), 2);
        match &steps[0] {
            PlanStep::RunCommand { invocation, .. } => {
                assert_eq!(invocation.display_command(), "pnpm exec tailwindcss init -p");
            }
            other => panic!("expected command, got {:?}", other),
        }
        assert_eq!(steps[1].touched_paths(), ["tailwind.config.js"]);
    }

    #[test]
    fn install_commands() {
        let step = PluginIntegration.install_dependency(PackageManager::Npm);
        assert!(step
            .description()
            .contains("npm install tailwindcss @tailwindcss/vite"));

        let step = ConfigFileIntegration.install_dependency(PackageManager::Npm);
        assert!(step
            .description()
            .contains("npm install -D tailwindcss@3 postcss autoprefixer"));
    }

    #[test]
    fn directives_differ() {
        assert_eq!(
            PluginIntegration.bootstrap_directives(),
            "@import \"tailwindcss\";\n"
        );
        assert!(ConfigFileIntegration
            .bootstrap_directives()
            .contains("@tailwind utilities;"));
    }
}
