//! customize command - Apply the cleanup to an existing project

use std::path::Path;

use anyhow::{bail, Context as _, Result};

use super::resolve_settings;
use crate::cli::args::SettingsArgs;
use crate::core::config::Config;
use crate::core::paths::ProjectLayout;
use crate::core::types::LanguageVariant;
use crate::engine::process::{CommandRunner, SystemRunner};
use crate::engine::runner;
use crate::engine::Context;
use crate::ui::output;

/// Customize `dir` using real processes.
pub fn customize(ctx: &Context, dir: &Path, dry_run: bool, settings: &SettingsArgs) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    customize_with(ctx, &config, dir, dry_run, settings, &SystemRunner)
}

/// Customize `dir` using the given runner.
///
/// A relative `dir` is taken relative to the working directory.
pub fn customize_with(
    ctx: &Context,
    config: &Config,
    dir: &Path,
    dry_run: bool,
    settings: &SettingsArgs,
    runner: &dyn CommandRunner,
) -> Result<()> {
    let verbosity = ctx.verbosity();
    let root = ctx
        .working_dir()
        .context("Failed to determine working directory")?
        .join(dir);
    let layout = ProjectLayout::new(root);

    if !layout.exists() {
        bail!("'{}' is not a directory", layout.root().display());
    }

    let language = match settings.language {
        Some(language) => LanguageVariant::from(language),
        None => layout.detect_language().unwrap_or_else(|| {
            output::debug("no App component or tsconfig.json found", verbosity);
            config.default_language()
        }),
    };
    output::debug(format!("language: {}", language), verbosity);

    let (options, policy) = resolve_settings(settings, config, language);

    if dry_run {
        println!("{}", runner::preview(None, &options));
        return Ok(());
    }

    let report = runner::customize_existing(&layout, &options, policy, runner, ctx)
        .with_context(|| format!("Failed to customize '{}'", layout.root().display()))?;

    output::info(
        format!("Cleaned up React app in {}", layout.root().display()),
        verbosity,
    );
    output::print(report.summary(), verbosity);

    Ok(())
}
