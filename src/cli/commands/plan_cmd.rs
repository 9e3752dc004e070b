//! plan command - Print the cleanup plan

use anyhow::{Context as _, Result};

use super::resolve_settings;
use crate::cli::args::SettingsArgs;
use crate::core::config::Config;
use crate::core::types::LanguageVariant;
use crate::engine::runner;
use crate::engine::Context;
use crate::ui::output;

/// Print the customization plan for the resolved settings.
pub fn plan(ctx: &Context, settings: &SettingsArgs) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    println!("{}", render(ctx, &config, settings));
    Ok(())
}

fn render(ctx: &Context, config: &Config, settings: &SettingsArgs) -> String {
    let language = settings
        .language
        .map(LanguageVariant::from)
        .unwrap_or_else(|| config.default_language());
    let (options, policy) = resolve_settings(settings, config, language);

    output::debug(format!("failure policy: {}", policy), ctx.verbosity());
    runner::preview(None, &options)
}
