//! create command - Generate a React app and clean it up

use anyhow::{Context as _, Result};

use super::resolve_settings;
use crate::cli::args::CreateArgs;
use crate::core::config::Config;
use crate::core::types::{LanguageVariant, ProjectName};
use crate::engine::process::{CommandRunner, SystemRunner};
use crate::engine::runner::{self, ScaffoldRequest};
use crate::engine::Context;
use crate::ui::output;
use crate::ui::prompts::{self, Prompter, TerminalPrompter};

/// Run the full flow with the terminal prompter and real processes.
pub fn create(ctx: &Context, args: CreateArgs) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let mut prompter = TerminalPrompter::new();
    create_with(ctx, &config, args, &mut prompter, &SystemRunner)
}

/// Run the full flow with the given prompter and runner.
pub fn create_with(
    ctx: &Context,
    config: &Config,
    args: CreateArgs,
    prompter: &mut dyn Prompter,
    runner: &dyn CommandRunner,
) -> Result<()> {
    let verbosity = ctx.verbosity();

    let name = args
        .name
        .map(ProjectName::new)
        .transpose()
        .context("Invalid project name")?;
    let language = args.settings.language.map(LanguageVariant::from);

    let answers = prompts::collect(
        prompter,
        name,
        language,
        config.default_language(),
        ctx.interactive,
    )?;
    output::debug(
        format!("answers: {} ({})", answers.name, answers.language),
        verbosity,
    );

    let (options, policy) = resolve_settings(&args.settings, config, answers.language);
    let request = ScaffoldRequest {
        name: answers.name,
        options,
        policy,
    };

    if args.dry_run {
        println!("{}", runner::preview(Some(&request.generator()), &request.options));
        return Ok(());
    }

    let parent = ctx
        .working_dir()
        .context("Failed to determine working directory")?;
    let outcome = runner::scaffold(&request, &parent, runner, ctx)?;

    if outcome.report.failed() > 0 {
        output::warn(
            format!("{} command(s) failed; see above", outcome.report.failed()),
            verbosity,
        );
    }
    output::info(
        format!("Successfully created a clean React app: {}", request.name),
        verbosity,
    );
    output::print(outcome.report.summary(), verbosity);

    Ok(())
}
