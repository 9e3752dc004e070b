//! ui::prompts
//!
//! Interactive prompts.
//!
//! # Design
//!
//! Prompts are only shown in interactive mode. In non-interactive mode,
//! every answer must come from a flag, otherwise collection fails with
//! [`PromptError::NotInteractive`] rather than guessing.
//!
//! The terminal implementation uses `dialoguer`. Tests drive the same
//! collection logic through [`ScriptedPrompter`].

use std::collections::VecDeque;
use std::io;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use thiserror::Error;

use crate::core::types::{LanguageVariant, ProjectName};

/// Question asked for the project name.
pub const NAME_PROMPT: &str = "Enter the name of your React app:";

/// Question asked for the language variant.
pub const LANGUAGE_PROMPT: &str = "Select the language you want to use:";

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled by user")]
    Cancelled,

    #[error("not in interactive mode; pass {0}")]
    NotInteractive(&'static str),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<dialoguer::Error> for PromptError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(e) if is_abort(&e) => PromptError::Cancelled,
            dialoguer::Error::IO(e) => PromptError::IoError(e.to_string()),
        }
    }
}

fn is_abort(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof
    )
}

/// A source of answers to questions.
pub trait Prompter {
    /// Ask for free text. `validate` is applied to every answer; an answer
    /// it rejects is asked again.
    fn input(
        &mut self,
        message: &str,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Result<String, PromptError>;

    /// Ask for one of `options`, returning its index.
    fn select(
        &mut self,
        message: &str,
        options: &[&str],
        default: usize,
    ) -> Result<usize, PromptError>;
}

/// Prompter backed by the controlling terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn input(
        &mut self,
        message: &str,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Result<String, PromptError> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .validate_with(|s: &String| validate(s))
            .interact_text()?;
        Ok(answer)
    }

    fn select(
        &mut self,
        message: &str,
        options: &[&str],
        default: usize,
    ) -> Result<usize, PromptError> {
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(options)
            .default(default)
            .interact_opt()?
            .ok_or(PromptError::Cancelled)
    }
}

/// Prompter that replays canned answers.
///
/// Answers are consumed in order. Running out of answers behaves like the
/// user aborting the session. Every question asked is recorded.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn input(
        &mut self,
        message: &str,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Result<String, PromptError> {
        loop {
            self.asked.push(message.to_string());
            let answer = self.answers.pop_front().ok_or(PromptError::Cancelled)?;
            if validate(&answer).is_ok() {
                return Ok(answer);
            }
        }
    }

    fn select(
        &mut self,
        message: &str,
        options: &[&str],
        default: usize,
    ) -> Result<usize, PromptError> {
        self.asked.push(message.to_string());
        let answer = self.answers.pop_front().ok_or(PromptError::Cancelled)?;
        if answer.is_empty() {
            return Ok(default);
        }
        options
            .iter()
            .position(|o| *o == answer)
            .ok_or_else(|| PromptError::IoError(format!("'{}' is not an option", answer)))
    }
}

/// The two answers a scaffold run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub name: ProjectName,
    pub language: LanguageVariant,
}

/// Collect the project name and language.
///
/// Answers already supplied (from flags) are not asked again. The name is
/// asked first, then the language, with `default_language` preselected.
pub fn collect(
    prompter: &mut dyn Prompter,
    name: Option<ProjectName>,
    language: Option<LanguageVariant>,
    default_language: LanguageVariant,
    interactive: bool,
) -> Result<Answers, PromptError> {
    let name = match name {
        Some(name) => name,
        None if !interactive => return Err(PromptError::NotInteractive("--name")),
        None => {
            let validate = |s: &str| ProjectName::new(s).map(|_| ()).map_err(|e| e.to_string());
            let answer = prompter.input(NAME_PROMPT, &validate)?;
            ProjectName::new(answer).map_err(|e| PromptError::IoError(e.to_string()))?
        }
    };

    let language = match language {
        Some(language) => language,
        None if !interactive => return Err(PromptError::NotInteractive("--language")),
        None => {
            let labels: Vec<&str> = LanguageVariant::ALL.iter().map(|l| l.label()).collect();
            let index = prompter.select(LANGUAGE_PROMPT, &labels, default_language.index())?;
            LanguageVariant::ALL
                .get(index)
                .copied()
                .ok_or_else(|| PromptError::IoError(format!("invalid selection {}", index)))?
        }
    };

    Ok(Answers { name, language })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asks_name_then_language() {
        let mut prompter = ScriptedPrompter::new(["shop", "TypeScript"]);
        let answers = collect(
            &mut prompter,
            None,
            None,
            LanguageVariant::JavaScript,
            true,
        )
        .unwrap();

        assert_eq!(answers.name.as_str(), "shop");
        assert_eq!(answers.language, LanguageVariant::TypeScript);
        assert_eq!(prompter.asked(), [NAME_PROMPT, LANGUAGE_PROMPT]);
    }

    #[test]
    fn preset_answers_are_not_asked() {
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
        let answers = collect(
            &mut prompter,
            Some(ProjectName::new("blog").unwrap()),
            Some(LanguageVariant::JavaScript),
            LanguageVariant::TypeScript,
            true,
        )
        .unwrap();

        assert_eq!(answers.language, LanguageVariant::JavaScript);
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn invalid_name_is_asked_again() {
        let mut prompter = ScriptedPrompter::new(["", "../x", "ok-name", "JavaScript"]);
        let answers = collect(
            &mut prompter,
            None,
            None,
            LanguageVariant::JavaScript,
            true,
        )
        .unwrap();

        assert_eq!(answers.name.as_str(), "ok-name");
        assert_eq!(prompter.asked().len(), 4);
    }

    #[test]
    fn empty_selection_takes_default() {
        let mut prompter = ScriptedPrompter::new(["app", ""]);
        let answers = collect(
            &mut prompter,
            None,
            None,
            LanguageVariant::TypeScript,
            true,
        )
        .unwrap();
        assert_eq!(answers.language, LanguageVariant::TypeScript);
    }

    #[test]
    fn aborted_session_is_cancelled() {
        let mut prompter = ScriptedPrompter::new(["app"]);
        let result = collect(
            &mut prompter,
            None,
            None,
            LanguageVariant::JavaScript,
            true,
        );
        assert!(matches!(result, Err(PromptError::Cancelled)));
    }

    #[test]
    fn non_interactive_requires_flags() {
        let mut prompter = ScriptedPrompter::new(["app", "JavaScript"]);
        let result = collect(
            &mut prompter,
            None,
            Some(LanguageVariant::JavaScript),
            LanguageVariant::JavaScript,
            false,
        );
        assert!(matches!(result, Err(PromptError::NotInteractive("--name"))));

        let result = collect(
            &mut prompter,
            Some(ProjectName::new("app").unwrap()),
            None,
            LanguageVariant::JavaScript,
            false,
        );
        assert!(matches!(result, Err(PromptError::NotInteractive("--language"))));
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn dialoguer_interrupt_maps_to_cancelled() {
        let err = dialoguer::Error::IO(io::Error::new(io::ErrorKind::Interrupted, "ctrl-c"));
        assert!(matches!(PromptError::from(err), PromptError::Cancelled));

        let err = dialoguer::Error::IO(io::Error::new(io::ErrorKind::Other, "broken"));
        assert!(matches!(PromptError::from(err), PromptError::IoError(_)));
    }
}
