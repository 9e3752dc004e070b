//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`ProjectName`] - Validated project (and output directory) name
//! - [`LanguageVariant`] - JavaScript or TypeScript template flavour
//! - [`StylingKind`] - Which Tailwind integration to wire up
//! - [`PackageManager`] - Which package manager drives the generated project
//! - [`FailurePolicy`] - What to do when an external command fails
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use clean_react::core::types::{LanguageVariant, ProjectName};
//!
//! let name = ProjectName::new("my-app").unwrap();
//! assert_eq!(name.as_str(), "my-app");
//!
//! assert!(ProjectName::new("").is_err());
//! assert!(ProjectName::new("../escape").is_err());
//!
//! let lang: LanguageVariant = "ts".parse().unwrap();
//! assert_eq!(lang.template_id(), "react-ts");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid project name: {0}")]
    InvalidProjectName(String),

    #[error("unknown language '{0}', must be one of: javascript, typescript")]
    UnknownLanguage(String),

    #[error("unknown styling integration '{0}', must be one of: plugin, config-file")]
    UnknownStyling(String),

    #[error("unknown package manager '{0}', must be one of: npm, pnpm, yarn, bun")]
    UnknownPackageManager(String),

    #[error("unknown failure policy '{0}', must be one of: abort, continue")]
    UnknownFailurePolicy(String),
}

/// Maximum length of an npm package name.
const MAX_NAME_LEN: usize = 214;

/// A validated project name.
///
/// The name becomes both the output directory (`<cwd>/<name>`) and the
/// package name written by the generator, so it must be a single path
/// component that npm accepts:
/// - Cannot be empty, `.` or `..`
/// - Cannot contain `/` or `\`
/// - Cannot start with `.` or `_`
/// - Cannot contain whitespace, control characters, or any of `~'!()*:?"<>|`
/// - Cannot be longer than 214 characters
///
/// # Example
///
/// ```
/// use clean_react::core::types::ProjectName;
///
/// assert!(ProjectName::new("todo-app").is_ok());
/// assert!(ProjectName::new("@scope-less.name_2").is_ok());
///
/// assert!(ProjectName::new("..").is_err());
/// assert!(ProjectName::new("has space").is_err());
/// assert!(ProjectName::new(".hidden").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    /// Create a new validated project name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidProjectName` if the name is not usable as a
    /// directory and package name.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.trim().is_empty() {
            return Err(TypeError::InvalidProjectName(
                "project name cannot be empty".into(),
            ));
        }

        if name == "." || name == ".." {
            return Err(TypeError::InvalidProjectName(format!(
                "'{name}' is not a directory name"
            )));
        }

        if name.contains('/') || name.contains('\\') {
            return Err(TypeError::InvalidProjectName(
                "project name cannot contain path separators".into(),
            ));
        }

        if name.starts_with('.') || name.starts_with('_') {
            return Err(TypeError::InvalidProjectName(
                "project name cannot start with '.' or '_'".into(),
            ));
        }

        if name.chars().count() > MAX_NAME_LEN {
            return Err(TypeError::InvalidProjectName(format!(
                "project name cannot be longer than {MAX_NAME_LEN} characters"
            )));
        }

        for c in name.chars() {
            if c.is_whitespace() {
                return Err(TypeError::InvalidProjectName(
                    "project name cannot contain whitespace".into(),
                ));
            }
            if c.is_control() {
                return Err(TypeError::InvalidProjectName(
                    "project name cannot contain control characters".into(),
                ));
            }
        }

        const INVALID_CHARS: [char; 12] = ['~', '\'', '!', '(', ')', '*', ':', '?', '"', '<', '>', '|'];
        for c in INVALID_CHARS {
            if name.contains(c) {
                return Err(TypeError::InvalidProjectName(format!(
                    "project name cannot contain '{c}'"
                )));
            }
        }

        Ok(())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProjectName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> Self {
        name.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProjectName {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source language of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageVariant {
    JavaScript,
    TypeScript,
}

impl LanguageVariant {
    /// All variants, in prompt order.
    pub const ALL: [LanguageVariant; 2] = [LanguageVariant::JavaScript, LanguageVariant::TypeScript];

    /// Human-readable label, as shown in the language prompt.
    pub fn label(self) -> &'static str {
        match self {
            LanguageVariant::JavaScript => "JavaScript",
            LanguageVariant::TypeScript => "TypeScript",
        }
    }

    /// The `create-vite` template identifier for this variant.
    pub fn template_id(self) -> &'static str {
        match self {
            LanguageVariant::JavaScript => "react",
            LanguageVariant::TypeScript => "react-ts",
        }
    }

    /// Extension of the component source files the template produces.
    pub fn component_extension(self) -> &'static str {
        match self {
            LanguageVariant::JavaScript => "jsx",
            LanguageVariant::TypeScript => "tsx",
        }
    }

    /// Extension of the build-tool config file the template produces.
    pub fn config_extension(self) -> &'static str {
        match self {
            LanguageVariant::JavaScript => "js",
            LanguageVariant::TypeScript => "ts",
        }
    }

    /// The other variant.
    pub fn other(self) -> Self {
        match self {
            LanguageVariant::JavaScript => LanguageVariant::TypeScript,
            LanguageVariant::TypeScript => LanguageVariant::JavaScript,
        }
    }

    /// Position in [`LanguageVariant::ALL`].
    pub fn index(self) -> usize {
        match self {
            LanguageVariant::JavaScript => 0,
            LanguageVariant::TypeScript => 1,
        }
    }
}

impl FromStr for LanguageVariant {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "javascript" | "js" | "jsx" => Ok(LanguageVariant::JavaScript),
            "typescript" | "ts" | "tsx" => Ok(LanguageVariant::TypeScript),
            _ => Err(TypeError::UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for LanguageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How Tailwind CSS is wired into the generated project.
///
/// The two integrations are mutually exclusive within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylingKind {
    /// Tailwind v4 through the `@tailwindcss/vite` build plugin.
    #[default]
    Plugin,
    /// Tailwind v3 through a generated `tailwind.config.js` and PostCSS.
    ConfigFile,
}

impl StylingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StylingKind::Plugin => "plugin",
            StylingKind::ConfigFile => "config-file",
        }
    }
}

impl FromStr for StylingKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plugin" | "vite-plugin" => Ok(StylingKind::Plugin),
            "config-file" | "config" | "postcss" => Ok(StylingKind::ConfigFile),
            _ => Err(TypeError::UnknownStyling(s.to_string())),
        }
    }
}

impl fmt::Display for StylingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Package manager used to generate, install, and run the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Executable name.
    pub fn program(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// Subcommand that adds dependencies to `package.json`.
    pub fn add_subcommand(self) -> &'static str {
        match self {
            PackageManager::Npm => "install",
            PackageManager::Pnpm | PackageManager::Yarn | PackageManager::Bun => "add",
        }
    }

    /// Program and leading arguments for running a package binary.
    pub fn exec_prefix(self) -> (&'static str, &'static [&'static str]) {
        match self {
            PackageManager::Npm => ("npx", &[]),
            PackageManager::Pnpm => ("pnpm", &["exec"]),
            PackageManager::Yarn => ("yarn", &[]),
            PackageManager::Bun => ("bunx", &[]),
        }
    }
}

impl FromStr for PackageManager {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "pnpm" => Ok(PackageManager::Pnpm),
            "yarn" => Ok(PackageManager::Yarn),
            "bun" => Ok(PackageManager::Bun),
            _ => Err(TypeError::UnknownPackageManager(s.to_string())),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// What the run does when an external command fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failed command.
    #[default]
    Abort,
    /// Record the failure, warn, and keep going.
    Continue,
}

impl FailurePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            FailurePolicy::Abort => "abort",
            FailurePolicy::Continue => "continue",
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "abort" => Ok(FailurePolicy::Abort),
            "continue" => Ok(FailurePolicy::Continue),
            _ => Err(TypeError::UnknownFailurePolicy(s.to_string())),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod project_name {
        use super::*;

        #[test]
        fn accepts_typical_names() {
            for name in ["my-app", "App2", "todo_list", "a", "site.v2", "react@next"] {
                assert!(ProjectName::new(name).is_ok(), "{name} should be valid");
            }
        }

        #[test]
        fn rejects_empty_and_blank() {
            assert!(ProjectName::new("").is_err());
            assert!(ProjectName::new("   ").is_err());
        }

        #[test]
        fn rejects_traversal() {
            assert!(ProjectName::new(".").is_err());
            assert!(ProjectName::new("..").is_err());
            assert!(ProjectName::new("../up").is_err());
            assert!(ProjectName::new("nested/dir").is_err());
            assert!(ProjectName::new("win\\dir").is_err());
        }

        #[test]
        fn rejects_leading_dot_or_underscore() {
            assert!(ProjectName::new(".env").is_err());
            assert!(ProjectName::new("_private").is_err());
        }

        #[test]
        fn rejects_special_chars() {
            for c in ['~', '\'', '!', '(', ')', '*', ':', '?', '"', '<', '>', '|'] {
                let name = format!("app{c}");
                assert!(ProjectName::new(&name).is_err(), "{name} should be invalid");
            }
        }

        #[test]
        fn rejects_control_chars() {
            assert!(ProjectName::new("app\u{7f}").is_err());
            assert!(ProjectName::new("app\ttab").is_err());
        }

        #[test]
        fn rejects_overlong() {
            assert!(ProjectName::new("a".repeat(214)).is_ok());
            assert!(ProjectName::new("a".repeat(215)).is_err());
        }

        #[test]
        fn serde_rejects_invalid() {
            let parsed: Result<ProjectName, _> = serde_json::from_str("\"..\"");
            assert!(parsed.is_err());
        }

        #[test]
        fn display() {
            let name = ProjectName::new("shop").unwrap();
            assert_eq!(format!("{}", name), "shop");
        }
    }

    mod language {
        use super::*;

        #[test]
        fn template_ids() {
            assert_eq!(LanguageVariant::JavaScript.template_id(), "react");
            assert_eq!(LanguageVariant::TypeScript.template_id(), "react-ts");
        }

        #[test]
        fn parse_aliases() {
            assert_eq!("JavaScript".parse(), Ok(LanguageVariant::JavaScript));
            assert_eq!("js".parse(), Ok(LanguageVariant::JavaScript));
            assert_eq!("TypeScript".parse(), Ok(LanguageVariant::TypeScript));
            assert_eq!("TS".parse(), Ok(LanguageVariant::TypeScript));
            assert!("coffeescript".parse::<LanguageVariant>().is_err());
        }

        #[test]
        fn index_matches_all() {
            for lang in LanguageVariant::ALL {
                assert_eq!(LanguageVariant::ALL[lang.index()], lang);
            }
        }

        #[test]
        fn other_flips() {
            assert_eq!(LanguageVariant::JavaScript.other(), LanguageVariant::TypeScript);
            assert_eq!(LanguageVariant::TypeScript.other(), LanguageVariant::JavaScript);
        }
    }

    mod enums {
        use super::*;

        #[test]
        fn styling_parse_and_display() {
            assert_eq!("plugin".parse(), Ok(StylingKind::Plugin));
            assert_eq!("config-file".parse(), Ok(StylingKind::ConfigFile));
            assert_eq!(StylingKind::ConfigFile.to_string(), "config-file");
            assert!("sass".parse::<StylingKind>().is_err());
        }

        #[test]
        fn package_manager_parse() {
            assert_eq!("PNPM".parse(), Ok(PackageManager::Pnpm));
            assert_eq!(PackageManager::default(), PackageManager::Npm);
            assert!("cargo".parse::<PackageManager>().is_err());
        }

        #[test]
        fn failure_policy_default_aborts() {
            assert_eq!(FailurePolicy::default(), FailurePolicy::Abort);
            assert_eq!("continue".parse(), Ok(FailurePolicy::Continue));
        }

        #[test]
        fn serde_names() {
            assert_eq!(
                serde_json::to_string(&StylingKind::ConfigFile).unwrap(),
                "\"config-file\""
            );
            assert_eq!(
                serde_json::to_string(&LanguageVariant::TypeScript).unwrap(),
                "\"typescript\""
            );
        }
    }
}
