//! core::paths
//!
//! Centralized path routing for the generated project tree.
//!
//! # Architecture
//!
//! Every location the customizer touches is named here, relative to the
//! project root. Plans carry these relative paths; only the executor joins
//! them onto a concrete root. No other module should spell out template
//! file names.
//!
//! # Template Layout
//!
//! The `create-vite` React templates produce:
//! - `src/assets/react.svg`, `public/vite.svg` - default logo assets
//! - `src/App.jsx` | `src/App.tsx` - root component
//! - `src/App.css` - component-scoped stylesheet
//! - `src/index.css` - global stylesheet
//! - `vite.config.js` | `vite.config.ts` - build-tool config
//!
//! The config-file styling integration additionally produces
//! `tailwind.config.js`.
//!
//! # Example
//!
//! ```
//! use clean_react::core::paths::ProjectLayout;
//! use clean_react::core::types::ProjectName;
//! use std::path::{Path, PathBuf};
//!
//! let name = ProjectName::new("shop").unwrap();
//! let layout = ProjectLayout::for_project(Path::new("/work"), &name);
//!
//! assert_eq!(layout.root(), Path::new("/work/shop"));
//! assert_eq!(
//!     layout.resolve("src/index.css"),
//!     PathBuf::from("/work/shop/src/index.css")
//! );
//! ```

use std::path::{Path, PathBuf};

use crate::core::types::{LanguageVariant, ProjectName};

/// Default React logo shipped by the template.
pub const REACT_LOGO: &str = "src/assets/react.svg";
/// Default Vite logo shipped by the template.
pub const VITE_LOGO: &str = "public/vite.svg";
/// Component-scoped stylesheet.
pub const APP_CSS: &str = "src/App.css";
/// Global stylesheet.
pub const INDEX_CSS: &str = "src/index.css";
/// Tailwind v3 config, created by `tailwindcss init`.
pub const TAILWIND_CONFIG: &str = "tailwind.config.js";
/// Marker for TypeScript projects.
pub const TSCONFIG: &str = "tsconfig.json";

/// Asset files removed by the first customization step.
pub const DEFAULT_ASSETS: [&str; 2] = [REACT_LOGO, VITE_LOGO];

/// Root component path for a language variant.
pub fn app_component(language: LanguageVariant) -> String {
    format!("src/App.{}", language.component_extension())
}

/// Build-tool config path for a language variant.
pub fn vite_config(language: LanguageVariant) -> String {
    format!("vite.config.{}", language.config_extension())
}

/// Root component candidates, the variant's own extension first.
pub fn app_component_candidates(language: LanguageVariant) -> Vec<String> {
    vec![app_component(language), app_component(language.other())]
}

/// Build-tool config candidates, the variant's own extension first.
pub fn vite_config_candidates(language: LanguageVariant) -> Vec<String> {
    vec![vite_config(language), vite_config(language.other())]
}

/// Location of a generated project on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Layout rooted at an existing directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout for `<parent>/<name>`, where the generator will create it.
    pub fn for_project(parent: &Path, name: &ProjectName) -> Self {
        Self::new(parent.join(name.as_str()))
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join a template-relative path onto the root.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .fold(self.root.clone(), |path, component| path.join(component))
    }

    /// Whether the root directory exists.
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Guess the language variant of an already generated project.
    ///
    /// A `tsconfig.json` or `src/App.tsx` means TypeScript; a `src/App.jsx`
    /// means JavaScript. Returns `None` when neither is present.
    pub fn detect_language(&self) -> Option<LanguageVariant> {
        if self.resolve(TSCONFIG).is_file()
            || self.resolve(&app_component(LanguageVariant::TypeScript)).is_file()
        {
            Some(LanguageVariant::TypeScript)
        } else if self.resolve(&app_component(LanguageVariant::JavaScript)).is_file() {
            Some(LanguageVariant::JavaScript)
        } else {
            None
        }
    }
}
