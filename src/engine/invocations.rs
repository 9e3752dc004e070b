//! engine::invocations
//!
//! Package-manager command lines.
//!
//! Each package manager spells the same operation differently; this module
//! is the only place that knows how.
//!
//! | operation | npm                                            | pnpm / yarn / bun                    |
//! |-----------|------------------------------------------------|--------------------------------------|
//! | create    | `npm create vite@latest <n> -- --template <t>` | `<pm> create vite <n> --template <t>` |
//! | add       | `npm install [-D] <pkgs>`                      | `<pm> add [-D] <pkgs>`               |
//! | exec      | `npx <bin>`                                    | `pnpm exec` / `yarn` / `bunx`        |
//! | install   | `npm install`                                  | `<pm> install`                       |
//! | script    | `npm run <script>`                             | `<pm> run <script>`                  |

use crate::core::types::{LanguageVariant, PackageManager, ProjectName};

use super::process::Invocation;

/// Scaffold a new project from the `create-vite` template for `language`.
pub fn create_project(
    pm: PackageManager,
    name: &ProjectName,
    language: LanguageVariant,
) -> Invocation {
    let template = language.template_id();
    match pm {
        PackageManager::Npm => Invocation::new(
            "npm",
            [
                "create",
                "vite@latest",
                name.as_str(),
                "--",
                "--template",
                template,
            ],
        ),
        _ => Invocation::new(
            pm.program(),
            ["create", "vite", name.as_str(), "--template", template],
        ),
    }
}

/// Add packages to the project's dependencies.
pub fn add_packages(pm: PackageManager, dev: bool, packages: &[&str]) -> Invocation {
    let mut args = vec![pm.add_subcommand()];
    if dev {
        args.push("-D");
    }
    args.extend_from_slice(packages);
    Invocation::new(pm.program(), args)
}

/// Run a binary from the project's dependencies.
pub fn exec(pm: PackageManager, binary: &str, args: &[&str]) -> Invocation {
    let (program, prefix) = pm.exec_prefix();
    let all: Vec<&str> = prefix
        .iter()
        .copied()
        .chain(std::iter::once(binary))
        .chain(args.iter().copied())
        .collect();
    Invocation::new(program, all)
}

/// Install every declared dependency.
pub fn install(pm: PackageManager) -> Invocation {
    Invocation::new(pm.program(), ["install"])
}

/// Run a `package.json` script.
pub fn run_script(pm: PackageManager, script: &str) -> Invocation {
    Invocation::new(pm.program(), ["run", script])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name() -> ProjectName {
        ProjectName::new("my-app").unwrap()
    }

    #[test]
    fn npm_create_passes_template_after_separator() {
        let inv = create_project(PackageManager::Npm, &name(), LanguageVariant::TypeScript);
        assert_eq!(
            inv.display_command(),
            "npm create vite@latest my-app -- --template react-ts"
        );
    }

    #[test]
    fn other_managers_create_without_separator() {
        let inv = create_project(PackageManager::Pnpm, &name(), LanguageVariant::JavaScript);
        assert_eq!(inv.display_command(), "pnpm create vite my-app --template react");

        let inv = create_project(PackageManager::Bun, &name(), LanguageVariant::JavaScript);
        assert_eq!(inv.display_command(), "bun create vite my-app --template react");
    }

    #[test]
    fn add_packages_per_manager() {
        assert_eq!(
            add_packages(PackageManager::Npm, false, &["tailwindcss", "@tailwindcss/vite"])
                .display_command(),
            "npm install tailwindcss @tailwindcss/vite"
        );
        assert_eq!(
            add_packages(PackageManager::Yarn, true, &["postcss"]).display_command(),
            "yarn add -D postcss"
        );
    }

    #[test]
    fn exec_per_manager() {
        let cases = [
            (PackageManager::Npm, "npx tailwindcss init -p"),
            (PackageManager::Pnpm, "pnpm exec tailwindcss init -p"),
            (PackageManager::Yarn, "yarn tailwindcss init -p"),
            (PackageManager::Bun, "bunx tailwindcss init -p"),
        ];
        for (pm, expected) in cases {
            assert_eq!(
                exec(pm, "tailwindcss", &["init", "-p"]).display_command(),
                expected
            );
        }
    }

    #[test]
    fn install_and_run() {
        assert_eq!(install(PackageManager::Bun).display_command(), "bun install");
        assert_eq!(
            run_script(PackageManager::Npm, "dev").display_command(),
            "npm run dev"
        );
    }
}
