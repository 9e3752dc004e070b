//! clean-react - Scaffold a Vite + React app and strip it to a Tailwind placeholder
//!
//! clean-react asks for a project name and a language, runs `create-vite`
//! with the matching React template, then removes the demo content and
//! wires in Tailwind CSS before installing and starting the dev server.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Orchestrates Generate → Plan → Execute
//! - [`core`] - Domain types, configuration, paths, and templates
//! - [`ui`] - Prompts and terminal output
//!
//! # Correctness Invariants
//!
//! clean-react maintains the following invariants:
//!
//! 1. Every external command finishes before the next step starts
//! 2. All project mutations flow through a single executor
//! 3. A missing file skips its own step and nothing else
//! 4. Files outside the generated project are never touched

pub mod cli;
pub mod core;
pub mod engine;
pub mod ui;
