//! core
//!
//! Core domain types, schemas, and fixed project data for clean-react.
//!
//! # Modules
//!
//! - [`types`] - Strong types: ProjectName, LanguageVariant, PackageManager, etc.
//! - [`config`] - Configuration schema and loading
//! - [`paths`] - Template-relative paths and project layout
//! - [`templates`] - Fixed file contents written into generated projects
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Schemas are strict and self-describing
//! - Nothing here touches a generated project

pub mod config;
pub mod paths;
pub mod templates;
pub mod types;
