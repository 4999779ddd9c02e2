//! # formgen-cli
//!
//! The command-line front end for formgen.
//!
//! This crate provides:
//!
//! - **Commands** - A small framework for defining and registering CLI
//!   commands, plus the built-in `check`, `kinds`, `session`, and `validate`
//! - **Input parsing** - Session commands and values typed by the user
//! - **Rendering** - Plain-text output of forms, error reports, and checks
//!
//! ## Quick Start
//!
//! ```rust
//! use formgen_cli::command::CommandRegistry;
//! use formgen_cli::commands::register_builtin_commands;
//!
//! let mut registry = CommandRegistry::new();
//! register_builtin_commands(&mut registry);
//!
//! let names = registry.list_commands();
//! assert_eq!(names, ["check", "kinds", "session", "validate"]);
//! ```

// These clippy lints are intentionally allowed:
// - doc_markdown: backtick requirements for documentation items are too strict
// - missing_const_for_fn: some functions may gain runtime logic later
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_const_for_fn)]

pub mod command;
pub mod commands;
pub mod input;
pub mod render;

pub use command::{load_settings, CommandRegistry, ManagementCommand};
pub use input::Action;
