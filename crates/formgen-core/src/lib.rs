//! # formgen-core
//!
//! Core types, settings, system checks, and error types for formgen.
//! This crate has no dependency on the form model and provides the foundation
//! for the other crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Runtime configuration
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`checks`] - Diagnostic messages and settings checks
//! - [`logging`] - Tracing-based logging integration

pub mod checks;
pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{FormgenError, FormgenResult, ValidationError};
pub use settings::{Settings, SinkKind};
