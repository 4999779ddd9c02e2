//! Settings for formgen.
//!
//! This module provides the [`Settings`] struct, which holds the runtime
//! configuration shared by the form session and the command-line front end.
//! Use [`settings_loader`](crate::settings_loader) to build one from files or
//! the environment.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormgenError;

/// Where accepted submissions are delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Emit each submission as a structured `tracing` event.
    #[default]
    Log,
    /// Print each submission as pretty JSON on standard output.
    Stdout,
    /// Keep submissions in memory (embedding and tests).
    Memory,
}

impl SinkKind {
    /// Returns the configuration name of this sink.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Stdout => "stdout",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SinkKind {
    type Err = FormgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "log" => Ok(Self::Log),
            "stdout" => Ok(Self::Stdout),
            "memory" => Ok(Self::Memory),
            other => Err(FormgenError::ConfigurationError(format!(
                "unknown submission sink '{other}' (expected log, stdout, or memory)"
            ))),
        }
    }
}

/// The complete set of formgen settings.
///
/// # Examples
///
/// ```
/// use formgen_core::settings::{Settings, SinkKind};
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.submission_sink, SinkKind::Log);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Whether debug mode is enabled (pretty logs instead of JSON).
    pub debug: bool,
    /// The log filter directive (e.g. "info", "formgen_forms=debug").
    pub log_level: String,
    /// Where accepted submissions are delivered.
    pub submission_sink: SinkKind,
    /// The prompt printed by the interactive session.
    pub prompt: String,
    /// Custom settings that don't fit into the above categories.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            submission_sink: SinkKind::Log,
            prompt: "formgen> ".to_string(),
            extra: HashMap::new(),
        }
    }
}
