//! System check framework for formgen.
//!
//! Checks inspect configuration (settings here, field definitions in
//! `formgen-forms`) and report problems as [`CheckMessage`]s instead of
//! failing outright. Callers decide which levels are fatal; the field
//! registry, for instance, refuses definitions with any
//! [`CheckLevel::Error`] message.
//!
//! ## Examples
//!
//! ```
//! use formgen_core::checks::{check_settings, CheckLevel};
//! use formgen_core::settings::Settings;
//!
//! let settings = Settings {
//!     log_level: "formgen=loud".to_string(),
//!     ..Settings::default()
//! };
//! let messages = check_settings(&settings);
//! assert!(messages.iter().any(|m| m.level == CheckLevel::Warning));
//! ```

use crate::logging::is_valid_filter;
use crate::settings::{Settings, SinkKind};

/// Severity level for a check message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckLevel {
    /// Debugging information.
    Debug = 0,
    /// Informational message.
    Info = 1,
    /// A potential problem.
    Warning = 2,
    /// A definite problem that should be fixed.
    Error = 3,
    /// A critical error that prevents the form from working.
    Critical = 4,
}

impl std::fmt::Display for CheckLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A diagnostic message produced by a check.
///
/// Each message has a severity level, a human-readable message, an optional hint,
/// the object that the issue relates to, and an optional identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckMessage {
    /// The severity level.
    pub level: CheckLevel,
    /// The human-readable message describing the issue.
    pub msg: String,
    /// An optional hint on how to fix the issue.
    pub hint: Option<String>,
    /// The object (setting, field, etc.) that has the issue.
    pub obj: Option<String>,
    /// A unique identifier for this check message (e.g. "fields.E001").
    pub id: Option<String>,
}

impl CheckMessage {
    /// Creates a new `CheckMessage` with the given level and details.
    pub fn new(
        level: CheckLevel,
        msg: impl Into<String>,
        hint: Option<&str>,
        obj: Option<&str>,
        id: Option<&str>,
    ) -> Self {
        Self {
            level,
            msg: msg.into(),
            hint: hint.map(String::from),
            obj: obj.map(String::from),
            id: id.map(String::from),
        }
    }

    /// Creates an info-level message.
    pub fn info(msg: impl Into<String>, hint: Option<&str>, obj: Option<&str>, id: Option<&str>) -> Self {
        Self::new(CheckLevel::Info, msg, hint, obj, id)
    }

    /// Creates a warning-level message.
    pub fn warning(msg: impl Into<String>, hint: Option<&str>, obj: Option<&str>, id: Option<&str>) -> Self {
        Self::new(CheckLevel::Warning, msg, hint, obj, id)
    }

    /// Creates an error-level message.
    pub fn error(msg: impl Into<String>, hint: Option<&str>, obj: Option<&str>, id: Option<&str>) -> Self {
        Self::new(CheckLevel::Error, msg, hint, obj, id)
    }

    /// Returns `true` if this is a warning or higher severity.
    pub fn is_serious(&self) -> bool {
        self.level >= CheckLevel::Warning
    }

    /// Returns `true` if this is an error or higher severity.
    pub fn is_error(&self) -> bool {
        self.level >= CheckLevel::Error
    }
}

impl std::fmt::Display for CheckMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref id) = self.id {
            write!(f, "({id}) ")?;
        }
        write!(f, "{}: {}", self.level, self.msg)?;
        if let Some(ref hint) = self.hint {
            write!(f, "\n\tHINT: {hint}")?;
        }
        if let Some(ref obj) = self.obj {
            write!(f, "\n\tObject: {obj}")?;
        }
        Ok(())
    }
}

/// Checks the settings for common misconfigurations.
pub fn check_settings(settings: &Settings) -> Vec<CheckMessage> {
    let mut messages = Vec::new();

    if !is_valid_filter(&settings.log_level) {
        messages.push(CheckMessage::warning(
            format!("log_level '{}' is not a valid filter directive", settings.log_level),
            Some("Use a level such as \"info\" or a directive such as \"formgen_forms=debug\""),
            Some("log_level"),
            Some("settings.W001"),
        ));
    }

    if settings.submission_sink == SinkKind::Memory && !settings.debug {
        messages.push(CheckMessage::warning(
            "The memory submission sink discards submissions when the process exits",
            Some("Use the log or stdout sink outside debug mode"),
            Some("submission_sink"),
            Some("settings.W002"),
        ));
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_level_display() {
        assert_eq!(CheckLevel::Debug.to_string(), "DEBUG");
        assert_eq!(CheckLevel::Info.to_string(), "INFO");
        assert_eq!(CheckLevel::Warning.to_string(), "WARNING");
        assert_eq!(CheckLevel::Error.to_string(), "ERROR");
        assert_eq!(CheckLevel::Critical.to_string(), "CRITICAL");
    }

    #[test]
    fn test_check_level_ordering() {
        assert!(CheckLevel::Debug < CheckLevel::Info);
        assert!(CheckLevel::Info < CheckLevel::Warning);
        assert!(CheckLevel::Warning < CheckLevel::Error);
        assert!(CheckLevel::Error < CheckLevel::Critical);
    }

    #[test]
    fn test_check_message_display() {
        let msg = CheckMessage::error(
            "min_length exceeds max_length",
            Some("Swap the bounds"),
            Some("Name"),
            Some("fields.E002"),
        );
        let text = msg.to_string();
        assert!(text.starts_with("(fields.E002) ERROR: min_length exceeds max_length"));
        assert!(text.contains("HINT: Swap the bounds"));
        assert!(text.contains("Object: Name"));
    }

    #[test]
    fn test_seriousness() {
        assert!(!CheckMessage::info("x", None, None, None).is_serious());
        assert!(CheckMessage::warning("x", None, None, None).is_serious());
        assert!(!CheckMessage::warning("x", None, None, None).is_error());
        assert!(CheckMessage::error("x", None, None, None).is_error());
    }

    #[test]
    fn test_default_settings_pass() {
        assert!(check_settings(&Settings::default()).is_empty());
    }

    #[test]
    fn test_invalid_log_level() {
        let settings = Settings {
            log_level: "formgen=loud".to_string(),
            ..Settings::default()
        };
        let messages = check_settings(&settings);
        assert!(messages.iter().any(|m| m.id.as_deref() == Some("settings.W001")));
    }

    #[test]
    fn test_memory_sink_outside_debug() {
        let settings = Settings {
            debug: false,
            submission_sink: SinkKind::Memory,
            ..Settings::default()
        };
        let messages = check_settings(&settings);
        assert!(messages.iter().any(|m| m.id.as_deref() == Some("settings.W002")));
    }
}
