//! Core error types for formgen.
//!
//! User-facing validation failures are data, carried per field as a
//! [`ValidationError`]. Programmatic failures (stale field ids, mismatched
//! values, bad configuration) are reported through [`FormgenError`].

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// Represents a validation error with optional field-level errors.
///
/// Validation errors are either simple (a single message with a code) or
/// compound (per-field error lists, used when a whole submission is turned
/// into a hard error).
///
/// # Examples
///
/// ```
/// use formgen_core::error::ValidationError;
///
/// // Simple validation error
/// let err = ValidationError::new("Email is required", "required");
///
/// // Field-level validation errors
/// let mut field_errors = std::collections::HashMap::new();
/// field_errors.insert(
///     "Email".to_string(),
///     vec![ValidationError::new("Invalid Email format", "invalid_format")],
/// );
/// let err = ValidationError::with_field_errors(field_errors);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The primary error message, shown to the user as-is.
    pub message: String,
    /// A short code identifying the rule that failed (e.g. "required", "max_length").
    pub code: String,
    /// Additional parameters providing context for the error message.
    pub params: HashMap<String, String>,
    /// Per-field validation errors, keyed by field label.
    pub field_errors: HashMap<String, Vec<Self>>,
}

impl ValidationError {
    /// Creates a new `ValidationError` with a message and code.
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            params: HashMap::new(),
            field_errors: HashMap::new(),
        }
    }

    /// Creates a `ValidationError` containing per-field errors.
    pub fn with_field_errors(field_errors: HashMap<String, Vec<Self>>) -> Self {
        Self {
            message: String::new(),
            code: String::new(),
            params: HashMap::new(),
            field_errors,
        }
    }

    /// Adds a parameter to this validation error.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.message.is_empty() {
            write!(f, "{}", self.message)?;
        } else if !self.field_errors.is_empty() {
            let mut labels: Vec<&String> = self.field_errors.keys().collect();
            labels.sort();
            let mut first = true;
            for label in labels {
                for error in &self.field_errors[label] {
                    if !first {
                        write!(f, "; ")?;
                    }
                    write!(f, "{label}: {error}")?;
                    first = false;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// The primary error type for formgen.
///
/// Each variant maps to a process exit code via [`FormgenError::exit_code`],
/// following the BSD `sysexits` conventions.
#[derive(Error, Debug)]
pub enum FormgenError {
    // ── Registry ─────────────────────────────────────────────────────

    /// The field id is not (or no longer) part of the registry.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// The value does not fit the field, or could not be parsed.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    // ── Validation ───────────────────────────────────────────────────

    /// One or more fields failed validation.
    #[error("Validation error: {0}")]
    ValidationError(ValidationError),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A field definition was rejected by the field checks.
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    // ── Input ────────────────────────────────────────────────────────

    /// A session command could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    // ── Output ───────────────────────────────────────────────────────

    /// An error occurred during serialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A submission sink failed to accept a submission.
    #[error("Sink error: {0}")]
    SinkError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FormgenError {
    /// Returns the process exit code associated with this error.
    ///
    /// - `Parse`, `UnknownField` -> 64 (usage)
    /// - `InvalidValue`, `ValidationError` -> 65 (data)
    /// - `SinkError`, `SerializationError` -> 70 (software)
    /// - `IoError` -> 74 (I/O)
    /// - `ConfigurationError`, `ImproperlyConfigured` -> 78 (config)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Parse(_) | Self::UnknownField(_) => 64,
            Self::InvalidValue(_) | Self::ValidationError(_) => 65,
            Self::SinkError(_) | Self::SerializationError(_) => 70,
            Self::IoError(_) => 74,
            Self::ConfigurationError(_) | Self::ImproperlyConfigured(_) => 78,
        }
    }
}

impl From<serde_json::Error> for FormgenError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A convenience type alias for `Result<T, FormgenError>`.
pub type FormgenResult<T> = Result<T, FormgenError>;
