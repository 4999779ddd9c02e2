//! Rule validators.
//!
//! Each rule class of [`ValidationRules`](crate::rules::ValidationRules) is a
//! [`Validator`]. A validator checks one constraint against a field's current
//! value and returns the user-facing [`ValidationError`] when it fails.
//!
//! Length and format validators look at text only, including empty text.
//! An absent value is skipped, and non-text values have no length or format
//! to check. A blank value on a required field never reaches them; see
//! [`validate_field`](crate::validation::validate_field).

use std::fmt;

use formgen_core::ValidationError;

use crate::formats::matches_format;
use crate::rules::{Format, BYTES_PER_MB};
use crate::value::FormValue;

/// A trait for validating field values.
///
/// # Examples
///
/// ```
/// use formgen_forms::validators::{MaxLengthValidator, Validator};
/// use formgen_forms::FormValue;
///
/// let v = MaxLengthValidator::new(5);
/// assert!(v.validate("Name", Some(&FormValue::text("hi"))).is_ok());
/// assert!(v.validate("Name", Some(&FormValue::text("toolong"))).is_err());
/// ```
pub trait Validator: Send + Sync + fmt::Debug {
    /// Validates the value of the field labelled `label`.
    fn validate(&self, label: &str, value: Option<&FormValue>) -> Result<(), ValidationError>;

    /// Returns a human-readable name for this validator.
    fn name(&self) -> &str;
}

fn text_len(value: Option<&FormValue>) -> Option<usize> {
    value.and_then(FormValue::char_len)
}

fn text_of(value: Option<&FormValue>) -> Option<&str> {
    value.and_then(FormValue::as_text)
}

/// Renders a byte count in megabytes, without a trailing `.0`.
#[allow(clippy::cast_precision_loss)]
pub fn format_megabytes(bytes: u64) -> String {
    if bytes % BYTES_PER_MB == 0 {
        (bytes / BYTES_PER_MB).to_string()
    } else {
        (bytes as f64 / BYTES_PER_MB as f64).to_string()
    }
}

/// Fails when the value is absent, empty text, or an unchecked checkbox.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredValidator;

impl Validator for RequiredValidator {
    fn validate(&self, label: &str, value: Option<&FormValue>) -> Result<(), ValidationError> {
        if value.is_some_and(FormValue::is_present) {
            Ok(())
        } else {
            Err(ValidationError::new(format!("{label} is required"), "required"))
        }
    }

    fn name(&self) -> &str {
        "RequiredValidator"
    }
}

/// Validates that text meets a minimum length requirement.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    /// The minimum required length, in characters.
    pub min_length: usize,
}

impl MinLengthValidator {
    /// Creates a new `MinLengthValidator` with the given minimum length.
    pub const fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, label: &str, value: Option<&FormValue>) -> Result<(), ValidationError> {
        if let Some(len) = text_len(value) {
            if len < self.min_length {
                return Err(ValidationError::new(
                    format!("{label} must be at least {} characters", self.min_length),
                    "min_length",
                )
                .with_param("min_length", self.min_length.to_string()));
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "MinLengthValidator"
    }
}

/// Validates that text does not exceed a maximum length.
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
    /// The maximum allowed length, in characters.
    pub max_length: usize,
}

impl MaxLengthValidator {
    /// Creates a new `MaxLengthValidator` with the given maximum length.
    pub const fn new(max_length: usize) -> Self {
        Self { max_length }
    }
}

impl Validator for MaxLengthValidator {
    fn validate(&self, label: &str, value: Option<&FormValue>) -> Result<(), ValidationError> {
        if let Some(len) = text_len(value) {
            if len > self.max_length {
                return Err(ValidationError::new(
                    format!("{label} must not exceed {} characters", self.max_length),
                    "max_length",
                )
                .with_param("max_length", self.max_length.to_string()));
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "MaxLengthValidator"
    }
}

/// Validates text against the format-rule table.
#[derive(Debug, Clone)]
pub struct FormatValidator {
    /// The required format.
    pub format: Format,
}

impl FormatValidator {
    /// Creates a new `FormatValidator` for the given format.
    pub const fn new(format: Format) -> Self {
        Self { format }
    }
}

impl Validator for FormatValidator {
    fn validate(&self, label: &str, value: Option<&FormValue>) -> Result<(), ValidationError> {
        if let Some(text) = text_of(value) {
            if !matches_format(self.format, text) {
                return Err(ValidationError::new(
                    format!("Invalid {label} format"),
                    "invalid_format",
                )
                .with_param("format", self.format.as_str()));
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "FormatValidator"
    }
}

/// Validates a file's extension against an allow-list.
#[derive(Debug, Clone)]
pub struct FileExtensionValidator {
    /// The allowed extensions, in the order they are listed to the user.
    pub allowed: Vec<String>,
}

impl FileExtensionValidator {
    /// Creates a new `FileExtensionValidator` with the given allow-list.
    pub const fn new(allowed: Vec<String>) -> Self {
        Self { allowed }
    }
}

impl Validator for FileExtensionValidator {
    fn validate(&self, label: &str, value: Option<&FormValue>) -> Result<(), ValidationError> {
        if let Some(handle) = value.and_then(FormValue::as_file) {
            let ext = handle.extension();
            if !self.allowed.iter().any(|allowed| allowed.to_lowercase() == ext) {
                let listed = self.allowed.join(", ");
                return Err(ValidationError::new(
                    format!("Invalid file type for {label}. Allowed types: {listed}"),
                    "invalid_extension",
                )
                .with_param("extension", ext)
                .with_param("allowed", listed));
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "FileExtensionValidator"
    }
}

/// Validates that a file does not exceed a maximum size.
#[derive(Debug, Clone)]
pub struct MaxFileSizeValidator {
    /// The maximum allowed size in bytes.
    pub max_size_bytes: u64,
}

impl MaxFileSizeValidator {
    /// Creates a new `MaxFileSizeValidator` with the given limit.
    pub const fn new(max_size_bytes: u64) -> Self {
        Self { max_size_bytes }
    }
}

impl Validator for MaxFileSizeValidator {
    fn validate(&self, label: &str, value: Option<&FormValue>) -> Result<(), ValidationError> {
        if let Some(handle) = value.and_then(FormValue::as_file) {
            if handle.size_bytes > self.max_size_bytes {
                return Err(ValidationError::new(
                    format!(
                        "{label} must not exceed {} MB",
                        format_megabytes(self.max_size_bytes)
                    ),
                    "file_too_large",
                )
                .with_param("max_size_bytes", self.max_size_bytes.to_string()));
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "MaxFileSizeValidator"
    }
}
