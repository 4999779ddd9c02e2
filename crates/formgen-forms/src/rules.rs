//! Per-field validation rules.
//!
//! [`ValidationRules`] is the configuration record attached to each field.
//! Every option is optional; an absent option means the rule does not apply.
//! [`ValidationRules::validators`] turns the record into the ordered chain
//! of [`Validator`]s that the engine runs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use formgen_core::FormgenError;

use crate::kinds::FieldKind;
use crate::validators::{
    FileExtensionValidator, FormatValidator, MaxFileSizeValidator, MaxLengthValidator,
    MinLengthValidator, RequiredValidator, Validator,
};

/// One mebibyte, the unit of file size messages.
pub const BYTES_PER_MB: u64 = 1_048_576;

/// A text format checked by a regular expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// An email address.
    Email,
    /// A ten-digit phone number.
    Phone,
}

impl Format {
    /// Returns the format's name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = FormgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            other => Err(FormgenError::Parse(format!("unknown format '{other}'"))),
        }
    }
}

/// The validation rules of one field.
///
/// Zero length and size bounds are treated as absent.
///
/// # Examples
///
/// ```
/// use formgen_forms::rules::{Format, ValidationRules};
///
/// let rules = ValidationRules::new().required().format(Format::Email);
/// assert!(rules.required);
/// assert_eq!(rules.format, Some(Format::Email));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// The field must hold a present value.
    pub required: bool,
    /// Minimum length in characters (text only).
    pub min_length: Option<usize>,
    /// Maximum length in characters (text only).
    pub max_length: Option<usize>,
    /// Required text format (text only).
    pub format: Option<Format>,
    /// Allowed file extensions, lower-case, without the dot (file only).
    pub allowed_extensions: Option<Vec<String>>,
    /// Maximum file size in bytes (file only).
    pub max_size_bytes: Option<u64>,
}

impl ValidationRules {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the field as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the minimum length.
    #[must_use]
    pub const fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Sets the maximum length.
    #[must_use]
    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Sets the text format.
    #[must_use]
    pub const fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets the allowed file extensions.
    #[must_use]
    pub fn allowed_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the maximum file size in bytes.
    #[must_use]
    pub const fn max_size_bytes(mut self, max: u64) -> Self {
        self.max_size_bytes = Some(max);
        self
    }

    /// Returns `true` if no rule is configured.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns `true` if a length bound is configured.
    pub const fn has_length_rule(&self) -> bool {
        self.min_length.is_some() || self.max_length.is_some()
    }

    /// Returns `true` if a file constraint is configured.
    pub const fn has_file_rule(&self) -> bool {
        self.allowed_extensions.is_some() || self.max_size_bytes.is_some()
    }

    /// Builds the validator chain for a field of `kind`, in evaluation order:
    /// required, min length, max length, format, file extension, file size.
    ///
    /// File constraints only join the chain for file fields.
    pub fn validators(&self, kind: FieldKind) -> Vec<Box<dyn Validator>> {
        let mut chain: Vec<Box<dyn Validator>> = Vec::new();

        if self.required {
            chain.push(Box::new(RequiredValidator));
        }
        if let Some(min) = self.min_length.filter(|&n| n > 0) {
            chain.push(Box::new(MinLengthValidator::new(min)));
        }
        if let Some(max) = self.max_length.filter(|&n| n > 0) {
            chain.push(Box::new(MaxLengthValidator::new(max)));
        }
        if let Some(format) = self.format {
            chain.push(Box::new(FormatValidator::new(format)));
        }
        if kind == FieldKind::File {
            if let Some(extensions) = &self.allowed_extensions {
                chain.push(Box::new(FileExtensionValidator::new(extensions.clone())));
            }
            if let Some(max) = self.max_size_bytes.filter(|&n| n > 0) {
                chain.push(Box::new(MaxFileSizeValidator::new(max)));
            }
        }

        chain
    }
}
