//! Field values.
//!
//! A [`FormValue`] is a tagged union over the three shapes a field can hold.
//! Length is only defined for text; booleans and file handles report none,
//! so length rules cannot be applied to them by accident.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kinds::FieldKind;

/// Metadata of a locally selected file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    /// The file name, including its extension.
    pub name: String,
    /// The file size in bytes.
    pub size_bytes: u64,
}

impl FileHandle {
    /// Creates a new file handle.
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Returns the lower-cased suffix after the last `.`.
    ///
    /// A name without a dot yields the whole name, lower-cased.
    pub fn extension(&self) -> String {
        self.name
            .rsplit('.')
            .next()
            .map(str::to_lowercase)
            .unwrap_or_default()
    }
}

/// The current value of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    /// Text-valued kinds: text, textarea, radio, email, phone.
    Text(String),
    /// Checkbox state.
    Bool(bool),
    /// A selected file.
    File(FileHandle),
}

impl FormValue {
    /// Creates a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates a file value.
    pub fn file(name: impl Into<String>, size_bytes: u64) -> Self {
        Self::File(FileHandle::new(name, size_bytes))
    }

    /// Returns `true` if the value counts as filled in.
    ///
    /// Empty text and an unchecked checkbox are blank; any file is present.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::File(_) => true,
        }
    }

    /// Returns the length in characters for text, `None` otherwise.
    pub fn char_len(&self) -> Option<usize> {
        match self {
            Self::Text(s) => Some(s.chars().count()),
            Self::Bool(_) | Self::File(_) => None,
        }
    }

    /// Returns the text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the file handle, if this is a file value.
    pub const fn as_file(&self) -> Option<&FileHandle> {
        match self {
            Self::File(handle) => Some(handle),
            _ => None,
        }
    }

    /// Returns `true` if a field of `kind` can hold this value.
    pub const fn fits(&self, kind: FieldKind) -> bool {
        match self {
            Self::Text(_) => kind.is_text(),
            Self::Bool(_) => matches!(kind, FieldKind::Checkbox),
            Self::File(_) => matches!(kind, FieldKind::File),
        }
    }

    /// Returns a short name for the value's shape, for error messages.
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Bool(_) => "boolean",
            Self::File(_) => "file",
        }
    }
}

impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::File(handle) => write!(f, "{} ({} bytes)", handle.name, handle.size_bytes),
        }
    }
}
