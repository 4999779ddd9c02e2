//! Field kinds offered by the add-field menu.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use formgen_core::FormgenError;

/// The kind of a form field.
///
/// The kind decides which [`FormValue`](crate::value::FormValue) shape the
/// field holds and which rules make sense for it. Unlike a field id, a kind
/// is not unique: a form may hold several fields of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// A single-line text input.
    Text,
    /// A multi-line text area.
    Textarea,
    /// A checkbox (boolean).
    Checkbox,
    /// A radio button (string value).
    Radio,
    /// An email address input.
    Email,
    /// A phone number input.
    Phone,
    /// A file upload.
    File,
}

impl FieldKind {
    /// All kinds, in add-field menu order.
    pub const ALL: [Self; 7] = [
        Self::Text,
        Self::Textarea,
        Self::Checkbox,
        Self::Radio,
        Self::Email,
        Self::Phone,
        Self::File,
    ];

    /// Returns the stable name of this kind (`text`, `textarea`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::File => "file",
        }
    }

    /// Returns the option text shown in the add-field menu.
    ///
    /// A field added without an explicit label is labelled with this text.
    pub const fn menu_label(self) -> &'static str {
        match self {
            Self::Text => "Text Input",
            Self::Textarea => "Text Area",
            Self::Checkbox => "Checkbox",
            Self::Radio => "Radio Button",
            Self::Email => "Email",
            Self::Phone => "Phone Number",
            Self::File => "File Upload",
        }
    }

    /// Returns `true` if values of this kind are strings.
    ///
    /// Only text-valued kinds have a length, so only they accept length
    /// and format rules.
    pub const fn is_text(self) -> bool {
        matches!(
            self,
            Self::Text | Self::Textarea | Self::Radio | Self::Email | Self::Phone
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = FormgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                FormgenError::Parse(format!(
                    "unknown field kind '{wanted}' (expected one of: {})",
                    Self::ALL.map(Self::as_str).join(", ")
                ))
            })
    }
}
