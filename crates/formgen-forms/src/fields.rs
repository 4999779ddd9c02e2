//! Field definitions and the default field set.
//!
//! A [`FieldSpec`] describes a field before it joins a registry; the registry
//! stamps it with a fresh [`FieldId`] to produce a [`FieldDefinition`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kinds::FieldKind;
use crate::rules::{Format, ValidationRules, BYTES_PER_MB};

/// A registry-generated field identifier.
///
/// Ids are unique within a registry and never reused, not even after a
/// reset, so a stale id is always detected instead of aliasing a newer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(u64);

impl FieldId {
    /// Wraps a raw id value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A field that has not yet been added to a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// The field kind.
    pub kind: FieldKind,
    /// Human-readable label.
    pub label: String,
    /// Validation rules.
    #[serde(default)]
    pub rules: ValidationRules,
}

impl FieldSpec {
    /// Creates a spec with no rules.
    pub fn new(kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            rules: ValidationRules::default(),
        }
    }

    /// Sets the rules.
    #[must_use]
    pub fn rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }
}

/// One configured field of a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// The unique key of the field.
    pub id: FieldId,
    /// The field kind; not unique.
    pub kind: FieldKind,
    /// Human-readable label, used in every error message.
    pub label: String,
    /// Validation rules.
    pub rules: ValidationRules,
}

impl FieldDefinition {
    /// Creates a definition from a spec and an id.
    pub fn from_spec(id: FieldId, spec: FieldSpec) -> Self {
        Self {
            id,
            kind: spec.kind,
            label: spec.label,
            rules: spec.rules,
        }
    }
}

/// Returns the default field set, in display order.
///
/// A fresh registry starts with these seven fields and `reset` restores them.
pub fn default_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new(FieldKind::Text, "Custom Text Input"),
        FieldSpec::new(FieldKind::Textarea, "Custom Text Area"),
        FieldSpec::new(FieldKind::Checkbox, "Custom Checkbox"),
        FieldSpec::new(FieldKind::Radio, "Custom Radio Button"),
        FieldSpec::new(FieldKind::Email, "Email")
            .rules(ValidationRules::new().required().format(Format::Email)),
        FieldSpec::new(FieldKind::Phone, "Phone Number")
            .rules(ValidationRules::new().required().format(Format::Phone)),
        FieldSpec::new(FieldKind::File, "File Upload").rules(
            ValidationRules::new()
                .required()
                .allowed_extensions(["jpg", "jpeg", "png"])
                .max_size_bytes(BYTES_PER_MB),
        ),
    ]
}
