//! The field registry.
//!
//! [`FieldRegistry`] owns the ordered list of fields. Each entry keeps its
//! definition, current value, and current error together, so removing a
//! field drops its value and error with it; no separate map can go stale.
//!
//! Editing a value clears that field's error straight away without
//! re-validating. Errors come back only from the next validation pass.

use std::collections::HashMap;

use formgen_core::{FormgenError, FormgenResult, ValidationError};

use crate::checks::check_field;
use crate::fields::{default_fields, FieldDefinition, FieldId, FieldSpec};
use crate::kinds::FieldKind;
use crate::rules::ValidationRules;
use crate::validation::{validate, ValidationReport};
use crate::value::FormValue;

#[derive(Debug, Clone)]
struct FieldEntry {
    definition: FieldDefinition,
    value: Option<FormValue>,
    error: Option<ValidationError>,
}

impl FieldEntry {
    const fn new(definition: FieldDefinition) -> Self {
        Self {
            definition,
            value: None,
            error: None,
        }
    }
}

/// The ordered set of fields of one form, with their values and errors.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    entries: Vec<FieldEntry>,
    next_id: u64,
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRegistry {
    /// Creates a registry holding the default field set.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.install_defaults();
        registry
    }

    /// Creates a registry with no fields.
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> FieldId {
        let id = FieldId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn push(&mut self, spec: FieldSpec) -> FieldId {
        let id = self.allocate_id();
        tracing::debug!(field = %id, kind = %spec.kind, label = %spec.label, "added field");
        self.entries
            .push(FieldEntry::new(FieldDefinition::from_spec(id, spec)));
        id
    }

    fn install_defaults(&mut self) {
        for spec in default_fields() {
            self.push(spec);
        }
    }

    fn entry(&self, id: FieldId) -> Option<&FieldEntry> {
        self.entries.iter().find(|e| e.definition.id == id)
    }

    fn entry_mut(&mut self, id: FieldId) -> FormgenResult<&mut FieldEntry> {
        self.entries
            .iter_mut()
            .find(|e| e.definition.id == id)
            .ok_or_else(|| FormgenError::UnknownField(id.to_string()))
    }

    // ── Mutators ─────────────────────────────────────────────────────

    /// Appends a field with no rules and returns its id.
    ///
    /// Adding a kind that is already present creates an independent field.
    pub fn add_field(&mut self, kind: FieldKind, label: impl Into<String>) -> FieldId {
        self.push(FieldSpec::new(kind, label))
    }

    /// Appends a field with rules, after checking that the rules fit the kind.
    ///
    /// Warnings are logged; error-level check messages reject the field.
    pub fn add_field_with_rules(
        &mut self,
        kind: FieldKind,
        label: impl Into<String>,
        rules: ValidationRules,
    ) -> FormgenResult<FieldId> {
        let label = label.into();
        let messages = check_field(kind, &label, &rules);

        let errors: Vec<String> = messages
            .iter()
            .filter(|m| m.is_error())
            .map(ToString::to_string)
            .collect();
        if !errors.is_empty() {
            return Err(FormgenError::ImproperlyConfigured(errors.join("; ")));
        }
        for message in messages.iter().filter(|m| m.is_serious()) {
            tracing::warn!("{message}");
        }

        Ok(self.push(FieldSpec::new(kind, label).rules(rules)))
    }

    /// Removes a field together with its value and error.
    ///
    /// Returns `false` if the id is not in the registry.
    pub fn remove_field(&mut self, id: FieldId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.definition.id != id);
        let removed = self.entries.len() != before;
        if removed {
            tracing::debug!(field = %id, "removed field");
        }
        removed
    }

    /// Removes every field of a kind, returning how many were removed.
    pub fn remove_kind(&mut self, kind: FieldKind) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.definition.kind != kind);
        let removed = before - self.entries.len();
        tracing::debug!(kind = %kind, removed, "removed fields by kind");
        removed
    }

    /// Sets a field's value and clears its error.
    ///
    /// The error is cleared even if the new value would still fail; it is
    /// recomputed on the next validation pass.
    pub fn set_value(&mut self, id: FieldId, value: FormValue) -> FormgenResult<()> {
        let entry = self.entry_mut(id)?;
        let kind = entry.definition.kind;
        if !value.fits(kind) {
            return Err(FormgenError::InvalidValue(format!(
                "a {} value does not fit {} field {id}",
                value.shape(),
                kind
            )));
        }
        entry.value = Some(value);
        entry.error = None;
        tracing::debug!(field = %id, "value changed");
        Ok(())
    }

    /// Drops a field's value and clears its error.
    pub fn clear_value(&mut self, id: FieldId) -> FormgenResult<()> {
        let entry = self.entry_mut(id)?;
        entry.value = None;
        entry.error = None;
        tracing::debug!(field = %id, "value cleared");
        Ok(())
    }

    /// Restores the default field set and clears all values and errors.
    ///
    /// Ids keep counting up, so ids handed out before the reset stay invalid.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.install_defaults();
        tracing::debug!(fields = self.entries.len(), "registry reset");
    }

    // ── Validation ───────────────────────────────────────────────────

    /// Validates the current fields and values.
    pub fn validate(&self) -> ValidationReport {
        validate(
            self.entries
                .iter()
                .map(|e| (&e.definition, e.value.as_ref())),
        )
    }

    /// Replaces every field's error with the report's.
    ///
    /// Errors for fields that no longer exist are ignored.
    pub fn apply_report(&mut self, report: &ValidationReport) {
        for entry in &mut self.entries {
            entry.error = report
                .get(entry.definition.id)
                .map(|field_error| field_error.error.clone());
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// Returns the field definitions, in order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> + '_ {
        self.entries.iter().map(|e| &e.definition)
    }

    /// Returns the definition of a field.
    pub fn get(&self, id: FieldId) -> Option<&FieldDefinition> {
        self.entry(id).map(|e| &e.definition)
    }

    /// Returns `true` if the field is in the registry.
    pub fn contains(&self, id: FieldId) -> bool {
        self.entry(id).is_some()
    }

    /// Returns a field's current value.
    pub fn value(&self, id: FieldId) -> Option<&FormValue> {
        self.entry(id).and_then(|e| e.value.as_ref())
    }

    /// Returns a field's current error message.
    pub fn error(&self, id: FieldId) -> Option<&str> {
        self.entry(id)
            .and_then(|e| e.error.as_ref())
            .map(|error| error.message.as_str())
    }

    /// Returns all current values keyed by field id.
    pub fn values(&self) -> HashMap<FieldId, FormValue> {
        self.entries
            .iter()
            .filter_map(|e| e.value.clone().map(|v| (e.definition.id, v)))
            .collect()
    }

    /// Returns all current error messages keyed by field id.
    pub fn errors(&self) -> HashMap<FieldId, String> {
        self.entries
            .iter()
            .filter_map(|e| {
                e.error
                    .as_ref()
                    .map(|error| (e.definition.id, error.message.clone()))
            })
            .collect()
    }

    /// Returns `(definition, value, error)` for each field, in order.
    pub fn rows(
        &self,
    ) -> impl Iterator<Item = (&FieldDefinition, Option<&FormValue>, Option<&str>)> + '_ {
        self.entries.iter().map(|e| {
            (
                &e.definition,
                e.value.as_ref(),
                e.error.as_ref().map(|error| error.message.as_str()),
            )
        })
    }

    /// Returns the zero-based position of a field.
    pub fn position(&self, id: FieldId) -> Option<usize> {
        self.entries.iter().position(|e| e.definition.id == id)
    }

    /// Returns the id of the field at a zero-based position.
    pub fn id_at(&self, index: usize) -> Option<FieldId> {
        self.entries.get(index).map(|e| e.definition.id)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the registry holds no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Format;

    #[test]
    fn test_new_has_defaults() {
        let registry = FieldRegistry::new();
        assert_eq!(registry.len(), 7);
        let kinds: Vec<FieldKind> = registry.fields().map(|f| f.kind).collect();
        assert_eq!(kinds, FieldKind::ALL);
        assert!(registry.values().is_empty());
        assert!(registry.errors().is_empty());
    }

    #[test]
    fn test_empty() {
        let registry = FieldRegistry::empty();
        assert!(registry.is_empty());
        assert!(registry.validate().is_valid());
    }

    #[test]
    fn test_add_field_appends_with_empty_rules() {
        let mut registry = FieldRegistry::new();
        let id = registry.add_field(FieldKind::Textarea, "Comments");
        assert_eq!(registry.position(id), Some(7));
        let def = registry.get(id).unwrap();
        assert_eq!(def.label, "Comments");
        assert!(def.rules.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut registry = FieldRegistry::new();
        let a = registry.add_field(FieldKind::Email, "Email");
        let b = registry.add_field(FieldKind::Email, "Email");
        assert_ne!(a, b);
        let mut ids: Vec<FieldId> = registry.fields().map(|f| f.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn test_add_field_with_rules_rejects_length_on_checkbox() {
        let mut registry = FieldRegistry::new();
        let result = registry.add_field_with_rules(
            FieldKind::Checkbox,
            "Agree",
            ValidationRules::new().max_length(3),
        );
        match result {
            Err(FormgenError::ImproperlyConfigured(msg)) => assert!(msg.contains("fields.E001")),
            other => panic!("expected ImproperlyConfigured, got {other:?}"),
        }
        assert_eq!(registry.len(), 7);
    }

    #[test]
    fn test_add_field_with_rules_accepts_warnings() {
        let mut registry = FieldRegistry::empty();
        let id = registry
            .add_field_with_rules(
                FieldKind::Text,
                "Nickname",
                ValidationRules::new().max_size_bytes(10),
            )
            .unwrap();
        assert!(registry.contains(id));
    }

    #[test]
    fn test_set_value_unknown_field() {
        let mut registry = FieldRegistry::new();
        let result = registry.set_value(FieldId::new(999), FormValue::text("x"));
        assert!(matches!(result, Err(FormgenError::UnknownField(_))));
    }

    #[test]
    fn test_set_value_wrong_shape() {
        let mut registry = FieldRegistry::new();
        let checkbox = registry.id_at(2).unwrap();
        let result = registry.set_value(checkbox, FormValue::text("yes"));
        assert!(matches!(result, Err(FormgenError::InvalidValue(_))));
        assert!(registry.value(checkbox).is_none());
    }

    #[test]
    fn test_set_value_clears_error() {
        let mut registry = FieldRegistry::new();
        let email = registry.id_at(4).unwrap();
        let report = registry.validate();
        registry.apply_report(&report);
        assert_eq!(registry.error(email), Some("Email is required"));

        // Still invalid, but the error is cleared until the next pass.
        registry.set_value(email, FormValue::text("nope")).unwrap();
        assert_eq!(registry.error(email), None);
    }

    #[test]
    fn test_set_value_without_error_is_noop_for_errors() {
        let mut registry = FieldRegistry::new();
        let text = registry.id_at(0).unwrap();
        registry.set_value(text, FormValue::text("hello")).unwrap();
        assert_eq!(registry.error(text), None);
        assert!(registry.errors().is_empty());
    }

    #[test]
    fn test_clear_value() {
        let mut registry = FieldRegistry::new();
        let text = registry.id_at(0).unwrap();
        registry.set_value(text, FormValue::text("hello")).unwrap();
        registry.clear_value(text).unwrap();
        assert!(registry.value(text).is_none());
        assert!(registry.clear_value(FieldId::new(999)).is_err());
    }

    #[test]
    fn test_remove_field_drops_value_and_error() {
        let mut registry = FieldRegistry::new();
        let phone = registry.id_at(5).unwrap();
        registry.set_value(phone, FormValue::text("123")).unwrap();
        registry.apply_report(&registry.validate());
        assert!(registry.error(phone).is_some());

        assert!(registry.remove_field(phone));
        assert!(!registry.contains(phone));
        assert!(!registry.values().contains_key(&phone));
        assert!(!registry.errors().contains_key(&phone));
        assert!(registry.validate().get(phone).is_none());
        assert!(!registry.remove_field(phone));
    }

    #[test]
    fn test_remove_kind_removes_all_of_kind() {
        let mut registry = FieldRegistry::new();
        registry.add_field(FieldKind::Email, "Backup Email");
        assert_eq!(registry.remove_kind(FieldKind::Email), 2);
        assert!(registry.fields().all(|f| f.kind != FieldKind::Email));
        assert_eq!(registry.remove_kind(FieldKind::Email), 0);
    }

    #[test]
    fn test_same_kind_fields_are_independent() {
        let mut registry = FieldRegistry::empty();
        let rules = ValidationRules::new().required().format(Format::Email);
        let work = registry
            .add_field_with_rules(FieldKind::Email, "Work Email", rules.clone())
            .unwrap();
        let home = registry
            .add_field_with_rules(FieldKind::Email, "Home Email", rules)
            .unwrap();

        registry.set_value(work, FormValue::text("me@work.com")).unwrap();
        assert!(registry.value(home).is_none());

        let report = registry.validate();
        assert!(report.get(work).is_none());
        assert_eq!(report.get(home).unwrap().message(), "Home Email is required");
    }

    #[test]
    fn test_apply_report_replaces_errors() {
        let mut registry = FieldRegistry::new();
        registry.apply_report(&registry.validate());
        assert_eq!(registry.errors().len(), 3);

        let email = registry.id_at(4).unwrap();
        let phone = registry.id_at(5).unwrap();
        let file = registry.id_at(6).unwrap();
        registry.set_value(email, FormValue::text("a@b.com")).unwrap();
        registry.set_value(phone, FormValue::text("1234567890")).unwrap();
        registry.set_value(file, FormValue::file("photo.jpg", 1024)).unwrap();
        registry.apply_report(&registry.validate());
        assert!(registry.errors().is_empty());
    }

    #[test]
    fn test_reset_restores_defaults_and_invalidates_old_ids() {
        let mut registry = FieldRegistry::new();
        let old_text = registry.id_at(0).unwrap();
        registry.set_value(old_text, FormValue::text("hi")).unwrap();
        registry.remove_kind(FieldKind::File);
        registry.add_field(FieldKind::Radio, "Extra");
        registry.apply_report(&registry.validate());

        registry.reset();

        let labels: Vec<String> = registry.fields().map(|f| f.label.clone()).collect();
        let expected: Vec<String> = default_fields().into_iter().map(|s| s.label).collect();
        assert_eq!(labels, expected);
        assert!(registry.values().is_empty());
        assert!(registry.errors().is_empty());
        assert!(!registry.contains(old_text));
    }

    #[test]
    fn test_rows() {
        let mut registry = FieldRegistry::new();
        let email = registry.id_at(4).unwrap();
        registry.set_value(email, FormValue::text("x")).unwrap();
        registry.apply_report(&registry.validate());
        let (def, value, error) = registry.rows().nth(4).unwrap();
        assert_eq!(def.label, "Email");
        assert_eq!(value, Some(&FormValue::text("x")));
        assert_eq!(error, Some("Invalid Email format"));
    }
}
