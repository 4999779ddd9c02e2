//! The validation engine.
//!
//! [`validate`] is a pure function of the form's fields and values. For each
//! field, in registry order, it runs the field's validator chain (required,
//! min length, max length, format, file extension, file size). When several
//! rules fail, the last failing rule's message is the one reported: each
//! field carries at most one error.
//!
//! The result is a [`ValidationReport`]. Callers store it wholesale; a new
//! report always replaces the previous one, it is never merged.

use std::collections::HashMap;

use formgen_core::ValidationError;

use crate::fields::{FieldDefinition, FieldId};
use crate::validators::{RequiredValidator, Validator};
use crate::value::FormValue;

/// The error reported for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field that failed.
    pub field: FieldId,
    /// The field's label at validation time.
    pub label: String,
    /// The last failing rule's error.
    pub error: ValidationError,
}

impl FieldError {
    /// Returns the user-facing message.
    pub fn message(&self) -> &str {
        &self.error.message
    }
}

/// The outcome of one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Returns `true` if no rule fired on any field.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the per-field errors, in registry order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the error for a field, if it failed.
    pub fn get(&self, id: FieldId) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == id)
    }

    /// Returns the number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the messages keyed by field id.
    pub fn to_map(&self) -> HashMap<FieldId, String> {
        self.errors
            .iter()
            .map(|e| (e.field, e.error.message.clone()))
            .collect()
    }

    /// Converts the report into a compound [`ValidationError`] keyed by label.
    pub fn into_validation_error(self) -> ValidationError {
        let mut field_errors: HashMap<String, Vec<ValidationError>> = HashMap::new();
        for e in self.errors {
            field_errors.entry(e.label).or_default().push(e.error);
        }
        ValidationError::with_field_errors(field_errors)
    }
}

/// Validates a single field, returning the last failing rule's error.
///
/// A required field with a blank value reports only that it is required;
/// its other rules are not run. Optional fields run every rule, so empty
/// text still fails a minimum length or a format.
pub fn validate_field(field: &FieldDefinition, value: Option<&FormValue>) -> Option<ValidationError> {
    if field.rules.required && !value.is_some_and(FormValue::is_present) {
        tracing::trace!(field = %field.id, "required field is blank");
        return RequiredValidator.validate(&field.label, value).err();
    }

    let mut last = None;
    for validator in field.rules.validators(field.kind) {
        if let Err(error) = validator.validate(&field.label, value) {
            tracing::trace!(
                field = %field.id,
                validator = validator.name(),
                code = %error.code,
                "rule failed"
            );
            last = Some(error);
        }
    }
    last
}

/// Validates `(definition, value)` pairs in order.
///
/// # Examples
///
/// ```
/// use formgen_forms::fields::{FieldDefinition, FieldId, FieldSpec};
/// use formgen_forms::rules::{Format, ValidationRules};
/// use formgen_forms::{validate, FieldKind, FormValue};
///
/// let email = FieldDefinition::from_spec(
///     FieldId::new(1),
///     FieldSpec::new(FieldKind::Email, "Email")
///         .rules(ValidationRules::new().required().format(Format::Email)),
/// );
/// let value = FormValue::text("not-an-email");
///
/// let report = validate([(&email, Some(&value))]);
/// assert_eq!(report.errors()[0].message(), "Invalid Email format");
/// ```
pub fn validate<'a, I>(entries: I) -> ValidationReport
where
    I: IntoIterator<Item = (&'a FieldDefinition, Option<&'a FormValue>)>,
{
    let mut errors = Vec::new();
    let mut checked = 0_usize;

    for (field, value) in entries {
        checked += 1;
        if let Some(error) = validate_field(field, value) {
            errors.push(FieldError {
                field: field.id,
                label: field.label.clone(),
                error,
            });
        }
    }

    tracing::debug!(fields = checked, failed = errors.len(), "validated form");
    ValidationReport { errors }
}

/// Validates field definitions against a separate value map.
pub fn validate_values(
    fields: &[FieldDefinition],
    values: &HashMap<FieldId, FormValue>,
) -> ValidationReport {
    validate(fields.iter().map(|field| (field, values.get(&field.id))))
}
