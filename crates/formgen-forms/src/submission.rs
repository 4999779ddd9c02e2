//! Accepted submissions.
//!
//! A [`Submission`] is the snapshot handed to a sink once a form validates:
//! every field that holds a value, in registry order, stamped with a fresh
//! id and the time of acceptance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use formgen_core::FormgenResult;

use crate::fields::FieldId;
use crate::kinds::FieldKind;
use crate::registry::FieldRegistry;
use crate::value::FormValue;

/// One field's value inside a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedField {
    /// The field id at submission time.
    pub id: FieldId,
    /// The field kind.
    pub kind: FieldKind,
    /// The field label.
    pub label: String,
    /// The submitted value.
    pub value: FormValue,
}

/// The values of an accepted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// A unique id for this submission.
    pub id: Uuid,
    /// When the submission was accepted.
    pub submitted_at: DateTime<Utc>,
    /// The filled fields, in registry order.
    pub fields: Vec<SubmittedField>,
}

impl Submission {
    /// Snapshots the filled fields of a registry.
    ///
    /// Fields without a value are left out.
    pub fn from_registry(registry: &FieldRegistry) -> Self {
        let fields = registry
            .rows()
            .filter_map(|(def, value, _)| {
                value.map(|value| SubmittedField {
                    id: def.id,
                    kind: def.kind,
                    label: def.label.clone(),
                    value: value.clone(),
                })
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            fields,
        }
    }

    /// Returns the submitted value of the first field with this label.
    pub fn value_of(&self, label: &str) -> Option<&FormValue> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| &f.value)
    }

    /// Returns the number of submitted fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field held a value.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serializes the submission as compact JSON.
    pub fn to_json(&self) -> FormgenResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the submission as indented JSON.
    pub fn to_json_pretty(&self) -> FormgenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
