//! # formgen-forms
//!
//! The form model for formgen: field kinds and values, per-field validation
//! rules, the ordered field registry, the validation engine, and the submit
//! cycle that hands accepted values to a sink.
//!
//! ## Quick Start
//!
//! ```rust
//! use formgen_forms::{FieldKind, FieldRegistry, FormValue};
//!
//! let mut registry = FieldRegistry::new();
//! let email = registry.id_at(4).unwrap();
//! registry.set_value(email, FormValue::text("a@b.com")).unwrap();
//!
//! let report = registry.validate();
//! assert!(report.get(email).is_none());
//! assert!(!report.is_valid()); // phone and file are still required
//!
//! let extra = registry.add_field(FieldKind::Text, "Nickname");
//! assert_eq!(registry.len(), 8);
//! assert!(registry.remove_field(extra));
//! ```

pub mod checks;
pub mod fields;
pub mod formats;
pub mod kinds;
pub mod registry;
pub mod rules;
pub mod session;
pub mod sink;
pub mod submission;
pub mod validation;
pub mod validators;
pub mod value;

pub use fields::{default_fields, FieldDefinition, FieldId, FieldSpec};
pub use kinds::FieldKind;
pub use registry::FieldRegistry;
pub use rules::{Format, ValidationRules};
pub use session::{FormSession, SubmitOutcome};
pub use sink::{sink_for, InMemorySink, LogSink, StdoutSink, SubmissionSink};
pub use submission::{Submission, SubmittedField};
pub use validation::{validate, FieldError, ValidationReport};
pub use value::{FileHandle, FormValue};
