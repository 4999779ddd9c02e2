//! # formgen
//!
//! A dynamic form builder: an ordered registry of typed fields, per-field
//! validation rules, and a submit cycle that delivers accepted values to a
//! sink.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient access.
//! You can depend on `formgen` to get everything, or depend on individual
//! crates for finer-grained control.

/// Settings, system checks, logging, and error types.
pub use formgen_core as core;

/// Field kinds and values, validation rules, the registry, and sinks.
#[cfg(feature = "forms")]
pub use formgen_forms as forms;

/// The command-line front end.
#[cfg(feature = "cli")]
pub use formgen_cli as cli;

/// Third-party crates used in the public API.
pub use chrono;
pub use serde;
pub use serde_json;
pub use tracing;
pub use tracing_subscriber;
pub use uuid;

/// Commonly used types, for glob import.
pub mod prelude {
    pub use formgen_core::{FormgenError, FormgenResult, Settings, SinkKind, ValidationError};

    #[cfg(feature = "forms")]
    pub use formgen_forms::{
        FieldId, FieldKind, FieldRegistry, FileHandle, FormSession, FormValue, SubmitOutcome,
        SubmissionSink, ValidationReport, ValidationRules,
    };
}
