//! The submit cycle.
//!
//! A [`FormSession`] pairs a [`FieldRegistry`] with a [`SubmissionSink`].
//! Submitting validates the whole form and stores the resulting errors. A
//! clean form is delivered to the sink and the registry then resets to the
//! default fields. A rejected form keeps its values so the user can fix them.

use uuid::Uuid;

use formgen_core::logging::session_span;
use formgen_core::{FormgenResult, Settings};

use crate::registry::FieldRegistry;
use crate::sink::{sink_for, SubmissionSink};
use crate::submission::Submission;
use crate::validation::ValidationReport;

/// The result of a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was valid and its values were delivered.
    Accepted(Submission),
    /// The form had errors; they are also stored on the registry.
    Rejected(ValidationReport),
}

impl SubmitOutcome {
    /// Returns `true` if the submission was accepted.
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// One interactive form and where its submissions go.
pub struct FormSession {
    id: Uuid,
    registry: FieldRegistry,
    sink: Box<dyn SubmissionSink>,
    span: tracing::Span,
}

impl std::fmt::Debug for FormSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSession")
            .field("id", &self.id)
            .field("fields", &self.registry.len())
            .field("sink", &self.sink.name())
            .finish_non_exhaustive()
    }
}

impl FormSession {
    /// Creates a session over the default fields.
    pub fn new(sink: Box<dyn SubmissionSink>) -> Self {
        Self::with_registry(FieldRegistry::new(), sink)
    }

    /// Creates a session over an existing registry.
    pub fn with_registry(registry: FieldRegistry, sink: Box<dyn SubmissionSink>) -> Self {
        let id = Uuid::new_v4();
        let span = session_span(&id.to_string());
        span.in_scope(|| tracing::info!(sink = sink.name(), "form session started"));
        Self {
            id,
            registry,
            sink,
            span,
        }
    }

    /// Creates a session with the sink selected by the settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(sink_for(settings))
    }

    /// Returns the session id.
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the registry.
    pub const fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Returns the registry for editing.
    pub fn registry_mut(&mut self) -> &mut FieldRegistry {
        &mut self.registry
    }

    /// Returns the sink's configuration name.
    pub fn sink_name(&self) -> &'static str {
        self.sink.name()
    }

    /// Validates the form and delivers it if it is clean.
    ///
    /// The report replaces every stored error either way. On acceptance the
    /// registry resets. If the sink fails the values are kept and the error
    /// is returned.
    pub fn submit(&mut self) -> FormgenResult<SubmitOutcome> {
        let _entered = self.span.enter();

        let report = self.registry.validate();
        self.registry.apply_report(&report);

        if !report.is_valid() {
            tracing::info!(errors = report.len(), "submission rejected");
            return Ok(SubmitOutcome::Rejected(report));
        }

        let submission = Submission::from_registry(&self.registry);
        self.sink.deliver(&submission)?;
        tracing::info!(
            submission = %submission.id,
            fields = submission.len(),
            "submission accepted"
        );
        self.registry.reset();
        Ok(SubmitOutcome::Accepted(submission))
    }

    /// Restores the default fields and clears all values and errors.
    pub fn reset(&mut self) {
        let _entered = self.span.enter();
        self.registry.reset();
    }
}
