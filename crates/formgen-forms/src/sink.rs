//! Submission sinks.
//!
//! A [`SubmissionSink`] receives every accepted [`Submission`].
//!
//! ## Sinks
//!
//! - [`LogSink`] - Emits the submission as a `tracing` event (the default)
//! - [`StdoutSink`] - Prints the submission as pretty JSON
//! - [`InMemorySink`] - Collects submissions in memory (for tests and embedding)

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use formgen_core::{FormgenResult, Settings, SinkKind};

use crate::submission::Submission;

/// A destination for accepted submissions.
pub trait SubmissionSink: Send + Sync {
    /// Delivers one submission.
    fn deliver(&self, submission: &Submission) -> FormgenResult<()>;

    /// Returns the configuration name of this sink.
    fn name(&self) -> &'static str;
}

/// Emits each submission as an `info` event with a JSON payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn deliver(&self, submission: &Submission) -> FormgenResult<()> {
        let payload = submission.to_json()?;
        tracing::info!(
            submission = %submission.id,
            fields = submission.len(),
            payload = %payload,
            "form submitted"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        SinkKind::Log.as_str()
    }
}

/// Prints each submission to stdout as pretty JSON between separators.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl SubmissionSink for StdoutSink {
    fn deliver(&self, submission: &Submission) -> FormgenResult<()> {
        let separator = "-".repeat(60);
        let formatted = submission.to_json_pretty()?;
        println!("{separator}");
        println!("{formatted}");
        println!("{separator}");
        tracing::debug!(submission = %submission.id, "submission printed");
        Ok(())
    }

    fn name(&self) -> &'static str {
        SinkKind::Stdout.as_str()
    }
}

/// Collects submissions in memory.
///
/// Clones share the same storage, so a caller can keep one handle and hand
/// another to a session.
#[derive(Debug, Clone, Default)]
pub struct InMemorySink {
    submissions: Arc<Mutex<Vec<Submission>>>,
}

impl InMemorySink {
    /// Creates an empty in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the store, recovering it if a holder panicked.
    ///
    /// Every mutation is a single `push` or `clear`, so the vector is whole
    /// even after a panic elsewhere.
    fn lock(&self) -> MutexGuard<'_, Vec<Submission>> {
        self.submissions.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("submission store poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    /// Returns a copy of all delivered submissions.
    pub fn submissions(&self) -> Vec<Submission> {
        self.lock().clone()
    }

    /// Returns the most recently delivered submission.
    pub fn last(&self) -> Option<Submission> {
        self.lock().last().cloned()
    }

    /// Returns the number of delivered submissions.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Drops all stored submissions.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl SubmissionSink for InMemorySink {
    fn deliver(&self, submission: &Submission) -> FormgenResult<()> {
        self.lock().push(submission.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        SinkKind::Memory.as_str()
    }
}

/// Builds the sink selected by the settings.
pub fn sink_for(settings: &Settings) -> Box<dyn SubmissionSink> {
    match settings.submission_sink {
        SinkKind::Log => Box::new(LogSink),
        SinkKind::Stdout => Box::new(StdoutSink),
        SinkKind::Memory => Box::new(InMemorySink::new()),
    }
}
