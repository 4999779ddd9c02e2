//! Logging integration for formgen.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-session spans.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level` (e.g. "debug", "info",
/// "formgen_forms=trace"). In debug mode a pretty, human-readable format is
/// used; otherwise a structured JSON format is used. Logs go to standard
/// error so they never interleave with the session's rendered output.
///
/// Installing a second subscriber is silently ignored.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Returns `true` if `directive` parses as a tracing filter.
pub fn is_valid_filter(directive: &str) -> bool {
    tracing_subscriber::EnvFilter::try_new(directive).is_ok()
}

/// Creates a tracing span for one form session.
///
/// Every registry mutation and submission logged while the span is entered
/// carries the session id.
///
/// # Examples
///
/// ```
/// use formgen_core::logging::session_span;
///
/// let span = session_span("cli-1");
/// let _guard = span.enter();
/// tracing::info!("session started");
/// ```
pub fn session_span(session_id: &str) -> tracing::Span {
    tracing::info_span!("form_session", id = session_id)
}
