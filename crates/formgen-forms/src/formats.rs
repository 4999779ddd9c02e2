//! The format-rule table.
//!
//! Maps each [`Format`] to the pattern a text value must match in full.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rules::Format;

/// Something, an `@`, something, a dot, something; no whitespace and no
/// further `@` in any part.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Exactly ten ASCII digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));

/// Returns the compiled pattern for a format.
pub fn pattern(format: Format) -> &'static Regex {
    match format {
        Format::Email => &EMAIL_RE,
        Format::Phone => &PHONE_RE,
    }
}

/// Returns `true` if `value` satisfies `format`.
pub fn matches_format(format: Format, value: &str) -> bool {
    pattern(format).is_match(value)
}
