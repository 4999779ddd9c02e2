//! Plain-text rendering of forms, reports, and checks.

use std::io::{self, Write};

use formgen_core::checks::{CheckLevel, CheckMessage};
use formgen_forms::{FieldKind, FieldRegistry, Submission, ValidationReport};

/// Help text for the interactive session.
pub const SESSION_HELP: &str = "\
Commands:
  add <kind> [label]   add a field (see 'kinds')
  remove <n>           remove the field at position n
  set <n> <value>      set a value (checkbox: yes/no, file: <path> or <name>:<bytes>)
  clear <n>            clear a value
  submit               validate and submit the form
  reset                restore the default fields
  show                 show the form
  kinds                list field kinds
  help                 show this help
  quit                 leave the session
";

/// Writes one row per field, with its error beneath.
pub fn render_form<W: Write>(registry: &FieldRegistry, out: &mut W) -> io::Result<()> {
    if registry.is_empty() {
        return writeln!(out, "(no fields)");
    }
    for (index, (def, value, error)) in registry.rows().enumerate() {
        match value {
            Some(value) => writeln!(out, "{}. {} [{}] = {value}", index + 1, def.label, def.kind)?,
            None => writeln!(out, "{}. {} [{}]", index + 1, def.label, def.kind)?,
        }
        if let Some(error) = error {
            writeln!(out, "     ! {error}")?;
        }
    }
    Ok(())
}

/// Writes the error summary of a rejected submission.
pub fn render_report<W: Write>(report: &ValidationReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "Form has {} error(s):", report.len())?;
    for error in report.errors() {
        writeln!(out, "  - {}: {}", error.label, error.message())?;
    }
    Ok(())
}

/// Writes the confirmation of an accepted submission.
pub fn render_submission<W: Write>(submission: &Submission, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Submitted {} field(s) as {}",
        submission.len(),
        submission.id
    )
}

/// Writes the add-field menu.
pub fn render_kinds<W: Write>(out: &mut W) -> io::Result<()> {
    for kind in FieldKind::ALL {
        writeln!(out, "  {:<9} {}", kind.as_str(), kind.menu_label())?;
    }
    Ok(())
}

/// Writes check messages followed by a summary line.
pub fn render_checks<W: Write>(messages: &[CheckMessage], out: &mut W) -> io::Result<()> {
    for message in messages {
        writeln!(out, "{message}")?;
    }
    if messages.is_empty() {
        writeln!(out, "System check identified no issues.")
    } else {
        let errors = messages.iter().filter(|m| m.is_error()).count();
        let warnings = messages
            .iter()
            .filter(|m| m.level == CheckLevel::Warning)
            .count();
        writeln!(
            out,
            "System check identified {} issue(s) ({errors} error(s), {warnings} warning(s)).",
            messages.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formgen_forms::FormValue;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_form_rows_and_errors() {
        let mut registry = FieldRegistry::new();
        let email = registry.id_at(4).unwrap();
        registry.set_value(email, FormValue::text("bad")).unwrap();
        registry.apply_report(&registry.validate());

        let text = rendered(|out| render_form(&registry, out));
        assert!(text.starts_with("1. Custom Text Input [text]\n"));
        assert!(text.contains("5. Email [email] = \"bad\"\n     ! Invalid Email format\n"));
        assert!(text.contains("7. File Upload [file]\n     ! File Upload is required\n"));
    }

    #[test]
    fn test_render_empty_form() {
        let text = rendered(|out| render_form(&FieldRegistry::empty(), out));
        assert_eq!(text, "(no fields)\n");
    }

    #[test]
    fn test_render_report() {
        let report = FieldRegistry::new().validate();
        let text = rendered(|out| render_report(&report, out));
        assert!(text.starts_with("Form has 3 error(s):\n"));
        assert!(text.contains("  - Phone Number: Phone Number is required\n"));
    }

    #[test]
    fn test_render_kinds() {
        let text = rendered(|out| render_kinds(out));
        assert_eq!(text.lines().count(), 7);
        assert!(text.contains("phone     Phone Number"));
    }

    #[test]
    fn test_render_checks() {
        assert_eq!(
            rendered(|out| render_checks(&[], out)),
            "System check identified no issues.\n"
        );
        let messages = [CheckMessage::warning("odd", None, None, Some("x.W001"))];
        let text = rendered(|out| render_checks(&messages, out));
        assert!(text.ends_with("(0 error(s), 1 warning(s)).\n"));
    }
}
