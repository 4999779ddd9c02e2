//! The `session` command: an interactive form over stdin and stdout.
//!
//! Each input line is one [`Action`]. Mistakes in a line (an unknown
//! command, a bad position, a value that does not fit) are reported and the
//! session carries on; only I/O failures end it.

use std::io::{self, BufRead, Write};

use formgen_core::{FormgenError, FormgenResult, Settings};
use formgen_forms::{FormSession, SubmitOutcome};

use crate::command::ManagementCommand;
use crate::input::{parse_value, resolve_position, Action};
use crate::render::{render_form, render_kinds, render_report, render_submission, SESSION_HELP};

/// Runs an interactive form session.
pub struct SessionCommand;

/// Whether the session continues after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// End the session.
    Quit,
}

/// Applies one action to the session, writing its feedback.
pub fn apply<W: Write>(
    session: &mut FormSession,
    action: Action,
    out: &mut W,
) -> FormgenResult<Flow> {
    match action {
        Action::Add { kind, label } => {
            let label = label.unwrap_or_else(|| kind.menu_label().to_string());
            let registry = session.registry_mut();
            registry.add_field(kind, label.clone());
            writeln!(out, "Added {label} at position {}", registry.len())?;
        }
        Action::Remove(position) => {
            let registry = session.registry_mut();
            let id = resolve_position(registry, position)?;
            let label = registry.get(id).map(|f| f.label.clone()).unwrap_or_default();
            registry.remove_field(id);
            writeln!(out, "Removed {label}")?;
        }
        Action::Set { position, raw } => {
            let registry = session.registry_mut();
            let id = resolve_position(registry, position)?;
            let kind = registry
                .get(id)
                .map(|f| f.kind)
                .ok_or_else(|| FormgenError::UnknownField(id.to_string()))?;
            registry.set_value(id, parse_value(kind, &raw)?)?;
        }
        Action::Clear(position) => {
            let registry = session.registry_mut();
            let id = resolve_position(registry, position)?;
            registry.clear_value(id)?;
        }
        Action::Submit => match session.submit()? {
            SubmitOutcome::Accepted(submission) => {
                render_submission(&submission, out)?;
                writeln!(out, "The form has been reset.")?;
            }
            SubmitOutcome::Rejected(report) => render_report(&report, out)?,
        },
        Action::Reset => {
            session.reset();
            writeln!(out, "The form has been reset.")?;
        }
        Action::Show => render_form(session.registry(), out)?,
        Action::Kinds => render_kinds(out)?,
        Action::Help => write!(out, "{SESSION_HELP}")?,
        Action::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Reads actions line by line until `quit` or end of input.
///
/// Every error except I/O is written as `error: ...` and the loop goes on.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut FormSession,
    prompt: &str,
    input: R,
    out: &mut W,
) -> FormgenResult<()> {
    render_form(session.registry(), out)?;
    let mut lines = input.lines();

    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let result = line.parse::<Action>().and_then(|action| apply(session, action, out));
        match result {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(FormgenError::IoError(e)) => return Err(FormgenError::IoError(e)),
            Err(e) => {
                tracing::debug!(error = %e, "session command failed");
                writeln!(out, "error: {e}")?;
            }
        }
    }

    tracing::info!("form session ended");
    Ok(())
}

impl ManagementCommand for SessionCommand {
    fn name(&self) -> &'static str {
        "session"
    }

    fn help(&self) -> &'static str {
        "Build and fill a form interactively"
    }

    fn handle(&self, _matches: &clap::ArgMatches, settings: &Settings) -> FormgenResult<()> {
        let mut session = FormSession::from_settings(settings);
        let stdin = io::stdin();
        run_session(&mut session, &settings.prompt, stdin.lock(), &mut io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use formgen_forms::InMemorySink;

    fn drive(session: &mut FormSession, script: &str) -> String {
        let mut out = Vec::new();
        run_session(session, "> ", Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_quit_ends_session() {
        let mut session = FormSession::new(Box::new(InMemorySink::new()));
        let text = drive(&mut session, "quit\nshow\n");
        assert!(text.starts_with("1. Custom Text Input [text]\n"));
        assert!(text.ends_with("> "));
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let mut session = FormSession::new(Box::new(InMemorySink::new()));
        let text = drive(&mut session, "dance\nset 99 x\nset 3 maybe\nadd text Nick\n");
        assert!(text.contains("error: Parse error: unknown command 'dance'"));
        assert!(text.contains("error: Unknown field: no field at position 99"));
        assert!(text.contains("error: Invalid value:"));
        assert!(text.contains("Added Nick at position 8"));
        assert_eq!(session.registry().len(), 8);
    }

    #[test]
    fn test_add_uses_menu_label() {
        let mut session = FormSession::new(Box::new(InMemorySink::new()));
        let mut out = Vec::new();
        let action = "add phone".parse().unwrap();
        assert_eq!(apply(&mut session, action, &mut out).unwrap(), Flow::Continue);
        let last = session.registry().id_at(7).unwrap();
        assert_eq!(session.registry().get(last).unwrap().label, "Phone Number");
    }

    #[test]
    fn test_remove_and_clear() {
        let mut session = FormSession::new(Box::new(InMemorySink::new()));
        let text = drive(&mut session, "set 1 hello\nclear 1\nremove 3\n");
        assert!(text.contains("Removed Custom Checkbox"));
        assert!(session.registry().values().is_empty());
        assert_eq!(session.registry().len(), 6);
    }
}
