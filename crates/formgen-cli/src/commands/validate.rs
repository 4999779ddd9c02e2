//! The `validate` command.
//!
//! Fills the default form from `--set <kind>=<value>` pairs and submits it
//! once. A rejected form prints its errors and exits with the data-error
//! code; an accepted one is delivered to the configured sink.

use std::io::{self, Write};

use formgen_core::{FormgenError, FormgenResult, Settings};
use formgen_forms::{FieldKind, FormSession, SubmitOutcome};

use crate::command::ManagementCommand;
use crate::input::parse_value;
use crate::render::{render_report, render_submission};

/// Validates a filled default form in one shot.
pub struct ValidateCommand;

/// Splits a `<kind>=<value>` assignment.
pub fn parse_assignment(raw: &str) -> FormgenResult<(FieldKind, &str)> {
    let (kind, value) = raw.split_once('=').ok_or_else(|| {
        FormgenError::Parse(format!("'{raw}' is not of the form <kind>=<value>"))
    })?;
    Ok((kind.parse()?, value))
}

/// Applies the assignments to a session's form and submits it.
///
/// Each assignment targets the first field of its kind.
pub fn run_validate<W: Write>(
    session: &mut FormSession,
    assignments: &[String],
    out: &mut W,
) -> FormgenResult<()> {
    for raw in assignments {
        let (kind, value) = parse_assignment(raw)?;
        let registry = session.registry_mut();
        let id = registry
            .fields()
            .find(|f| f.kind == kind)
            .map(|f| f.id)
            .ok_or_else(|| FormgenError::UnknownField(format!("the form has no {kind} field")))?;
        registry.set_value(id, parse_value(kind, value)?)?;
    }

    match session.submit()? {
        SubmitOutcome::Accepted(submission) => {
            render_submission(&submission, out)?;
            Ok(())
        }
        SubmitOutcome::Rejected(report) => {
            render_report(&report, out)?;
            Err(FormgenError::ValidationError(report.into_validation_error()))
        }
    }
}

impl ManagementCommand for ValidateCommand {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn help(&self) -> &'static str {
        "Fill the default form and validate it once"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("set")
                .long("set")
                .short('s')
                .value_name("KIND=VALUE")
                .action(clap::ArgAction::Append)
                .help("Set the first field of KIND (checkbox: yes/no, file: <path> or <name>:<bytes>)"),
        )
    }

    fn handle(&self, matches: &clap::ArgMatches, settings: &Settings) -> FormgenResult<()> {
        let assignments: Vec<String> = matches
            .get_many::<String>("set")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        let mut session = FormSession::from_settings(settings);
        run_validate(&mut session, &assignments, &mut io::stdout().lock())
    }
}
