//! The `check` command.
//!
//! Runs the settings checks and the field checks on the default form.

use std::io::{self, Write};

use formgen_core::checks::{check_settings, CheckMessage};
use formgen_core::{FormgenError, FormgenResult, Settings};
use formgen_forms::checks::check_fields;
use formgen_forms::FieldRegistry;

use crate::command::ManagementCommand;
use crate::render::render_checks;

/// Runs system checks on the settings and the default form.
pub struct CheckCommand;

/// Collects every check message for the given settings.
pub fn run_checks(settings: &Settings) -> Vec<CheckMessage> {
    let mut messages = check_settings(settings);
    messages.extend(check_fields(FieldRegistry::new().fields()));
    messages
}

/// Runs the checks and writes the results.
///
/// Fails with `ImproperlyConfigured` if any error-level message was found,
/// or any warning when `fail_level_warning` is set.
pub fn run_check<W: Write>(
    settings: &Settings,
    fail_level_warning: bool,
    out: &mut W,
) -> FormgenResult<()> {
    let messages = run_checks(settings);
    render_checks(&messages, out)?;

    let failing = messages
        .iter()
        .filter(|m| if fail_level_warning { m.is_serious() } else { m.is_error() })
        .count();
    if failing > 0 {
        return Err(FormgenError::ImproperlyConfigured(format!(
            "System check found {failing} problem(s)"
        )));
    }
    Ok(())
}

impl ManagementCommand for CheckCommand {
    fn name(&self) -> &'static str {
        "check"
    }

    fn help(&self) -> &'static str {
        "Run system checks"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("strict")
                .long("strict")
                .action(clap::ArgAction::SetTrue)
                .help("Fail on warnings as well as errors"),
        )
    }

    fn handle(&self, matches: &clap::ArgMatches, settings: &Settings) -> FormgenResult<()> {
        run_check(settings, matches.get_flag("strict"), &mut io::stdout().lock())
    }
}
