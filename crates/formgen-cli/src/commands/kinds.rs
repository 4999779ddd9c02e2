//! The `kinds` command: prints the add-field menu.

use std::io::{self, Write};

use formgen_core::{FormgenResult, Settings};

use crate::command::ManagementCommand;
use crate::render::render_kinds;

/// Lists the field kinds that can be added to a form.
pub struct KindsCommand;

/// Writes the kind menu.
pub fn run_kinds<W: Write>(out: &mut W) -> FormgenResult<()> {
    writeln!(out, "Field kinds:")?;
    render_kinds(out)?;
    Ok(())
}

impl ManagementCommand for KindsCommand {
    fn name(&self) -> &'static str {
        "kinds"
    }

    fn help(&self) -> &'static str {
        "List the field kinds"
    }

    fn handle(&self, _matches: &clap::ArgMatches, _settings: &Settings) -> FormgenResult<()> {
        run_kinds(&mut io::stdout().lock())
    }
}
