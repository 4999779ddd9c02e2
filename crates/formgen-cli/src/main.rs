//! The `formgen` binary.

use std::path::PathBuf;
use std::process::ExitCode;

use formgen_cli::commands::register_builtin_commands;
use formgen_cli::{load_settings, CommandRegistry};
use formgen_core::logging::setup_logging;

fn main() -> ExitCode {
    let mut registry = CommandRegistry::new();
    register_builtin_commands(&mut registry);
    let matches = registry.build_cli().get_matches();

    let config = matches.get_one::<PathBuf>("config");
    let settings = match load_settings(config.map(PathBuf::as_path)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("formgen: {e}");
            return ExitCode::from(e.exit_code());
        }
    };
    setup_logging(&settings);

    match registry.execute(&matches, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("formgen: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
