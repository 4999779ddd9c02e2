//! Command framework for the formgen CLI.
//!
//! This module provides the [`ManagementCommand`] trait for defining CLI
//! commands and [`CommandRegistry`] for registering and dispatching them.
//!
//! ## Defining a Custom Command
//!
//! ```rust
//! use formgen_cli::command::ManagementCommand;
//! use formgen_core::{FormgenResult, Settings};
//!
//! struct GreetCommand;
//!
//! impl ManagementCommand for GreetCommand {
//!     fn name(&self) -> &'static str { "greet" }
//!     fn help(&self) -> &'static str { "Say hello" }
//!
//!     fn handle(&self, _matches: &clap::ArgMatches, _settings: &Settings) -> FormgenResult<()> {
//!         println!("Hello from formgen!");
//!         Ok(())
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use formgen_core::{settings_loader, FormgenError, FormgenResult, Settings};

/// A command that can be registered and invoked through the CLI.
pub trait ManagementCommand: Send + Sync {
    /// Returns the name of this command (used to invoke it from the CLI).
    fn name(&self) -> &'static str;

    /// Returns a short help description for this command.
    fn help(&self) -> &'static str;

    /// Adds custom arguments to the clap command.
    ///
    /// The default implementation returns the command unchanged.
    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd
    }

    /// Executes the command with the given argument matches and settings.
    fn handle(&self, matches: &clap::ArgMatches, settings: &Settings) -> FormgenResult<()>;
}

/// A registry of commands, keyed by name.
pub struct CommandRegistry {
    commands: HashMap<&'static str, Box<dyn ManagementCommand>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Registers a command, replacing any command with the same name.
    pub fn register(&mut self, command: Box<dyn ManagementCommand>) {
        self.commands.insert(command.name(), command);
    }

    /// Returns the command with the given name, if registered.
    pub fn get(&self, name: &str) -> Option<&dyn ManagementCommand> {
        self.commands.get(name).map(AsRef::as_ref)
    }

    /// Returns a sorted list of all registered command names.
    pub fn list_commands(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Builds the top-level clap `Command` with every registered subcommand
    /// and the global `--config` option.
    pub fn build_cli(&self) -> clap::Command {
        let mut app = clap::Command::new("formgen")
            .about("Build, fill, and validate dynamic forms")
            .subcommand_required(true)
            .arg(
                clap::Arg::new("config")
                    .long("config")
                    .short('c')
                    .global(true)
                    .value_name("PATH")
                    .value_parser(clap::value_parser!(PathBuf))
                    .help("Settings file (TOML, or JSON by extension)"),
            );

        for name in self.list_commands() {
            if let Some(cmd) = self.get(name) {
                let subcmd = clap::Command::new(name).about(cmd.help());
                app = app.subcommand(cmd.add_arguments(subcmd));
            }
        }

        app
    }

    /// Dispatches to the subcommand named in `matches`.
    pub fn execute(&self, matches: &clap::ArgMatches, settings: &Settings) -> FormgenResult<()> {
        let (name, sub_matches) = matches
            .subcommand()
            .ok_or_else(|| FormgenError::Parse("No subcommand specified".to_string()))?;

        let cmd = self
            .get(name)
            .ok_or_else(|| FormgenError::Parse(format!("Unknown command: {name}")))?;

        tracing::debug!(command = name, "executing command");
        cmd.handle(sub_matches, settings)
    }
}

/// Loads settings from the `--config` file when given, else from defaults,
/// applying environment overrides either way.
pub fn load_settings(config: Option<&Path>) -> FormgenResult<Settings> {
    match config {
        Some(path) => settings_loader::from_path_with_env(path),
        None => settings_loader::from_env(),
    }
}
