//! Built-in commands.
//!
//! Each command implements the
//! [`ManagementCommand`](crate::command::ManagementCommand) trait. The work of
//! each command lives in a `run_*` function that writes to any
//! [`std::io::Write`], so it can be driven from tests.

pub mod check;
pub mod kinds;
pub mod session;
pub mod validate;

pub use check::CheckCommand;
pub use kinds::KindsCommand;
pub use session::SessionCommand;
pub use validate::ValidateCommand;

use crate::command::CommandRegistry;

/// Registers all built-in commands into the given registry.
pub fn register_builtin_commands(registry: &mut CommandRegistry) {
    registry.register(Box::new(CheckCommand));
    registry.register(Box::new(KindsCommand));
    registry.register(Box::new(SessionCommand));
    registry.register(Box::new(ValidateCommand));
}
