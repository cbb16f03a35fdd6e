//! Remove command implementation.

use crate::cli::args::KeyArgs;
use crate::error::Result;
use crate::installer::InstallerKey;
use crate::registry::InstallerRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The remove command implementation.
pub struct RemoveCommand<'a> {
    registry: &'a dyn InstallerRegistry,
    args: KeyArgs,
}

impl<'a> RemoveCommand<'a> {
    /// Create a new remove command.
    pub fn new(registry: &'a dyn InstallerRegistry, args: KeyArgs) -> Self {
        Self { registry, args }
    }
}

impl Command for RemoveCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let key = InstallerKey::parse(&self.args.key)?;
        self.registry.remove(&key.to_string())?;
        ui.success(&format!("Removed {}", key));
        Ok(CommandResult::success())
    }
}
