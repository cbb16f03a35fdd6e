//! Show command implementation.
//!
//! The `outfitter show` command prints one installer descriptor as JSON.

use crate::cli::args::KeyArgs;
use crate::error::Result;
use crate::registry::InstallerRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand<'a> {
    registry: &'a dyn InstallerRegistry,
    args: KeyArgs,
}

impl<'a> ShowCommand<'a> {
    /// Create a new show command.
    pub fn new(registry: &'a dyn InstallerRegistry, args: KeyArgs) -> Self {
        Self { registry, args }
    }
}

impl Command for ShowCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let installer = self.registry.get_installer(&self.args.key)?;
        ui.output(&serde_json::to_string_pretty(&installer)?);
        Ok(CommandResult::success())
    }
}
