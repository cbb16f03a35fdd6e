//! Resolve command implementation.
//!
//! The `outfitter resolve` command prints the install order for a set of
//! installers, dependencies first.

use crate::cli::args::ResolveArgs;
use crate::error::Result;
use crate::registry::InstallerRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The resolve command implementation.
pub struct ResolveCommand<'a> {
    registry: &'a dyn InstallerRegistry,
    args: ResolveArgs,
}

impl<'a> ResolveCommand<'a> {
    /// Create a new resolve command.
    pub fn new(registry: &'a dyn InstallerRegistry, args: ResolveArgs) -> Self {
        Self { registry, args }
    }
}

impl Command for ResolveCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ordered = self.registry.get_ordered_installers(&self.args.keys)?;

        if self.args.json {
            ui.output(&serde_json::to_string_pretty(&ordered)?);
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("Install order for {}", self.args.keys.join(", ")));
        for (position, installer) in ordered.iter().enumerate() {
            ui.output(&format!("{}. {}", position + 1, installer.key()));
        }
        ui.success(&format!("Resolved {} installers", ordered.len()));

        Ok(CommandResult::success())
    }
}
