//! Versions command implementation.

use crate::cli::args::VersionsArgs;
use crate::error::Result;
use crate::registry::InstallerRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The versions command implementation.
pub struct VersionsCommand<'a> {
    registry: &'a dyn InstallerRegistry,
    args: VersionsArgs,
}

impl<'a> VersionsCommand<'a> {
    /// Create a new versions command.
    pub fn new(registry: &'a dyn InstallerRegistry, args: VersionsArgs) -> Self {
        Self { registry, args }
    }
}

impl Command for VersionsCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let versions = self.registry.get_versions(&self.args.id)?;

        if versions.is_empty() {
            ui.warning(&format!("No versions registered for '{}'", self.args.id));
        }
        for version in &versions {
            ui.output(version);
        }

        Ok(CommandResult::success())
    }
}
