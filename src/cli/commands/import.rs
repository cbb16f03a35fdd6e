//! Import command implementation.
//!
//! `outfitter import` upserts a JSON document of descriptors: new keys are
//! added, existing ones updated.

use crate::cli::args::DocumentArgs;
use crate::error::Result;
use crate::registry::{InstallerRegistry, PredefinedLoader};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The import command implementation.
pub struct ImportCommand<'a> {
    registry: &'a dyn InstallerRegistry,
    args: DocumentArgs,
}

impl<'a> ImportCommand<'a> {
    /// Create a new import command.
    pub fn new(registry: &'a dyn InstallerRegistry, args: DocumentArgs) -> Self {
        Self { registry, args }
    }
}

impl Command for ImportCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let summary = PredefinedLoader::from_file(&self.args.file)?.apply(self.registry)?;

        if summary.skipped > 0 {
            ui.warning(&format!(
                "{} installers are built in and were left unchanged",
                summary.skipped
            ));
        }
        ui.success(&format!(
            "Imported {}: {} added, {} updated",
            self.args.file.display(),
            summary.added,
            summary.updated
        ));

        Ok(CommandResult::success())
    }
}
