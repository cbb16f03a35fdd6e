//! Add and update command implementation.
//!
//! `outfitter add` and `outfitter update` read a JSON document of
//! descriptors and register or replace each of them, stopping at the first
//! failure.

use crate::cli::args::DocumentArgs;
use crate::error::Result;
use crate::registry::{InstallerRegistry, PredefinedLoader};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Which registry mutation to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterMode {
    /// Register new installers.
    Add,
    /// Replace existing installers.
    Update,
}

/// The add/update command implementation.
pub struct RegisterCommand<'a> {
    registry: &'a dyn InstallerRegistry,
    args: DocumentArgs,
    mode: RegisterMode,
}

impl<'a> RegisterCommand<'a> {
    /// Create a new add or update command.
    pub fn new(registry: &'a dyn InstallerRegistry, args: DocumentArgs, mode: RegisterMode) -> Self {
        Self {
            registry,
            args,
            mode,
        }
    }
}

impl Command for RegisterCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let document = PredefinedLoader::from_file(&self.args.file)?;

        for installer in document.descriptors() {
            let key = installer.key();
            match self.mode {
                RegisterMode::Add => {
                    self.registry.add(installer.clone())?;
                    ui.success(&format!("Added {}", key));
                }
                RegisterMode::Update => {
                    self.registry.update(installer.clone())?;
                    ui.success(&format!("Updated {}", key));
                }
            }
        }

        Ok(CommandResult::success())
    }
}
