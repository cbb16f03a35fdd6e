//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, validate, OutfitterConfig};
use crate::error::Result;
use crate::registry::{open_registry, InstallerRegistry};
use crate::ui::UserInterface;

use super::register::RegisterMode;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use.
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    registry_url: Option<String>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_path: None,
            registry_url: None,
        }
    }

    /// Load configuration from `path` instead of `.outfitter/config.yml`.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Use the remote registry at `url` whatever the configuration says.
    pub fn with_registry_url(mut self, url: Option<String>) -> Self {
        self.registry_url = url;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load, override, and validate the configuration.
    pub fn load_config(&self) -> Result<OutfitterConfig> {
        let mut config = load_config(&self.project_root, self.config_path.as_deref())?;
        if let Some(url) = &self.registry_url {
            config = config.with_registry_url(url.clone());
        }
        validate(&config)?;
        Ok(config)
    }

    /// Open the configured registry.
    pub fn open_registry(&self) -> Result<Box<dyn InstallerRegistry>> {
        let config = self.load_config()?;
        open_registry(&config, &self.project_root)
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Commands::Completions(args) = &cli.command {
            return super::completions::CompletionsCommand::new(args.clone()).execute(ui);
        }

        let registry = self.open_registry()?;
        self.dispatch_with(&cli.command, registry.as_ref(), ui)
    }

    /// Execute `command` against an already opened registry.
    pub fn dispatch_with(
        &self,
        command: &Commands,
        registry: &dyn InstallerRegistry,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match command {
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(registry, args.clone());
                cmd.execute(ui)
            }
            Commands::Show(args) => {
                let cmd = super::show::ShowCommand::new(registry, args.clone());
                cmd.execute(ui)
            }
            Commands::Versions(args) => {
                let cmd = super::versions::VersionsCommand::new(registry, args.clone());
                cmd.execute(ui)
            }
            Commands::Resolve(args) => {
                let cmd = super::resolve::ResolveCommand::new(registry, args.clone());
                cmd.execute(ui)
            }
            Commands::Add(args) => {
                let cmd =
                    super::register::RegisterCommand::new(registry, args.clone(), RegisterMode::Add);
                cmd.execute(ui)
            }
            Commands::Update(args) => {
                let cmd = super::register::RegisterCommand::new(
                    registry,
                    args.clone(),
                    RegisterMode::Update,
                );
                cmd.execute(ui)
            }
            Commands::Remove(args) => {
                let cmd = super::remove::RemoveCommand::new(registry, args.clone());
                cmd.execute(ui)
            }
            Commands::Import(args) => {
                let cmd = super::import::ImportCommand::new(registry, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
