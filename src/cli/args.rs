//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Outfitter - Installer registry and dependency resolver.
#[derive(Debug, Parser)]
#[command(name = "outfitter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .outfitter/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Use the remote registry at this base URL
    #[arg(long, global = true, env = "OUTFITTER_REGISTRY_URL", value_name = "URL")]
    pub registry_url: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List registered installers
    List(ListArgs),

    /// Show one installer as JSON
    Show(KeyArgs),

    /// List the versions registered under an installer id
    Versions(VersionsArgs),

    /// Print the dependency-ordered install sequence for installers
    Resolve(ResolveArgs),

    /// Register installers from a JSON document
    Add(DocumentArgs),

    /// Replace installers from a JSON document
    Update(DocumentArgs),

    /// Remove an installer
    Remove(KeyArgs),

    /// Add or update installers from a JSON document
    Import(DocumentArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Show a single page of at most this many installers
    #[arg(long, value_name = "N")]
    pub max_items: Option<usize>,

    /// Number of installers to skip before the page
    #[arg(long, value_name = "K", default_value_t = 0)]
    pub skip_count: usize,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for commands addressing one installer key.
#[derive(Debug, Clone, clap::Args)]
pub struct KeyArgs {
    /// Installer key (`id` or `id:version`)
    pub key: String,
}

/// Arguments for the `versions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct VersionsArgs {
    /// Installer id
    pub id: String,
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ResolveArgs {
    /// Installer keys to resolve, in order
    #[arg(required = true, num_args = 1..)]
    pub keys: Vec<String>,

    /// Print the resolved descriptors as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for commands reading a descriptor document.
#[derive(Debug, Clone, clap::Args)]
pub struct DocumentArgs {
    /// JSON file holding one descriptor or a list of them
    pub file: PathBuf,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
