//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the
//! configuration, opens the registry once, and routes CLI subcommands to
//! their implementations. Commands only see the
//! [`InstallerRegistry`](crate::registry::InstallerRegistry) contract, so
//! every command works the same against local and remote registries.

pub mod completions;
pub mod dispatcher;
pub mod import;
pub mod list;
pub mod register;
pub mod remove;
pub mod resolve;
pub mod show;
pub mod versions;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
