//! Outfitter - Installer registry and dependency resolver.
//!
//! Outfitter keeps a registry of installers (descriptors of agents such as
//! a terminal, an SSH server, or a language server that can be provisioned
//! into a machine) and turns a requested set of installers into a
//! duplicate-free, dependency-first install order.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Installer keys, descriptors, and pages
//! - [`registry`] - Local and remote installer registries
//! - [`resolver`] - Dependency-ordered installer resolution
//! - [`store`] - Mutable installer stores behind a local registry
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use outfitter::installer::InstallerDescriptor;
//! use outfitter::registry::{InstallerRegistry, LocalRegistry};
//!
//! let registry = LocalRegistry::in_memory(vec![
//!     InstallerDescriptor::new("exec", "1.0.1"),
//!     InstallerDescriptor::new("terminal", "1.0.1").with_dependency("exec:1.0.1"),
//! ])
//! .unwrap();
//!
//! let ordered = registry
//!     .get_ordered_installers(&["terminal".to_string()])
//!     .unwrap();
//! let keys: Vec<String> = ordered.iter().map(|i| i.key().to_string()).collect();
//! assert_eq!(keys, vec!["exec:1.0.1", "terminal:1.0.1"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod registry;
pub mod resolver;
pub mod store;
pub mod ui;

pub use error::{OutfitterError, Result};
