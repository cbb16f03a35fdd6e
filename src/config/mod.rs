//! Configuration loading, parsing, and validation for Outfitter.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use outfitter::config::{load_config, validate, RegistryKind};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".outfitter");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(
//!     dir.join("config.yml"),
//!     "registry:\n  kind: remote\n  url: http://localhost:8080/api\n",
//! )
//! .unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.registry.kind, RegistryKind::Remote);
//! ```
//!
//! # Configuration File Location
//!
//! The project config lives at `.outfitter/config.yml`. A project without
//! one runs on defaults: a local registry with the built-in installers over
//! a file store at `.outfitter/installers.json`.

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{config_path, load_config, load_config_file, parse_config, CONFIG_DIR};
pub use schema::{OutfitterConfig, RegistryConfig, RegistryKind, StoreConfig, StoreKind};
pub use validator::validate;
