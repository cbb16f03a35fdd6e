//! Configuration schema definitions for Outfitter.
//!
//! These structs map to the `.outfitter/config.yml` file format.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::loader::CONFIG_DIR;

/// Default store file name inside the config directory.
pub const DEFAULT_STORE_FILE: &str = "installers.json";

/// Root configuration structure for `.outfitter/config.yml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutfitterConfig {
    /// Which registry to talk to
    pub registry: RegistryConfig,

    /// Backing store of a local registry
    pub store: StoreConfig,

    /// Whether the embedded installers are part of a local registry
    pub builtins: bool,

    /// JSON documents of descriptors applied to the registry at startup
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub predefined: Vec<PathBuf>,
}

impl Default for OutfitterConfig {
    fn default() -> Self {
        Self {
            registry: RegistryConfig::default(),
            store: StoreConfig::default(),
            builtins: true,
            predefined: Vec::new(),
        }
    }
}

impl OutfitterConfig {
    /// Point the configuration at a remote registry.
    pub fn with_registry_url(mut self, url: impl Into<String>) -> Self {
        self.registry.kind = RegistryKind::Remote;
        self.registry.url = Some(url.into());
        self
    }

    /// Path of the local store file, resolved against `project_root`.
    pub fn store_path(&self, project_root: &Path) -> PathBuf {
        match &self.store.path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => project_root.join(path),
            None => project_root.join(CONFIG_DIR).join(DEFAULT_STORE_FILE),
        }
    }
}

/// Registry selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Local or remote registry
    pub kind: RegistryKind,

    /// Base URL of a remote registry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Items fetched per request when walking a remote listing
    pub page_size: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            kind: RegistryKind::Local,
            url: None,
            timeout: 30,
            page_size: 50,
        }
    }
}

/// Kind of registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryKind {
    /// Built-ins merged with a local store
    #[default]
    Local,
    /// HTTP registry server
    Remote,
}

/// Local store settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// File or in-memory store
    pub kind: StoreKind,

    /// Store file (relative to the project root)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Kind of local store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// JSON file that survives restarts
    #[default]
    File,
    /// Process-lifetime store
    Memory,
}
