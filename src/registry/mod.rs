//! Installer registries.
//!
//! A registry presents one logical namespace of installers addressed by key
//! strings (`id` or `id:version`). Two implementations share the
//! [`InstallerRegistry`] contract:
//!
//! - [`LocalRegistry`] - a fixed set of static descriptors (the built-ins
//!   embedded in the binary, for example) merged with a mutable
//!   [`InstallerStore`](crate::store::InstallerStore)
//! - [`RemoteRegistry`] - an HTTP client for a server exposing the same
//!   contract
//!
//! Errors are identical for both, so callers cannot tell a local registry
//! from a remote one by the errors they get back.
//!
//! # Example
//!
//! ```
//! use outfitter::registry::{InstallerRegistry, LocalRegistry};
//!
//! // Built-in installers over an in-memory store
//! let registry = LocalRegistry::with_builtins().unwrap();
//!
//! let ordered = registry
//!     .get_ordered_installers(&["terminal".to_string()])
//!     .unwrap();
//! assert_eq!(ordered.last().unwrap().id, "terminal");
//! ```

pub mod builtin;
pub mod http;
pub mod local;
pub mod predefined;
pub mod remote;

pub use builtin::builtin_installers;
pub use http::RegistryClient;
pub use local::LocalRegistry;
pub use predefined::{PredefinedLoader, PredefinedSummary};
pub use remote::RemoteRegistry;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{OutfitterConfig, RegistryKind, StoreKind};
use crate::error::Result;
use crate::installer::{InstallerDescriptor, InstallerKey, Page};
use crate::resolver::DependencyResolver;
use crate::store::{FileStore, InstallerStore, MemoryStore};

/// Lookup, listing and mutation of installers by key string.
pub trait InstallerRegistry: Send + Sync {
    /// Fetch the installer for `key` (`id` or `id:version`).
    ///
    /// Fails with `IllegalKey` for malformed keys and `NotFound` when no
    /// installer matches.
    fn get_installer(&self, key: &str) -> Result<InstallerDescriptor>;

    /// Every version registered under `id`; empty when the id is unknown.
    fn get_versions(&self, id: &str) -> Result<Vec<String>>;

    /// Every installer, de-duplicated by key, in a stable order.
    fn get_installers(&self) -> Result<Vec<InstallerDescriptor>>;

    /// A page of [`get_installers`](Self::get_installers).
    fn get_installers_page(
        &self,
        max_items: usize,
        skip_count: usize,
    ) -> Result<Page<InstallerDescriptor>>;

    /// Register a new installer. Fails with `Conflict` if the key is taken.
    fn add(&self, installer: InstallerDescriptor) -> Result<()>;

    /// Replace an existing installer. Fails with `NotFound` if absent.
    fn update(&self, installer: InstallerDescriptor) -> Result<()>;

    /// Remove an installer. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Whether `key` names a static installer that mutations never reach.
    fn is_static(&self, _key: &InstallerKey) -> bool {
        false
    }

    /// Expand `keys` into a duplicate-free, dependency-first install order.
    fn get_ordered_installers(&self, keys: &[String]) -> Result<Vec<InstallerDescriptor>> {
        DependencyResolver::new(self).resolve(keys)
    }
}

/// Open the registry described by `config`.
///
/// Relative store paths are resolved against `project_root`. Predefined
/// installer documents listed in the configuration are applied to the
/// registry before it is returned.
pub fn open_registry(
    config: &OutfitterConfig,
    project_root: &Path,
) -> Result<Box<dyn InstallerRegistry>> {
    let registry: Box<dyn InstallerRegistry> = match config.registry.kind {
        RegistryKind::Remote => {
            let url = config.registry.url.as_deref().unwrap_or_default();
            let client = RegistryClient::with_timeout(
                url,
                Duration::from_secs(config.registry.timeout),
            )?;
            tracing::debug!("Using remote installer registry at {}", url);
            Box::new(RemoteRegistry::new(client).with_page_size(config.registry.page_size))
        }
        RegistryKind::Local => {
            let store: Arc<dyn InstallerStore> = match config.store.kind {
                StoreKind::Memory => Arc::new(MemoryStore::new()),
                StoreKind::File => {
                    Arc::new(FileStore::open(config.store_path(project_root))?)
                }
            };
            let statics = if config.builtins {
                builtin_installers()?
            } else {
                Vec::new()
            };
            Box::new(LocalRegistry::new(statics, store)?)
        }
    };

    for document in &config.predefined {
        let path = if document.is_absolute() {
            document.clone()
        } else {
            project_root.join(document)
        };
        let summary = PredefinedLoader::from_file(&path)?.apply(registry.as_ref())?;
        tracing::info!(
            "Applied predefined installers from {:?}: {} added, {} updated",
            path,
            summary.added,
            summary.updated
        );
    }

    Ok(registry)
}
