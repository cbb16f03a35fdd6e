//! Installer descriptor persistence.
//!
//! [`InstallerStore`] is the narrow CRUD contract the local registry keeps its
//! mutable descriptors behind. Two implementations ship with the crate:
//!
//! - [`MemoryStore`] - in-process, lost on exit
//! - [`FileStore`] - JSON file on disk, rewritten atomically on every change
//!
//! Both serialize writers behind a lock, so `create` is an atomic
//! check-and-insert: of two concurrent creates for one key exactly one wins.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::{InstallerTable, MemoryStore};

use std::fmt::Debug;

use crate::error::Result;
use crate::installer::{InstallerDescriptor, InstallerKey, Page};

/// CRUD persistence for installer descriptors keyed by (id, version).
pub trait InstallerStore: Debug + Send + Sync {
    /// Insert a descriptor. Fails with `Conflict` if its key exists.
    fn create(&self, installer: InstallerDescriptor) -> Result<()>;

    /// Replace a descriptor. Fails with `NotFound` if its key does not exist.
    fn update(&self, installer: InstallerDescriptor) -> Result<()>;

    /// Delete a descriptor. Removing an absent key is not an error.
    fn remove(&self, key: &InstallerKey) -> Result<()>;

    /// Fetch a descriptor. Fails with `NotFound` if absent.
    fn get_by_key(&self, key: &InstallerKey) -> Result<InstallerDescriptor>;

    /// All versions stored under `id`; empty when the id is unknown.
    fn get_versions(&self, id: &str) -> Result<Vec<String>>;

    /// A key-ordered slice of at most `max_items` descriptors starting at
    /// `skip_count`, with the total count.
    fn get_all(&self, max_items: usize, skip_count: usize) -> Result<Page<InstallerDescriptor>>;

    /// Every stored descriptor in key order.
    fn list(&self) -> Result<Vec<InstallerDescriptor>> {
        Ok(self.get_all(usize::MAX, 0)?.into_items())
    }
}
