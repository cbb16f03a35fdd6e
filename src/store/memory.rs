//! In-memory installer store.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use super::InstallerStore;
use crate::error::{OutfitterError, Result};
use crate::installer::{InstallerDescriptor, InstallerKey, Page};

/// Key-ordered table of descriptors.
///
/// Holds the create/update/remove semantics shared by every store; stores
/// add locking and persistence around it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallerTable {
    installers: BTreeMap<InstallerKey, InstallerDescriptor>,
}

impl InstallerTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless the key is taken.
    pub fn create(&mut self, installer: InstallerDescriptor) -> Result<()> {
        let key = installer.key();
        if self.installers.contains_key(&key) {
            return Err(OutfitterError::conflict(&key));
        }
        self.installers.insert(key, installer);
        Ok(())
    }

    /// Replace an existing entry.
    pub fn update(&mut self, installer: InstallerDescriptor) -> Result<()> {
        let key = installer.key();
        match self.installers.get_mut(&key) {
            Some(existing) => {
                *existing = installer;
                Ok(())
            }
            None => Err(OutfitterError::not_found(&key)),
        }
    }

    /// Remove an entry, returning whether anything was removed.
    pub fn remove(&mut self, key: &InstallerKey) -> bool {
        self.installers.remove(key).is_some()
    }

    /// Look up an entry.
    pub fn get(&self, key: &InstallerKey) -> Option<&InstallerDescriptor> {
        self.installers.get(key)
    }

    /// Versions stored under `id`, in key order.
    pub fn versions(&self, id: &str) -> Vec<String> {
        self.installers
            .keys()
            .filter(|key| key.id() == id)
            .map(|key| key.version().to_string())
            .collect()
    }

    /// A page of the table in key order.
    pub fn page(&self, max_items: usize, skip_count: usize) -> Result<Page<InstallerDescriptor>> {
        crate::installer::page::check_page_arguments(max_items)?;

        let items = self
            .installers
            .values()
            .skip(skip_count)
            .take(max_items)
            .cloned()
            .collect();

        Ok(Page::new(items, skip_count, max_items, self.installers.len()))
    }

    /// Iterate entries in key order.
    pub fn descriptors(&self) -> impl Iterator<Item = &InstallerDescriptor> {
        self.installers.values()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.installers.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.installers.is_empty()
    }
}

/// Store that keeps descriptors in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: RwLock<InstallerTable>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `installers`.
    ///
    /// Fails with `Conflict` on the first duplicate key.
    pub fn with_installers(
        installers: impl IntoIterator<Item = InstallerDescriptor>,
    ) -> Result<Self> {
        let mut table = InstallerTable::new();
        for installer in installers {
            table.create(installer)?;
        }
        Ok(Self {
            table: RwLock::new(table),
        })
    }
}

impl InstallerStore for MemoryStore {
    fn create(&self, installer: InstallerDescriptor) -> Result<()> {
        self.table
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .create(installer)
    }

    fn update(&self, installer: InstallerDescriptor) -> Result<()> {
        self.table
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .update(installer)
    }

    fn remove(&self, key: &InstallerKey) -> Result<()> {
        self.table
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }

    fn get_by_key(&self, key: &InstallerKey) -> Result<InstallerDescriptor> {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
            .ok_or_else(|| OutfitterError::not_found(key))
    }

    fn get_versions(&self, id: &str) -> Result<Vec<String>> {
        Ok(self
            .table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .versions(id))
    }

    fn get_all(&self, max_items: usize, skip_count: usize) -> Result<Page<InstallerDescriptor>> {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .page(max_items, skip_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn installer(id: &str, version: &str) -> InstallerDescriptor {
        InstallerDescriptor::new(id, version).with_script(format!("install-{}.sh", id))
    }

    #[test]
    fn create_then_get_returns_equal_descriptor() {
        let store = MemoryStore::new();
        let exec = installer("exec", "1.0.1").with_property("k", "v");
        store.create(exec.clone()).unwrap();

        let found = store.get_by_key(&exec.key()).unwrap();
        assert_eq!(found, exec);
    }

    #[test]
    fn second_create_conflicts() {
        let store = MemoryStore::new();
        store.create(installer("exec", "1.0.1")).unwrap();

        let result = store.create(installer("exec", "1.0.1").with_name("other"));
        assert!(matches!(result, Err(OutfitterError::Conflict { .. })));
    }

    #[test]
    fn update_missing_is_not_found() {
        let store = MemoryStore::new();
        let result = store.update(installer("exec", "1.0.1"));
        assert!(matches!(result, Err(OutfitterError::NotFound { .. })));
    }

    #[test]
    fn update_replaces_all_fields() {
        let store = MemoryStore::new();
        store.create(installer("exec", "1.0.1")).unwrap();

        let replacement = InstallerDescriptor::new("exec", "1.0.1")
            .with_name("Exec")
            .with_description("replaced")
            .with_dependency("ssh");
        store.update(replacement.clone()).unwrap();

        let found = store.get_by_key(&replacement.key()).unwrap();
        assert_eq!(found, replacement);
        assert!(found.script.is_empty());
    }

    #[test]
    fn update_after_remove_is_not_found() {
        let store = MemoryStore::new();
        let exec = installer("exec", "1.0.1");
        store.create(exec.clone()).unwrap();
        store.remove(&exec.key()).unwrap();

        assert!(matches!(
            store.update(exec),
            Err(OutfitterError::NotFound { .. })
        ));
    }

    #[test]
    fn remove_is_idempotent() {
        let store = MemoryStore::new();
        let key = InstallerKey::new("exec", "1.0.1");
        store.remove(&key).unwrap();

        store.create(installer("exec", "1.0.1")).unwrap();
        store.remove(&key).unwrap();
        store.remove(&key).unwrap();

        assert!(matches!(
            store.get_by_key(&key),
            Err(OutfitterError::NotFound { .. })
        ));
    }

    #[test]
    fn versions_for_unknown_id_is_empty() {
        let store = MemoryStore::new();
        assert!(store.get_versions("nope").unwrap().is_empty());
    }

    #[test]
    fn versions_lists_every_version_of_id() {
        let store = MemoryStore::with_installers([
            installer("exec", "1.0.0"),
            installer("exec", "1.0.1"),
            installer("ssh", "1.0.0"),
        ])
        .unwrap();

        assert_eq!(store.get_versions("exec").unwrap(), vec!["1.0.0", "1.0.1"]);
    }

    #[test]
    fn with_installers_rejects_duplicates() {
        let result =
            MemoryStore::with_installers([installer("exec", "1"), installer("exec", "1")]);
        assert!(matches!(result, Err(OutfitterError::Conflict { .. })));
    }

    #[test]
    fn get_all_pages_in_key_order() {
        let store = MemoryStore::with_installers([
            installer("c", "1"),
            installer("a", "1"),
            installer("b", "1"),
        ])
        .unwrap();

        let first = store.get_all(2, 0).unwrap();
        let ids: Vec<_> = first.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(first.total_items_count(), 3);
        assert!(first.has_next_page());

        let second = store.get_all(2, 2).unwrap();
        assert_eq!(second.items()[0].id, "c");
        assert!(!second.has_next_page());
        assert!(second.has_previous_page());

        assert_eq!(store.list().unwrap().len(), 3);
    }

    #[test]
    fn concurrent_creates_have_one_winner() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store.create(installer("exec", "1.0.1").with_description(i.to_string()))
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let winners = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(OutfitterError::Conflict { .. })))
            .count();

        assert_eq!(winners, 1);
        assert_eq!(conflicts, 7);
    }
}
