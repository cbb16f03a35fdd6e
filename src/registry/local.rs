//! In-process installer registry.
//!
//! Static descriptors (fixed at construction) and the descriptors of a
//! mutable [`InstallerStore`] form one namespace. Lookups consult the static
//! set first; mutations only ever reach the store, so static installers can
//! be neither replaced nor removed.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::InstallerRegistry;
use crate::error::{OutfitterError, Result};
use crate::installer::{version, InstallerDescriptor, InstallerKey, Page};
use crate::store::{InstallerStore, MemoryStore};

/// Registry over a static installer set and a local store.
#[derive(Debug, Clone)]
pub struct LocalRegistry {
    statics: BTreeMap<InstallerKey, InstallerDescriptor>,
    store: Arc<dyn InstallerStore>,
}

impl LocalRegistry {
    /// Create a registry from static descriptors and a backing store.
    ///
    /// Fails with `IllegalArgument` when two static descriptors share an id
    /// and version, or when a static descriptor has an invalid identity.
    pub fn new(
        statics: impl IntoIterator<Item = InstallerDescriptor>,
        store: Arc<dyn InstallerStore>,
    ) -> Result<Self> {
        let mut by_key = BTreeMap::new();

        for installer in statics {
            installer.validate().map_err(|e| {
                OutfitterError::illegal_argument(format!("invalid static installer: {}", e))
            })?;

            let key = installer.key();
            if by_key.insert(key.clone(), installer).is_some() {
                return Err(OutfitterError::illegal_argument(format!(
                    "installer {} is registered more than once",
                    key
                )));
            }
        }

        tracing::debug!("Local registry with {} static installers", by_key.len());

        Ok(Self {
            statics: by_key,
            store,
        })
    }

    /// Create a registry from static descriptors over an empty in-memory store.
    pub fn in_memory(statics: impl IntoIterator<Item = InstallerDescriptor>) -> Result<Self> {
        Self::new(statics, Arc::new(MemoryStore::new()))
    }

    /// Create a registry holding the built-in installers over an empty
    /// in-memory store.
    pub fn with_builtins() -> Result<Self> {
        Self::in_memory(super::builtin_installers()?)
    }

    /// The backing store.
    pub fn store(&self) -> &Arc<dyn InstallerStore> {
        &self.store
    }

    /// Exact lookup: static set first, then the store.
    fn lookup(&self, key: &InstallerKey) -> Result<Option<InstallerDescriptor>> {
        if let Some(installer) = self.statics.get(key) {
            return Ok(Some(installer.clone()));
        }

        match self.store.get_by_key(key) {
            Ok(installer) => Ok(Some(installer)),
            Err(OutfitterError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Newest registered version of `id`, used when `latest` has no exact
    /// entry.
    fn lookup_newest(&self, id: &str) -> Result<Option<InstallerDescriptor>> {
        let versions = self.get_versions(id)?;
        match version::newest(versions.iter().map(String::as_str)) {
            Some(newest) => self.lookup(&InstallerKey::new(id, newest)),
            None => Ok(None),
        }
    }
}

impl InstallerRegistry for LocalRegistry {
    fn get_installer(&self, key: &str) -> Result<InstallerDescriptor> {
        let key = InstallerKey::parse(key)?;

        if let Some(installer) = self.lookup(&key)? {
            return Ok(installer);
        }

        if key.is_latest() {
            if let Some(installer) = self.lookup_newest(key.id())? {
                tracing::debug!("Resolved {} to {}", key, installer.key());
                return Ok(installer);
            }
        }

        Err(OutfitterError::not_found(&key))
    }

    fn get_versions(&self, id: &str) -> Result<Vec<String>> {
        let mut versions: Vec<String> = self
            .statics
            .keys()
            .filter(|key| key.id() == id)
            .map(|key| key.version().to_string())
            .collect();
        versions.extend(self.store.get_versions(id)?);

        versions.sort_by(|a, b| version::compare_versions(a, b));
        versions.dedup();
        Ok(versions)
    }

    fn get_installers(&self) -> Result<Vec<InstallerDescriptor>> {
        let mut merged = self.statics.clone();
        for installer in self.store.list()? {
            merged.entry(installer.key()).or_insert(installer);
        }
        Ok(merged.into_values().collect())
    }

    fn get_installers_page(
        &self,
        max_items: usize,
        skip_count: usize,
    ) -> Result<Page<InstallerDescriptor>> {
        Page::from_listing(self.get_installers()?, max_items, skip_count)
    }

    fn add(&self, installer: InstallerDescriptor) -> Result<()> {
        installer.validate()?;

        let key = installer.key();
        if self.is_static(&key) {
            return Err(OutfitterError::conflict(&key));
        }

        self.store.create(installer)?;
        tracing::info!("Added installer {}", key);
        Ok(())
    }

    fn update(&self, installer: InstallerDescriptor) -> Result<()> {
        installer.validate()?;

        let key = installer.key();
        if self.is_static(&key) {
            // Static installers never live in the store
            tracing::warn!("Refusing to update static installer {}", key);
            return Err(OutfitterError::not_found(&key));
        }

        self.store.update(installer)?;
        tracing::info!("Updated installer {}", key);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let key = InstallerKey::parse(key)?;

        if self.is_static(&key) {
            tracing::warn!("Static installer {} cannot be removed", key);
            return Ok(());
        }

        self.store.remove(&key)?;
        tracing::info!("Removed installer {}", key);
        Ok(())
    }

    fn is_static(&self, key: &InstallerKey) -> bool {
        self.statics.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn installer(id: &str, version: &str) -> InstallerDescriptor {
        InstallerDescriptor::new(id, version)
    }

    fn registry_with_static(statics: Vec<InstallerDescriptor>) -> LocalRegistry {
        LocalRegistry::in_memory(statics).unwrap()
    }

    #[test]
    fn duplicate_statics_fail_at_construction() {
        let result = LocalRegistry::in_memory(vec![
            installer("exec", "1.0.1").with_name("one"),
            installer("exec", "1.0.1").with_name("two"),
        ]);
        assert!(matches!(
            result,
            Err(OutfitterError::IllegalArgument { .. })
        ));
    }

    #[test]
    fn invalid_static_fails_at_construction() {
        let result = LocalRegistry::in_memory(vec![installer("", "1")]);
        assert!(matches!(
            result,
            Err(OutfitterError::IllegalArgument { .. })
        ));
    }

    #[test]
    fn same_id_different_versions_are_distinct() {
        let registry =
            registry_with_static(vec![installer("exec", "1.0.0"), installer("exec", "1.0.1")]);
        assert_eq!(registry.get_installers().unwrap().len(), 2);
    }

    #[test]
    fn get_installer_finds_static_then_store() {
        let registry = registry_with_static(vec![installer("exec", "1.0.1")]);
        registry.add(installer("ssh", "1.0.0")).unwrap();

        assert_eq!(registry.get_installer("exec:1.0.1").unwrap().id, "exec");
        assert_eq!(registry.get_installer("ssh:1.0.0").unwrap().id, "ssh");
    }

    #[test]
    fn get_installer_propagates_illegal_key() {
        let registry = registry_with_static(vec![]);
        assert!(matches!(
            registry.get_installer("exec:1:2"),
            Err(OutfitterError::IllegalKey { .. })
        ));
    }

    #[test]
    fn get_installer_missing_is_not_found() {
        let registry = registry_with_static(vec![]);
        let err = registry.get_installer("ghost").unwrap_err();
        assert!(matches!(err, OutfitterError::NotFound { ref key } if key == "ghost:latest"));
    }

    #[test]
    fn exact_latest_entry_wins() {
        let registry = registry_with_static(vec![
            installer("exec", "latest").with_name("tagged"),
            installer("exec", "9.9.9"),
        ]);
        assert_eq!(registry.get_installer("exec").unwrap().name, "tagged");
    }

    #[test]
    fn latest_falls_back_to_newest_version() {
        let registry = registry_with_static(vec![installer("exec", "1.9.0")]);
        registry.add(installer("exec", "1.10.0")).unwrap();

        let found = registry.get_installer("exec").unwrap();
        assert_eq!(found.version, "1.10.0");
    }

    #[test]
    fn versions_merge_static_and_store() {
        let registry = registry_with_static(vec![installer("exec", "1.0.0")]);
        registry.add(installer("exec", "1.0.1")).unwrap();
        registry.add(installer("ssh", "1.0.0")).unwrap();

        assert_eq!(registry.get_versions("exec").unwrap(), vec!["1.0.0", "1.0.1"]);
        assert!(registry.get_versions("nope").unwrap().is_empty());
    }

    #[test]
    fn add_over_static_conflicts() {
        let registry = registry_with_static(vec![installer("exec", "1.0.1")]);
        assert!(matches!(
            registry.add(installer("exec", "1.0.1")),
            Err(OutfitterError::Conflict { .. })
        ));
    }

    #[test]
    fn add_twice_conflicts() {
        let registry = registry_with_static(vec![]);
        registry.add(installer("ssh", "1")).unwrap();
        assert!(matches!(
            registry.add(installer("ssh", "1")),
            Err(OutfitterError::Conflict { .. })
        ));
    }

    #[test]
    fn add_rejects_invalid_identity() {
        let registry = registry_with_static(vec![]);
        assert!(registry.add(installer("a:b", "1")).is_err());
    }

    #[test]
    fn update_static_is_not_found() {
        let registry = registry_with_static(vec![installer("exec", "1.0.1")]);
        let result = registry.update(installer("exec", "1.0.1").with_name("changed"));
        assert!(matches!(result, Err(OutfitterError::NotFound { .. })));
        assert_eq!(registry.get_installer("exec:1.0.1").unwrap().name, "exec");
    }

    #[test]
    fn update_replaces_stored_installer() {
        let registry = registry_with_static(vec![]);
        registry.add(installer("ssh", "1")).unwrap();
        registry
            .update(installer("ssh", "1").with_description("new"))
            .unwrap();

        assert_eq!(registry.get_installer("ssh:1").unwrap().description, "new");
    }

    #[test]
    fn remove_static_is_a_no_op() {
        let registry = registry_with_static(vec![installer("exec", "1.0.1")]);
        registry.remove("exec:1.0.1").unwrap();
        assert!(registry.get_installer("exec:1.0.1").is_ok());
    }

    #[test]
    fn remove_is_idempotent() {
        let registry = registry_with_static(vec![]);
        registry.remove("ghost:1").unwrap();

        registry.add(installer("ssh", "1")).unwrap();
        registry.remove("ssh:1").unwrap();
        registry.remove("ssh:1").unwrap();
        assert!(registry.get_installer("ssh:1").is_err());
    }

    #[test]
    fn remove_rejects_illegal_key() {
        let registry = registry_with_static(vec![]);
        assert!(matches!(
            registry.remove("a:b:c"),
            Err(OutfitterError::IllegalKey { .. })
        ));
    }

    #[test]
    fn listing_is_merged_and_deduplicated() {
        let store = Arc::new(MemoryStore::with_installers([installer("exec", "1.0.1")]).unwrap());
        let registry = LocalRegistry::new(
            vec![installer("exec", "1.0.1").with_name("static"), installer("a", "1")],
            store,
        )
        .unwrap();

        let all = registry.get_installers().unwrap();
        assert_eq!(all.len(), 2);
        let exec = all.iter().find(|i| i.id == "exec").unwrap();
        assert_eq!(exec.name, "static");
    }

    #[test]
    fn pages_walk_the_whole_listing() {
        let registry = registry_with_static(vec![installer("a", "1"), installer("b", "1")]);
        registry.add(installer("c", "1")).unwrap();

        let mut seen = Vec::new();
        for skip in 0..3 {
            let page = registry.get_installers_page(1, skip).unwrap();
            assert_eq!(page.items().len(), 1);
            assert_eq!(page.has_previous_page(), skip > 0);
            assert_eq!(page.has_next_page(), skip < 2);
            seen.extend(page.into_items().into_iter().map(|i| i.id));
        }
        assert_eq!(seen, vec!["a", "b", "c"]);
    }

    #[test]
    fn builtins_registry_resolves_terminal() {
        let registry = LocalRegistry::with_builtins().unwrap();
        let terminal = registry.get_installer("terminal").unwrap();
        assert_eq!(terminal.id, "terminal");
    }
}
