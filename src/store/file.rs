//! JSON file backed installer store.
//!
//! The file holds a JSON array of descriptors in key order. It is read once
//! when the store opens and rewritten after every successful mutation while
//! the write lock is still held.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockWriteGuard};

use super::memory::InstallerTable;
use super::InstallerStore;
use crate::error::{OutfitterError, Result};
use crate::installer::{InstallerDescriptor, InstallerKey, Page};

/// Store persisted to a JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    table: RwLock<InstallerTable>,
}

impl FileStore {
    /// Open the store at `path`, starting empty when the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let table = Self::load(&path)?;

        tracing::debug!("Opened installer store {:?} ({} entries)", path, table.len());

        Ok(Self {
            path,
            table: RwLock::new(table),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<InstallerTable> {
        let mut table = InstallerTable::new();
        if !path.exists() {
            return Ok(table);
        }

        let content = fs::read_to_string(path)?;
        let installers: Vec<InstallerDescriptor> =
            serde_json::from_str(&content).map_err(|e| OutfitterError::ConfigParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        for installer in installers {
            table
                .create(installer)
                .map_err(|e| OutfitterError::ConfigParseError {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
        }

        Ok(table)
    }

    /// Write the table using the write-to-temp-then-rename pattern.
    fn save(&self, table: &InstallerTable) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let installers: Vec<&InstallerDescriptor> = table.descriptors().collect();
        let content = serde_json::to_string_pretty(&installers)?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved {} installers to {:?}", table.len(), self.path);
        Ok(())
    }

    fn write(&self) -> RwLockWriteGuard<'_, InstallerTable> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `change` and persist; the in-memory table is rolled back if the
    /// file cannot be written.
    fn mutate<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut InstallerTable) -> Result<bool>,
    {
        let mut table = self.write();
        let before = table.clone();

        if !change(&mut *table)? {
            return Ok(());
        }

        if let Err(e) = self.save(&table) {
            *table = before;
            return Err(e);
        }
        Ok(())
    }
}

impl InstallerStore for FileStore {
    fn create(&self, installer: InstallerDescriptor) -> Result<()> {
        self.mutate(|table| table.create(installer).map(|()| true))
    }

    fn update(&self, installer: InstallerDescriptor) -> Result<()> {
        self.mutate(|table| table.update(installer).map(|()| true))
    }

    fn remove(&self, key: &InstallerKey) -> Result<()> {
        self.mutate(|table| Ok(table.remove(key)))
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
