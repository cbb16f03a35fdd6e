//! Predefined installer documents applied to a registry at startup.

use std::path::Path;

use super::InstallerRegistry;
use crate::error::{OutfitterError, Result};
use crate::installer::{load_descriptors, InstallerDescriptor};

/// Outcome of applying a predefined document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PredefinedSummary {
    /// Installers that were new to the registry.
    pub added: usize,
    /// Installers that replaced an existing entry.
    pub updated: usize,
    /// Installers shadowed by a static entry of the registry.
    pub skipped: usize,
}

/// A set of descriptors to upsert into a registry.
#[derive(Debug, Clone, Default)]
pub struct PredefinedLoader {
    descriptors: Vec<InstallerDescriptor>,
}

impl PredefinedLoader {
    /// Create a loader for `descriptors`.
    pub fn new(descriptors: Vec<InstallerDescriptor>) -> Self {
        Self { descriptors }
    }

    /// Parse a JSON document holding one descriptor or a list of them.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(Self::new(load_descriptors(content)?))
    }

    /// Read a predefined document from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(OutfitterError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| OutfitterError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// The descriptors this loader applies.
    pub fn descriptors(&self) -> &[InstallerDescriptor] {
        &self.descriptors
    }

    /// Upsert every descriptor into `registry`.
    ///
    /// Each descriptor is added; when its key is taken the existing entry is
    /// updated instead. Keys owned by a static entry of the registry are
    /// skipped. Any other error aborts the run.
    pub fn apply<R: InstallerRegistry + ?Sized>(&self, registry: &R) -> Result<PredefinedSummary> {
        let mut summary = PredefinedSummary::default();

        for installer in &self.descriptors {
            match registry.add(installer.clone()) {
                Ok(()) => summary.added += 1,
                Err(OutfitterError::Conflict { key }) if registry.is_static(&installer.key()) => {
                    tracing::warn!("Predefined installer {} is shadowed by a static one", key);
                    summary.skipped += 1;
                }
                Err(OutfitterError::Conflict { .. }) => {
                    registry.update(installer.clone())?;
                    summary.updated += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::LocalRegistry;
    use tempfile::TempDir;

    #[test]
    fn adds_new_installers() {
        let registry = LocalRegistry::in_memory(vec![]).unwrap();
        let loader = PredefinedLoader::new(vec![
            InstallerDescriptor::new("a", "1"),
            InstallerDescriptor::new("b", "1"),
        ]);

        let summary = loader.apply(&registry).unwrap();
        assert_eq!(summary.added, 2);
        assert_eq!(summary.updated, 0);
        assert!(registry.get_installer("b:1").is_ok());
    }

    #[test]
    fn existing_installers_are_updated() {
        let registry = LocalRegistry::in_memory(vec![]).unwrap();
        registry.add(InstallerDescriptor::new("a", "1")).unwrap();

        let loader =
            PredefinedLoader::new(vec![InstallerDescriptor::new("a", "1").with_description("v2")]);
        let summary = loader.apply(&registry).unwrap();

        assert_eq!(summary.updated, 1);
        assert_eq!(registry.get_installer("a:1").unwrap().description, "v2");
    }

    #[test]
    fn static_installers_are_skipped() {
        let registry = LocalRegistry::in_memory(vec![InstallerDescriptor::new("a", "1")]).unwrap();
        let loader = PredefinedLoader::new(vec![InstallerDescriptor::new("a", "1")]);

        let summary = loader.apply(&registry).unwrap();
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn update_failure_after_conflict_aborts() {
        use crate::registry::RemoteRegistry;
        use httpmock::prelude::*;

        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/installer");
            then.status(409);
        });
        server.mock(|when, then| {
            when.method(PUT).path("/installer");
            then.status(404);
        });

        let registry = RemoteRegistry::connect(&server.base_url()).unwrap();
        let loader = PredefinedLoader::new(vec![InstallerDescriptor::new("a", "1")]);

        assert!(matches!(
            loader.apply(&registry),
            Err(OutfitterError::NotFound { ref key }) if key == "a:1"
        ));
    }

    #[test]
    fn invalid_descriptor_aborts() {
        let registry = LocalRegistry::in_memory(vec![]).unwrap();
        let loader = PredefinedLoader::new(vec![
            InstallerDescriptor::new("ok", "1"),
            InstallerDescriptor::new("", "1"),
        ]);

        assert!(loader.apply(&registry).is_err());
    }

    #[test]
    fn reads_document_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("predefined.json");
        std::fs::write(&path, r#"[{"id": "a", "version": "1"}, {"id": "b"}]"#).unwrap();

        let loader = PredefinedLoader::from_file(&path).unwrap();
        assert_eq!(loader.descriptors().len(), 2);
        assert_eq!(loader.descriptors()[1].version, "latest");
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let result = PredefinedLoader::from_file(&temp.path().join("nope.json"));
        assert!(matches!(result, Err(OutfitterError::ConfigNotFound { .. })));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            PredefinedLoader::from_file(&path),
            Err(OutfitterError::ConfigParseError { .. })
        ));
    }
}
