//! Configuration file discovery and loading.

use crate::config::schema::OutfitterConfig;
use crate::error::{OutfitterError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding project configuration and the default store.
pub const CONFIG_DIR: &str = ".outfitter";

/// Path of the project config: `.outfitter/config.yml`
pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join("config.yml")
}

/// Load a single config file and parse it into OutfitterConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<OutfitterConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            OutfitterError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            OutfitterError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into OutfitterConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<OutfitterConfig> {
    if content.trim().is_empty() {
        return Ok(OutfitterConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| OutfitterError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit path must exist. Without one, the project config is used
/// when present and the defaults otherwise.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<OutfitterConfig> {
    if let Some(override_path) = config_override {
        return load_config_file(override_path);
    }

    let path = config_path(project_root);
    if path.exists() {
        load_config_file(&path)
    } else {
        tracing::debug!("No config at {}, using defaults", path.display());
        Ok(OutfitterConfig::default())
    }
}
