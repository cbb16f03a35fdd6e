//! Built-in installers embedded at compile time.

use crate::error::{OutfitterError, Result};
use crate::installer::{load_descriptors, InstallerDescriptor};
use include_dir::{include_dir, Dir};

/// Embedded installers directory.
static INSTALLERS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/installers");

/// Load all built-in installers, ordered by key.
///
/// Each `*.json` file in the embedded directory holds one descriptor or a
/// list of them. Uniqueness across files is checked by the registry that
/// receives them, not here.
pub fn builtin_installers() -> Result<Vec<InstallerDescriptor>> {
    let mut installers = Vec::new();

    for file in INSTALLERS_DIR.files() {
        if file.path().extension().is_none_or(|ext| ext != "json") {
            continue;
        }

        let content =
            file.contents_utf8()
                .ok_or_else(|| OutfitterError::ConfigParseError {
                    path: file.path().to_path_buf(),
                    message: "Invalid UTF-8".to_string(),
                })?;

        let loaded = load_descriptors(content).map_err(|e| OutfitterError::ConfigParseError {
            path: file.path().to_path_buf(),
            message: e.to_string(),
        })?;
        installers.extend(loaded);
    }

    installers.sort_by_key(|installer| installer.key());
    Ok(installers)
}
