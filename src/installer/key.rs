//! Installer keys in `id[:version]` form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OutfitterError, Result};

/// Version assumed when a key string omits one.
pub const LATEST_VERSION: &str = "latest";

/// Separator between id and version in the string form.
pub const KEY_SEPARATOR: char = ':';

/// Identity of an installer: its id plus a version.
///
/// Keys order by id, then version, so stores keyed by them iterate
/// deterministically.
///
/// # Example
///
/// ```
/// use outfitter::installer::InstallerKey;
///
/// let key: InstallerKey = "terminal".parse().unwrap();
/// assert_eq!(key.version(), "latest");
/// assert_eq!(key.to_string(), "terminal:latest");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InstallerKey {
    id: String,
    version: String,
}

impl InstallerKey {
    /// Create a key from its parts. An empty version becomes `latest`.
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        let version = version.into();
        Self {
            id: id.into(),
            version: if version.is_empty() {
                LATEST_VERSION.to_string()
            } else {
                version
            },
        }
    }

    /// Create a key pointing at the `latest` version of `id`.
    pub fn latest(id: impl Into<String>) -> Self {
        Self::new(id, LATEST_VERSION)
    }

    /// Parse the `id` / `id:version` string form.
    pub fn parse(s: &str) -> Result<Self> {
        let mut parts = s.split(KEY_SEPARATOR);
        let id = parts.next().unwrap_or_default();
        let version = parts.next().unwrap_or_default();

        if parts.next().is_some() || id.is_empty() {
            return Err(OutfitterError::IllegalKey { key: s.to_string() });
        }

        Ok(Self::new(id, version))
    }

    /// The installer id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The installer version (`latest` when unspecified).
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether this key refers to the `latest` tag.
    pub fn is_latest(&self) -> bool {
        self.version == LATEST_VERSION
    }
}

impl fmt::Display for InstallerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.id, KEY_SEPARATOR, self.version)
    }
}

impl FromStr for InstallerKey {
    type Err = OutfitterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for InstallerKey {
    type Error = OutfitterError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<InstallerKey> for String {
    fn from(key: InstallerKey) -> Self {
        key.to_string()
    }
}
