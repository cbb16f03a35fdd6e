//! Installer descriptor schema.
//!
//! A descriptor is the immutable description of one installer. Its identity
//! is the [`InstallerKey`] built from `id` and `version`; everything else is
//! payload.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::key::{InstallerKey, KEY_SEPARATOR, LATEST_VERSION};
use crate::error::{OutfitterError, Result};

/// Description of one installer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallerDescriptor {
    /// Installer id (e.g. `terminal`)
    pub id: String,

    /// Installer version
    #[serde(default = "default_version")]
    pub version: String,

    /// Human-readable name
    #[serde(default)]
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Keys (`id[:version]`) of installers that must be installed first
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Free-form properties
    #[serde(default)]
    pub properties: BTreeMap<String, String>,

    /// Script that bootstraps the installer on the machine
    #[serde(default)]
    pub script: String,

    /// Servers exposed by the installed agent, keyed by server name
    #[serde(default)]
    pub servers: BTreeMap<String, ServerConfig>,
}

fn default_version() -> String {
    LATEST_VERSION.to_string()
}

/// A server exposed by an installed agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port, optionally with transport (e.g. `4411/tcp`)
    pub port: String,

    /// Protocol spoken on the port (e.g. `http`, `ws`)
    #[serde(default)]
    pub protocol: String,

    /// Path prefix on the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Free-form server attributes
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl ServerConfig {
    /// Create a server declaration for `port` speaking `protocol`.
    pub fn new(port: impl Into<String>, protocol: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            protocol: protocol.into(),
            ..Default::default()
        }
    }

    /// Set the path prefix.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

impl InstallerDescriptor {
    /// Create a descriptor with only its identity filled in.
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            version: version.into(),
            description: String::new(),
            dependencies: Vec::new(),
            properties: BTreeMap::new(),
            script: String::new(),
            servers: BTreeMap::new(),
        }
    }

    /// The storage identity of this descriptor.
    pub fn key(&self) -> InstallerKey {
        InstallerKey::new(self.id.as_str(), self.version.as_str())
    }

    /// Parse the declared dependencies, in declared order.
    pub fn dependency_keys(&self) -> Result<Vec<InstallerKey>> {
        self.dependencies
            .iter()
            .map(|dep| InstallerKey::parse(dep))
            .collect()
    }

    /// Check that the identity fields can form a valid key.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(OutfitterError::illegal_argument(
                "installer id must not be empty",
            ));
        }
        if self.id.contains(KEY_SEPARATOR) || self.version.contains(KEY_SEPARATOR) {
            return Err(OutfitterError::IllegalKey {
                key: format!("{}{}{}", self.id, KEY_SEPARATOR, self.version),
            });
        }
        if self.version.trim().is_empty() {
            return Err(OutfitterError::illegal_argument(format!(
                "installer '{}' has an empty version",
                self.id
            )));
        }
        Ok(())
    }

    /// Set the human-readable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a dependency key.
    pub fn with_dependency(mut self, key: impl Into<String>) -> Self {
        self.dependencies.push(key.into());
        self
    }

    /// Set a property.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Set the bootstrap script.
    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = script.into();
        self
    }

    /// Declare a server.
    pub fn with_server(mut self, name: impl Into<String>, server: ServerConfig) -> Self {
        self.servers.insert(name.into(), server);
        self
    }
}

/// Parse a JSON document holding either a list of descriptors or a single one.
pub fn load_descriptors(content: &str) -> Result<Vec<InstallerDescriptor>> {
    // Try parsing as a list first
    if let Ok(descriptors) = serde_json::from_str::<Vec<InstallerDescriptor>>(content) {
        return Ok(descriptors);
    }

    // Fall back to a single descriptor, surfacing its parse error
    let descriptor: InstallerDescriptor = serde_json::from_str(content)?;
    Ok(vec![descriptor])
}
