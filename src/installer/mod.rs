//! Installer value types.
//!
//! - [`InstallerKey`] - the `id[:version]` identity of an installer
//! - [`InstallerDescriptor`] - the immutable description of one installer
//! - [`Page`] - a slice of a stably ordered installer listing
//! - [`version`] - version ordering used to resolve `latest`

pub mod descriptor;
pub mod key;
pub mod page;
pub mod version;

pub use descriptor::{load_descriptors, InstallerDescriptor, ServerConfig};
pub use key::{InstallerKey, KEY_SEPARATOR, LATEST_VERSION};
pub use page::{Page, PageRef};
