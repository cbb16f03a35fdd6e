//! Installer registry backed by a remote HTTP server.
//!
//! Every operation is one or more blocking calls against the server's
//! installer resource (paths relative to the configured base URL):
//!
//! - `GET installer/{key}` - fetch one installer
//! - `GET installer/{id}/versions` - versions of an id
//! - `GET installer?maxItems=&skipCount=` - paginated listing
//! - `POST installer` / `PUT installer` - add / update with a JSON body
//! - `DELETE installer/{key}` - idempotent removal
//!
//! Dependency ordering reuses the shared resolver over `get_installer`, so
//! resolution errors are the same as for a local registry.

use super::http::{RegistryClient, Subject};
use super::InstallerRegistry;
use crate::error::{OutfitterError, Result};
use crate::installer::page::check_page_arguments;
use crate::installer::{InstallerDescriptor, InstallerKey, Page};

/// Page size used when walking the full listing.
pub const DEFAULT_PAGE_SIZE: usize = 50;

const INSTALLER_RESOURCE: &str = "installer";

/// HTTP client implementing the registry contract.
#[derive(Debug, Clone)]
pub struct RemoteRegistry {
    client: RegistryClient,
    page_size: usize,
}

impl RemoteRegistry {
    /// Create a remote registry talking through `client`.
    pub fn new(client: RegistryClient) -> Self {
        Self {
            client,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Create a remote registry for `base_url` with default client settings.
    pub fn connect(base_url: &str) -> Result<Self> {
        Ok(Self::new(RegistryClient::new(base_url)?))
    }

    /// Set the page size used by [`get_installers`](InstallerRegistry::get_installers).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// The underlying HTTP client.
    pub fn client(&self) -> &RegistryClient {
        &self.client
    }
}

impl InstallerRegistry for RemoteRegistry {
    fn get_installer(&self, key: &str) -> Result<InstallerDescriptor> {
        let key = InstallerKey::parse(key)?.to_string();
        let url = self.client.url(&[INSTALLER_RESOURCE, &key]);
        self.client
            .send_json(self.client.get(&url), &url, Subject::Key(&key))
    }

    fn get_versions(&self, id: &str) -> Result<Vec<String>> {
        let url = self.client.url(&[INSTALLER_RESOURCE, id, "versions"]);
        match self
            .client
            .send_json(self.client.get(&url), &url, Subject::Key(id))
        {
            Err(OutfitterError::NotFound { .. }) => Ok(Vec::new()),
            result => result,
        }
    }

    fn get_installers(&self) -> Result<Vec<InstallerDescriptor>> {
        let mut installers = Vec::new();
        let mut skip_count = 0;

        loop {
            let page = self.get_installers_page(self.page_size, skip_count)?;
            let next = page.next_page_ref();
            let fetched = page.items().len();
            installers.extend(page.into_items());

            // Stop on an empty page or a next page that does not move forward
            match next {
                Some(next) if fetched > 0 && next.item_offset > skip_count => {
                    skip_count = next.item_offset
                }
                _ => break,
            }
        }

        Ok(installers)
    }

    fn get_installers_page(
        &self,
        max_items: usize,
        skip_count: usize,
    ) -> Result<Page<InstallerDescriptor>> {
        check_page_arguments(max_items)?;

        let mut url = self.client.url(&[INSTALLER_RESOURCE]);
        url.query_pairs_mut()
            .append_pair("maxItems", &max_items.to_string())
            .append_pair("skipCount", &skip_count.to_string());

        self.client
            .send_json(self.client.get(&url), &url, Subject::Collection)
    }

    fn add(&self, installer: InstallerDescriptor) -> Result<()> {
        installer.validate()?;

        let key = installer.key().to_string();
        let url = self.client.url(&[INSTALLER_RESOURCE]);
        self.client.send(
            self.client.post(&url).json(&installer),
            &url,
            Subject::Descriptor(&key),
        )?;

        tracing::info!("Added installer {} to {}", key, self.client.base_url());
        Ok(())
    }

    fn update(&self, installer: InstallerDescriptor) -> Result<()> {
        installer.validate()?;

        let key = installer.key().to_string();
        let url = self.client.url(&[INSTALLER_RESOURCE]);
        self.client.send(
            self.client.put(&url).json(&installer),
            &url,
            Subject::Descriptor(&key),
        )?;

        tracing::info!("Updated installer {} on {}", key, self.client.base_url());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let key = InstallerKey::parse(key)?.to_string();
        let url = self.client.url(&[INSTALLER_RESOURCE, &key]);

        match self
            .client
            .send(self.client.delete(&url), &url, Subject::Key(&key))
        {
            Ok(_) | Err(OutfitterError::NotFound { .. }) => {
                tracing::info!("Removed installer {} from {}", key, self.client.base_url());
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
