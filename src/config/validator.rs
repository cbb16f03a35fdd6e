//! Configuration validation rules.
//!
//! - A remote registry needs a URL
//! - Timeouts and page sizes must be positive

use crate::config::schema::{OutfitterConfig, RegistryKind};
use crate::error::{OutfitterError, Result};

/// Collect every problem with `config`.
fn validation_errors(config: &OutfitterConfig) -> Vec<String> {
    let mut errors = Vec::new();
    let registry = &config.registry;

    if registry.kind == RegistryKind::Remote
        && registry.url.as_deref().is_none_or(|url| url.trim().is_empty())
    {
        errors.push("registry.url is required for a remote registry".to_string());
    }

    if registry.timeout == 0 {
        errors.push("registry.timeout must be greater than 0".to_string());
    }

    if registry.page_size == 0 {
        errors.push("registry.page_size must be greater than 0".to_string());
    }

    errors
}

/// Validate a configuration, reporting all problems at once.
pub fn validate(config: &OutfitterConfig) -> Result<()> {
    let errors = validation_errors(config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(OutfitterError::ConfigValidationError {
            message: errors.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        validate(&OutfitterConfig::default()).unwrap();
    }

    #[test]
    fn remote_without_url_is_invalid() {
        let mut config = OutfitterConfig::default();
        config.registry.kind = RegistryKind::Remote;

        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("registry.url"));
    }

    #[test]
    fn remote_with_url_is_valid() {
        let config = OutfitterConfig::default().with_registry_url("http://localhost/api");
        validate(&config).unwrap();
    }

    #[test]
    fn zero_values_are_reported_together() {
        let mut config = OutfitterConfig::default();
        config.registry.timeout = 0;
        config.registry.page_size = 0;

        let message = validate(&config).unwrap_err().to_string();
        assert!(message.contains("registry.timeout"));
        assert!(message.contains("registry.page_size"));
    }
}
