//! Error types for Outfitter operations.
//!
//! This module defines [`OutfitterError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Domain errors (`IllegalKey`, `NotFound`, `Conflict`,
//!   `CircularDependency`, `IllegalArgument`) are identical for local and
//!   remote registries, so callers cannot tell them apart by error type
//! - Transport and storage failures (`Http`, `UnexpectedStatus`, `Io`,
//!   `Json`) propagate as-is and are never folded into domain errors
//! - Use `anyhow::Error` (via `OutfitterError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Outfitter operations.
#[derive(Debug, Error)]
pub enum OutfitterError {
    /// Installer key string is malformed (more than one `:` or empty id).
    #[error("Illegal installer key: '{key}'")]
    IllegalKey { key: String },

    /// No installer registered under the given key.
    #[error("Installer not found: {key}")]
    NotFound { key: String },

    /// An installer with the given key already exists.
    #[error("Installer already exists: {key}")]
    Conflict { key: String },

    /// Dependency resolution closed a cycle: `dependent` depends on `key`,
    /// which is still being resolved.
    #[error("Circular dependency detected: {dependent} -> {key}")]
    CircularDependency { key: String, dependent: String },

    /// Invalid argument or fatal registry misconfiguration.
    #[error("Illegal argument: {message}")]
    IllegalArgument { message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration or store file.
    #[error("Failed to parse {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// HTTP transport failure talking to a remote registry.
    #[error("HTTP request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Remote registry answered with a status outside the registry contract.
    #[error("HTTP {status} from {url}: {message}")]
    UnexpectedStatus {
        url: String,
        status: u16,
        message: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error wrapper.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OutfitterError {
    /// Whether this error belongs to the registry domain taxonomy rather than
    /// the transport/storage layer.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Self::IllegalKey { .. }
                | Self::NotFound { .. }
                | Self::Conflict { .. }
                | Self::CircularDependency { .. }
                | Self::IllegalArgument { .. }
        )
    }

    pub(crate) fn not_found(key: impl ToString) -> Self {
        Self::NotFound {
            key: key.to_string(),
        }
    }

    pub(crate) fn conflict(key: impl ToString) -> Self {
        Self::Conflict {
            key: key.to_string(),
        }
    }

    pub(crate) fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument {
            message: message.into(),
        }
    }
}

/// Result type alias for Outfitter operations.
pub type Result<T> = std::result::Result<T, OutfitterError>;
