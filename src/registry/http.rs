//! HTTP plumbing for remote registries.
//!
//! [`RegistryClient`] owns the blocking HTTP client and the registry base
//! URL, builds resource URLs, and maps registry error statuses onto the
//! domain error taxonomy:
//!
//! | status | error |
//! |--------|-------|
//! | 404 | `NotFound` |
//! | 409 | `Conflict` |
//! | 400 | `IllegalKey` for key-addressed requests, else `IllegalArgument` |
//! | other non-2xx | `UnexpectedStatus` |
//!
//! Connection failures surface as `Http` and are never mapped.

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{OutfitterError, Result};

/// What a request is about; decides how error statuses are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject<'a> {
    /// Addressed by an installer key in the URL path.
    Key(&'a str),
    /// Carries a descriptor with this key in the body.
    Descriptor(&'a str),
    /// Not about a single installer.
    Collection,
}

/// Blocking HTTP client bound to a registry base URL.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl RegistryClient {
    /// Create a client with the default 30-second timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    /// Create a client with a custom timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|e| OutfitterError::ConfigValidationError {
            message: format!("Invalid registry URL '{}': {}", base_url, e),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(OutfitterError::ConfigValidationError {
                message: format!("Registry URL '{}' cannot be used as a base", base_url),
            });
        }

        let client = Client::builder()
            .user_agent(concat!("outfitter/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|source| OutfitterError::Http {
                url: base_url.to_string(),
                source,
            })?;

        Ok(Self {
            client,
            base_url: parsed,
            timeout,
        })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the registry base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a URL by appending path segments to the base URL.
    pub fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in the constructor
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Start a GET request.
    pub fn get(&self, url: &Url) -> RequestBuilder {
        self.client.get(url.clone())
    }

    /// Start a POST request.
    pub fn post(&self, url: &Url) -> RequestBuilder {
        self.client.post(url.clone())
    }

    /// Start a PUT request.
    pub fn put(&self, url: &Url) -> RequestBuilder {
        self.client.put(url.clone())
    }

    /// Start a DELETE request.
    pub fn delete(&self, url: &Url) -> RequestBuilder {
        self.client.delete(url.clone())
    }

    /// Send a request and map error statuses.
    pub fn send(&self, request: RequestBuilder, url: &Url, subject: Subject<'_>) -> Result<Response> {
        tracing::debug!("Registry request {}", url);

        let response = request.send().map_err(|source| OutfitterError::Http {
            url: url.to_string(),
            source,
        })?;

        check_status(response, url, subject)
    }

    /// Send a request and decode a JSON response body.
    pub fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &Url,
        subject: Subject<'_>,
    ) -> Result<T> {
        self.send(request, url, subject)?
            .json()
            .map_err(|source| OutfitterError::Http {
                url: url.to_string(),
                source,
            })
    }
}

/// Map a registry response status onto the error taxonomy.
pub fn check_status(response: Response, url: &Url, subject: Subject<'_>) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = error_message(response);
    tracing::debug!("Registry answered {} for {}: {}", status, url, message);

    let err = match (status, subject) {
        (StatusCode::NOT_FOUND, Subject::Key(key) | Subject::Descriptor(key)) => {
            OutfitterError::not_found(key)
        }
        (StatusCode::CONFLICT, Subject::Key(key) | Subject::Descriptor(key)) => {
            OutfitterError::conflict(key)
        }
        (StatusCode::BAD_REQUEST, Subject::Key(key)) => OutfitterError::IllegalKey {
            key: key.to_string(),
        },
        (StatusCode::BAD_REQUEST, _) => OutfitterError::illegal_argument(message),
        _ => OutfitterError::UnexpectedStatus {
            url: url.to_string(),
            status: status.as_u16(),
            message,
        },
    };
    Err(err)
}

/// Extract the error message of a failed response.
///
/// Registry servers answer `{"message": "..."}`; anything else is returned
/// verbatim.
fn error_message(response: Response) -> String {
    let body = response.text().unwrap_or_default();
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(String::from))
        .unwrap_or(body)
}
