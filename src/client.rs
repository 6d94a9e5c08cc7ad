//! High-level client — `KongClient` with nested sub-client accessors.
//!
//! Each resource has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::error::{HttpError, SdkError};
use crate::http::client::build_client;
use crate::http::KongHttp;
use crate::network::{ADMIN_URL_ENV, DEFAULT_ADMIN_URL, DEFAULT_TIMEOUT_SECS};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::certificate::client::CertificatesClient;
pub use crate::domain::plugin::client::PluginsClient;

/// The primary entry point for the Admin API.
///
/// Provides nested sub-client accessors for each resource:
/// `client.certificates()`, `client.plugins()`.
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct KongClient {
    pub(crate) http: KongHttp,
}

impl KongClient {
    pub fn builder() -> KongClientBuilder {
        KongClientBuilder::default()
    }

    /// Client for `base_url` with default settings.
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        Self::builder().base_url(base_url).build()
    }

    /// The underlying request pipeline, for endpoints without a sub-client.
    pub fn http(&self) -> &KongHttp {
        &self.http
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn certificates(&self) -> CertificatesClient<'_> {
        CertificatesClient { client: self }
    }

    pub fn plugins(&self) -> PluginsClient<'_> {
        PluginsClient { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct KongClientBuilder {
    base_url: String,
    timeout: Duration,
    headers: Vec<(String, String)>,
}

impl Default for KongClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ADMIN_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            headers: Vec::new(),
        }
    }
}

impl KongClientBuilder {
    /// Builder whose base URL comes from `KONG_ADMIN_URL`, falling back to
    /// the default when the variable is unset or blank.
    pub fn from_env() -> Self {
        let builder = Self::default();
        match std::env::var(ADMIN_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => builder.base_url(url.trim()),
            _ => builder,
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Whole-request timeout. Ignored on wasm targets.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a header sent with every request, e.g. an `apikey` for an
    /// Admin API fronted by key-auth. Repeating a name sends every value.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn build(self) -> Result<KongClient, SdkError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                HttpError::InvalidRequest(format!("invalid header name '{}': {}", name, e))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                HttpError::InvalidRequest(format!("invalid value for header '{}': {}", name.as_str(), e))
            })?;
            headers.append(name, value);
        }

        let client = build_client(self.timeout)?;

        tracing::debug!(base_url = %self.base_url, "Building Kong admin client");
        Ok(KongClient {
            http: KongHttp::from_parts(&self.base_url, client)?.with_headers(headers),
        })
    }
}
