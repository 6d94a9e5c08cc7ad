//! # Kong Admin API client
//!
//! An async Rust client for the Kong API gateway's Admin API.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Resource models, typed plugin configs, config normalization (always available)
//! 2. **HTTP API** — `KongHttp`, one generic request/response pipeline
//! 3. **High-Level Client** — `KongClient` with nested per-resource sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kong_admin::prelude::*;
//!
//! let client = KongClient::builder()
//!     .base_url("http://localhost:8001")
//!     .build()?;
//!
//! let limit = RateLimitingPlugin::new(RateLimitingConfig {
//!     minute: 20,
//!     ..Default::default()
//! })
//! .for_api("orders-api");
//! let created = client.plugins().post_typed(&limit).await?;
//! let certs = client.certificates().get_all(None).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared helpers: list envelopes, zero-value checks, serde helpers.
pub mod shared;

/// Domain modules (vertical slices): resource types, wire types, sub-clients.
pub mod domain;

/// Unified error types.
pub mod error;

/// Default URL and timeout constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Generic request pipeline and query encoding.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `KongClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{IsZero, Page};

    // Domain types — certificate
    pub use crate::domain::certificate::{
        Certificate, CertificateQuery, CertificateRequest, Certificates,
    };

    // Domain types — plugin
    pub use crate::domain::plugin::{
        flatten, AclConfig, AclPlugin, Config, ConfigValue, CorrelationIdConfig,
        CorrelationIdGenerator, CorrelationIdPlugin, EnabledPlugins, FileLogConfig, FileLogPlugin,
        JwtConfig, JwtPlugin, KeyAuthenticationConfig, KeyAuthenticationPlugin, LimitBy, Plugin,
        PluginConfig, PluginQuery, Plugins, RateLimitingConfig, RateLimitingPlugin,
        RateLimitingPolicy, RequestSizeLimitingConfig, RequestSizeLimitingPlugin, Schema,
        TypedPlugin,
    };

    // Errors
    pub use crate::error::{ConvertError, ErrorKind, ErrorResponse, HttpError, SdkError};

    // Network
    pub use crate::network::{ADMIN_URL_ENV, DEFAULT_ADMIN_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{CertificatesClient, KongClient, KongClientBuilder, PluginsClient};
    #[cfg(feature = "http")]
    pub use crate::http::{ApiResponse, KongHttp};
}
