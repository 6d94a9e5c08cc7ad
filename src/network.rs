//! Network constants for the Kong Admin API.

/// Default Admin API base URL (Kong listens for admin traffic on 8001).
pub const DEFAULT_ADMIN_URL: &str = "http://localhost:8001";

/// Environment variable consulted by [`KongClientBuilder::from_env`](crate::client::KongClientBuilder::from_env).
pub const ADMIN_URL_ENV: &str = "KONG_ADMIN_URL";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
