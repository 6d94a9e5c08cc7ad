//! Typed plugin configs and their normalization into the generic [`Config`] map.
//!
//! Every config field carries `#[serde(skip_serializing_if = "is_zero")]`, so
//! serializing a config already drops the fields left at their zero value;
//! [`flatten`] then lifts the resulting JSON object into [`ConfigValue`]s. The
//! wire key of each entry is the field's serde name.
//!
//! Zero and unset are the same thing here: a limit explicitly set to `0` is
//! omitted exactly like one never set, and the gateway applies its default.
//! To send a literal zero, set the entry on the generic [`Plugin`] directly.
//!
//! [`Plugin`]: super::Plugin

use super::{Config, ConfigValue};
use crate::error::ConvertError;
use crate::impl_is_zero;
use crate::shared::{is_zero, IsZero};
use serde::{Deserialize, Serialize};

/// A strongly-typed configuration for one plugin kind.
pub trait PluginConfig: Serialize + IsZero {
    /// Plugin name as registered on the gateway, e.g. `"rate-limiting"`.
    const NAME: &'static str;

    /// Normalize into the generic config map.
    fn to_config(&self) -> Result<Config, ConvertError> {
        flatten(self)
    }
}

/// Flatten any serializable config struct into the generic config map.
///
/// The value must serialize to a JSON object. Entries serialized as `null`
/// (e.g. an unannotated `Option::None`) are dropped; nested objects become
/// nested maps under the field's own wire key.
pub fn flatten<C: Serialize + ?Sized>(config: &C) -> Result<Config, ConvertError> {
    use serde_json::Value;

    match serde_json::to_value(config)? {
        Value::Object(fields) => Ok(fields
            .into_iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| (key, ConfigValue::from(value)))
            .collect()),
        Value::Null => Err(ConvertError::NotAnObject("null")),
        Value::Bool(_) => Err(ConvertError::NotAnObject("a boolean")),
        Value::Number(_) => Err(ConvertError::NotAnObject("a number")),
        Value::String(_) => Err(ConvertError::NotAnObject("a string")),
        Value::Array(_) => Err(ConvertError::NotAnObject("an array")),
    }
}

// ─── acl ─────────────────────────────────────────────────────────────────────

/// <https://getkong.org/plugins/acl/>
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AclConfig {
    #[serde(skip_serializing_if = "is_zero")]
    pub whitelist: Vec<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub blacklist: Vec<String>,
}

impl_is_zero!(AclConfig { whitelist, blacklist });

impl PluginConfig for AclConfig {
    const NAME: &'static str = "acl";
}

// ─── request-size-limiting ───────────────────────────────────────────────────

/// <https://getkong.org/plugins/request-size-limiting/>
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RequestSizeLimitingConfig {
    /// Allowed request payload size in megabytes.
    #[serde(skip_serializing_if = "is_zero")]
    pub allowed_payload_size: i64,
}

impl_is_zero!(RequestSizeLimitingConfig { allowed_payload_size });

impl PluginConfig for RequestSizeLimitingConfig {
    const NAME: &'static str = "request-size-limiting";
}

// ─── correlation-id ──────────────────────────────────────────────────────────

/// ID generator used by the correlation-id plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrelationIdGenerator {
    #[serde(rename = "uuid")]
    Uuid,
    #[serde(rename = "uuid#counter")]
    UuidCounter,
    #[serde(rename = "tracker")]
    Tracker,
}

impl IsZero for CorrelationIdGenerator {
    fn is_zero(&self) -> bool {
        false
    }
}

/// <https://getkong.org/plugins/correlation-id/>
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CorrelationIdConfig {
    #[serde(skip_serializing_if = "is_zero")]
    pub header_name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub generator: Option<CorrelationIdGenerator>,
    #[serde(skip_serializing_if = "is_zero")]
    pub echo_downstream: bool,
}

impl_is_zero!(CorrelationIdConfig {
    header_name,
    generator,
    echo_downstream,
});

impl PluginConfig for CorrelationIdConfig {
    const NAME: &'static str = "correlation-id";
}

// ─── rate-limiting ───────────────────────────────────────────────────────────

/// Entity the rate-limiting counters are keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitBy {
    Consumer,
    Credential,
    Ip,
}

impl IsZero for LimitBy {
    fn is_zero(&self) -> bool {
        false
    }
}

/// Where the rate-limiting counters are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateLimitingPolicy {
    Local,
    Cluster,
    Redis,
}

impl IsZero for RateLimitingPolicy {
    fn is_zero(&self) -> bool {
        false
    }
}

/// <https://getkong.org/plugins/rate-limiting/>
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RateLimitingConfig {
    #[serde(skip_serializing_if = "is_zero")]
    pub second: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub minute: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub hour: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub day: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub month: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub year: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub limit_by: Option<LimitBy>,
    #[serde(skip_serializing_if = "is_zero")]
    pub policy: Option<RateLimitingPolicy>,
    #[serde(skip_serializing_if = "is_zero")]
    pub fault_tolerant: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub redis_host: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub redis_port: u16,
    #[serde(skip_serializing_if = "is_zero")]
    pub redis_password: String,
    /// Redis timeout in milliseconds.
    #[serde(skip_serializing_if = "is_zero")]
    pub redis_timeout: i64,
}

impl_is_zero!(RateLimitingConfig {
    second,
    minute,
    hour,
    day,
    month,
    year,
    limit_by,
    policy,
    fault_tolerant,
    redis_host,
    redis_port,
    redis_password,
    redis_timeout,
});

impl PluginConfig for RateLimitingConfig {
    const NAME: &'static str = "rate-limiting";
}

// ─── jwt ─────────────────────────────────────────────────────────────────────

/// <https://getkong.org/plugins/jwt/>
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JwtConfig {
    #[serde(skip_serializing_if = "is_zero")]
    pub uri_param_names: Vec<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub claims_to_verify: Vec<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub key_claim_name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub secret_is_base64: bool,
}

impl_is_zero!(JwtConfig {
    uri_param_names,
    claims_to_verify,
    key_claim_name,
    secret_is_base64,
});

impl PluginConfig for JwtConfig {
    const NAME: &'static str = "jwt";
}

// ─── file-log ────────────────────────────────────────────────────────────────

/// <https://getkong.org/plugins/file-log/>
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileLogConfig {
    #[serde(skip_serializing_if = "is_zero")]
    pub path: String,
}

impl_is_zero!(FileLogConfig { path });

impl PluginConfig for FileLogConfig {
    const NAME: &'static str = "file-log";
}

// ─── key-auth ────────────────────────────────────────────────────────────────

/// <https://getkong.org/plugins/key-authentication/>
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeyAuthenticationConfig {
    #[serde(skip_serializing_if = "is_zero")]
    pub key_names: Vec<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub hide_credentials: bool,
}

impl_is_zero!(KeyAuthenticationConfig {
    key_names,
    hide_credentials,
});

impl PluginConfig for KeyAuthenticationConfig {
    const NAME: &'static str = "key-auth";
}
