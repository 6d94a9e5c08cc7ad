//! Plugin domain — generic plugin objects, typed configs, normalization.
//!
//! The Admin API stores every plugin in one generic shape whose `config` is
//! an open key/value map. Typed configs in [`config`] are flattened into that
//! map before transmission; conversion is one-way.

#[cfg(feature = "http")]
pub mod client;
pub mod config;
mod convert;
pub mod wire;

use crate::shared::serde_util::timestamp_ms;
use crate::shared::{is_zero, Page};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use config::{
    flatten, AclConfig, CorrelationIdConfig, CorrelationIdGenerator, FileLogConfig, JwtConfig,
    KeyAuthenticationConfig, LimitBy, PluginConfig, RateLimitingConfig, RateLimitingPolicy,
    RequestSizeLimitingConfig,
};
pub use convert::{
    AclPlugin, CorrelationIdPlugin, FileLogPlugin, JwtPlugin, KeyAuthenticationPlugin,
    RateLimitingPlugin, RequestSizeLimitingPlugin, TypedPlugin,
};
pub use wire::{EnabledPlugins, PluginQuery, Schema};

// ─── ConfigValue ─────────────────────────────────────────────────────────────

/// Generic plugin configuration: wire key → value.
pub type Config = BTreeMap<String, ConfigValue>;

/// A single plugin configuration value.
///
/// Serializes untagged, so it reads and writes plain JSON values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<ConfigValue>),
    Map(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Integer(i) => Some(*i as f64),
            ConfigValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, ConfigValue>> {
        match self {
            ConfigValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => ConfigValue::Null,
            Value::Bool(b) => ConfigValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ConfigValue::Integer(i),
                None => n.as_f64().map_or(ConfigValue::Null, ConfigValue::Float),
            },
            Value::String(s) => ConfigValue::String(s),
            Value::Array(items) => ConfigValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => {
                ConfigValue::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Integer(i)
    }
}

impl From<i32> for ConfigValue {
    fn from(i: i32) -> Self {
        ConfigValue::Integer(i.into())
    }
}

impl From<u32> for ConfigValue {
    fn from(i: u32) -> Self {
        ConfigValue::Integer(i.into())
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        ConfigValue::Float(f)
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(items: Vec<T>) -> Self {
        ConfigValue::List(items.into_iter().map(Into::into).collect())
    }
}

// ─── Plugin ──────────────────────────────────────────────────────────────────

/// A plugin object in the generic shape the Admin API stores.
///
/// A plugin is scoped to at most one API and at most one Consumer; with
/// neither set it applies globally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plugin {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: String,
    /// Plugin kind, e.g. `"rate-limiting"`.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub name: String,
    #[serde(
        default,
        with = "timestamp_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub api_id: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub consumer_id: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub config: Config,
}

/// List response for `GET /plugins`.
pub type Plugins = Page<Plugin>;

impl Plugin {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Scope the plugin to an API.
    pub fn for_api(mut self, api_id: impl Into<String>) -> Self {
        self.api_id = api_id.into();
        self
    }

    /// Scope the plugin to a Consumer.
    pub fn for_consumer(mut self, consumer_id: impl Into<String>) -> Self {
        self.consumer_id = consumer_id.into();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Set a single config entry.
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    /// Whether the plugin applies to every API and Consumer.
    pub fn is_global(&self) -> bool {
        self.api_id.is_empty() && self.consumer_id.is_empty()
    }
}
