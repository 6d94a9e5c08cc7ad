//! Wire types for the `/plugins` resource.

use crate::shared::is_zero;
use serde::{Deserialize, Serialize};

/// Response for `GET /plugins/enabled`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnabledPlugins {
    #[serde(default)]
    pub enabled_plugins: Vec<String>,
}

impl EnabledPlugins {
    pub fn contains(&self, name: &str) -> bool {
        self.enabled_plugins.iter().any(|p| p == name)
    }
}

/// Response for `GET /plugins/schema/{name}`, returned as-is.
pub type Schema = serde_json::Map<String, serde_json::Value>;

/// Query parameters for `GET /plugins`.
///
/// Every field is an optional filter; fields left at their zero value are not
/// sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PluginQuery {
    /// Filter on the plugin id.
    #[serde(skip_serializing_if = "is_zero")]
    pub id: String,
    /// Filter on the plugin name.
    #[serde(skip_serializing_if = "is_zero")]
    pub name: String,
    /// Filter on the API the plugin is attached to.
    #[serde(skip_serializing_if = "is_zero")]
    pub api_id: String,
    /// Filter on the Consumer the plugin is attached to.
    #[serde(skip_serializing_if = "is_zero")]
    pub consumer_id: String,
    /// Maximum number of plugins per page.
    #[serde(skip_serializing_if = "is_zero")]
    pub size: u32,
    /// Pagination cursor, taken verbatim from a previous page's `offset`.
    #[serde(skip_serializing_if = "is_zero")]
    pub offset: String,
}

impl PluginQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_api(mut self, api_id: impl Into<String>) -> Self {
        self.api_id = api_id.into();
        self
    }

    pub fn with_consumer(mut self, consumer_id: impl Into<String>) -> Self {
        self.consumer_id = consumer_id.into();
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_offset(mut self, offset: impl Into<String>) -> Self {
        self.offset = offset.into();
        self
    }
}
