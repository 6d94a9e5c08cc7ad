//! Conversions from typed plugins to the generic plugin shape.

use super::config::{
    AclConfig, CorrelationIdConfig, FileLogConfig, JwtConfig, KeyAuthenticationConfig, PluginConfig,
    RateLimitingConfig, RequestSizeLimitingConfig,
};
use super::Plugin;
use crate::error::ConvertError;

/// A plugin carrying a typed config.
///
/// Only converts toward the generic [`Plugin`]; responses always come back
/// in the generic shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypedPlugin<C> {
    pub id: String,
    pub api_id: String,
    pub consumer_id: String,
    pub enabled: Option<bool>,
    pub config: C,
}

pub type AclPlugin = TypedPlugin<AclConfig>;
pub type RequestSizeLimitingPlugin = TypedPlugin<RequestSizeLimitingConfig>;
pub type CorrelationIdPlugin = TypedPlugin<CorrelationIdConfig>;
pub type RateLimitingPlugin = TypedPlugin<RateLimitingConfig>;
pub type JwtPlugin = TypedPlugin<JwtConfig>;
pub type FileLogPlugin = TypedPlugin<FileLogConfig>;
pub type KeyAuthenticationPlugin = TypedPlugin<KeyAuthenticationConfig>;

impl<C: PluginConfig> TypedPlugin<C> {
    pub fn new(config: C) -> Self {
        Self {
            id: String::new(),
            api_id: String::new(),
            consumer_id: String::new(),
            enabled: None,
            config,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn for_api(mut self, api_id: impl Into<String>) -> Self {
        self.api_id = api_id.into();
        self
    }

    pub fn for_consumer(mut self, consumer_id: impl Into<String>) -> Self {
        self.consumer_id = consumer_id.into();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Plugin name the config registers under.
    pub fn name(&self) -> &'static str {
        C::NAME
    }

    /// Normalize into the generic plugin, flattening the config.
    pub fn to_plugin(&self) -> Result<Plugin, ConvertError> {
        Ok(Plugin {
            id: self.id.clone(),
            name: C::NAME.to_string(),
            created_at: None,
            enabled: self.enabled,
            api_id: self.api_id.clone(),
            consumer_id: self.consumer_id.clone(),
            config: self.config.to_config()?,
        })
    }
}

impl<C: PluginConfig> TryFrom<&TypedPlugin<C>> for Plugin {
    type Error = ConvertError;

    fn try_from(typed: &TypedPlugin<C>) -> Result<Self, Self::Error> {
        typed.to_plugin()
    }
}

impl<C: PluginConfig> TryFrom<TypedPlugin<C>> for Plugin {
    type Error = ConvertError;

    fn try_from(typed: TypedPlugin<C>) -> Result<Self, Self::Error> {
        let config = typed.config.to_config()?;
        Ok(Plugin {
            id: typed.id,
            name: C::NAME.to_string(),
            created_at: None,
            enabled: typed.enabled,
            api_id: typed.api_id,
            consumer_id: typed.consumer_id,
            config,
        })
    }
}
