//! Plugins sub-client — `/plugins` queries and API-scoped updates.

use crate::client::KongClient;
use crate::domain::path_segment;
use crate::domain::plugin::{
    EnabledPlugins, Plugin, PluginConfig, PluginQuery, Plugins, Schema, TypedPlugin,
};
use crate::error::SdkError;
use crate::http::with_query;

/// Sub-client for plugin operations.
pub struct PluginsClient<'a> {
    pub(crate) client: &'a KongClient,
}

impl<'a> PluginsClient<'a> {
    /// `GET /plugins/{id}`
    pub async fn get(&self, id: &str) -> Result<Plugin, SdkError> {
        let url = format!("plugins/{}", path_segment(id, "plugin id")?);
        Ok(self.client.http.get(&url).await?)
    }

    /// List plugins, optionally filtered. Zero-valued filters are not sent.
    ///
    /// `GET /plugins?id=&name=&api_id=&consumer_id=&size=&offset=`
    pub async fn get_all(&self, query: Option<&PluginQuery>) -> Result<Plugins, SdkError> {
        let url = with_query("plugins", query)?;
        Ok(self.client.http.get(&url).await?)
    }

    /// Names of the plugins installed on the node.
    ///
    /// `GET /plugins/enabled`
    pub async fn get_enabled(&self) -> Result<EnabledPlugins, SdkError> {
        Ok(self.client.http.get("plugins/enabled").await?)
    }

    /// Config schema of one plugin kind, returned untyped.
    ///
    /// `GET /plugins/schema/{name}`
    pub async fn get_schema(&self, name: &str) -> Result<Schema, SdkError> {
        let url = format!("plugins/schema/{}", path_segment(name, "plugin name")?);
        Ok(self.client.http.get(&url).await?)
    }

    /// Create a plugin. Scope it with `api_id` / `consumer_id`; with
    /// neither set it applies globally.
    ///
    /// `POST /plugins`
    pub async fn post(&self, plugin: &Plugin) -> Result<Plugin, SdkError> {
        if plugin.name.trim().is_empty() {
            return Err(SdkError::Validation(
                "plugin name is required to create a plugin".to_string(),
            ));
        }
        Ok(self.client.http.post("plugins", plugin).await?)
    }

    /// Flatten a typed plugin into the generic shape, then create it.
    pub async fn post_typed<C: PluginConfig>(
        &self,
        plugin: &TypedPlugin<C>,
    ) -> Result<Plugin, SdkError> {
        let generic = plugin.to_plugin()?;
        tracing::debug!(name = %generic.name, entries = generic.config.len(), "Normalized typed plugin");
        self.post(&generic).await
    }

    /// Update a plugin attached to an API. `plugin.id` selects the plugin;
    /// the whole object is sent as the partial body.
    ///
    /// `PATCH /apis/{api}/plugins/{id}`
    pub async fn patch(&self, api: &str, plugin: &Plugin) -> Result<Plugin, SdkError> {
        if plugin.id.trim().is_empty() {
            return Err(SdkError::Validation(
                "plugin id is required to update a plugin".to_string(),
            ));
        }
        let url = format!(
            "apis/{}/plugins/{}",
            path_segment(api, "api id or name")?,
            path_segment(&plugin.id, "plugin id")?
        );
        Ok(self.client.http.patch(&url, plugin).await?)
    }

    /// `DELETE /apis/{api}/plugins/{id}`
    pub async fn delete(&self, api: &str, plugin_id: &str) -> Result<(), SdkError> {
        let url = format!(
            "apis/{}/plugins/{}",
            path_segment(api, "api id or name")?,
            path_segment(plugin_id, "plugin id")?
        );
        self.client.http.delete(&url).await?;
        Ok(())
    }
}
