//! Config map, secret, and binding operations

use super::{Client, ListOptions};
use crate::error::Result;
use crate::http::RequestConfig;
use crate::models::{
    Binding, BindingList, ConfigMap, ConfigMapList, Secret, SecretCreate, SecretList,
};
use crate::pagination::Pager;

impl Client {
    /// Fetch one page of config maps
    pub async fn list_config_maps(
        &self,
        project_id: &str,
        start: Option<&str>,
        options: &ListOptions,
    ) -> Result<ConfigMapList> {
        self.http()
            .get_json(
                &format!("projects/{project_id}/config_maps"),
                Self::list_request(options, start),
            )
            .await
    }

    /// Pager over a project's config maps
    pub fn config_maps(&self, project_id: &str, options: ListOptions) -> Pager<ConfigMap> {
        let client = self.clone();
        let project_id = project_id.to_string();
        Pager::new(move |start: Option<String>| {
            let client = client.clone();
            let project_id = project_id.clone();
            let options = options.clone();
            async move {
                client
                    .list_config_maps(&project_id, start.as_deref(), &options)
                    .await
                    .map(ConfigMapList::into_page)
            }
        })
    }

    /// Fetch one page of secrets, optionally filtered by format
    pub async fn list_secrets(
        &self,
        project_id: &str,
        format: Option<&str>,
        start: Option<&str>,
        options: &ListOptions,
    ) -> Result<SecretList> {
        self.http()
            .get_json(
                &format!("projects/{project_id}/secrets"),
                Self::list_request(options, start).query_opt("format", format),
            )
            .await
    }

    /// Pager over a project's secrets, optionally filtered by format
    pub fn secrets(
        &self,
        project_id: &str,
        format: Option<&str>,
        options: ListOptions,
    ) -> Pager<Secret> {
        let client = self.clone();
        let project_id = project_id.to_string();
        let format = format.map(ToString::to_string);
        Pager::new(move |start: Option<String>| {
            let client = client.clone();
            let project_id = project_id.clone();
            let format = format.clone();
            let options = options.clone();
            async move {
                client
                    .list_secrets(&project_id, format.as_deref(), start.as_deref(), &options)
                    .await
                    .map(SecretList::into_page)
            }
        })
    }

    /// Fetch a single secret
    pub async fn get_secret(&self, project_id: &str, name: &str) -> Result<Secret> {
        self.http()
            .get_json(
                &format!("projects/{project_id}/secrets/{name}"),
                RequestConfig::new(),
            )
            .await
    }

    /// Create a secret
    pub async fn create_secret(&self, project_id: &str, body: &SecretCreate) -> Result<Secret> {
        self.http()
            .post_json(
                &format!("projects/{project_id}/secrets"),
                RequestConfig::new().json(serde_json::to_value(body)?),
            )
            .await
    }

    /// Delete a secret
    pub async fn delete_secret(&self, project_id: &str, name: &str) -> Result<()> {
        self.http()
            .delete(&format!("projects/{project_id}/secrets/{name}"))
            .await
    }

    /// Fetch one page of bindings
    pub async fn list_bindings(
        &self,
        project_id: &str,
        start: Option<&str>,
        options: &ListOptions,
    ) -> Result<BindingList> {
        self.http()
            .get_json(
                &format!("projects/{project_id}/bindings"),
                Self::list_request(options, start),
            )
            .await
    }

    /// Pager over a project's bindings
    pub fn bindings(&self, project_id: &str, options: ListOptions) -> Pager<Binding> {
        let client = self.clone();
        let project_id = project_id.to_string();
        Pager::new(move |start: Option<String>| {
            let client = client.clone();
            let project_id = project_id.clone();
            let options = options.clone();
            async move {
                client
                    .list_bindings(&project_id, start.as_deref(), &options)
                    .await
                    .map(BindingList::into_page)
            }
        })
    }
}
