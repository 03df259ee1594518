//! App, revision, instance, and domain mapping operations

use super::{Client, ListOptions};
use crate::error::Result;
use crate::http::RequestConfig;
use crate::models::{
    App, AppCreate, AppInstance, AppInstanceList, AppList, AppRevision, AppRevisionList,
    DomainMapping, DomainMappingList,
};
use crate::pagination::Pager;

impl Client {
    /// Fetch one page of apps
    pub async fn list_apps(
        &self,
        project_id: &str,
        start: Option<&str>,
        options: &ListOptions,
    ) -> Result<AppList> {
        self.http()
            .get_json(
                &format!("projects/{project_id}/apps"),
                Self::list_request(options, start),
            )
            .await
    }

    /// Pager over a project's apps
    pub fn apps(&self, project_id: &str, options: ListOptions) -> Pager<App> {
        let client = self.clone();
        let project_id = project_id.to_string();
        Pager::new(move |start: Option<String>| {
            let client = client.clone();
            let project_id = project_id.clone();
            let options = options.clone();
            async move {
                client
                    .list_apps(&project_id, start.as_deref(), &options)
                    .await
                    .map(AppList::into_page)
            }
        })
    }

    /// Fetch a single app
    pub async fn get_app(&self, project_id: &str, name: &str) -> Result<App> {
        self.http()
            .get_json(
                &format!("projects/{project_id}/apps/{name}"),
                RequestConfig::new(),
            )
            .await
    }

    /// Create an app
    pub async fn create_app(&self, project_id: &str, body: &AppCreate) -> Result<App> {
        self.http()
            .post_json(
                &format!("projects/{project_id}/apps"),
                RequestConfig::new().json(serde_json::to_value(body)?),
            )
            .await
    }

    /// Delete an app
    pub async fn delete_app(&self, project_id: &str, name: &str) -> Result<()> {
        self.http()
            .delete(&format!("projects/{project_id}/apps/{name}"))
            .await
    }

    /// Fetch one page of an app's revisions
    pub async fn list_app_revisions(
        &self,
        project_id: &str,
        app_name: &str,
        start: Option<&str>,
        options: &ListOptions,
    ) -> Result<AppRevisionList> {
        self.http()
            .get_json(
                &format!("projects/{project_id}/apps/{app_name}/revisions"),
                Self::list_request(options, start),
            )
            .await
    }

    /// Pager over an app's revisions
    pub fn app_revisions(
        &self,
        project_id: &str,
        app_name: &str,
        options: ListOptions,
    ) -> Pager<AppRevision> {
        let client = self.clone();
        let project_id = project_id.to_string();
        let app_name = app_name.to_string();
        Pager::new(move |start: Option<String>| {
            let client = client.clone();
            let project_id = project_id.clone();
            let app_name = app_name.clone();
            let options = options.clone();
            async move {
                client
                    .list_app_revisions(&project_id, &app_name, start.as_deref(), &options)
                    .await
                    .map(AppRevisionList::into_page)
            }
        })
    }

    /// Fetch one page of an app's running instances
    pub async fn list_app_instances(
        &self,
        project_id: &str,
        app_name: &str,
        start: Option<&str>,
        options: &ListOptions,
    ) -> Result<AppInstanceList> {
        self.http()
            .get_json(
                &format!("projects/{project_id}/apps/{app_name}/instances"),
                Self::list_request(options, start),
            )
            .await
    }

    /// Pager over an app's running instances
    pub fn app_instances(
        &self,
        project_id: &str,
        app_name: &str,
        options: ListOptions,
    ) -> Pager<AppInstance> {
        let client = self.clone();
        let project_id = project_id.to_string();
        let app_name = app_name.to_string();
        Pager::new(move |start: Option<String>| {
            let client = client.clone();
            let project_id = project_id.clone();
            let app_name = app_name.clone();
            let options = options.clone();
            async move {
                client
                    .list_app_instances(&project_id, &app_name, start.as_deref(), &options)
                    .await
                    .map(AppInstanceList::into_page)
            }
        })
    }

    /// Fetch one page of domain mappings
    pub async fn list_domain_mappings(
        &self,
        project_id: &str,
        start: Option<&str>,
        options: &ListOptions,
    ) -> Result<DomainMappingList> {
        self.http()
            .get_json(
                &format!("projects/{project_id}/domain_mappings"),
                Self::list_request(options, start),
            )
            .await
    }

    /// Pager over a project's domain mappings
    pub fn domain_mappings(&self, project_id: &str, options: ListOptions) -> Pager<DomainMapping> {
        let client = self.clone();
        let project_id = project_id.to_string();
        Pager::new(move |start: Option<String>| {
            let client = client.clone();
            let project_id = project_id.clone();
            let options = options.clone();
            async move {
                client
                    .list_domain_mappings(&project_id, start.as_deref(), &options)
                    .await
                    .map(DomainMappingList::into_page)
            }
        })
    }
}
