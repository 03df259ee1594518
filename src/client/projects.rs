//! Project and allowed outbound destination operations

use super::{Client, ListOptions};
use crate::error::Result;
use crate::http::RequestConfig;
use crate::models::{
    AllowedOutboundDestination, AllowedOutboundDestinationList, Project, ProjectCreate,
    ProjectList,
};
use crate::pagination::Pager;

impl Client {
    /// Fetch one page of projects
    pub async fn list_projects(
        &self,
        start: Option<&str>,
        options: &ListOptions,
    ) -> Result<ProjectList> {
        self.http()
            .get_json("projects", Self::list_request(options, start))
            .await
    }

    /// Pager over all projects visible to the account
    pub fn projects(&self, options: ListOptions) -> Pager<Project> {
        let client = self.clone();
        Pager::new(move |start: Option<String>| {
            let client = client.clone();
            let options = options.clone();
            async move {
                client
                    .list_projects(start.as_deref(), &options)
                    .await
                    .map(ProjectList::into_page)
            }
        })
    }

    /// Fetch a single project
    pub async fn get_project(&self, project_id: &str) -> Result<Project> {
        self.http()
            .get_json(&format!("projects/{project_id}"), RequestConfig::new())
            .await
    }

    /// Create a project
    pub async fn create_project(&self, body: &ProjectCreate) -> Result<Project> {
        self.http()
            .post_json(
                "projects",
                RequestConfig::new().json(serde_json::to_value(body)?),
            )
            .await
    }

    /// Delete a project and everything in it
    pub async fn delete_project(&self, project_id: &str) -> Result<()> {
        self.http().delete(&format!("projects/{project_id}")).await
    }

    /// Fetch one page of allowed outbound destinations
    pub async fn list_allowed_outbound_destinations(
        &self,
        project_id: &str,
        start: Option<&str>,
        options: &ListOptions,
    ) -> Result<AllowedOutboundDestinationList> {
        self.http()
            .get_json(
                &format!("projects/{project_id}/allowed_outbound_destinations"),
                Self::list_request(options, start),
            )
            .await
    }

    /// Pager over a project's allowed outbound destinations
    pub fn allowed_outbound_destinations(
        &self,
        project_id: &str,
        options: ListOptions,
    ) -> Pager<AllowedOutboundDestination> {
        let client = self.clone();
        let project_id = project_id.to_string();
        Pager::new(move |start: Option<String>| {
            let client = client.clone();
            let project_id = project_id.clone();
            let options = options.clone();
            async move {
                client
                    .list_allowed_outbound_destinations(&project_id, start.as_deref(), &options)
                    .await
                    .map(AllowedOutboundDestinationList::into_page)
            }
        })
    }
}
