//! Build and build run operations

use super::{Client, ListOptions};
use crate::error::Result;
use crate::models::{Build, BuildList, BuildRun, BuildRunList};
use crate::pagination::Pager;

impl Client {
    /// Fetch one page of builds
    pub async fn list_builds(
        &self,
        project_id: &str,
        start: Option<&str>,
        options: &ListOptions,
    ) -> Result<BuildList> {
        self.http()
            .get_json(
                &format!("projects/{project_id}/builds"),
                Self::list_request(options, start),
            )
            .await
    }

    /// Pager over a project's builds
    pub fn builds(&self, project_id: &str, options: ListOptions) -> Pager<Build> {
        let client = self.clone();
        let project_id = project_id.to_string();
        Pager::new(move |start: Option<String>| {
            let client = client.clone();
            let project_id = project_id.clone();
            let options = options.clone();
            async move {
                client
                    .list_builds(&project_id, start.as_deref(), &options)
                    .await
                    .map(BuildList::into_page)
            }
        })
    }

    /// Fetch one page of build runs, optionally filtered to one build
    pub async fn list_build_runs(
        &self,
        project_id: &str,
        build_name: Option<&str>,
        start: Option<&str>,
        options: &ListOptions,
    ) -> Result<BuildRunList> {
        self.http()
            .get_json(
                &format!("projects/{project_id}/build_runs"),
                Self::list_request(options, start).query_opt("build_name", build_name),
            )
            .await
    }

    /// Pager over a project's build runs, optionally filtered to one build
    pub fn build_runs(
        &self,
        project_id: &str,
        build_name: Option<&str>,
        options: ListOptions,
    ) -> Pager<BuildRun> {
        let client = self.clone();
        let project_id = project_id.to_string();
        let build_name = build_name.map(ToString::to_string);
        Pager::new(move |start: Option<String>| {
            let client = client.clone();
            let project_id = project_id.clone();
            let build_name = build_name.clone();
            let options = options.clone();
            async move {
                client
                    .list_build_runs(
                        &project_id,
                        build_name.as_deref(),
                        start.as_deref(),
                        &options,
                    )
                    .await
                    .map(BuildRunList::into_page)
            }
        })
    }
}
