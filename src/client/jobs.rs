//! Job and job run operations

use super::{Client, ListOptions};
use crate::error::Result;
use crate::http::RequestConfig;
use crate::models::{Job, JobCreate, JobList, JobRun, JobRunList};
use crate::pagination::Pager;

impl Client {
    /// Fetch one page of jobs
    pub async fn list_jobs(
        &self,
        project_id: &str,
        start: Option<&str>,
        options: &ListOptions,
    ) -> Result<JobList> {
        self.http()
            .get_json(
                &format!("projects/{project_id}/jobs"),
                Self::list_request(options, start),
            )
            .await
    }

    /// Pager over a project's jobs
    pub fn jobs(&self, project_id: &str, options: ListOptions) -> Pager<Job> {
        let client = self.clone();
        let project_id = project_id.to_string();
        Pager::new(move |start: Option<String>| {
            let client = client.clone();
            let project_id = project_id.clone();
            let options = options.clone();
            async move {
                client
                    .list_jobs(&project_id, start.as_deref(), &options)
                    .await
                    .map(JobList::into_page)
            }
        })
    }

    /// Fetch a single job
    pub async fn get_job(&self, project_id: &str, name: &str) -> Result<Job> {
        self.http()
            .get_json(
                &format!("projects/{project_id}/jobs/{name}"),
                RequestConfig::new(),
            )
            .await
    }

    /// Create a job
    pub async fn create_job(&self, project_id: &str, body: &JobCreate) -> Result<Job> {
        self.http()
            .post_json(
                &format!("projects/{project_id}/jobs"),
                RequestConfig::new().json(serde_json::to_value(body)?),
            )
            .await
    }

    /// Delete a job
    pub async fn delete_job(&self, project_id: &str, name: &str) -> Result<()> {
        self.http()
            .delete(&format!("projects/{project_id}/jobs/{name}"))
            .await
    }

    /// Fetch one page of job runs, optionally filtered to one job
    pub async fn list_job_runs(
        &self,
        project_id: &str,
        job_name: Option<&str>,
        start: Option<&str>,
        options: &ListOptions,
    ) -> Result<JobRunList> {
        self.http()
            .get_json(
                &format!("projects/{project_id}/job_runs"),
                Self::list_request(options, start).query_opt("job_name", job_name),
            )
            .await
    }

    /// Pager over a project's job runs, optionally filtered to one job
    pub fn job_runs(
        &self,
        project_id: &str,
        job_name: Option<&str>,
        options: ListOptions,
    ) -> Pager<JobRun> {
        let client = self.clone();
        let project_id = project_id.to_string();
        let job_name = job_name.map(ToString::to_string);
        Pager::new(move |start: Option<String>| {
            let client = client.clone();
            let project_id = project_id.clone();
            let job_name = job_name.clone();
            let options = options.clone();
            async move {
                client
                    .list_job_runs(&project_id, job_name.as_deref(), start.as_deref(), &options)
                    .await
                    .map(JobRunList::into_page)
            }
        })
    }
}
