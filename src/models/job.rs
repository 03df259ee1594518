//! Job and job run models

use super::{next_cursor, PageLink};
use crate::pagination::Page;
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A batch job definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Job name, unique within the project
    pub name: String,
    /// Owning project
    #[serde(default)]
    pub project_id: Option<String>,
    /// Container image the job runs
    #[serde(default)]
    pub image_reference: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Fields the SDK does not model, passed through untouched
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Request body for creating a job
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobCreate {
    /// Job name
    pub name: String,
    /// Container image to run
    pub image_reference: String,
    /// Number of array indices to run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_array_size: Option<u32>,
    /// Maximum execution time in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_max_execution_time: Option<u32>,
}

/// Response envelope for `GET /projects/{id}/jobs`
#[derive(Debug, Clone, Deserialize)]
pub struct JobList {
    /// Jobs for this page
    pub jobs: Vec<Job>,
    /// Page size the server applied
    #[serde(default)]
    pub limit: Option<u32>,
    /// Link to the next page, absent on the last page
    #[serde(default)]
    pub next: Option<PageLink>,
}

impl JobList {
    /// Project this envelope onto a generic page
    pub fn into_page(self) -> Page<Job> {
        Page::new(self.jobs, next_cursor(self.next))
    }
}

/// One execution of a job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRun {
    /// Run name
    pub name: String,
    /// Job the run was started from
    #[serde(default)]
    pub job_name: Option<String>,
    /// Lifecycle status (e.g. `running`, `succeeded`, `failed`)
    #[serde(default)]
    pub status: Option<String>,
    /// When the run started
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    /// When the run finished
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Fields the SDK does not model, passed through untouched
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Response envelope for `GET /projects/{id}/job_runs`
#[derive(Debug, Clone, Deserialize)]
pub struct JobRunList {
    /// Job runs for this page
    pub job_runs: Vec<JobRun>,
    /// Page size the server applied
    #[serde(default)]
    pub limit: Option<u32>,
    /// Link to the next page, absent on the last page
    #[serde(default)]
    pub next: Option<PageLink>,
}

impl JobRunList {
    /// Project this envelope onto a generic page
    pub fn into_page(self) -> Page<JobRun> {
        Page::new(self.job_runs, next_cursor(self.next))
    }
}
