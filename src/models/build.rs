//! Build and build run models

use super::{next_cursor, PageLink};
use crate::pagination::Page;
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A build definition turning source into a container image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Build {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Build name, unique within the project
    pub name: String,
    /// Source repository URL
    #[serde(default)]
    pub source_url: Option<String>,
    /// Build strategy (e.g. `dockerfile`, `buildpacks`)
    #[serde(default)]
    pub strategy_type: Option<String>,
    /// Image the build pushes to
    #[serde(default)]
    pub output_image: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Fields the SDK does not model, passed through untouched
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Response envelope for `GET /projects/{id}/builds`
#[derive(Debug, Clone, Deserialize)]
pub struct BuildList {
    /// Builds for this page
    pub builds: Vec<Build>,
    /// Page size the server applied
    #[serde(default)]
    pub limit: Option<u32>,
    /// Link to the next page, absent on the last page
    #[serde(default)]
    pub next: Option<PageLink>,
}

impl BuildList {
    /// Project this envelope onto a generic page
    pub fn into_page(self) -> Page<Build> {
        Page::new(self.builds, next_cursor(self.next))
    }
}

/// One execution of a build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildRun {
    /// Run name
    pub name: String,
    /// Build the run was started from
    #[serde(default)]
    pub build_name: Option<String>,
    /// Lifecycle status (e.g. `running`, `succeeded`, `failed`)
    #[serde(default)]
    pub status: Option<String>,
    /// When the run started
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    /// Fields the SDK does not model, passed through untouched
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Response envelope for `GET /projects/{id}/build_runs`
#[derive(Debug, Clone, Deserialize)]
pub struct BuildRunList {
    /// Build runs for this page
    pub build_runs: Vec<BuildRun>,
    /// Page size the server applied
    #[serde(default)]
    pub limit: Option<u32>,
    /// Link to the next page, absent on the last page
    #[serde(default)]
    pub next: Option<PageLink>,
}

impl BuildRunList {
    /// Project this envelope onto a generic page
    pub fn into_page(self) -> Page<BuildRun> {
        Page::new(self.build_runs, next_cursor(self.next))
    }
}
