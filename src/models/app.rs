//! App, revision, instance, and domain mapping models

use super::{next_cursor, PageLink};
use crate::pagination::Page;
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A deployed application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct App {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<String>,
    /// App name, unique within the project
    pub name: String,
    /// Owning project
    #[serde(default)]
    pub project_id: Option<String>,
    /// Container image the app runs
    #[serde(default)]
    pub image_reference: Option<String>,
    /// Public endpoint, if exposed
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Lifecycle status (e.g. `ready`, `deploying`, `failed`)
    #[serde(default)]
    pub status: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Fields the SDK does not model, passed through untouched
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Request body for creating an app
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppCreate {
    /// App name
    pub name: String,
    /// Container image to run
    pub image_reference: String,
    /// Port the container listens on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_port: Option<u16>,
    /// Minimum number of instances
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_min_instances: Option<u32>,
    /// Maximum number of instances
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_max_instances: Option<u32>,
}

/// Response envelope for `GET /projects/{id}/apps`
#[derive(Debug, Clone, Deserialize)]
pub struct AppList {
    /// Apps for this page
    pub apps: Vec<App>,
    /// Page size the server applied
    #[serde(default)]
    pub limit: Option<u32>,
    /// Link to the next page, absent on the last page
    #[serde(default)]
    pub next: Option<PageLink>,
}

impl AppList {
    /// Project this envelope onto a generic page
    pub fn into_page(self) -> Page<App> {
        Page::new(self.apps, next_cursor(self.next))
    }
}

/// An immutable revision of an app
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppRevision {
    /// Revision name (e.g. `my-app-00003`)
    pub name: String,
    /// App this revision belongs to
    #[serde(default)]
    pub app_name: Option<String>,
    /// Container image the revision pinned
    #[serde(default)]
    pub image_reference: Option<String>,
    /// Lifecycle status
    #[serde(default)]
    pub status: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Fields the SDK does not model, passed through untouched
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Response envelope for `GET /projects/{id}/apps/{app}/revisions`
#[derive(Debug, Clone, Deserialize)]
pub struct AppRevisionList {
    /// Revisions for this page
    pub revisions: Vec<AppRevision>,
    /// Page size the server applied
    #[serde(default)]
    pub limit: Option<u32>,
    /// Link to the next page, absent on the last page
    #[serde(default)]
    pub next: Option<PageLink>,
}

impl AppRevisionList {
    /// Project this envelope onto a generic page
    pub fn into_page(self) -> Page<AppRevision> {
        Page::new(self.revisions, next_cursor(self.next))
    }
}

/// A running instance of an app revision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppInstance {
    /// Instance name
    pub name: String,
    /// App the instance serves
    #[serde(default)]
    pub app_name: Option<String>,
    /// Revision the instance runs
    #[serde(default)]
    pub revision_name: Option<String>,
    /// Lifecycle status (e.g. `running`, `pending`)
    #[serde(default)]
    pub status: Option<String>,
    /// Fields the SDK does not model, passed through untouched
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Response envelope for `GET /projects/{id}/apps/{app}/instances`
#[derive(Debug, Clone, Deserialize)]
pub struct AppInstanceList {
    /// Instances for this page
    pub instances: Vec<AppInstance>,
    /// Page size the server applied
    #[serde(default)]
    pub limit: Option<u32>,
    /// Link to the next page, absent on the last page
    #[serde(default)]
    pub next: Option<PageLink>,
}

impl AppInstanceList {
    /// Project this envelope onto a generic page
    pub fn into_page(self) -> Page<AppInstance> {
        Page::new(self.instances, next_cursor(self.next))
    }
}

/// A custom domain routed to an app
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainMapping {
    /// The mapped hostname
    pub name: String,
    /// App the domain routes to
    #[serde(default)]
    pub target: Option<String>,
    /// TLS secret securing the mapping
    #[serde(default)]
    pub tls_secret: Option<String>,
    /// Lifecycle status
    #[serde(default)]
    pub status: Option<String>,
    /// Fields the SDK does not model, passed through untouched
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Response envelope for `GET /projects/{id}/domain_mappings`
#[derive(Debug, Clone, Deserialize)]
pub struct DomainMappingList {
    /// Domain mappings for this page
    pub domain_mappings: Vec<DomainMapping>,
    /// Page size the server applied
    #[serde(default)]
    pub limit: Option<u32>,
    /// Link to the next page, absent on the last page
    #[serde(default)]
    pub next: Option<PageLink>,
}

impl DomainMappingList {
    /// Project this envelope onto a generic page
    pub fn into_page(self) -> Page<DomainMapping> {
        Page::new(self.domain_mappings, next_cursor(self.next))
    }
}
