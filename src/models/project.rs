//! Project and allowed outbound destination models

use super::{next_cursor, PageLink};
use crate::pagination::Page;
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Meridian project: the namespace every other resource lives in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Project name
    pub name: String,
    /// Deployment region
    #[serde(default)]
    pub region: Option<String>,
    /// Lifecycle status (e.g. `active`, `creating`, `soft_deleted`)
    #[serde(default)]
    pub status: Option<String>,
    /// Resource group the project is billed to
    #[serde(default)]
    pub resource_group_id: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Fields the SDK does not model, passed through untouched
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Request body for creating a project
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectCreate {
    /// Project name
    pub name: String,
    /// Deployment region
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Resource group to bill the project to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_id: Option<String>,
}

/// Response envelope for `GET /projects`
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectList {
    /// Projects for this page
    pub projects: Vec<Project>,
    /// Page size the server applied
    #[serde(default)]
    pub limit: Option<u32>,
    /// Link to the next page, absent on the last page
    #[serde(default)]
    pub next: Option<PageLink>,
}

impl ProjectList {
    /// Project this envelope onto a generic page
    pub fn into_page(self) -> Page<Project> {
        Page::new(self.projects, next_cursor(self.next))
    }
}

/// An egress destination a project is allowed to reach
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllowedOutboundDestination {
    /// Destination name
    pub name: String,
    /// Destination type (e.g. `cidr_block`)
    #[serde(default, rename = "type")]
    pub destination_type: Option<String>,
    /// CIDR block for `cidr_block` destinations
    #[serde(default)]
    pub cidr_block: Option<String>,
    /// Fields the SDK does not model, passed through untouched
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Response envelope for `GET /projects/{id}/allowed_outbound_destinations`
#[derive(Debug, Clone, Deserialize)]
pub struct AllowedOutboundDestinationList {
    /// Destinations for this page
    pub allowed_outbound_destinations: Vec<AllowedOutboundDestination>,
    /// Page size the server applied
    #[serde(default)]
    pub limit: Option<u32>,
    /// Link to the next page, absent on the last page
    #[serde(default)]
    pub next: Option<PageLink>,
}

impl AllowedOutboundDestinationList {
    /// Project this envelope onto a generic page
    pub fn into_page(self) -> Page<AllowedOutboundDestination> {
        Page::new(self.allowed_outbound_destinations, next_cursor(self.next))
    }
}
