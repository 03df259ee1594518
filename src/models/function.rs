//! Function models

use super::{next_cursor, PageLink};
use crate::pagination::Page;
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A serverless function
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Function {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Function name, unique within the project
    pub name: String,
    /// Runtime the function executes on (e.g. `nodejs-20`)
    #[serde(default)]
    pub runtime: Option<String>,
    /// Public endpoint, if exposed
    #[serde(default)]
    pub endpoint: Option<String>,
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

/// Response envelope for `GET /projects/{id}/functions`
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionList {
    /// Functions for this page
    pub functions: Vec<Function>,
    /// Page size the server applied
    #[serde(default)]
    pub limit: Option<u32>,
    /// Link to the next page, absent on the last page
    #[serde(default)]
    pub next: Option<PageLink>,
}

impl FunctionList {
    /// Project this envelope onto a generic page
    pub fn into_page(self) -> Page<Function> {
        Page::new(self.functions, next_cursor(self.next))
    }
}
