//! Config map, secret, and binding models

use super::{next_cursor, PageLink};
use crate::pagination::Page;
use crate::types::{JsonObject, StringMap};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Non-sensitive key-value configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigMap {
    /// Config map name, unique within the project
    pub name: String,
    /// The configuration entries
    #[serde(default)]
    pub data: StringMap,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Fields the SDK does not model, passed through untouched
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Response envelope for `GET /projects/{id}/config_maps`
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigMapList {
    /// Config maps for this page
    pub config_maps: Vec<ConfigMap>,
    /// Page size the server applied
    #[serde(default)]
    pub limit: Option<u32>,
    /// Link to the next page, absent on the last page
    #[serde(default)]
    pub next: Option<PageLink>,
}

impl ConfigMapList {
    /// Project this envelope onto a generic page
    pub fn into_page(self) -> Page<ConfigMap> {
        Page::new(self.config_maps, next_cursor(self.next))
    }
}

/// Sensitive key-value configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Secret {
    /// Secret name, unique within the project
    pub name: String,
    /// Secret format (e.g. `generic`, `registry`, `tls`)
    #[serde(default)]
    pub format: Option<String>,
    /// The secret entries
    #[serde(default)]
    pub data: StringMap,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Fields the SDK does not model, passed through untouched
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Request body for creating a secret
#[derive(Debug, Clone, Default, Serialize)]
pub struct SecretCreate {
    /// Secret name
    pub name: String,
    /// Secret format
    pub format: String,
    /// The secret entries
    pub data: StringMap,
}

/// Response envelope for `GET /projects/{id}/secrets`
#[derive(Debug, Clone, Deserialize)]
pub struct SecretList {
    /// Secrets for this page
    pub secrets: Vec<Secret>,
    /// Page size the server applied
    #[serde(default)]
    pub limit: Option<u32>,
    /// Link to the next page, absent on the last page
    #[serde(default)]
    pub next: Option<PageLink>,
}

impl SecretList {
    /// Project this envelope onto a generic page
    pub fn into_page(self) -> Page<Secret> {
        Page::new(self.secrets, next_cursor(self.next))
    }
}

/// A service binding attaching a secret to an app or job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Binding {
    /// Binding identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Secret the binding exposes
    #[serde(default)]
    pub secret_name: Option<String>,
    /// Component the secret is attached to
    #[serde(default)]
    pub component_name: Option<String>,
    /// Environment variable prefix in the component
    #[serde(default)]
    pub prefix: Option<String>,
    /// Fields the SDK does not model, passed through untouched
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Response envelope for `GET /projects/{id}/bindings`
#[derive(Debug, Clone, Deserialize)]
pub struct BindingList {
    /// Bindings for this page
    pub bindings: Vec<Binding>,
    /// Page size the server applied
    #[serde(default)]
    pub limit: Option<u32>,
    /// Link to the next page, absent on the last page
    #[serde(default)]
    pub next: Option<PageLink>,
}

impl BindingList {
    /// Project this envelope onto a generic page
    pub fn into_page(self) -> Page<Binding> {
        Page::new(self.bindings, next_cursor(self.next))
    }
}
