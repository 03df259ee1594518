//! Resource models and list response envelopes
//!
//! Each list endpoint answers with an envelope: the resource array (named
//! after the resource), paging metadata, and an optional `next` link whose
//! `start` field is the cursor for the following page. Every envelope has an
//! `into_page()` adapter that projects it onto the generic
//! [`Page`](crate::pagination::Page) the pager consumes.
//!
//! Resource structs carry the commonly used fields typed; everything else the
//! server sends is kept verbatim in a flattened `extra` map. The SDK never
//! validates resource payloads.

mod app;
mod build;
mod configsets;
mod function;
mod job;
mod project;

pub use app::{App, AppCreate, AppInstance, AppInstanceList, AppList, AppRevision, AppRevisionList,
    DomainMapping, DomainMappingList};
pub use build::{Build, BuildList, BuildRun, BuildRunList};
pub use configsets::{Binding, BindingList, ConfigMap, ConfigMapList, Secret, SecretCreate,
    SecretList};
pub use function::{Function, FunctionList};
pub use job::{Job, JobCreate, JobList, JobRun, JobRunList};
pub use project::{AllowedOutboundDestination, AllowedOutboundDestinationList, Project,
    ProjectCreate, ProjectList};

use serde::{Deserialize, Serialize};

/// Link to an adjacent page in a list response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageLink {
    /// Cursor for the linked page
    #[serde(default)]
    pub start: Option<String>,
    /// Full URL of the linked page
    #[serde(default)]
    pub href: Option<String>,
}

impl PageLink {
    /// The cursor carried by this link, if any
    pub fn cursor(&self) -> Option<&str> {
        self.start.as_deref()
    }
}

/// Extract the next-page cursor from an optional link
pub(crate) fn next_cursor(next: Option<PageLink>) -> Option<String> {
    next.and_then(|link| link.start)
}
