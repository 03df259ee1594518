//! The API client facade
//!
//! [`Client`] owns the HTTP transport and exposes one set of methods per
//! resource: a single-page `list_*` call and a [`Pager`] constructor that
//! binds the fixed call parameters and walks every page. The client is a
//! cheap handle (`Arc` inside), so pagers capture their own clone and stay
//! independent of the caller's copy.

mod apps;
mod builds;
mod configsets;
mod functions;
mod jobs;
mod projects;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use std::sync::Arc;

/// Client for the Meridian API
#[derive(Clone, Debug)]
pub struct Client {
    http: Arc<HttpClient>,
}

impl Client {
    /// Create a client from a configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: Arc::new(HttpClient::new(config)?),
        })
    }

    /// Create a client from environment variables (see
    /// [`ClientConfig::from_env`])
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// The client configuration
    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Request config shared by every list call: `limit` plus the moving
    /// `start` cursor.
    pub(crate) fn list_request(options: &ListOptions, start: Option<&str>) -> RequestConfig {
        RequestConfig::new()
            .query_opt("limit", options.limit.map(|l| l.to_string()))
            .query_opt("start", start)
    }
}

/// Options shared by all list endpoints
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Page size the server should apply (server default when absent)
    pub limit: Option<u32>,
}

impl ListOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_options() {
        let options = ListOptions::new();
        assert!(options.limit.is_none());

        let options = ListOptions::new().limit(50);
        assert_eq!(options.limit, Some(50));
    }

    #[test]
    fn test_list_request_query() {
        let config = Client::list_request(&ListOptions::new().limit(100), Some("cursor_1"));
        assert_eq!(
            config.query,
            vec![
                ("limit".to_string(), "100".to_string()),
                ("start".to_string(), "cursor_1".to_string()),
            ]
        );

        let config = Client::list_request(&ListOptions::new(), None);
        assert!(config.query.is_empty());
    }
}
