//! Client configuration
//!
//! [`ClientConfig`] fixes the base URL, auth, timeouts, retry policy, and
//! rate limiting for a [`Client`](crate::Client). Built either explicitly via
//! the builder or from environment variables.

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::http::RateLimiterConfig;
use crate::types::{BackoffType, StringMap};
use once_cell::sync::Lazy;
use std::time::Duration;
use url::Url;

/// Default API endpoint for the public Meridian service
pub const DEFAULT_BASE_URL: &str = "https://api.meridian.cloud/v2";

/// Default token exchange endpoint used with API key auth
pub const DEFAULT_AUTH_URL: &str = "https://iam.meridian.cloud/identity/token";

static DEFAULT_USER_AGENT: Lazy<String> =
    Lazy::new(|| format!("{}/{}", crate::NAME, crate::VERSION));

/// Configuration for the Meridian API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for all API requests
    pub base_url: String,
    /// Authentication configuration
    pub auth: AuthConfig,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of transport retries
    pub max_retries: u32,
    /// Initial delay for backoff
    pub initial_backoff: Duration,
    /// Maximum delay for backoff
    pub max_backoff: Duration,
    /// Type of backoff strategy
    pub backoff_type: BackoffType,
    /// Rate limiter configuration (None disables client-side limiting)
    pub rate_limit: Option<RateLimiterConfig>,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth: AuthConfig::None,
            timeout: Duration::from_secs(30),
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(60),
            backoff_type: BackoffType::Exponential,
            rate_limit: Some(RateLimiterConfig::default()),
            default_headers: StringMap::new(),
            user_agent: DEFAULT_USER_AGENT.clone(),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Build a config from environment variables.
    ///
    /// Reads `MERIDIAN_BASE_URL` (optional), `MERIDIAN_API_KEY` (required),
    /// and `MERIDIAN_AUTH_URL` (optional, token exchange endpoint).
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("MERIDIAN_API_KEY")
            .map_err(|_| Error::missing_config("MERIDIAN_API_KEY"))?;
        let token_url =
            std::env::var("MERIDIAN_AUTH_URL").unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string());

        let mut config = Self {
            auth: AuthConfig::api_key(api_key, token_url),
            ..Self::default()
        };
        if let Ok(base_url) = std::env::var("MERIDIAN_BASE_URL") {
            config.base_url = base_url;
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.base_url)?;
        if self.timeout.is_zero() {
            return Err(Error::config("timeout must be greater than zero"));
        }
        Ok(())
    }
}

/// Builder for [`ClientConfig`]
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the auth configuration
    pub fn auth(mut self, auth: AuthConfig) -> Self {
        self.config.auth = auth;
        self
    }

    /// Authenticate with a fixed bearer token
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.config.auth = AuthConfig::Bearer {
            token: token.into(),
        };
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set max retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set backoff configuration
    pub fn backoff(mut self, backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        self.config.backoff_type = backoff_type;
        self.config.initial_backoff = initial;
        self.config.max_backoff = max;
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable client-side rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
