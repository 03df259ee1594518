//! Auth configuration types

use chrono::{DateTime, Duration, Utc};

/// Refresh this many seconds before the token actually expires.
const EXPIRY_SKEW_SECONDS: i64 = 60;

/// Authentication configuration
#[derive(Debug, Clone, Default)]
pub enum AuthConfig {
    /// No authentication (local development servers)
    #[default]
    None,

    /// Fixed bearer token supplied by the caller
    Bearer {
        /// The bearer token
        token: String,
    },

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// API key exchanged for a short-lived bearer token
    ApiKey {
        /// The long-lived API key
        api_key: String,
        /// Token exchange endpoint
        token_url: String,
    },
}

impl AuthConfig {
    /// Create an API key config
    pub fn api_key(api_key: impl Into<String>, token_url: impl Into<String>) -> Self {
        Self::ApiKey {
            api_key: api_key.into(),
            token_url: token_url.into(),
        }
    }

    /// Create a bearer token config
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }
}

/// A bearer token with optional expiry, cached by the authenticator
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// The token value
    pub token: String,
    /// When the token expires (None = never)
    pub expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    /// Create a token with an explicit expiry
    pub fn new(token: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { token, expires_at }
    }

    /// Create a token that expires in the given number of seconds
    pub fn expires_in(token: String, seconds: i64) -> Self {
        Self {
            token,
            expires_at: Some(Utc::now() + Duration::seconds(seconds)),
        }
    }

    /// Whether the token is expired or within the refresh window
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(at) => Utc::now() + Duration::seconds(EXPIRY_SKEW_SECONDS) >= at,
            None => false,
        }
    }
}
