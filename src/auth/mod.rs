//! Authentication
//!
//! Supports fixed bearer tokens, HTTP basic auth, and API key auth where the
//! key is exchanged at a token endpoint for a short-lived bearer token that
//! the authenticator caches and refreshes.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, CachedToken};
