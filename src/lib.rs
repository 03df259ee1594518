//! # Meridian SDK
//!
//! Rust client for the Meridian serverless container platform REST API:
//! projects, apps, jobs, builds, config maps, secrets, bindings, domain
//! mappings, and functions.
//!
//! Every list endpoint is cursor-paginated. The SDK wraps each one in a
//! generic [`Pager`](pagination::Pager) that walks server pages either one at
//! a time or all at once.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use meridian_sdk::{Client, ListOptions, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::from_env()?;
//!
//!     // One page at a time
//!     let mut pager = client.apps("my-project", ListOptions::new().limit(50));
//!     while pager.has_next() {
//!         for app in pager.get_next().await? {
//!             println!("{}", app.name);
//!         }
//!     }
//!
//!     // Or drain everything
//!     let jobs = client.jobs("my-project", ListOptions::default()).get_all().await?;
//!     println!("{} jobs", jobs.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

/// Error types for the SDK
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Authentication (bearer tokens, API key exchange)
pub mod auth;

/// HTTP transport with retry and rate limiting
pub mod http;

/// Cursor pagination engine
pub mod pagination;

/// Resource models and list response envelopes
pub mod models;

/// The API client facade
pub mod client;

pub use client::{Client, ListOptions};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use pagination::{ListOperation, Page, Pager};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
