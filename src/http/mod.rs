//! HTTP transport
//!
//! A reqwest-based client with retry, backoff, and client-side rate
//! limiting. All API calls made by the SDK go through [`HttpClient`]; it is
//! injected into the client facade rather than held as global state so tests
//! can point it at a fake server.

mod client;
mod rate_limit;

pub use client::{HttpClient, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
mod tests;
