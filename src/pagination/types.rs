//! Pagination types and the list operation trait

use crate::error::Result;
use async_trait::async_trait;
use std::future::Future;

/// One server page of a list result.
///
/// `items` keeps the order the server assigned. `next_cursor` is present iff
/// more pages remain; the token is opaque and must be passed back verbatim.
/// A page may be empty and still carry a cursor (sparse page) — emptiness is
/// not a termination signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items for this page, in server order
    pub items: Vec<T>,
    /// Cursor for the next page, absent on the final page
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self { items, next_cursor }
    }

    /// Create a final page (no next cursor)
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_cursor: None,
        }
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The external call that fetches one page.
///
/// Implementations bind the fixed call parameters (resource path, `limit`,
/// filters) at construction; the pager only varies the `start` cursor. A
/// blanket impl covers async closures, so per-resource pagers are built from
/// a captured client clone:
///
/// ```rust,ignore
/// let client = self.clone();
/// Pager::new(move |start: Option<String>| {
///     let client = client.clone();
///     async move { client.list_apps("proj", start.as_deref(), &opts).await }
/// })
/// ```
#[async_trait]
pub trait ListOperation<T>: Send + Sync {
    /// Fetch the page at `start` (None for the first page)
    async fn fetch(&self, start: Option<&str>) -> Result<Page<T>>;
}

#[async_trait]
impl<T, F, Fut> ListOperation<T> for F
where
    F: Fn(Option<String>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Page<T>>> + Send,
{
    async fn fetch(&self, start: Option<&str>) -> Result<Page<T>> {
        (self)(start.map(ToString::to_string)).await
    }
}
