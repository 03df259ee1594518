//! The pager

use super::types::{ListOperation, Page};
use crate::error::{Error, Result};
use futures::Stream;
use tracing::debug;

/// Stateful iterator over a cursor-paginated list endpoint.
///
/// A pager is a single-use, in-memory walk of one logical query: it starts
/// before the first page, advances once per fetch, and is done when a page
/// comes back without a cursor. It makes no consistency guarantee across
/// pages — resources created or deleted between fetches may appear on a
/// later page or not at all; that trade-off is inherent to cursor pagination
/// and the pager does not try to hide it.
///
/// Not safe for concurrent use from multiple tasks: [`get_next`] mutates the
/// cursor and first-call flag as a read-modify-write pair. One pager, one
/// consumer.
///
/// [`get_next`]: Pager::get_next
pub struct Pager<T> {
    op: Box<dyn ListOperation<T>>,
    cursor: Option<String>,
    first_call: bool,
}

impl<T> Pager<T> {
    /// Create a pager over a list operation.
    ///
    /// The operation carries the fixed call parameters; the pager only feeds
    /// it the moving `start` cursor.
    pub fn new(op: impl ListOperation<T> + 'static) -> Self {
        Self {
            op: Box::new(op),
            cursor: None,
            first_call: true,
        }
    }

    /// Whether a further [`get_next`](Pager::get_next) will fetch a page.
    ///
    /// Pure state query, performs no I/O. True before the first fetch (even
    /// if the collection turns out to be empty) and thereafter exactly while
    /// the last fetched page carried a cursor.
    pub fn has_next(&self) -> bool {
        self.first_call || self.cursor.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// Fetch the next page and return its items (possibly empty).
    ///
    /// Exactly one underlying list call. Fails with [`Error::PagerExhausted`]
    /// when called past the end — that is a caller bug, not a retryable
    /// condition. List call failures propagate unchanged and leave the
    /// cursor where it was, so the caller can retry the same page.
    ///
    /// A server that repeats the cursor it was just given would loop this
    /// pager forever; that is surfaced as [`Error::PaginationProtocol`]
    /// instead.
    pub async fn get_next(&mut self) -> Result<Vec<T>> {
        if !self.has_next() {
            return Err(Error::PagerExhausted);
        }

        let Page { items, next_cursor } = self.op.fetch(self.cursor.as_deref()).await?;
        let next = next_cursor.filter(|c| !c.is_empty());

        if let (Some(prev), Some(next)) = (self.cursor.as_deref(), next.as_deref()) {
            if prev == next {
                return Err(Error::PaginationProtocol {
                    cursor: next.to_string(),
                });
            }
        }

        debug!(
            page_items = items.len(),
            has_more = next.is_some(),
            "Fetched page"
        );

        self.first_call = false;
        self.cursor = next;
        Ok(items)
    }

    /// Drain every remaining page and return the concatenated items.
    ///
    /// Continues from the current cursor — after manual [`get_next`] calls
    /// this returns the remainder, not the full sequence. A mid-stream
    /// failure is returned as-is; items gathered in this call are discarded
    /// (pages consumed by earlier successful calls are unaffected, and
    /// [`current_cursor`](Pager::current_cursor) still points at the page
    /// that failed).
    ///
    /// [`get_next`]: Pager::get_next
    pub async fn get_all(&mut self) -> Result<Vec<T>> {
        let mut all = Vec::new();
        while self.has_next() {
            all.extend(self.get_next().await?);
        }
        Ok(all)
    }

    /// The cursor the next fetch would use (None before the first fetch and
    /// after exhaustion). Useful to resume after a failed call.
    pub fn current_cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Adapt the pager into a [`Stream`] of pages.
    ///
    /// Purely a wrapper over [`get_next`](Pager::get_next): one list call per
    /// yielded item, no prefetching. The stream ends after the final page,
    /// or after the first error.
    pub fn into_pages(self) -> impl Stream<Item = Result<Vec<T>>>
    where
        T: 'static,
    {
        futures::stream::try_unfold(self, |mut pager| async move {
            if !pager.has_next() {
                return Ok(None);
            }
            let items = pager.get_next().await?;
            Ok(Some((items, pager)))
        })
    }
}

impl<T> std::fmt::Debug for Pager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("cursor", &self.cursor)
            .field("first_call", &self.first_call)
            .finish_non_exhaustive()
    }
}
