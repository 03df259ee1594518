//! Cursor pagination engine
//!
//! Every Meridian list endpoint pages its results with an opaque `start`
//! cursor: the response carries a batch of items plus, when more remain, the
//! cursor for the next batch. [`Pager`] turns one such endpoint into a single
//! logical sequence, fetching each server page at most once and preserving
//! server order.
//!
//! One generic engine serves all resources; per-resource wiring is just a
//! closure that binds the fixed call parameters (see [`ListOperation`]).

mod pager;
mod types;

pub use pager::Pager;
pub use types::{ListOperation, Page};
