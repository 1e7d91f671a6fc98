//! HTTP boundary: wire types, error taxonomy, and the blocking client for
//! the search, history, and download endpoints.

mod client;
mod error;
mod types;

pub use client::BackendClient;
pub use error::BackendError;
pub use types::{HistoryEntry, ProductRecord, SearchRequest, SearchResponse, SearchResults};
