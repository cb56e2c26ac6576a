//! OpenSearch implementation of the search index provider.
//!
//! This module provides a concrete implementation of `SearchIndexProvider`
//! using OpenSearch as the backend.

mod bulk;
mod client;

pub use bulk::{build_bulk_operations, parse_bulk_response};
pub use client::OpenSearchClient;
