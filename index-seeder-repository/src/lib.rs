//! # Index Seeder Repository
//!
//! This crate provides the search engine boundary used by the index seeder.
//! It includes definitions for errors, the provider interface, connection
//! configuration, and a concrete implementation for OpenSearch.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod provider;
pub mod types;

pub use config::{ConnectionConfig, Credentials};
pub use errors::SearchIndexError;
pub use interfaces::SearchIndexProvider;
pub use opensearch::OpenSearchClient;
pub use provider::SearchClientProvider;
pub use types::{BulkItemError, BulkWriteSummary};
