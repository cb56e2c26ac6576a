//! # Index Seeder Shared
//!
//! Data structures shared across the index seeder crates: the declarative
//! index configuration read from disk and the synthetic documents written to
//! the search engine.

mod document;
mod index_config;

pub use document::{Category, Comment, CommentType, Document};
pub use index_config::{
    DynamicMapping, IndexBody, IndexConfig, IndexMapping, IndexMetadata, IndexProperty,
    IndexSettings,
};

/// Untyped attributes carried alongside the known fields of a JSON object.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;
