//! Error types for the index seeder repository.

mod search_index_error;

pub use search_index_error::SearchIndexError;
