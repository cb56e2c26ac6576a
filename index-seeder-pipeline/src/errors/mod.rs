//! Error types for the index seeder pipeline.

use index_seeder_repository::SearchIndexError;
use thiserror::Error;

/// Errors that can occur while reconciling or seeding indices.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The indices configuration could not be loaded.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid seeding options.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error from the search engine.
    #[error("Search index error: {0}")]
    SearchIndex(#[from] SearchIndexError),
}

impl PipelineError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
