//! Search index provider trait definition.
//!
//! This module defines the abstract interface for the index administration and
//! bulk write operations the seeder needs, allowing for different backend
//! implementations (OpenSearch, Elasticsearch, in-memory mocks, etc.).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchIndexError;
use crate::types::BulkWriteSummary;
use index_seeder_shared::Document;

/// Abstracts the underlying search engine.
///
/// The reconciler and the seeder only see this trait, which lets tests inject
/// recording mocks in place of a live cluster.
///
/// All methods return `Result<T, SearchIndexError>` for consistent error
/// handling across backend implementations.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Check whether an index exists.
    ///
    /// # Arguments
    ///
    /// * `index` - Name of the index
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the index exists
    /// * `Ok(false)` - If it does not
    /// * `Err(SearchIndexError)` - If the check could not be performed
    async fn index_exists(&self, index: &str) -> Result<bool, SearchIndexError>;

    /// Delete an index and every document in it.
    ///
    /// # Arguments
    ///
    /// * `index` - Name of the index
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index was deleted
    /// * `Err(SearchIndexError)` - If the deletion fails
    async fn delete_index(&self, index: &str) -> Result<(), SearchIndexError>;

    /// Create an index.
    ///
    /// # Arguments
    ///
    /// * `index` - Name of the index
    /// * `body` - Request body holding `mappings` and `settings`
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index was created
    /// * `Err(SearchIndexError)` - If creation fails, including when the index already exists
    async fn create_index(&self, index: &str, body: &Value) -> Result<(), SearchIndexError>;

    /// Write documents to an index in one bulk request.
    ///
    /// Item-level rejections are reported in the returned summary. Only a
    /// failure of the request as a whole is returned as an error.
    ///
    /// # Arguments
    ///
    /// * `index` - Target index
    /// * `documents` - Documents to write
    /// * `refresh` - Make the writes visible to reads before returning
    ///
    /// # Returns
    ///
    /// * `Ok(BulkWriteSummary)` - Counts and per-item errors
    /// * `Err(SearchIndexError)` - If the request fails entirely
    async fn bulk_index(
        &self,
        index: &str,
        documents: &[Document],
        refresh: bool,
    ) -> Result<BulkWriteSummary, SearchIndexError>;
}
