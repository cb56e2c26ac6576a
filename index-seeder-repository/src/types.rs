//! Response types for search index operations.

use serde_json::Value;

/// A bulk item the search engine rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkItemError {
    /// Position of the document within the submitted batch.
    pub position: usize,
    /// HTTP status reported for the item.
    pub status: Option<u16>,
    /// The error object returned by the engine, untouched.
    pub error: Value,
}

/// Summary of a bulk write.
///
/// The engine applies bulk items independently, so a request can succeed as a
/// whole while individual items fail. Those failures are listed in
/// `item_errors` rather than raised.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkWriteSummary {
    /// Number of documents in the request.
    pub total: usize,
    /// Number of documents written.
    pub succeeded: usize,
    /// Number of documents rejected.
    pub failed: usize,
    /// The engine's top-level `errors` flag.
    pub errors: bool,
    /// Details for each rejected document.
    pub item_errors: Vec<BulkItemError>,
}

impl BulkWriteSummary {
    /// Summary for a request where every item succeeded.
    pub fn all_succeeded(total: usize) -> Self {
        Self {
            total,
            succeeded: total,
            failed: 0,
            errors: false,
            item_errors: Vec::new(),
        }
    }

    pub fn has_failures(&self) -> bool {
        self.errors || self.failed > 0
    }
}
