//! Bulk request construction and response parsing.

use serde_json::{json, Value};

use crate::errors::SearchIndexError;
use crate::types::{BulkItemError, BulkWriteSummary};
use index_seeder_shared::Document;

/// Build the lines of a bulk request.
///
/// Each document is preceded by an `index` action targeting `index`. Document
/// IDs are left to the engine.
pub fn build_bulk_operations(
    index: &str,
    documents: &[Document],
) -> Result<Vec<Value>, SearchIndexError> {
    let mut operations = Vec::with_capacity(documents.len() * 2);

    for document in documents {
        let source = serde_json::to_value(document)
            .map_err(|e| SearchIndexError::serialization(e.to_string()))?;
        operations.push(json!({ "index": { "_index": index } }));
        operations.push(source);
    }

    Ok(operations)
}

/// Turn a bulk response body into a summary.
///
/// Items are matched to documents by position. Any item carrying an `error`
/// object counts as failed.
pub fn parse_bulk_response(response: &Value, total: usize) -> BulkWriteSummary {
    let errors = response
        .get("errors")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let item_errors: Vec<BulkItemError> = response
        .get("items")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .enumerate()
                .filter_map(|(position, item)| {
                    let action = item.get("index")?;
                    let error = action.get("error")?;
                    Some(BulkItemError {
                        position,
                        status: action
                            .get("status")
                            .and_then(Value::as_u64)
                            .and_then(|s| u16::try_from(s).ok()),
                        error: error.clone(),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    let failed = item_errors.len();

    BulkWriteSummary {
        total,
        succeeded: total.saturating_sub(failed),
        failed,
        errors,
        item_errors,
    }
}
