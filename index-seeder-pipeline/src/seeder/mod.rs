//! Document seeding.
//!
//! Fills configured indices with generated documents, one bulk request per
//! batch. Batches are sent one after another and written with `refresh`, so
//! each batch is searchable before the next one starts.

use tracing::{info, instrument, warn};

use crate::errors::PipelineError;
use crate::generator::DocumentGenerator;
use index_seeder_repository::{BulkItemError, SearchIndexProvider};
use index_seeder_shared::IndexConfig;

/// Default number of documents per bulk request.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Default number of documents written to each index.
pub const DEFAULT_DOCUMENTS_PER_INDEX: usize = 10_000;

/// Options for a seeding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOptions {
    /// Documents per bulk request. Must be positive.
    pub batch_size: usize,
    /// Documents written to each selected index. Must be positive.
    pub documents_per_index: usize,
    /// Restrict seeding to these index names. `None` seeds every index.
    pub indices: Option<Vec<String>>,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            documents_per_index: DEFAULT_DOCUMENTS_PER_INDEX,
            indices: None,
        }
    }
}

impl SeedOptions {
    /// Set the batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the number of documents per index.
    pub fn with_documents_per_index(mut self, documents_per_index: usize) -> Self {
        self.documents_per_index = documents_per_index;
        self
    }

    /// Restrict seeding to the given indices.
    pub fn with_indices<I, S>(mut self, indices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.indices = Some(indices.into_iter().map(Into::into).collect());
        self
    }

    fn validate(&self) -> Result<(), PipelineError> {
        if self.batch_size == 0 {
            return Err(PipelineError::validation("batch size must be positive"));
        }
        if self.documents_per_index == 0 {
            return Err(PipelineError::validation(
                "documents per index must be positive",
            ));
        }
        Ok(())
    }
}

/// Result of seeding one index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexSeedSummary {
    pub index: String,
    /// Bulk requests issued.
    pub batches: usize,
    /// Documents sent.
    pub documents: usize,
    /// Documents the engine rejected.
    pub failed: usize,
    pub item_errors: Vec<BulkItemError>,
}

/// Result of a seeding run, in configuration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedSummary {
    pub indices: Vec<IndexSeedSummary>,
}

impl SeedSummary {
    pub fn total_documents(&self) -> usize {
        self.indices.iter().map(|i| i.documents).sum()
    }

    pub fn total_failed(&self) -> usize {
        self.indices.iter().map(|i| i.failed).sum()
    }
}

/// Sizes of the consecutive batches covering `total` documents.
///
/// Yields `ceil(total / batch_size)` sizes; all are `batch_size` except
/// possibly the last. `batch_size` must be positive.
pub fn batch_sizes(total: usize, batch_size: usize) -> impl Iterator<Item = usize> {
    (0..total)
        .step_by(batch_size.max(1))
        .map(move |start| batch_size.min(total - start))
}

/// Select the configurations to seed, keeping configuration order.
///
/// Filter names that match no configuration are logged and ignored.
pub fn select_indices<'a>(
    configs: &'a [IndexConfig],
    filter: Option<&[String]>,
) -> Vec<&'a IndexConfig> {
    let Some(filter) = filter else {
        return configs.iter().collect();
    };

    for name in filter {
        if !configs.iter().any(|c| &c.name == name) {
            warn!(index = %name, "Requested index is not in the configuration");
        }
    }

    configs
        .iter()
        .filter(|c| filter.contains(&c.name))
        .collect()
}

/// Seed the selected indices with generated documents.
///
/// Item-level rejections are logged and counted; the run continues. A failed
/// bulk request aborts the run.
///
/// # Returns
///
/// * `Ok(SeedSummary)` - Per-index batch and document counts
/// * `Err(PipelineError::ValidationError)` - If the options are invalid
/// * `Err(PipelineError::SearchIndex)` - If a bulk request fails
#[instrument(skip_all, fields(
    batch_size = options.batch_size,
    documents_per_index = options.documents_per_index
))]
pub async fn seed(
    provider: &dyn SearchIndexProvider,
    generator: &dyn DocumentGenerator,
    configs: &[IndexConfig],
    options: &SeedOptions,
) -> Result<SeedSummary, PipelineError> {
    options.validate()?;

    let selected = select_indices(configs, options.indices.as_deref());
    info!(
        "Seeding {} indices with {} documents each",
        selected.len(),
        options.documents_per_index
    );

    let mut summary = SeedSummary::default();
    for config in selected {
        let index_summary = seed_index(provider, generator, &config.name, options).await?;
        summary.indices.push(index_summary);
    }

    info!(
        documents = summary.total_documents(),
        failed = summary.total_failed(),
        "Data seeding completed"
    );
    Ok(summary)
}

async fn seed_index(
    provider: &dyn SearchIndexProvider,
    generator: &dyn DocumentGenerator,
    index: &str,
    options: &SeedOptions,
) -> Result<IndexSeedSummary, PipelineError> {
    info!(index = %index, "Seeding index");

    let mut summary = IndexSeedSummary {
        index: index.to_string(),
        ..Default::default()
    };

    for (batch, size) in batch_sizes(options.documents_per_index, options.batch_size).enumerate() {
        let batch_number = batch + 1;
        info!(index = %index, "Processing batch {} ({} documents)", batch_number, size);

        let documents = generator.generate_documents(size);
        let result = provider.bulk_index(index, &documents, true).await?;

        if result.has_failures() {
            for item in &result.item_errors {
                warn!(
                    index = %index,
                    batch = batch_number,
                    position = item.position,
                    status = ?item.status,
                    error = %item.error,
                    "Document rejected during bulk operation"
                );
            }
        }

        summary.batches += 1;
        summary.documents += documents.len();
        summary.failed += result.failed;
        summary.item_errors.extend(result.item_errors);

        info!(index = %index, "Batch {} completed", batch_number);
    }

    info!(index = %index, documents = summary.documents, "Seeding completed for index");
    Ok(summary)
}
