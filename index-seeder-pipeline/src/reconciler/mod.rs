//! Index reconciliation.
//!
//! Brings each configured index in line with its existence/recreate policy.
//! Configurations are handled one at a time and in order, so a later create
//! never races an earlier delete.

use tracing::{info, instrument};

use crate::errors::PipelineError;
use index_seeder_repository::SearchIndexProvider;
use index_seeder_shared::IndexConfig;

/// What reconciliation did to one index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileAction {
    /// The index did not exist and was created.
    Created,
    /// The index existed with `reindex` set; it was deleted and created again.
    Recreated,
    /// The index existed and `reindex` was not set.
    Skipped,
}

/// Outcome of a reconciliation run, in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub indices: Vec<(String, ReconcileAction)>,
}

impl ReconcileSummary {
    /// Number of indices that ended with the given action.
    pub fn count(&self, action: ReconcileAction) -> usize {
        self.indices.iter().filter(|(_, a)| *a == action).count()
    }
}

/// Reconcile every configured index against the search engine.
///
/// Stops at the first error; indices handled before it keep their new state.
/// Recreating an index discards all of its documents.
///
/// # Returns
///
/// * `Ok(ReconcileSummary)` - The action taken for each index
/// * `Err(PipelineError)` - The first search engine error
#[instrument(skip_all, fields(index_count = configs.len()))]
pub async fn reconcile(
    provider: &dyn SearchIndexProvider,
    configs: &[IndexConfig],
) -> Result<ReconcileSummary, PipelineError> {
    info!("Found {} indices in configuration", configs.len());

    let mut summary = ReconcileSummary::default();
    for config in configs {
        let action = reconcile_index(provider, config).await?;
        summary.indices.push((config.name.clone(), action));
    }

    info!(
        created = summary.count(ReconcileAction::Created),
        recreated = summary.count(ReconcileAction::Recreated),
        skipped = summary.count(ReconcileAction::Skipped),
        "Indices setup completed"
    );
    Ok(summary)
}

/// Reconcile a single index.
pub async fn reconcile_index(
    provider: &dyn SearchIndexProvider,
    config: &IndexConfig,
) -> Result<ReconcileAction, PipelineError> {
    let name = config.name.as_str();
    let exists = provider.index_exists(name).await?;

    let action = match (exists, config.reindex) {
        (true, false) => {
            info!(index = %name, "Index already exists and reindex is false, skipping");
            return Ok(ReconcileAction::Skipped);
        }
        (true, true) => {
            info!(index = %name, "Index exists and reindex is true, deleting existing index");
            provider.delete_index(name).await?;
            info!(index = %name, "Index deleted");
            ReconcileAction::Recreated
        }
        (false, _) => ReconcileAction::Created,
    };

    info!(index = %name, "Creating index");
    provider.create_index(name, &config.create_body()).await?;
    info!(index = %name, "Index created");

    Ok(action)
}
