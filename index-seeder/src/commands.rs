//! The two top-level commands.

use tracing::{info, warn};

use crate::config::Dependencies;
use crate::SeederError;
use index_seeder_pipeline::{
    reconcile, seed, RandomDocumentGenerator, ReconcileSummary, SeedOptions, SeedSummary,
};

/// Create or recreate every configured index.
pub async fn setup_indices(deps: &Dependencies) -> Result<ReconcileSummary, SeederError> {
    info!("Starting indices setup");
    let client = deps.clients.client()?;

    let summary = reconcile(client.as_ref(), &deps.configs).await?;
    Ok(summary)
}

/// Seed the configured indices with random documents.
pub async fn seed_data(
    deps: &Dependencies,
    options: &SeedOptions,
) -> Result<SeedSummary, SeederError> {
    info!("Starting data seeding process");
    let client = deps.clients.client()?;

    let summary = seed(
        client.as_ref(),
        &RandomDocumentGenerator::new(),
        &deps.configs,
        options,
    )
    .await?;

    if summary.total_failed() > 0 {
        warn!(
            failed = summary.total_failed(),
            "Some documents were rejected, see warnings above"
        );
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use index_seeder_pipeline::config::parse_index_configs;
    use index_seeder_repository::{ConnectionConfig, SearchClientProvider};

    fn unreachable_deps() -> Dependencies {
        let configs = parse_index_configs(
            r#"[{ "name": "alpha", "body": { "mappings": { "properties": {} } } }]"#,
        )
        .unwrap();
        let clients = SearchClientProvider::new(ConnectionConfig {
            node: "http://127.0.0.1:1".to_string(),
            credentials: None,
        });
        Dependencies::with_provider(configs, clients)
    }

    #[tokio::test]
    async fn test_setup_indices_fails_when_engine_unreachable() {
        let deps = unreachable_deps();

        let result = setup_indices(&deps).await;

        assert!(matches!(result, Err(SeederError::PipelineError(_))));
    }

    #[tokio::test]
    async fn test_seed_data_fails_when_engine_unreachable() {
        let deps = unreachable_deps();
        let options = SeedOptions::default()
            .with_batch_size(2)
            .with_documents_per_index(2);

        let result = seed_data(&deps, &options).await;

        assert!(matches!(result, Err(SeederError::PipelineError(_))));
    }

    #[tokio::test]
    async fn test_invalid_node_url_is_a_search_index_error() {
        let deps = Dependencies::with_provider(
            vec![],
            SearchClientProvider::new(ConnectionConfig {
                node: "not a url".to_string(),
                credentials: None,
            }),
        );

        let result = setup_indices(&deps).await;

        assert!(matches!(result, Err(SeederError::SearchIndexError(_))));
    }
}
