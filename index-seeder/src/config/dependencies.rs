//! Dependency initialization and wiring for the index seeder.

use std::path::Path;

use tracing::info;

use crate::SeederError;
use index_seeder_pipeline::load_index_configs;
use index_seeder_repository::SearchClientProvider;
use index_seeder_shared::IndexConfig;

/// Container for everything a command needs.
pub struct Dependencies {
    /// Indices declared in the configuration file, in file order.
    pub configs: Vec<IndexConfig>,
    /// Source of the search engine client.
    pub clients: SearchClientProvider,
}

impl Dependencies {
    /// Load the indices configuration and prepare the client provider.
    ///
    /// The configuration is read first so that a missing or malformed file is
    /// reported before anything touches the network. The client itself is
    /// built on first use.
    ///
    /// # Environment Variables
    ///
    /// - `ELASTICSEARCH_NODE`: search engine URL (default: http://localhost:9200)
    /// - `ELASTICSEARCH_USERNAME` / `ELASTICSEARCH_PASSWORD`: basic auth
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(SeederError)` - If the configuration cannot be loaded
    pub fn new(config_path: &Path) -> Result<Self, SeederError> {
        let configs = load_index_configs(config_path)?;

        info!(
            config_path = %config_path.display(),
            index_count = configs.len(),
            "Initializing dependencies"
        );

        Ok(Self::with_provider(configs, SearchClientProvider::from_env()))
    }

    /// Assemble dependencies from parts.
    pub fn with_provider(configs: Vec<IndexConfig>, clients: SearchClientProvider) -> Self {
        Self { configs, clients }
    }
}
