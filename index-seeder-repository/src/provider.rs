//! Lazily constructed, memoized search engine client.
//!
//! Commands receive a `SearchClientProvider` instead of reaching for global
//! state. The provider builds its client on first use and hands out the same
//! handle for the rest of its lifetime.

use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::config::ConnectionConfig;
use crate::errors::SearchIndexError;
use crate::opensearch::OpenSearchClient;

type ConfigSource = Box<dyn Fn() -> ConnectionConfig + Send + Sync>;

/// Owns the single client handle of a process.
pub struct SearchClientProvider {
    source: ConfigSource,
    client: OnceLock<Arc<OpenSearchClient>>,
}

impl SearchClientProvider {
    /// Provider reading its connection parameters from the environment.
    ///
    /// The environment is read when the client is first requested, not here.
    pub fn from_env() -> Self {
        Self::with_source(ConnectionConfig::from_env)
    }

    /// Provider for a fixed connection configuration.
    pub fn new(config: ConnectionConfig) -> Self {
        Self::with_source(move || config.clone())
    }

    fn with_source<F>(source: F) -> Self
    where
        F: Fn() -> ConnectionConfig + Send + Sync + 'static,
    {
        Self {
            source: Box::new(source),
            client: OnceLock::new(),
        }
    }

    /// Return the client, building it on the first call.
    ///
    /// # Returns
    ///
    /// * `Ok(Arc<OpenSearchClient>)` - The cached client
    /// * `Err(SearchIndexError)` - If the client could not be built; the next
    ///   call tries again
    pub fn client(&self) -> Result<Arc<OpenSearchClient>, SearchIndexError> {
        if let Some(client) = self.client.get() {
            return Ok(Arc::clone(client));
        }

        let config = (self.source)();
        let client = Arc::new(OpenSearchClient::new(&config)?);
        debug!(node = %config.node, "Search client initialized");

        // Commands run on one task, so the slot is still empty here; keep the
        // first value if that ever changes.
        Ok(Arc::clone(self.client.get_or_init(|| client)))
    }

    /// Whether the client has been built yet.
    pub fn is_initialized(&self) -> bool {
        self.client.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_client_is_built_lazily_and_cached() {
        let reads = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&reads);
        let provider = SearchClientProvider::with_source(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            ConnectionConfig::default()
        });

        assert!(!provider.is_initialized());
        assert_eq!(reads.load(Ordering::SeqCst), 0);

        let first = provider.client().unwrap();
        let second = provider.client().unwrap();

        assert!(provider.is_initialized());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_invalid_config_is_not_cached() {
        let provider = SearchClientProvider::new(ConnectionConfig {
            node: "::not-a-url::".to_string(),
            credentials: None,
        });

        assert!(provider.client().is_err());
        assert!(!provider.is_initialized());
        assert!(provider.client().is_err());
    }
}
