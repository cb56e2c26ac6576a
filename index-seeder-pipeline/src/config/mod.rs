//! Loading of the indices configuration file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::errors::PipelineError;
use index_seeder_shared::IndexConfig;

/// Default location of the indices configuration, relative to the working
/// directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/indices.json";

/// Read and validate the indices configuration.
///
/// The file holds a JSON array of index configurations. Order is preserved.
///
/// # Returns
///
/// * `Ok(Vec<IndexConfig>)` - The configured indices
/// * `Err(PipelineError::ConfigError)` - If the file is missing or malformed,
///   or if a name is empty or repeated
pub fn load_index_configs(path: impl AsRef<Path>) -> Result<Vec<IndexConfig>, PipelineError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|e| PipelineError::config(format!("Failed to read {}: {}", path.display(), e)))?;

    let configs = parse_index_configs(&contents)
        .map_err(|e| PipelineError::config(format!("{}: {}", path.display(), e)))?;

    info!(path = %path.display(), count = configs.len(), "Loaded indices configuration");
    Ok(configs)
}

/// Parse and validate configuration text.
pub fn parse_index_configs(contents: &str) -> Result<Vec<IndexConfig>, PipelineError> {
    let configs: Vec<IndexConfig> = serde_json::from_str(contents)
        .map_err(|e| PipelineError::config(format!("Invalid indices configuration: {}", e)))?;

    let mut seen = HashSet::new();
    for config in &configs {
        if config.name.trim().is_empty() {
            return Err(PipelineError::config("Index name must not be empty"));
        }
        if !seen.insert(config.name.as_str()) {
            return Err(PipelineError::config(format!(
                "Duplicate index name: {}",
                config.name
            )));
        }
    }

    Ok(configs)
}
