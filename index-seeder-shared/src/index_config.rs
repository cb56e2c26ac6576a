//! Declarative index configuration.
//!
//! Mirrors the JSON layout of the indices configuration file. Every object
//! keeps its unknown attributes in an `extra` map so that they survive the
//! round trip into the create-index request.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::ExtraFields;

/// Desired state of one remote index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Name of the remote index. Unique within a configuration file.
    pub name: String,
    /// Drop and recreate the index when it already exists.
    #[serde(default)]
    pub reindex: bool,
    /// Mapping definition.
    pub body: IndexBody,
    /// Engine-level settings.
    #[serde(default)]
    pub metadata: IndexMetadata,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl IndexConfig {
    /// Build the body of the create-index request.
    ///
    /// Only `mappings` and `settings` are sent; the remaining configuration
    /// is local to the seeder.
    pub fn create_body(&self) -> Value {
        json!({
            "mappings": self.body.mappings,
            "settings": self.metadata.settings,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexBody {
    pub mappings: IndexMapping,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Field-type schema of an index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexMapping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic: Option<DynamicMapping>,
    #[serde(default)]
    pub properties: BTreeMap<String, IndexProperty>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// The `dynamic` mapping parameter accepts either a boolean or a mode name
/// such as `"strict"` or `"runtime"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DynamicMapping {
    Enabled(bool),
    Mode(String),
}

/// A single mapped field. Object fields nest further properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexProperty {
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, IndexProperty>>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexMetadata {
    #[serde(default)]
    pub settings: IndexSettings,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Index settings. Opaque to the seeder: shards, replicas, analyzers and so
/// on are forwarded to the engine as written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexSettings {
    #[serde(default)]
    pub index: serde_json::Map<String, Value>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}
