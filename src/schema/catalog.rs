//! Schema introspection catalog
//!
//! The catalog is the payload the viewer reads from its schema
//! endpoint: every entity's name, collection identifier, description,
//! and ordered field definitions. Entities appear in deterministic
//! (collection) order so repeated snapshots are byte-identical.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::registry::SchemaRegistry;
use super::types::EntitySchema;

/// Catalog rendering errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog serialization failed
    #[error("failed to serialize schema catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Introspection snapshot of a schema registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaCatalog {
    /// Entity descriptors, sorted by collection identifier
    pub entities: Vec<EntitySchema>,
}

impl SchemaCatalog {
    /// Snapshots a registry.
    pub fn from_registry(registry: &SchemaRegistry) -> Self {
        Self {
            entities: registry.entities().into_iter().cloned().collect(),
        }
    }

    /// Looks up an entity descriptor by name or collection identifier.
    pub fn entity(&self, name: &str) -> Option<&EntitySchema> {
        let collection = name.to_lowercase();
        self.entities.iter().find(|e| e.collection == collection)
    }

    /// Returns the number of entities in the snapshot.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Renders the catalog as compact JSON.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Renders the catalog as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
