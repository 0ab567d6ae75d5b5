//! Schema registry: the mapping from collection identifier to entity
//! schema
//!
//! The registry is read-only metadata rebuilt from the in-code
//! declarations at process start. Registration validates each
//! declaration and rejects duplicate collection identifiers; both are
//! fatal since nothing should be served from a registry that failed to
//! build.

use std::collections::HashMap;

use super::entities::builtin_entities;
use super::errors::{SchemaError, SchemaResult};
use super::types::EntitySchema;

/// In-memory registry of entity schemas keyed by collection identifier.
pub struct SchemaRegistry {
    entities: HashMap<String, EntitySchema>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entities: HashMap::new(),
        }
    }

    /// Builds the registry from the built-in entity declarations.
    pub fn builtin() -> SchemaResult<Self> {
        let mut registry = Self::new();
        for entity in builtin_entities() {
            registry.register(entity)?;
        }
        Ok(registry)
    }

    /// Registers an entity schema.
    ///
    /// The declaration is validated and its collection identifier must
    /// not already be taken; the registry is append-only.
    pub fn register(&mut self, entity: EntitySchema) -> SchemaResult<()> {
        entity
            .validate_structure()
            .map_err(|reason| SchemaError::invalid_declaration(&entity.name, reason))?;

        if self.entities.contains_key(&entity.collection) {
            return Err(SchemaError::duplicate_entity(&entity.collection));
        }

        self.entities.insert(entity.collection.clone(), entity);
        Ok(())
    }

    /// Looks up an entity by name or collection identifier.
    ///
    /// Case-insensitive: "User" and "user" resolve to the same entry.
    pub fn get(&self, name: &str) -> Option<&EntitySchema> {
        self.entities.get(&name.to_lowercase())
    }

    /// Checks whether an entity is registered.
    pub fn exists(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of registered entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Returns all entities sorted by collection identifier.
    pub fn entities(&self) -> Vec<&EntitySchema> {
        let mut all: Vec<&EntitySchema> = self.entities.values().collect();
        all.sort_by(|a, b| a.collection.cmp(&b.collection));
        all
    }

    /// Returns the collection identifiers sorted.
    pub fn collections(&self) -> Vec<&str> {
        self.entities()
            .into_iter()
            .map(|e| e.collection.as_str())
            .collect()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
