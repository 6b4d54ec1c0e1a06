//! Semantic schema lookup and caching

use std::collections::HashMap;
use std::sync::Arc;

use dxa_content::{Localization, SemanticSchema};
use parking_lot::RwLock;
use tracing::debug;

use crate::error::Result;

/// Source of compiled semantic schemas
pub trait SchemaProvider: Send + Sync {
    /// Get the semantic schema with the given id in a localization
    fn semantic_schema(&self, schema_id: &str, localization: &Localization) -> Result<Arc<SemanticSchema>>;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SchemaKey {
    schema_id: String,
    localization_id: String,
}

/// Lazily populated cache of semantic schemas
///
/// Schemas are compiled from the localization's published definitions on
/// first use and shared afterwards. Entries are never invalidated.
#[derive(Debug, Default)]
pub struct SemanticSchemaCache {
    schemas: RwLock<HashMap<SchemaKey, Arc<SemanticSchema>>>,
}

impl SemanticSchemaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached schemas
    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }
}

impl SchemaProvider for SemanticSchemaCache {
    fn semantic_schema(&self, schema_id: &str, localization: &Localization) -> Result<Arc<SemanticSchema>> {
        let key = SchemaKey {
            schema_id: schema_id.to_string(),
            localization_id: localization.id.clone(),
        };

        if let Some(schema) = self.schemas.read().get(&key) {
            return Ok(Arc::clone(schema));
        }

        let mut schemas = self.schemas.write();
        // Another thread may have compiled it between the locks
        if let Some(schema) = schemas.get(&key) {
            return Ok(Arc::clone(schema));
        }

        let definition = localization.schema_definition(schema_id)?;
        let schema = Arc::new(SemanticSchema::build(definition, localization));
        debug!(
            schema_id,
            localization_id = %localization.id,
            fields = schema.fields().len(),
            "compiled semantic schema"
        );
        schemas.insert(key, Arc::clone(&schema));
        Ok(schema)
    }
}
