//! Localization scoped semantic metadata
//!
//! Schema lookups are always scoped to a localization. A localization
//! publishes its semantic vocabularies (`mapping/vocabularies.json`) and
//! schema semantics (`mapping/schemas.json`):
//!
//! ```json
//! [{"Prefix": "s", "Vocab": "http://schema.org/"}]
//! ```
//!
//! ```json
//! [{"Id": 1234, "RootElement": "Article",
//!   "Fields": [{"Name": "headline", "Path": "/Article/headline", "IsMultiValue": false,
//!               "Semantics": [{"Prefix": "s", "Entity": "Article", "Property": "headline"}],
//!               "Fields": []}],
//!   "Semantics": [{"Prefix": "s", "Entity": "Article"}]}]
//! ```

use std::collections::HashMap;
use std::path::Path;

use dxa_vocab::core;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ContentError, Result};
use crate::schema::SchemaDefinition;

/// File name of the published vocabularies document
pub const VOCABULARIES_FILE: &str = "vocabularies.json";

/// File name of the published schemas document
pub const SCHEMAS_FILE: &str = "schemas.json";

/// A vocabulary bound to a localization-level prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SemanticVocabulary {
    pub prefix: String,
    pub vocab: String,
}

/// A localization (publication context) with its semantic metadata
#[derive(Debug, Clone, Default)]
pub struct Localization {
    pub id: String,
    /// URL path prefix of the localization, e.g. `/en`
    pub path: String,
    pub culture: String,
    vocabularies: Vec<SemanticVocabulary>,
    schemas: HashMap<String, SchemaDefinition>,
}

impl Localization {
    /// Create a localization with the core vocabulary bound to its
    /// conventional prefix
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_core_prefix(id, core::PREFIX)
    }

    /// Create a localization with the core vocabulary bound to `core_prefix`
    pub fn with_core_prefix(id: impl Into<String>, core_prefix: &str) -> Self {
        let mut localization = Self {
            id: id.into(),
            ..Default::default()
        };
        localization.set_vocabulary(core_prefix, core::VOCABULARY);
        localization
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = culture.into();
        self
    }

    /// Bind a prefix to a vocabulary, builder style
    pub fn with_vocabulary(mut self, prefix: &str, vocab: &str) -> Self {
        self.set_vocabulary(prefix, vocab);
        self
    }

    /// Add a schema definition, builder style
    pub fn with_schema(mut self, definition: SchemaDefinition) -> Self {
        self.schemas.insert(definition.id.clone(), definition);
        self
    }

    /// Bind a prefix to a vocabulary
    ///
    /// Any previous binding of the same prefix or the same vocabulary is
    /// replaced: prefixes and vocabularies are one-to-one per localization.
    pub fn set_vocabulary(&mut self, prefix: &str, vocab: &str) {
        self.vocabularies
            .retain(|v| v.prefix != prefix && v.vocab != vocab);
        self.vocabularies.push(SemanticVocabulary {
            prefix: prefix.to_string(),
            vocab: vocab.to_string(),
        });
    }

    /// Get the prefix bound to a vocabulary
    pub fn prefix_for(&self, vocab: &str) -> Option<&str> {
        self.vocabularies
            .iter()
            .find(|v| v.vocab == vocab)
            .map(|v| v.prefix.as_str())
    }

    /// Get the vocabulary bound to a prefix
    pub fn vocabulary_for(&self, prefix: &str) -> Option<&str> {
        self.vocabularies
            .iter()
            .find(|v| v.prefix == prefix)
            .map(|v| v.vocab.as_str())
    }

    /// All vocabulary bindings
    pub fn vocabularies(&self) -> &[SemanticVocabulary] {
        &self.vocabularies
    }

    /// Get a published schema definition
    pub fn schema_definition(&self, schema_id: &str) -> Result<&SchemaDefinition> {
        self.schemas
            .get(schema_id)
            .ok_or_else(|| ContentError::SchemaNotFound {
                schema_id: schema_id.to_string(),
                localization_id: self.id.clone(),
            })
    }

    /// Identifiers of all published schemas
    pub fn schema_ids(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    /// Load vocabulary bindings from a `vocabularies.json` document
    pub fn load_vocabularies_json(&mut self, json: &str) -> Result<()> {
        let vocabularies: Vec<SemanticVocabulary> =
            serde_json::from_str(json).map_err(|e| ContentError::Parse {
                document: VOCABULARIES_FILE.to_string(),
                detail: e.to_string(),
            })?;
        for v in vocabularies {
            self.set_vocabulary(&v.prefix, &v.vocab);
        }
        Ok(())
    }

    /// Load schema definitions from a `schemas.json` document
    pub fn load_schemas_json(&mut self, json: &str) -> Result<()> {
        let schemas: Vec<SchemaDefinition> =
            serde_json::from_str(json).map_err(|e| ContentError::Parse {
                document: SCHEMAS_FILE.to_string(),
                detail: e.to_string(),
            })?;
        for schema in schemas {
            self.schemas.insert(schema.id.clone(), schema);
        }
        Ok(())
    }

    /// Load both published documents from a `mapping` directory
    pub fn load_mapping_dir(&mut self, dir: &Path) -> Result<()> {
        let vocabularies = read_document(&dir.join(VOCABULARIES_FILE))?;
        self.load_vocabularies_json(&vocabularies)?;
        let schemas = read_document(&dir.join(SCHEMAS_FILE))?;
        self.load_schemas_json(&schemas)?;
        debug!(
            localization_id = %self.id,
            vocabularies = self.vocabularies.len(),
            schemas = self.schemas.len(),
            "loaded semantic mapping documents"
        );
        Ok(())
    }
}

fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| ContentError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
