//! Semantic schemas
//!
//! A [`SchemaDefinition`] is the published form of a CMS schema's semantic
//! metadata (one entry of `mapping/schemas.json`). [`SemanticSchema::build`]
//! compiles it into a read-only structure with an index from
//! (prefix, entity, property) triples to concrete fields.
//!
//! Field paths are absolute XML paths such as `/Article/body/paragraph`:
//! the first segment is the schema root element (or `Metadata` for metadata
//! fields) and every further segment but the last names an embedded field.

use std::collections::HashMap;

use dxa_vocab::core;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::localization::Localization;

/// Root segment of metadata field paths
const METADATA_ROOT: &str = "Metadata";

/// Semantics of a schema field: `prefix:entity.property`
///
/// The prefix is a localization-level vocabulary prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FieldSemantics {
    pub prefix: String,
    pub entity: String,
    pub property: String,
}

impl FieldSemantics {
    pub fn new(
        prefix: impl Into<String>,
        entity: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            entity: entity.into(),
            property: property.into(),
        }
    }
}

/// Semantics of a schema as a whole: `prefix:entity`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SchemaSemantics {
    pub prefix: String,
    pub entity: String,
}

impl SchemaSemantics {
    pub fn new(prefix: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            entity: entity.into(),
        }
    }
}

/// Published definition of one schema field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SchemaFieldDefinition {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub is_multi_value: bool,
    #[serde(default)]
    pub semantics: Vec<FieldSemantics>,
    /// Sub-fields of an embedded field
    #[serde(default)]
    pub fields: Vec<SchemaFieldDefinition>,
    /// Root element of the embedded schema (embedded fields only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedded_root_element: Option<String>,
}

impl SchemaFieldDefinition {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_multi_value: false,
            semantics: Vec::new(),
            fields: Vec::new(),
            embedded_root_element: None,
        }
    }

    /// Mark as an embedded field whose values follow the given schema root
    pub fn embedding(mut self, root_element: impl Into<String>) -> Self {
        self.embedded_root_element = Some(root_element.into());
        self
    }

    pub fn multi_value(mut self) -> Self {
        self.is_multi_value = true;
        self
    }

    pub fn with_semantics(mut self, semantics: FieldSemantics) -> Self {
        self.semantics.push(semantics);
        self
    }

    pub fn with_field(mut self, field: SchemaFieldDefinition) -> Self {
        self.fields.push(field);
        self
    }
}

/// Published definition of a schema's semantics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SchemaDefinition {
    /// Schema identifier; published as a number, kept as a string
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub root_element: String,
    #[serde(default)]
    pub fields: Vec<SchemaFieldDefinition>,
    #[serde(default)]
    pub semantics: Vec<SchemaSemantics>,
}

impl SchemaDefinition {
    pub fn new(id: impl Into<String>, root_element: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            root_element: root_element.into(),
            fields: Vec::new(),
            semantics: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: SchemaFieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_semantics(mut self, semantics: SchemaSemantics) -> Self {
        self.semantics.push(semantics);
        self
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Entity names a schema declares, per vocabulary
///
/// Order is significant: the first entity declared for a vocabulary is the
/// one fields are resolved against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityNames {
    by_vocabulary: Vec<(String, Vec<String>)>,
}

impl EntityNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity name under a vocabulary, ignoring duplicates
    pub fn add(&mut self, vocabulary: &str, entity: &str) {
        match self.by_vocabulary.iter_mut().find(|(v, _)| v == vocabulary) {
            Some((_, entities)) => {
                if !entities.iter().any(|e| e == entity) {
                    entities.push(entity.to_string());
                }
            }
            None => self
                .by_vocabulary
                .push((vocabulary.to_string(), vec![entity.to_string()])),
        }
    }

    /// Get the entity names declared for a vocabulary
    pub fn entities(&self, vocabulary: &str) -> &[String] {
        self.by_vocabulary
            .iter()
            .find(|(v, _)| v == vocabulary)
            .map(|(_, entities)| entities.as_slice())
            .unwrap_or_default()
    }

    /// Get the first entity name declared for a vocabulary
    pub fn first(&self, vocabulary: &str) -> Option<&str> {
        self.entities(vocabulary).first().map(String::as_str)
    }

    /// Iterate (vocabulary, entity names) pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.by_vocabulary
            .iter()
            .map(|(v, e)| (v.as_str(), e.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.by_vocabulary.is_empty()
    }
}

/// A compiled semantic schema field
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticSchemaField {
    pub name: String,
    /// Absolute field path, e.g. `/Article/body/paragraph`
    pub path: String,
    pub is_multi_value: bool,
    /// Whether the field lives in the item's metadata rather than its content
    pub is_metadata: bool,
    pub semantics: Vec<FieldSemantics>,
    /// Nesting depth: 0 for top-level fields
    pub depth: usize,
    /// Root element of the embedded schema (embedded fields only)
    pub embedded_root_element: Option<String>,
}

impl SemanticSchemaField {
    /// Path relative to the root element, e.g. `body/paragraph`
    ///
    /// Paths published without a leading `/` are already relative.
    pub fn relative_path(&self) -> &str {
        match self.path.strip_prefix('/') {
            Some(absolute) => absolute.split_once('/').map(|(_, rest)| rest).unwrap_or(""),
            None => &self.path,
        }
    }

    /// Relative path segments, outermost embedded field first
    pub fn segments(&self) -> Vec<&str> {
        self.relative_path()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Compiled semantic schema
///
/// Built once per (schema, localization) and read-only afterwards.
#[derive(Debug, Clone)]
pub struct SemanticSchema {
    pub id: String,
    pub root_element: String,
    /// All fields, depth-first in declaration order
    fields: Vec<SemanticSchemaField>,
    entity_names: EntityNames,
    /// Index: field semantics -> position in `fields` (first declaration wins)
    by_semantics: HashMap<FieldSemantics, usize>,
}

impl SemanticSchema {
    /// Compile a published schema definition against a localization
    ///
    /// Schema prefixes are resolved through the localization's vocabularies;
    /// semantics with an unknown prefix are skipped with a warning. When the
    /// localization binds a prefix to the core vocabulary, the schema also
    /// declares its root element as a core entity and every field as a core
    /// property of the entity that owns it (the schema root for top-level
    /// fields, the embedded schema root for embedded sub-fields), so that
    /// fields can be mapped by their plain name.
    pub fn build(definition: &SchemaDefinition, localization: &Localization) -> Self {
        let core_prefix = localization.prefix_for(core::VOCABULARY);

        let mut entity_names = EntityNames::new();
        for semantics in &definition.semantics {
            match localization.vocabulary_for(&semantics.prefix) {
                Some(vocabulary) => entity_names.add(vocabulary, &semantics.entity),
                None => warn!(
                    schema_id = %definition.id,
                    prefix = %semantics.prefix,
                    "schema semantics use a prefix unknown to the localization; skipped"
                ),
            }
        }
        if core_prefix.is_some() {
            entity_names.add(core::VOCABULARY, &definition.root_element);
        }

        let mut fields = Vec::new();
        for field in &definition.fields {
            collect_fields(
                field,
                0,
                Some(&definition.root_element),
                core_prefix,
                &mut fields,
            );
        }

        let mut by_semantics = HashMap::new();
        for (idx, field) in fields.iter().enumerate() {
            for semantics in &field.semantics {
                by_semantics.entry(semantics.clone()).or_insert(idx);
            }
        }

        Self {
            id: definition.id.clone(),
            root_element: definition.root_element.clone(),
            fields,
            entity_names,
            by_semantics,
        }
    }

    /// Find the field declaring the given semantics
    pub fn find_field_by_semantics(&self, semantics: &FieldSemantics) -> Option<&SemanticSchemaField> {
        self.by_semantics.get(semantics).map(|&idx| &self.fields[idx])
    }

    /// Entity names declared by the schema, per vocabulary
    pub fn entity_names(&self) -> &EntityNames {
        &self.entity_names
    }

    /// All fields, depth-first
    pub fn fields(&self) -> &[SemanticSchemaField] {
        &self.fields
    }
}

fn collect_fields(
    definition: &SchemaFieldDefinition,
    depth: usize,
    owner: Option<&str>,
    core_prefix: Option<&str>,
    out: &mut Vec<SemanticSchemaField>,
) {
    let mut semantics = definition.semantics.clone();
    if let (Some(prefix), Some(owner)) = (core_prefix, owner) {
        let implicit = FieldSemantics::new(prefix, owner, &definition.name);
        if !semantics.contains(&implicit) {
            semantics.push(implicit);
        }
    }

    out.push(SemanticSchemaField {
        name: definition.name.clone(),
        path: definition.path.clone(),
        is_multi_value: definition.is_multi_value,
        is_metadata: is_metadata_path(&definition.path),
        semantics,
        depth,
        embedded_root_element: definition.embedded_root_element.clone(),
    });

    for nested in &definition.fields {
        collect_fields(
            nested,
            depth + 1,
            definition.embedded_root_element.as_deref(),
            core_prefix,
            out,
        );
    }
}

fn is_metadata_path(path: &str) -> bool {
    path.strip_prefix('/')
        .and_then(|p| p.split('/').next())
        .is_some_and(|root| root == METADATA_ROOT)
}
