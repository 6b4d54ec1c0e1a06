//! CMS content model for DXA view model mapping
//!
//! This crate holds the data the mapping engine consumes: content items
//! (Components, multimedia Components, Pages, Keywords) with their ordered
//! field sets, and the semantic schema metadata that ties CMS fields to
//! vocabulary/entity/property triples.
//!
//! Field values are a tagged union ([`FieldValues`]) so that every consumer
//! dispatches on the field kind by pattern matching.
//!
//! Semantic schemas are published per localization as two JSON documents,
//! `mapping/vocabularies.json` and `mapping/schemas.json`, which
//! [`Localization`] loads. [`SemanticSchema::build`] turns one published
//! schema definition into an indexed, read-only lookup structure.

pub mod error;
pub mod field;
pub mod item;
pub mod keyword;
pub mod localization;
pub mod schema;

pub use error::{ContentError, Result};
pub use field::{Field, FieldSet, FieldType, FieldValues};
pub use item::{Component, Multimedia, Page};
pub use keyword::Keyword;
pub use localization::{Localization, SemanticVocabulary};
pub use schema::{
    EntityNames, FieldSemantics, SchemaDefinition, SchemaFieldDefinition, SchemaSemantics,
    SemanticSchema, SemanticSchemaField,
};
