//! Model mapping orchestrator
//!
//! [`ModelBuilder`] creates view models from Components and Pages. For each
//! mappable property of the model type it tries the property's candidate
//! semantic properties in order and maps the first one that resolves to a
//! schema field carrying values:
//!
//! 1. candidates with an explicit prefix are kept only when the schema in
//!    scope declares their entity; candidates under the default prefix
//!    (unprefixed or named after the property) are always kept and tried last
//! 2. a candidate resolves to a schema field through the localization prefix
//!    of its vocabulary, and to a concrete field by walking the field path
//!    below the current embed level; fields of enclosing levels are skipped
//! 3. properties no candidate resolves fall back to their reserved-name
//!    strategy (`_self`, `_all`), for top-level items only
//!
//! Mapping is all or nothing: an error discards the partially built model.

use std::sync::Arc;

use dxa_content::{
    Component, Field, FieldSemantics, FieldSet, FieldValues, Localization, Page, SchemaDefinition,
    SemanticSchema, SemanticSchemaField,
};
use tracing::{debug, debug_span};

use crate::error::{DxaError, Result};
use crate::mapping::MappingContext;
use crate::model::{downcast, ModelType, PropertyMetadata, SemanticModel, ViewModel};
use crate::registry::ModelTypeRegistry;
use crate::resolver::{DefaultRichTextProcessor, LinkResolver, RichTextProcessor};
use crate::schema_cache::{SchemaProvider, SemanticSchemaCache};
use crate::semantics::{MappingStrategy, PropertyMapping, SemanticProperty};

/// Root element of the placeholder schema of Pages without metadata
const PAGE_ROOT_ELEMENT: &str = "Page";

/// Creates view models from content items
pub struct ModelBuilder {
    pub(crate) registry: Arc<ModelTypeRegistry>,
    pub(crate) schemas: Arc<dyn SchemaProvider>,
    pub(crate) link_resolver: Arc<dyn LinkResolver>,
    pub(crate) rich_text: Arc<dyn RichTextProcessor>,
}

impl ModelBuilder {
    /// Create a builder with a schema cache and the default rich text
    /// processor
    pub fn new(registry: Arc<ModelTypeRegistry>, link_resolver: Arc<dyn LinkResolver>) -> Self {
        Self {
            registry,
            schemas: Arc::new(SemanticSchemaCache::new()),
            rich_text: Arc::new(DefaultRichTextProcessor::new(Arc::clone(&link_resolver))),
            link_resolver,
        }
    }

    pub fn with_schema_provider(mut self, schemas: Arc<dyn SchemaProvider>) -> Self {
        self.schemas = schemas;
        self
    }

    pub fn with_rich_text_processor(mut self, rich_text: Arc<dyn RichTextProcessor>) -> Self {
        self.rich_text = rich_text;
        self
    }

    pub fn registry(&self) -> &ModelTypeRegistry {
        &self.registry
    }

    /// Create a view model of a Component
    pub fn create_entity_model(
        &self,
        component: &Component,
        model_type: ModelType,
        localization: &Localization,
    ) -> Result<Box<dyn ViewModel>> {
        let span = debug_span!(
            "create_entity_model",
            component_id = %component.id,
            model_type = model_type.name()
        );
        let _guard = span.enter();

        let info = self.registry.semantic_info(model_type)?;
        let schema = self
            .schemas
            .semantic_schema(&component.schema_id, localization)?;
        let ctx = MappingContext::for_component(info, component, &schema, localization);
        self.create_view_model(&ctx)
    }

    /// Create a view model of a Component as its concrete type
    pub fn create_entity<T: SemanticModel>(
        &self,
        component: &Component,
        localization: &Localization,
    ) -> Result<T> {
        downcast(self.create_entity_model(component, ModelType::of::<T>(), localization)?)
    }

    /// Create a view model of a Page from its metadata
    pub fn create_page_model(
        &self,
        page: &Page,
        model_type: ModelType,
        localization: &Localization,
    ) -> Result<Box<dyn ViewModel>> {
        let span = debug_span!(
            "create_page_model",
            page_id = %page.id,
            model_type = model_type.name()
        );
        let _guard = span.enter();

        let info = self.registry.semantic_info(model_type)?;
        let schema = match &page.schema_id {
            Some(schema_id) => self.schemas.semantic_schema(schema_id, localization)?,
            None => Arc::new(SemanticSchema::build(
                &SchemaDefinition::new("", PAGE_ROOT_ELEMENT),
                localization,
            )),
        };
        let ctx = MappingContext::for_page(info, page, &schema, localization);
        self.create_view_model(&ctx)
    }

    /// Create a view model of a Page as its concrete type
    pub fn create_page<T: SemanticModel>(&self, page: &Page, localization: &Localization) -> Result<T> {
        downcast(self.create_page_model(page, ModelType::of::<T>(), localization)?)
    }

    /// Create and populate a view model from a mapping context
    pub fn create_view_model(&self, ctx: &MappingContext<'_>) -> Result<Box<dyn ViewModel>> {
        let mut model = ctx.model_type.create();
        if let Some(source) = ctx.source {
            model.set_id(source.id());
        }

        let mut property_metadata = PropertyMetadata::new();
        for property in ctx.semantic_info.properties() {
            let value = match find_matching_field(property, ctx)? {
                Some((field, schema_field)) => {
                    let xpath = field
                        .xpath
                        .clone()
                        .unwrap_or_else(|| schema_field.path.clone());
                    property_metadata.insert(property.name.clone(), xpath);
                    self.map_field_values(field, schema_field, property, ctx)?
                }
                None if ctx.special_properties => self.map_special_property(property, ctx)?,
                None => None,
            };

            if let Some(value) = value {
                model
                    .set_property(&property.name, value)
                    .map_err(|e| DxaError::property(ctx.model_type.name(), &property.name, e))?;
            }
        }

        if !property_metadata.is_empty() {
            model.set_property_metadata(property_metadata);
        }
        if let Some(multimedia) = ctx.source.and_then(|s| s.multimedia()) {
            if let Some(media) = model.media_item_mut() {
                media.url = multimedia.url.clone();
                media.file_name = multimedia.file_name.clone();
                media.file_size = multimedia.size;
                media.mime_type = multimedia.mime_type.clone();
            }
        }
        Ok(model)
    }
}

/// Candidates of a property applicable in the current context, in order
///
/// Default candidates always apply; the others only when the schema
/// declares their entity.
fn filter_candidates<'a>(
    property: &'a PropertyMapping,
    ctx: &MappingContext<'a>,
) -> Vec<&'a SemanticProperty> {
    let (explicit, defaults): (Vec<&SemanticProperty>, Vec<&SemanticProperty>) = property
        .candidates
        .iter()
        .filter(|c| c.strategy == MappingStrategy::Field)
        .partition(|c| !c.is_default);

    explicit
        .into_iter()
        .filter(|c| {
            ctx.entity_names
                .entities(&c.semantic_type.vocabulary)
                .contains(&c.semantic_type.entity_name)
        })
        .chain(defaults)
        .collect()
}

/// Schema field declaring a candidate's semantics in the current context
///
/// Default candidates resolve against the schema's own entity of their
/// vocabulary unless the schema declares the candidate's entity as well.
fn schema_field_for<'a>(
    candidate: &'a SemanticProperty,
    ctx: &MappingContext<'a>,
) -> Option<&'a SemanticSchemaField> {
    let semantic_type = &candidate.semantic_type;
    let prefix = ctx.localization.prefix_for(&semantic_type.vocabulary)?;
    let entity = if candidate.is_default {
        let declared = ctx.entity_names.entities(&semantic_type.vocabulary);
        if declared.contains(&semantic_type.entity_name) {
            semantic_type.entity_name.as_str()
        } else {
            declared.first()?.as_str()
        }
    } else {
        semantic_type.entity_name.as_str()
    };
    ctx.semantic_schema
        .find_field_by_semantics(&FieldSemantics::new(prefix, entity, &candidate.property_name))
}

/// First candidate field of a property that carries values
///
/// Schema fields above the current embed level belong to an enclosing
/// item and are not candidates.
fn find_matching_field<'a>(
    property: &'a PropertyMapping,
    ctx: &MappingContext<'a>,
) -> Result<Option<(&'a Field, &'a SemanticSchemaField)>> {
    for candidate in filter_candidates(property, ctx) {
        let Some(schema_field) = schema_field_for(candidate, ctx) else {
            continue;
        };
        if schema_field.depth < ctx.embed_level {
            debug!(
                model_type = ctx.model_type.name(),
                property = %property.name,
                path = %schema_field.path,
                embed_level = ctx.embed_level,
                "schema field lies above the embed level; skipped"
            );
            continue;
        }
        let Some(fields) = ctx.fields(schema_field.is_metadata) else {
            continue;
        };
        if let Some(field) = extract_matched_field(schema_field, fields, ctx.embed_level)? {
            if field.has_values() {
                return Ok(Some((field, schema_field)));
            }
        }
    }
    Ok(None)
}

/// Locate the field a schema field path denotes, below the embed level
///
/// Path segments up to the embed level name the embedded fields already
/// descended into. Each further segment but the last names an embedded
/// field whose first value is descended into.
pub(crate) fn extract_matched_field<'f>(
    schema_field: &SemanticSchemaField,
    fields: &'f FieldSet,
    embed_level: usize,
) -> Result<Option<&'f Field>> {
    let segments = schema_field.segments();
    let Some((name, parents)) = segments
        .get(embed_level..)
        .and_then(|remaining| remaining.split_last())
    else {
        return Err(DxaError::EmbedLevel {
            path: schema_field.path.clone(),
            embed_level,
        });
    };

    let mut current = fields;
    for parent in parents {
        match current.get(parent).map(|f| &f.values) {
            Some(FieldValues::Embedded(sets)) => match sets.first() {
                Some(first) => current = first,
                None => return Ok(None),
            },
            _ => return Ok(None),
        }
    }
    Ok(current.get(name))
}
