//! Per-operation mapping context

use dxa_content::{Component, EntityNames, FieldSet, Localization, Multimedia, Page, SemanticSchema};

use crate::model::ModelType;
use crate::semantics::SemanticInfo;

/// The content item a model is mapped from
#[derive(Debug, Clone, Copy)]
pub enum SourceEntity<'a> {
    Component(&'a Component),
    Page(&'a Page),
}

impl<'a> SourceEntity<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            SourceEntity::Component(c) => &c.id,
            SourceEntity::Page(p) => &p.id,
        }
    }

    pub fn multimedia(&self) -> Option<&'a Multimedia> {
        match self {
            SourceEntity::Component(c) => c.multimedia.as_ref(),
            SourceEntity::Page(_) => None,
        }
    }

    pub fn content(&self) -> Option<&'a FieldSet> {
        match self {
            SourceEntity::Component(c) => Some(&c.fields),
            SourceEntity::Page(_) => None,
        }
    }

    pub fn metadata(&self) -> &'a FieldSet {
        match self {
            SourceEntity::Component(c) => &c.metadata,
            SourceEntity::Page(p) => &p.metadata,
        }
    }
}

/// Field sets semantic field paths resolve against
#[derive(Debug, Clone, Copy)]
pub(crate) enum FieldScope<'a> {
    /// Top level of a content item
    Item {
        content: Option<&'a FieldSet>,
        metadata: &'a FieldSet,
    },
    /// One value of an embedded field
    Embedded(&'a FieldSet),
}

/// Everything one model mapping needs, immutable and cheap to copy
///
/// Recursing into an embedded field derives a new context with
/// [`MappingContext::embedded`]; linked items are mapped with a fresh
/// top-level context of their own.
#[derive(Debug, Clone, Copy)]
pub struct MappingContext<'a> {
    pub(crate) model_type: ModelType,
    pub(crate) semantic_info: &'a SemanticInfo,
    pub(crate) scope: FieldScope<'a>,
    pub(crate) semantic_schema: &'a SemanticSchema,
    pub(crate) entity_names: &'a EntityNames,
    pub(crate) embed_level: usize,
    pub(crate) source: Option<SourceEntity<'a>>,
    /// Reserved-name properties (`_self`, `_all`) are mapped
    pub(crate) special_properties: bool,
    pub(crate) localization: &'a Localization,
}

impl<'a> MappingContext<'a> {
    /// Context for mapping a Component
    pub fn for_component(
        semantic_info: &'a SemanticInfo,
        component: &'a Component,
        semantic_schema: &'a SemanticSchema,
        localization: &'a Localization,
    ) -> Self {
        Self {
            model_type: semantic_info.model_type,
            semantic_info,
            scope: FieldScope::Item {
                content: Some(&component.fields),
                metadata: &component.metadata,
            },
            semantic_schema,
            entity_names: semantic_schema.entity_names(),
            embed_level: 0,
            source: Some(SourceEntity::Component(component)),
            special_properties: true,
            localization,
        }
    }

    /// Context for mapping a Page's metadata
    pub fn for_page(
        semantic_info: &'a SemanticInfo,
        page: &'a Page,
        semantic_schema: &'a SemanticSchema,
        localization: &'a Localization,
    ) -> Self {
        Self {
            model_type: semantic_info.model_type,
            semantic_info,
            scope: FieldScope::Item {
                content: None,
                metadata: &page.metadata,
            },
            semantic_schema,
            entity_names: semantic_schema.entity_names(),
            embed_level: 0,
            source: Some(SourceEntity::Page(page)),
            special_properties: true,
            localization,
        }
    }

    /// Context for one value of an embedded field, one level deeper
    ///
    /// The semantic schema carries over; the source item does not, so
    /// reserved-name properties stay unmapped.
    pub fn embedded(
        &self,
        semantic_info: &'a SemanticInfo,
        fields: &'a FieldSet,
        entity_names: &'a EntityNames,
    ) -> Self {
        Self {
            model_type: semantic_info.model_type,
            semantic_info,
            scope: FieldScope::Embedded(fields),
            entity_names,
            embed_level: self.embed_level + 1,
            source: None,
            ..*self
        }
    }

    /// Same item mapped onto another model type, without reserved-name
    /// properties
    pub(crate) fn retarget(&self, semantic_info: &'a SemanticInfo) -> Self {
        Self {
            model_type: semantic_info.model_type,
            semantic_info,
            special_properties: false,
            ..*self
        }
    }

    pub fn model_type(&self) -> ModelType {
        self.model_type
    }

    pub fn embed_level(&self) -> usize {
        self.embed_level
    }

    pub fn source(&self) -> Option<SourceEntity<'a>> {
        self.source
    }

    pub fn localization(&self) -> &'a Localization {
        self.localization
    }

    /// Field set holding content or metadata fields at the current level
    pub(crate) fn fields(&self, is_metadata: bool) -> Option<&'a FieldSet> {
        match self.scope {
            FieldScope::Item { content, metadata } => {
                if is_metadata {
                    Some(metadata)
                } else {
                    content
                }
            }
            FieldScope::Embedded(fields) => Some(fields),
        }
    }
}
