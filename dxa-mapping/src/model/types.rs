//! Value types produced by field mapping

use std::fmt;

use dxa_vocab::schema_org;
use serde::{Deserialize, Serialize};

use super::{ModelKind, PropertyMetadata, PropertyValue, SemanticModel, ViewModel};
use crate::error::{DxaError, Result};
use crate::semantics::{SemanticEntity, TypeSemantics};

/// A keyword rendered as a tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub display_text: String,
    /// Keyword key, or its identifier when it has no key
    pub key: String,
    /// Identifier of the keyword's category
    pub tag_category: Option<String>,
}

/// A hyperlink to a content item or external resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Identifier of the linked item, if internal
    pub id: Option<String>,
    /// Resolved URL; `None` when the item is not published
    pub url: Option<String>,
    pub link_text: Option<String>,
}

impl Link {
    pub fn external(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }
}

/// Processed rich text: a sequence of markup fragments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    fragments: Vec<String>,
}

impl RichText {
    pub fn new(fragments: Vec<String>) -> Self {
        Self { fragments }
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.iter().all(String::is_empty)
    }
}

impl From<String> for RichText {
    fn from(markup: String) -> Self {
        Self::new(vec![markup])
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            f.write_str(fragment)?;
        }
        Ok(())
    }
}

/// A multimedia item
///
/// Media attributes are copied from the multimedia Component; other models
/// of media items embed a `MediaItem` and expose it through
/// [`ViewModel::media_item_mut`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: Option<String>,
    pub url: String,
    pub file_name: String,
    /// Size in bytes
    pub file_size: u64,
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "PropertyMetadata::is_empty")]
    pub property_metadata: PropertyMetadata,
}

impl ViewModel for MediaItem {
    fn set_property(&mut self, property: &str, _value: PropertyValue) -> Result<()> {
        Err(DxaError::unknown_property("MediaItem", property))
    }

    fn set_id(&mut self, id: &str) {
        self.id = Some(id.to_string());
    }

    fn set_property_metadata(&mut self, metadata: PropertyMetadata) {
        self.property_metadata = metadata;
    }

    fn media_item_mut(&mut self) -> Option<&mut MediaItem> {
        Some(self)
    }
}

impl SemanticModel for MediaItem {
    const KIND: ModelKind = ModelKind::Media;

    fn semantics() -> TypeSemantics {
        TypeSemantics::new().entity(
            SemanticEntity::new(schema_org::VOCABULARY, "MediaObject")
                .prefix(schema_org::PREFIX)
                .public(),
        )
    }
}
