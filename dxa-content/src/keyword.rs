//! Taxonomy keywords

use serde::{Deserialize, Serialize};

use crate::field::FieldSet;

/// A taxonomy keyword referenced by a keyword field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub key: String,
    /// Identifier of the taxonomy (category) the keyword belongs to
    #[serde(default)]
    pub taxonomy_id: String,
    /// Path of the keyword within its taxonomy
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub metadata: FieldSet,
}

impl Keyword {
    /// Create a keyword with an identifier and title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the keyword description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the keyword key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Set the owning taxonomy
    pub fn with_taxonomy(mut self, taxonomy_id: impl Into<String>) -> Self {
        self.taxonomy_id = taxonomy_id.into();
        self
    }

    /// Text to display: the description, falling back to the title
    pub fn display_text(&self) -> &str {
        if self.description.is_empty() {
            &self.title
        } else {
            &self.description
        }
    }

    /// The key, falling back to the identifier
    pub fn key_or_id(&self) -> &str {
        if self.key.is_empty() {
            &self.id
        } else {
            &self.key
        }
    }

    /// The key, falling back to the title
    pub fn key_or_title(&self) -> &str {
        if self.key.is_empty() {
            &self.title
        } else {
            &self.key
        }
    }
}
