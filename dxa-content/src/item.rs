//! Content items: Components, multimedia and Pages

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::field::FieldSet;

/// Binary attributes of a multimedia Component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Multimedia {
    /// Published URL of the binary
    pub url: String,
    pub file_name: String,
    /// Size in bytes
    pub size: u64,
    pub mime_type: String,
}

/// A CMS Component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Identifier of the Component's schema
    pub schema_id: String,
    #[serde(default)]
    pub fields: FieldSet,
    #[serde(default)]
    pub metadata: FieldSet,
    /// Present for multimedia Components only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multimedia: Option<Multimedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_date: Option<NaiveDateTime>,
}

impl Component {
    /// Create a Component with no fields
    pub fn new(id: impl Into<String>, schema_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            schema_id: schema_id.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_fields(mut self, fields: FieldSet) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_metadata(mut self, metadata: FieldSet) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_multimedia(mut self, multimedia: Multimedia) -> Self {
        self.multimedia = Some(multimedia);
        self
    }

    pub fn with_revision_date(mut self, revision_date: NaiveDateTime) -> Self {
        self.revision_date = Some(revision_date);
        self
    }

    /// Check if this is a multimedia Component
    pub fn is_multimedia(&self) -> bool {
        self.multimedia.is_some()
    }
}

/// A CMS Page
///
/// Only the Page's own identity and metadata matter to view model mapping;
/// its component presentations are assembled by the page layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Metadata schema identifier, if the Page has metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_id: Option<String>,
    #[serde(default)]
    pub metadata: FieldSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_date: Option<NaiveDateTime>,
}

impl Page {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the metadata schema and metadata fields
    pub fn with_metadata(mut self, schema_id: impl Into<String>, metadata: FieldSet) -> Self {
        self.schema_id = Some(schema_id.into());
        self.metadata = metadata;
        self
    }
}
