//! Fields and field sets
//!
//! A [`FieldSet`] is the ordered, name-addressed collection of fields of a
//! content item (its content fields or its metadata fields), or of one value
//! of an embedded field.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::item::Component;
use crate::keyword::Keyword;

/// CMS field kind
///
/// Mirrors the variants of [`FieldValues`] without their payload, for
/// diagnostics and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    RichText,
    Number,
    Date,
    Keyword,
    Embedded,
    ComponentLink,
    MultimediaLink,
    ExternalLink,
}

impl FieldType {
    /// Check if fields of this kind reference other content items
    pub fn is_link(&self) -> bool {
        matches!(self, FieldType::ComponentLink | FieldType::MultimediaLink)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Text => "Text",
            FieldType::RichText => "RichText",
            FieldType::Number => "Number",
            FieldType::Date => "Date",
            FieldType::Keyword => "Keyword",
            FieldType::Embedded => "Embedded",
            FieldType::ComponentLink => "ComponentLink",
            FieldType::MultimediaLink => "MultimediaLink",
            FieldType::ExternalLink => "ExternalLink",
        };
        f.write_str(name)
    }
}

/// The values of a field, tagged by field kind
///
/// Every field is multi-valued at this level; single-valued CMS fields simply
/// carry one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "items")]
pub enum FieldValues {
    /// Plain (single or multi-line) text
    Text(Vec<String>),
    /// XHTML rich text, unprocessed
    RichText(Vec<String>),
    Number(Vec<f64>),
    Date(Vec<NaiveDateTime>),
    Keyword(Vec<Keyword>),
    /// Nested field sets, one per embedded value
    Embedded(Vec<FieldSet>),
    ComponentLink(Vec<Component>),
    MultimediaLink(Vec<Component>),
    /// External URLs
    ExternalLink(Vec<String>),
}

impl FieldValues {
    /// Get the field kind
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValues::Text(_) => FieldType::Text,
            FieldValues::RichText(_) => FieldType::RichText,
            FieldValues::Number(_) => FieldType::Number,
            FieldValues::Date(_) => FieldType::Date,
            FieldValues::Keyword(_) => FieldType::Keyword,
            FieldValues::Embedded(_) => FieldType::Embedded,
            FieldValues::ComponentLink(_) => FieldType::ComponentLink,
            FieldValues::MultimediaLink(_) => FieldType::MultimediaLink,
            FieldValues::ExternalLink(_) => FieldType::ExternalLink,
        }
    }

    /// Number of values
    pub fn len(&self) -> usize {
        match self {
            FieldValues::Text(v) | FieldValues::RichText(v) | FieldValues::ExternalLink(v) => {
                v.len()
            }
            FieldValues::Number(v) => v.len(),
            FieldValues::Date(v) => v.len(),
            FieldValues::Keyword(v) => v.len(),
            FieldValues::Embedded(v) => v.len(),
            FieldValues::ComponentLink(v) | FieldValues::MultimediaLink(v) => v.len(),
        }
    }

    /// Check if the field carries no values
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render each value as a string
    ///
    /// Keywords render as their display text, linked components as their
    /// identifier. Embedded values have no string form and yield nothing.
    pub fn to_strings(&self) -> Vec<String> {
        match self {
            FieldValues::Text(v) | FieldValues::RichText(v) | FieldValues::ExternalLink(v) => {
                v.clone()
            }
            FieldValues::Number(v) => v.iter().map(|n| n.to_string()).collect(),
            FieldValues::Date(v) => v
                .iter()
                .map(|d| d.format("%Y-%m-%dT%H:%M:%S").to_string())
                .collect(),
            FieldValues::Keyword(v) => v.iter().map(|k| k.display_text().to_string()).collect(),
            FieldValues::Embedded(_) => Vec::new(),
            FieldValues::ComponentLink(v) | FieldValues::MultimediaLink(v) => {
                v.iter().map(|c| c.id.clone()).collect()
            }
        }
    }
}

/// A named CMS field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field (XML) name
    pub name: String,
    /// XPath of the field within the item, used for in-context editing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,
    /// Schema of the embedded values (embedded fields only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedded_schema_id: Option<String>,
    /// Field values
    pub values: FieldValues,
}

impl Field {
    /// Create a field with the given values
    pub fn new(name: impl Into<String>, values: FieldValues) -> Self {
        Self {
            name: name.into(),
            xpath: None,
            embedded_schema_id: None,
            values,
        }
    }

    /// Create a plain text field
    pub fn text<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            FieldValues::Text(values.into_iter().map(Into::into).collect()),
        )
    }

    /// Create a rich text (XHTML) field
    pub fn rich_text<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            FieldValues::RichText(values.into_iter().map(Into::into).collect()),
        )
    }

    /// Create an external link field
    pub fn external_links<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            FieldValues::ExternalLink(values.into_iter().map(Into::into).collect()),
        )
    }

    /// Create a number field
    pub fn number(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(name, FieldValues::Number(values.into_iter().collect()))
    }

    /// Create a date field
    pub fn date(name: impl Into<String>, values: impl IntoIterator<Item = NaiveDateTime>) -> Self {
        Self::new(name, FieldValues::Date(values.into_iter().collect()))
    }

    /// Create a keyword field
    pub fn keywords(name: impl Into<String>, values: impl IntoIterator<Item = Keyword>) -> Self {
        Self::new(name, FieldValues::Keyword(values.into_iter().collect()))
    }

    /// Create an embedded field
    pub fn embedded(name: impl Into<String>, values: impl IntoIterator<Item = FieldSet>) -> Self {
        Self::new(name, FieldValues::Embedded(values.into_iter().collect()))
    }

    /// Create a component link field
    pub fn component_links(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Component>,
    ) -> Self {
        Self::new(name, FieldValues::ComponentLink(values.into_iter().collect()))
    }

    /// Create a multimedia link field
    pub fn multimedia_links(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Component>,
    ) -> Self {
        Self::new(
            name,
            FieldValues::MultimediaLink(values.into_iter().collect()),
        )
    }

    /// Set the field XPath
    pub fn with_xpath(mut self, xpath: impl Into<String>) -> Self {
        self.xpath = Some(xpath.into());
        self
    }

    /// Set the schema of the embedded values
    pub fn with_embedded_schema(mut self, schema_id: impl Into<String>) -> Self {
        self.embedded_schema_id = Some(schema_id.into());
        self
    }

    /// Get the field kind
    pub fn field_type(&self) -> FieldType {
        self.values.field_type()
    }

    /// Check if the field carries at least one value
    pub fn has_values(&self) -> bool {
        !self.values.is_empty()
    }

    /// Get the first value rendered as a string
    pub fn first_string(&self) -> Option<String> {
        self.values.to_strings().into_iter().next()
    }
}

/// Ordered collection of fields addressed by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet {
    fields: Vec<Field>,
}

impl FieldSet {
    /// Create an empty field set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, builder style
    pub fn with(mut self, field: Field) -> Self {
        self.insert(field);
        self
    }

    /// Insert a field, replacing an existing field of the same name in place
    pub fn insert(&mut self, field: Field) {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
    }

    /// Get a field by name
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check if a field with the given name exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the field set is empty
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<Field> for FieldSet {
    fn from_iter<T: IntoIterator<Item = Field>>(iter: T) -> Self {
        let mut set = FieldSet::new();
        for field in iter {
            set.insert(field);
        }
        set
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
