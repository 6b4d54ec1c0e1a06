//! Semantic vocabulary constants for DXA view model mapping
//!
//! This crate provides a centralized location for the vocabulary URIs,
//! reserved property names and qualified-name helpers shared by the content
//! model and the mapping engine.
//!
//! # Organization
//!
//! - `core` - the DXA core vocabulary every view model type implicitly maps to
//! - `topic` - the vocabulary that marks strongly typed topic models
//! - `schema_org` - schema.org, the most common public vocabulary
//! - `reserved` - reserved semantic property names (`_self`, `_all`)
//! - `errors` - error type compact identifiers for error reporting

pub mod errors;

/// DXA core vocabulary
pub mod core {
    /// Core vocabulary URI
    ///
    /// Every view model type is mapped to `<core>:<TypeName>` and every
    /// published schema declares its root element under this vocabulary.
    pub const VOCABULARY: &str = "http://www.sdl.com/web/schemas/core";

    /// Localization prefix conventionally bound to the core vocabulary
    pub const PREFIX: &str = "tri";
}

/// Strongly typed topic vocabulary
pub mod topic {
    /// Topic vocabulary URI
    ///
    /// Model types mapped to an entity in this vocabulary are registered as
    /// strongly typed topic models under the entity's local name.
    pub const VOCABULARY: &str = "http://www.sdl.com/web/schemas/dita";

    /// Conventional prefix for the topic vocabulary
    pub const PREFIX: &str = "dita";
}

/// schema.org vocabulary
pub mod schema_org {
    /// schema.org vocabulary URI
    pub const VOCABULARY: &str = "http://schema.org/";

    /// Conventional prefix for schema.org
    pub const PREFIX: &str = "s";
}

/// Reserved semantic property names
pub mod reserved {
    /// Maps the whole source entity (not one of its fields) onto the property
    pub const SELF: &str = "_self";

    /// Maps all content and metadata fields onto a dictionary property
    pub const ALL: &str = "_all";

    /// Embedded field flattened by `_all` into individual dictionary entries
    pub const SETTINGS_FIELD: &str = "settings";

    /// Sub-field of a `settings` entry holding the dictionary key
    pub const SETTINGS_NAME: &str = "name";

    /// Sub-field of a `settings` entry holding the dictionary value
    pub const SETTINGS_VALUE: &str = "value";

    /// Check if a semantic property name is reserved
    #[inline]
    pub fn is_reserved(property_name: &str) -> bool {
        matches!(property_name, SELF | ALL)
    }
}

/// Separator between vocabulary and entity name in a qualified type name
pub const QUALIFIED_NAME_SEPARATOR: char = ':';

/// Build a vocabulary-qualified semantic type name
///
/// # Example
/// ```
/// use dxa_vocab::{qualified_type_name, schema_org};
///
/// assert_eq!(
///     qualified_type_name(schema_org::VOCABULARY, "Article"),
///     "http://schema.org/:Article"
/// );
/// ```
pub fn qualified_type_name(vocabulary: &str, entity_name: &str) -> String {
    format!("{vocabulary}{QUALIFIED_NAME_SEPARATOR}{entity_name}")
}

/// Split a qualified type name into (vocabulary, entity name)
///
/// The split happens at the last separator, since vocabulary URIs contain
/// `:` themselves. Returns `None` when there is no separator.
pub fn split_qualified_type_name(qualified_name: &str) -> Option<(&str, &str)> {
    qualified_name.rsplit_once(QUALIFIED_NAME_SEPARATOR)
}

/// Get the entity (local) name of a qualified type name
#[inline]
pub fn entity_local_name(qualified_name: &str) -> &str {
    split_qualified_type_name(qualified_name)
        .map(|(_, entity)| entity)
        .unwrap_or(qualified_name)
}

/// Build a prefixed (compact) name such as `s:Article`
pub fn prefixed_name(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}{QUALIFIED_NAME_SEPARATOR}{name}")
    }
}

/// Split a prefixed name such as `s:headline` into (prefix, name)
///
/// A name without a prefix yields an empty prefix.
pub fn split_prefixed_name(name: &str) -> (&str, &str) {
    name.split_once(QUALIFIED_NAME_SEPARATOR)
        .unwrap_or(("", name))
}
