//! Semantic declarations of model types
//!
//! What a model type says about itself: the semantic entities it maps to,
//! its mapping defaults and the semantic properties of each of its
//! properties.
//!
//! # Example
//! ```
//! use dxa_mapping::semantics::{PropertyDeclaration, PropertyTarget, SemanticEntity, TypeSemantics};
//! use dxa_vocab::schema_org;
//!
//! let semantics = TypeSemantics::new()
//!     .entity(SemanticEntity::new(schema_org::VOCABULARY, "Article").prefix("s").public())
//!     .property(PropertyDeclaration::new("headline", PropertyTarget::Text).semantic("s:headline"))
//!     .property(PropertyDeclaration::new("body", PropertyTarget::RichText).list());
//! assert_eq!(semantics.properties.len(), 2);
//! ```

use std::fmt;

use dxa_vocab::{reserved, split_prefixed_name};

use crate::model::{ModelType, SemanticModel};

/// A semantic entity a model type maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticEntity {
    pub vocabulary: String,
    pub entity_name: String,
    /// Prefix used by property declarations to refer to this entity
    pub prefix: String,
    /// Public entities can be referenced through their prefix
    pub public: bool,
}

impl SemanticEntity {
    pub fn new(vocabulary: impl Into<String>, entity_name: impl Into<String>) -> Self {
        Self {
            vocabulary: vocabulary.into(),
            entity_name: entity_name.into(),
            prefix: String::new(),
            public: false,
        }
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn public(mut self) -> Self {
        self.public = true;
        self
    }
}

/// Type-wide mapping defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticDefaults {
    /// Prefix of unprefixed and implicit property semantics
    pub prefix: String,
    /// Map every property by its own name, in addition to declared semantics
    pub map_all_properties: bool,
}

impl Default for SemanticDefaults {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            map_all_properties: true,
        }
    }
}

impl SemanticDefaults {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Default::default()
        }
    }

    /// Only map properties with declared semantics
    pub fn explicit_only(mut self) -> Self {
        self.map_all_properties = false;
        self
    }
}

/// Rust-side shape of a model property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyTarget {
    Text,
    RichText,
    Number,
    Integer,
    Boolean,
    Date,
    Tag,
    Link,
    /// Name -> text value map
    Dictionary,
    /// Name -> tag map
    TagDictionary,
    /// A nested view model
    Entity(ModelType),
}

impl PropertyTarget {
    pub fn entity<T: SemanticModel>() -> Self {
        PropertyTarget::Entity(ModelType::of::<T>())
    }

    pub fn is_dictionary(&self) -> bool {
        matches!(self, PropertyTarget::Dictionary | PropertyTarget::TagDictionary)
    }

    pub fn model_type(&self) -> Option<ModelType> {
        match self {
            PropertyTarget::Entity(model_type) => Some(*model_type),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyTarget::Text => f.write_str("Text"),
            PropertyTarget::RichText => f.write_str("RichText"),
            PropertyTarget::Number => f.write_str("Number"),
            PropertyTarget::Integer => f.write_str("Integer"),
            PropertyTarget::Boolean => f.write_str("Boolean"),
            PropertyTarget::Date => f.write_str("Date"),
            PropertyTarget::Tag => f.write_str("Tag"),
            PropertyTarget::Link => f.write_str("Link"),
            PropertyTarget::Dictionary => f.write_str("Dictionary<Text>"),
            PropertyTarget::TagDictionary => f.write_str("Dictionary<Tag>"),
            PropertyTarget::Entity(model_type) => write!(f, "Entity<{model_type}>"),
        }
    }
}

/// A declared semantic property: `prefix:propertyName`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticPropertyDeclaration {
    /// Empty for the type's default prefix
    pub prefix: String,
    pub property_name: String,
}

/// Declaration of one model property
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDeclaration {
    pub name: String,
    pub target: PropertyTarget,
    pub is_list: bool,
    /// Excluded from mapping altogether
    pub ignore: bool,
    pub semantics: Vec<SemanticPropertyDeclaration>,
}

impl PropertyDeclaration {
    pub fn new(name: impl Into<String>, target: PropertyTarget) -> Self {
        Self {
            name: name.into(),
            target,
            is_list: false,
            ignore: false,
            semantics: Vec::new(),
        }
    }

    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    pub fn ignored(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Declare a semantic property, e.g. `s:headline` or `headline`
    pub fn semantic(mut self, name: &str) -> Self {
        let (prefix, property_name) = split_prefixed_name(name);
        self.semantics.push(SemanticPropertyDeclaration {
            prefix: prefix.to_string(),
            property_name: property_name.to_string(),
        });
        self
    }

    /// Map the source item itself
    pub fn self_entity(self) -> Self {
        self.semantic(reserved::SELF)
    }

    /// Map all fields of the source item into a dictionary
    pub fn all_fields(self) -> Self {
        self.semantic(reserved::ALL)
    }
}

/// Semantic declarations of a model type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeSemantics {
    pub entities: Vec<SemanticEntity>,
    pub defaults: SemanticDefaults,
    pub properties: Vec<PropertyDeclaration>,
}

impl TypeSemantics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entity(mut self, entity: SemanticEntity) -> Self {
        self.entities.push(entity);
        self
    }

    pub fn defaults(mut self, defaults: SemanticDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn property(mut self, property: PropertyDeclaration) -> Self {
        self.properties.push(property);
        self
    }

    /// Append the declarations of a base model
    ///
    /// Own entities and properties come first, so a property re-declared
    /// here shadows the base declaration. Own defaults are kept.
    pub fn inherit(mut self, base: TypeSemantics) -> Self {
        self.entities.extend(base.entities);
        self.properties.extend(base.properties);
        self
    }
}
