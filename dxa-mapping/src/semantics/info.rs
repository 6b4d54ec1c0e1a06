//! Compiled semantic information of a model type
//!
//! [`SemanticInfo::extract`] turns a type's [`TypeSemantics`] into the
//! structures mapping runs on:
//!
//! - the vocabulary-qualified semantic types the model maps to (always
//!   including the implicit `defaultVocabulary:TypeName`)
//! - prefix -> vocabulary mappings of public entities
//! - prefix -> semantic type, `""` denoting the implicit entity
//! - per property, the ordered candidate semantic properties

use std::collections::HashMap;

use dxa_vocab::{prefixed_name, qualified_type_name, reserved};
use tracing::{debug, warn};

use super::declaration::{PropertyDeclaration, PropertyTarget, TypeSemantics};
use crate::error::{DxaError, Result};
use crate::model::{ModelKind, ModelType};

/// A semantic entity: vocabulary plus entity name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticType {
    pub entity_name: String,
    pub vocabulary: String,
}

impl SemanticType {
    pub fn new(vocabulary: impl Into<String>, entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            vocabulary: vocabulary.into(),
        }
    }

    /// `vocabulary:EntityName`
    pub fn qualified_name(&self) -> String {
        qualified_type_name(&self.vocabulary, &self.entity_name)
    }
}

/// How a candidate semantic property is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingStrategy {
    /// Resolve a schema field carrying the semantics
    Field,
    /// Map the source item itself (`_self`)
    SelfEntity,
    /// Collect all fields of the source item (`_all`)
    AllFields,
}

/// A candidate semantic property of a model property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticProperty {
    /// Empty when the candidate uses the implicit entity
    pub prefix: String,
    pub property_name: String,
    pub semantic_type: SemanticType,
    pub strategy: MappingStrategy,
    /// Declared without a prefix or synthesized from the property name
    pub is_default: bool,
}

impl SemanticProperty {
    /// `prefix:propertyName`, or just the name for the implicit entity
    pub fn prefixed_name(&self) -> String {
        prefixed_name(&self.prefix, &self.property_name)
    }
}

/// A mappable model property with its candidates in resolution order
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyMapping {
    pub name: String,
    pub target: PropertyTarget,
    pub is_list: bool,
    pub candidates: Vec<SemanticProperty>,
}

impl PropertyMapping {
    /// The reserved-name strategy of the property, if it declares one
    pub fn special_strategy(&self) -> Option<MappingStrategy> {
        self.candidates
            .iter()
            .map(|c| c.strategy)
            .find(|s| *s != MappingStrategy::Field)
    }
}

/// Semantic information of one model type
#[derive(Debug, Clone)]
pub struct SemanticInfo {
    pub model_type: ModelType,
    /// Prefix -> vocabulary, public entities only
    prefix_mappings: HashMap<String, String>,
    /// `prefix:EntityName` of public entities
    public_semantic_types: Vec<String>,
    /// Qualified semantic types, implicit type first
    mapped_semantic_types: Vec<String>,
    properties: Vec<PropertyMapping>,
    property_index: HashMap<String, usize>,
    /// Prefix -> semantic type; `""` is the implicit entity
    prefix_to_semantic_type: HashMap<String, SemanticType>,
}

impl SemanticInfo {
    /// Compile the semantic declarations of a model type
    ///
    /// `default_vocabulary` is the vocabulary of the implicit entity named
    /// after the type itself.
    pub fn extract(model_type: ModelType, default_vocabulary: &str) -> Result<Self> {
        let declared = model_type.semantics();
        let type_name = model_type.name();

        let mut info = SemanticInfo {
            model_type,
            prefix_mappings: HashMap::new(),
            public_semantic_types: Vec::new(),
            mapped_semantic_types: vec![qualified_type_name(default_vocabulary, type_name)],
            properties: Vec::new(),
            property_index: HashMap::new(),
            prefix_to_semantic_type: HashMap::new(),
        };

        info.collect_entities(&declared)?;
        info.prefix_to_semantic_type
            .entry(String::new())
            .or_insert_with(|| SemanticType::new(default_vocabulary, type_name));

        for property in &declared.properties {
            if property.ignore {
                continue;
            }
            if info.property_index.contains_key(&property.name) {
                warn!(
                    model_type = type_name,
                    property = %property.name,
                    "property declared more than once; first declaration wins"
                );
                continue;
            }
            let candidates = info.property_candidates(property, &declared)?;
            if candidates.is_empty() {
                continue;
            }
            info.property_index
                .insert(property.name.clone(), info.properties.len());
            info.properties.push(PropertyMapping {
                name: property.name.clone(),
                target: property.target,
                is_list: property.is_list,
                candidates,
            });
        }

        debug!(
            model_type = type_name,
            semantic_types = info.mapped_semantic_types.len(),
            properties = info.properties.len(),
            "extracted semantic info"
        );
        Ok(info)
    }

    fn collect_entities(&mut self, declared: &TypeSemantics) -> Result<()> {
        let type_name = self.model_type.name();
        for entity in &declared.entities {
            let qualified = qualified_type_name(&entity.vocabulary, &entity.entity_name);
            if !self.mapped_semantic_types.contains(&qualified) {
                self.mapped_semantic_types.push(qualified);
            }

            if entity.public && !entity.prefix.is_empty() {
                if let Some(existing) = self.prefix_mappings.get(&entity.prefix) {
                    if *existing != entity.vocabulary {
                        return Err(DxaError::configuration(
                            type_name,
                            format!(
                                "prefix '{}' is bound to both {} and {}",
                                entity.prefix, existing, entity.vocabulary
                            ),
                        ));
                    }
                }
                self.prefix_mappings
                    .insert(entity.prefix.clone(), entity.vocabulary.clone());
                let public_name = prefixed_name(&entity.prefix, &entity.entity_name);
                if !self.public_semantic_types.contains(&public_name) {
                    self.public_semantic_types.push(public_name);
                }
            }

            if self.prefix_to_semantic_type.contains_key(&entity.prefix) {
                warn!(
                    model_type = type_name,
                    prefix = %entity.prefix,
                    entity = %entity.entity_name,
                    "prefix already maps to a semantic entity; first declaration wins"
                );
            } else {
                self.prefix_to_semantic_type.insert(
                    entity.prefix.clone(),
                    SemanticType::new(&entity.vocabulary, &entity.entity_name),
                );
            }
        }
        Ok(())
    }

    fn property_candidates(
        &self,
        property: &PropertyDeclaration,
        declared: &TypeSemantics,
    ) -> Result<Vec<SemanticProperty>> {
        let type_name = self.model_type.name();
        let default_prefix = declared.defaults.prefix.as_str();
        let mut implicit = declared.defaults.map_all_properties;
        let mut candidates = Vec::new();

        for semantic in &property.semantics {
            let strategy = self.reserved_strategy(property, &semantic.property_name)?;

            let is_default = semantic.prefix.is_empty();
            let prefix = if is_default {
                implicit = false;
                default_prefix
            } else if self.prefix_mappings.contains_key(&semantic.prefix) {
                semantic.prefix.as_str()
            } else {
                debug!(
                    model_type = type_name,
                    property = %property.name,
                    prefix = %semantic.prefix,
                    "semantic property uses a prefix without a public entity; skipped"
                );
                continue;
            };

            candidates.push(SemanticProperty {
                prefix: prefix.to_string(),
                property_name: semantic.property_name.clone(),
                semantic_type: self.semantic_type_for_declared_prefix(prefix, &property.name)?,
                strategy,
                is_default,
            });
        }

        if implicit {
            let mut property_name = camel_case(&property.name);
            if property.is_list && property_name.len() > 1 && property_name.ends_with('s') {
                property_name.pop();
            }
            candidates.push(SemanticProperty {
                prefix: default_prefix.to_string(),
                semantic_type: self.semantic_type_for_declared_prefix(default_prefix, &property.name)?,
                property_name,
                strategy: MappingStrategy::Field,
                is_default: true,
            });
        }

        // Candidates under the default prefix resolve last
        let (mut ordered, defaults): (Vec<_>, Vec<_>) =
            candidates.into_iter().partition(|c| !c.is_default);
        ordered.extend(defaults);
        Ok(ordered)
    }

    fn reserved_strategy(
        &self,
        property: &PropertyDeclaration,
        property_name: &str,
    ) -> Result<MappingStrategy> {
        let type_name = self.model_type.name();
        match property_name {
            reserved::SELF => {
                let valid = match property.target {
                    PropertyTarget::Text | PropertyTarget::Link => true,
                    PropertyTarget::Entity(target) if target == self.model_type => {
                        return Err(DxaError::configuration(
                            type_name,
                            format!(
                                "property '{}' maps the item itself onto its own model type",
                                property.name
                            ),
                        ));
                    }
                    PropertyTarget::Entity(target) => target.kind() != ModelKind::Page,
                    _ => false,
                };
                if !valid {
                    return Err(DxaError::configuration(
                        type_name,
                        format!(
                            "property '{}' uses {} but has type {}; expected a media, link or text type",
                            property.name,
                            reserved::SELF,
                            property.target
                        ),
                    ));
                }
                Ok(MappingStrategy::SelfEntity)
            }
            reserved::ALL => {
                if !property.target.is_dictionary() {
                    return Err(DxaError::configuration(
                        type_name,
                        format!(
                            "property '{}' uses {} but has type {}; expected a dictionary",
                            property.name,
                            reserved::ALL,
                            property.target
                        ),
                    ));
                }
                Ok(MappingStrategy::AllFields)
            }
            _ => Ok(MappingStrategy::Field),
        }
    }

    fn semantic_type_for_declared_prefix(&self, prefix: &str, property: &str) -> Result<SemanticType> {
        self.prefix_to_semantic_type
            .get(prefix)
            .cloned()
            .ok_or_else(|| {
                DxaError::configuration(
                    self.model_type.name(),
                    format!("property '{property}' uses prefix '{prefix}' which declares no semantic entity"),
                )
            })
    }

    /// Qualified semantic types, implicit type first
    pub fn mapped_semantic_types(&self) -> &[String] {
        &self.mapped_semantic_types
    }

    /// `prefix:EntityName` of public entities
    pub fn public_semantic_types(&self) -> &[String] {
        &self.public_semantic_types
    }

    /// Prefix -> vocabulary of public entities
    pub fn prefix_mappings(&self) -> &HashMap<String, String> {
        &self.prefix_mappings
    }

    /// The semantic entity a prefix refers to
    pub fn semantic_type_for_prefix(&self, prefix: &str) -> Option<&SemanticType> {
        self.prefix_to_semantic_type.get(prefix)
    }

    /// Mappable properties in declaration order
    pub fn properties(&self) -> &[PropertyMapping] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&PropertyMapping> {
        self.property_index.get(name).map(|&idx| &self.properties[idx])
    }

    /// Public `prefix:propertyName` names of a property's candidates
    ///
    /// Candidates on the implicit entity are not public and are left out.
    pub fn semantic_property_names(&self, property: &str) -> Option<Vec<String>> {
        let mapping = self.property(property)?;
        Some(
            mapping
                .candidates
                .iter()
                .filter(|c| self.prefix_mappings.contains_key(&c.prefix))
                .map(SemanticProperty::prefixed_name)
                .collect(),
        )
    }
}

/// Lower-camel-case form of a property name
///
/// Handles both `snake_case` and `PascalCase` names: `article_headlines`
/// and `ArticleHeadlines` both become `articleHeadlines`.
pub(crate) fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for part in name.split('_').filter(|p| !p.is_empty()) {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            if out.is_empty() {
                out.extend(first.to_lowercase());
            } else {
                out.extend(first.to_uppercase());
            }
            out.push_str(chars.as_str());
        }
    }
    out
}
