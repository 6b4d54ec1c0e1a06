//! Model type registry
//!
//! Semantic information of model types plus the view -> model type table.
//! Populated through [`ModelTypeRegistryBuilder`] at startup and immutable
//! afterwards, so lookups during mapping take no locks:
//!
//! ```
//! use dxa_mapping::{MappingConfig, MediaItem, ModelTypeRegistry, MvcData, ModelType};
//!
//! let mut builder = ModelTypeRegistry::builder(MappingConfig::default());
//! builder
//!     .register_view_model(MvcData::new("Core", "Entity", "Image"), ModelType::of::<MediaItem>())
//!     .unwrap();
//! let registry = builder.build();
//! assert!(registry.view_model_type(&MvcData::new("Core", "Entity", "Image")).is_ok());
//! ```
//!
//! Registering a type also registers every model type its properties map
//! into. A registration either completes for all of those types or, on a
//! configuration error, leaves the registry unchanged.

use std::collections::HashMap;

use dxa_vocab::{split_qualified_type_name, topic};
use tracing::{debug, warn};

use crate::config::MappingConfig;
use crate::error::{DxaError, Result};
use crate::model::{ModelType, SemanticModel};
use crate::mvc::MvcData;
use crate::semantics::SemanticInfo;

/// Mutable registration phase of a [`ModelTypeRegistry`]
#[derive(Debug)]
pub struct ModelTypeRegistryBuilder {
    config: MappingConfig,
    semantic_info: HashMap<ModelType, SemanticInfo>,
    mapped_model_types: HashMap<String, Vec<ModelType>>,
    topic_types: HashMap<String, ModelType>,
    view_models: HashMap<MvcData, ModelType>,
}

impl ModelTypeRegistryBuilder {
    pub fn new(config: MappingConfig) -> Self {
        Self {
            config,
            semantic_info: HashMap::new(),
            mapped_model_types: HashMap::new(),
            topic_types: HashMap::new(),
            view_models: HashMap::new(),
        }
    }

    /// Register a model type
    pub fn register<T: SemanticModel>(&mut self) -> Result<()> {
        self.register_model_type(ModelType::of::<T>())
    }

    /// Register a model type and the model types it maps into
    ///
    /// Registering an already registered type is a no-op.
    pub fn register_model_type(&mut self, model_type: ModelType) -> Result<()> {
        let mut pending = Vec::new();
        self.collect_pending(model_type, &mut pending)?;
        let topics = self.pending_topics(&pending)?;

        for (local_name, model_type) in topics {
            self.topic_types.insert(local_name, model_type);
        }
        for info in pending {
            for semantic_type in info.mapped_semantic_types() {
                let types = self
                    .mapped_model_types
                    .entry(semantic_type.clone())
                    .or_default();
                if !types.contains(&info.model_type) {
                    types.push(info.model_type);
                }
            }
            debug!(model_type = info.model_type.name(), "registered model type");
            self.semantic_info.insert(info.model_type, info);
        }
        Ok(())
    }

    fn collect_pending(&self, model_type: ModelType, pending: &mut Vec<SemanticInfo>) -> Result<()> {
        if self.semantic_info.contains_key(&model_type)
            || pending.iter().any(|info| info.model_type == model_type)
        {
            return Ok(());
        }

        let info = SemanticInfo::extract(model_type, &self.config.default_vocabulary)?;
        let nested: Vec<ModelType> = info
            .properties()
            .iter()
            .filter_map(|p| p.target.model_type())
            .collect();
        pending.push(info);

        for nested_type in nested {
            self.collect_pending(nested_type, pending)?;
        }
        Ok(())
    }

    /// Topic table entries contributed by pending registrations
    fn pending_topics(&self, pending: &[SemanticInfo]) -> Result<Vec<(String, ModelType)>> {
        let mut topics: Vec<(String, ModelType)> = Vec::new();
        for info in pending {
            for semantic_type in info.mapped_semantic_types() {
                let Some((vocabulary, local_name)) = split_qualified_type_name(semantic_type) else {
                    continue;
                };
                if vocabulary != topic::VOCABULARY {
                    continue;
                }

                let existing = self.topic_types.get(local_name).copied().or_else(|| {
                    topics
                        .iter()
                        .find(|(name, _)| name == local_name)
                        .map(|(_, t)| *t)
                });
                match existing {
                    Some(existing) if existing == info.model_type => {}
                    Some(existing) if self.config.strict_topic_registration => {
                        return Err(DxaError::configuration(
                            info.model_type.name(),
                            format!(
                                "topic entity '{local_name}' is already mapped by {}",
                                existing.name()
                            ),
                        ));
                    }
                    Some(existing) => warn!(
                        topic = local_name,
                        existing = existing.name(),
                        model_type = info.model_type.name(),
                        "topic entity already mapped; first registration wins"
                    ),
                    None => topics.push((local_name.to_string(), info.model_type)),
                }
            }
        }
        Ok(topics)
    }

    /// Register the model type rendered by a view
    ///
    /// A view registered twice keeps its first model type; the duplicate is
    /// logged and ignored.
    pub fn register_view_model(&mut self, view: MvcData, model_type: ModelType) -> Result<()> {
        if let Some(existing) = self.view_models.get(&view) {
            warn!(
                view = %view,
                existing = existing.name(),
                model_type = model_type.name(),
                "view already registered; ignored"
            );
            return Ok(());
        }
        self.register_model_type(model_type)?;
        debug!(view = %view, model_type = model_type.name(), "registered view model");
        self.view_models.insert(view, model_type);
        Ok(())
    }

    /// Register a view by qualified name (`Area:Controller:View`)
    pub fn register_view<T: SemanticModel>(&mut self, qualified_view_name: &str) -> Result<()> {
        let view = MvcData::parse(qualified_view_name, &self.config);
        self.register_view_model(view, ModelType::of::<T>())
    }

    pub fn build(self) -> ModelTypeRegistry {
        debug!(
            model_types = self.semantic_info.len(),
            views = self.view_models.len(),
            "model type registry built"
        );
        ModelTypeRegistry {
            config: self.config,
            semantic_info: self.semantic_info,
            mapped_model_types: self.mapped_model_types,
            topic_types: self.topic_types,
            view_models: self.view_models,
        }
    }
}

/// Registry of model types and views
#[derive(Debug)]
pub struct ModelTypeRegistry {
    config: MappingConfig,
    semantic_info: HashMap<ModelType, SemanticInfo>,
    /// Qualified semantic type -> model types mapping to it
    mapped_model_types: HashMap<String, Vec<ModelType>>,
    /// Topic entity local name -> model type
    topic_types: HashMap<String, ModelType>,
    view_models: HashMap<MvcData, ModelType>,
}

impl ModelTypeRegistry {
    pub fn builder(config: MappingConfig) -> ModelTypeRegistryBuilder {
        ModelTypeRegistryBuilder::new(config)
    }

    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    /// Semantic information of a registered model type
    pub fn semantic_info(&self, model_type: ModelType) -> Result<&SemanticInfo> {
        self.semantic_info.get(&model_type).ok_or_else(|| {
            DxaError::configuration(model_type.name(), "model type is not registered")
        })
    }

    /// Qualified semantic types a model type maps to, implicit type first
    pub fn semantic_types(&self, model_type: ModelType) -> Option<&[String]> {
        self.semantic_info
            .get(&model_type)
            .map(|info| info.mapped_semantic_types())
    }

    /// Public `prefix:propertyName` names of a model property
    pub fn semantic_property_names(&self, model_type: ModelType, property: &str) -> Option<Vec<String>> {
        self.semantic_info
            .get(&model_type)?
            .semantic_property_names(property)
    }

    /// Model types mapping to a qualified semantic type, in registration order
    pub fn mapped_model_types(&self, qualified_type_name: &str) -> &[ModelType] {
        self.mapped_model_types
            .get(qualified_type_name)
            .map(|types| types.as_slice())
            .unwrap_or_default()
    }

    /// Model type registered for a topic entity name
    pub fn topic_model_type(&self, local_name: &str) -> Option<ModelType> {
        self.topic_types.get(local_name).copied()
    }

    /// Model type rendered by a view
    pub fn view_model_type(&self, view: &MvcData) -> Result<ModelType> {
        self.view_models
            .get(view)
            .copied()
            .ok_or_else(|| DxaError::ViewNotRegistered {
                view: view.to_string(),
            })
    }

    /// Views rendering a model type, ordered by qualified view name
    pub fn views_for_model_type(&self, model_type: ModelType) -> Vec<&MvcData> {
        let mut views: Vec<&MvcData> = self
            .view_models
            .iter()
            .filter(|(_, t)| **t == model_type)
            .map(|(view, _)| view)
            .collect();
        views.sort_by_key(|view| view.to_string());
        views
    }

    /// All registered model types
    pub fn model_types(&self) -> impl Iterator<Item = ModelType> + '_ {
        self.semantic_info.keys().copied()
    }
}
