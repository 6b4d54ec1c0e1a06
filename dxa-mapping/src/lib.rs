//! Semantic schema mapping engine
//!
//! Maps CMS content items (Components, Pages) onto strongly typed view
//! models. Model types declare the semantic entities and properties they
//! represent; published schemas declare which fields carry which semantics.
//! Mapping matches the two:
//!
//! - [`semantics`]: declarations of model types and their compiled form
//! - [`ModelTypeRegistry`]: semantic information of registered model types,
//!   the semantic type and topic reverse indexes, and the view table
//! - [`ModelBuilder`]: creates view models from content items
//!
//! ```
//! use std::sync::Arc;
//! use dxa_content::{Component, Localization, Multimedia};
//! use dxa_mapping::{LinkResolver, MappingConfig, MediaItem, ModelBuilder, ModelTypeRegistry};
//!
//! struct NoLinks;
//!
//! impl LinkResolver for NoLinks {
//!     fn resolve_link(&self, _item_id: &str, _localization: &Localization) -> Option<String> {
//!         None
//!     }
//! }
//!
//! let mut registry = ModelTypeRegistry::builder(MappingConfig::default());
//! registry.register::<MediaItem>().unwrap();
//! let builder = ModelBuilder::new(Arc::new(registry.build()), Arc::new(NoLinks));
//!
//! let localization = Localization::new("1").with_schema(
//!     dxa_content::SchemaDefinition::new("8", "Image"),
//! );
//! let component = Component::new("tcm:1-5", "8").with_multimedia(Multimedia {
//!     url: "/media/logo.png".to_string(),
//!     file_name: "logo.png".to_string(),
//!     size: 1024,
//!     mime_type: "image/png".to_string(),
//! });
//! let media: MediaItem = builder.create_entity(&component, &localization).unwrap();
//! assert_eq!(media.url, "/media/logo.png");
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod mapping;
pub mod model;
pub mod mvc;
pub mod registry;
pub mod resolver;
pub mod schema_cache;
pub mod semantics;

pub use builder::ModelBuilder;
pub use config::MappingConfig;
pub use error::{DxaError, Result};
pub use mapping::{MappingContext, SourceEntity};
pub use model::{
    downcast, FromPropertyValue, Link, MediaItem, ModelKind, ModelType, PropertyMetadata,
    PropertyValue, RichText, SemanticModel, Tag, ViewModel,
};
pub use mvc::MvcData;
pub use registry::{ModelTypeRegistry, ModelTypeRegistryBuilder};
pub use resolver::{DefaultRichTextProcessor, LinkResolver, RichTextProcessor};
pub use schema_cache::{SchemaProvider, SemanticSchemaCache};
