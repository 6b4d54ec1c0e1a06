//! View models and model type handles
//!
//! View models are plain Rust structs. The engine populates them through the
//! [`ViewModel`] trait (one call per mapped property) and learns their
//! semantic declarations through [`SemanticModel::semantics`]. A
//! [`ModelType`] is the copyable, type-erased handle the registries key on.

mod types;
mod value;

pub use types::{Link, MediaItem, RichText, Tag};
pub use value::{FromPropertyValue, PropertyValue};

use std::any::{Any, TypeId};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{DxaError, Result};
use crate::semantics::TypeSemantics;

/// In-context editing metadata: property name -> source field XPath
pub type PropertyMetadata = BTreeMap<String, String>;

/// A mappable view model
pub trait ViewModel: Any + fmt::Debug + Send + Sync {
    /// Assign a mapped value to the named property
    ///
    /// Unknown names should be rejected with [`DxaError::UnknownProperty`];
    /// values of the wrong kind with the error of
    /// [`PropertyValue::extract`].
    fn set_property(&mut self, property: &str, value: PropertyValue) -> Result<()>;

    /// Set the identifier of the content item the model was mapped from
    fn set_id(&mut self, _id: &str) {}

    /// Attach property -> XPath metadata of the mapped fields
    fn set_property_metadata(&mut self, _metadata: PropertyMetadata) {}

    /// Media attributes, for models of media items
    fn media_item_mut(&mut self) -> Option<&mut MediaItem> {
        None
    }
}

/// Kind of content a model type represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Entity,
    Media,
    Page,
}

/// A view model type with semantic declarations
pub trait SemanticModel: ViewModel + Default {
    const KIND: ModelKind = ModelKind::Entity;

    /// Name of the type, used as the implicit entity name
    fn type_name() -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Semantic declarations of the type
    fn semantics() -> TypeSemantics;
}

/// Type-erased handle of a [`SemanticModel`] type
///
/// Equality and hashing are by Rust type identity.
#[derive(Clone, Copy)]
pub struct ModelType {
    id: TypeId,
    name: &'static str,
    kind: ModelKind,
    create: fn() -> Box<dyn ViewModel>,
    semantics: fn() -> TypeSemantics,
}

impl ModelType {
    pub fn of<T: SemanticModel>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: T::type_name(),
            kind: T::KIND,
            create: create_default::<T>,
            semantics: T::semantics,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn is_media(&self) -> bool {
        self.kind == ModelKind::Media
    }

    /// Check if this handle denotes `T`
    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Create a default instance
    pub fn create(&self) -> Box<dyn ViewModel> {
        (self.create)()
    }

    /// Semantic declarations of the type
    pub fn semantics(&self) -> TypeSemantics {
        (self.semantics)()
    }
}

fn create_default<T: SemanticModel>() -> Box<dyn ViewModel> {
    Box::new(T::default())
}

impl PartialEq for ModelType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ModelType {}

impl Hash for ModelType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ModelType").field(&self.name).finish()
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Downcast a mapped model to its concrete type
pub fn downcast<T: ViewModel>(model: Box<dyn ViewModel>) -> Result<T> {
    let any: Box<dyn Any> = model;
    any.downcast::<T>()
        .map(|model| *model)
        .map_err(|_| DxaError::PropertyType {
            expected: short_type_name(std::any::type_name::<T>()),
            found: "another view model type",
        })
}

/// Last path segment of a Rust type name, generics stripped
fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
