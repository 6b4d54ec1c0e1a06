//! Semantic declarations and their compiled form

mod declaration;
mod info;

pub use declaration::{
    PropertyDeclaration, PropertyTarget, SemanticDefaults, SemanticEntity,
    SemanticPropertyDeclaration, TypeSemantics,
};
pub use info::{MappingStrategy, PropertyMapping, SemanticInfo, SemanticProperty, SemanticType};
