//! Mapping of content fields onto model properties

mod context;
mod fields;
mod special;

pub use context::{MappingContext, SourceEntity};
