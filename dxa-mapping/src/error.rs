//! Error types for semantic mapping

use std::path::PathBuf;

use dxa_content::{ContentError, FieldType};
use dxa_vocab::errors;
use thiserror::Error;

/// Result type for mapping operations
pub type Result<T> = std::result::Result<T, DxaError>;

/// Errors raised while registering model types or mapping content
#[derive(Debug, Error)]
pub enum DxaError {
    /// Invalid semantic declarations on a model type
    ///
    /// Raised during registration; the registration that triggered it is
    /// aborted.
    #[error("Semantic configuration error in {model_type}: {message}")]
    Configuration { model_type: String, message: String },

    /// No model type registered for a view
    #[error("No view model type registered for view {view}")]
    ViewNotRegistered { view: String },

    /// Field kind cannot be mapped to the property's target type
    #[error("Cannot map {field_type} field '{field}' to {target} (model type {model_type})")]
    UnsupportedMapping {
        field: String,
        field_type: FieldType,
        target: String,
        model_type: String,
    },

    /// Semantic field path is shorter than the current embed level
    #[error("Semantic field path '{path}' is shorter than embed level {embed_level}")]
    EmbedLevel { path: String, embed_level: usize },

    /// Field value could not be converted to the target type
    #[error("Cannot convert value '{value}' of field '{field}' to {target}: {message}")]
    Conversion {
        field: String,
        target: String,
        value: String,
        message: String,
    },

    /// Mapped value does not fit the property it is assigned to
    #[error("Expected a {expected} value, found {found}")]
    PropertyType {
        expected: &'static str,
        found: &'static str,
    },

    /// Model type has no settable property of the given name
    #[error("Model type {model_type} has no property '{property}'")]
    UnknownProperty { model_type: String, property: String },

    /// Assigning a mapped value to a model property failed
    #[error("Failed to set {model_type}.{property}: {source}")]
    Property {
        model_type: String,
        property: String,
        #[source]
        source: Box<DxaError>,
    },

    /// Content metadata could not be resolved
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Mapping configuration file could not be read
    #[error("Failed to read config file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Mapping configuration file could not be parsed
    #[error("Failed to parse config file {path}: {detail}")]
    ConfigParse { path: PathBuf, detail: String },
}

impl DxaError {
    pub fn configuration(model_type: impl Into<String>, message: impl Into<String>) -> Self {
        DxaError::Configuration {
            model_type: model_type.into(),
            message: message.into(),
        }
    }

    pub fn unknown_property(model_type: impl Into<String>, property: impl Into<String>) -> Self {
        DxaError::UnknownProperty {
            model_type: model_type.into(),
            property: property.into(),
        }
    }

    /// Wrap an error raised by a model's property setter
    ///
    /// Errors that already name the property are passed through.
    pub fn property(model_type: &str, property: &str, source: DxaError) -> Self {
        match source {
            e @ (DxaError::UnknownProperty { .. } | DxaError::Property { .. }) => e,
            e => DxaError::Property {
                model_type: model_type.to_string(),
                property: property.to_string(),
                source: Box::new(e),
            },
        }
    }

    /// Error type identifier for error reporting
    pub fn error_type(&self) -> &'static str {
        match self {
            DxaError::Configuration { .. } => errors::SEMANTIC_CONFIGURATION,
            DxaError::ViewNotRegistered { .. } => errors::VIEW_NOT_REGISTERED,
            DxaError::UnsupportedMapping { .. } => errors::UNSUPPORTED_MAPPING,
            DxaError::EmbedLevel { .. } => errors::EMBED_LEVEL,
            DxaError::Conversion { .. } => errors::CONVERSION,
            DxaError::PropertyType { .. } => errors::PROPERTY_TYPE,
            DxaError::UnknownProperty { .. } => errors::UNKNOWN_PROPERTY,
            DxaError::Property { source, .. } => source.error_type(),
            DxaError::Content(e) => e.error_type(),
            DxaError::ConfigIo { .. } | DxaError::ConfigParse { .. } => errors::CONFIG_FILE,
        }
    }

    /// Check if this is a fatal configuration error
    pub fn is_configuration(&self) -> bool {
        errors::is_configuration_error(self.error_type())
    }
}
