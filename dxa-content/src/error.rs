//! Content model error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type for content model operations
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors raised while loading or resolving content metadata
#[derive(Debug, Error)]
pub enum ContentError {
    /// A published mapping document could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A published mapping document could not be parsed
    #[error("Failed to parse {document}: {detail}")]
    Parse { document: String, detail: String },

    /// Schema is not published in the localization
    #[error("Semantic schema {schema_id} not found in localization {localization_id}")]
    SchemaNotFound {
        schema_id: String,
        localization_id: String,
    },
}

impl ContentError {
    /// Error type identifier for error reporting
    pub fn error_type(&self) -> &'static str {
        match self {
            ContentError::Io { .. } | ContentError::Parse { .. } => {
                dxa_vocab::errors::CONTENT_PARSE
            }
            ContentError::SchemaNotFound { .. } => dxa_vocab::errors::SCHEMA_NOT_FOUND,
        }
    }
}
