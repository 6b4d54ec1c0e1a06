//! Mapping configuration
//!
//! Loaded from a TOML or JSON file (by extension). Every key is optional:
//!
//! ```toml
//! default_prefix = "tri"
//! default_area = "Core"
//! strict_topic_registration = true
//! ```

use std::path::Path;

use dxa_content::Localization;
use dxa_vocab::core;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DxaError, Result};

/// Configuration of the mapping engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Vocabulary of the entity every model type implicitly maps to
    ///
    /// Published schemas carry implicit field-name semantics in the core
    /// vocabulary only, so plain-name property mapping needs this to stay
    /// the core vocabulary.
    pub default_vocabulary: String,
    /// Localization prefix bound to the default vocabulary
    pub default_prefix: String,
    /// Area of views qualified without one
    pub default_area: String,
    /// Controller of views qualified without one
    pub default_controller: String,
    /// Action of views qualified without one
    pub default_action: String,
    /// Reject a second model type claiming the same topic entity name
    ///
    /// Without it the first registration wins and a warning is logged.
    pub strict_topic_registration: bool,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            default_vocabulary: core::VOCABULARY.to_string(),
            default_prefix: core::PREFIX.to_string(),
            default_area: "Core".to_string(),
            default_controller: "Entity".to_string(),
            default_action: "Entity".to_string(),
            strict_topic_registration: false,
        }
    }
}

impl MappingConfig {
    /// Load configuration from a file
    ///
    /// `.json` files are parsed as JSON, anything else as TOML. An empty
    /// file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DxaError::ConfigIo {
            path: path.to_path_buf(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config: Self = if is_json {
            serde_json::from_str(&content).map_err(|e| DxaError::ConfigParse {
                path: path.to_path_buf(),
                detail: e.to_string(),
            })?
        } else {
            toml::from_str(&content).map_err(|e| DxaError::ConfigParse {
                path: path.to_path_buf(),
                detail: e.to_string(),
            })?
        };
        debug!(path = %path.display(), "loaded mapping config");
        Ok(config)
    }

    /// Create a localization with the default vocabulary bound to the
    /// default prefix
    pub fn localization(&self, id: impl Into<String>) -> Localization {
        let mut localization = Localization::with_core_prefix(id, &self.default_prefix);
        if self.default_vocabulary != core::VOCABULARY {
            localization.set_vocabulary(&self.default_prefix, &self.default_vocabulary);
        }
        localization
    }
}
