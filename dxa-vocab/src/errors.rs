//! Error type compact identifiers
//!
//! These compact strings identify error types so that callers (for example
//! a page assembly layer that swaps a failed entity for an error placeholder)
//! can classify failures without matching on error enums.
//! They follow the pattern: `err:category/ErrorName`

/// Error namespace prefix
pub const ERR_PREFIX: &str = "err:";

// =============================================================================
// Configuration Errors (config)
// =============================================================================

/// Fatal semantic configuration error (prefix collisions, undeclared
/// prefixes, reserved property type mismatches)
pub const SEMANTIC_CONFIGURATION: &str = "err:config/SemanticConfiguration";

/// View identity has no registered view model type
pub const VIEW_NOT_REGISTERED: &str = "err:config/ViewNotRegistered";

/// Configuration file could not be read or parsed
pub const CONFIG_FILE: &str = "err:config/ConfigFile";

// =============================================================================
// Mapping Errors (mapping)
// =============================================================================

/// Unsupported field kind to target type combination
pub const UNSUPPORTED_MAPPING: &str = "err:mapping/UnsupportedMapping";

/// Semantic field path shorter than the current embed level
pub const EMBED_LEVEL: &str = "err:mapping/EmbedLevel";

/// Value conversion failure (numeric/date/boolean parse)
pub const CONVERSION: &str = "err:mapping/Conversion";

/// Mapped value does not fit the view model property
pub const PROPERTY_TYPE: &str = "err:mapping/PropertyType";

/// View model does not accept the property
pub const UNKNOWN_PROPERTY: &str = "err:mapping/UnknownProperty";

// =============================================================================
// Content Errors (content)
// =============================================================================

/// Semantic schema not found in the localization
pub const SCHEMA_NOT_FOUND: &str = "err:content/SchemaNotFound";

/// Published mapping document could not be parsed
pub const CONTENT_PARSE: &str = "err:content/ParseError";

// =============================================================================
// Helper Functions
// =============================================================================

/// Check if a string is an error type identifier
pub fn is_error_type(s: &str) -> bool {
    s.starts_with(ERR_PREFIX)
}

/// Get the category from an error type (e.g., "config" from "err:config/ConfigFile")
pub fn error_category(error_type: &str) -> Option<&str> {
    error_type.strip_prefix(ERR_PREFIX)?.split('/').next()
}

/// Get the error name from an error type (e.g., "ConfigFile" from "err:config/ConfigFile")
pub fn error_name(error_type: &str) -> Option<&str> {
    error_type.strip_prefix(ERR_PREFIX)?.split('/').nth(1)
}

/// Check if an error type denotes a fatal configuration error
pub fn is_configuration_error(error_type: &str) -> bool {
    error_category(error_type) == Some("config")
}
