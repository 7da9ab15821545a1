//! Schema location resolution
//!
//! Merges schema locations declared by a document with the built-in default
//! schema configuration handed to the validating parser.

use indexmap::IndexMap;
use url::Url;

use crate::parser::ParserConfig;

/// Built-in baseline schema reference
///
/// The default XML-Schema validation authority. The parser (or the caller's
/// entity resolver) materializes it; documents may override it through a
/// [`NO_NAMESPACE_SCHEMA_LOCATION`] hint.
pub const BUILTIN_SCHEMA_LOCATION: &str = "schemas/config.xsd";

/// Hint key for a schema governing unqualified (no-namespace) elements
pub const NO_NAMESPACE_SCHEMA_LOCATION: &str = "noNamespaceSchemaLocation";

/// Apply an externally declared no-namespace schema location
///
/// Sets the parser's external no-namespace schema location iff the hint map
/// is present and contains [`NO_NAMESPACE_SCHEMA_LOCATION`]. Otherwise the
/// built-in default configuration is left untouched.
pub fn apply_external_schema_location(
    hints: Option<&IndexMap<String, String>>,
    config: &mut ParserConfig,
) {
    let hints = match hints {
        Some(hints) => hints,
        None => return,
    };
    if let Some(location) = hints.get(NO_NAMESPACE_SCHEMA_LOCATION) {
        tracing::debug!(location = %location, "document overrides the built-in schema");
        config.no_namespace_schema_location = Some(location.clone());
    }
}

/// Resolve a possibly relative location against a base URI
///
/// Absolute locations come back unchanged. Bases that do not parse as URLs
/// (and locations that do not join) fall back to the location verbatim.
pub fn resolve_against(base_uri: &str, location: &str) -> String {
    match Url::parse(base_uri) {
        Ok(base) => base
            .join(location)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| location.to_string()),
        Err(_) => location.to_string(),
    }
}
