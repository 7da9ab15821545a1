//! Validating parser abstraction
//!
//! The event-driven, schema-checking XML parser is an external collaborator
//! supplied by the embedding system. This module defines the seams the
//! validator wires together for one parse: the feature/property
//! configuration, the input source, the reporter that constraint violations
//! flow through, entity resolution, and cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

use crate::diagnostics::Severity;

/// Feature and property configuration handed to the parser
///
/// The knobs a SAX-style validating parser exposes as features and
/// properties, expressed as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Namespace processing
    pub namespace_aware: bool,
    /// Report namespace prefix declarations
    pub namespace_prefixes: bool,
    /// Keep producing events after a fatal structural error
    pub continue_after_fatal_error: bool,
    /// Check content against the configured schema
    pub schema_checking: bool,
    /// Baseline schema authority
    pub schema_source: Option<String>,
    /// Per-document schema override for unqualified elements
    pub no_namespace_schema_location: Option<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            namespace_aware: true,
            namespace_prefixes: true,
            continue_after_fatal_error: false,
            schema_checking: true,
            schema_source: None,
            no_namespace_schema_location: None,
        }
    }
}

impl ParserConfig {
    /// Create a configuration with the default feature set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the baseline schema authority
    pub fn with_schema_source(mut self, location: impl Into<String>) -> Self {
        self.schema_source = Some(location.into());
        self
    }

    /// Enable or disable schema checking
    pub fn with_schema_checking(mut self, on: bool) -> Self {
        self.schema_checking = on;
        self
    }

    /// Effective schema authority for unqualified elements
    ///
    /// The per-document override wins over the baseline source.
    pub fn effective_schema_location(&self) -> Option<&str> {
        self.no_namespace_schema_location
            .as_deref()
            .or(self.schema_source.as_deref())
    }
}

/// Input presented to the parser
///
/// UTF-8 encoded document bytes plus the system identifier used for
/// resolving relative references and for diagnostic locations.
#[derive(Debug, Clone)]
pub struct InputSource {
    /// UTF-8 document bytes
    pub data: Vec<u8>,
    /// System identifier (the document URI)
    pub system_id: String,
}

impl InputSource {
    /// Create an input source
    pub fn new(data: Vec<u8>, system_id: impl Into<String>) -> Self {
        Self {
            data,
            system_id: system_id.into(),
        }
    }
}

/// One schema-constraint violation reported by the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// Rule identifier from the schema specification (e.g. "cvc-elt.1")
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Severity the engine assigned
    pub severity: Severity,
    /// One-based source line
    pub line: u32,
    /// One-based source column
    pub column: u32,
}

impl SchemaViolation {
    /// Create an error-severity violation at the document start
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: Severity::Error,
            line: 1,
            column: 1,
        }
    }

    /// Set the source location
    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    /// Set the severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

/// Sink for constraint violations detected during a parse
///
/// Installed into the parser; invoked for every recoverable violation.
/// Violations do not abort the parse.
pub trait ErrorReporter {
    /// Record one violation
    fn report(&mut self, violation: SchemaViolation);
}

/// Resolved content for an external entity reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntity {
    /// Resolved system identifier
    pub system_id: String,
    /// Entity content, if the resolver materialized it
    pub content: Option<String>,
}

/// Policy for resolving external entity references during parsing
pub trait EntityResolver: Send + Sync {
    /// Resolve an entity, or `None` to fall back to the parser default
    fn resolve(&self, public_id: Option<&str>, system_id: &str) -> Option<ResolvedEntity>;
}

/// Cooperative cancellation signal
///
/// The parser polls this between content events at its own discretion.
/// Cancellation is advisory and point-in-time, not guaranteed to stop
/// mid-token.
pub trait CancelChecker: Send + Sync {
    /// Whether the caller requested cancellation
    fn is_canceled(&self) -> bool;
}

/// A checker that never cancels
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCanceled;

impl CancelChecker for NeverCanceled {
    fn is_canceled(&self) -> bool {
        false
    }
}

impl CancelChecker for AtomicBool {
    fn is_canceled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// Collaborators wired into one parse
pub struct ParseHandlers<'a> {
    /// Violation sink
    pub reporter: &'a mut dyn ErrorReporter,
    /// Caller entity-resolution policy, if any
    pub entity_resolver: Option<&'a dyn EntityResolver>,
    /// Cancellation signal
    pub cancel_checker: &'a dyn CancelChecker,
}

/// Failure modes of one parse
#[derive(Error, Debug)]
pub enum ParseError {
    /// I/O failure while reading the input source
    #[error("I/O error while reading input: {0}")]
    Io(#[from] std::io::Error),

    /// The parser rejected its configuration
    #[error("parser configuration error: {0}")]
    Configuration(String),

    /// Fatal structural syntax error; event production stopped
    #[error("fatal syntax error at {line}:{column}: {message}")]
    FatalSyntax {
        /// One-based source line
        line: u32,
        /// One-based source column
        column: u32,
        /// Parser message
        message: String,
    },

    /// The cancel checker fired between events
    #[error("parse canceled")]
    Canceled,
}

/// An event-driven, schema-validating XML parser
///
/// Implementations are expected to: report recoverable schema-constraint
/// violations through the handlers' reporter without aborting; stop on the
/// first fatal structural error when `continue_after_fatal_error` is off;
/// poll the cancel checker between content events and return
/// [`ParseError::Canceled`] once it fires; and route external entity
/// references through the entity resolver when one is supplied.
pub trait ValidatingParser {
    /// Parse one input under the given configuration
    fn parse(
        &self,
        input: &InputSource,
        config: &ParserConfig,
        handlers: &mut ParseHandlers<'_>,
    ) -> Result<(), ParseError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ParserConfig::new();
        assert!(config.namespace_aware);
        assert!(config.namespace_prefixes);
        assert!(!config.continue_after_fatal_error);
        assert!(config.schema_checking);
        assert!(config.schema_source.is_none());
        assert!(config.no_namespace_schema_location.is_none());
    }

    #[test]
    fn test_config_builders() {
        let config = ParserConfig::new()
            .with_schema_source("schemas/config.xsd")
            .with_schema_checking(false);
        assert_eq!(config.schema_source.as_deref(), Some("schemas/config.xsd"));
        assert!(!config.schema_checking);
    }

    #[test]
    fn test_effective_schema_location_prefers_override() {
        let mut config = ParserConfig::new().with_schema_source("schemas/config.xsd");
        assert_eq!(
            config.effective_schema_location(),
            Some("schemas/config.xsd")
        );

        config.no_namespace_schema_location = Some("local.xsd".to_string());
        assert_eq!(config.effective_schema_location(), Some("local.xsd"));
    }

    #[test]
    fn test_violation_builders() {
        let violation = SchemaViolation::new("src-resolve", "cannot resolve")
            .at(12, 7)
            .with_severity(Severity::Warning);
        assert_eq!(violation.line, 12);
        assert_eq!(violation.column, 7);
        assert_eq!(violation.severity, Severity::Warning);
    }

    #[test]
    fn test_never_canceled() {
        assert!(!NeverCanceled.is_canceled());
    }

    #[test]
    fn test_atomic_bool_checker() {
        let flag = AtomicBool::new(false);
        assert!(!flag.is_canceled());
        flag.store(true, Ordering::Relaxed);
        assert!(flag.is_canceled());
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::FatalSyntax {
            line: 3,
            column: 9,
            message: "unexpected end of stream".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("3:9"));
        assert!(msg.contains("unexpected end of stream"));
    }
}
