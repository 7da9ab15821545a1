//! Validation diagnostics
//!
//! Location-tagged findings produced while validating a document. Each
//! diagnostic carries the rule identifier the schema engine reported, so
//! later passes can match on it without parsing the message text.

use serde::{Deserialize, Serialize};

/// Zero-based position in a text document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based line
    pub line: u32,
    /// Zero-based character offset within the line
    pub character: u32,
}

impl Position {
    /// Create a new position
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Range between two positions, end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    /// Start position
    pub start: Position,
    /// End position
    pub end: Position,
}

impl Range {
    /// Create a new range
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Empty range at the start of the document
    pub fn zero() -> Self {
        Self::new(Position::new(0, 0), Position::new(0, 0))
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::zero()
    }
}

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Constraint violation
    Error,
    /// Suspicious but tolerated content
    Warning,
    /// Informational finding
    Information,
    /// Editor hint
    Hint,
}

/// One validation finding
///
/// Appended to a caller-owned ordered collection; the `code` is the
/// schema-constraint rule identifier exactly as the engine reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Source range the finding applies to
    pub range: Range,
    /// Severity
    pub severity: Severity,
    /// Rule identifier (e.g. "cvc-complex-type.2.4.a")
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Producer tag, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic with an empty range
    pub fn new(severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            range: Range::zero(),
            severity,
            code: code.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an error diagnostic
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    /// Create a warning diagnostic
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    /// Set the source range
    pub fn with_range(mut self, range: Range) -> Self {
        self.range = range;
        self
    }

    /// Set the producer tag
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}
