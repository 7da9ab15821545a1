//! Diagnostic collection
//!
//! Adapts violations reported by the parser into located [`Diagnostic`]s
//! appended to the caller-owned collection.

use crate::diagnostics::Diagnostic;
use crate::documents::XmlDocument;
use crate::parser::{ErrorReporter, SchemaViolation};

/// Producer tag attached to every diagnostic this crate emits
pub const DIAGNOSTIC_SOURCE: &str = "xsd";

/// Reporter that appends one [`Diagnostic`] per violation
///
/// Bound to one document and one diagnostics collection for the duration of
/// a single parse. It only ever appends; entries already present from other
/// producers are never touched.
pub struct DiagnosticCollector<'a> {
    document: &'a XmlDocument,
    diagnostics: &'a mut Vec<Diagnostic>,
}

impl<'a> DiagnosticCollector<'a> {
    /// Bind a collector to a document and its diagnostics collection
    pub fn new(document: &'a XmlDocument, diagnostics: &'a mut Vec<Diagnostic>) -> Self {
        Self {
            document,
            diagnostics,
        }
    }

    /// Number of diagnostics in the collection, all producers included
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl ErrorReporter for DiagnosticCollector<'_> {
    fn report(&mut self, violation: SchemaViolation) {
        let range = self
            .document
            .position_range(violation.line, violation.column);
        self.diagnostics.push(
            Diagnostic::new(violation.severity, violation.code, violation.message)
                .with_range(range)
                .with_source(DIAGNOSTIC_SOURCE),
        );
    }
}
