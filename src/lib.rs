//! # xmlcheck
//!
//! Schema validation orchestration and diagnostic filtering for XML
//! documents.
//!
//! This crate drives an external validating XML parser over one document at
//! a time and post-processes the diagnostics the parse produces. The parser
//! itself (event-driven parsing, schema-constraint checking) is an injected
//! collaborator behind the [`parser::ValidatingParser`] trait; what lives
//! here is the orchestration around it:
//!
//! - configuring the parser for a specific schema, merging schema locations
//!   declared by the document with the built-in default
//! - wiring in an entity resolver and a cooperative cancellation signal
//! - collecting constraint violations as location-tagged diagnostics in a
//!   caller-owned collection
//! - removing a fixed set of rule codes known to be false positives for
//!   this schema's extensibility idioms
//!
//! ## Example
//!
//! ```rust,ignore
//! use xmlcheck::{NeverCanceled, XmlDocument, XmlValidator};
//!
//! let validator = XmlValidator::new(engine);
//!
//! let mut document = XmlDocument::new(xml_text, "file:///etc/app/config.xml");
//! document.scan_schema_location_hints();
//!
//! let mut diagnostics = Vec::new();
//! validator.validate(&document, None, &mut diagnostics, None, &NeverCanceled)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod diagnostics;
pub mod error;

// Document and settings plumbing
pub mod documents;
pub mod settings;

// Parser seam and schema configuration
pub mod locations;
pub mod parser;

// Validation pipeline
pub mod filter;
pub mod reporter;
pub mod validator;

// Re-exports for convenience
pub use diagnostics::{Diagnostic, Position, Range, Severity};
pub use documents::XmlDocument;
pub use error::{Error, Result};
pub use parser::{
    CancelChecker, EntityResolver, ErrorReporter, InputSource, NeverCanceled, ParseError,
    ParseHandlers, ParserConfig, ResolvedEntity, SchemaViolation, ValidatingParser,
};
pub use settings::ValidationSettings;
pub use validator::XmlValidator;

/// Version of the xmlcheck library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// XML Schema namespace
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// XML Schema instance namespace
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
