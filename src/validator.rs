//! Validation orchestration
//!
//! Configures the validating parser for one document, runs the parse with
//! the caller's collaborators wired in, and post-processes the diagnostics
//! appended during the call.

use tracing::debug;

use crate::diagnostics::Diagnostic;
use crate::documents::XmlDocument;
use crate::error::{Error, Result};
use crate::filter;
use crate::locations::{self, BUILTIN_SCHEMA_LOCATION};
use crate::parser::{
    CancelChecker, EntityResolver, InputSource, ParseError, ParseHandlers, ParserConfig,
    ValidatingParser,
};
use crate::reporter::DiagnosticCollector;
use crate::settings::ValidationSettings;

/// Drives an external validating parser over one document at a time
///
/// Structural well-formedness is assumed to have been checked upstream:
/// fatal syntax and parser-configuration failures are absorbed here rather
/// than reported, so this validator only contributes schema-specific
/// diagnostics and never duplicates the upstream check's findings.
pub struct XmlValidator {
    parser: Box<dyn ValidatingParser + Send + Sync>,
}

impl XmlValidator {
    /// Create a validator around a parser implementation
    pub fn new(parser: Box<dyn ValidatingParser + Send + Sync>) -> Self {
        Self { parser }
    }

    /// Validate one document, appending findings to `diagnostics`
    ///
    /// The collection may already hold entries from other producers; this
    /// call appends one entry per constraint violation the parser reports,
    /// then removes the appended entries whose codes belong to the
    /// suppression set (see [`crate::filter`]). Entries present before the
    /// call are never inspected, removed, or reordered.
    ///
    /// Fails only on I/O while feeding the parser; the collection is then
    /// left in whatever partial state existed at the failure point and the
    /// validation must be treated as indeterminate.
    pub fn validate(
        &self,
        document: &XmlDocument,
        entity_resolver: Option<&dyn EntityResolver>,
        diagnostics: &mut Vec<Diagnostic>,
        settings: Option<&ValidationSettings>,
        cancel_checker: &dyn CancelChecker,
    ) -> Result<()> {
        let schema_checking = ValidationSettings::schema_enabled(settings);
        let mut config = ParserConfig::new().with_schema_checking(schema_checking);
        if schema_checking {
            config = config.with_schema_source(BUILTIN_SCHEMA_LOCATION);
            locations::apply_external_schema_location(
                document.schema_location_hints(),
                &mut config,
            );
        }

        let input = InputSource::new(document.text().as_bytes().to_vec(), document.uri());
        let initial = diagnostics.len();

        let outcome = {
            let mut collector = DiagnosticCollector::new(document, diagnostics);
            let mut handlers = ParseHandlers {
                reporter: &mut collector,
                entity_resolver,
                cancel_checker,
            };
            self.parser.parse(&input, &config, &mut handlers)
        };

        match outcome {
            Ok(()) => {
                filter::filter_new_diagnostics(diagnostics, initial);
                Ok(())
            }
            Err(ParseError::Canceled) => {
                // Partial results stand; the filter still applies to them.
                debug!(uri = %document.uri(), "validation canceled by the caller");
                filter::filter_new_diagnostics(diagnostics, initial);
                Ok(())
            }
            Err(ParseError::Io(e)) => Err(Error::Io(e)),
            Err(e @ (ParseError::Configuration(_) | ParseError::FatalSyntax { .. })) => {
                // Well-formedness and setup errors are reported upstream.
                debug!(uri = %document.uri(), error = %e, "parse aborted");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::NeverCanceled;

    struct NoopParser;

    impl ValidatingParser for NoopParser {
        fn parse(
            &self,
            _input: &InputSource,
            _config: &ParserConfig,
            _handlers: &mut ParseHandlers<'_>,
        ) -> std::result::Result<(), ParseError> {
            Ok(())
        }
    }

    #[test]
    fn test_clean_parse_leaves_existing_entries() {
        let validator = XmlValidator::new(Box::new(NoopParser));
        let document = XmlDocument::new("<a/>", "file:///tmp/doc.xml");
        let mut diagnostics = vec![Diagnostic::error("other", "pre-existing")];

        validator
            .validate(&document, None, &mut diagnostics, None, &NeverCanceled)
            .unwrap();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "other");
    }
}
