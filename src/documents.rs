//! XML document handling
//!
//! The document model the validator borrows read-only for one call: the XML
//! source text, the URI identifying it, and any schema-location hints the
//! document declares.

use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::diagnostics::{Position, Range};
use crate::error::{Error, Result};
use crate::locations::{self, NO_NAMESPACE_SCHEMA_LOCATION};

/// An XML document to validate
///
/// Owns the source text (immutable for the duration of validation) and a
/// URI identifying it. The URI becomes the parser's system identifier, used
/// for resolving relative references and for diagnostic locations.
#[derive(Debug, Clone)]
pub struct XmlDocument {
    text: String,
    uri: String,
    schema_location_hints: Option<IndexMap<String, String>>,
}

impl XmlDocument {
    /// Create a document from source text and a URI
    pub fn new(text: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            uri: uri.into(),
            schema_location_hints: None,
        }
    }

    /// Load a document from a file, using the path itself as the URI
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::Resource(format!("Failed to read file '{}': {}", path.display(), e))
        })?;
        Ok(Self::new(text, path.to_string_lossy()))
    }

    /// Document source text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Document URI
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Schema-location hints declared by the document, if any were recorded
    pub fn schema_location_hints(&self) -> Option<&IndexMap<String, String>> {
        self.schema_location_hints.as_ref()
    }

    /// Record a schema-location hint under a well-known key
    ///
    /// The value is applied verbatim; see
    /// [`locations::apply_external_schema_location`].
    pub fn insert_schema_location_hint(
        &mut self,
        key: impl Into<String>,
        location: impl Into<String>,
    ) {
        self.schema_location_hints
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), location.into());
    }

    /// Scan the root element for an `xsi:noNamespaceSchemaLocation` attribute
    ///
    /// Records its value, resolved against the document URI, under
    /// [`NO_NAMESPACE_SCHEMA_LOCATION`]. Documents without a root element,
    /// without the attribute, or with a malformed prolog leave the hint map
    /// untouched; syntax errors are the upstream well-formedness check's
    /// business.
    pub fn scan_schema_location_hints(&mut self) {
        let mut reader = Reader::from_reader(self.text.as_bytes());
        let mut buf = Vec::new();

        let root = loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => break Some(e.to_owned()),
                Ok(Event::Empty(e)) => break Some(e.to_owned()),
                Ok(Event::Eof) => break None,
                Err(_) => break None,
                _ => {}
            }
            buf.clear();
        };
        let root = match root {
            Some(root) => root,
            None => return,
        };

        // Prefix declarations and prefixed attributes of the root element.
        let mut declared: HashMap<String, String> = HashMap::new();
        let mut qualified: Vec<(String, String, String)> = Vec::new();
        for attr in root.attributes().flatten() {
            let key = match std::str::from_utf8(attr.key.as_ref()) {
                Ok(k) => k.to_string(),
                Err(_) => continue,
            };
            let value = match attr.unescape_value() {
                Ok(v) => v.to_string(),
                Err(_) => continue,
            };

            if let Some(prefix) = key.strip_prefix("xmlns:") {
                declared.insert(prefix.to_string(), value);
            } else if let Some((prefix, local)) = key.split_once(':') {
                qualified.push((prefix.to_string(), local.to_string(), value));
            }
        }

        let mut hints = IndexMap::new();
        for (prefix, local, value) in qualified {
            if declared.get(&prefix).map(String::as_str) != Some(crate::XSI_NAMESPACE) {
                continue;
            }
            if local == "noNamespaceSchemaLocation" {
                let resolved = locations::resolve_against(&self.uri, &value);
                hints.insert(NO_NAMESPACE_SCHEMA_LOCATION.to_string(), resolved);
            }
        }

        if !hints.is_empty() {
            self.schema_location_hints = Some(hints);
        }
    }

    /// Range covering an engine-reported one-based line and column
    ///
    /// Clamped to the document: lines past the end collapse to the last
    /// line, columns past the line end collapse to the line end. The range
    /// extends to the end of the line, giving the consumer something to
    /// underline.
    pub fn position_range(&self, line: u32, column: u32) -> Range {
        let lines: Vec<&str> = self.text.lines().collect();
        if lines.is_empty() {
            return Range::zero();
        }

        let line_idx = (line.saturating_sub(1) as usize).min(lines.len() - 1);
        let line_len = lines[line_idx].chars().count() as u32;
        let start = column.saturating_sub(1).min(line_len);

        Range::new(
            Position::new(line_idx as u32, start),
            Position::new(line_idx as u32, line_len),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_document_creation() {
        let doc = XmlDocument::new("<a/>", "file:///tmp/doc.xml");
        assert_eq!(doc.text(), "<a/>");
        assert_eq!(doc.uri(), "file:///tmp/doc.xml");
        assert!(doc.schema_location_hints().is_none());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "<root>test</root>").unwrap();

        let doc = XmlDocument::from_file(file.path()).unwrap();
        assert!(doc.text().contains("<root>test</root>"));
        assert_eq!(doc.uri(), file.path().to_string_lossy());
    }

    #[test]
    fn test_from_file_missing() {
        let result = XmlDocument::from_file("/nonexistent/doc.xml");
        assert!(matches!(result, Err(Error::Resource(_))));
    }

    #[test]
    fn test_scan_no_namespace_hint_resolved_against_uri() {
        let xml = r#"<?xml version="1.0"?>
<config xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
        xsi:noNamespaceSchemaLocation="local.xsd">
</config>"#;
        let mut doc = XmlDocument::new(xml, "file:///etc/app/config.xml");
        doc.scan_schema_location_hints();

        let hints = doc.schema_location_hints().unwrap();
        assert_eq!(
            hints.get(NO_NAMESPACE_SCHEMA_LOCATION).map(String::as_str),
            Some("file:///etc/app/local.xsd")
        );
    }

    #[test]
    fn test_scan_honors_nonstandard_prefix() {
        let xml = r#"<config xmlns:i="http://www.w3.org/2001/XMLSchema-instance"
            i:noNamespaceSchemaLocation="file:///schemas/other.xsd"/>"#;
        let mut doc = XmlDocument::new(xml, "file:///etc/app/config.xml");
        doc.scan_schema_location_hints();

        let hints = doc.schema_location_hints().unwrap();
        assert_eq!(
            hints.get(NO_NAMESPACE_SCHEMA_LOCATION).map(String::as_str),
            Some("file:///schemas/other.xsd")
        );
    }

    #[test]
    fn test_scan_ignores_unbound_prefix() {
        let xml = r#"<config xsi:noNamespaceSchemaLocation="local.xsd"/>"#;
        let mut doc = XmlDocument::new(xml, "file:///etc/app/config.xml");
        doc.scan_schema_location_hints();
        assert!(doc.schema_location_hints().is_none());
    }

    #[test]
    fn test_scan_ignores_other_xsi_attributes() {
        let xml = r#"<config xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
            xsi:schemaLocation="urn:example schemas/example.xsd"/>"#;
        let mut doc = XmlDocument::new(xml, "file:///etc/app/config.xml");
        doc.scan_schema_location_hints();
        assert!(doc.schema_location_hints().is_none());
    }

    #[test]
    fn test_scan_without_hints() {
        let mut doc = XmlDocument::new("<config><a/></config>", "file:///tmp/doc.xml");
        doc.scan_schema_location_hints();
        assert!(doc.schema_location_hints().is_none());
    }

    #[test]
    fn test_scan_empty_document() {
        let mut doc = XmlDocument::new("", "file:///tmp/doc.xml");
        doc.scan_schema_location_hints();
        assert!(doc.schema_location_hints().is_none());
    }

    #[test]
    fn test_insert_hint() {
        let mut doc = XmlDocument::new("<a/>", "file:///tmp/doc.xml");
        doc.insert_schema_location_hint(NO_NAMESPACE_SCHEMA_LOCATION, "file:///schemas/x.xsd");
        let hints = doc.schema_location_hints().unwrap();
        assert_eq!(hints.len(), 1);
    }

    #[test]
    fn test_position_range_within_line() {
        let doc = XmlDocument::new("<a>\n  <bad/>\n</a>", "file:///tmp/doc.xml");
        let range = doc.position_range(2, 3);
        assert_eq!(range.start, Position::new(1, 2));
        assert_eq!(range.end, Position::new(1, 8));
    }

    #[test]
    fn test_position_range_clamps_line_and_column() {
        let doc = XmlDocument::new("<a/>", "file:///tmp/doc.xml");
        let range = doc.position_range(99, 99);
        assert_eq!(range.start, Position::new(0, 4));
        assert_eq!(range.end, Position::new(0, 4));
    }

    #[test]
    fn test_position_range_empty_document() {
        let doc = XmlDocument::new("", "file:///tmp/doc.xml");
        assert_eq!(doc.position_range(1, 1), Range::zero());
    }
}
