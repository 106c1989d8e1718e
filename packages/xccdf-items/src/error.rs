//! Error types for the item layer.
//!
//! Uses the dual-error pattern: `XccdfError` for structural failures that
//! callers must handle, while recoverable document defects (missing ids,
//! unknown status tokens, unparsable dates) are logged and normalized by
//! the ingestion code instead of being returned.

use thiserror::Error;

/// Main error type for the item library.
#[derive(Debug, Error)]
pub enum XccdfError {
    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// The document root is not an item element.
    #[error("No item handler for element <{tag_name}>{}", .context.as_ref().map(|c| format!(" in {c}")).unwrap_or_default())]
    UnknownElement {
        tag_name: String,
        context: Option<String>,
    },

    /// An identifier is already registered to another item.
    #[error("Duplicate item id '{0}' in document")]
    DuplicateId(String),

    /// No item is registered under the identifier.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// The document has no root benchmark to hold an identifier registry.
    #[error("Item '{0}' is not part of a benchmark")]
    NoBenchmark(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

/// Result type alias for item operations.
pub type Result<T> = std::result::Result<T, XccdfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = XccdfError::DuplicateId("xccdf_org.example_rule_one".to_string());
        assert_eq!(
            err.to_string(),
            "Duplicate item id 'xccdf_org.example_rule_one' in document"
        );
    }

    #[test]
    fn test_unknown_element_with_context() {
        let err = XccdfError::UnknownElement {
            tag_name: "foo".to_string(),
            context: Some("<Group>".to_string()),
        };
        assert_eq!(err.to_string(), "No item handler for element <foo> in <Group>");
    }

    #[test]
    fn test_unknown_element_without_context() {
        let err = XccdfError::UnknownElement {
            tag_name: "foo".to_string(),
            context: None,
        };
        assert_eq!(err.to_string(), "No item handler for element <foo>");
    }
}
