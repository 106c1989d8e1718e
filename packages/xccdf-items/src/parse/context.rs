//! State threaded through item ingestion.

use std::fmt;

use crate::document::Document;

/// Context passed through parsing operations.
///
/// Holds the document under construction explicitly, so registration never
/// relies on ambient state.
pub struct ParseContext<'d> {
    /// Document receiving the parsed items.
    pub document: &'d mut Document,

    /// Tags of elements no handler consumed, in encounter order.
    pub unconsumed: Vec<String>,
}

impl<'d> ParseContext<'d> {
    #[must_use]
    pub fn new(document: &'d mut Document) -> Self {
        Self {
            document,
            unconsumed: Vec::new(),
        }
    }

    /// Note an element that was skipped without being understood.
    pub fn record_unconsumed(&mut self, tag_name: &str) {
        self.unconsumed.push(tag_name.to_string());
    }
}

impl fmt::Debug for ParseContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseContext")
            .field("items", &self.document.len())
            .field("unconsumed", &self.unconsumed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_unconsumed() {
        let mut document = Document::new();
        let mut ctx = ParseContext::new(&mut document);
        ctx.record_unconsumed("foo");
        assert_eq!(ctx.unconsumed, vec!["foo"]);
        assert!(format!("{ctx:?}").contains("foo"));
    }
}
