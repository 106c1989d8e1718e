//! Positioned, depth-driven reader over a parsed document.
//!
//! Ingestion never walks the DOM directly. It sees one element at a time
//! and moves forward with [`XmlReader::to_start_element`], which is what
//! lets item parsers nest: an inner parser consumes its own subtree and the
//! outer loop resumes exactly where the inner one stopped.

use roxmltree::Node;

use super::utils::{element_depth, element_string, get_tag_name, inner_markup, xml_lang};
use crate::config::parse_bool;

/// Forward-only cursor over the elements of a subtree in document order.
pub struct XmlReader<'a, 'input> {
    elements: Vec<(Node<'a, 'input>, usize)>,
    position: usize,
}

impl<'a, 'input> XmlReader<'a, 'input> {
    /// Create a reader positioned on `root`, which must be an element.
    #[must_use]
    pub fn new(root: Node<'a, 'input>) -> Self {
        let elements = root
            .descendants()
            .filter(|n| n.is_element())
            .map(|n| (n, element_depth(n)))
            .collect();
        Self {
            elements,
            position: 0,
        }
    }

    /// The element the reader is positioned on.
    #[must_use]
    pub fn node(&self) -> Node<'a, 'input> {
        self.elements[self.position].0
    }

    /// Depth of the current element below the document root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.elements[self.position].1
    }

    /// Local name of the current element.
    #[must_use]
    pub fn tag_name(&self) -> &'a str {
        get_tag_name(self.node())
    }

    /// Local name of the current element's parent, if it is an element.
    #[must_use]
    pub fn parent_tag_name(&self) -> Option<&'a str> {
        self.node().parent_element().map(get_tag_name)
    }

    /// Value of an unqualified attribute on the current element.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.node().attribute(name)
    }

    /// Boolean attribute of the current element.
    ///
    /// A token outside the boolean vocabulary is logged and treated as
    /// absent, so the caller's default stays in place.
    #[must_use]
    pub fn bool_attribute(&self, name: &str) -> Option<bool> {
        self.parsed_attribute(name, parse_bool)
    }

    /// Attribute of the current element mapped through `parse`.
    ///
    /// Values `parse` rejects are logged and treated as absent.
    pub fn parsed_attribute<T>(&self, name: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
        let token = self.attribute(name)?;
        let value = parse(token);
        if value.is_none() {
            tracing::warn!(
                element = self.tag_name(),
                attribute = name,
                value = token,
                "Unrecognized attribute value, ignoring"
            );
        }
        value
    }

    /// `xml:lang` of the current element.
    #[must_use]
    pub fn lang(&self) -> Option<&'a str> {
        xml_lang(self.node())
    }

    /// Text content of the current element, trimmed.
    #[must_use]
    pub fn element_string(&self) -> String {
        element_string(self.node())
    }

    /// Markup content of the current element, trimmed.
    #[must_use]
    pub fn inner_markup(&self) -> String {
        inner_markup(self.node())
    }

    /// Advance to the next start element at exactly `depth`.
    ///
    /// Deeper elements are skipped. Returns `false` without moving when the
    /// next element is shallower than `depth` (the enclosing element has
    /// ended) or the subtree is exhausted.
    pub fn to_start_element(&mut self, depth: usize) -> bool {
        while let Some(&(_, next_depth)) = self.elements.get(self.position + 1) {
            if next_depth < depth {
                return false;
            }
            self.position += 1;
            if next_depth == depth {
                return true;
            }
        }
        false
    }
}
