//! Output tree for emitted documents.
//!
//! Serializers append to an owned [`XmlElement`] tree; rendering to text
//! happens once at the end via [`XmlElement::to_xml_string`].

/// Content of an output element.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlContent {
    /// Nested element.
    Element(XmlElement),
    /// Character data, escaped on output.
    Text(String),
    /// Pre-serialized markup, written verbatim.
    Markup(String),
}

/// An element of the output tree.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlContent>,
}

impl XmlElement {
    /// Create an element without attributes or children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the element.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set an attribute, replacing an earlier value of the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    #[must_use]
    pub fn children(&self) -> &[XmlContent] {
        &self.children
    }

    /// Iterate over child elements, skipping text content.
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|c| match c {
            XmlContent::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Append an empty child element and return it for filling.
    pub fn add_child(&mut self, name: impl Into<String>) -> &mut XmlElement {
        self.push_element(XmlElement::new(name))
    }

    /// Append a child element holding `text` and return it.
    pub fn add_text_child(
        &mut self,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut XmlElement {
        let mut child = XmlElement::new(name);
        child.push_text(text);
        self.push_element(child)
    }

    /// Append an already built element and return it.
    pub fn push_element(&mut self, element: XmlElement) -> &mut XmlElement {
        self.children.push(XmlContent::Element(element));
        match self.children.last_mut() {
            Some(XmlContent::Element(e)) => e,
            _ => unreachable!("element was pushed above"),
        }
    }

    /// Append character data. Empty text is ignored.
    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.children.push(XmlContent::Text(text));
        }
    }

    /// Append pre-serialized markup. Empty markup is ignored.
    pub fn push_markup(&mut self, markup: impl Into<String>) {
        let markup = markup.into();
        if !markup.is_empty() {
            self.children.push(XmlContent::Markup(markup));
        }
    }

    /// Concatenated direct text children.
    #[must_use]
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|c| match c {
                XmlContent::Text(t) | XmlContent::Markup(t) => Some(t.as_str()),
                XmlContent::Element(_) => None,
            })
            .collect()
    }

    /// Render as a standalone document with an XML declaration.
    #[must_use]
    pub fn to_xml_string(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self.write(&mut out, 0);
        out
    }

    fn write(&self, out: &mut String, indent: usize) {
        let pad = "  ".repeat(indent);
        out.push_str(&pad);
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            out.push_str(&format!(" {name}=\"{}\"", escape_attribute(value)));
        }

        if self.children.is_empty() {
            out.push_str("/>\n");
            return;
        }
        out.push('>');

        // Mixed content is written inline so whitespace is not injected into text.
        let element_only = self
            .children
            .iter()
            .all(|c| matches!(c, XmlContent::Element(_)));

        if element_only {
            out.push('\n');
            for child in self.child_elements() {
                child.write(out, indent + 1);
            }
            out.push_str(&pad);
        } else {
            for child in &self.children {
                match child {
                    XmlContent::Text(text) => out.push_str(&escape_text(text)),
                    XmlContent::Markup(markup) => out.push_str(markup),
                    XmlContent::Element(e) => {
                        let mut inline = String::new();
                        e.write(&mut inline, 0);
                        out.push_str(inline.trim_end());
                    }
                }
            }
        }

        out.push_str(&format!("</{}>\n", self.name));
    }
}

/// Escape character data.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value for use inside double quotes.
#[must_use]
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            '\t' => out.push_str("&#9;"),
            _ => out.push(c),
        }
    }
    out
}
