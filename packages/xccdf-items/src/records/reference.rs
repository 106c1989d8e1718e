//! Bibliographic references and warnings.

use serde::Serialize;

use crate::text::{LocalizedText, TextTraits};
use crate::types::WarningCategory;
use crate::xml::{XmlElement, XmlReader};

/// A reference to external documentation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Reference {
    /// Target of the reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Language from `xml:lang`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Body text (citation).
    pub content: String,

    /// Whether this reference replaces inherited ones.
    #[serde(rename = "override", skip_serializing_if = "std::ops::Not::not")]
    pub overrides: bool,
}

impl Reference {
    /// Parse the `reference` element the reader is positioned on.
    pub fn parse(reader: &XmlReader<'_, '_>) -> Self {
        Self {
            href: reader.attribute("href").map(str::to_string),
            lang: reader.lang().map(str::to_string),
            content: reader.element_string(),
            overrides: reader.bool_attribute("override").unwrap_or(false),
        }
    }

    /// Append a `reference` element to `parent`.
    pub fn to_dom<'p>(&self, parent: &'p mut XmlElement) -> &'p mut XmlElement {
        let node = parent.add_text_child("reference", &self.content);
        if let Some(lang) = &self.lang {
            node.set_attribute("xml:lang", lang);
        }
        if let Some(href) = &self.href {
            node.set_attribute("href", href);
        }
        if self.overrides {
            node.set_attribute("override", "true");
        }
        node
    }
}

/// A warning about applying an item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Warning {
    pub category: WarningCategory,
    pub text: LocalizedText,
}

impl Warning {
    #[must_use]
    pub fn new(category: WarningCategory, text: LocalizedText) -> Self {
        Self { category, text }
    }

    /// Parse the `warning` element the reader is positioned on.
    pub fn parse(reader: &XmlReader<'_, '_>) -> Self {
        Self {
            category: WarningCategory::from_attribute(reader.attribute("category")),
            text: LocalizedText::parse(reader, TextTraits::HTMLSUB),
        }
    }

    /// Append a `warning` element to `parent`.
    pub fn to_dom<'p>(&self, parent: &'p mut XmlElement) -> &'p mut XmlElement {
        let node = self.text.to_dom(parent, "warning");
        node.set_attribute("category", self.category.as_str());
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_parse_reference() {
        let xml = r#"<reference href="https://example.org/cis" xml:lang="en" override="1">CIS 5.2.1</reference>"#;
        let doc = Document::parse(xml).unwrap();
        let reference = Reference::parse(&XmlReader::new(doc.root_element()));

        assert_eq!(reference.href.as_deref(), Some("https://example.org/cis"));
        assert_eq!(reference.lang.as_deref(), Some("en"));
        assert_eq!(reference.content, "CIS 5.2.1");
        assert!(reference.overrides);
    }

    #[test]
    fn test_parse_reference_bad_override() {
        let xml = r#"<reference override="maybe">NIST</reference>"#;
        let doc = Document::parse(xml).unwrap();
        let reference = Reference::parse(&XmlReader::new(doc.root_element()));
        assert!(!reference.overrides);
        assert!(reference.href.is_none());
    }

    #[test]
    fn test_reference_to_dom() {
        let reference = Reference {
            href: Some("urn:ref".to_string()),
            lang: None,
            content: "Ref".to_string(),
            overrides: false,
        };
        let mut parent = XmlElement::new("Rule");
        let node = reference.to_dom(&mut parent);
        assert_eq!(node.attribute("href"), Some("urn:ref"));
        assert_eq!(node.attribute("override"), None);
        assert_eq!(node.text(), "Ref");
    }

    #[test]
    fn test_parse_warning_category() {
        let xml = r#"<warning category="performance">May be <b>slow</b></warning>"#;
        let doc = Document::parse(xml).unwrap();
        let warning = Warning::parse(&XmlReader::new(doc.root_element()));

        assert_eq!(warning.category, WarningCategory::Performance);
        assert_eq!(warning.text.text, "May be <b>slow</b>");
    }

    #[test]
    fn test_parse_warning_default_category() {
        let doc = Document::parse("<warning>Careful</warning>").unwrap();
        let warning = Warning::parse(&XmlReader::new(doc.root_element()));
        assert_eq!(warning.category, WarningCategory::General);
    }
}
