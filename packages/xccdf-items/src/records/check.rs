//! Checks attached to rules.
//!
//! A `check` points at an external checking engine (`system`) and carries
//! imports, exports and references to check content. A `complex-check`
//! combines nested checks with a boolean operator. Both are represented by
//! [`Check`], distinguished by [`Check::complex`].

use serde::Serialize;

use crate::config::bool_token;
use crate::types::CheckOperator;
use crate::xml::{XmlElement, XmlReader};

/// Value imported from the checking engine after evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckImport {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
}

/// Value exported to the checking engine before evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckExport {
    pub name: String,
    pub value: String,
}

/// Location of check content in an external document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckContentRef {
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A simple or complex check.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Check {
    /// Emitted as `complex-check` when set.
    pub complex: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    pub negate: bool,
    pub operator: CheckOperator,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Check>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<CheckImport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exports: Vec<CheckExport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content_refs: Vec<CheckContentRef>,
    /// Inline `check-content` markup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Check {
    /// Parse the `check` or `complex-check` element the reader is on.
    ///
    /// Consumes the whole subtree; on return the reader is positioned
    /// somewhere inside it, so the caller's next `to_start_element` at its
    /// own child depth lands on the following sibling.
    pub fn parse(reader: &mut XmlReader<'_, '_>) -> Self {
        let mut check = Self {
            complex: reader.tag_name() == "complex-check",
            id: reader.attribute("id").map(str::to_string),
            system: reader.attribute("system").map(str::to_string),
            selector: reader.attribute("selector").map(str::to_string),
            negate: reader.bool_attribute("negate").unwrap_or(false),
            operator: reader
                .parsed_attribute("operator", CheckOperator::parse)
                .unwrap_or_default(),
            ..Self::default()
        };

        let depth = reader.depth() + 1;
        while reader.to_start_element(depth) {
            match reader.tag_name() {
                "check" | "complex-check" if check.complex => {
                    check.children.push(Self::parse(reader));
                }
                "check-import" => check.imports.push(CheckImport {
                    name: reader.attribute("import-name").unwrap_or_default().to_string(),
                    xpath: reader.attribute("import-xpath").map(str::to_string),
                    content: reader.element_string(),
                }),
                "check-export" => check.exports.push(CheckExport {
                    name: reader.attribute("export-name").unwrap_or_default().to_string(),
                    value: reader.attribute("value-id").unwrap_or_default().to_string(),
                }),
                "check-content-ref" => check.content_refs.push(CheckContentRef {
                    href: reader.attribute("href").unwrap_or_default().to_string(),
                    name: reader.attribute("name").map(str::to_string),
                }),
                "check-content" => check.content = Some(reader.inner_markup()),
                other => {
                    tracing::debug!(element = other, "Skipping unsupported check child");
                }
            }
        }

        check
    }

    /// Append this check to `parent`.
    pub fn to_dom<'p>(&self, parent: &'p mut XmlElement) -> &'p mut XmlElement {
        let node = parent.add_child(if self.complex { "complex-check" } else { "check" });

        if let Some(id) = &self.id {
            node.set_attribute("id", id);
        }
        if let Some(system) = &self.system {
            node.set_attribute("system", system);
        }
        if let Some(selector) = &self.selector {
            node.set_attribute("selector", selector);
        }
        if self.negate {
            node.set_attribute("negate", bool_token(true));
        }
        if self.complex {
            node.set_attribute("operator", self.operator.as_str());
        }

        for child in &self.children {
            child.to_dom(node);
        }
        for import in &self.imports {
            let el = node.add_text_child("check-import", &import.content);
            el.set_attribute("import-name", &import.name);
            if let Some(xpath) = &import.xpath {
                el.set_attribute("import-xpath", xpath);
            }
        }
        for export in &self.exports {
            let el = node.add_child("check-export");
            el.set_attribute("value-id", &export.value);
            el.set_attribute("export-name", &export.name);
        }
        for content_ref in &self.content_refs {
            let el = node.add_child("check-content-ref");
            el.set_attribute("href", &content_ref.href);
            if let Some(name) = &content_ref.name {
                el.set_attribute("name", name);
            }
        }
        if let Some(content) = &self.content {
            node.add_child("check-content").push_markup(content);
        }

        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    const SIMPLE: &str = r#"<check system="http://oval.mitre.org/XMLSchema/oval-definitions-5" selector="strict">
        <check-import import-name="stdout"/>
        <check-export value-id="xccdf_org.example_value_port" export-name="oval:org.example:var:1"/>
        <check-content-ref href="oval.xml" name="oval:org.example:def:1"/>
    </check>"#;

    #[test]
    fn test_parse_simple_check() {
        let doc = Document::parse(SIMPLE).unwrap();
        let mut reader = XmlReader::new(doc.root_element());
        let check = Check::parse(&mut reader);

        assert!(!check.complex);
        assert_eq!(check.selector.as_deref(), Some("strict"));
        assert_eq!(check.imports[0].name, "stdout");
        assert_eq!(check.exports[0].value, "xccdf_org.example_value_port");
        assert_eq!(check.content_refs[0].name.as_deref(), Some("oval:org.example:def:1"));
        assert!(check.content.is_none());
    }

    #[test]
    fn test_parse_complex_check_nests() {
        let xml = r#"<Rule>
            <complex-check operator="OR" negate="true">
                <check system="a"><check-content-ref href="a.xml"/></check>
                <complex-check operator="AND">
                    <check system="b"/>
                </complex-check>
            </complex-check>
            <fix/>
        </Rule>"#;
        let doc = Document::parse(xml).unwrap();
        let mut reader = XmlReader::new(doc.root_element());

        assert!(reader.to_start_element(1));
        let check = Check::parse(&mut reader);
        assert!(check.complex);
        assert!(check.negate);
        assert_eq!(check.operator, CheckOperator::Or);
        assert_eq!(check.children.len(), 2);
        assert_eq!(check.children[0].system.as_deref(), Some("a"));
        assert_eq!(check.children[1].children[0].system.as_deref(), Some("b"));

        // The enclosing loop continues with the sibling after the check.
        assert!(reader.to_start_element(1));
        assert_eq!(reader.tag_name(), "fix");
    }

    #[test]
    fn test_check_to_dom() {
        let doc = Document::parse(SIMPLE).unwrap();
        let check = Check::parse(&mut XmlReader::new(doc.root_element()));

        let mut parent = XmlElement::new("Rule");
        let node = check.to_dom(&mut parent);
        assert_eq!(node.name(), "check");
        assert_eq!(node.attribute("operator"), None);
        let names: Vec<_> = node.child_elements().map(XmlElement::name).collect();
        assert_eq!(names, vec!["check-import", "check-export", "check-content-ref"]);
    }
}
