//! XML utility functions for navigating and extracting data from DOM trees.

use roxmltree::Node;

use super::writer::{escape_attribute, escape_text};
use crate::config::XML_NAMESPACE;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xccdf_items::xml::get_tag_name;
///
/// let xml = r#"<x:Benchmark xmlns:x="http://checklists.nist.gov/xccdf/1.2"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "Benchmark");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Depth of an element below the document root (the root element is 0).
pub fn element_depth(node: Node<'_, '_>) -> usize {
    node.ancestors()
        .skip(1)
        .filter(|ancestor| ancestor.is_element())
        .count()
}

/// Get the `xml:lang` attribute of an element.
pub fn xml_lang<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.attribute((XML_NAMESPACE, "lang"))
}

/// Concatenated text of all descendants, trimmed.
///
/// Markup is dropped; only character data is kept.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xccdf_items::xml::element_string;
///
/// let doc = Document::parse("<title> Disable <b>telnet</b> </title>").unwrap();
/// assert_eq!(element_string(doc.root_element()), "Disable telnet");
/// ```
pub fn element_string(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Serialized content of an element, markup included, trimmed.
///
/// Child elements are written with their local names. A default namespace
/// declaration is added wherever an element's namespace differs from its
/// parent's, so the fragment stays well-formed outside its source document.
/// Prefixed attributes keep their prefix, declared on the element using it.
pub fn inner_markup(node: Node<'_, '_>) -> String {
    let mut out = String::new();
    let namespace = node.tag_name().namespace();
    for child in node.children() {
        write_markup(child, namespace, &mut out);
    }
    out.trim().to_string()
}

fn write_markup(node: Node<'_, '_>, parent_namespace: Option<&str>, out: &mut String) {
    if node.is_text() {
        out.push_str(&escape_text(node.text().unwrap_or_default()));
        return;
    }
    if !node.is_element() {
        return;
    }

    let name = get_tag_name(node);
    let namespace = node.tag_name().namespace();

    out.push('<');
    out.push_str(name);
    if namespace != parent_namespace {
        out.push_str(&format!(
            " xmlns=\"{}\"",
            escape_attribute(namespace.unwrap_or_default())
        ));
    }
    let mut declared: Vec<&str> = Vec::new();
    for attr in node.attributes() {
        let attr_name = match attr.namespace() {
            None => attr.name().to_string(),
            Some(XML_NAMESPACE) => format!("xml:{}", attr.name()),
            Some(uri) => {
                let Some(prefix) = node.lookup_prefix(uri) else {
                    tracing::debug!(
                        element = name,
                        attribute = attr.name(),
                        "No prefix for attribute namespace"
                    );
                    continue;
                };
                if !declared.contains(&prefix) {
                    out.push_str(&format!(" xmlns:{prefix}=\"{}\"", escape_attribute(uri)));
                    declared.push(prefix);
                }
                format!("{prefix}:{}", attr.name())
            }
        };
        out.push_str(&format!(" {attr_name}=\"{}\"", escape_attribute(attr.value())));
    }

    if node.has_children() {
        out.push('>');
        for child in node.children() {
            write_markup(child, namespace, out);
        }
        out.push_str(&format!("</{name}>"));
    } else {
        out.push_str("/>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_get_tag_name_with_namespace() {
        let xml = r#"<ns:root xmlns:ns="http://example.com"><ns:child/></ns:root>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "root");
    }

    #[test]
    fn test_element_depth() {
        let xml = r#"<a><b><c/></b></a>"#;
        let doc = Document::parse(xml).unwrap();
        let c = doc.descendants().find(|n| n.has_tag_name("c")).unwrap();
        assert_eq!(element_depth(doc.root_element()), 0);
        assert_eq!(element_depth(c), 2);
    }

    #[test]
    fn test_xml_lang() {
        let xml = r#"<title xml:lang="en-US">Title</title>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(xml_lang(doc.root_element()), Some("en-US"));
    }

    #[test]
    fn test_inner_markup_keeps_elements() {
        let xml = r#"<description xmlns="urn:x">Use <b xmlns="http://www.w3.org/1999/xhtml">ssh</b> &amp; <sub idref="v1"/> </description>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(
            inner_markup(doc.root_element()),
            r#"Use <b xmlns="http://www.w3.org/1999/xhtml">ssh</b> &amp; <sub idref="v1"/>"#
        );
    }

    #[test]
    fn test_inner_markup_keeps_prefixed_attributes() {
        let xml = r#"<description xmlns:h="http://www.w3.org/1999/xhtml">See <a href="x" h:class="ref" h:title="t">here</a></description>"#;
        let doc = Document::parse(xml).unwrap();
        let markup = inner_markup(doc.root_element());
        assert_eq!(
            markup,
            r#"See <a href="x" xmlns:h="http://www.w3.org/1999/xhtml" h:class="ref" h:title="t">here</a>"#
        );

        let wrapped = format!("<d>{markup}</d>");
        let reparsed = Document::parse(&wrapped).unwrap();
        let a = reparsed.descendants().find(|n| n.has_tag_name("a")).unwrap();
        assert_eq!(a.attribute(("http://www.w3.org/1999/xhtml", "class")), Some("ref"));
    }

    #[test]
    fn test_inner_markup_plain_text() {
        let doc = Document::parse("<t>  a &lt; b  </t>").unwrap();
        assert_eq!(inner_markup(doc.root_element()), "a &lt; b");
    }
}
