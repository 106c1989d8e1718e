//! Item serialization.
//!
//! Walks an item subtree and builds an equivalent [`XmlElement`] tree. The
//! common part is written first, then the kind-specific part; dispatch over
//! the kind is an exhaustive match, so adding a kind without a serializer
//! does not compile. Output depends only on the items' state.

mod common;
mod kinds;

pub use common::common_to_dom;

use crate::config::XCCDF_NAMESPACE;
use crate::document::Document;
use crate::error::{Result, XccdfError};
use crate::item::{ItemId, ItemPayload};
use crate::xml::XmlElement;

/// Build the element for `id` and everything below it.
#[must_use]
pub fn item_to_dom(document: &Document, id: ItemId) -> XmlElement {
    let mut node = XmlElement::new("");
    let Some(item) = document.get(id) else {
        return node;
    };
    common_to_dom(item, &mut node);

    match item.payload() {
        ItemPayload::Benchmark(data) => kinds::benchmark_to_dom(document, data, &mut node),
        ItemPayload::Group(data) => kinds::group_to_dom(document, data, &mut node),
        ItemPayload::Rule(data) => kinds::rule_to_dom(data, &mut node),
        ItemPayload::Value(data) => kinds::value_to_dom(data, &mut node),
        ItemPayload::Profile(data) => kinds::profile_to_dom(data, &mut node),
        ItemPayload::Result(data) => kinds::result_to_dom(item, data, &mut node),
        ItemPayload::Content | ItemPayload::Object => {}
    }
    node
}

/// Append the element for `id` to `parent`.
pub fn append_item<'p>(document: &Document, id: ItemId, parent: &'p mut XmlElement) -> &'p mut XmlElement {
    parent.push_element(item_to_dom(document, id))
}

/// Build the root element of `document`, declaring the XCCDF namespace.
///
/// # Errors
/// Returns `ItemNotFound` if the document is empty.
pub fn document_to_dom(document: &Document) -> Result<XmlElement> {
    let root = document
        .root()
        .ok_or_else(|| XccdfError::ItemNotFound("document root".to_string()))?;
    let mut node = item_to_dom(document, root);
    node.set_attribute("xmlns", XCCDF_NAMESPACE);
    Ok(node)
}

/// Render `document` to an XML string.
///
/// # Errors
/// Returns `ItemNotFound` if the document is empty.
pub fn document_to_xml(document: &Document) -> Result<String> {
    Ok(document_to_dom(document)?.to_xml_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_document;
    use crate::text::LocalizedText;
    use crate::types::ItemKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_title_round_trip() {
        let mut doc = Document::new();
        let bench = doc.insert(ItemKind::Benchmark, None);
        let rule = doc.insert(ItemKind::Rule, Some(bench));
        doc[bench].id = Some("b".into());
        doc[rule].id = Some("r".into());
        doc[rule].title.push(LocalizedText::plain("Disable telnet", Some("en")));
        doc[rule].title.push(LocalizedText::plain("Telnet abschalten", Some("de")));

        let xml = document_to_xml(&doc).unwrap();
        let reparsed = parse_document(&xml).unwrap();
        let rule_again = reparsed.lookup("r").unwrap();

        assert_eq!(reparsed[rule_again].title, doc[rule].title);
    }

    #[test]
    fn test_flags_round_trip() {
        let xml = r#"<Benchmark id="b" resolved="1"><Value id="v" hidden="true" selected="false" prohibitChanges="true" multiple="true" abstract="true" interactive="true"/></Benchmark>"#;
        let doc = parse_document(xml).unwrap();
        let reparsed = parse_document(&document_to_xml(&doc).unwrap()).unwrap();

        for id in ["b", "v"] {
            let before = doc[doc.lookup(id).unwrap()].flags;
            let after = reparsed[reparsed.lookup(id).unwrap()].flags;
            assert_eq!(after, before);
        }
        let value = reparsed[reparsed.lookup("v").unwrap()].flags;
        assert!(value.multiple);
        assert!(value.interactive);
    }

    #[test]
    fn test_fractional_version_time_round_trip() {
        let xml = r#"<Benchmark id="b"><version time="2024-01-01T10:00:00.750Z">1</version></Benchmark>"#;
        let doc = parse_document(xml).unwrap();
        let written = document_to_xml(&doc).unwrap();
        let reparsed = parse_document(&written).unwrap();

        let bench = doc.root().unwrap();
        assert!(doc[bench].version_time.is_some());
        assert!(written.contains("2024-01-01T10:00:00.750Z"));
        assert_eq!(reparsed[reparsed.root().unwrap()].version_time, doc[bench].version_time);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let xml = r#"<Benchmark id="b"><Group id="g"><Rule id="r" weight="2"><title>T</title></Rule></Group></Benchmark>"#;
        let doc = parse_document(xml).unwrap();
        assert_eq!(document_to_xml(&doc).unwrap(), document_to_xml(&doc).unwrap());
    }

    #[test]
    fn test_document_root_declares_namespace() {
        let doc = parse_document(r#"<Benchmark id="b"/>"#).unwrap();
        let node = document_to_dom(&doc).unwrap();
        assert_eq!(node.name(), "Benchmark");
        assert_eq!(node.attribute("xmlns"), Some(XCCDF_NAMESPACE));
    }

    #[test]
    fn test_empty_document() {
        assert!(matches!(
            document_to_xml(&Document::new()),
            Err(XccdfError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_every_kind_has_element_name() {
        for kind in ItemKind::ALL {
            let mut doc = Document::new();
            let id = doc.insert(kind, None);
            assert_eq!(item_to_dom(&doc, id).name(), kind.element_name());
        }
    }

    #[test]
    fn test_append_item() {
        let doc = parse_document(r#"<Benchmark id="b"><Rule id="r"/></Benchmark>"#).unwrap();
        let rule = doc.lookup("r").unwrap();
        let mut parent = XmlElement::new("Group");
        let node = append_item(&doc, rule, &mut parent);
        assert_eq!(node.name(), "Rule");
        assert_eq!(parent.child_elements().count(), 1);
    }
}
