//! Parse engine that orchestrates item ingestion using the registry.

use super::common;
use super::context::ParseContext;
use super::registry::ElementRegistry;
use crate::error::{Result, XccdfError};
use crate::item::ItemId;
use crate::xml::XmlReader;

/// Engine that builds items from the reader using the registry.
///
/// For each item element the engine creates the item under its parent,
/// runs common attribute ingestion (which registers the id), lets the
/// handler read its own attributes, and then walks the direct children:
/// common elements first, the handler next, and anything left is skipped.
pub struct ParseEngine {
    registry: ElementRegistry,
}

impl ParseEngine {
    /// Create a new engine with the given registry.
    #[must_use]
    pub fn new(registry: ElementRegistry) -> Self {
        Self { registry }
    }

    /// Get a reference to the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    /// Parse the item element the reader is positioned on.
    ///
    /// # Arguments
    /// * `reader` - Reader positioned on the item's start element
    /// * `context` - Current parsing context
    /// * `parent` - Enclosing item, `None` for a document root
    ///
    /// # Returns
    /// Handle of the new item. On return the reader is positioned inside
    /// the item's subtree.
    ///
    /// # Errors
    /// Returns `UnknownElement` if no handler is registered for the tag.
    pub fn parse_item<'a, 'input>(
        &self,
        reader: &mut XmlReader<'a, 'input>,
        context: &mut ParseContext<'_>,
        parent: Option<ItemId>,
    ) -> Result<ItemId> {
        let tag_name = reader.tag_name();
        let Some(handler) = self.registry.get_handler(tag_name) else {
            return Err(XccdfError::UnknownElement {
                tag_name: tag_name.to_string(),
                context: reader.parent_tag_name().map(|p| format!("<{p}>")),
            });
        };

        let id = context.document.insert(handler.kind(), parent);
        if !common::process_attributes(context.document, id, reader) {
            tracing::warn!(element = tag_name, "Item without id, not registered");
        }
        handler.process_attributes(&mut context.document[id], reader);

        // Nested item elements come back through the engine; failures are
        // logged and the nested element skipped.
        let recurse = |child: &mut XmlReader<'a, 'input>,
                       ctx: &mut ParseContext<'_>,
                       parent: ItemId|
         -> Option<ItemId> {
            self.parse_item(child, ctx, Some(parent))
                .map_err(|err| {
                    tracing::warn!(error = %err, "Error parsing nested item, skipping");
                })
                .ok()
        };

        let depth = reader.depth() + 1;
        while reader.to_start_element(depth) {
            if common::process_element(&mut context.document[id], reader) {
                continue;
            }
            if handler.process_element(id, reader, context, &recurse) {
                continue;
            }

            let child = reader.tag_name();
            if self.registry.should_skip(child) {
                tracing::debug!(element = child, parent = tag_name, "Skipping element");
            } else {
                tracing::warn!(element = child, parent = tag_name, "Unconsumed element, skipping");
                context.record_unconsumed(child);
            }
        }

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::item::Item;
    use crate::parse::handler::{ItemHandler, RecurseFn};
    use crate::types::ItemKind;
    use roxmltree::Document as XmlDocument;

    /// Benchmark-like container that nests any `Content` child.
    struct ContainerHandler;

    impl ItemHandler for ContainerHandler {
        fn kind(&self) -> ItemKind {
            ItemKind::Benchmark
        }

        fn process_attributes(&self, item: &mut Item, reader: &XmlReader<'_, '_>) {
            item.version = reader.attribute("rev").map(str::to_string);
        }

        fn process_element<'a, 'input>(
            &self,
            item: ItemId,
            reader: &mut XmlReader<'a, 'input>,
            context: &mut ParseContext<'_>,
            recurse: &RecurseFn<'_, 'a, 'input>,
        ) -> bool {
            if reader.tag_name() == "Content" {
                recurse(reader, context, item);
                return true;
            }
            false
        }
    }

    struct LeafHandler;

    impl ItemHandler for LeafHandler {
        fn kind(&self) -> ItemKind {
            ItemKind::Content
        }

        fn process_element<'a, 'input>(
            &self,
            _item: ItemId,
            _reader: &mut XmlReader<'a, 'input>,
            _context: &mut ParseContext<'_>,
            _recurse: &RecurseFn<'_, 'a, 'input>,
        ) -> bool {
            false
        }
    }

    fn engine() -> ParseEngine {
        let mut registry = ElementRegistry::new();
        registry.register("Container", ContainerHandler);
        registry.register("Content", LeafHandler);
        registry.skip(["metadata"]);
        ParseEngine::new(registry)
    }

    #[test]
    fn test_engine_builds_nested_items() {
        let xml = r#"<Container id="b" rev="3">
            <title>T</title>
            <Content id="c1"><title>One</title></Content>
            <metadata><anything/></metadata>
            <Content id="c2"/>
        </Container>"#;
        let xml_doc = XmlDocument::parse(xml).unwrap();
        let mut reader = XmlReader::new(xml_doc.root_element());
        let mut document = Document::new();
        let mut context = ParseContext::new(&mut document);

        let root = engine().parse_item(&mut reader, &mut context, None).unwrap();
        assert!(context.unconsumed.is_empty());

        assert_eq!(document[root].version.as_deref(), Some("3"));
        assert_eq!(document[root].title[0].text, "T");
        let content = document.content(root).to_vec();
        assert_eq!(content.len(), 2);
        assert_eq!(document[content[0]].title[0].text, "One");
        assert_eq!(document.lookup("c2"), Some(content[1]));
    }

    #[test]
    fn test_engine_records_unconsumed() {
        let xml = r#"<Container id="b"><bogus/><Content id="c"><bogus2/></Content></Container>"#;
        let xml_doc = XmlDocument::parse(xml).unwrap();
        let mut reader = XmlReader::new(xml_doc.root_element());
        let mut document = Document::new();
        let mut context = ParseContext::new(&mut document);

        engine().parse_item(&mut reader, &mut context, None).unwrap();
        assert_eq!(context.unconsumed, vec!["bogus", "bogus2"]);
    }

    #[test]
    fn test_engine_parse_unknown() {
        let xml_doc = XmlDocument::parse("<unknown/>").unwrap();
        let mut reader = XmlReader::new(xml_doc.root_element());
        let mut document = Document::new();
        let mut context = ParseContext::new(&mut document);

        let result = engine().parse_item(&mut reader, &mut context, None);
        assert!(matches!(result, Err(XccdfError::UnknownElement { .. })));
    }
}
