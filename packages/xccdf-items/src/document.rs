//! Arena owning every item of one document.
//!
//! Items refer to each other through [`ItemId`] handles: the parent link
//! goes up, per-kind child lists go down. Dropping the document drops the
//! whole tree along with the identifier registry, whose entries are plain
//! handles.

use std::ops::{Index, IndexMut};

use crate::error::{Result, XccdfError};
use crate::item::{Item, ItemId, ItemPayload};
use crate::types::ItemKind;

/// An item tree plus its identifier registry.
#[derive(Debug, Clone, Default)]
pub struct Document {
    items: Vec<Item>,
    root: Option<ItemId>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an XCCDF document from a string.
    ///
    /// # Errors
    /// Returns an error if the XML is malformed or its root element is not
    /// an item.
    pub fn from_xml(xml: &str) -> Result<Self> {
        crate::parse::parse_document(xml)
    }

    /// Render the document to an XML string.
    ///
    /// # Errors
    /// Returns `ItemNotFound` for an empty document.
    pub fn to_xml(&self) -> Result<String> {
        crate::serialize::document_to_xml(self)
    }

    /// Create a defaulted item of `kind` under `parent`.
    ///
    /// The new item is appended to the parent's matching child list. The
    /// first parentless item becomes the document root. A parent that is not
    /// already in this document is ignored.
    pub fn insert(&mut self, kind: ItemKind, parent: Option<ItemId>) -> ItemId {
        let parent = parent.filter(|parent| {
            let known = parent.index() < self.items.len();
            if !known {
                tracing::warn!(parent = parent.index(), "Ignoring parent outside the document");
            }
            known
        });
        let id = ItemId::new(self.items.len());
        self.items.push(Item::new(kind, parent));

        match parent {
            Some(parent) => self.link_child(parent, id, kind),
            None => {
                if self.root.is_none() {
                    self.root = Some(id);
                }
            }
        }
        id
    }

    fn link_child(&mut self, parent: ItemId, child: ItemId, kind: ItemKind) {
        let Some(parent_item) = self.items.get_mut(parent.index()) else {
            return;
        };
        let parent_kind = parent_item.kind();

        if let Some(data) = parent_item.as_benchmark_mut() {
            match kind {
                ItemKind::Profile => data.profiles.push(child),
                ItemKind::Value => data.values.push(child),
                ItemKind::Result => data.results.push(child),
                ItemKind::Group | ItemKind::Rule | ItemKind::Content => data.content.push(child),
                ItemKind::Benchmark | ItemKind::Object => {
                    tracing::debug!(child = kind.as_str(), "Item kind is not a benchmark child");
                }
            }
            return;
        }

        if let Some(data) = parent_item.as_group_mut() {
            match kind {
                ItemKind::Value => {
                    data.values.push(child);
                    return;
                }
                ItemKind::Group | ItemKind::Rule | ItemKind::Content => {
                    data.content.push(child);
                    return;
                }
                _ => {}
            }
        }

        tracing::debug!(
            parent = parent_kind.as_str(),
            child = kind.as_str(),
            "Parent does not hold items of this kind"
        );
    }

    /// The root item, if the document has one.
    #[must_use]
    pub fn root(&self) -> Option<ItemId> {
        self.root
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.index())
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.get_mut(id.index())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items with their handles, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (ItemId::new(index), item))
    }

    /// Topmost ancestor of `id` (the item itself when it has no parent).
    #[must_use]
    pub fn root_of(&self, id: ItemId) -> ItemId {
        let mut current = id;
        while let Some(parent) = self.get(current).and_then(Item::parent) {
            current = parent;
        }
        current
    }

    /// The benchmark at the top of `id`'s tree, if the tree has one.
    #[must_use]
    pub fn benchmark_of(&self, id: ItemId) -> Option<ItemId> {
        let root = self.root_of(id);
        self.get(root)
            .filter(|item| item.kind() == ItemKind::Benchmark)
            .map(|_| root)
    }

    /// Register `id` in its benchmark's identifier registry.
    ///
    /// Returns `Ok(false)` when the item has no id or does not belong to a
    /// benchmark; such items simply stay unregistered.
    ///
    /// # Errors
    /// Returns `DuplicateId` if another item already holds the same id.
    pub fn register(&mut self, id: ItemId) -> Result<bool> {
        let Some(name) = self.get(id).and_then(|item| item.id.clone()) else {
            return Ok(false);
        };
        let Some(benchmark) = self.benchmark_of(id) else {
            return Ok(false);
        };
        match self.items[benchmark.index()].as_benchmark_mut() {
            Some(data) => data.registry.register(&name, id).map(|()| true),
            None => Ok(false),
        }
    }

    /// Item registered under `id` in the root benchmark.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<ItemId> {
        self.root
            .and_then(|root| self.get(root))
            .and_then(Item::as_benchmark)
            .and_then(|data| data.registry.lookup(id))
    }

    /// Change an item's id, keeping its benchmark's registry in step.
    ///
    /// # Errors
    /// Returns `ItemNotFound` for a foreign handle and `DuplicateId` if
    /// `new_id` already belongs to another item; the item is unchanged in
    /// both cases.
    pub fn rename_item(&mut self, id: ItemId, new_id: &str) -> Result<()> {
        let old_id = self
            .get(id)
            .ok_or_else(|| XccdfError::ItemNotFound(id.to_string()))?
            .id
            .clone();

        if let Some(benchmark) = self.benchmark_of(id) {
            if let Some(data) = self.items[benchmark.index()].as_benchmark_mut() {
                match data.registry.lookup(new_id) {
                    Some(holder) if holder != id => {
                        return Err(XccdfError::DuplicateId(new_id.to_string()));
                    }
                    _ => {}
                }
                if let Some(old) = &old_id {
                    if data.registry.lookup(old) == Some(id) {
                        data.registry.remove(old);
                    }
                }
                data.registry.register(new_id, id)?;
            }
        }

        self.items[id.index()].id = Some(new_id.to_string());
        Ok(())
    }

    /// Selectable content (groups and rules) directly under `id`.
    #[must_use]
    pub fn content(&self, id: ItemId) -> &[ItemId] {
        match self.get(id).map(Item::payload) {
            Some(ItemPayload::Benchmark(data)) => &data.content,
            Some(ItemPayload::Group(data)) => &data.content,
            _ => &[],
        }
    }

    /// Direct children of `id` in emission order.
    #[must_use]
    pub fn children(&self, id: ItemId) -> Vec<ItemId> {
        self.get(id).map(Item::children).unwrap_or_default()
    }

    /// `id` and everything below it, depth first.
    #[must_use]
    pub fn descendants(&self, id: ItemId) -> Vec<ItemId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if self.get(current).is_none() {
                continue;
            }
            out.push(current);
            let mut children = self.children(current);
            children.reverse();
            stack.extend(children);
        }
        out
    }
}

/// # Panics
/// Indexing with a handle from another document may panic.
impl Index<ItemId> for Document {
    type Output = Item;

    fn index(&self, id: ItemId) -> &Item {
        &self.items[id.index()]
    }
}

impl IndexMut<ItemId> for Document {
    fn index_mut(&mut self, id: ItemId) -> &mut Item {
        &mut self.items[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, ItemId, ItemId, ItemId) {
        let mut doc = Document::new();
        let bench = doc.insert(ItemKind::Benchmark, None);
        let group = doc.insert(ItemKind::Group, Some(bench));
        let rule = doc.insert(ItemKind::Rule, Some(group));
        (doc, bench, group, rule)
    }

    #[test]
    fn test_insert_links_children() {
        let (mut doc, bench, group, rule) = sample();
        let profile = doc.insert(ItemKind::Profile, Some(bench));
        let value = doc.insert(ItemKind::Value, Some(group));

        assert_eq!(doc.root(), Some(bench));
        assert_eq!(doc.content(bench), &[group]);
        assert_eq!(doc.content(group), &[rule]);
        assert_eq!(doc.children(bench), vec![profile, group]);
        assert_eq!(doc.children(group), vec![value, rule]);
        assert_eq!(doc[rule].parent(), Some(group));
        assert_eq!(doc.len(), 5);
    }

    #[test]
    fn test_insert_ignores_unknown_parent() {
        let (mut doc, bench, _, _) = sample();
        let stray = doc.insert(ItemKind::Rule, Some(ItemId::new(99)));
        let own = doc.insert(ItemKind::Rule, Some(ItemId::new(doc.len())));

        assert_eq!(doc[stray].parent(), None);
        assert_eq!(doc[own].parent(), None);
        assert_eq!(doc.root_of(stray), stray);
        assert_eq!(doc.root_of(own), own);
        assert_eq!(doc.root(), Some(bench));
    }

    #[test]
    fn test_benchmark_of_walks_to_root() {
        let (doc, bench, _, rule) = sample();
        assert_eq!(doc.root_of(rule), bench);
        assert_eq!(doc.benchmark_of(rule), Some(bench));

        let mut loose = Document::new();
        let group = loose.insert(ItemKind::Group, None);
        let inner = loose.insert(ItemKind::Rule, Some(group));
        assert_eq!(loose.benchmark_of(inner), None);
    }

    #[test]
    fn test_register_and_lookup() {
        let (mut doc, _, group, rule) = sample();
        doc[rule].id = Some("rule-1".into());
        doc[group].id = Some("group-1".into());

        assert!(doc.register(rule).unwrap());
        assert!(doc.register(group).unwrap());
        assert_eq!(doc.lookup("rule-1"), Some(rule));
        assert_eq!(doc.lookup("group-1"), Some(group));
        assert_eq!(doc.lookup("nope"), None);
    }

    #[test]
    fn test_register_without_id_or_benchmark() {
        let (mut doc, _, _, rule) = sample();
        assert!(!doc.register(rule).unwrap());

        let mut loose = Document::new();
        let group = loose.insert(ItemKind::Group, None);
        loose[group].id = Some("g".into());
        assert!(!loose.register(group).unwrap());
        assert_eq!(loose.lookup("g"), None);
    }

    #[test]
    fn test_register_duplicate_keeps_first() {
        let (mut doc, _, group, rule) = sample();
        doc[rule].id = Some("same".into());
        doc[group].id = Some("same".into());

        doc.register(group).unwrap();
        assert!(matches!(doc.register(rule), Err(XccdfError::DuplicateId(_))));
        assert_eq!(doc.lookup("same"), Some(group));
    }

    #[test]
    fn test_rename_item() {
        let (mut doc, _, group, rule) = sample();
        doc[rule].id = Some("old".into());
        doc[group].id = Some("taken".into());
        doc.register(rule).unwrap();
        doc.register(group).unwrap();

        doc.rename_item(rule, "new").unwrap();
        assert_eq!(doc[rule].id.as_deref(), Some("new"));
        assert_eq!(doc.lookup("new"), Some(rule));
        assert_eq!(doc.lookup("old"), None);

        let err = doc.rename_item(rule, "taken").unwrap_err();
        assert!(matches!(err, XccdfError::DuplicateId(_)));
        assert_eq!(doc[rule].id.as_deref(), Some("new"));
    }

    #[test]
    fn test_rename_unknown_item() {
        let (mut doc, ..) = sample();
        let err = doc.rename_item(ItemId::new(99), "x").unwrap_err();
        assert!(matches!(err, XccdfError::ItemNotFound(_)));
    }

    #[test]
    fn test_descendants_preorder() {
        let (mut doc, bench, group, rule) = sample();
        let second = doc.insert(ItemKind::Rule, Some(bench));
        assert_eq!(doc.descendants(bench), vec![bench, group, rule, second]);
    }
}
