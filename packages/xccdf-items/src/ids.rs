//! Identifier registry of a benchmark document.

use std::collections::HashMap;

use crate::error::{Result, XccdfError};
use crate::item::ItemId;

/// Maps item identifiers to the items carrying them.
///
/// Owned by the root benchmark's payload; entries are plain handles into
/// the owning [`Document`](crate::document::Document) and never keep items
/// alive on their own.
#[derive(Debug, Clone, Default)]
pub struct IdRegistry {
    ids: HashMap<String, ItemId>,
}

impl IdRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `item` under `id`.
    ///
    /// Registering the same item under the same id again is a no-op. If the
    /// id already belongs to another item, the existing entry is kept and
    /// `DuplicateId` is returned.
    ///
    /// # Examples
    /// ```
    /// use xccdf_items::document::Document;
    /// use xccdf_items::ids::IdRegistry;
    /// use xccdf_items::types::ItemKind;
    ///
    /// let mut doc = Document::new();
    /// let first = doc.insert(ItemKind::Rule, None);
    /// let second = doc.insert(ItemKind::Rule, None);
    ///
    /// let mut ids = IdRegistry::new();
    /// ids.register("rule-1", first).unwrap();
    /// assert!(ids.register("rule-1", second).is_err());
    /// assert_eq!(ids.lookup("rule-1"), Some(first));
    /// ```
    pub fn register(&mut self, id: &str, item: ItemId) -> Result<()> {
        match self.ids.get(id) {
            Some(&existing) if existing == item => Ok(()),
            Some(&existing) => {
                tracing::warn!(id, %existing, duplicate = %item, "Duplicate item id, keeping first");
                Err(XccdfError::DuplicateId(id.to_string()))
            }
            None => {
                self.ids.insert(id.to_string(), item);
                Ok(())
            }
        }
    }

    /// Item registered under `id`.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<ItemId> {
        self.ids.get(id).copied()
    }

    /// Remove the entry for `id`, returning the item it pointed at.
    pub fn remove(&mut self, id: &str) -> Option<ItemId> {
        self.ids.remove(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Registered identifiers in sorted order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.ids.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
