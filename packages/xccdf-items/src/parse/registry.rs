//! Element registry for mapping item tag names to handlers.

use std::collections::{HashMap, HashSet};

use super::handler::ItemHandler;

/// Registry mapping item element names to handlers.
///
/// The registry allows registering handlers for specific tag names, as well
/// as marking child tags that are known but deliberately not ingested.
pub struct ElementRegistry {
    handlers: HashMap<String, Box<dyn ItemHandler>>,
    skip_tags: HashSet<String>,
}

impl ElementRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            skip_tags: HashSet::new(),
        }
    }

    /// Register a handler for a specific tag name.
    pub fn register(&mut self, tag_name: impl Into<String>, handler: impl ItemHandler + 'static) {
        self.handlers.insert(tag_name.into(), Box::new(handler));
    }

    /// Mark tags as known but not ingested.
    pub fn skip(&mut self, tag_names: impl IntoIterator<Item = impl Into<String>>) {
        for tag in tag_names {
            self.skip_tags.insert(tag.into());
        }
    }

    /// Get the handler for an item element.
    ///
    /// Returns `None` if the tag is skipped or has no handler.
    #[must_use]
    pub fn get_handler(&self, tag_name: &str) -> Option<&dyn ItemHandler> {
        if self.skip_tags.contains(tag_name) {
            return None;
        }
        self.handlers.get(tag_name).map(|h| h.as_ref())
    }

    /// Check if a tag should be skipped.
    #[must_use]
    pub fn should_skip(&self, tag_name: &str) -> bool {
        self.skip_tags.contains(tag_name)
    }

    /// Check if a handler is registered for a tag.
    #[must_use]
    pub fn has_handler(&self, tag_name: &str) -> bool {
        self.handlers.contains_key(tag_name)
    }

    /// Return set of all registered tag names.
    #[must_use]
    pub fn registered_tags(&self) -> HashSet<&str> {
        self.handlers.keys().map(String::as_str).collect()
    }
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::new()
    }
}
