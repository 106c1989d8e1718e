//! Item handler trait definition.

use super::context::ParseContext;
use crate::item::{Item, ItemId};
use crate::types::ItemKind;
use crate::xml::XmlReader;

/// Function type for parsing a nested item element.
///
/// Called with the reader positioned on the nested item's start element
/// and the handle of the enclosing item. Returns the new item's handle, or
/// `None` when the nested element could not be parsed (already logged).
pub type RecurseFn<'r, 'a, 'input> =
    dyn Fn(&mut XmlReader<'a, 'input>, &mut ParseContext<'_>, ItemId) -> Option<ItemId> + 'r;

/// Trait for item handlers.
///
/// A handler owns the kind-specific part of ingesting one item element.
/// The engine creates the item, runs the common attribute and element
/// ingestion, and hands the handler whatever the common part leaves over.
pub trait ItemHandler: Send + Sync {
    /// Kind of the items this handler creates.
    fn kind(&self) -> ItemKind;

    /// Read kind-specific attributes of the start element.
    ///
    /// Default implementation reads nothing.
    fn process_attributes(&self, _item: &mut Item, _reader: &XmlReader<'_, '_>) {}

    /// Process one child element not consumed by common ingestion.
    ///
    /// # Arguments
    /// * `item` - Handle of the item being built
    /// * `reader` - Reader positioned on the child element
    /// * `context` - Current parsing context
    /// * `recurse` - Function to call for nested item elements
    ///
    /// # Returns
    /// `true` if the element was consumed.
    fn process_element<'a, 'input>(
        &self,
        item: ItemId,
        reader: &mut XmlReader<'a, 'input>,
        context: &mut ParseContext<'_>,
        recurse: &RecurseFn<'_, 'a, 'input>,
    ) -> bool;
}
