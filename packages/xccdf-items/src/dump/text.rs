//! Indented text dump of an item subtree.

use std::fmt::Write;

use crate::config::DUMP_TEXT_WIDTH;
use crate::document::Document;
use crate::item::{Item, ItemId};
use crate::text::{preferred, LocalizedText};

/// Shorten `text` to at most `width` characters, ending in `...` when cut.
///
/// # Examples
/// ```
/// use xccdf_items::dump::truncate;
///
/// assert_eq!(truncate("short", 10), "short");
/// assert_eq!(truncate("a rather long title", 10), "a rathe...");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= width {
        return flat;
    }
    let kept: String = flat.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Dump `id` and everything below it, two spaces of indent per level.
#[must_use]
pub fn dump_item(document: &Document, id: ItemId) -> String {
    let mut out = String::new();
    for item_id in document.descendants(id) {
        let depth = depth_below(document, id, item_id);
        if let Some(item) = document.get(item_id) {
            write_item(&mut out, document, item, depth);
        }
    }
    out
}

fn depth_below(document: &Document, top: ItemId, id: ItemId) -> usize {
    let mut depth = 0;
    let mut current = id;
    while current != top {
        match document.get(current).and_then(Item::parent) {
            Some(parent) => current = parent,
            None => break,
        }
        depth += 1;
    }
    depth
}

// Writes to a String cannot fail.
fn write_item(out: &mut String, document: &Document, item: &Item, depth: usize) {
    let pad = "  ".repeat(depth);
    let _ = writeln!(out, "{pad}{} {}", item.kind().element_name(), item.id_str());

    let parent = item
        .parent()
        .and_then(|p| document.get(p))
        .map_or("(none)", Item::id_str);
    let _ = writeln!(out, "{pad}  parent:      {parent}");
    if let Some(extends) = &item.extends {
        let _ = writeln!(out, "{pad}  extends:     {extends}");
    }
    let _ = writeln!(out, "{pad}  resolved:    {}", item.flags.resolved);
    let _ = writeln!(out, "{pad}  selected:    {}", item.flags.selected);
    if let Some(version) = &item.version {
        let _ = writeln!(out, "{pad}  version:     {version}");
    }
    write_text(out, &pad, "title", &item.title);
    write_text(out, &pad, "description", &item.description);
    if !item.platforms.is_empty() {
        let platforms: Vec<&str> = item.platforms.iter().map(String::as_str).collect();
        let _ = writeln!(out, "{pad}  platforms:   {}", platforms.join(", "));
    }
    if !item.statuses.is_empty() {
        let history: Vec<String> = item
            .statuses
            .iter()
            .map(|s| match s.date {
                Some(date) => format!("{} ({date})", s.status.as_str()),
                None => s.status.as_str().to_string(),
            })
            .collect();
        let _ = writeln!(
            out,
            "{pad}  status:      {} [{}]",
            item.current_status().as_str(),
            history.join(", ")
        );
    }
}

fn write_text(out: &mut String, pad: &str, label: &str, texts: &[LocalizedText]) {
    if let Some(text) = preferred(texts, None) {
        let _ = writeln!(
            out,
            "{pad}  {:<12} {}",
            format!("{label}:"),
            truncate(&text.plain_text(), DUMP_TEXT_WIDTH)
        );
    }
}
