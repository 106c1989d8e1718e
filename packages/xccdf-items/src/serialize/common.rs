//! Serialization of the attributes and children every item shares.

use crate::config::{bool_token, format_datetime, DEFAULT_WEIGHT};
use crate::item::Item;
use crate::types::ItemKind;
use crate::xml::XmlElement;

/// Write the common attributes and children of `item` into `node`.
///
/// The element name is set from the item kind first. `id` is always
/// written; every other attribute only when it differs from its default.
/// Benchmarks carry `version` after their platforms, test results carry it
/// as an attribute (written by their own serializer).
pub fn common_to_dom(item: &Item, node: &mut XmlElement) {
    let kind = item.kind();
    node.set_name(kind.element_name());

    node.set_attribute("id", item.id_str());
    if let Some(cluster_id) = &item.cluster_id {
        node.set_attribute("cluster-id", cluster_id);
    }
    if let Some(extends) = &item.extends {
        node.set_attribute("extends", extends);
    }

    let flags = item.flags;
    let set_flags = [
        ("resolved", flags.resolved),
        ("hidden", flags.hidden),
        ("prohibitChanges", flags.prohibit_changes),
        ("abstract", flags.is_abstract),
        ("multiple", flags.multiple),
        ("interactive", flags.interactive),
    ];
    if !flags.selected {
        node.set_attribute("selected", bool_token(false));
    }
    for (name, value) in set_flags {
        if value {
            node.set_attribute(name, bool_token(true));
        }
    }
    if (item.weight - DEFAULT_WEIGHT).abs() > f64::EPSILON {
        node.set_attribute("weight", item.weight.to_string());
    }

    for status in &item.statuses {
        status.to_dom(node);
    }
    if !matches!(kind, ItemKind::Benchmark | ItemKind::Result) {
        version_to_dom(item, node);
    }
    for text in &item.title {
        text.to_dom(node, "title");
    }
    for text in &item.description {
        text.to_dom(node, "description");
    }
    for warning in &item.warnings {
        warning.to_dom(node);
    }
    for text in &item.question {
        text.to_dom(node, "question");
    }
    for reference in &item.references {
        reference.to_dom(node);
    }
    for text in &item.rationale {
        text.to_dom(node, "rationale");
    }
    for platform in &item.platforms {
        node.add_child("platform").set_attribute("idref", platform);
    }
    if kind == ItemKind::Benchmark {
        version_to_dom(item, node);
    }
}

fn version_to_dom(item: &Item, node: &mut XmlElement) {
    let Some(version) = &item.version else {
        return;
    };
    let el = node.add_text_child("version", version);
    if let Some(time) = item.version_time {
        el.set_attribute("time", format_datetime(time));
    }
    if let Some(update) = &item.version_update {
        el.set_attribute("update", update);
    }
}
