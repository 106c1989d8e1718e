//! Ingestion shared by every item kind.
//!
//! Attribute ingestion only overwrites a default when the attribute is
//! present. Element ingestion consumes the common child elements and
//! reports everything else as not consumed, so kind handlers can take it.

use crate::config::{parse_datetime, parse_weight};
use crate::document::Document;
use crate::item::{Item, ItemId};
use crate::records::{Reference, Status, Warning};
use crate::text::{LocalizedText, TextTraits};
use crate::xml::XmlReader;

/// Fill the common attributes of `id` from the start element and register
/// the item in its benchmark.
///
/// # Returns
/// `true` iff the element carried an `id`. The item is usable either way;
/// without an id it just stays unregistered. A duplicate id is logged by
/// the registry and leaves the first holder registered.
pub fn process_attributes(document: &mut Document, id: ItemId, reader: &XmlReader<'_, '_>) -> bool {
    let item = &mut document[id];

    item.id = reader.attribute("id").map(str::to_string);

    let flags = &mut item.flags;
    read_flag(&mut flags.resolved, reader, "resolved");
    read_flag(&mut flags.hidden, reader, "hidden");
    read_flag(&mut flags.selected, reader, "selected");
    read_flag(&mut flags.prohibit_changes, reader, "prohibitChanges");
    read_flag(&mut flags.multiple, reader, "multiple");
    read_flag(&mut flags.is_abstract, reader, "abstract");
    read_flag(&mut flags.interactive, reader, "interactive");

    if let Some(weight) = reader.parsed_attribute("weight", parse_weight) {
        item.weight = weight;
    }
    if let Some(extends) = reader.attribute("extends") {
        item.extends = Some(extends.to_string());
    }
    if let Some(cluster_id) = reader.attribute("cluster-id") {
        item.cluster_id = Some(cluster_id.to_string());
    }

    if item.id.is_none() {
        return false;
    }

    if let Err(err) = document.register(id) {
        tracing::debug!(error = %err, "Item left unregistered");
    }
    true
}

fn read_flag(flag: &mut bool, reader: &XmlReader<'_, '_>, name: &str) {
    if let Some(value) = reader.bool_attribute(name) {
        *flag = value;
    }
}

/// Ingest one child element common to all items.
///
/// # Returns
/// `true` if the element was consumed, `false` if it belongs to the
/// kind-specific handler (or nobody).
pub fn process_element(item: &mut Item, reader: &XmlReader<'_, '_>) -> bool {
    match reader.tag_name() {
        "title" => item.title.push(LocalizedText::parse(reader, TextTraits::PLAIN)),
        "description" => item
            .description
            .push(LocalizedText::parse(reader, TextTraits::HTMLSUB)),
        "question" => item.question.push(LocalizedText::parse(reader, TextTraits::PLAIN)),
        "rationale" => item
            .rationale
            .push(LocalizedText::parse(reader, TextTraits::HTMLSUB)),
        "warning" => item.warnings.push(Warning::parse(reader)),
        "reference" => item.references.push(Reference::parse(reader)),
        "status" => {
            let token = reader.element_string();
            match Status::from_token(&token, reader.attribute("date")) {
                Some(status) => item.statuses.push(status),
                None => tracing::warn!(
                    item = item.id_str(),
                    status = %token,
                    "Unknown status, dropping record"
                ),
            }
        }
        "version" => {
            item.version_time = parse_datetime(reader.attribute("time"));
            item.version_update = reader.attribute("update").map(str::to_string);
            item.version = Some(reader.element_string());
        }
        "platform" => match reader.attribute("idref") {
            Some(idref) => {
                item.platforms.insert(idref.to_string());
            }
            None => tracing::warn!(item = item.id_str(), "Platform without idref, ignoring"),
        },
        _ => return false,
    }
    true
}
