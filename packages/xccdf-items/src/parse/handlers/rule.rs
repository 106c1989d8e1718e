//! Handler for rule items.

use crate::item::{Item, ItemId};
use crate::parse::context::ParseContext;
use crate::parse::handler::{ItemHandler, RecurseFn};
use crate::records::{Check, Fix, Fixtext, Ident, ProfileNote};
use crate::types::{ItemKind, Level, RuleRole};
use crate::xml::XmlReader;

/// Handler for `<Rule>` elements.
///
/// Collects idents, profile notes, fix texts, fixes and checks in document
/// order.
pub struct RuleHandler;

impl ItemHandler for RuleHandler {
    fn kind(&self) -> ItemKind {
        ItemKind::Rule
    }

    fn process_attributes(&self, item: &mut Item, reader: &XmlReader<'_, '_>) {
        if let Some(data) = item.as_rule_mut() {
            if let Some(role) = reader.parsed_attribute("role", RuleRole::parse) {
                data.role = role;
            }
            data.severity = reader.parsed_attribute("severity", Level::parse);
        }
    }

    fn process_element<'a, 'input>(
        &self,
        item: ItemId,
        reader: &mut XmlReader<'a, 'input>,
        context: &mut ParseContext<'_>,
        _recurse: &RecurseFn<'_, 'a, 'input>,
    ) -> bool {
        let Some(data) = context.document[item].as_rule_mut() else {
            return false;
        };
        match reader.tag_name() {
            "ident" => data.idents.push(Ident::parse(reader)),
            "profile-note" => data.profile_notes.push(ProfileNote::parse(reader)),
            "fixtext" => data.fixtexts.push(Fixtext::parse(reader)),
            "fix" => data.fixes.push(Fix::parse(reader)),
            "check" | "complex-check" => data.checks.push(Check::parse(reader)),
            _ => return false,
        }
        true
    }
}
