//! Handler for profile items.

use crate::config::parse_weight;
use crate::item::{Item, ItemId, ProfileSelect, RefineRule, RefineValue, SetValue};
use crate::parse::context::ParseContext;
use crate::parse::handler::{ItemHandler, RecurseFn};
use crate::types::{ItemKind, Level, RuleRole, ValueOperator};
use crate::xml::XmlReader;

/// Handler for `<Profile>` elements.
pub struct ProfileHandler;

impl ItemHandler for ProfileHandler {
    fn kind(&self) -> ItemKind {
        ItemKind::Profile
    }

    fn process_attributes(&self, item: &mut Item, reader: &XmlReader<'_, '_>) {
        if let Some(data) = item.as_profile_mut() {
            data.note_tag = reader.attribute("note-tag").map(str::to_string);
        }
    }

    fn process_element<'a, 'input>(
        &self,
        item: ItemId,
        reader: &mut XmlReader<'a, 'input>,
        context: &mut ParseContext<'_>,
        _recurse: &RecurseFn<'_, 'a, 'input>,
    ) -> bool {
        let tag_name = reader.tag_name();
        if !matches!(tag_name, "select" | "set-value" | "refine-value" | "refine-rule") {
            return false;
        }
        let Some(data) = context.document[item].as_profile_mut() else {
            return false;
        };
        let Some(idref) = reader.attribute("idref").map(str::to_string) else {
            tracing::warn!(element = tag_name, "Profile setting without idref, ignoring");
            return true;
        };

        match tag_name {
            "select" => {
                let Some(selected) = reader.bool_attribute("selected") else {
                    tracing::warn!(idref = %idref, "Select without selected flag, ignoring");
                    return true;
                };
                data.selects.push(ProfileSelect { idref, selected });
            }
            "set-value" => data.set_values.push(SetValue {
                idref,
                value: reader.element_string(),
            }),
            "refine-value" => data.refine_values.push(RefineValue {
                idref,
                selector: reader.attribute("selector").map(str::to_string),
                operator: reader.parsed_attribute("operator", ValueOperator::parse),
            }),
            _ => data.refine_rules.push(RefineRule {
                idref,
                selector: reader.attribute("selector").map(str::to_string),
                weight: reader.parsed_attribute("weight", parse_weight),
                severity: reader.parsed_attribute("severity", Level::parse),
                role: reader.parsed_attribute("role", RuleRole::parse),
            }),
        }
        true
    }
}
