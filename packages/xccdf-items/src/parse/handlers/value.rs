//! Handler for value items.

use crate::item::{Item, ItemId, ValueData};
use crate::parse::context::ParseContext;
use crate::parse::handler::{ItemHandler, RecurseFn};
use crate::types::{ItemKind, ValueOperator, ValueType};
use crate::xml::XmlReader;

/// Handler for `<Value>` elements.
///
/// Every `value`, `default`, `match`, bound and `choices` child carries an
/// optional `selector`; children with the same selector fill one
/// [`ValueInstance`](crate::item::ValueInstance).
pub struct ValueHandler;

impl ItemHandler for ValueHandler {
    fn kind(&self) -> ItemKind {
        ItemKind::Value
    }

    fn process_attributes(&self, item: &mut Item, reader: &XmlReader<'_, '_>) {
        if let Some(data) = item.as_value_mut() {
            if let Some(value_type) = reader.parsed_attribute("type", ValueType::parse) {
                data.value_type = value_type;
            }
            if let Some(operator) = reader.parsed_attribute("operator", ValueOperator::parse) {
                data.operator = operator;
            }
            data.interface_hint = reader.attribute("interfaceHint").map(str::to_string);
        }
    }

    fn process_element<'a, 'input>(
        &self,
        item: ItemId,
        reader: &mut XmlReader<'a, 'input>,
        context: &mut ParseContext<'_>,
        _recurse: &RecurseFn<'_, 'a, 'input>,
    ) -> bool {
        let Some(data) = context.document[item].as_value_mut() else {
            return false;
        };
        let selector = reader.attribute("selector");

        match reader.tag_name() {
            "value" => data.instance_mut(selector).value = Some(reader.element_string()),
            "default" => data.instance_mut(selector).default = Some(reader.element_string()),
            "match" => data.instance_mut(selector).match_pattern = Some(reader.element_string()),
            "lower-bound" => {
                if let Some(bound) = parse_bound(reader) {
                    data.instance_mut(selector).lower_bound = Some(bound);
                }
            }
            "upper-bound" => {
                if let Some(bound) = parse_bound(reader) {
                    data.instance_mut(selector).upper_bound = Some(bound);
                }
            }
            "choices" => parse_choices(data, reader),
            _ => return false,
        }
        true
    }
}

fn parse_bound(reader: &XmlReader<'_, '_>) -> Option<f64> {
    let text = reader.element_string();
    match text.parse::<f64>() {
        Ok(bound) => Some(bound),
        Err(_) => {
            tracing::warn!(element = reader.tag_name(), value = %text, "Invalid bound, ignoring");
            None
        }
    }
}

fn parse_choices(data: &mut ValueData, reader: &mut XmlReader<'_, '_>) {
    let selector = reader.attribute("selector");
    let must_match = reader.bool_attribute("mustMatch").unwrap_or(false);

    let mut choices = Vec::new();
    let depth = reader.depth() + 1;
    while reader.to_start_element(depth) {
        if reader.tag_name() == "choice" {
            choices.push(reader.element_string());
        }
    }

    let instance = data.instance_mut(selector);
    instance.must_match = must_match;
    instance.choices.extend(choices);
}
