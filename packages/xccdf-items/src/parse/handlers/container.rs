//! Handlers for container items.
//!
//! Benchmarks and groups hold nested items, which are handed back to the
//! engine through `recurse` so the nested item gets the full ingestion.

use crate::item::{Item, ItemId};
use crate::parse::context::ParseContext;
use crate::parse::handler::{ItemHandler, RecurseFn};
use crate::records::Model;
use crate::types::ItemKind;
use crate::xml::XmlReader;

/// Handler for `<Benchmark>` elements.
pub struct BenchmarkHandler;

impl ItemHandler for BenchmarkHandler {
    fn kind(&self) -> ItemKind {
        ItemKind::Benchmark
    }

    fn process_attributes(&self, item: &mut Item, reader: &XmlReader<'_, '_>) {
        if let Some(data) = item.as_benchmark_mut() {
            data.lang = reader.lang().map(str::to_string);
            data.style = reader.attribute("style").map(str::to_string);
            data.style_href = reader.attribute("style-href").map(str::to_string);
        }
    }

    fn process_element<'a, 'input>(
        &self,
        item: ItemId,
        reader: &mut XmlReader<'a, 'input>,
        context: &mut ParseContext<'_>,
        recurse: &RecurseFn<'_, 'a, 'input>,
    ) -> bool {
        match reader.tag_name() {
            "Profile" | "Value" | "Group" | "Rule" | "TestResult" | "Result" => {
                recurse(reader, context, item);
            }
            "model" => {
                let model = Model::parse(reader);
                if let Some(data) = context.document[item].as_benchmark_mut() {
                    data.models.push(model);
                }
            }
            _ => return false,
        }
        true
    }
}

/// Handler for `<Group>` elements.
pub struct GroupHandler;

impl ItemHandler for GroupHandler {
    fn kind(&self) -> ItemKind {
        ItemKind::Group
    }

    fn process_element<'a, 'input>(
        &self,
        item: ItemId,
        reader: &mut XmlReader<'a, 'input>,
        context: &mut ParseContext<'_>,
        recurse: &RecurseFn<'_, 'a, 'input>,
    ) -> bool {
        match reader.tag_name() {
            "Value" | "Group" | "Rule" => {
                recurse(reader, context, item);
                true
            }
            _ => false,
        }
    }
}
