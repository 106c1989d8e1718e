//! Handler for test result items.

use crate::config::{parse_datetime, parse_weight};
use crate::item::{Item, ItemId, RuleResult, Score};
use crate::parse::context::ParseContext;
use crate::parse::handler::{ItemHandler, RecurseFn};
use crate::records::{Check, Fix, Ident};
use crate::types::{ItemKind, Level, RuleRole, TestResultType};
use crate::xml::XmlReader;

/// Handler for `<TestResult>` elements.
///
/// Unlike other items, a test result carries its version as an attribute.
pub struct ResultHandler;

impl ItemHandler for ResultHandler {
    fn kind(&self) -> ItemKind {
        ItemKind::Result
    }

    fn process_attributes(&self, item: &mut Item, reader: &XmlReader<'_, '_>) {
        if let Some(version) = reader.attribute("version") {
            item.version = Some(version.to_string());
        }
        if let Some(data) = item.as_result_mut() {
            data.start_time = parse_datetime(reader.attribute("start-time"));
            data.end_time = parse_datetime(reader.attribute("end-time"));
            data.test_system = reader.attribute("test-system").map(str::to_string);
        }
    }

    fn process_element<'a, 'input>(
        &self,
        item: ItemId,
        reader: &mut XmlReader<'a, 'input>,
        context: &mut ParseContext<'_>,
        _recurse: &RecurseFn<'_, 'a, 'input>,
    ) -> bool {
        let Some(data) = context.document[item].as_result_mut() else {
            return false;
        };
        match reader.tag_name() {
            "benchmark" => data.benchmark_href = reader.attribute("href").map(str::to_string),
            "profile" => data.profile = reader.attribute("idref").map(str::to_string),
            "target" => data.targets.push(reader.element_string()),
            "target-address" => data.target_addresses.push(reader.element_string()),
            "rule-result" => data.rule_results.push(parse_rule_result(reader)),
            "score" => {
                if let Some(score) = parse_score(reader) {
                    data.scores.push(score);
                }
            }
            _ => return false,
        }
        true
    }
}

fn parse_rule_result(reader: &mut XmlReader<'_, '_>) -> RuleResult {
    let mut rule_result = RuleResult {
        idref: reader.attribute("idref").unwrap_or_default().to_string(),
        result: TestResultType::Unknown,
        time: parse_datetime(reader.attribute("time")),
        severity: reader.parsed_attribute("severity", Level::parse),
        role: reader.parsed_attribute("role", RuleRole::parse),
        weight: reader.parsed_attribute("weight", parse_weight),
        version: reader.attribute("version").map(str::to_string),
        idents: Vec::new(),
        fixes: Vec::new(),
        checks: Vec::new(),
    };

    let depth = reader.depth() + 1;
    while reader.to_start_element(depth) {
        match reader.tag_name() {
            "result" => {
                let token = reader.element_string();
                match TestResultType::parse(&token) {
                    Some(result) => rule_result.result = result,
                    None => tracing::warn!(
                        idref = %rule_result.idref,
                        result = %token,
                        "Unknown rule result, keeping 'unknown'"
                    ),
                }
            }
            "ident" => rule_result.idents.push(Ident::parse(reader)),
            "fix" => rule_result.fixes.push(Fix::parse(reader)),
            "check" | "complex-check" => rule_result.checks.push(Check::parse(reader)),
            other => tracing::debug!(element = other, "Skipping rule-result child"),
        }
    }

    rule_result
}

fn parse_score(reader: &XmlReader<'_, '_>) -> Option<Score> {
    let text = reader.element_string();
    let Ok(score) = text.parse::<f64>() else {
        tracing::warn!(value = %text, "Invalid score, ignoring");
        return None;
    };
    Some(Score {
        system: reader.attribute("system").map(str::to_string),
        maximum: reader.parsed_attribute("maximum", |s| s.trim().parse::<f64>().ok()),
        score,
    })
}
