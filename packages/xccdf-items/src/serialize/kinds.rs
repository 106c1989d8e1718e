//! Kind-specific serializers.

use crate::config::{bool_token, format_datetime};
use crate::document::Document;
use crate::item::{
    BenchmarkData, GroupData, Item, ProfileData, ResultData, RuleData, RuleResult, ValueData,
    ValueInstance,
};
use crate::types::{RuleRole, ValueOperator, ValueType};
use crate::xml::XmlElement;

use super::append_item;

pub(super) fn benchmark_to_dom(document: &Document, data: &BenchmarkData, node: &mut XmlElement) {
    if let Some(lang) = &data.lang {
        node.set_attribute("xml:lang", lang);
    }
    if let Some(style) = &data.style {
        node.set_attribute("style", style);
    }
    if let Some(style_href) = &data.style_href {
        node.set_attribute("style-href", style_href);
    }

    for model in &data.models {
        model.to_dom(node);
    }
    for &child in data
        .profiles
        .iter()
        .chain(&data.values)
        .chain(&data.content)
        .chain(&data.results)
    {
        append_item(document, child, node);
    }
}

pub(super) fn group_to_dom(document: &Document, data: &GroupData, node: &mut XmlElement) {
    for &child in data.values.iter().chain(&data.content) {
        append_item(document, child, node);
    }
}

pub(super) fn rule_to_dom(data: &RuleData, node: &mut XmlElement) {
    if data.role != RuleRole::default() {
        node.set_attribute("role", data.role.as_str());
    }
    if let Some(severity) = data.severity {
        node.set_attribute("severity", severity.as_str());
    }

    for ident in &data.idents {
        ident.to_dom(node);
    }
    for note in &data.profile_notes {
        note.to_dom(node);
    }
    for fixtext in &data.fixtexts {
        fixtext.to_dom(node);
    }
    for fix in &data.fixes {
        fix.to_dom(node);
    }
    for check in &data.checks {
        check.to_dom(node);
    }
}

pub(super) fn value_to_dom(data: &ValueData, node: &mut XmlElement) {
    if data.value_type != ValueType::default() {
        node.set_attribute("type", data.value_type.as_str());
    }
    if data.operator != ValueOperator::default() {
        node.set_attribute("operator", data.operator.as_str());
    }
    if let Some(hint) = &data.interface_hint {
        node.set_attribute("interfaceHint", hint);
    }

    // Grouped by element so the children keep the schema's order.
    let text_fields: [(&str, fn(&ValueInstance) -> Option<String>); 5] = [
        ("value", |i| i.value.clone()),
        ("default", |i| i.default.clone()),
        ("match", |i| i.match_pattern.clone()),
        ("lower-bound", |i| i.lower_bound.map(|b| b.to_string())),
        ("upper-bound", |i| i.upper_bound.map(|b| b.to_string())),
    ];
    for (name, field) in text_fields {
        for instance in &data.instances {
            if let Some(text) = field(instance) {
                let el = node.add_text_child(name, text);
                set_selector(el, instance);
            }
        }
    }

    for instance in data.instances.iter().filter(|i| !i.choices.is_empty()) {
        let el = node.add_child("choices");
        if instance.must_match {
            el.set_attribute("mustMatch", bool_token(true));
        }
        set_selector(el, instance);
        for choice in &instance.choices {
            el.add_text_child("choice", choice);
        }
    }
}

fn set_selector(el: &mut XmlElement, instance: &ValueInstance) {
    if let Some(selector) = &instance.selector {
        el.set_attribute("selector", selector);
    }
}

pub(super) fn profile_to_dom(data: &ProfileData, node: &mut XmlElement) {
    if let Some(tag) = &data.note_tag {
        node.set_attribute("note-tag", tag);
    }

    for select in &data.selects {
        let el = node.add_child("select");
        el.set_attribute("idref", &select.idref);
        el.set_attribute("selected", bool_token(select.selected));
    }
    for set_value in &data.set_values {
        node.add_text_child("set-value", &set_value.value)
            .set_attribute("idref", &set_value.idref);
    }
    for refine in &data.refine_values {
        let el = node.add_child("refine-value");
        el.set_attribute("idref", &refine.idref);
        if let Some(selector) = &refine.selector {
            el.set_attribute("selector", selector);
        }
        if let Some(operator) = refine.operator {
            el.set_attribute("operator", operator.as_str());
        }
    }
    for refine in &data.refine_rules {
        let el = node.add_child("refine-rule");
        el.set_attribute("idref", &refine.idref);
        if let Some(selector) = &refine.selector {
            el.set_attribute("selector", selector);
        }
        if let Some(weight) = refine.weight {
            el.set_attribute("weight", weight.to_string());
        }
        if let Some(severity) = refine.severity {
            el.set_attribute("severity", severity.as_str());
        }
        if let Some(role) = refine.role {
            el.set_attribute("role", role.as_str());
        }
    }
}

pub(super) fn result_to_dom(item: &Item, data: &ResultData, node: &mut XmlElement) {
    if let Some(start) = data.start_time {
        node.set_attribute("start-time", format_datetime(start));
    }
    if let Some(end) = data.end_time {
        node.set_attribute("end-time", format_datetime(end));
    }
    if let Some(system) = &data.test_system {
        node.set_attribute("test-system", system);
    }
    if let Some(version) = &item.version {
        node.set_attribute("version", version);
    }

    if let Some(href) = &data.benchmark_href {
        node.add_child("benchmark").set_attribute("href", href);
    }
    if let Some(profile) = &data.profile {
        node.add_child("profile").set_attribute("idref", profile);
    }
    for target in &data.targets {
        node.add_text_child("target", target);
    }
    for address in &data.target_addresses {
        node.add_text_child("target-address", address);
    }
    for rule_result in &data.rule_results {
        rule_result_to_dom(rule_result, node);
    }
    for score in &data.scores {
        let el = node.add_text_child("score", score.score.to_string());
        if let Some(system) = &score.system {
            el.set_attribute("system", system);
        }
        if let Some(maximum) = score.maximum {
            el.set_attribute("maximum", maximum.to_string());
        }
    }
}

fn rule_result_to_dom(rule_result: &RuleResult, parent: &mut XmlElement) {
    let node = parent.add_child("rule-result");
    node.set_attribute("idref", &rule_result.idref);
    if let Some(role) = rule_result.role {
        node.set_attribute("role", role.as_str());
    }
    if let Some(severity) = rule_result.severity {
        node.set_attribute("severity", severity.as_str());
    }
    if let Some(time) = rule_result.time {
        node.set_attribute("time", format_datetime(time));
    }
    if let Some(version) = &rule_result.version {
        node.set_attribute("version", version);
    }
    if let Some(weight) = rule_result.weight {
        node.set_attribute("weight", weight.to_string());
    }

    node.add_text_child("result", rule_result.result.as_str());
    for ident in &rule_result.idents {
        ident.to_dom(node);
    }
    for fix in &rule_result.fixes {
        fix.to_dom(node);
    }
    for check in &rule_result.checks {
        check.to_dom(node);
    }
}

#[cfg(test)]
mod tests {
    use crate::parse::parse_document;
    use crate::serialize::item_to_dom;
    use crate::xml::XmlElement;

    fn child_names(node: &XmlElement) -> Vec<&str> {
        node.child_elements().map(XmlElement::name).collect()
    }

    #[test]
    fn test_rule_children() {
        let xml = r#"<Benchmark id="b"><Rule id="r" severity="high" role="unchecked">
            <check system="s"/>
            <fix system="sh">echo</fix>
            <ident system="cce">CCE-1</ident>
            <title>T</title>
        </Rule></Benchmark>"#;
        let doc = parse_document(xml).unwrap();
        let node = item_to_dom(&doc, doc.lookup("r").unwrap());

        assert_eq!(node.attribute("severity"), Some("high"));
        assert_eq!(node.attribute("role"), Some("unchecked"));
        assert_eq!(child_names(&node), vec!["title", "ident", "fix", "check"]);
    }

    #[test]
    fn test_value_children_grouped() {
        let xml = r#"<Benchmark id="b"><Value id="v" type="number">
            <value>1</value>
            <default>1</default>
            <value selector="big">100</value>
            <upper-bound selector="big">1000</upper-bound>
        </Value></Benchmark>"#;
        let doc = parse_document(xml).unwrap();
        let node = item_to_dom(&doc, doc.lookup("v").unwrap());

        assert_eq!(node.attribute("type"), Some("number"));
        assert_eq!(node.attribute("operator"), None);
        assert_eq!(child_names(&node), vec!["value", "value", "default", "upper-bound"]);
        let selectors: Vec<_> = node.child_elements().map(|e| e.attribute("selector")).collect();
        assert_eq!(selectors, vec![None, Some("big"), None, Some("big")]);
    }

    #[test]
    fn test_test_result_attributes() {
        let xml = r#"<Benchmark id="b"><TestResult id="t" version="2" start-time="2024-03-01T10:00:00Z">
            <target>host</target>
            <rule-result idref="r"><result>fail</result></rule-result>
            <score>50</score>
        </TestResult></Benchmark>"#;
        let doc = parse_document(xml).unwrap();
        let node = item_to_dom(&doc, doc.lookup("t").unwrap());

        assert_eq!(node.name(), "TestResult");
        assert_eq!(node.attribute("version"), Some("2"));
        assert_eq!(node.attribute("start-time"), Some("2024-03-01T10:00:00Z"));
        assert_eq!(child_names(&node), vec!["target", "rule-result", "score"]);
    }

    #[test]
    fn test_benchmark_children_order() {
        let xml = r#"<Benchmark id="b">
            <Group id="g"/>
            <Profile id="p"/>
            <model system="m"/>
            <Value id="v"/>
        </Benchmark>"#;
        let doc = parse_document(xml).unwrap();
        let node = item_to_dom(&doc, doc.root().unwrap());
        assert_eq!(child_names(&node), vec!["model", "Profile", "Value", "Group"]);
    }
}
