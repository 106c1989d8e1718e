//! Item ingestion.
//!
//! This module turns XCCDF elements into items. Item handlers are
//! registered per element name; the [`ParseEngine`] drives the positioned
//! reader, runs the common ingestion from [`common`] and dispatches the
//! remaining children to the handler of the item being built.

pub mod common;
mod config;
mod context;
mod engine;
mod handler;
pub mod handlers;
mod registry;

pub use config::create_item_registry;
pub use context::ParseContext;
pub use engine::ParseEngine;
pub use handler::{ItemHandler, RecurseFn};
pub use registry::ElementRegistry;

use crate::document::Document;
use crate::error::Result;
use crate::xml::XmlReader;

/// Parse an XCCDF document whose root element is an item.
///
/// # Errors
/// Returns `XmlParse` for malformed XML and `UnknownElement` when the root
/// element is not an item.
///
/// # Examples
/// ```
/// use xccdf_items::parse::parse_document;
///
/// let doc = parse_document(r#"<Benchmark id="b"><Rule id="r"/></Benchmark>"#).unwrap();
/// assert!(doc.lookup("r").is_some());
/// ```
pub fn parse_document(xml: &str) -> Result<Document> {
    let xml_doc = roxmltree::Document::parse(xml)?;
    let engine = ParseEngine::new(create_item_registry());

    let mut document = Document::new();
    let mut context = ParseContext::new(&mut document);
    let mut reader = XmlReader::new(xml_doc.root_element());
    engine.parse_item(&mut reader, &mut context, None)?;

    if !context.unconsumed.is_empty() {
        tracing::debug!(count = context.unconsumed.len(), "Document had unconsumed elements");
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XccdfError;
    use crate::types::{
        CheckOperator, FixStrategy, ItemKind, Level, RuleRole, StatusType, TestResultType,
        ValueOperator, ValueType,
    };

    const BENCHMARK: &str = r#"<?xml version="1.0"?>
<Benchmark xmlns="http://checklists.nist.gov/xccdf/1.2" id="xccdf_org.example_benchmark_test" resolved="1" xml:lang="en" style="SCAP_1.2">
  <status date="2024-01-01">draft</status>
  <title>Test benchmark</title>
  <platform idref="cpe:/o:example:os"/>
  <version>0.1</version>
  <model system="urn:xccdf:scoring:default"/>
  <Profile id="xccdf_org.example_profile_server" note-tag="server">
    <title>Server</title>
    <select idref="xccdf_org.example_rule_telnet" selected="true"/>
    <set-value idref="xccdf_org.example_value_port">2222</set-value>
    <refine-value idref="xccdf_org.example_value_port" selector="strict" operator="less than"/>
    <refine-rule idref="xccdf_org.example_rule_telnet" severity="high" weight="3"/>
  </Profile>
  <Value id="xccdf_org.example_value_port" type="number" operator="equals">
    <title>Port</title>
    <value>22</value>
    <value selector="strict">2222</value>
    <lower-bound>1</lower-bound>
    <upper-bound>65535</upper-bound>
    <choices mustMatch="true" selector="strict"><choice>2222</choice><choice>22222</choice></choices>
  </Value>
  <Group id="xccdf_org.example_group_services" hidden="true">
    <title>Services</title>
    <Rule id="xccdf_org.example_rule_telnet" severity="medium" role="unscored" selected="false">
      <title>Disable telnet</title>
      <ident system="https://cce.mitre.org">CCE-1234-5</ident>
      <profile-note tag="server">Mandatory on servers</profile-note>
      <fixtext fixref="f1" strategy="disable">Remove the package</fixtext>
      <fix id="f1" system="urn:xccdf:fix:script:sh" complexity="low">dnf remove telnet</fix>
      <complex-check operator="AND">
        <check system="http://oval.mitre.org/XMLSchema/oval-definitions-5">
          <check-content-ref href="oval.xml" name="oval:x:def:1"/>
        </check>
      </complex-check>
      <requires idref="other"/>
    </Rule>
  </Group>
  <TestResult id="xccdf_org.example_testresult_1" start-time="2024-03-01T10:00:00Z" end-time="2024-03-01T10:05:00Z" test-system="scanner 1.0" version="0.1">
    <benchmark href="benchmark.xml"/>
    <profile idref="xccdf_org.example_profile_server"/>
    <target>host1</target>
    <target-address>10.0.0.1</target-address>
    <rule-result idref="xccdf_org.example_rule_telnet" severity="medium" time="2024-03-01T10:01:00Z">
      <result>pass</result>
      <ident system="https://cce.mitre.org">CCE-1234-5</ident>
    </rule-result>
    <score system="urn:xccdf:scoring:default" maximum="100">87.5</score>
  </TestResult>
</Benchmark>"#;

    #[test]
    fn test_parse_benchmark_tree() {
        let doc = parse_document(BENCHMARK).unwrap();
        let root = doc.root().unwrap();
        let bench = &doc[root];

        assert_eq!(bench.kind(), ItemKind::Benchmark);
        assert!(bench.flags.resolved);
        assert_eq!(bench.version.as_deref(), Some("0.1"));
        assert_eq!(bench.current_status(), StatusType::Draft);
        assert!(bench.platforms.contains("cpe:/o:example:os"));

        let data = bench.as_benchmark().unwrap();
        assert_eq!(data.lang.as_deref(), Some("en"));
        assert_eq!(data.style.as_deref(), Some("SCAP_1.2"));
        assert_eq!(data.models.len(), 1);
        assert_eq!(data.profiles.len(), 1);
        assert_eq!(data.values.len(), 1);
        assert_eq!(data.content.len(), 1);
        assert_eq!(data.results.len(), 1);
        assert_eq!(data.registry.len(), 6);
    }

    #[test]
    fn test_parse_rule_payload() {
        let doc = parse_document(BENCHMARK).unwrap();
        let rule_id = doc.lookup("xccdf_org.example_rule_telnet").unwrap();
        let rule = &doc[rule_id];

        assert!(!rule.flags.selected);
        assert_eq!(doc[rule.parent().unwrap()].id.as_deref(), Some("xccdf_org.example_group_services"));

        let data = rule.as_rule().unwrap();
        assert_eq!(data.role, RuleRole::Unscored);
        assert_eq!(data.severity, Some(Level::Medium));
        assert_eq!(data.idents[0].id, "CCE-1234-5");
        assert_eq!(data.profile_notes[0].reftag, "server");
        assert_eq!(data.fixtexts[0].traits.strategy, Some(FixStrategy::Disable));
        assert_eq!(data.fixes[0].traits.complexity, Some(Level::Low));
        assert!(data.checks[0].complex);
        assert_eq!(data.checks[0].operator, CheckOperator::And);
        assert_eq!(data.checks[0].children[0].content_refs[0].href, "oval.xml");
    }

    #[test]
    fn test_parse_value_and_profile() {
        let doc = parse_document(BENCHMARK).unwrap();

        let value = doc[doc.lookup("xccdf_org.example_value_port").unwrap()]
            .as_value()
            .unwrap();
        assert_eq!(value.value_type, ValueType::Number);
        assert_eq!(value.instance(None).unwrap().value.as_deref(), Some("22"));
        assert_eq!(value.instance(None).unwrap().upper_bound, Some(65535.0));
        let strict = value.instance(Some("strict")).unwrap();
        assert_eq!(strict.value.as_deref(), Some("2222"));
        assert!(strict.must_match);
        assert_eq!(strict.choices, vec!["2222", "22222"]);

        let profile = doc[doc.lookup("xccdf_org.example_profile_server").unwrap()]
            .as_profile()
            .unwrap();
        assert_eq!(profile.note_tag.as_deref(), Some("server"));
        assert!(profile.selects[0].selected);
        assert_eq!(profile.set_values[0].value, "2222");
        assert_eq!(profile.refine_values[0].operator, Some(ValueOperator::Less));
        assert_eq!(profile.refine_rules[0].severity, Some(Level::High));
        assert_eq!(profile.refine_rules[0].weight, Some(3.0));
    }

    #[test]
    fn test_parse_test_result() {
        let doc = parse_document(BENCHMARK).unwrap();
        let result = &doc[doc.lookup("xccdf_org.example_testresult_1").unwrap()];
        assert_eq!(result.version.as_deref(), Some("0.1"));

        let data = result.as_result().unwrap();
        assert!(data.start_time.is_some());
        assert_eq!(data.test_system.as_deref(), Some("scanner 1.0"));
        assert_eq!(data.benchmark_href.as_deref(), Some("benchmark.xml"));
        assert_eq!(data.profile.as_deref(), Some("xccdf_org.example_profile_server"));
        assert_eq!(data.targets, vec!["host1"]);
        assert_eq!(data.target_addresses, vec!["10.0.0.1"]);
        assert_eq!(data.rule_results[0].result, TestResultType::Pass);
        assert_eq!(data.rule_results[0].idents.len(), 1);
        assert_eq!(data.scores[0].score, 87.5);
        assert_eq!(data.scores[0].maximum, Some(100.0));
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let xml = r#"<Benchmark id="b">
            <Rule id="dup"><title>First</title></Rule>
            <Rule id="dup"><title>Second</title></Rule>
        </Benchmark>"#;
        let doc = parse_document(xml).unwrap();
        let root = doc.root().unwrap();

        assert_eq!(doc.content(root).len(), 2);
        let found = doc.lookup("dup").unwrap();
        assert_eq!(doc[found].title[0].text, "First");
    }

    #[test]
    fn test_standalone_rule_is_not_registered() {
        let doc = parse_document(r#"<Rule id="r"><title>T</title></Rule>"#).unwrap();
        let root = doc.root().unwrap();
        assert_eq!(doc[root].kind(), ItemKind::Rule);
        assert_eq!(doc.lookup("r"), None);
    }

    #[test]
    fn test_unknown_root() {
        let err = parse_document("<Tailoring/>").unwrap_err();
        assert!(matches!(err, XccdfError::UnknownElement { .. }));
        assert!(matches!(parse_document("<Benchmark"), Err(XccdfError::XmlParse(_))));
    }
}
