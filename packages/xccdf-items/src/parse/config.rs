//! Registry configuration for XCCDF item parsing.

use super::handlers::{
    BenchmarkHandler, GroupHandler, ProfileHandler, ResultHandler, RuleHandler, ValueHandler,
};
use super::registry::ElementRegistry;

/// Create an item registry configured for XCCDF 1.2 documents.
#[must_use]
pub fn create_item_registry() -> ElementRegistry {
    let mut registry = ElementRegistry::new();

    registry.register("Benchmark", BenchmarkHandler);
    registry.register("Group", GroupHandler);
    registry.register("Rule", RuleHandler);
    registry.register("Value", ValueHandler);
    registry.register("Profile", ProfileHandler);
    registry.register("TestResult", ResultHandler);
    registry.register("Result", ResultHandler);

    // Skip tags - known children that are not ingested
    //
    // Document metadata:
    //   - signature: XML digital signature
    //   - metadata: Dublin Core and other free-form metadata
    //   - dc-status: Dublin Core status block
    //   - notice, front-matter, rear-matter, plain-text: benchmark prose
    //
    // Rule relations and scoring extras:
    //   - requires, conflicts: rule dependencies
    //   - impact-metric: CVSS vector
    //
    // Value extras:
    //   - complex-value, complex-default, source
    //
    // Test result extras:
    //   - remark, organization, identity, target-facts, target-id-ref
    //   - set-value, set-complex-value: values used during the run
    registry.skip([
        "signature",
        "metadata",
        "dc-status",
        "notice",
        "front-matter",
        "rear-matter",
        "plain-text",
        "requires",
        "conflicts",
        "impact-metric",
        "complex-value",
        "complex-default",
        "source",
        "remark",
        "organization",
        "identity",
        "target-facts",
        "target-id-ref",
        "set-value",
        "set-complex-value",
    ]);

    registry
}
