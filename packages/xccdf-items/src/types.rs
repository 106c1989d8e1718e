//! Closed enumerations of the XCCDF item vocabulary.
//!
//! Every enumeration maps to and from the exact tokens used in documents.
//! Parsing is total where the format defines a fallback (warning
//! categories) and partial otherwise, so callers decide what an unknown
//! token means.

use serde::Serialize;

/// The kind of an item node.
///
/// Fixed at construction; the item's payload always matches its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Root of a benchmark document.
    Benchmark,
    /// Container of rules, values and nested groups.
    Group,
    /// A single checkable recommendation.
    Rule,
    /// A tailorable value referenced by rules.
    Value,
    /// A named tailoring of the benchmark.
    Profile,
    /// Results of one evaluation run.
    Result,
    /// Selectable content without a concrete kind.
    Content,
    /// Generic object without a concrete kind.
    Object,
}

impl ItemKind {
    /// All kinds, in declaration order.
    pub const ALL: [ItemKind; 8] = [
        Self::Benchmark,
        Self::Group,
        Self::Rule,
        Self::Value,
        Self::Profile,
        Self::Result,
        Self::Content,
        Self::Object,
    ];

    /// Canonical element name emitted for this kind.
    ///
    /// Result items are written as `TestResult`, the XCCDF 1.2 element
    /// name, rather than the older `Result`; both names are read back.
    #[must_use]
    pub fn element_name(&self) -> &'static str {
        match self {
            Self::Benchmark => "Benchmark",
            Self::Group => "Group",
            Self::Rule => "Rule",
            Self::Value => "Value",
            Self::Profile => "Profile",
            Self::Result => "TestResult",
            Self::Content => "Content",
            Self::Object => "Object",
        }
    }

    /// Map an element name back to its kind.
    ///
    /// `Result` is accepted as an alias of `TestResult`.
    #[must_use]
    pub fn from_element_name(name: &str) -> Option<Self> {
        match name {
            "Benchmark" => Some(Self::Benchmark),
            "Group" => Some(Self::Group),
            "Rule" => Some(Self::Rule),
            "Value" => Some(Self::Value),
            "Profile" => Some(Self::Profile),
            "TestResult" | "Result" => Some(Self::Result),
            "Content" => Some(Self::Content),
            "Object" => Some(Self::Object),
            _ => None,
        }
    }

    /// Lowercase name for diagnostics.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Benchmark => "benchmark",
            Self::Group => "group",
            Self::Rule => "rule",
            Self::Value => "value",
            Self::Profile => "profile",
            Self::Result => "result",
            Self::Content => "content",
            Self::Object => "object",
        }
    }

    /// Whether items of this kind are selectable benchmark content.
    #[must_use]
    pub fn is_content(&self) -> bool {
        matches!(self, Self::Group | Self::Rule | Self::Content)
    }
}

/// Acceptance status of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusType {
    Accepted,
    Deprecated,
    Draft,
    Incomplete,
    Interim,
    /// No status recorded.
    #[serde(rename = "not specified")]
    NotSpecified,
}

impl StatusType {
    /// Parse a status token. `None` for anything outside the vocabulary.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "accepted" => Some(Self::Accepted),
            "deprecated" => Some(Self::Deprecated),
            "draft" => Some(Self::Draft),
            "incomplete" => Some(Self::Incomplete),
            "interim" => Some(Self::Interim),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Deprecated => "deprecated",
            Self::Draft => "draft",
            Self::Incomplete => "incomplete",
            Self::Interim => "interim",
            Self::NotSpecified => "not specified",
        }
    }
}

/// Category of a warning attached to an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningCategory {
    #[default]
    General,
    Functionality,
    Performance,
    Hardware,
    Legal,
    Regulatory,
    Management,
    Audit,
    Dependency,
}

impl WarningCategory {
    /// Parse the `category` attribute; unknown or absent maps to `General`.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("functionality") => Self::Functionality,
            Some("performance") => Self::Performance,
            Some("hardware") => Self::Hardware,
            Some("legal") => Self::Legal,
            Some("regulatory") => Self::Regulatory,
            Some("management") => Self::Management,
            Some("audit") => Self::Audit,
            Some("dependency") => Self::Dependency,
            _ => Self::General,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Functionality => "functionality",
            Self::Performance => "performance",
            Self::Hardware => "hardware",
            Self::Legal => "legal",
            Self::Regulatory => "regulatory",
            Self::Management => "management",
            Self::Audit => "audit",
            Self::Dependency => "dependency",
        }
    }
}

/// Severity, complexity and disruption level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Unknown,
    Info,
    Low,
    Medium,
    High,
}

impl Level {
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "unknown" => Some(Self::Unknown),
            "info" => Some(Self::Info),
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Info => "info",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Remediation strategy of a fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FixStrategy {
    Unknown,
    Configure,
    Disable,
    Enable,
    Patch,
    Policy,
    Restrict,
    Update,
    Combination,
}

impl FixStrategy {
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "unknown" => Some(Self::Unknown),
            "configure" => Some(Self::Configure),
            "disable" => Some(Self::Disable),
            "enable" => Some(Self::Enable),
            "patch" => Some(Self::Patch),
            "policy" => Some(Self::Policy),
            "restrict" => Some(Self::Restrict),
            "update" => Some(Self::Update),
            "combination" => Some(Self::Combination),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Configure => "configure",
            Self::Disable => "disable",
            Self::Enable => "enable",
            Self::Patch => "patch",
            Self::Policy => "policy",
            Self::Restrict => "restrict",
            Self::Update => "update",
            Self::Combination => "combination",
        }
    }
}

/// Scoring role of a rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleRole {
    #[default]
    Full,
    Unscored,
    Unchecked,
}

impl RuleRole {
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "full" => Some(Self::Full),
            "unscored" => Some(Self::Unscored),
            "unchecked" => Some(Self::Unchecked),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Unscored => "unscored",
            Self::Unchecked => "unchecked",
        }
    }
}

/// Data type of a value item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Number,
    #[default]
    String,
    Boolean,
}

impl ValueType {
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "number" => Some(Self::Number),
            "string" => Some(Self::String),
            "boolean" => Some(Self::Boolean),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
        }
    }
}

/// Comparison operator applied to a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ValueOperator {
    #[default]
    #[serde(rename = "equals")]
    Equals,
    #[serde(rename = "not equal")]
    NotEqual,
    #[serde(rename = "greater than")]
    Greater,
    #[serde(rename = "greater than or equal")]
    GreaterEqual,
    #[serde(rename = "less than")]
    Less,
    #[serde(rename = "less than or equal")]
    LessEqual,
    #[serde(rename = "pattern match")]
    PatternMatch,
}

impl ValueOperator {
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "equals" => Some(Self::Equals),
            "not equal" => Some(Self::NotEqual),
            "greater than" => Some(Self::Greater),
            "greater than or equal" => Some(Self::GreaterEqual),
            "less than" => Some(Self::Less),
            "less than or equal" => Some(Self::LessEqual),
            "pattern match" => Some(Self::PatternMatch),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::NotEqual => "not equal",
            Self::Greater => "greater than",
            Self::GreaterEqual => "greater than or equal",
            Self::Less => "less than",
            Self::LessEqual => "less than or equal",
            Self::PatternMatch => "pattern match",
        }
    }
}

/// Boolean operator combining the children of a complex check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckOperator {
    #[default]
    And,
    Or,
}

impl CheckOperator {
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// Outcome recorded for a rule in a test result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestResultType {
    Pass,
    Fail,
    Error,
    Unknown,
    NotApplicable,
    NotChecked,
    NotSelected,
    Informational,
    Fixed,
}

impl TestResultType {
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "pass" => Some(Self::Pass),
            "fail" => Some(Self::Fail),
            "error" => Some(Self::Error),
            "unknown" => Some(Self::Unknown),
            "notapplicable" => Some(Self::NotApplicable),
            "notchecked" => Some(Self::NotChecked),
            "notselected" => Some(Self::NotSelected),
            "informational" => Some(Self::Informational),
            "fixed" => Some(Self::Fixed),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Error => "error",
            Self::Unknown => "unknown",
            Self::NotApplicable => "notapplicable",
            Self::NotChecked => "notchecked",
            Self::NotSelected => "notselected",
            Self::Informational => "informational",
            Self::Fixed => "fixed",
        }
    }
}
