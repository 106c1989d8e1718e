//! Kind-specific item data.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ids::IdRegistry;
use crate::records::{Check, Fix, Fixtext, Ident, Model, ProfileNote};
use crate::types::{ItemKind, Level, RuleRole, TestResultType, ValueOperator, ValueType};

use super::ItemId;

/// Variant payload of an item. The variant always matches the item kind.
#[derive(Debug, Clone)]
pub enum ItemPayload {
    Benchmark(BenchmarkData),
    Group(GroupData),
    Rule(RuleData),
    Value(ValueData),
    Profile(ProfileData),
    Result(ResultData),
    Content,
    Object,
}

impl ItemPayload {
    /// Empty payload for `kind`.
    #[must_use]
    pub fn for_kind(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Benchmark => Self::Benchmark(BenchmarkData::default()),
            ItemKind::Group => Self::Group(GroupData::default()),
            ItemKind::Rule => Self::Rule(RuleData::default()),
            ItemKind::Value => Self::Value(ValueData::default()),
            ItemKind::Profile => Self::Profile(ProfileData::default()),
            ItemKind::Result => Self::Result(ResultData::default()),
            ItemKind::Content => Self::Content,
            ItemKind::Object => Self::Object,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Benchmark(_) => ItemKind::Benchmark,
            Self::Group(_) => ItemKind::Group,
            Self::Rule(_) => ItemKind::Rule,
            Self::Value(_) => ItemKind::Value,
            Self::Profile(_) => ItemKind::Profile,
            Self::Result(_) => ItemKind::Result,
            Self::Content => ItemKind::Content,
            Self::Object => ItemKind::Object,
        }
    }
}

/// Root of a benchmark document.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkData {
    /// Identifiers of every registered item in the document.
    pub registry: IdRegistry,
    /// Document language from `xml:lang`.
    pub lang: Option<String>,
    pub style: Option<String>,
    pub style_href: Option<String>,
    pub models: Vec<Model>,
    pub profiles: Vec<ItemId>,
    pub values: Vec<ItemId>,
    /// Top-level groups and rules.
    pub content: Vec<ItemId>,
    pub results: Vec<ItemId>,
}

#[derive(Debug, Clone, Default)]
pub struct GroupData {
    pub values: Vec<ItemId>,
    /// Nested groups and rules.
    pub content: Vec<ItemId>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RuleData {
    pub role: RuleRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Level>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub idents: Vec<Ident>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub profile_notes: Vec<ProfileNote>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fixtexts: Vec<Fixtext>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fixes: Vec<Fix>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<Check>,
}

/// One selector's worth of value data.
///
/// The unnamed instance has `selector == None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValueInstance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub must_match: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValueData {
    pub value_type: ValueType,
    pub operator: ValueOperator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_hint: Option<String>,
    pub instances: Vec<ValueInstance>,
}

impl ValueData {
    /// Instance for `selector`, created on first use.
    pub fn instance_mut(&mut self, selector: Option<&str>) -> &mut ValueInstance {
        let pos = self
            .instances
            .iter()
            .position(|i| i.selector.as_deref() == selector);
        let index = match pos {
            Some(index) => index,
            None => {
                self.instances.push(ValueInstance {
                    selector: selector.map(str::to_string),
                    ..ValueInstance::default()
                });
                self.instances.len() - 1
            }
        };
        &mut self.instances[index]
    }

    /// Instance for `selector`, if any.
    #[must_use]
    pub fn instance(&self, selector: Option<&str>) -> Option<&ValueInstance> {
        self.instances
            .iter()
            .find(|i| i.selector.as_deref() == selector)
    }
}

/// `select` entry of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSelect {
    pub idref: String,
    pub selected: bool,
}

/// `set-value` entry of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetValue {
    pub idref: String,
    pub value: String,
}

/// `refine-value` entry of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefineValue {
    pub idref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<ValueOperator>,
}

/// `refine-rule` entry of a profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefineRule {
    pub idref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<RuleRole>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_tag: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub selects: Vec<ProfileSelect>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub set_values: Vec<SetValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub refine_values: Vec<RefineValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub refine_rules: Vec<RefineRule>,
}

/// Outcome of one rule in a test result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleResult {
    pub idref: String,
    pub result: TestResultType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<RuleRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub idents: Vec<Ident>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fixes: Vec<Fix>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<Check>,
}

/// Score computed by one scoring system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Score {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    pub score: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_system: Option<String>,
    /// `href` of the evaluated benchmark.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark_href: Option<String>,
    /// Id of the profile the evaluation used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_addresses: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rule_results: Vec<RuleResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scores: Vec<Score>,
}
