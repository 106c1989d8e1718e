//! The polymorphic item node.
//!
//! Every item carries the same common attributes (id, flags, weight, text
//! lists, status history, references, platforms) plus a payload whose
//! variant is fixed by the item's [`ItemKind`] at construction. Items live
//! in a [`Document`](crate::document::Document) arena and refer to their
//! parent and children through [`ItemId`] handles.

mod payload;

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::DEFAULT_WEIGHT;
use crate::records::{current_status, Reference, Status, Warning};
use crate::text::LocalizedText;
use crate::types::{ItemKind, StatusType};

pub use payload::{
    BenchmarkData, GroupData, ItemPayload, ProfileData, ProfileSelect, RefineRule, RefineValue,
    ResultData, RuleData, RuleResult, Score, SetValue, ValueData, ValueInstance,
};

/// Handle of an item inside its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(usize);

impl ItemId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the item in its document's arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Boolean flags of an item.
///
/// Attribute ingestion only touches a flag when its attribute is present,
/// so these defaults survive documents that leave the attributes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemFlags {
    pub resolved: bool,
    pub hidden: bool,
    pub selected: bool,
    pub prohibit_changes: bool,
    pub multiple: bool,
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    pub interactive: bool,
}

impl Default for ItemFlags {
    fn default() -> Self {
        Self {
            resolved: false,
            hidden: false,
            selected: true,
            prohibit_changes: false,
            multiple: false,
            is_abstract: false,
            interactive: false,
        }
    }
}

/// A node of the item tree.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: Option<String>,
    pub cluster_id: Option<String>,
    /// Id of the item this one extends; resolved elsewhere.
    pub extends: Option<String>,
    pub version: Option<String>,
    pub version_update: Option<String>,
    pub version_time: Option<DateTime<Utc>>,
    pub weight: f64,
    pub flags: ItemFlags,
    pub title: Vec<LocalizedText>,
    pub description: Vec<LocalizedText>,
    pub question: Vec<LocalizedText>,
    pub rationale: Vec<LocalizedText>,
    pub warnings: Vec<Warning>,
    pub references: Vec<Reference>,
    pub statuses: Vec<Status>,
    pub platforms: BTreeSet<String>,
    parent: Option<ItemId>,
    payload: ItemPayload,
}

impl Item {
    /// Create a defaulted item of `kind`.
    ///
    /// # Examples
    /// ```
    /// use xccdf_items::item::Item;
    /// use xccdf_items::types::ItemKind;
    ///
    /// let rule = Item::new(ItemKind::Rule, None);
    /// assert_eq!(rule.weight, 1.0);
    /// assert!(rule.flags.selected);
    /// assert!(rule.title.is_empty());
    /// ```
    #[must_use]
    pub fn new(kind: ItemKind, parent: Option<ItemId>) -> Self {
        Self {
            id: None,
            cluster_id: None,
            extends: None,
            version: None,
            version_update: None,
            version_time: None,
            weight: DEFAULT_WEIGHT,
            flags: ItemFlags::default(),
            title: Vec::new(),
            description: Vec::new(),
            question: Vec::new(),
            rationale: Vec::new(),
            warnings: Vec::new(),
            references: Vec::new(),
            statuses: Vec::new(),
            platforms: BTreeSet::new(),
            parent,
            payload: ItemPayload::for_kind(kind),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ItemKind {
        self.payload.kind()
    }

    #[must_use]
    pub fn parent(&self) -> Option<ItemId> {
        self.parent
    }

    #[must_use]
    pub fn payload(&self) -> &ItemPayload {
        &self.payload
    }

    /// Id for diagnostics; empty when the item has none.
    #[must_use]
    pub fn id_str(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    /// Status in effect, resolved over the status history.
    #[must_use]
    pub fn current_status(&self) -> StatusType {
        current_status(&self.statuses)
    }

    #[must_use]
    pub fn as_benchmark(&self) -> Option<&BenchmarkData> {
        match &self.payload {
            ItemPayload::Benchmark(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_benchmark_mut(&mut self) -> Option<&mut BenchmarkData> {
        match &mut self.payload {
            ItemPayload::Benchmark(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_group(&self) -> Option<&GroupData> {
        match &self.payload {
            ItemPayload::Group(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut GroupData> {
        match &mut self.payload {
            ItemPayload::Group(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_rule(&self) -> Option<&RuleData> {
        match &self.payload {
            ItemPayload::Rule(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_rule_mut(&mut self) -> Option<&mut RuleData> {
        match &mut self.payload {
            ItemPayload::Rule(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_value(&self) -> Option<&ValueData> {
        match &self.payload {
            ItemPayload::Value(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_value_mut(&mut self) -> Option<&mut ValueData> {
        match &mut self.payload {
            ItemPayload::Value(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_profile(&self) -> Option<&ProfileData> {
        match &self.payload {
            ItemPayload::Profile(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_profile_mut(&mut self) -> Option<&mut ProfileData> {
        match &mut self.payload {
            ItemPayload::Profile(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_result(&self) -> Option<&ResultData> {
        match &self.payload {
            ItemPayload::Result(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_result_mut(&mut self) -> Option<&mut ResultData> {
        match &mut self.payload {
            ItemPayload::Result(data) => Some(data),
            _ => None,
        }
    }

    /// Child handles in document emission order.
    ///
    /// Benchmarks list profiles, values, content, then results; groups list
    /// values before nested content. Other kinds have no children.
    #[must_use]
    pub fn children(&self) -> Vec<ItemId> {
        match &self.payload {
            ItemPayload::Benchmark(data) => data
                .profiles
                .iter()
                .chain(&data.values)
                .chain(&data.content)
                .chain(&data.results)
                .copied()
                .collect(),
            ItemPayload::Group(data) => data.values.iter().chain(&data.content).copied().collect(),
            ItemPayload::Rule(_)
            | ItemPayload::Value(_)
            | ItemPayload::Profile(_)
            | ItemPayload::Result(_)
            | ItemPayload::Content
            | ItemPayload::Object => Vec::new(),
        }
    }
}
