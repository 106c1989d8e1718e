//! Scoring models declared on a benchmark.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::xml::{XmlElement, XmlReader};

/// A scoring model with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Model {
    /// URI of the scoring system.
    pub system: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
}

impl Model {
    #[must_use]
    pub fn new(system: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            params: BTreeMap::new(),
        }
    }

    /// Parse the `model` element the reader is on, including its `param`s.
    ///
    /// When a parameter name repeats, the first value is kept.
    pub fn parse(reader: &mut XmlReader<'_, '_>) -> Self {
        let mut model = Self::new(reader.attribute("system").unwrap_or_default());

        let depth = reader.depth() + 1;
        while reader.to_start_element(depth) {
            if reader.tag_name() != "param" {
                continue;
            }
            let Some(name) = reader.attribute("name") else {
                tracing::warn!(system = %model.system, "Model param without name, ignoring");
                continue;
            };
            if model.params.contains_key(name) {
                tracing::debug!(param = name, "Duplicate model param, keeping first value");
                continue;
            }
            model.params.insert(name.to_string(), reader.element_string());
        }

        model
    }

    pub fn to_dom<'p>(&self, parent: &'p mut XmlElement) -> &'p mut XmlElement {
        let node = parent.add_child("model");
        node.set_attribute("system", &self.system);
        for (name, value) in &self.params {
            node.add_text_child("param", value).set_attribute("name", name);
        }
        node
    }
}
