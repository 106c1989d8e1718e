//! Rule-level records: identifiers, remediation and profile notes.

use serde::Serialize;

use crate::config::bool_token;
use crate::text::{LocalizedText, TextTraits};
use crate::types::{FixStrategy, Level};
use crate::xml::{XmlElement, XmlReader};

/// A long-term, globally meaningful identifier of a rule (e.g. a CCE).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ident {
    pub id: String,
    pub system: String,
}

impl Ident {
    pub fn parse(reader: &XmlReader<'_, '_>) -> Self {
        Self {
            id: reader.element_string(),
            system: reader.attribute("system").unwrap_or_default().to_string(),
        }
    }

    pub fn to_dom<'p>(&self, parent: &'p mut XmlElement) -> &'p mut XmlElement {
        let node = parent.add_text_child("ident", &self.id);
        node.set_attribute("system", &self.system);
        node
    }
}

/// Remediation attributes shared by `fix` and `fixtext`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FixTraits {
    /// Applying the fix requires a reboot.
    pub reboot: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disruption: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<FixStrategy>,
}

impl FixTraits {
    fn parse(reader: &XmlReader<'_, '_>) -> Self {
        Self {
            reboot: reader.bool_attribute("reboot").unwrap_or(false),
            complexity: reader.parsed_attribute("complexity", Level::parse),
            disruption: reader.parsed_attribute("disruption", Level::parse),
            strategy: reader.parsed_attribute("strategy", FixStrategy::parse),
        }
    }

    /// Unset levels and strategy are left out; there is no positional lookup.
    fn to_dom(self, node: &mut XmlElement) {
        if self.reboot {
            node.set_attribute("reboot", bool_token(true));
        }
        if let Some(level) = self.complexity {
            node.set_attribute("complexity", level.as_str());
        }
        if let Some(level) = self.disruption {
            node.set_attribute("disruption", level.as_str());
        }
        if let Some(strategy) = self.strategy {
            node.set_attribute("strategy", strategy.as_str());
        }
    }
}

/// A machine-applicable fix script.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Fix {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// URI of the fix language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(flatten)]
    pub traits: FixTraits,
    /// Script body, markup of `sub`/`instance` elements included.
    pub content: String,
}

impl Fix {
    pub fn parse(reader: &XmlReader<'_, '_>) -> Self {
        Self {
            id: reader.attribute("id").map(str::to_string),
            system: reader.attribute("system").map(str::to_string),
            platform: reader.attribute("platform").map(str::to_string),
            traits: FixTraits::parse(reader),
            content: reader.inner_markup(),
        }
    }

    pub fn to_dom<'p>(&self, parent: &'p mut XmlElement) -> &'p mut XmlElement {
        let node = parent.add_child("fix");
        if let Some(id) = &self.id {
            node.set_attribute("id", id);
        }
        if let Some(system) = &self.system {
            node.set_attribute("system", system);
        }
        if let Some(platform) = &self.platform {
            node.set_attribute("platform", platform);
        }
        self.traits.to_dom(node);
        node.push_markup(&self.content);
        node
    }
}

/// Human-readable remediation instructions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fixtext {
    /// Id of the `fix` this text describes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixref: Option<String>,
    #[serde(flatten)]
    pub traits: FixTraits,
    pub text: LocalizedText,
}

impl Fixtext {
    pub fn parse(reader: &XmlReader<'_, '_>) -> Self {
        Self {
            fixref: reader.attribute("fixref").map(str::to_string),
            traits: FixTraits::parse(reader),
            text: LocalizedText::parse(reader, TextTraits::HTMLSUB),
        }
    }

    pub fn to_dom<'p>(&self, parent: &'p mut XmlElement) -> &'p mut XmlElement {
        let node = self.text.to_dom(parent, "fixtext");
        if let Some(fixref) = &self.fixref {
            node.set_attribute("fixref", fixref);
        }
        self.traits.to_dom(node);
        node
    }
}

/// Text shown for a rule when a profile with a matching note tag is active.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileNote {
    pub reftag: String,
    pub text: LocalizedText,
}

impl ProfileNote {
    pub fn parse(reader: &XmlReader<'_, '_>) -> Self {
        Self {
            reftag: reader.attribute("tag").unwrap_or_default().to_string(),
            text: LocalizedText::parse(reader, TextTraits::PROFNOTE),
        }
    }

    pub fn to_dom<'p>(&self, parent: &'p mut XmlElement) -> &'p mut XmlElement {
        let node = self.text.to_dom(parent, "profile-note");
        node.set_attribute("tag", &self.reftag);
        node
    }
}
