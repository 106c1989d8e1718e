//! Localized text fragments.
//!
//! Titles, descriptions, questions, rationales and warnings are lists of
//! language-tagged fragments kept in document order. What a fragment may
//! contain (plain text or markup, value substitutions, an `override` flag)
//! depends on the field, expressed as [`TextTraits`].

use serde::Serialize;

use crate::xml::{XmlElement, XmlReader};

/// Capabilities of a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextTraits {
    /// Body may contain XHTML markup.
    pub html: bool,
    /// An `override` attribute is honoured.
    pub can_override: bool,
    /// Body may contain `<sub>` value substitutions.
    pub can_substitute: bool,
}

impl TextTraits {
    pub const PLAIN: Self = Self {
        html: false,
        can_override: true,
        can_substitute: false,
    };
    pub const HTML: Self = Self {
        html: true,
        can_override: true,
        can_substitute: false,
    };
    pub const PLAINSUB: Self = Self {
        html: false,
        can_override: true,
        can_substitute: true,
    };
    pub const HTMLSUB: Self = Self {
        html: true,
        can_override: true,
        can_substitute: true,
    };
    pub const NOTICE: Self = Self {
        html: true,
        can_override: false,
        can_substitute: false,
    };
    pub const PROFNOTE: Self = Self {
        html: true,
        can_override: false,
        can_substitute: true,
    };

    /// Whether the body is kept as markup rather than flattened text.
    #[must_use]
    pub fn keeps_markup(&self) -> bool {
        self.html || self.can_substitute
    }
}

/// A text fragment with an optional language tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalizedText {
    /// Language from `xml:lang`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Body; serialized markup when the traits keep markup.
    pub text: String,

    /// Whether this fragment replaces inherited ones instead of appending.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub overrides: bool,

    #[serde(skip)]
    pub traits: TextTraits,
}

impl LocalizedText {
    /// Create a fragment with the given traits.
    #[must_use]
    pub fn new(text: impl Into<String>, lang: Option<&str>, traits: TextTraits) -> Self {
        Self {
            lang: lang.map(str::to_string),
            text: text.into(),
            overrides: false,
            traits,
        }
    }

    /// Create a plain-text fragment.
    #[must_use]
    pub fn plain(text: impl Into<String>, lang: Option<&str>) -> Self {
        Self::new(text, lang, TextTraits::PLAIN)
    }

    /// Parse the element the reader is positioned on.
    pub fn parse(reader: &XmlReader<'_, '_>, traits: TextTraits) -> Self {
        let text = if traits.keeps_markup() {
            reader.inner_markup()
        } else {
            reader.element_string()
        };

        let overrides = traits.can_override && reader.bool_attribute("override").unwrap_or(false);

        Self {
            lang: reader.lang().map(str::to_string),
            text,
            overrides,
            traits,
        }
    }

    /// Append this fragment to `parent` as a child element named `name`.
    pub fn to_dom<'p>(&self, parent: &'p mut XmlElement, name: &str) -> &'p mut XmlElement {
        let child = parent.add_child(name);
        if let Some(lang) = &self.lang {
            child.set_attribute("xml:lang", lang);
        }
        if self.overrides {
            child.set_attribute("override", "true");
        }
        if self.traits.keeps_markup() {
            child.push_markup(&self.text);
        } else {
            child.push_text(&self.text);
        }
        child
    }

    /// Flattened text with markup stripped, for display.
    #[must_use]
    pub fn plain_text(&self) -> String {
        if !self.traits.keeps_markup() {
            return self.text.clone();
        }
        let wrapped = format!("<t>{}</t>", self.text);
        match roxmltree::Document::parse(&wrapped) {
            Ok(doc) => crate::xml::element_string(doc.root_element()),
            Err(_) => self.text.clone(),
        }
    }
}

/// Pick the fragment best matching `lang`.
///
/// Preference: exact language match, then a fragment without language, then
/// the first fragment.
#[must_use]
pub fn preferred<'a>(texts: &'a [LocalizedText], lang: Option<&str>) -> Option<&'a LocalizedText> {
    lang.and_then(|l| texts.iter().find(|t| t.lang.as_deref() == Some(l)))
        .or_else(|| texts.iter().find(|t| t.lang.is_none()))
        .or_else(|| texts.first())
}
