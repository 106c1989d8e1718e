//! XML input and output plumbing.
//!
//! - [`reader`]: positioned cursor used by the ingestion protocol
//! - [`writer`]: output tree built by the serialization protocol
//! - [`utils`]: tag, text and markup helpers over `roxmltree` nodes

mod reader;
mod utils;
mod writer;

pub use reader::XmlReader;
pub use utils::{element_depth, element_string, get_tag_name, inner_markup, xml_lang};
pub use writer::{escape_attribute, escape_text, XmlContent, XmlElement};
