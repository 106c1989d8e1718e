//! XCCDF items - the node layer of an XCCDF benchmark document.
//!
//! This crate builds the typed item tree of an XCCDF document (benchmarks,
//! groups, rules, values, profiles and test results), keeps a per-document
//! identifier registry, resolves status histories and serializes the tree
//! back to XML.
//!
//! # Example
//!
//! ```
//! use xccdf_items::{Document, StatusType};
//!
//! let xml = r#"<Benchmark id="b">
//!     <Rule id="r"><status>draft</status><title>Disable telnet</title></Rule>
//! </Benchmark>"#;
//!
//! let doc = Document::from_xml(xml).unwrap();
//! let rule = doc.lookup("r").unwrap();
//! assert_eq!(doc[rule].current_status(), StatusType::Draft);
//! assert!(doc.to_xml().unwrap().contains("<title>Disable telnet</title>"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Vocabulary constants and token parsing
//! - [`types`]: Closed enumerations (kinds, levels, operators, ...)
//! - [`error`]: Error types and Result alias
//! - [`text`]: Localized text fragments
//! - [`records`]: Status, reference, warning, fix, check and other records
//! - [`item`]: Item nodes and per-kind payloads
//! - [`ids`]: Identifier registry
//! - [`document`]: Arena owning the items of one document
//! - [`xml`]: Positioned reader and output tree
//! - [`parse`]: Extensible element handler system for ingestion
//! - [`serialize`]: XML output
//! - [`dump`]: Text and YAML summaries
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod document;
pub mod dump;
pub mod error;
pub mod ids;
pub mod item;
pub mod parse;
pub mod records;
pub mod serialize;
pub mod text;
pub mod types;
pub mod xml;

pub use document::Document;
pub use error::{Result, XccdfError};
pub use ids::IdRegistry;
pub use item::{Item, ItemFlags, ItemId, ItemPayload};
pub use records::{current_status, Status};
pub use text::{LocalizedText, TextTraits};
pub use types::{ItemKind, StatusType};
