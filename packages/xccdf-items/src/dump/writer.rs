//! YAML summary of an item tree.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::text::truncate;
use crate::config::{DUMP_TEXT_WIDTH, XCCDF_NAMESPACE};
use crate::document::Document;
use crate::error::{Result, XccdfError};
use crate::item::{Item, ItemId};
use crate::text::preferred;
use crate::types::{ItemKind, StatusType};

#[derive(Debug, Serialize)]
struct YamlDocument<'a> {
    namespace: &'static str,
    items: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    registered_ids: Vec<&'a str>,
    root: YamlItem<'a>,
}

#[derive(Debug, Serialize)]
struct YamlItem<'a> {
    kind: ItemKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    status: StatusType,
    selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    platforms: Vec<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<YamlItem<'a>>,
}

fn yaml_item<'a>(document: &'a Document, id: ItemId, item: &'a Item) -> YamlItem<'a> {
    YamlItem {
        kind: item.kind(),
        id: item.id.as_deref(),
        title: preferred(&item.title, None).map(|t| truncate(&t.plain_text(), DUMP_TEXT_WIDTH)),
        status: item.current_status(),
        selected: item.flags.selected,
        version: item.version.as_deref(),
        platforms: item.platforms.iter().map(String::as_str).collect(),
        children: document
            .children(id)
            .into_iter()
            .filter_map(|child| document.get(child).map(|c| yaml_item(document, child, c)))
            .collect(),
    }
}

/// Indent YAML sequences under their parent key.
///
/// serde_yaml_ng places sequence items (`- `) at the same indent as their
/// parent key; this adds two spaces per open sequence.
fn indent_yaml_sequences(yaml: &str) -> String {
    let mut result: Vec<String> = Vec::new();
    let mut seq_indents: Vec<usize> = Vec::new();

    for line in yaml.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            result.push(line.to_string());
            continue;
        }
        let indent = line.len() - trimmed.len();

        while let Some(&seq_indent) = seq_indents.last() {
            if indent < seq_indent || (indent == seq_indent && !trimmed.starts_with("- ")) {
                seq_indents.pop();
            } else {
                break;
            }
        }
        if trimmed.starts_with("- ") && seq_indents.last() != Some(&indent) {
            seq_indents.push(indent);
        }

        let extra = seq_indents.len() * 2;
        result.push(format!("{}{}", " ".repeat(indent + extra), trimmed));
    }

    result.join("\n")
}

/// Generate a YAML summary of `document`.
///
/// # Errors
/// Returns `ItemNotFound` for an empty document and `YamlSerialization` if
/// serialization fails.
pub fn generate_yaml(document: &Document) -> Result<String> {
    let root_id = document
        .root()
        .ok_or_else(|| XccdfError::ItemNotFound("document root".to_string()))?;
    let root = &document[root_id];

    let registered_ids = root
        .as_benchmark()
        .map(|data| data.registry.ids())
        .unwrap_or_default();
    let summary = YamlDocument {
        namespace: XCCDF_NAMESPACE,
        items: document.len(),
        registered_ids,
        root: yaml_item(document, root_id, root),
    };

    let yaml = indent_yaml_sequences(&serde_yaml_ng::to_string(&summary)?);
    let lines: Vec<&str> = yaml.lines().map(str::trim_end).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}

/// Save the YAML summary of `document` to `path`.
///
/// Writes to a temporary file next to `path`, syncs it, then renames it
/// into place.
///
/// # Errors
/// Returns an error if the summary cannot be generated or written.
pub fn save_yaml(document: &Document, path: &Path) -> Result<()> {
    let content = generate_yaml(document)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "summary.yaml".to_string());
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    Ok(())
}
