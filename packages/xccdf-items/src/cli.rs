//! Command-line interface for inspecting XCCDF documents.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::document::Document;
use crate::dump::{dump_item, generate_yaml, save_yaml};
use crate::error::{Result, XccdfError};
use crate::text::preferred;

/// XCCDF items - inspect and re-emit benchmark documents.
#[derive(Parser)]
#[command(name = "xccdf-items")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the item tree of a document.
    Dump {
        /// XCCDF document to read
        file: PathBuf,

        /// Print a YAML summary instead of the text tree
        #[arg(long)]
        yaml: bool,

        /// Write the YAML summary to this file
        #[arg(short, long, requires = "yaml")]
        output: Option<PathBuf>,
    },
    /// Parse a document and serialize it again.
    Emit {
        /// XCCDF document to read
        file: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Look up an item by id.
    Lookup {
        /// XCCDF document to read
        file: PathBuf,

        /// Item identifier
        id: String,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dump { file, yaml, output } => dump_command(&file, yaml, output.as_deref()),
        Commands::Emit { file, output } => emit_command(&file, output.as_deref()),
        Commands::Lookup { file, id } => lookup_command(&file, &id),
    }
}

fn load(file: &Path) -> Result<Document> {
    let xml = fs::read_to_string(file)?;
    Document::from_xml(&xml)
}

fn dump_command(file: &Path, yaml: bool, output: Option<&Path>) -> Result<()> {
    let document = load(file)?;

    if !yaml {
        let root = document
            .root()
            .ok_or_else(|| XccdfError::ItemNotFound("document root".to_string()))?;
        print!("{}", dump_item(&document, root));
        return Ok(());
    }

    match output {
        Some(path) => {
            save_yaml(&document, path)?;
            println!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => print!("{}", generate_yaml(&document)?),
    }
    Ok(())
}

fn emit_command(file: &Path, output: Option<&Path>) -> Result<()> {
    let xml = load(file)?.to_xml()?;

    match output {
        Some(path) => {
            fs::write(path, xml)?;
            println!("{} {}", style("Written to:").green().bold(), path.display());
        }
        None => print!("{xml}"),
    }
    Ok(())
}

fn lookup_command(file: &Path, id: &str) -> Result<()> {
    let document = load(file)?;
    let item_id = document
        .lookup(id)
        .ok_or_else(|| XccdfError::ItemNotFound(id.to_string()))?;
    let item = &document[item_id];

    println!(
        "{} {}",
        style(item.kind().element_name()).bold(),
        style(item.id_str()).cyan()
    );
    if let Some(title) = preferred(&item.title, None) {
        println!("  Title: {}", style(title.plain_text()).green());
    }
    println!("  Status: {}", item.current_status().as_str());
    if let Some(parent) = item.parent().and_then(|p| document.get(p)) {
        println!("  Parent: {}", parent.id_str());
    }
    let children = document.children(item_id).len();
    if children > 0 {
        println!("  Children: {children}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_dump() {
        let cli = Cli::parse_from(["xccdf-items", "dump", "benchmark.xml", "--yaml"]);

        let Commands::Dump { file, yaml, output } = cli.command else {
            panic!("expected dump");
        };
        assert_eq!(file, PathBuf::from("benchmark.xml"));
        assert!(yaml);
        assert!(output.is_none());
    }

    #[test]
    fn test_cli_parse_emit_with_output() {
        let cli = Cli::parse_from(["xccdf-items", "emit", "in.xml", "-o", "out.xml"]);

        let Commands::Emit { file, output } = cli.command else {
            panic!("expected emit");
        };
        assert_eq!(file, PathBuf::from("in.xml"));
        assert_eq!(output, Some(PathBuf::from("out.xml")));
    }

    #[test]
    fn test_cli_output_requires_yaml() {
        assert!(Cli::try_parse_from(["xccdf-items", "dump", "in.xml", "-o", "x.yaml"]).is_err());
    }

    #[test]
    fn test_cli_parse_lookup() {
        let cli = Cli::parse_from(["xccdf-items", "lookup", "in.xml", "xccdf_org.example_rule_one"]);

        let Commands::Lookup { id, .. } = cli.command else {
            panic!("expected lookup");
        };
        assert_eq!(id, "xccdf_org.example_rule_one");
    }
}
