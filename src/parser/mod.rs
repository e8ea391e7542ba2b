//! FileMaker script catalog XML parser.
//!
//! Provides [`CatalogParser`] to load a FileMaker XML export, locate its
//! `<ScriptCatalog>` element, and turn the group/script/step hierarchy into
//! the strongly-typed [`Catalog`] model. Sub-modules:
//!
//! - [`source`] – File I/O abstraction (filesystem vs. in-memory)
//! - [`helpers`] – Attribute and child-element lookups

pub mod helpers;
pub mod source;

pub use source::*;

use crate::model::*;
use anyhow::{Context, Result, anyhow};
use camino::Utf8Path;
use roxmltree::{Document, Node, ParsingOptions};
use tracing::debug;

/// Tag of the element the export is rooted at.
pub const CATALOG_TAG: &str = "ScriptCatalog";

/// Catalog parser. Generic over [`ContentSource`] so tests can feed it XML
/// held in memory.
pub struct CatalogParser<S: ContentSource> {
    source: S,
}

impl<S: ContentSource> CatalogParser<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Read and parse a catalog export file.
    pub fn parse_catalog_file(&mut self, path: impl AsRef<Utf8Path>) -> Result<Catalog> {
        let path = path.as_ref();
        let text = self.source.read_to_string(path)?;
        parse_catalog_from_text(&text, Some(path.as_str()))
    }
}

/// Parse a catalog from XML text already in memory.
pub fn parse_catalog_from_text(text: &str, path_hint: Option<&str>) -> Result<Catalog> {
    let hint = path_hint.unwrap_or("<catalog>");
    // FileMaker exports may carry a DOCTYPE; roxmltree rejects it unless allowed.
    let opts = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, opts)
        .with_context(|| format!("Failed to parse XML {}", hint))?;
    let catalog_node = doc
        .descendants()
        .find(|n| n.is_element() && n.has_tag_name(CATALOG_TAG))
        .ok_or_else(|| anyhow!("No <{}> element found in {}", CATALOG_TAG, hint))?;
    let catalog = Catalog {
        root: parse_group(catalog_node),
    };
    debug!(
        scripts = catalog.script_count(),
        "parsed catalog from {}", hint
    );
    Ok(catalog)
}

/// Parse a `<Group>` (or the catalog element itself). Elements other than
/// `<Group>` and `<Script>` are ignored.
pub fn parse_group(node: Node<'_, '_>) -> Group {
    let items = node
        .children()
        .filter(|c| c.is_element())
        .filter_map(|c| match c.tag_name().name() {
            "Group" => Some(CatalogItem::Group(parse_group(c))),
            "Script" => Some(CatalogItem::Script(parse_script(c))),
            _ => None,
        })
        .collect();
    Group {
        name: node.attribute("name").map(|s| s.to_string()),
        items,
    }
}

/// Parse a `<Script>`, collecting every nested `<Step>` in document order.
pub fn parse_script(node: Node<'_, '_>) -> Script {
    let steps = node
        .descendants()
        .filter(|n| n.is_element() && n.has_tag_name("Step"))
        .map(parse_step)
        .collect();
    Script {
        name: node.attribute("name").map(|s| s.to_string()),
        steps,
    }
}

pub fn parse_step(node: Node<'_, '_>) -> Step {
    Step {
        name: node.attribute("name").unwrap_or("").to_string(),
        enabled: helpers::is_enabled(node),
        text: helpers::step_text(node),
    }
}
