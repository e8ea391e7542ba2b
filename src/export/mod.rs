//! Catalog export: one directory per group, one text file per script.
//!
//! - [`render`] – Step indentation and script file writing

pub mod render;

pub use render::{render_script, script_file_path, write_script};

use crate::comments::StripOptions;
use crate::escape::{EscapeStyle, escape_name};
use crate::model::*;
use anyhow::{Context, Result};
use camino::Utf8Path;
use tracing::{debug, info};

/// Default number of spaces per indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub indent_width: usize,
    pub escape: EscapeStyle,
    pub strip: StripOptions,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            escape: EscapeStyle::default(),
            strip: StripOptions::default(),
        }
    }
}

/// Export a parsed catalog below `output_root`.
///
/// The root directory is created if needed. The catalog element itself is
/// walked as a group, so its contents land in
/// `output_root/<catalog name or UnnamedGroup>`.
pub fn export_catalog(
    catalog: &Catalog,
    output_root: impl AsRef<Utf8Path>,
    options: &ExportOptions,
) -> Result<ExportSummary> {
    let output_root = output_root.as_ref();
    std::fs::create_dir_all(output_root.as_std_path())
        .with_context(|| format!("Could not create output folder {}", output_root))?;

    let mut summary = ExportSummary {
        output_root: output_root.to_path_buf(),
        ..ExportSummary::default()
    };
    walk_group(&catalog.root, output_root, options, &mut summary)?;

    if summary.scripts == 0 {
        info!("No scripts found to export.");
    } else {
        info!("Exported {} scripts to {}", summary.scripts, output_root);
    }
    Ok(summary)
}

/// Create the directory for `group` under `destination` and export its
/// children into it, recursing into nested groups.
pub fn walk_group(
    group: &Group,
    destination: &Utf8Path,
    options: &ExportOptions,
    summary: &mut ExportSummary,
) -> Result<()> {
    let dir = destination.join(escape_name(group.display_name(), options.escape));
    std::fs::create_dir_all(dir.as_std_path())
        .with_context(|| format!("Create directory {}", dir))?;
    summary.groups += 1;
    debug!("group {}", dir);

    for item in &group.items {
        match item {
            CatalogItem::Group(child) => {
                walk_group(child, &dir, options, summary)?;
            }
            CatalogItem::Script(script) => {
                let (path, lines) = write_script(script, &dir, options)?;
                summary.scripts += 1;
                summary.lines += lines;
                summary.files.push(path);
            }
        }
    }
    Ok(())
}
