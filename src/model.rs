use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Label used for a group without a `name` attribute.
pub const DEFAULT_GROUP_NAME: &str = "UnnamedGroup";
/// Label used for a script without a `name` attribute.
pub const DEFAULT_SCRIPT_NAME: &str = "UnnamedScript";

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

/// The `<ScriptCatalog>` element of a FileMaker XML export.
///
/// The catalog is walked like any other group, so it carries the same
/// optional name and ordered item list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    pub root: Group,
}

impl Catalog {
    /// Total number of scripts anywhere in the catalog.
    pub fn script_count(&self) -> usize {
        self.root.script_count()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Group
// ────────────────────────────────────────────────────────────────────────────

/// A folder-like container of scripts and nested groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub name: Option<String>,
    /// Child groups and scripts in document order.
    pub items: Vec<CatalogItem>,
}

impl Group {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_GROUP_NAME)
    }

    pub fn script_count(&self) -> usize {
        self.items
            .iter()
            .map(|item| match item {
                CatalogItem::Group(g) => g.script_count(),
                CatalogItem::Script(_) => 1,
            })
            .sum()
    }
}

/// A direct child of a [`Group`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogItem {
    Group(Group),
    Script(Script),
}

// ────────────────────────────────────────────────────────────────────────────
// Script / Step
// ────────────────────────────────────────────────────────────────────────────

/// A named script; one output text file per script.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Script {
    pub name: Option<String>,
    /// Every `<Step>` beneath the script element, depth-first.
    pub steps: Vec<Step>,
}

impl Script {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_SCRIPT_NAME)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// Step name such as `If`, `End Loop` or `Set Variable`. Empty when absent.
    pub name: String,
    pub enabled: bool,
    /// Text of the `<StepText>` child, if present.
    pub text: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// ExportSummary
// ────────────────────────────────────────────────────────────────────────────

/// What an export run produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportSummary {
    pub output_root: Utf8PathBuf,
    pub groups: usize,
    pub scripts: usize,
    pub lines: usize,
    pub files: Vec<Utf8PathBuf>,
}
