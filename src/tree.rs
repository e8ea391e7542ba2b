//! ASCII listing of the exported directory tree.

use anyhow::{Context, Result};
use camino::Utf8Path;
use walkdir::WalkDir;

/// Render `root` and everything below it as an ASCII tree, sorted by name.
/// Directories are suffixed with `/`.
pub fn render_tree(root: &Utf8Path) -> Result<String> {
    let mut entries: Vec<(usize, String)> = Vec::new();
    for entry in WalkDir::new(root.as_std_path())
        .min_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Walk {}", root))?;
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().is_dir() {
            name.push('/');
        }
        entries.push((entry.depth(), name));
    }

    let mut out = format!("{}\n", root);
    // For each ancestor level: whether more siblings follow it.
    let mut open: Vec<bool> = Vec::new();
    for (i, (depth, name)) in entries.iter().enumerate() {
        let last = entries[i + 1..]
            .iter()
            .take_while(|(d, _)| d >= depth)
            .all(|(d, _)| d != depth);
        open.truncate(depth - 1);
        for more in &open {
            out.push_str(if *more { "│  " } else { "   " });
        }
        out.push_str(if last { "└─ " } else { "├─ " });
        out.push_str(name);
        out.push('\n');
        open.push(!last);
    }
    Ok(out)
}
