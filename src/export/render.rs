//! Script rendering: steps to indented, comment-free lines.

use super::ExportOptions;
use crate::comments::strip_comments;
use crate::escape::escape_name;
use crate::model::*;
use crate::step_kind::{StepKind, apply_delta, is_comment_step};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::{debug, trace};

/// Render a script's steps into output lines, indentation included.
pub fn render_script(script: &Script, options: &ExportOptions) -> Vec<String> {
    let indent_unit = " ".repeat(options.indent_width);
    let mut depth: usize = 0;
    let mut out = Vec::new();

    for step in &script.steps {
        if !step.enabled {
            continue;
        }
        let Some(text) = step.text.as_deref().filter(|t| !t.is_empty()) else {
            continue;
        };
        if is_comment_step(&step.name) {
            continue;
        }

        let kind = StepKind::classify(&step.name);
        depth = apply_delta(depth, kind.before_delta());

        let lines = strip_comments(text, options.strip);
        if lines.is_empty() {
            trace!(step = %step.name, "step has no text after comment stripping");
            continue;
        }
        let prefix = indent_unit.repeat(depth);
        out.extend(lines.into_iter().map(|line| format!("{}{}", prefix, line)));

        depth = apply_delta(depth, kind.after_delta());
    }
    out
}

/// Output path of a script inside `dir`.
pub fn script_file_path(script: &Script, dir: &Utf8Path, options: &ExportOptions) -> Utf8PathBuf {
    let file_name = escape_name(script.display_name(), options.escape);
    dir.join(format!("{}.txt", file_name))
}

/// Render a script and write it to `<dir>/<escaped name>.txt`, replacing any
/// existing file. Returns the written path and the number of lines.
pub fn write_script(
    script: &Script,
    dir: &Utf8Path,
    options: &ExportOptions,
) -> Result<(Utf8PathBuf, usize)> {
    let path = script_file_path(script, dir, options);
    let lines = render_script(script, options);

    let file = File::create(path.as_std_path()).with_context(|| format!("Create {}", path))?;
    let mut writer = BufWriter::new(file);
    for line in &lines {
        writeln!(writer, "{}", line).with_context(|| format!("Write {}", path))?;
    }
    writer.flush().with_context(|| format!("Write {}", path))?;

    debug!(lines = lines.len(), "wrote {}", path);
    Ok((path, lines.len()))
}
