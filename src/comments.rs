//! Comment stripping for FileMaker step text.
//!
//! Block comments (`/* ... */`, possibly spanning lines) are removed first,
//! then trailing `//` line comments. Lines left blank are dropped. This is a
//! plain text pass, so comment markers inside string literals are stripped
//! as well.

use regex::Regex;
use std::sync::LazyLock;

static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("block comment regex must compile"));

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("line break regex must compile"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripOptions {
    /// Leave `//` comments in place and only remove block comments.
    pub keep_line_comments: bool,
}

/// Strip comments from `text` and return the non-blank lines that remain,
/// with trailing whitespace trimmed.
pub fn strip_comments(text: &str, options: StripOptions) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let without_blocks = BLOCK_COMMENT.replace_all(text, "");
    LINE_BREAK
        .split(&without_blocks)
        .map(|line| {
            if options.keep_line_comments {
                line
            } else {
                line.find("//").map_or(line, |idx| &line[..idx])
            }
        })
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim_end().to_string())
        .collect()
}
