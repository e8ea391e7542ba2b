//! Turn catalog names into safe file and directory names.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum EscapeStyle {
    /// Replace `/` and `\` with `_`.
    #[default]
    Underscore,
    /// Replace characters Windows rejects in file names with full-width look-alikes.
    Fullwidth,
}

pub fn escape_name(name: &str, style: EscapeStyle) -> String {
    match style {
        EscapeStyle::Underscore => name.replace(['/', '\\'], "_"),
        EscapeStyle::Fullwidth => name.chars().map(fullwidth).collect(),
    }
}

fn fullwidth(c: char) -> char {
    match c {
        '/' => '／',
        '\\' => '＼',
        ':' => '：',
        '*' => '＊',
        '?' => '？',
        '"' => '”',
        '<' => '＜',
        '>' => '＞',
        '|' => '｜',
        other => other,
    }
}
