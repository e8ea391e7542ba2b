use fmcatalog::comments::{StripOptions, strip_comments};
use fmcatalog::escape::{EscapeStyle, escape_name};

#[test]
fn strips_block_then_line_comments() {
    let text = "foo(); // comment\n/* block\ncomment */\nbar();";
    assert_eq!(
        strip_comments(text, StripOptions::default()).join("\n"),
        "foo();\nbar();"
    );
}

#[test]
fn blank_and_comment_only_text_yields_nothing() {
    assert!(strip_comments("", StripOptions::default()).is_empty());
    assert!(strip_comments("   \n\t", StripOptions::default()).is_empty());
    assert!(strip_comments("// only\r/* and */", StripOptions::default()).is_empty());
}

#[test]
fn carriage_returns_split_lines_and_trailing_space_is_trimmed() {
    let lines = strip_comments("  a  \r\r\n  b\t", StripOptions::default());
    assert_eq!(lines, vec!["  a", "  b"]);
}

#[test]
fn keep_line_comments_still_removes_blocks() {
    let opts = StripOptions {
        keep_line_comments: true,
    };
    assert_eq!(
        strip_comments("a /* x */ // y", opts),
        vec!["a  // y"]
    );
}

#[test]
fn escape_styles() {
    assert_eq!(escape_name(r"a/b\c:d", EscapeStyle::Underscore), "a_b_c:d");
    assert_eq!(
        escape_name(r#"a/b\c:d*e?f"g<h>i|j"#, EscapeStyle::Fullwidth),
        "a／b＼c：d＊e？f”g＜h＞i｜j"
    );
}
