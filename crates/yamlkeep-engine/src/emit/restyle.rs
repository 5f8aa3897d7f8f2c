//! Scalar restyling.
//!
//! The scalar renderer produces the encoding a value would have as a
//! single-node document. Before that text can be spliced into a larger
//! document it needs two adjustments: line breaks that the style cannot
//! carry literally are folded into spaces, and block-scalar continuation
//! lines are reindented so nested content lines up under its container.

use std::sync::OnceLock;

use regex::Regex;

use crate::nodes::ScalarStyle;

/// A line break with the whitespace runs around it.
fn fold_regex() -> &'static Regex {
    static FOLD_REGEX: OnceLock<Regex> = OnceLock::new();
    FOLD_REGEX.get_or_init(|| Regex::new(r"\s*\n\s*").expect("Invalid fold regex"))
}

/// Trailing spaces or tabs before a line break.
fn trailing_ws_regex() -> &'static Regex {
    static TRAILING_WS_REGEX: OnceLock<Regex> = OnceLock::new();
    TRAILING_WS_REGEX.get_or_init(|| Regex::new(r"[ \t]+\n").expect("Invalid trailing-ws regex"))
}

/// Adjust a rendered scalar for splicing at the current indentation.
///
/// The single trailing terminator newline of the primitive rendering is
/// removed first; the output state machine supplies line termination. No
/// line in the result ends in spaces or tabs.
pub(crate) fn restyle(rendered: &str, style: ScalarStyle, indent: &str) -> String {
    let rendered = rendered.strip_suffix('\n').unwrap_or(rendered);
    let adjusted = if style.is_block() {
        // Continuation lines carry the current indent; the renderer's own
        // content indent rides on top of it.
        rendered.replace('\n', &format!("\n{indent}"))
    } else {
        fold_regex().replace_all(rendered, " ").into_owned()
    };
    trailing_ws_regex().replace_all(&adjusted, "\n").into_owned()
}
