//! Primitive scalar encoding.
//!
//! [`render`] converts a raw value plus its requested style into the
//! YAML-legal text the value would have as a single-node document: quoting
//! characters, escapes, block headers. It deliberately knows nothing about
//! the surrounding document; indentation and line folding are applied
//! afterwards by the restyler, which consumes this output through the
//! `(value, style)` interface only.
//!
//! Style selection is entirely caller-driven: a plain-styled scalar stays
//! plain and a quoted one stays quoted, even when the value carries an
//! explicit tag. This keeps a tag annotation attached to the presentation
//! the source used, rather than letting re-encoding shift the style bucket.

use crate::nodes::ScalarStyle;

/// Content indent used inside block scalar bodies. The restyler prepends
/// the current document indent on top of this.
const BLOCK_INDENT: &str = "  ";

/// Encode `value` in `style` as it would appear in a single-node document.
///
/// Quoted and plain renderings keep embedded line breaks literal; the
/// restyler folds them to spaces. Block renderings use a clip (`|`, `>`)
/// or strip (`|-`, `>-`) chomping indicator depending on whether the value
/// ends with a newline. Keep chomping (`|+`) is never produced: runs of
/// more than one trailing newline normalize to a single one, and a value
/// consisting only of line breaks normalizes to the empty string.
pub fn render(value: &str, style: ScalarStyle) -> String {
    match style {
        ScalarStyle::Plain => value.to_string(),
        ScalarStyle::SingleQuoted => format!("'{}'", value.replace('\'', "''")),
        ScalarStyle::DoubleQuoted => render_double_quoted(value),
        ScalarStyle::Literal => render_literal(value),
        ScalarStyle::Folded => render_folded(value),
    }
}

fn render_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            // Kept literal so the restyler can fold it.
            '\n' => out.push('\n'),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Split off the block header and body: clip chomping when the value ends
/// with a newline, strip chomping when it does not.
fn block_parts(value: &str) -> (&'static str, &str) {
    match value.strip_suffix('\n') {
        Some(body) => ("", body),
        None => ("-", value),
    }
}

fn render_literal(value: &str) -> String {
    let (chomp, body) = block_parts(value);
    let mut out = format!("|{chomp}");
    for line in body.split('\n') {
        out.push('\n');
        if !line.is_empty() {
            out.push_str(BLOCK_INDENT);
            out.push_str(line);
        }
    }
    out
}

/// Folded blocks join single line breaks into spaces when parsed, so a
/// real line break in the value must be written as a blank line.
fn render_folded(value: &str) -> String {
    let (chomp, body) = block_parts(value);
    let mut out = format!(">{chomp}");
    for (i, line) in body.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push('\n');
        if !line.is_empty() {
            out.push_str(BLOCK_INDENT);
            out.push_str(line);
        }
    }
    out
}
