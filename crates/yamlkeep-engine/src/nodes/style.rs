/// Presentation style of a scalar, as recorded by the parser or requested
/// by a caller mutating the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarStyle {
    /// Unquoted: `foo`
    Plain,
    /// `'foo'`
    SingleQuoted,
    /// `"foo"`
    DoubleQuoted,
    /// `|` block scalar, line breaks preserved
    Literal,
    /// `>` block scalar, line breaks folded
    Folded,
}

impl ScalarStyle {
    /// Whether this style can carry literal line breaks in its rendered
    /// form. The quoted and plain styles cannot; embedded breaks get
    /// folded to a single space at emission time.
    pub fn is_block(self) -> bool {
        matches!(self, ScalarStyle::Literal | ScalarStyle::Folded)
    }
}

/// Presentation style of a sequence or mapping.
///
/// A declared `Block` style is not binding: empty collections always render
/// compactly, and anything nested inside a flow collection renders flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionStyle {
    /// Indentation-based multi-line rendering.
    Block,
    /// `{}` / `[]` delimited rendering.
    Flow,
}
