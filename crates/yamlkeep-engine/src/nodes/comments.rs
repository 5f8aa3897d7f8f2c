/// Comment attachments shared by every node variant.
///
/// Comments are stored exactly as they appeared in source: a single line
/// starting with `#`, no trailing newline. Ownership follows source
/// proximity, not document semantics: a mapping value's leading comments
/// belong to the value node even though they render after the key's colon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comments {
    /// Comments on their own lines immediately before the node,
    /// in source order.
    pub leading: Vec<String>,
    /// At most one comment on the same line as the node's content.
    pub inline: Option<String>,
    /// Comments after the node's textual extent but still attached to it
    /// (before a closing delimiter, or after the last document in a stream).
    pub trailing: Vec<String>,
}

impl Comments {
    pub fn is_empty(&self) -> bool {
        self.leading.is_empty() && self.inline.is_none() && self.trailing.is_empty()
    }
}
