//! The annotated-tree serializer.
//!
//! [`emit_yaml`] walks a [`Node`] tree depth-first and reproduces YAML
//! text, weaving the tree's comment attachments back into the places the
//! comment-placement rules assign them. All whitespace goes through the
//! output state machine in [`output`]; scalar text is produced by the
//! renderer primitive and adjusted by [`restyle`]; tags compact through
//! the per-document handle table in [`tags`].
//!
//! One emitter instance serves exactly one call. Indent depth, the flow
//! flag and the active tag table are mutated around recursive calls with
//! save-run-restore helpers so sibling subtrees cannot observe each
//! other's state, even on the error path.

mod comments;
mod output;
mod restyle;
mod tags;

use crate::error::EmitError;
use crate::nodes::{
    Alias, CollectionStyle, Document, Mapping, Node, Scalar, Sequence, Stream,
};
use crate::scalar;
use comments::{subtree_has_inline_comments, validate_comment};
use output::Output;
use restyle::restyle;
use tags::TagMap;

/// Serialize a node tree to YAML text.
///
/// Pure and total: the same tree always yields the same text, and on error
/// no partial output is exposed. Errors mean the tree violates the
/// producer contract (malformed comment strings), not a transient
/// condition.
pub fn emit_yaml(node: &Node) -> Result<String, EmitError> {
    let mut emitter = Emitter::new();
    emitter.emit_node(node, EmitFlags::default())?;
    Ok(emitter.out.into_string())
}

/// Per-call adjustments to the shared emission prologue.
#[derive(Debug, Clone, Copy, Default)]
struct EmitFlags {
    /// The node's inline comment is handled by the caller (mapping keys,
    /// whose comment is deferred until after the colon).
    skip_inline_comment: bool,
    /// The node's leading comments were already printed by the caller
    /// (sequence lookahead: comments go before the bullet marker).
    leading_announced: bool,
}

struct Emitter {
    out: Output,
    /// Whether the enclosing context renders flow.
    flow: bool,
    /// Handle table active for the current document's subtree.
    tagmap: TagMap,
}

impl Emitter {
    fn new() -> Self {
        Self {
            out: Output::new(),
            flow: false,
            tagmap: TagMap::with_defaults(),
        }
    }

    fn emit_node(&mut self, node: &Node, flags: EmitFlags) -> Result<(), EmitError> {
        if !flags.leading_announced {
            for comment in &node.comments().leading {
                self.comment_line(comment)?;
            }
        }
        if let Some(anchor) = node.anchor() {
            self.out.print(&format!("&{anchor}"));
            self.out.space();
        }
        if let Some(tag) = node.tag() {
            match self.tagmap.compact(tag) {
                Some((handle, suffix)) => self.out.print(&format!("{handle}{suffix}")),
                None => self.out.print(&format!("!<{tag}>")),
            }
            self.out.space();
        }
        match node {
            Node::Scalar(scalar) => self.emit_scalar(scalar, flags)?,
            Node::Alias(alias) => self.emit_alias(alias, flags)?,
            Node::Sequence(seq) => self.emit_sequence(seq)?,
            Node::Mapping(map) => self.emit_mapping(map)?,
            Node::Document(doc) => self.emit_document(doc)?,
            Node::Stream(stream) => self.emit_stream(stream)?,
        }
        for comment in &node.comments().trailing {
            self.out.newline();
            self.comment_line(comment)?;
        }
        Ok(())
    }

    fn emit_scalar(&mut self, scalar: &Scalar, flags: EmitFlags) -> Result<(), EmitError> {
        let rendered = scalar::render(&scalar.value, scalar.style);
        let text = restyle(&rendered, scalar.style, &self.out.indent_string());
        self.out.print(&text);
        if !flags.skip_inline_comment
            && let Some(comment) = &scalar.comments.inline
        {
            self.inline_comment(comment)?;
        }
        Ok(())
    }

    fn emit_alias(&mut self, alias: &Alias, flags: EmitFlags) -> Result<(), EmitError> {
        self.out.print(&format!("*{}", alias.anchor));
        if !flags.skip_inline_comment
            && let Some(comment) = &alias.comments.inline
        {
            self.inline_comment(comment)?;
        }
        Ok(())
    }

    fn emit_sequence(&mut self, seq: &Sequence) -> Result<(), EmitError> {
        let flow = self.flow || seq.style == CollectionStyle::Flow || seq.children.is_empty();
        self.with_flow(flow, |em| {
            if flow {
                em.emit_flow_sequence(seq)
            } else {
                em.emit_block_sequence(seq)
            }
        })
    }

    fn emit_flow_sequence(&mut self, seq: &Sequence) -> Result<(), EmitError> {
        self.out.print("[");
        if let Some(comment) = &seq.inline_leading_comment {
            self.out.space();
            self.comment_line(comment)?;
        }
        for (i, child) in seq.children.iter().enumerate() {
            if i > 0 {
                self.out.print(",");
                self.out.space();
            }
            self.emit_node(child, EmitFlags::default())?;
            // An inline comment runs to the end of the line; break so the
            // next delimiter is not swallowed.
            if child.comments().inline.is_some() {
                self.out.newline();
            }
        }
        self.out.print("]");
        if let Some(comment) = &seq.comments.inline {
            self.inline_comment(comment)?;
        }
        Ok(())
    }

    fn emit_block_sequence(&mut self, seq: &Sequence) -> Result<(), EmitError> {
        self.out.newline();
        for child in &seq.children {
            // Lookahead: the bullet must open the line, so the element's
            // leading comments print before it and the recursive emit is
            // told not to repeat them.
            for comment in &child.comments().leading {
                self.comment_line(comment)?;
            }
            self.out.print("- ");
            self.out.pseudo_indent();
            let flags = EmitFlags {
                leading_announced: true,
                ..EmitFlags::default()
            };
            if self.is_single_line(child) {
                self.emit_node(child, flags)?;
            } else {
                self.indented(|em| em.emit_node(child, flags))?;
            }
            if let Some(comment) = &seq.comments.inline {
                if child.comments().inline.is_some() {
                    self.out.newline();
                }
                self.inline_comment(comment)?;
            }
            self.out.newline();
        }
        Ok(())
    }

    fn emit_mapping(&mut self, map: &Mapping) -> Result<(), EmitError> {
        let flow = self.flow || map.style == CollectionStyle::Flow || map.entries.is_empty();
        self.with_flow(flow, |em| {
            if flow {
                em.emit_flow_mapping(map)
            } else {
                em.emit_block_mapping(map)
            }
        })
    }

    fn emit_flow_mapping(&mut self, map: &Mapping) -> Result<(), EmitError> {
        self.out.print("{");
        if let Some(comment) = &map.inline_leading_comment {
            // The opener comment ends the line; the first entry starts a
            // fresh, fully indented one instead of taking the pad space.
            self.out.space();
            self.comment_line(comment)?;
        } else if !map.entries.is_empty() {
            self.out.space();
        }
        let mut broke_after_entry = false;
        for (i, (key, value)) in map.entries.iter().enumerate() {
            if i > 0 {
                self.out.print(",");
                self.out.space();
            }
            let key_flags = EmitFlags {
                skip_inline_comment: true,
                ..EmitFlags::default()
            };
            self.emit_node(key, key_flags)?;
            self.out.print(":");
            // The key's inline comment documents the whole entry, so it
            // goes after the colon rather than after the key token.
            if let Some(comment) = &key.comments().inline {
                self.out.space();
                self.comment_line(comment)?;
            } else {
                self.out.space();
            }
            self.emit_node(value, EmitFlags::default())?;
            // Inline and trailing comments both end the entry's line; the
            // closing brace must not pad itself onto a fresh line's indent.
            broke_after_entry = value.comments().inline.is_some()
                || !value.comments().trailing.is_empty();
            if value.comments().inline.is_some() {
                self.out.newline();
            }
        }
        if !map.entries.is_empty() && !broke_after_entry {
            self.out.space();
        }
        self.out.print("}");
        if let Some(comment) = &map.comments.inline {
            self.inline_comment(comment)?;
        }
        Ok(())
    }

    fn emit_block_mapping(&mut self, map: &Mapping) -> Result<(), EmitError> {
        self.out.newline();
        for (key, value) in &map.entries {
            let key_flags = EmitFlags {
                skip_inline_comment: true,
                ..EmitFlags::default()
            };
            self.emit_node(key, key_flags)?;
            self.out.print(":");
            if let Some(comment) = &key.comments().inline {
                // Deferred key comment ends the line; the value moves
                // below it.
                self.out.space();
                self.comment_line(comment)?;
                if has_bullet(value) {
                    self.emit_node(value, EmitFlags::default())?;
                } else {
                    self.indented(|em| em.emit_node(value, EmitFlags::default()))?;
                }
            } else {
                self.out.space();
                if self.is_single_line(value) || has_bullet(value) {
                    self.emit_node(value, EmitFlags::default())?;
                } else {
                    self.indented(|em| {
                        em.out.newline();
                        em.emit_node(value, EmitFlags::default())
                    })?;
                }
            }
            if let Some(comment) = &map.comments.inline {
                if value.comments().inline.is_some() {
                    self.out.newline();
                }
                self.inline_comment(comment)?;
            }
            self.out.newline();
        }
        Ok(())
    }

    fn emit_document(&mut self, doc: &Document) -> Result<(), EmitError> {
        for (handle, prefix) in &doc.tag_directives {
            self.out.newline();
            self.out.print(&format!("%TAG {handle} {prefix}"));
            self.out.newline();
        }
        if !doc.implicit {
            self.out.newline();
            self.out.print("---");
            self.out.space();
        }
        let scoped = TagMap::scoped(&doc.tag_directives);
        let saved = std::mem::replace(&mut self.tagmap, scoped);
        let result = self.emit_node(&doc.root, EmitFlags::default());
        self.tagmap = saved;
        result?;
        if !doc.implicit_end {
            self.out.newline();
            self.out.print("...");
        }
        self.out.newline();
        Ok(())
    }

    fn emit_stream(&mut self, stream: &Stream) -> Result<(), EmitError> {
        for child in &stream.children {
            self.emit_node(child, EmitFlags::default())?;
        }
        Ok(())
    }

    /// A comment on its own output line (or finishing the current one).
    fn comment_line(&mut self, comment: &str) -> Result<(), EmitError> {
        validate_comment(comment)?;
        self.out.print(comment);
        self.out.newline();
        Ok(())
    }

    /// A comment glued to the preceding content by one space. No line
    /// break follows; the enclosing construct decides when the line ends.
    fn inline_comment(&mut self, comment: &str) -> Result<(), EmitError> {
        validate_comment(comment)?;
        self.out.space();
        self.out.print(comment);
        Ok(())
    }

    /// Whether `node` renders in flow form in the current context.
    fn is_flow(&self, node: &Node) -> bool {
        match node {
            Node::Scalar(_) | Node::Alias(_) => true,
            Node::Sequence(seq) => {
                self.flow || seq.style == CollectionStyle::Flow || seq.children.is_empty()
            }
            Node::Mapping(map) => {
                self.flow || map.style == CollectionStyle::Flow || map.entries.is_empty()
            }
            Node::Document(_) | Node::Stream(_) => false,
        }
    }

    /// Whether `node` can share an output line with a bullet marker or a
    /// mapping key. Requires flow-renderability and the absence of any
    /// comment that would force a line break: leading or trailing
    /// comments, an inline-leading comment of its own, or inline comments
    /// anywhere in its subtree.
    fn is_single_line(&self, node: &Node) -> bool {
        self.is_flow(node)
            && node.comments().leading.is_empty()
            && node.comments().trailing.is_empty()
            && node.inline_leading_comment().is_none()
            && !subtree_has_inline_comments(node)
    }

    fn indented(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<(), EmitError>,
    ) -> Result<(), EmitError> {
        self.out.push_depth();
        let result = f(self);
        self.out.pop_depth();
        result
    }

    fn with_flow(
        &mut self,
        flow: bool,
        f: impl FnOnce(&mut Self) -> Result<(), EmitError>,
    ) -> Result<(), EmitError> {
        let saved = std::mem::replace(&mut self.flow, flow);
        let result = f(self);
        self.flow = saved;
        result
    }
}

/// A non-empty sequence renders its bullets on fresh lines naturally, so
/// it may follow a mapping colon without extra indentation.
fn has_bullet(node: &Node) -> bool {
    matches!(node, Node::Sequence(seq) if !seq.children.is_empty())
}
