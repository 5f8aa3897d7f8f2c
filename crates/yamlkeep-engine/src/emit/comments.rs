//! Comment validation and subtree comment scans.

use crate::error::EmitError;
use crate::nodes::Node;

/// A well-formed comment is a single line beginning with `#`. Anything
/// else means the tree was not produced by a conforming parser.
pub(crate) fn validate_comment(comment: &str) -> Result<(), EmitError> {
    if comment.starts_with('#') && !comment.contains(['\r', '\n']) {
        Ok(())
    } else {
        Err(EmitError::MalformedComment(comment.to_string()))
    }
}

/// Whether any descendant of `node` carries an inline or inline-leading
/// comment. Such comments force line breaks mid-collection, so a container
/// holding one can never collapse onto a single output line.
pub(crate) fn subtree_has_inline_comments(node: &Node) -> bool {
    children(node).any(|child| {
        child.comments().inline.is_some()
            || child.inline_leading_comment().is_some()
            || subtree_has_inline_comments(child)
    })
}

fn children(node: &Node) -> Box<dyn Iterator<Item = &Node> + '_> {
    match node {
        Node::Scalar(_) | Node::Alias(_) => Box::new(std::iter::empty()),
        Node::Sequence(seq) => Box::new(seq.children.iter()),
        Node::Mapping(map) => Box::new(map.entries.iter().flat_map(|(k, v)| [k, v])),
        Node::Document(doc) => Box::new(std::iter::once(doc.root.as_ref())),
        Node::Stream(stream) => Box::new(stream.children.iter()),
    }
}
