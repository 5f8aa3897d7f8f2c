//! The annotated document tree.
//!
//! A [`Node`] is a YAML-shaped value plus everything a plain structural
//! model would throw away: comments, quoting and flow-style choices,
//! anchors and tags. Trees are produced by an external parser (or built
//! programmatically) and are read-only from the emitter's point of view;
//! serialization traverses them without mutation.
//!
//! Every variant embeds a [`Comments`] record. `Sequence` and `Mapping`
//! additionally carry an `inline_leading_comment` for the position right
//! after an opening flow delimiter, which has no block-style equivalent.

mod comments;
mod style;

pub use comments::Comments;
pub use style::{CollectionStyle, ScalarStyle};

/// A node in the annotated document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Scalar(Scalar),
    Alias(Alias),
    Sequence(Sequence),
    Mapping(Mapping),
    Document(Document),
    Stream(Stream),
}

/// A leaf value with its presentation style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scalar {
    pub value: String,
    pub style: ScalarStyle,
    pub anchor: Option<String>,
    pub tag: Option<String>,
    pub comments: Comments,
}

/// A reference to a previously anchored node, rendered as `*name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    /// Name of the anchor this alias refers to.
    pub anchor: String,
    pub comments: Comments,
}

/// An ordered list of child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub children: Vec<Node>,
    pub style: CollectionStyle,
    pub anchor: Option<String>,
    pub tag: Option<String>,
    /// Comment right after the opening `[`, only meaningful in flow style.
    pub inline_leading_comment: Option<String>,
    pub comments: Comments,
}

/// An ordered list of key/value pairs.
///
/// Pair order is insertion order. Key uniqueness is not enforced at this
/// layer; it is a semantic concern of whatever produced the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub entries: Vec<(Node, Node)>,
    pub style: CollectionStyle,
    pub anchor: Option<String>,
    pub tag: Option<String>,
    /// Comment right after the opening `{`, only meaningful in flow style.
    pub inline_leading_comment: Option<String>,
    pub comments: Comments,
}

/// One logical unit inside a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Box<Node>,
    /// `%TAG` directives declared for this document, in source order.
    pub tag_directives: Vec<(String, String)>,
    /// Whether the explicit `---` start marker may be omitted.
    pub implicit: bool,
    /// Whether the explicit `...` end marker may be omitted.
    pub implicit_end: bool,
    pub comments: Comments,
}

/// The top-level container for multi-document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stream {
    /// Child nodes, normally [`Node::Document`]s.
    pub children: Vec<Node>,
    pub comments: Comments,
}

impl Scalar {
    pub fn new(value: impl Into<String>, style: ScalarStyle) -> Self {
        Self {
            value: value.into(),
            style,
            anchor: None,
            tag: None,
            comments: Comments::default(),
        }
    }

    pub fn plain(value: impl Into<String>) -> Self {
        Self::new(value, ScalarStyle::Plain)
    }
}

impl Alias {
    pub fn new(anchor: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            comments: Comments::default(),
        }
    }
}

impl Sequence {
    pub fn new(style: CollectionStyle, children: Vec<Node>) -> Self {
        Self {
            children,
            style,
            anchor: None,
            tag: None,
            inline_leading_comment: None,
            comments: Comments::default(),
        }
    }
}

impl Mapping {
    pub fn new(style: CollectionStyle, entries: Vec<(Node, Node)>) -> Self {
        Self {
            entries,
            style,
            anchor: None,
            tag: None,
            inline_leading_comment: None,
            comments: Comments::default(),
        }
    }
}

impl Document {
    /// A document with no directives and both markers implicit.
    pub fn new(root: Node) -> Self {
        Self {
            root: Box::new(root),
            tag_directives: Vec::new(),
            implicit: true,
            implicit_end: true,
            comments: Comments::default(),
        }
    }
}

impl Stream {
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            children,
            comments: Comments::default(),
        }
    }
}

impl Node {
    /// Comment attachments of this node, whatever its variant.
    pub fn comments(&self) -> &Comments {
        match self {
            Node::Scalar(n) => &n.comments,
            Node::Alias(n) => &n.comments,
            Node::Sequence(n) => &n.comments,
            Node::Mapping(n) => &n.comments,
            Node::Document(n) => &n.comments,
            Node::Stream(n) => &n.comments,
        }
    }

    pub fn comments_mut(&mut self) -> &mut Comments {
        match self {
            Node::Scalar(n) => &mut n.comments,
            Node::Alias(n) => &mut n.comments,
            Node::Sequence(n) => &mut n.comments,
            Node::Mapping(n) => &mut n.comments,
            Node::Document(n) => &mut n.comments,
            Node::Stream(n) => &mut n.comments,
        }
    }

    /// The anchor *defined* by this node, if any. An alias's anchor is a
    /// reference, not a definition, so it is not reported here.
    pub fn anchor(&self) -> Option<&str> {
        match self {
            Node::Scalar(n) => n.anchor.as_deref(),
            Node::Sequence(n) => n.anchor.as_deref(),
            Node::Mapping(n) => n.anchor.as_deref(),
            _ => None,
        }
    }

    /// The explicit tag URI of this node, if any.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Scalar(n) => n.tag.as_deref(),
            Node::Sequence(n) => n.tag.as_deref(),
            Node::Mapping(n) => n.tag.as_deref(),
            _ => None,
        }
    }

    /// The comment right after an opening flow delimiter, for the two
    /// variants that can carry one.
    pub fn inline_leading_comment(&self) -> Option<&str> {
        match self {
            Node::Sequence(n) => n.inline_leading_comment.as_deref(),
            Node::Mapping(n) => n.inline_leading_comment.as_deref(),
            _ => None,
        }
    }

    /// Serialize this node to YAML text.
    ///
    /// Convenience wrapper around [`crate::emit_yaml`].
    pub fn to_yaml(&self) -> Result<String, crate::EmitError> {
        crate::emit_yaml(self)
    }
}

impl From<Scalar> for Node {
    fn from(n: Scalar) -> Self {
        Node::Scalar(n)
    }
}

impl From<Alias> for Node {
    fn from(n: Alias) -> Self {
        Node::Alias(n)
    }
}

impl From<Sequence> for Node {
    fn from(n: Sequence) -> Self {
        Node::Sequence(n)
    }
}

impl From<Mapping> for Node {
    fn from(n: Mapping) -> Self {
        Node::Mapping(n)
    }
}

impl From<Document> for Node {
    fn from(n: Document) -> Self {
        Node::Document(n)
    }
}

impl From<Stream> for Node {
    fn from(n: Stream) -> Self {
        Node::Stream(n)
    }
}
