//! Comment- and format-preserving YAML serialization.
//!
//! This crate is the serialization half of a round-trip YAML editing
//! pipeline. An external parser turns source text into an annotated
//! [`Node`] tree that keeps the comments, quoting styles, anchors and
//! tags a plain structural model would discard. A caller may mutate that
//! tree; [`emit_yaml`] then renders it back to text that keeps the
//! human-authored formatting intact.
//!
//! ```
//! use yamlkeep_engine::{emit_yaml, CollectionStyle, Mapping, Node, Scalar};
//!
//! let mut value = Scalar::plain("baz");
//! value.comments.inline = Some("# foo".to_string());
//! let tree = Node::from(Mapping::new(
//!     CollectionStyle::Block,
//!     vec![(Scalar::plain("bar").into(), value.into())],
//! ));
//!
//! assert_eq!(emit_yaml(&tree).unwrap(), "bar: baz # foo\n");
//! ```

pub mod emit;
pub mod error;
pub mod nodes;
pub mod scalar;

pub use emit::emit_yaml;
pub use error::EmitError;
pub use nodes::{
    Alias, CollectionStyle, Comments, Document, Mapping, Node, Scalar, ScalarStyle, Sequence,
    Stream,
};
