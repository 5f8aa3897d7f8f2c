use thiserror::Error;

/// Fatal serialization errors.
///
/// These indicate a malformed input tree, not a transient condition:
/// callers should treat them as integration bugs in whatever produced the
/// tree. Emission never returns partial output; on error the buffer is
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EmitError {
    /// A comment string was not a single line starting with `#`.
    #[error("malformed comment (expected a single line starting with '#'): {0:?}")]
    MalformedComment(String),
}
