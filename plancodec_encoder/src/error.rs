use plancodec_types::NodeTag;
use thiserror::Error;

/// Reasons an encode is abandoned. None of them leave partial output with the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// The tree holds a kind with no emission routine. The tree producer and this encoder
    /// disagree about the kind catalog.
    #[error("could not serialize unrecognized node type: {tag:?}")]
    UnsupportedKind { tag: NodeTag },

    /// A literal-typed field holds something other than a literal.
    #[error("unrecognized literal node type: {tag:?}")]
    MalformedLiteral { tag: NodeTag },

    /// A length or count is too large for its wire field.
    #[error("{what} of length {len} does not fit its wire count")]
    CountOverflow { what: &'static str, len: usize },

    /// Arrays that share one count field disagree on their length.
    #[error("{what}: expected {expected} elements, found {actual}")]
    ParallelLengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T, E = EncodeError> = std::result::Result<T, E>;
