use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input did not follow the batch format.
    #[error("malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// Node id outside `1..=len`.
    #[error("node {node} is out of range 1..={len}")]
    NodeOutOfRange { node: usize, len: usize },

    #[error("the root has no parent edge to update")]
    RootEdge,

    /// Parent pointers leave some node unreachable from the root.
    #[error("tree is disconnected: {reached} of {len} nodes reachable from the root")]
    Disconnected { reached: usize, len: usize },

    #[error("tree has no nodes")]
    EmptyTree,
}

impl Error {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}
