//! Tree operation errors

use sb_registry::DropRejection;

use crate::NodeId;

/// Result type for tree operations
pub type TreeResult<T> = Result<T, TreeError>;

/// Tree operation errors
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// Drop rules refused the placement
    #[error("drop rejected: {0}")]
    Rejected(DropRejection),

    /// Drop rules refused the placement without a reason
    #[error("drop rejected")]
    RejectedSilently,

    #[error("node not found: {0}")]
    NotFound(NodeId),

    /// Document already has a root node
    #[error("document already has a root ({0})")]
    RootOccupied(NodeId),

    /// Node would become its own ancestor
    #[error("cannot move {0} into its own subtree")]
    CycleRejected(NodeId),

    #[error("document is limited to {0} nodes")]
    CapacityExceeded(usize),

    #[error("document is limited to {0} levels of nesting")]
    DepthExceeded(usize),

    /// Saved document violates tree invariants
    #[error("invalid document: {0}")]
    Load(String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl TreeError {
    /// Validation refusal, as opposed to a structural or I/O failure
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_) | Self::RejectedSilently)
    }
}

impl From<Option<DropRejection>> for TreeError {
    fn from(rejection: Option<DropRejection>) -> Self {
        match rejection {
            Some(rejection) => Self::Rejected(rejection),
            None => Self::RejectedSilently,
        }
    }
}
