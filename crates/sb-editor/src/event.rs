//! Editor events and outcomes

use sb_registry::{DropDecision, Props};
use sb_tree::{BuilderNode, NodeId, Style};
use serde::Deserialize;

/// Input from the canvas surface
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum EditorEvent {
    /// Palette item dropped on a node (or on the empty canvas)
    Drop {
        dragged: String,
        #[serde(default)]
        target: Option<NodeId>,
    },
    /// Existing node dragged to a new position
    Move {
        node: NodeId,
        #[serde(default)]
        target: Option<NodeId>,
        #[serde(default)]
        index: Option<usize>,
    },
    EditProps { node: NodeId, props: Props },
    EditStyle { node: NodeId, style: Style },
    Remove { node: NodeId },
}

/// Result of applying an event
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    Inserted(NodeId),
    Moved(NodeId),
    Updated(NodeId),
    /// Detached subtree
    Removed(BuilderNode),
    /// Drop rules refused the change; the document is untouched
    Denied(DropDecision),
}

impl EditOutcome {
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied(_))
    }

    /// Denial message for toasts, if any
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Denied(decision) => decision.message(),
            _ => None,
        }
    }
}
