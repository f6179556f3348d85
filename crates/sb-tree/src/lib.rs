//! Sitebuild page tree
//!
//! Document model edited by the page builder: a strict tree of typed
//! nodes, each owning its children.

mod ids;
mod node;
mod operations;
mod persist;
mod tree;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use ids::IdAllocator;
pub use node::{BuilderNode, Descendants, Style};
pub use operations::{TreeError, TreeResult};
pub use tree::{BuilderTree, MAX_DEPTH};

/// Node identifier, unique within one tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
