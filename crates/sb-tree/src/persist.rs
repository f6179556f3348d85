//! JSON persistence
//!
//! Direct structural encoding of the tree, child order preserved:
//!
//! ```json
//! { "root": { "id": "node-1", "type": "Section", "style": {}, "props": {},
//!             "children": [ ... ] } }
//! ```
//!
//! Loading replays the drop rules over every parent/child pair, so a
//! document that loads is one the editor could have built.

use std::collections::HashSet;

use sb_registry::{can_drop, DropRejection, Registry};
use serde::{Deserialize, Serialize};

use crate::{BuilderNode, BuilderTree, NodeId, TreeError, TreeResult, MAX_DEPTH};

#[derive(Serialize)]
struct SavedDocumentRef<'a> {
    root: Option<&'a BuilderNode>,
}

#[derive(Deserialize)]
struct SavedDocument {
    root: Option<BuilderNode>,
}

impl BuilderTree {
    pub fn to_json(&self) -> TreeResult<String> {
        Ok(serde_json::to_string(&SavedDocumentRef { root: self.root() })?)
    }

    pub fn to_json_pretty(&self) -> TreeResult<String> {
        Ok(serde_json::to_string_pretty(&SavedDocumentRef { root: self.root() })?)
    }

    /// Load and validate a saved document against `registry`
    pub fn from_json(registry: &Registry, json: &str) -> TreeResult<Self> {
        let saved: SavedDocument = serde_json::from_str(json)?;
        let mut ids = HashSet::new();

        if let Some(root) = &saved.root {
            if let Err(rejection) = can_drop(registry, root.kind, None).into_result() {
                return Err(TreeError::Load(format!("root {}: {}", root.id, describe(rejection))));
            }
            if root.depth() > MAX_DEPTH {
                return Err(TreeError::DepthExceeded(MAX_DEPTH));
            }
            validate(registry, root, &mut ids)?;
        }

        tracing::debug!("Loaded document with {} nodes", ids.len());
        Ok(Self::from_parts(saved.root, ids))
    }
}

fn validate(registry: &Registry, node: &BuilderNode, ids: &mut HashSet<NodeId>) -> TreeResult<()> {
    if !ids.insert(node.id.clone()) {
        return Err(TreeError::Load(format!("duplicate node id {}", node.id)));
    }

    for child in &node.children {
        if let Err(rejection) = can_drop(registry, child.kind, Some(node.kind)).into_result() {
            return Err(TreeError::Load(format!(
                "{} under {}: {}",
                child.id,
                node.id,
                describe(rejection)
            )));
        }
        validate(registry, child, ids)?;
    }
    Ok(())
}

fn describe(rejection: Option<DropRejection>) -> String {
    rejection.map_or_else(|| "drop rejected".to_string(), |r| r.to_string())
}
