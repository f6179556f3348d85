//! Editing session
//!
//! Owns one document and applies canvas events to it. Refused drops, drops
//! on the background of a page that already has a root included, come back
//! as [`EditOutcome::Denied`]; `Err` is reserved for stale node ids,
//! malformed input, size limits and persistence failures.

use std::sync::Arc;

use sb_registry::{can_drop_named, ComponentType, DropDecision, DropRejection, Props, Registry};
use sb_tree::{BuilderTree, NodeId, Style, TreeError, TreeResult};

use crate::palette::{build_palette, PaletteGroup};
use crate::{Config, EditOutcome, EditorEvent};

/// Result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("invalid event: {0}")]
    Event(#[from] serde_json::Error),
}

/// Page builder editing session
pub struct Editor {
    config: Config,
    registry: Arc<Registry>,
    tree: BuilderTree,
}

impl Editor {
    /// Create a session with an empty document
    pub fn new(config: Config, registry: Arc<Registry>) -> Self {
        let tree = Self::empty_tree(&config);
        tracing::debug!(
            "Editor session started ({} component types)",
            registry.len()
        );
        Self { config, registry, tree }
    }

    /// Session over the stock component set
    pub fn with_standard_registry(config: Config) -> Self {
        Self::new(config, Arc::new(Registry::standard()))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn tree(&self) -> &BuilderTree {
        &self.tree
    }

    /// Sidebar contents
    pub fn palette(&self) -> Vec<PaletteGroup> {
        build_palette(&self.registry)
    }

    /// Would dropping `dragged` on `target` be accepted? Used for hover
    /// feedback; does not touch the document.
    pub fn preview_drop(&self, dragged: &str, target: Option<&NodeId>) -> EditorResult<DropDecision> {
        let target_kind = match target {
            Some(id) => Some(self.node_kind(id)?.name()),
            None if !self.tree.is_empty() && ComponentType::parse(dragged).is_ok() => {
                return Ok(DropDecision::deny(DropRejection::RootOccupied));
            }
            None => None,
        };
        Ok(can_drop_named(&self.registry, dragged, target_kind))
    }

    /// Apply one canvas event
    pub fn apply(&mut self, event: EditorEvent) -> EditorResult<EditOutcome> {
        match event {
            EditorEvent::Drop { dragged, target } => self.drop_component(&dragged, target.as_ref()),
            EditorEvent::Move { node, target, index } => self.move_node(&node, target.as_ref(), index),
            EditorEvent::EditProps { node, props } => self.edit_props(&node, props),
            EditorEvent::EditStyle { node, style } => self.edit_style(&node, style),
            EditorEvent::Remove { node } => self.remove(&node),
        }
    }

    /// Parse and apply a JSON-encoded event
    pub fn apply_json(&mut self, json: &str) -> EditorResult<EditOutcome> {
        let event: EditorEvent = serde_json::from_str(json)?;
        self.apply(event)
    }

    /// Insert a new `dragged` component under `target`, or as the root
    /// of an empty document.
    pub fn drop_component(&mut self, dragged: &str, target: Option<&NodeId>) -> EditorResult<EditOutcome> {
        let Ok(kind) = ComponentType::parse(dragged) else {
            return Ok(self.denied(DropDecision::deny(DropRejection::UnknownComponent(
                dragged.to_string(),
            ))));
        };

        let result = self.tree.insert(&self.registry, kind, target);
        self.settle(result, EditOutcome::Inserted)
    }

    /// Reparent or reorder an existing node
    pub fn move_node(
        &mut self,
        node: &NodeId,
        target: Option<&NodeId>,
        index: Option<usize>,
    ) -> EditorResult<EditOutcome> {
        let result = self
            .tree
            .move_node(&self.registry, node, target, index)
            .map(|()| node.clone());
        self.settle(result, EditOutcome::Moved)
    }

    pub fn edit_props(&mut self, node: &NodeId, props: Props) -> EditorResult<EditOutcome> {
        self.tree.update_props(node, props)?;
        Ok(EditOutcome::Updated(node.clone()))
    }

    pub fn edit_style(&mut self, node: &NodeId, style: Style) -> EditorResult<EditOutcome> {
        self.tree.update_style(node, style)?;
        Ok(EditOutcome::Updated(node.clone()))
    }

    pub fn remove(&mut self, node: &NodeId) -> EditorResult<EditOutcome> {
        Ok(EditOutcome::Removed(self.tree.remove(node)?))
    }

    /// Discard the document and start over
    pub fn new_document(&mut self) {
        self.tree = Self::empty_tree(&self.config);
        tracing::info!("New document");
    }

    /// Serialize the document
    pub fn save(&self) -> EditorResult<String> {
        Ok(self.tree.to_json()?)
    }

    /// Replace the document with a saved one. On failure the current
    /// document is kept.
    pub fn load(&mut self, json: &str) -> EditorResult<()> {
        let tree = BuilderTree::from_json(&self.registry, json)?;
        if let Some(max) = self.config.max_nodes {
            if tree.len() > max {
                return Err(TreeError::CapacityExceeded(max).into());
            }
        }
        let tree = tree
            .with_id_prefix(self.config.id_prefix.clone())
            .with_max_nodes(self.config.max_nodes);
        tracing::info!("Loaded document ({} nodes)", tree.len());
        self.tree = tree;
        Ok(())
    }

    fn empty_tree(config: &Config) -> BuilderTree {
        BuilderTree::new()
            .with_id_prefix(config.id_prefix.clone())
            .with_max_nodes(config.max_nodes)
    }

    fn node_kind(&self, id: &NodeId) -> EditorResult<ComponentType> {
        self.tree
            .get(id)
            .map(|node| node.kind)
            .ok_or_else(|| TreeError::NotFound(id.clone()).into())
    }

    /// Turn drop-rule refusals into `Denied`, pass other errors through
    fn settle(
        &self,
        result: TreeResult<NodeId>,
        done: impl FnOnce(NodeId) -> EditOutcome,
    ) -> EditorResult<EditOutcome> {
        match result {
            Ok(id) => Ok(done(id)),
            Err(TreeError::Rejected(rejection)) => Ok(self.denied(DropDecision::deny(rejection))),
            Err(TreeError::RejectedSilently) => Ok(self.denied(DropDecision {
                allowed: false,
                rejection: None,
            })),
            Err(TreeError::RootOccupied(_)) => {
                Ok(self.denied(DropDecision::deny(DropRejection::RootOccupied)))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn denied(&self, decision: DropDecision) -> EditOutcome {
        let message = decision.message().unwrap_or_else(|| "drop not allowed".to_string());
        if self.config.log_rejections {
            tracing::warn!("Drop refused: {}", message);
        } else {
            tracing::debug!("Drop refused: {}", message);
        }
        EditOutcome::Denied(decision)
    }
}
