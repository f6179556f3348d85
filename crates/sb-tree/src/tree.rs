//! Builder tree (the page document)
//!
//! Every structural mutation that places a node runs the drop rules first,
//! so the tree never holds a child under a leaf or a non-Section root.

use std::collections::HashSet;

use sb_registry::{can_drop, ComponentType, Props, Registry};
use serde_json::Value;

use crate::{BuilderNode, IdAllocator, NodeId, Style, TreeError, TreeResult};

/// Deepest nesting a document may reach, root included.
///
/// A saved document spends two JSON nesting levels per tree level, so at
/// this depth it stays well inside `serde_json`'s recursion limit of 128,
/// leaving room for nested prop values.
pub const MAX_DEPTH: usize = 32;

/// Page document: at most one root node plus its subtree
#[derive(Debug, Clone, Default)]
pub struct BuilderTree {
    root: Option<BuilderNode>,
    /// Every id currently in the tree
    ids: HashSet<NodeId>,
    allocator: IdAllocator,
    max_nodes: Option<usize>,
}

impl BuilderTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `prefix` for generated node ids
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.allocator = IdAllocator::new(prefix);
        self
    }

    /// Cap the number of nodes the document may hold
    pub fn with_max_nodes(mut self, max_nodes: Option<usize>) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub(crate) fn from_parts(root: Option<BuilderNode>, ids: HashSet<NodeId>) -> Self {
        Self {
            root,
            ids,
            ..Self::default()
        }
    }

    pub fn root(&self) -> Option<&BuilderNode> {
        self.root.as_ref()
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.ids.contains(id)
    }

    /// Get a node by ID
    pub fn get(&self, id: &NodeId) -> Option<&BuilderNode> {
        self.root.as_ref()?.find(id)
    }

    fn get_mut(&mut self, id: &NodeId) -> TreeResult<&mut BuilderNode> {
        self.root
            .as_mut()
            .and_then(|root| root.find_mut(id))
            .ok_or_else(|| TreeError::NotFound(id.clone()))
    }

    /// Parent of a node; `None` for the root or unknown ids
    pub fn parent_of(&self, id: &NodeId) -> Option<&BuilderNode> {
        self.root.as_ref()?.find_parent(id)
    }

    /// Levels in the document, 0 when empty
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, BuilderNode::depth)
    }

    /// Pre-order traversal of every node
    pub fn iter(&self) -> impl Iterator<Item = &BuilderNode> {
        self.root.iter().flat_map(BuilderNode::descendants)
    }

    /// Drop the whole document. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.root = None;
        self.ids.clear();
    }

    /// Place a new `kind` node at the end of `parent`'s children, or as the
    /// document root when `parent` is `None`.
    pub fn insert(&mut self, registry: &Registry, kind: ComponentType, parent: Option<&NodeId>) -> TreeResult<NodeId> {
        self.insert_at(registry, kind, parent, None)
    }

    /// Like [`insert`](Self::insert), at `index` within the parent's
    /// children (clamped; `None` appends).
    pub fn insert_at(
        &mut self,
        registry: &Registry,
        kind: ComponentType,
        parent: Option<&NodeId>,
        index: Option<usize>,
    ) -> TreeResult<NodeId> {
        if let Some(max) = self.max_nodes {
            if self.len() >= max {
                return Err(TreeError::CapacityExceeded(max));
            }
        }

        let target = self.target_kind(parent)?;
        can_drop(registry, kind, target).into_result()?;
        self.check_depth(parent, 1)?;

        let props = registry.instantiate_props(kind).unwrap_or_default();
        let id = self.allocator.allocate(|id| self.ids.contains(id));
        let node = BuilderNode::new(id.clone(), kind, props);

        self.attach(node, parent, index)?;
        self.ids.insert(id.clone());

        match parent {
            Some(parent) => tracing::info!("Inserted {} {} under {}", kind, id, parent),
            None => tracing::info!("Inserted {} {} as document root", kind, id),
        }
        Ok(id)
    }

    /// Detach a node and its whole subtree
    pub fn remove(&mut self, id: &NodeId) -> TreeResult<BuilderNode> {
        let removed = self.detach(id)?;
        for node in removed.descendants() {
            self.ids.remove(&node.id);
        }
        tracing::info!("Removed {} ({} nodes)", id, removed.subtree_len());
        Ok(removed)
    }

    /// Reparent or reorder an existing node. The drop rules are checked
    /// against the new parent before anything changes.
    pub fn move_node(
        &mut self,
        registry: &Registry,
        id: &NodeId,
        new_parent: Option<&NodeId>,
        index: Option<usize>,
    ) -> TreeResult<()> {
        let node = self.get(id).ok_or_else(|| TreeError::NotFound(id.clone()))?;
        let kind = node.kind;
        let subtree_depth = node.depth();

        match new_parent {
            Some(parent) if node.contains(parent) => return Err(TreeError::CycleRejected(id.clone())),
            // Root moved onto the root slot
            None if self.root.as_ref().is_some_and(|root| &root.id == id) => return Ok(()),
            _ => {}
        }

        let target = self.target_kind(new_parent)?;
        can_drop(registry, kind, target).into_result()?;
        self.check_depth(new_parent, subtree_depth)?;

        let node = self.detach(id)?;
        self.attach(node, new_parent, index)?;
        tracing::debug!("Moved {}", id);
        Ok(())
    }

    /// Layer prop overrides onto a node
    pub fn update_props(&mut self, id: &NodeId, props: Props) -> TreeResult<()> {
        self.get_mut(id)?.props.extend(props);
        Ok(())
    }

    pub fn set_prop(&mut self, id: &NodeId, key: impl Into<String>, value: impl Into<Value>) -> TreeResult<()> {
        self.get_mut(id)?.props.insert(key.into(), value.into());
        Ok(())
    }

    pub fn remove_prop(&mut self, id: &NodeId, key: &str) -> TreeResult<Option<Value>> {
        Ok(self.get_mut(id)?.props.remove(key))
    }

    /// Merge style declarations; an empty value removes the property
    pub fn update_style(&mut self, id: &NodeId, style: Style) -> TreeResult<()> {
        let node = self.get_mut(id)?;
        for (property, value) in style {
            if value.is_empty() {
                node.style.remove(&property);
            } else {
                node.style.insert(property, value);
            }
        }
        Ok(())
    }

    pub fn clear_style(&mut self, id: &NodeId) -> TreeResult<()> {
        self.get_mut(id)?.style.clear();
        Ok(())
    }

    /// Kind of the drop target, `None` for the root slot
    fn target_kind(&self, parent: Option<&NodeId>) -> TreeResult<Option<ComponentType>> {
        match parent {
            Some(parent) => {
                let node = self.get(parent).ok_or_else(|| TreeError::NotFound(parent.clone()))?;
                Ok(Some(node.kind))
            }
            None => match &self.root {
                Some(root) => Err(TreeError::RootOccupied(root.id.clone())),
                None => Ok(None),
            },
        }
    }

    /// Refuse placements that would push a subtree of `depth` levels
    /// below `parent` past [`MAX_DEPTH`]
    fn check_depth(&self, parent: Option<&NodeId>, depth: usize) -> TreeResult<()> {
        let parent_level = match (parent, &self.root) {
            (Some(parent), Some(root)) => root
                .level_of(parent)
                .ok_or_else(|| TreeError::NotFound(parent.clone()))?,
            _ => 0,
        };
        if parent_level + depth > MAX_DEPTH {
            return Err(TreeError::DepthExceeded(MAX_DEPTH));
        }
        Ok(())
    }

    fn attach(&mut self, node: BuilderNode, parent: Option<&NodeId>, index: Option<usize>) -> TreeResult<()> {
        match parent {
            None => {
                if let Some(root) = &self.root {
                    return Err(TreeError::RootOccupied(root.id.clone()));
                }
                self.root = Some(node);
            }
            Some(parent) => {
                let children = &mut self.get_mut(parent)?.children;
                let index = index.map_or(children.len(), |i| i.min(children.len()));
                children.insert(index, node);
            }
        }
        Ok(())
    }

    fn detach(&mut self, id: &NodeId) -> TreeResult<BuilderNode> {
        let root = self.root.as_mut().ok_or_else(|| TreeError::NotFound(id.clone()))?;

        if &root.id == id {
            return self.root.take().ok_or_else(|| TreeError::NotFound(id.clone()));
        }

        let parent = root
            .find_parent_mut(id)
            .ok_or_else(|| TreeError::NotFound(id.clone()))?;
        let position = parent
            .children
            .iter()
            .position(|child| &child.id == id)
            .ok_or_else(|| TreeError::NotFound(id.clone()))?;
        Ok(parent.children.remove(position))
    }
}
