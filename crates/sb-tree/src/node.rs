//! Builder node
//!
//! A node owns its children outright; there is no sharing and no parent
//! pointer. Parent lookups walk down from the root instead.

use std::collections::BTreeMap;

use sb_registry::{ComponentType, Props};
use serde::{Deserialize, Serialize};

use crate::NodeId;

/// Resolved style declarations (property -> value)
pub type Style = BTreeMap<String, String>;

/// One placed block in the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderNode {
    /// Assigned at creation, never changed
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: ComponentType,
    #[serde(default)]
    pub style: Style,
    /// Instance props, seeded from the registry defaults
    #[serde(default)]
    pub props: Props,
    /// Ordered children. Always empty for leaf types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BuilderNode>,
}

impl BuilderNode {
    pub fn new(id: NodeId, kind: ComponentType, props: Props) -> Self {
        Self {
            id,
            kind,
            style: Style::new(),
            props,
            children: Vec::new(),
        }
    }

    /// Find a node in this subtree (self included)
    pub fn find(&self, id: &NodeId) -> Option<&BuilderNode> {
        if &self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Find a node in this subtree mutably
    pub fn find_mut(&mut self, id: &NodeId) -> Option<&mut BuilderNode> {
        if &self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// Node whose `children` directly holds `id`
    pub fn find_parent(&self, id: &NodeId) -> Option<&BuilderNode> {
        if self.children.iter().any(|child| &child.id == id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_parent(id))
    }

    pub(crate) fn find_parent_mut(&mut self, id: &NodeId) -> Option<&mut BuilderNode> {
        if self.children.iter().any(|child| &child.id == id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_parent_mut(id))
    }

    /// Level of `id` in this subtree, counting self as 1
    pub fn level_of(&self, id: &NodeId) -> Option<usize> {
        if &self.id == id {
            return Some(1);
        }
        self.children
            .iter()
            .find_map(|child| child.level_of(id))
            .map(|level| level + 1)
    }

    /// Whether `id` is this node or one of its descendants
    pub fn contains(&self, id: &NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Pre-order traversal, self first
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Number of nodes in this subtree (self included)
    pub fn subtree_len(&self) -> usize {
        self.descendants().count()
    }

    /// Levels in this subtree; a lone node has depth 1
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(BuilderNode::depth).max().unwrap_or(0)
    }
}

/// Pre-order iterator over a subtree
pub struct Descendants<'a> {
    stack: Vec<&'a BuilderNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a BuilderNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, kind: ComponentType) -> BuilderNode {
        BuilderNode::new(NodeId::from(id), kind, Props::new())
    }

    fn sample() -> BuilderNode {
        let mut root = node("s", ComponentType::Section);
        let mut row = node("r", ComponentType::Row);
        row.children.push(node("h", ComponentType::Heading));
        row.children.push(node("p", ComponentType::Paragraph));
        root.children.push(row);
        root.children.push(node("i", ComponentType::Image));
        root
    }

    #[test]
    fn test_find_and_parent() {
        let root = sample();
        assert_eq!(root.find(&"p".into()).unwrap().kind, ComponentType::Paragraph);
        assert_eq!(root.find_parent(&"p".into()).unwrap().id.as_str(), "r");
        assert_eq!(root.find_parent(&"i".into()).unwrap().id.as_str(), "s");
        assert!(root.find_parent(&"s".into()).is_none());
        assert!(root.find(&"zz".into()).is_none());
    }

    #[test]
    fn test_preorder() {
        let root = sample();
        let order: Vec<_> = root.descendants().map(|n| n.id.as_str().to_string()).collect();
        assert_eq!(order, vec!["s", "r", "h", "p", "i"]);
        assert_eq!(root.subtree_len(), 5);
    }

    #[test]
    fn test_level_of() {
        let root = sample();
        assert_eq!(root.level_of(&"s".into()), Some(1));
        assert_eq!(root.level_of(&"i".into()), Some(2));
        assert_eq!(root.level_of(&"p".into()), Some(3));
        assert_eq!(root.level_of(&"zz".into()), None);
    }

    #[test]
    fn test_depth() {
        assert_eq!(node("x", ComponentType::Section).depth(), 1);
        assert_eq!(sample().depth(), 3);
    }
}
