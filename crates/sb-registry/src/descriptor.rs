//! Component descriptors

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Category, ComponentType, Props};

/// Registry metadata for one component type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    /// Type this entry describes
    #[serde(rename = "type")]
    pub kind: ComponentType,
    /// Whether nodes of this type may own children
    pub can_have_children: bool,
    pub category: Category,
    /// Exposes named insertion points. Informational only.
    #[serde(default)]
    pub has_slots: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Initial props for new instances
    #[serde(default)]
    pub default_props: Props,
}

impl ComponentDescriptor {
    /// Leaf block (never accepts children)
    pub fn leaf(kind: ComponentType) -> Self {
        Self::new(kind, Category::Basic, false, false)
    }

    /// Plain container
    pub fn container(kind: ComponentType) -> Self {
        Self::new(kind, Category::Container, true, false)
    }

    /// Container with named slots
    pub fn advanced(kind: ComponentType) -> Self {
        Self::new(kind, Category::Advanced, true, true)
    }

    pub fn new(kind: ComponentType, category: Category, can_have_children: bool, has_slots: bool) -> Self {
        Self {
            kind,
            can_have_children,
            category,
            has_slots,
            icon: None,
            default_props: Props::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_prop(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.default_props.insert(key.to_string(), value.into());
        self
    }

    /// Owned copy of the default props for a new instance
    pub fn instantiate_props(&self) -> Props {
        self.default_props.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builders() {
        let heading = ComponentDescriptor::leaf(ComponentType::Heading)
            .with_icon("heading")
            .with_prop("level", "h2");
        assert!(!heading.can_have_children);
        assert_eq!(heading.category, Category::Basic);
        assert_eq!(heading.icon.as_deref(), Some("heading"));
        assert_eq!(heading.default_props.get("level"), Some(&json!("h2")));

        let navbar = ComponentDescriptor::advanced(ComponentType::Navbar);
        assert!(navbar.can_have_children);
        assert!(navbar.has_slots);
    }

    #[test]
    fn test_instantiate_props_is_detached() {
        let desc = ComponentDescriptor::leaf(ComponentType::Paragraph).with_prop("text", "a");
        let mut props = desc.instantiate_props();
        props.insert("text".into(), json!("b"));
        assert_eq!(desc.default_props.get("text"), Some(&json!("a")));
    }

    #[test]
    fn test_deserialize_defaults_optional_fields() {
        let desc: ComponentDescriptor = serde_json::from_value(json!({
            "type": "Row",
            "canHaveChildren": true,
            "category": "container"
        }))
        .unwrap();
        assert_eq!(desc.kind, ComponentType::Row);
        assert!(!desc.has_slots);
        assert!(desc.icon.is_none());
        assert!(desc.default_props.is_empty());
    }
}
