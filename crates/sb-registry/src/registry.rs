//! Component registry
//!
//! Built once, then read-only. Sessions share it behind an `Arc`.

use std::collections::BTreeMap;

use serde_json::json;

use crate::{Category, ComponentDescriptor, ComponentType, Props};

/// Registry loading errors
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("invalid registry definition: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Descriptor table indexed by component type
#[derive(Debug, Clone, Default)]
pub struct Registry {
    descriptors: BTreeMap<ComponentType, ComponentDescriptor>,
}

impl Registry {
    /// Build from descriptors. A later entry for the same type replaces
    /// an earlier one, so each type has at most one descriptor.
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = ComponentDescriptor>) -> Self {
        let descriptors = descriptors
            .into_iter()
            .map(|desc| (desc.kind, desc))
            .collect();
        Self { descriptors }
    }

    /// Load a JSON array of descriptors
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let list: Vec<ComponentDescriptor> = serde_json::from_str(json)?;
        tracing::debug!("Loaded {} component descriptors", list.len());
        Ok(Self::from_descriptors(list))
    }

    /// The builder's stock component set
    pub fn standard() -> Self {
        use ComponentType::*;

        Self::from_descriptors([
            ComponentDescriptor::container(Section).with_icon("layout"),
            ComponentDescriptor::container(Container)
                .with_icon("square")
                .with_prop("maxWidth", "1200px"),
            ComponentDescriptor::container(Row)
                .with_icon("columns")
                .with_prop("gap", "16px"),
            ComponentDescriptor::container(Column)
                .with_icon("rows")
                .with_prop("span", 1),
            ComponentDescriptor::container(Grid)
                .with_icon("grid")
                .with_prop("columns", 3)
                .with_prop("gap", "16px"),
            ComponentDescriptor::leaf(Heading)
                .with_icon("heading")
                .with_prop("level", "h2")
                .with_prop("text", "Titre"),
            ComponentDescriptor::leaf(Paragraph)
                .with_icon("type")
                .with_prop("text", "Votre texte ici"),
            ComponentDescriptor::leaf(Image)
                .with_icon("image")
                .with_prop("src", "")
                .with_prop("alt", "Image"),
            ComponentDescriptor::leaf(Button)
                .with_icon("mouse-pointer")
                .with_prop("text", "Bouton")
                .with_prop("href", "#")
                .with_prop("variant", "primary"),
            ComponentDescriptor::leaf(Icon)
                .with_icon("star")
                .with_prop("name", "star")
                .with_prop("size", 24),
            ComponentDescriptor::leaf(Divider).with_icon("minus"),
            ComponentDescriptor::leaf(Link)
                .with_icon("link")
                .with_prop("text", "Lien")
                .with_prop("href", "#"),
            ComponentDescriptor::advanced(Navbar)
                .with_icon("menu")
                .with_prop("brand", "Logo")
                .with_prop("links", json!([])),
            ComponentDescriptor::advanced(Footer)
                .with_icon("align-end")
                .with_prop("copyright", "© Tous droits réservés"),
            ComponentDescriptor::advanced(Hero)
                .with_icon("star")
                .with_prop("title", "Bienvenue")
                .with_prop("subtitle", "")
                .with_prop("backgroundImage", ""),
            ComponentDescriptor::advanced(Gallery)
                .with_icon("images")
                .with_prop("images", json!([]))
                .with_prop("columns", 3),
            ComponentDescriptor::advanced(Form)
                .with_icon("clipboard")
                .with_prop("action", "")
                .with_prop("submitText", "Envoyer"),
        ])
    }

    /// Descriptor for a type, `None` when unregistered
    pub fn lookup(&self, kind: ComponentType) -> Option<&ComponentDescriptor> {
        self.descriptors.get(&kind)
    }

    /// Descriptor for a type name, `None` when unknown or unregistered
    pub fn lookup_name(&self, name: &str) -> Option<&ComponentDescriptor> {
        ComponentType::parse(name).ok().and_then(|kind| self.lookup(kind))
    }

    pub fn contains(&self, kind: ComponentType) -> bool {
        self.descriptors.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.descriptors.values()
    }

    /// Descriptors in one palette group
    pub fn by_category(&self, category: Category) -> Vec<&ComponentDescriptor> {
        self.iter().filter(|desc| desc.category == category).collect()
    }

    /// Fresh copy of a type's default props
    pub fn instantiate_props(&self, kind: ComponentType) -> Option<Props> {
        self.lookup(kind).map(ComponentDescriptor::instantiate_props)
    }
}
