//! Component type identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of placeable building block.
///
/// Closed set: adding a variant forces every exhaustive match (and the
/// standard registry table) to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentType {
    // Containers
    Section,
    Container,
    Row,
    Column,
    Grid,
    // Leaves
    Heading,
    Paragraph,
    Image,
    Button,
    Icon,
    Divider,
    Link,
    // Slotted blocks
    Navbar,
    Footer,
    Hero,
    Gallery,
    Form,
}

impl ComponentType {
    /// Every component type, in palette order
    pub const ALL: [ComponentType; 17] = [
        Self::Section,
        Self::Container,
        Self::Row,
        Self::Column,
        Self::Grid,
        Self::Heading,
        Self::Paragraph,
        Self::Image,
        Self::Button,
        Self::Icon,
        Self::Divider,
        Self::Link,
        Self::Navbar,
        Self::Footer,
        Self::Hero,
        Self::Gallery,
        Self::Form,
    ];

    /// The only type allowed to seed an empty document
    pub const ROOT: ComponentType = ComponentType::Section;

    /// Canonical identifier
    pub fn name(self) -> &'static str {
        match self {
            Self::Section => "Section",
            Self::Container => "Container",
            Self::Row => "Row",
            Self::Column => "Column",
            Self::Grid => "Grid",
            Self::Heading => "Heading",
            Self::Paragraph => "Paragraph",
            Self::Image => "Image",
            Self::Button => "Button",
            Self::Icon => "Icon",
            Self::Divider => "Divider",
            Self::Link => "Link",
            Self::Navbar => "Navbar",
            Self::Footer => "Footer",
            Self::Hero => "Hero",
            Self::Gallery => "Gallery",
            Self::Form => "Form",
        }
    }

    /// Parse a canonical identifier (case-sensitive)
    pub fn parse(name: &str) -> Result<Self, UnknownComponentType> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| UnknownComponentType(name.to_string()))
    }

    #[inline]
    pub fn is_root_eligible(self) -> bool {
        self == Self::ROOT
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ComponentType {
    type Err = UnknownComponentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Identifier that names no component type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown component type: {0}")]
pub struct UnknownComponentType(pub String);

/// Palette grouping. Advisory only; never consulted by drop rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Basic,
    Container,
    Advanced,
}

impl Category {
    pub const ALL: [Category; 3] = [Self::Basic, Self::Container, Self::Advanced];

    pub fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Container => "container",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in ComponentType::ALL {
            assert_eq!(ComponentType::parse(kind.name()), Ok(kind));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(ComponentType::parse("section").is_err());
        assert_eq!(
            "Nope".parse::<ComponentType>(),
            Err(UnknownComponentType("Nope".to_string()))
        );
    }

    #[test]
    fn test_only_section_is_root_eligible() {
        let eligible: Vec<_> = ComponentType::ALL
            .iter()
            .filter(|k| k.is_root_eligible())
            .collect();
        assert_eq!(eligible, vec![&ComponentType::Section]);
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&ComponentType::Heading).unwrap();
        assert_eq!(json, "\"Heading\"");
        let cat = serde_json::to_string(&Category::Advanced).unwrap();
        assert_eq!(cat, "\"advanced\"");
    }
}
