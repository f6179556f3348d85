//! Component palette (sidebar grouping)

use sb_registry::{Category, ComponentType, Registry};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteItem {
    #[serde(rename = "type")]
    pub kind: ComponentType,
    pub icon: Option<String>,
}

/// Registered components of one category, in palette order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteGroup {
    pub category: Category,
    pub items: Vec<PaletteItem>,
}

/// Group every registered component by category. Empty groups are skipped.
pub fn build_palette(registry: &Registry) -> Vec<PaletteGroup> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let items: Vec<_> = registry
                .by_category(category)
                .into_iter()
                .map(|desc| PaletteItem {
                    kind: desc.kind,
                    icon: desc.icon.clone(),
                })
                .collect();
            (!items.is_empty()).then_some(PaletteGroup { category, items })
        })
        .collect()
}
