//! Sitebuild component registry
//!
//! Static metadata for every building block the page builder can place,
//! plus the drop rules that decide where a block may go.

mod kind;
mod descriptor;
mod registry;
mod drop;

pub use kind::{Category, ComponentType, UnknownComponentType};
pub use descriptor::ComponentDescriptor;
pub use registry::{Registry, RegistryError};
pub use drop::{can_drop, can_drop_named, DropDecision, DropRejection, RejectionKind};

/// Open property map carried by descriptors and nodes
pub type Props = serde_json::Map<String, serde_json::Value>;
