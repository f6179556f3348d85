//! Drop validation
//!
//! Decides whether a dragged component type may be placed on a target.
//! Rules are checked in order and the first match wins:
//!
//! 1. unregistered dragged type: denied
//! 2. empty canvas, dragged type is not a Section: denied
//! 3. empty canvas, dragged type is a Section: allowed
//! 4. unregistered target: denied
//! 5. target cannot have children: denied
//! 6. otherwise allowed
//!
//! Validation never fails; denials are returned as data.

use crate::{ComponentType, Registry};

/// Reason a drop was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropRejection {
    #[error("unknown component: {0}")]
    UnknownComponent(String),

    #[error("unknown target: {0}")]
    UnknownTarget(String),

    #[error("a Section must exist first")]
    SectionRequired,

    /// Drop on the canvas background of a page that already has a root
    #[error("the page already has a root Section")]
    RootOccupied,

    #[error("{0} cannot contain other components")]
    InvalidContainment(ComponentType),
}

/// Coarse classification of a rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    /// Dragged or target type is not registered
    UnknownComponentType,
    /// Target exists but does not accept children
    InvalidContainment,
    /// Empty document needs a root container first
    RootRequired,
    /// Root slot is taken
    RootOccupied,
}

impl DropRejection {
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::UnknownComponent(_) | Self::UnknownTarget(_) => RejectionKind::UnknownComponentType,
            Self::InvalidContainment(_) => RejectionKind::InvalidContainment,
            Self::SectionRequired => RejectionKind::RootRequired,
            Self::RootOccupied => RejectionKind::RootOccupied,
        }
    }
}

/// Outcome of a drop check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropDecision {
    pub allowed: bool,
    /// Set on denials that carry an explanation
    pub rejection: Option<DropRejection>,
}

impl DropDecision {
    pub fn allow() -> Self {
        Self { allowed: true, rejection: None }
    }

    pub fn deny(rejection: DropRejection) -> Self {
        Self { allowed: false, rejection: Some(rejection) }
    }

    #[inline]
    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    /// Human-readable reason, if any
    pub fn message(&self) -> Option<String> {
        self.rejection.as_ref().map(ToString::to_string)
    }

    /// Convert to a `Result`, for callers that want `?`
    pub fn into_result(self) -> Result<(), Option<DropRejection>> {
        if self.allowed { Ok(()) } else { Err(self.rejection) }
    }
}

/// Can a `dragged` block be placed under `target` (`None` = empty canvas)?
pub fn can_drop(registry: &Registry, dragged: ComponentType, target: Option<ComponentType>) -> DropDecision {
    let decision = decide(registry, dragged, target);
    tracing::debug!(
        dragged = %dragged,
        target = target.map(ComponentType::name).unwrap_or("<root>"),
        allowed = decision.allowed,
        "drop check"
    );
    decision
}

fn decide(registry: &Registry, dragged: ComponentType, target: Option<ComponentType>) -> DropDecision {
    if !registry.contains(dragged) {
        return DropDecision::deny(DropRejection::UnknownComponent(dragged.to_string()));
    }

    let Some(target) = target else {
        return if dragged.is_root_eligible() {
            DropDecision::allow()
        } else {
            DropDecision::deny(DropRejection::SectionRequired)
        };
    };

    match registry.lookup(target) {
        None => DropDecision::deny(DropRejection::UnknownTarget(target.to_string())),
        Some(desc) if !desc.can_have_children => {
            DropDecision::deny(DropRejection::InvalidContainment(target))
        }
        Some(_) => DropDecision::allow(),
    }
}

/// String-keyed entry point for editor events.
///
/// Names that parse to no component type are treated exactly like
/// unregistered types.
pub fn can_drop_named(registry: &Registry, dragged: &str, target: Option<&str>) -> DropDecision {
    let Ok(dragged_kind) = ComponentType::parse(dragged) else {
        tracing::debug!(dragged, "drop check: unknown dragged type");
        return DropDecision::deny(DropRejection::UnknownComponent(dragged.to_string()));
    };

    match target {
        None => can_drop(registry, dragged_kind, None),
        Some(name) => match ComponentType::parse(name) {
            Ok(target_kind) => can_drop(registry, dragged_kind, Some(target_kind)),
            Err(_) if !registry.contains(dragged_kind) => {
                DropDecision::deny(DropRejection::UnknownComponent(dragged.to_string()))
            }
            Err(_) => DropDecision::deny(DropRejection::UnknownTarget(name.to_string())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ComponentDescriptor;

    #[test]
    fn test_section_seeds_empty_canvas() {
        let registry = Registry::standard();
        assert_eq!(can_drop(&registry, ComponentType::Section, None), DropDecision::allow());
    }

    #[test]
    fn test_non_section_on_empty_canvas() {
        let registry = Registry::standard();
        let decision = can_drop(&registry, ComponentType::Heading, None);
        assert!(!decision.allowed);
        assert_eq!(decision.rejection, Some(DropRejection::SectionRequired));
        assert_eq!(decision.message().as_deref(), Some("a Section must exist first"));
    }

    #[test]
    fn test_leaf_target_message() {
        let registry = Registry::standard();
        let decision = can_drop(&registry, ComponentType::Button, Some(ComponentType::Image));
        assert_eq!(decision.message().as_deref(), Some("Image cannot contain other components"));
        assert_eq!(decision.rejection.unwrap().kind(), RejectionKind::InvalidContainment);
    }

    #[test]
    fn test_unregistered_dragged_wins_over_root_rule() {
        let registry = Registry::from_descriptors([ComponentDescriptor::container(ComponentType::Row)]);
        let decision = can_drop(&registry, ComponentType::Section, None);
        assert_eq!(
            decision.rejection,
            Some(DropRejection::UnknownComponent("Section".into()))
        );
    }

    #[test]
    fn test_unregistered_target() {
        let registry = Registry::from_descriptors([ComponentDescriptor::leaf(ComponentType::Heading)]);
        let decision = can_drop(&registry, ComponentType::Heading, Some(ComponentType::Grid));
        assert_eq!(decision.rejection, Some(DropRejection::UnknownTarget("Grid".into())));
        assert_eq!(decision.rejection.unwrap().kind(), RejectionKind::UnknownComponentType);
    }

    #[test]
    fn test_named_unknown_dragged_ignores_target() {
        let registry = Registry::standard();
        for target in [None, Some("Section"), Some("Image"), Some("Nope")] {
            let decision = can_drop_named(&registry, "UnknownX", target);
            assert_eq!(
                decision.rejection,
                Some(DropRejection::UnknownComponent("UnknownX".into()))
            );
        }
    }

    #[test]
    fn test_named_unknown_target() {
        let registry = Registry::standard();
        let decision = can_drop_named(&registry, "Heading", Some("UnknownTarget"));
        assert!(!decision.allowed);
        assert_eq!(decision.message().as_deref(), Some("unknown target: UnknownTarget"));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(DropDecision::allow().into_result(), Ok(()));
        assert_eq!(
            DropDecision::deny(DropRejection::SectionRequired).into_result(),
            Err(Some(DropRejection::SectionRequired))
        );
    }
}
