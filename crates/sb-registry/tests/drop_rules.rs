//! Drop rule tests across the whole standard registry

use sb_registry::{
    can_drop, can_drop_named, Category, ComponentDescriptor, ComponentType, DropDecision,
    DropRejection, Registry, RejectionKind,
};

fn leaves(registry: &Registry) -> Vec<ComponentType> {
    registry.iter().filter(|d| !d.can_have_children).map(|d| d.kind).collect()
}

fn containers(registry: &Registry) -> Vec<ComponentType> {
    registry.iter().filter(|d| d.can_have_children).map(|d| d.kind).collect()
}

// ============================================================================
// CONTAINMENT
// ============================================================================

#[test]
fn test_leaf_targets_refuse_everything() {
    let registry = Registry::standard();
    let leaves = leaves(&registry);
    assert!(!leaves.is_empty());

    for leaf in &leaves {
        for dragged in ComponentType::ALL {
            let decision = can_drop(&registry, dragged, Some(*leaf));
            assert!(!decision.allowed, "{} accepted {}", leaf, dragged);
            let message = decision.message().unwrap();
            assert!(message.contains(leaf.name()), "message {:?} does not name {}", message, leaf);
        }
    }
}

#[test]
fn test_container_targets_accept_everything() {
    let registry = Registry::standard();

    for container in containers(&registry) {
        for dragged in ComponentType::ALL {
            assert_eq!(
                can_drop(&registry, dragged, Some(container)),
                DropDecision::allow(),
                "{} refused {}",
                container,
                dragged
            );
        }
    }
}

#[test]
fn test_slotted_blocks_behave_like_containers() {
    let registry = Registry::standard();
    for desc in registry.by_category(Category::Advanced) {
        assert!(desc.has_slots);
        assert!(can_drop(&registry, ComponentType::Heading, Some(desc.kind)).allowed);
    }
}

#[test]
fn test_container_may_receive_its_own_type() {
    let registry = Registry::standard();
    assert!(can_drop(&registry, ComponentType::Section, Some(ComponentType::Section)).allowed);
    assert!(can_drop(&registry, ComponentType::Grid, Some(ComponentType::Grid)).allowed);
}

// ============================================================================
// EMPTY CANVAS
// ============================================================================

#[test]
fn test_empty_canvas_requires_section() {
    let registry = Registry::standard();

    assert_eq!(can_drop(&registry, ComponentType::Section, None), DropDecision::allow());

    for dragged in ComponentType::ALL.into_iter().filter(|k| *k != ComponentType::Section) {
        let decision = can_drop(&registry, dragged, None);
        assert!(!decision.allowed);
        assert_eq!(decision.rejection, Some(DropRejection::SectionRequired));
        assert!(decision.message().unwrap().contains("Section"));
    }
}

// ============================================================================
// UNKNOWN TYPES
// ============================================================================

#[test]
fn test_unknown_dragged_name() {
    let registry = Registry::standard();
    let mut targets: Vec<Option<&str>> = ComponentType::ALL.iter().map(|k| Some(k.name())).collect();
    targets.push(None);
    targets.push(Some("UnknownTarget"));

    for target in targets {
        let decision = can_drop_named(&registry, "UnknownX", target);
        assert!(!decision.allowed);
        assert_eq!(decision.message().as_deref(), Some("unknown component: UnknownX"));
        assert_eq!(decision.rejection.unwrap().kind(), RejectionKind::UnknownComponentType);
    }
}

#[test]
fn test_unknown_target_name() {
    let registry = Registry::standard();
    for dragged in ComponentType::ALL {
        let decision = can_drop_named(&registry, dragged.name(), Some("UnknownTarget"));
        assert!(!decision.allowed);
        assert_eq!(
            decision.rejection,
            Some(DropRejection::UnknownTarget("UnknownTarget".into()))
        );
    }
}

#[test]
fn test_fixture_registry_missing_types() {
    let registry = Registry::from_descriptors([
        ComponentDescriptor::container(ComponentType::Section),
        ComponentDescriptor::leaf(ComponentType::Heading),
    ]);

    assert!(can_drop(&registry, ComponentType::Heading, Some(ComponentType::Section)).allowed);
    assert_eq!(
        can_drop(&registry, ComponentType::Image, Some(ComponentType::Section)).rejection,
        Some(DropRejection::UnknownComponent("Image".into()))
    );
    assert_eq!(
        can_drop(&registry, ComponentType::Heading, Some(ComponentType::Row)).rejection,
        Some(DropRejection::UnknownTarget("Row".into()))
    );
}

#[test]
fn test_named_matches_typed() {
    let registry = Registry::standard();
    for dragged in ComponentType::ALL {
        assert_eq!(
            can_drop_named(&registry, dragged.name(), None),
            can_drop(&registry, dragged, None)
        );
        for target in ComponentType::ALL {
            assert_eq!(
                can_drop_named(&registry, dragged.name(), Some(target.name())),
                can_drop(&registry, dragged, Some(target))
            );
        }
    }
}

// ============================================================================
// PURITY
// ============================================================================

#[test]
fn test_repeated_calls_agree() {
    let registry = Registry::standard();
    let cases = [
        ("Section", None),
        ("Heading", None),
        ("Heading", Some("Section")),
        ("Image", Some("Button")),
        ("UnknownX", Some("Row")),
        ("Row", Some("UnknownTarget")),
    ];

    for (dragged, target) in cases {
        let first = can_drop_named(&registry, dragged, target);
        let second = can_drop_named(&registry, dragged, target);
        assert_eq!(first, second);
    }
}
