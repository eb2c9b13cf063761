//! Integration tests for the store mutation handlers.

use library::DiagramError;
use library::editor::handlers::ElementHandler;
use library::model::{Anchor, DiagramConfig, ElementKind, Propagator, PropagatorKind};
use library::seed::seed_diagram;
use splittable::Point;

use std::collections::HashSet;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_add_anchors_rejects_duplicate_id() {
    init_logging();
    let mut diagram = seed_diagram().unwrap();

    let result = ElementHandler::add_anchors(
        &mut diagram,
        [Anchor::new(4, 0.0, 0.0), Anchor::new(2, 50.0, 50.0)],
    );

    assert_eq!(
        result,
        Err(DiagramError::DuplicateId {
            kind: "anchor",
            id: 2
        })
    );
    // A rejected batch leaves the store untouched.
    assert_eq!(diagram.anchors.len(), 3);
    assert!(diagram.anchor(4).is_none());
}

#[test]
fn test_add_propagators_validates_endpoints() {
    let mut diagram = seed_diagram().unwrap();

    let missing = ElementHandler::add_propagators(
        &mut diagram,
        [Propagator::new(3, PropagatorKind::Photon, 1, 9)],
    );
    assert_eq!(missing, Err(DiagramError::UnknownAnchor(9)));

    let degenerate = ElementHandler::add_propagators(
        &mut diagram,
        [Propagator::new(3, PropagatorKind::Photon, 2, 2)],
    );
    assert_eq!(degenerate, Err(DiagramError::SelfLoop { id: 3, anchor: 2 }));

    assert_eq!(diagram.propagators.len(), 2);
}

#[test]
fn test_set_anchor_location() {
    let mut diagram = seed_diagram().unwrap();

    ElementHandler::set_anchor_location(&mut diagram, 2, 50.0, 100.0).unwrap();
    let anchor = diagram.anchor(2).unwrap();
    assert_eq!((anchor.x, anchor.y), (50.0, 100.0));

    assert_eq!(
        ElementHandler::set_anchor_location(&mut diagram, 9, 0.0, 0.0),
        Err(DiagramError::UnknownAnchor(9))
    );
}

#[test]
fn test_set_propagator_kind() {
    let mut diagram = seed_diagram().unwrap();

    ElementHandler::set_propagator_kind(&mut diagram, 1, PropagatorKind::Photon).unwrap();
    assert_eq!(diagram.propagator(1).unwrap().kind, PropagatorKind::Photon);

    assert_eq!(
        ElementHandler::set_propagator_kind(&mut diagram, 9, PropagatorKind::Dashed),
        Err(DiagramError::UnknownPropagator(9))
    );
}

#[test]
fn test_move_selected_anchors_as_group() {
    let mut diagram = seed_diagram().unwrap();
    let config = DiagramConfig::default();
    diagram
        .selection
        .insert(ElementKind::Anchors, HashSet::from([1, 3]));

    ElementHandler::move_selected_elements(
        &mut diagram,
        &config,
        ElementKind::Anchors,
        Point::new(50.0, -50.0),
    );

    let a1 = diagram.anchor(1).unwrap();
    let a3 = diagram.anchor(3).unwrap();
    assert_eq!((a1.x, a1.y), (100.0, 50.0));
    assert_eq!((a3.x, a3.y), (450.0, 150.0));
    // Unselected anchors stay put.
    let a2 = diagram.anchor(2).unwrap();
    assert_eq!((a2.x, a2.y), (100.0, 150.0));
}

#[test]
fn test_move_skips_fixed_anchors_when_locked() {
    let mut diagram = seed_diagram().unwrap();
    diagram.anchor_mut(1).unwrap().fixed = true;
    diagram
        .selection
        .insert(ElementKind::Anchors, HashSet::from([1, 2]));

    let config = DiagramConfig {
        drag_fixed_anchors: false,
        ..Default::default()
    };
    ElementHandler::move_selected_elements(
        &mut diagram,
        &config,
        ElementKind::Anchors,
        Point::new(50.0, 0.0),
    );

    let a1 = diagram.anchor(1).unwrap();
    assert_eq!((a1.x, a1.y), (50.0, 100.0));
    let a2 = diagram.anchor(2).unwrap();
    assert_eq!((a2.x, a2.y), (150.0, 150.0));
}

#[test]
fn test_move_selected_propagators_moves_shared_anchor_once() {
    let mut diagram = seed_diagram().unwrap();
    let config = DiagramConfig::default();
    // Anchor 1 is an endpoint of both selected propagators.
    diagram
        .selection
        .insert(ElementKind::Propagators, HashSet::from([1, 2]));

    ElementHandler::move_selected_elements(
        &mut diagram,
        &config,
        ElementKind::Propagators,
        Point::new(10.0, 10.0),
    );

    let a1 = diagram.anchor(1).unwrap();
    assert_eq!((a1.x, a1.y), (60.0, 110.0));
    let a2 = diagram.anchor(2).unwrap();
    assert_eq!((a2.x, a2.y), (110.0, 160.0));
    let a3 = diagram.anchor(3).unwrap();
    assert_eq!((a3.x, a3.y), (410.0, 210.0));
}

#[test]
fn test_delete_selected_removes_attached_propagators() {
    let mut diagram = seed_diagram().unwrap();
    diagram.select_elements(ElementKind::Anchors, 1);

    ElementHandler::delete_selected(&mut diagram);

    assert!(diagram.anchor(1).is_none());
    // Both seed propagators touched anchor 1.
    assert!(diagram.propagators.is_empty());
    assert!(diagram.selected(ElementKind::Anchors).is_empty());
    diagram.check_integrity().unwrap();
}

#[test]
fn test_delete_selected_propagator_keeps_anchors() {
    let mut diagram = seed_diagram().unwrap();
    diagram.select_elements(ElementKind::Propagators, 1);

    ElementHandler::delete_selected(&mut diagram);

    assert!(diagram.propagator(1).is_none());
    assert!(diagram.propagator(2).is_some());
    assert_eq!(diagram.anchors.len(), 3);
    diagram.check_integrity().unwrap();
}
