//! Store mutations for adding, moving, selecting and deleting elements.

use std::collections::HashSet;

use log::debug;
use splittable::Point;

use crate::error::DiagramError;
use crate::model::{Anchor, AnchorId, Diagram, DiagramConfig, ElementKind, Propagator, PropagatorKind};

pub struct ElementHandler;

impl ElementHandler {
    /// Insert a batch of anchors. The batch is validated up front so a
    /// failure leaves the store untouched.
    pub fn add_anchors(
        diagram: &mut Diagram,
        anchors: impl IntoIterator<Item = Anchor>,
    ) -> Result<(), DiagramError> {
        let anchors: Vec<Anchor> = anchors.into_iter().collect();

        let mut incoming = HashSet::new();
        for anchor in &anchors {
            if diagram.anchors.contains_key(&anchor.id) || !incoming.insert(anchor.id) {
                return Err(DiagramError::DuplicateId {
                    kind: "anchor",
                    id: anchor.id,
                });
            }
        }

        for anchor in anchors {
            debug!("add anchor {} at ({}, {})", anchor.id, anchor.x, anchor.y);
            diagram.anchors.insert(anchor.id, anchor);
        }
        Ok(())
    }

    /// Insert a batch of propagators. Endpoints must exist and differ; the
    /// batch is validated up front so a failure leaves the store untouched.
    pub fn add_propagators(
        diagram: &mut Diagram,
        propagators: impl IntoIterator<Item = Propagator>,
    ) -> Result<(), DiagramError> {
        let propagators: Vec<Propagator> = propagators.into_iter().collect();

        let mut incoming = HashSet::new();
        for p in &propagators {
            if diagram.propagators.contains_key(&p.id) || !incoming.insert(p.id) {
                return Err(DiagramError::DuplicateId {
                    kind: "propagator",
                    id: p.id,
                });
            }
            if p.anchor1 == p.anchor2 {
                return Err(DiagramError::SelfLoop {
                    id: p.id,
                    anchor: p.anchor1,
                });
            }
            for anchor in [p.anchor1, p.anchor2] {
                if !diagram.anchors.contains_key(&anchor) {
                    return Err(DiagramError::UnknownAnchor(anchor));
                }
            }
        }

        for p in propagators {
            debug!("add {} propagator {} ({} -> {})", p.kind, p.id, p.anchor1, p.anchor2);
            diagram.propagators.insert(p.id, p);
        }
        Ok(())
    }

    /// Move one anchor to an absolute position.
    pub fn set_anchor_location(
        diagram: &mut Diagram,
        id: AnchorId,
        x: f64,
        y: f64,
    ) -> Result<(), DiagramError> {
        let anchor = diagram
            .anchor_mut(id)
            .ok_or(DiagramError::UnknownAnchor(id))?;
        anchor.x = x;
        anchor.y = y;
        Ok(())
    }

    /// Change the line style of one propagator.
    pub fn set_propagator_kind(
        diagram: &mut Diagram,
        id: u64,
        kind: PropagatorKind,
    ) -> Result<(), DiagramError> {
        let propagator = diagram
            .propagator_mut(id)
            .ok_or(DiagramError::UnknownPropagator(id))?;
        propagator.kind = kind;
        Ok(())
    }

    /// Translate the current selection for `kind` by `delta`.
    ///
    /// For anchors, `fixed` ones are skipped when the config locks them. For
    /// propagators, the union of endpoint anchors moves, each exactly once
    /// even when shared between selected propagators.
    pub fn move_selected_elements(
        diagram: &mut Diagram,
        config: &DiagramConfig,
        kind: ElementKind,
        delta: Point,
    ) {
        let anchors_to_move: HashSet<AnchorId> = match kind {
            ElementKind::Anchors => diagram.selected(kind).into_iter().collect(),
            ElementKind::Propagators => diagram
                .selected(kind)
                .into_iter()
                .filter_map(|id| diagram.propagator(id))
                .flat_map(|p| [p.anchor1, p.anchor2])
                .collect(),
        };

        for id in anchors_to_move {
            if let Some(anchor) = diagram.anchor_mut(id) {
                if anchor.fixed && !config.drag_fixed_anchors {
                    continue;
                }
                anchor.x += delta.x;
                anchor.y += delta.y;
            }
        }
    }

    /// Remove every selected element: selected propagators, and selected
    /// anchors together with all propagators referencing them. Clears the
    /// selection.
    pub fn delete_selected(diagram: &mut Diagram) {
        let propagators: Vec<u64> = diagram.selected(ElementKind::Propagators);
        let anchors: Vec<u64> = diagram.selected(ElementKind::Anchors);

        for id in &propagators {
            diagram.propagators.remove(id);
        }
        for id in &anchors {
            diagram.anchors.remove(id);
            diagram.propagators.retain(|_, p| !p.references(*id));
        }

        debug!(
            "deleted {} propagator(s), {} anchor(s)",
            propagators.len(),
            anchors.len()
        );
        diagram.clear_selection();
    }
}
