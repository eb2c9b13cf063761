//! Drag capability binding for propagators.

use log::warn;
use splittable::{DragDelegate, Point};

use crate::editor::handlers::{ElementHandler, MergeHandler};
use crate::model::{Diagram, DiagramConfig, ElementKind};

/// Drags a propagator by translating both of its endpoint anchors. Uses the
/// default (identity) split: alt-dragging a propagator keeps dragging the
/// propagator itself.
pub struct PropagatorDrag<'a> {
    diagram: &'a mut Diagram,
    config: &'a DiagramConfig,
}

impl<'a> PropagatorDrag<'a> {
    pub fn new(diagram: &'a mut Diagram, config: &'a DiagramConfig) -> Self {
        Self { diagram, config }
    }
}

impl DragDelegate for PropagatorDrag<'_> {
    fn is_selected(&self, id: u64) -> bool {
        self.diagram.is_selected(ElementKind::Propagators, id)
    }

    fn select(&mut self, id: u64) {
        self.diagram.select_elements(ElementKind::Propagators, id);
    }

    fn move_selected(&mut self, delta: Point) {
        ElementHandler::move_selected_elements(
            self.diagram,
            self.config,
            ElementKind::Propagators,
            delta,
        );
    }

    /// Reconcile both endpoints of the dragged propagator. Merging the first
    /// endpoint can rewrite (or drop) the propagator, so the second endpoint
    /// is read back before its merge.
    fn merge(&mut self, id: u64, reselect: bool) {
        let Some(p) = self.diagram.propagator(id) else {
            return;
        };
        let first = p.anchor1;
        if let Err(e) = MergeHandler::merge_elements(self.diagram, first, false) {
            warn!("merge around propagator {id} failed: {e}");
        }

        if let Some(p) = self.diagram.propagator(id) {
            let second = p.anchor2;
            if let Err(e) = MergeHandler::merge_elements(self.diagram, second, false) {
                warn!("merge around propagator {id} failed: {e}");
            }
        }

        if reselect && self.diagram.propagator(id).is_some() {
            self.diagram.select_elements(ElementKind::Propagators, id);
        }
    }
}
