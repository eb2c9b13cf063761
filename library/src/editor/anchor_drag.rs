//! Drag capability binding for anchors.

use log::warn;
use splittable::{DragDelegate, Point};

use crate::editor::handlers::{ElementHandler, MergeHandler, SplitHandler};
use crate::model::{Diagram, DiagramConfig, ElementKind};

/// Wraps mutable store access for the duration of one pointer event so the
/// `splittable` state machine can drag anchors. Alt-drags split off a new
/// anchor wired to the original.
pub struct AnchorDrag<'a> {
    diagram: &'a mut Diagram,
    config: &'a DiagramConfig,
}

impl<'a> AnchorDrag<'a> {
    pub fn new(diagram: &'a mut Diagram, config: &'a DiagramConfig) -> Self {
        Self { diagram, config }
    }
}

impl DragDelegate for AnchorDrag<'_> {
    fn is_selected(&self, id: u64) -> bool {
        self.diagram.is_selected(ElementKind::Anchors, id)
    }

    fn select(&mut self, id: u64) {
        self.diagram.select_elements(ElementKind::Anchors, id);
    }

    fn split(&mut self, id: u64, pos: Point) -> u64 {
        match SplitHandler::split_anchor(self.diagram, self.config, id, pos) {
            Ok(new_id) => new_id,
            Err(e) => {
                warn!("split of anchor {id} failed: {e}");
                id
            }
        }
    }

    fn move_selected(&mut self, delta: Point) {
        ElementHandler::move_selected_elements(
            self.diagram,
            self.config,
            ElementKind::Anchors,
            delta,
        );
    }

    fn merge(&mut self, id: u64, reselect: bool) {
        if let Err(e) = MergeHandler::merge_elements(self.diagram, id, reselect) {
            warn!("merge around anchor {id} failed: {e}");
        }
    }
}
