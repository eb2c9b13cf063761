//! Merge resolution for anchors sharing a grid cell.

use log::debug;

use crate::error::DiagramError;
use crate::model::{AnchorId, Diagram, ElementKind};

pub struct MergeHandler;

impl MergeHandler {
    /// Fold every anchor occupying the grid cell of `id` into one survivor.
    ///
    /// Survivor policy: a `fixed` collider outranks non-fixed ones; within
    /// the same fixedness the lowest id wins. Propagator endpoints are
    /// rewritten before any anchor is deleted, so no dangling reference is
    /// ever observable; propagators collapsed to a self-loop are dropped.
    /// With `reselect`, the survivor becomes the sole anchor selection.
    ///
    /// Returns the surviving anchor id (the input id when nothing collides).
    pub fn merge_elements(
        diagram: &mut Diagram,
        id: AnchorId,
        reselect: bool,
    ) -> Result<AnchorId, DiagramError> {
        let moved = diagram.anchor(id).ok_or(DiagramError::UnknownAnchor(id))?;
        let colliders = diagram.anchors_at(moved.position());

        let survivor = colliders
            .iter()
            .copied()
            .min_by_key(|aid| {
                let fixed = diagram.anchor(*aid).is_some_and(|a| a.fixed);
                (!fixed, *aid)
            })
            .unwrap_or(id);

        if colliders.len() > 1 {
            debug!("merging anchors {colliders:?} into {survivor}");

            for p in diagram.propagators.values_mut() {
                if colliders.contains(&p.anchor1) {
                    p.anchor1 = survivor;
                }
                if colliders.contains(&p.anchor2) {
                    p.anchor2 = survivor;
                }
            }
            // A propagator between two merged anchors is now degenerate.
            diagram.propagators.retain(|_, p| p.anchor1 != p.anchor2);

            for aid in &colliders {
                if *aid != survivor {
                    diagram.anchors.remove(aid);
                }
            }

            // Merged-away ids must not linger in the selection.
            if let Some(selected) = diagram.selection.get_mut(&ElementKind::Anchors) {
                let mut had_collider = false;
                for aid in &colliders {
                    had_collider |= selected.remove(aid);
                }
                if had_collider {
                    selected.insert(survivor);
                }
            }
        }

        if reselect {
            diagram.select_elements(ElementKind::Anchors, survivor);
        }
        Ok(survivor)
    }
}
