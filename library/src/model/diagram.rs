//! The diagram element store.

use std::collections::{HashMap, HashSet};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use splittable::Point;

use crate::error::DiagramError;
use crate::model::{Anchor, AnchorId, ElementKind, Propagator, PropagatorId};

/// Hashable grid-cell key for a snapped position.
type GridCell = (OrderedFloat<f64>, OrderedFloat<f64>);

fn grid_cell(p: Point) -> GridCell {
    (OrderedFloat(p.x), OrderedFloat(p.y))
}

/// Authoritative mapping of element identities to their attributes, plus the
/// per-kind selection. Sole owner of anchor/propagator records; the selection
/// holds ids only.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Diagram {
    pub anchors: HashMap<AnchorId, Anchor>,
    pub propagators: HashMap<PropagatorId, Propagator>,
    #[serde(default)]
    pub selection: HashMap<ElementKind, HashSet<u64>>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchor(&self, id: AnchorId) -> Option<&Anchor> {
        self.anchors.get(&id)
    }

    pub fn anchor_mut(&mut self, id: AnchorId) -> Option<&mut Anchor> {
        self.anchors.get_mut(&id)
    }

    pub fn propagator(&self, id: PropagatorId) -> Option<&Propagator> {
        self.propagators.get(&id)
    }

    pub fn propagator_mut(&mut self, id: PropagatorId) -> Option<&mut Propagator> {
        self.propagators.get_mut(&id)
    }

    /// Next collision-free anchor id: one past the current maximum.
    pub fn next_anchor_id(&self) -> AnchorId {
        self.anchors.keys().max().map_or(1, |max| max + 1)
    }

    /// Next collision-free propagator id: one past the current maximum.
    pub fn next_propagator_id(&self) -> PropagatorId {
        self.propagators.keys().max().map_or(1, |max| max + 1)
    }

    /// Ids of all anchors occupying the grid cell of `pos`, in ascending
    /// order.
    pub fn anchors_at(&self, pos: Point) -> Vec<AnchorId> {
        let cell = grid_cell(pos);
        let mut ids: Vec<AnchorId> = self
            .anchors
            .values()
            .filter(|a| grid_cell(a.position()) == cell)
            .map(|a| a.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Replace the whole selection with exactly this element. Single-select
    /// semantics: picking an anchor also deselects any propagators, and vice
    /// versa.
    pub fn select_elements(&mut self, kind: ElementKind, id: u64) {
        self.selection.clear();
        self.selection.insert(kind, HashSet::from([id]));
    }

    pub fn is_selected(&self, kind: ElementKind, id: u64) -> bool {
        self.selection
            .get(&kind)
            .is_some_and(|ids| ids.contains(&id))
    }

    /// Ids currently selected for `kind`, in ascending order.
    pub fn selected(&self, kind: ElementKind) -> Vec<u64> {
        let mut ids: Vec<u64> = self
            .selection
            .get(&kind)
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default();
        ids.sort_unstable();
        ids
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // -----------------------------------------------------------------------
    // Invariants
    // -----------------------------------------------------------------------

    /// Verify that every propagator references two distinct, existing
    /// anchors. A failure here is an internal invariant violation.
    pub fn check_integrity(&self) -> Result<(), DiagramError> {
        for p in self.propagators.values() {
            if p.anchor1 == p.anchor2 {
                return Err(DiagramError::SelfLoop {
                    id: p.id,
                    anchor: p.anchor1,
                });
            }
            for anchor in [p.anchor1, p.anchor2] {
                if !self.anchors.contains_key(&anchor) {
                    return Err(DiagramError::DanglingReference {
                        propagator: p.id,
                        anchor,
                    });
                }
            }
        }
        Ok(())
    }
}
