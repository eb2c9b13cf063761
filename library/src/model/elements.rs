//! Anchor and propagator element records.

use serde::{Deserialize, Serialize};
use splittable::Point;

pub type AnchorId = u64;
pub type PropagatorId = u64;

/// A point element with a grid-snapped position and unique identity.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct Anchor {
    pub id: AnchorId,
    pub x: f64,
    pub y: f64,
    /// Pinned anchors are exempt from bulk moves when the config locks them,
    /// and win survivorship in a merge.
    #[serde(default)]
    pub fixed: bool,
}

impl Anchor {
    pub fn new(id: AnchorId, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            fixed: false,
        }
    }

    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Line style of a propagator.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "lowercase")]
pub enum PropagatorKind {
    Fermion,
    Gluon,
    Photon,
    Dashed,
}

impl std::fmt::Display for PropagatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropagatorKind::Fermion => write!(f, "fermion"),
            PropagatorKind::Gluon => write!(f, "gluon"),
            PropagatorKind::Photon => write!(f, "photon"),
            PropagatorKind::Dashed => write!(f, "dashed"),
        }
    }
}

/// An edge element between two distinct anchors.
///
/// Both endpoints must exist in the store; `anchor1 != anchor2` always holds
/// for stored propagators.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct Propagator {
    pub id: PropagatorId,
    pub kind: PropagatorKind,
    pub anchor1: AnchorId,
    pub anchor2: AnchorId,
}

impl Propagator {
    pub fn new(id: PropagatorId, kind: PropagatorKind, anchor1: AnchorId, anchor2: AnchorId) -> Self {
        Self {
            id,
            kind,
            anchor1,
            anchor2,
        }
    }

    /// Whether this propagator touches the given anchor.
    pub fn references(&self, anchor: AnchorId) -> bool {
        self.anchor1 == anchor || self.anchor2 == anchor
    }
}
