use thiserror::Error;

use crate::model::{AnchorId, PropagatorId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    #[error("Unknown anchor: {0}")]
    UnknownAnchor(AnchorId),
    #[error("Unknown propagator: {0}")]
    UnknownPropagator(PropagatorId),
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: u64 },
    #[error("Propagator {propagator} references missing anchor {anchor}")]
    DanglingReference {
        propagator: PropagatorId,
        anchor: AnchorId,
    },
    #[error("Propagator {id} connects anchor {anchor} to itself")]
    SelfLoop { id: PropagatorId, anchor: AnchorId },
}
