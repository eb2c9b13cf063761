//! Interaction state for a draggable element.

use crate::throttle::MoveThrottle;
use crate::types::Point;

/// Per-instance drag state. One of these exists for every draggable element;
/// it is idle exactly when `origin` is `None`.
#[derive(Debug, Default)]
pub struct DragState {
    /// Last processed pointer position in diagram space while a drag is
    /// active.
    pub origin: Option<Point>,
    /// Id of the element the active drag is moving.
    pub move_target: Option<u64>,
    /// Coalesces high-frequency move events.
    pub throttle: MoveThrottle,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }
}
