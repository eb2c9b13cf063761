//! Trait definitions for decoupling drag handling from domain-specific types.

use crate::types::Point;

/// Capability set a draggable element kind exposes to the drag state machine.
///
/// The machine never touches element data directly: selection queries, bulk
/// moves, split-on-alt-drag and merge resolution all go through here. A
/// delegate wraps mutable access to the caller's element store for the
/// duration of one event.
pub trait DragDelegate {
    /// Whether the element is currently part of its kind's selection.
    fn is_selected(&self, id: u64) -> bool;

    /// Replace the active selection with exactly this element.
    fn select(&mut self, id: u64);

    /// Create a split-off element at `pos` and return the id the drag should
    /// follow from now on. The default keeps dragging the original.
    fn split(&mut self, id: u64, pos: Point) -> u64 {
        let _ = pos;
        id
    }

    /// Translate every selected element of this kind by `delta`.
    fn move_selected(&mut self, delta: Point);

    /// Reconcile overlaps produced by the drag that just ended, reselecting
    /// the surviving element when `reselect` is set.
    fn merge(&mut self, id: u64, reselect: bool);
}
