//! Drag interaction handling, one function per pointer event.

use std::time::Instant;

use log::trace;

use crate::geometry::{relative_position, snap_to_grid};
use crate::state::DragState;
use crate::traits::DragDelegate;
use crate::types::{Point, PointerEvent};

/// Context passed to interaction handlers (avoids threading many parameters).
pub struct InteractionContext<'a> {
    pub delegate: &'a mut dyn DragDelegate,
    /// Grid cell size in diagram units.
    pub grid_size: f64,
    /// Width of the fixed side panel left of the canvas.
    pub sidebar_width: f64,
}

impl InteractionContext<'_> {
    /// Snapped diagram-space position of a pointer event.
    fn event_position(&self, event: &PointerEvent) -> Point {
        snap_to_grid(
            relative_position(event.position(), self.sidebar_width),
            self.grid_size,
        )
    }
}

/// `Idle --mouseDown--> Dragging`.
///
/// An alt-down on an unselected element first asks the delegate to split off
/// a new element, and the drag follows that one. A down on an element that is
/// already selected keeps the whole selection for a group move.
pub fn handle_mouse_down(
    state: &mut DragState,
    ctx: &mut InteractionContext,
    id: u64,
    event: &mut PointerEvent,
) {
    event.stop_propagation();

    let pos = ctx.event_position(event);
    let mut target = id;

    if !ctx.delegate.is_selected(id) {
        if event.alt_key {
            target = ctx.delegate.split(id, pos);
        }
        ctx.delegate.select(target);
    }

    trace!("drag start: target {target} at ({}, {})", pos.x, pos.y);
    state.origin = Some(pos);
    state.move_target = Some(target);
    state.throttle.reset();
}

/// `Dragging --mouseMove--> Dragging`.
///
/// Rate-limited; gated events leave their position pending and it takes
/// effect at the next allowed tick (or on release). A move with no active
/// drag is a no-op.
pub fn handle_mouse_move(
    state: &mut DragState,
    ctx: &mut InteractionContext,
    event: &mut PointerEvent,
    now: Instant,
) {
    if !state.is_dragging() {
        return;
    }
    event.stop_propagation();

    let pos = ctx.event_position(event);
    if let Some(pos) = state.throttle.submit(pos, now) {
        apply_move(state, ctx, pos);
    }
}

/// `Dragging --mouseUp--> Idle`.
///
/// Flushes any coalesced move so the release position is never lost, then
/// asks the delegate to reconcile overlaps. An up with no active drag is a
/// no-op.
pub fn handle_mouse_up(state: &mut DragState, ctx: &mut InteractionContext, event: &mut PointerEvent) {
    if !state.is_dragging() {
        return;
    }
    event.stop_propagation();

    if let Some(pos) = state.throttle.flush() {
        apply_move(state, ctx, pos);
    }

    if let Some(target) = state.move_target {
        trace!("drag end: merging around {target}");
        ctx.delegate.merge(target, true);
    }

    state.origin = None;
    state.move_target = None;
    state.throttle.reset();
}

/// Incremental move step: deltas are relative to the last processed
/// position, not the drag start, so successive events never double-apply.
fn apply_move(state: &mut DragState, ctx: &mut InteractionContext, pos: Point) {
    let Some(origin) = state.origin else { return };
    if pos != origin {
        ctx.delegate.move_selected(pos - origin);
        state.origin = Some(pos);
    }
}
