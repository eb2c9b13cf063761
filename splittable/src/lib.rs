//! Standalone drag-interaction state machine for grid-snapped canvases.
//!
//! This crate provides reusable mouse-drag handling with no domain-specific
//! dependencies. Users implement the [`DragDelegate`] trait to connect their
//! own element store: selection, bulk moves, split-on-alt-drag and merge
//! resolution all route through the delegate.

pub mod geometry;
pub mod interactions;
pub mod state;
pub mod throttle;
pub mod traits;
pub mod types;

pub use geometry::{relative_position, snap_to_grid};
pub use interactions::{
    InteractionContext, handle_mouse_down, handle_mouse_move, handle_mouse_up,
};
pub use state::DragState;
pub use throttle::MoveThrottle;
pub use traits::DragDelegate;
pub use types::{Point, PointerEvent};
