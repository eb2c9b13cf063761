//! Editor operations - the mutation surface an event layer drives.
//!
//! Handlers apply dispatch-style mutations to a [`crate::model::Diagram`];
//! the drag delegates bind the store to the `splittable` interaction crate.

pub mod anchor_drag;
pub mod handlers;
pub mod propagator_drag;

pub use anchor_drag::AnchorDrag;
pub use propagator_drag::PropagatorDrag;
