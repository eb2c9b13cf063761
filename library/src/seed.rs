//! Initial diagram seeding.

use crate::editor::handlers::ElementHandler;
use crate::error::DiagramError;
use crate::model::{Anchor, Diagram, Propagator, PropagatorKind};

/// Build the starter diagram issued to a fresh canvas: three anchors and two
/// propagators. Seeding is ordinary batched adds - configuration, not core
/// logic.
pub fn seed_diagram() -> Result<Diagram, DiagramError> {
    let mut diagram = Diagram::new();

    ElementHandler::add_anchors(
        &mut diagram,
        [
            Anchor::new(1, 50.0, 100.0),
            Anchor::new(2, 100.0, 150.0),
            Anchor::new(3, 400.0, 200.0),
        ],
    )?;

    ElementHandler::add_propagators(
        &mut diagram,
        [
            Propagator::new(1, PropagatorKind::Gluon, 1, 2),
            Propagator::new(2, PropagatorKind::Fermion, 1, 3),
        ],
    )?;

    Ok(diagram)
}
