//! Split-off creation of new anchors during an alt-drag.

use log::debug;
use splittable::Point;

use crate::error::DiagramError;
use crate::model::{Anchor, AnchorId, Diagram, DiagramConfig, Propagator};

pub struct SplitHandler;

impl SplitHandler {
    /// Create a new anchor at `pos` wired to `source` by a propagator of the
    /// configured default kind. Returns the new anchor's id; existing
    /// propagators are untouched.
    pub fn split_anchor(
        diagram: &mut Diagram,
        config: &DiagramConfig,
        source: AnchorId,
        pos: Point,
    ) -> Result<AnchorId, DiagramError> {
        if diagram.anchor(source).is_none() {
            return Err(DiagramError::UnknownAnchor(source));
        }

        let anchor_id = diagram.next_anchor_id();
        diagram
            .anchors
            .insert(anchor_id, Anchor::new(anchor_id, pos.x, pos.y));

        let propagator_id = diagram.next_propagator_id();
        diagram.propagators.insert(
            propagator_id,
            Propagator::new(propagator_id, config.default_split_kind, source, anchor_id),
        );

        debug!(
            "split anchor {source}: new anchor {anchor_id}, {} propagator {propagator_id}",
            config.default_split_kind
        );
        Ok(anchor_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropagatorKind;

    #[test]
    fn test_split_creates_anchor_and_propagator() {
        let mut diagram = Diagram::new();
        diagram.anchors.insert(1, Anchor::new(1, 50.0, 100.0));

        let config = DiagramConfig::default();
        let new_id =
            SplitHandler::split_anchor(&mut diagram, &config, 1, Point::new(150.0, 200.0)).unwrap();

        assert_eq!(new_id, 2);
        let anchor = diagram.anchor(new_id).unwrap();
        assert_eq!((anchor.x, anchor.y), (150.0, 200.0));

        assert_eq!(diagram.propagators.len(), 1);
        let p = diagram.propagator(1).unwrap();
        assert_eq!(p.kind, PropagatorKind::Fermion);
        assert_eq!((p.anchor1, p.anchor2), (1, new_id));
    }

    #[test]
    fn test_split_unknown_source_errors() {
        let mut diagram = Diagram::new();
        let config = DiagramConfig::default();
        assert_eq!(
            SplitHandler::split_anchor(&mut diagram, &config, 9, Point::default()),
            Err(DiagramError::UnknownAnchor(9))
        );
    }
}
