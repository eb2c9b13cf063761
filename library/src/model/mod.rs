pub mod config;
pub mod diagram;
pub mod elements;

pub use config::DiagramConfig;
pub use diagram::Diagram;
pub use elements::{Anchor, AnchorId, Propagator, PropagatorId, PropagatorKind};

use serde::{Deserialize, Serialize};

/// Element kinds the selection is tracked for.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Anchors,
    Propagators,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::Anchors => write!(f, "anchors"),
            ElementKind::Propagators => write!(f, "propagators"),
        }
    }
}
