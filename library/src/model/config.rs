//! Layout and interaction configuration.

use serde::{Deserialize, Serialize};

use crate::model::PropagatorKind;

/// Canvas configuration the core reads but never writes.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct DiagramConfig {
    /// Grid cell size in diagram units.
    #[serde(default = "default_grid_size")]
    pub grid_size: f64,
    /// Width of the fixed side panel left of the canvas.
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: f64,
    /// Whether bulk moves apply to `fixed` anchors.
    #[serde(default = "default_drag_fixed_anchors")]
    pub drag_fixed_anchors: bool,
    /// Kind assigned to propagators created by an alt-drag split.
    #[serde(default = "default_split_kind")]
    pub default_split_kind: PropagatorKind,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            sidebar_width: default_sidebar_width(),
            drag_fixed_anchors: default_drag_fixed_anchors(),
            default_split_kind: default_split_kind(),
        }
    }
}

fn default_grid_size() -> f64 {
    50.0
}

fn default_sidebar_width() -> f64 {
    250.0
}

fn default_drag_fixed_anchors() -> bool {
    true
}

fn default_split_kind() -> PropagatorKind {
    PropagatorKind::Fermion
}
