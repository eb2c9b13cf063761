//! Coordinate transform and grid snapping.

use crate::types::Point;

/// Map a viewport-space point into diagram space by removing the fixed
/// sidebar offset. Pure and stable: repeated calls during one drag must
/// agree so that successive deltas compose.
pub fn relative_position(p: Point, sidebar_width: f64) -> Point {
    Point::new(p.x - sidebar_width, p.y)
}

/// Inverse of [`relative_position`].
pub fn client_position(p: Point, sidebar_width: f64) -> Point {
    Point::new(p.x + sidebar_width, p.y)
}

/// Quantize a diagram-space point to the nearest multiple of `grid_size`.
///
/// Ties round away from zero (`f64::round` semantics). Idempotent: snapping
/// an already-snapped point returns the same point.
pub fn snap_to_grid(p: Point, grid_size: f64) -> Point {
    debug_assert!(grid_size > 0.0);
    Point::new(
        (p.x / grid_size).round() * grid_size,
        (p.y / grid_size).round() * grid_size,
    )
}
