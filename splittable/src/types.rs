//! Lightweight data types for drag interaction.

use std::ops::{Add, Sub};

/// A point in diagram space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// A pointer event in viewport (client) coordinates.
///
/// Handlers that consume an event mark it via [`PointerEvent::stop_propagation`]
/// so enclosing containers skip it.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
    pub alt_key: bool,
    propagation_stopped: bool,
}

impl PointerEvent {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            alt_key: false,
            propagation_stopped: false,
        }
    }

    pub fn with_alt(mut self) -> Self {
        self.alt_key = true;
        self
    }

    /// Viewport position of this event.
    pub fn position(&self) -> Point {
        Point::new(self.client_x, self.client_y)
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
