//! Rate limiting for high-frequency pointer input.

use std::time::{Duration, Instant};

use crate::types::Point;

/// Coalescing rate limiter for move processing.
///
/// At most one position passes per interval; positions arriving faster are
/// coalesced, with only the latest pending one surviving until the next
/// allowed tick. The caller supplies `now` so event timestamps (and tests)
/// stay in control of the clock.
#[derive(Debug)]
pub struct MoveThrottle {
    interval: Duration,
    last_run: Option<Instant>,
    pending: Option<Point>,
}

impl Default for MoveThrottle {
    fn default() -> Self {
        Self::new(Duration::from_millis(20))
    }
}

impl MoveThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
            pending: None,
        }
    }

    /// Offer a position. Returns it back when the interval has elapsed,
    /// otherwise stores it as the pending position and returns `None`.
    pub fn submit(&mut self, pos: Point, now: Instant) -> Option<Point> {
        let ready = match self.last_run {
            Some(last) => now.duration_since(last) >= self.interval,
            None => true,
        };
        if ready {
            self.last_run = Some(now);
            self.pending = None;
            Some(pos)
        } else {
            self.pending = Some(pos);
            None
        }
    }

    /// Take the coalesced position, if any, regardless of the clock.
    /// Called on drag release so the final position is never dropped.
    pub fn flush(&mut self) -> Option<Point> {
        self.pending.take()
    }

    pub fn reset(&mut self) {
        self.last_run = None;
        self.pending = None;
    }
}
