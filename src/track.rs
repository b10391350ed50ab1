//! Position track: the current position and the trail of positions received
//! since the origin was established or last reset.
//!
//! All points are stored in the local metric frame, never in pixels, so a
//! resize or scale change needs no re-projection of history.

#[cfg(test)]
#[path = "track_test.rs"]
mod track_test;

use crate::camera::Point;
use crate::consts::TRAIL_DOT_TARGET;

/// Current position, trail, and origin flag.
///
/// Invariant: once `origin_set` is true the trail holds at least one point.
#[derive(Debug, Clone, Default)]
pub struct TrackState {
    position: Point,
    trail: Vec<Point>,
    origin_set: bool,
}

impl TrackState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new origin-relative position.
    ///
    /// The first call establishes the reference frame and starts the trail
    /// with this point; later calls append.
    pub fn update_position(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        self.position = point;
        if self.origin_set {
            self.trail.push(point);
        } else {
            self.origin_set = true;
            self.trail = vec![point];
            log::info!("origin established at ({x:.2}, {y:.2})");
        }
    }

    /// Restart the trail at the current position and mark the origin as set.
    ///
    /// Before any fix this pins the frame at the default position, so the
    /// next update appends to it.
    pub fn reset_origin(&mut self) {
        self.trail.clear();
        self.trail.push(self.position);
        self.origin_set = true;
        log::info!("trail reset at ({:.2}, {:.2})", self.position.x, self.position.y);
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn trail(&self) -> &[Point] {
        &self.trail
    }

    #[must_use]
    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    #[must_use]
    pub fn origin_set(&self) -> bool {
        self.origin_set
    }

    /// Straight-line distance of the current position from the origin, in meters.
    #[must_use]
    pub fn distance_from_origin(&self) -> f64 {
        self.position.x.hypot(self.position.y)
    }
}

/// Stride between history dots so roughly [`TRAIL_DOT_TARGET`] are drawn.
#[must_use]
pub fn marker_stride(len: usize) -> usize {
    (len / TRAIL_DOT_TARGET).max(1)
}
