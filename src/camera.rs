#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{DEFAULT_SCALE_M, DEFAULT_VIEW_FILL, GRID_SPACING_COARSE_M, GRID_STEPS, MAX_GRID_LINES};

/// A point in either local metric space (meters east/north of the origin) or
/// screen space (CSS pixels, y down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Local-frame camera: maps meters around the origin onto the canvas.
///
/// `width` / `height` are in CSS pixels.
/// `scale` is the number of meters shown between the center and
/// `view_fill` of the half shorter dimension.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
    pub view_fill: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { width: 0.0, height: 0.0, scale: DEFAULT_SCALE_M, view_fill: DEFAULT_VIEW_FILL }
    }
}

impl Camera {
    #[must_use]
    pub fn new(width: f64, height: f64, scale: f64) -> Self {
        Self { width, height, scale, ..Self::default() }
    }

    /// Recompute the pixel anchors after the surface was resized.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Pixels covered by `scale` meters.
    #[must_use]
    pub fn half_extent_px(&self) -> f64 {
        self.width.min(self.height) / 2.0 * self.view_fill
    }

    /// Convert a metric distance to a pixel distance.
    #[must_use]
    pub fn meters_to_pixels(&self, meters: f64) -> f64 {
        (meters / self.scale) * self.half_extent_px()
    }

    /// Screen-space center of the canvas; the origin projects here.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Project a local metric point to screen coordinates. North is up.
    #[must_use]
    pub fn to_screen(&self, local: Point) -> Point {
        let center = self.center();
        Point {
            x: center.x + self.meters_to_pixels(local.x),
            y: center.y - self.meters_to_pixels(local.y),
        }
    }

    /// Inclusive bounds test against the canvas rectangle.
    #[must_use]
    pub fn contains(&self, screen: Point) -> bool {
        screen.x >= 0.0 && screen.x <= self.width && screen.y >= 0.0 && screen.y <= self.height
    }

    /// Grid spacing for the current scale.
    #[must_use]
    pub fn grid_spacing(&self) -> f64 {
        grid_spacing(self.scale)
    }

    /// Metric offsets from the origin at which grid lines are drawn,
    /// starting at zero and stepping by the grid spacing up to `scale`.
    /// At most [`MAX_GRID_LINES`] offsets are produced.
    #[must_use]
    pub fn grid_offsets(&self) -> Vec<f64> {
        let spacing = self.grid_spacing();
        if !(self.scale.is_finite() && self.scale >= 0.0) {
            return Vec::new();
        }
        let mut offsets = Vec::new();
        for i in 0..MAX_GRID_LINES {
            let offset = f64::from(i) * spacing;
            if offset > self.scale {
                break;
            }
            offsets.push(offset);
        }
        offsets
    }
}

/// Step function from view scale (meters) to grid spacing (meters).
#[must_use]
pub fn grid_spacing(scale: f64) -> f64 {
    GRID_STEPS
        .iter()
        .find(|(upper, _)| scale <= *upper)
        .map_or(GRID_SPACING_COARSE_M, |(_, spacing)| *spacing)
}
