//! Shared numeric and style constants for the renderer.

// ── View ────────────────────────────────────────────────────────

/// Default half-extent of the view in meters (±20 m).
pub const DEFAULT_SCALE_M: f64 = 20.0;

/// Fraction of the half shorter canvas dimension used by the scale extent.
pub const DEFAULT_VIEW_FILL: f64 = 0.9;

/// Number of semi-transparent history dots drawn along a trail.
pub const TRAIL_DOT_TARGET: usize = 20;

// ── Grid steps (scale upper bound in meters → spacing in meters) ──

pub const GRID_STEPS: [(f64, f64); 3] = [(1.0, 0.25), (2.0, 0.5), (5.0, 1.0)];

/// Grid spacing used above the last step.
pub const GRID_SPACING_COARSE_M: f64 = 5.0;

/// Upper bound on grid lines per side of an axis. At the coarse spacing the
/// grid stops at 4995 m from the origin.
pub const MAX_GRID_LINES: u32 = 1000;

// ── Palette ─────────────────────────────────────────────────────

pub const BACKGROUND: &str = "#ffffff";
pub const GRID_STROKE: &str = "#e0e0e0";
pub const AXIS_STROKE: &str = "#000000";
pub const TRAIL_STROKE: &str = "#22c55e";
pub const TRAIL_DOT_FILL: &str = "rgba(34, 197, 94, 0.4)";
pub const MARKER_FILL: &str = "#ef4444";
pub const MARKER_OUTLINE: &str = "#ffffff";
pub const MARKER_SHADOW: &str = "rgba(0, 0, 0, 0.3)";

pub const AXIS_LABEL_FONT: &str = "bold 14px sans-serif";

// ── Sizes (CSS pixels) ──────────────────────────────────────────

pub const GRID_LINE_WIDTH_PX: f64 = 1.0;
pub const AXIS_LINE_WIDTH_PX: f64 = 2.0;
pub const TRAIL_LINE_WIDTH_PX: f64 = 2.0;
pub const ORIGIN_DOT_RADIUS_PX: f64 = 3.0;
pub const TRAIL_DOT_RADIUS_PX: f64 = 2.0;
pub const MARKER_RADIUS_PX: f64 = 8.0;
pub const MARKER_CENTER_RADIUS_PX: f64 = 3.0;
pub const MARKER_SHADOW_BLUR_PX: f64 = 4.0;
pub const MARKER_SHADOW_OFFSET_Y_PX: f64 = 2.0;
