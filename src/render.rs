//! Rendering: draws the full local-frame scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of engine state and produces pixels. It does
//! not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{Camera, Point};
use crate::consts::{
    AXIS_LABEL_FONT, AXIS_LINE_WIDTH_PX, AXIS_STROKE, BACKGROUND, GRID_LINE_WIDTH_PX, GRID_STROKE, MARKER_CENTER_RADIUS_PX,
    MARKER_FILL, MARKER_OUTLINE, MARKER_RADIUS_PX, MARKER_SHADOW, MARKER_SHADOW_BLUR_PX, MARKER_SHADOW_OFFSET_Y_PX,
    ORIGIN_DOT_RADIUS_PX, TRAIL_DOT_FILL, TRAIL_DOT_RADIUS_PX, TRAIL_LINE_WIDTH_PX, TRAIL_STROKE,
};
use crate::engine::EngineCore;
use crate::track::marker_stride;

/// Draw the full scene: background, grid, axes, trail, position marker.
///
/// Coordinates are CSS pixels; the backing store is scaled by `core.dpr`.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    let cam = &core.camera;

    // Layer 1: reset transform and clear.
    ctx.set_transform(core.dpr, 0.0, 0.0, core.dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, cam.width, cam.height);

    // Layer 2: reference frame.
    draw_grid(ctx, cam);
    draw_axes(ctx, cam)?;

    // Layer 3: history and current fix.
    draw_trail(ctx, cam, core.trail())?;
    match core.marker_screen() {
        Some(s) => draw_position(ctx, s),
        None => Ok(()),
    }
}

// =============================================================
// Reference frame
// =============================================================

fn draw_grid(ctx: &CanvasRenderingContext2d, cam: &Camera) {
    let center = cam.center();

    ctx.set_stroke_style_str(GRID_STROKE);
    ctx.set_line_width(GRID_LINE_WIDTH_PX);

    for meters in cam.grid_offsets() {
        let offset = cam.meters_to_pixels(meters);
        vertical_line(ctx, cam, center.x + offset);
        horizontal_line(ctx, cam, center.y - offset);

        // Zero is shared by both sides.
        if meters > 0.0 {
            vertical_line(ctx, cam, center.x - offset);
            horizontal_line(ctx, cam, center.y + offset);
        }
    }
}

fn draw_axes(ctx: &CanvasRenderingContext2d, cam: &Camera) -> Result<(), JsValue> {
    let center = cam.center();

    ctx.set_stroke_style_str(AXIS_STROKE);
    ctx.set_line_width(AXIS_LINE_WIDTH_PX);
    horizontal_line(ctx, cam, center.y);
    vertical_line(ctx, cam, center.x);

    ctx.set_fill_style_str(AXIS_STROKE);
    ctx.set_font(AXIS_LABEL_FONT);
    ctx.set_text_align("center");
    ctx.fill_text("N", center.x - 10.0, 20.0)?;
    ctx.fill_text("S", center.x - 10.0, cam.height - 10.0)?;
    ctx.set_text_align("left");
    ctx.fill_text("E", cam.width - 20.0, center.y - 8.0)?;
    ctx.set_text_align("right");
    ctx.fill_text("W", 20.0, center.y - 8.0)?;

    fill_circle(ctx, center, ORIGIN_DOT_RADIUS_PX)
}

// =============================================================
// Track
// =============================================================

/// Continuous polyline through every trail point, clipped to the canvas,
/// plus sparse history dots for the in-bounds points.
fn draw_trail(ctx: &CanvasRenderingContext2d, cam: &Camera, trail: &[Point]) -> Result<(), JsValue> {
    let Some((first, rest)) = trail.split_first() else {
        return Ok(());
    };

    ctx.save();
    ctx.begin_path();
    ctx.rect(0.0, 0.0, cam.width, cam.height);
    ctx.clip();

    ctx.set_stroke_style_str(TRAIL_STROKE);
    ctx.set_line_width(TRAIL_LINE_WIDTH_PX);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    ctx.begin_path();
    let start = cam.to_screen(*first);
    ctx.move_to(start.x, start.y);
    for point in rest {
        let s = cam.to_screen(*point);
        ctx.line_to(s.x, s.y);
    }
    ctx.stroke();
    ctx.restore();

    ctx.set_fill_style_str(TRAIL_DOT_FILL);
    for point in trail.iter().step_by(marker_stride(trail.len())) {
        let s = cam.to_screen(*point);
        if cam.contains(s) {
            fill_circle(ctx, s, TRAIL_DOT_RADIUS_PX)?;
        }
    }
    Ok(())
}

/// Current-position marker at screen point `s`.
fn draw_position(ctx: &CanvasRenderingContext2d, s: Point) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_shadow_color(MARKER_SHADOW);
    ctx.set_shadow_blur(MARKER_SHADOW_BLUR_PX);
    ctx.set_shadow_offset_x(0.0);
    ctx.set_shadow_offset_y(MARKER_SHADOW_OFFSET_Y_PX);

    ctx.set_fill_style_str(MARKER_FILL);
    ctx.begin_path();
    ctx.arc(s.x, s.y, MARKER_RADIUS_PX, 0.0, 2.0 * PI)?;
    ctx.fill();

    ctx.set_stroke_style_str(MARKER_OUTLINE);
    ctx.set_line_width(AXIS_LINE_WIDTH_PX);
    ctx.stroke();
    ctx.restore();

    ctx.set_fill_style_str(MARKER_OUTLINE);
    fill_circle(ctx, s, MARKER_CENTER_RADIUS_PX)
}

// =============================================================
// Helpers
// =============================================================

fn vertical_line(ctx: &CanvasRenderingContext2d, cam: &Camera, x: f64) {
    ctx.begin_path();
    ctx.move_to(x, 0.0);
    ctx.line_to(x, cam.height);
    ctx.stroke();
}

fn horizontal_line(ctx: &CanvasRenderingContext2d, cam: &Camera, y: f64) {
    ctx.begin_path();
    ctx.move_to(0.0, y);
    ctx.line_to(cam.width, y);
    ctx.stroke();
}

/// Fill a circle with the current fill style.
fn fill_circle(ctx: &CanvasRenderingContext2d, center: Point, radius: f64) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
    ctx.fill();
    Ok(())
}
