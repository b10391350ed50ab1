use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::config::RendererConfig;
use crate::message::FixSummary;
use crate::render;
use crate::track::TrackState;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Receiver for backend events, one method per event kind.
pub trait MessageHandler {
    /// A new origin-relative position, in meters east (`x`) and north (`y`).
    fn on_position_update(&mut self, x: f64, y: f64);

    /// The reference origin moved to the current position.
    fn on_origin_reset(&mut self);

    /// The transport connected or disconnected.
    fn on_connection_change(&mut self, connected: bool);

    /// Latest fix metadata. Ignored unless the handler displays it.
    fn on_fix(&mut self, _fix: &FixSummary) {}
}

/// Socket connection state as last reported by the transport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connected,
}

/// Core engine state: everything that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub track: TrackState,
    pub camera: Camera,
    pub connection: ConnectionStatus,
    pub last_fix: Option<FixSummary>,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(&RendererConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(config: &RendererConfig) -> Self {
        Self {
            track: TrackState::new(),
            camera: Camera { scale: config.initial_scale, view_fill: config.view_fill, ..Camera::default() },
            connection: ConnectionStatus::default(),
            last_fix: None,
            dpr: 1.0,
        }
    }

    // --- Data inputs ---

    pub fn update_position(&mut self, x: f64, y: f64) {
        self.track.update_position(x, y);
    }

    pub fn reset_origin(&mut self) {
        self.track.reset_origin();
    }

    /// Change the meters represented by the visible half-extent. Not bounds-checked.
    pub fn set_scale(&mut self, scale: f64) {
        self.camera.scale = scale;
    }

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    ///
    /// Returns `true` when anything changed.
    pub fn set_viewport(&mut self, width: f64, height: f64, dpr: f64) -> bool {
        #[allow(clippy::float_cmp)]
        let unchanged = self.camera.width == width && self.camera.height == height && self.dpr == dpr;
        if unchanged {
            return false;
        }
        log::debug!("viewport {width}x{height} @ {dpr}x");
        self.camera.set_viewport(width, height);
        self.dpr = dpr;
        true
    }

    /// Apply a measured container size `(width, height, dpr)`.
    ///
    /// `None` means the container could not be measured: the viewport is kept
    /// and the caller skips the frame. Otherwise returns whether the viewport
    /// changed.
    pub fn apply_measurement(&mut self, measured: Option<(f64, f64, f64)>) -> Option<bool> {
        let (width, height, dpr) = measured?;
        Some(self.set_viewport(width, height, dpr))
    }

    // --- Queries ---

    #[must_use]
    pub fn position(&self) -> Point {
        self.track.position()
    }

    #[must_use]
    pub fn trail(&self) -> &[Point] {
        self.track.trail()
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.camera.scale
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connection == ConnectionStatus::Connected
    }

    /// Screen position of the current-position marker, or `None` when it
    /// falls outside the canvas. Edges are inclusive.
    ///
    /// Before the first fix the marker sits at the origin.
    #[must_use]
    pub fn marker_screen(&self) -> Option<Point> {
        let screen = self.camera.to_screen(self.position());
        self.camera.contains(screen).then_some(screen)
    }
}

impl MessageHandler for EngineCore {
    fn on_position_update(&mut self, x: f64, y: f64) {
        self.update_position(x, y);
    }

    fn on_origin_reset(&mut self) {
        self.reset_origin();
    }

    fn on_connection_change(&mut self, connected: bool) {
        self.connection = if connected { ConnectionStatus::Connected } else { ConnectionStatus::Disconnected };
        log::info!("connection {:?}", self.connection);
    }

    fn on_fix(&mut self, fix: &FixSummary) {
        self.last_fix = Some(fix.clone());
    }
}

/// The full renderer. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: Option<CanvasRenderingContext2d>,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to the given canvas element.
    ///
    /// A canvas without a 2D context still yields an engine; its frames are skipped.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: &RendererConfig) -> Self {
        let ctx = context_2d(&canvas);
        if ctx.is_none() {
            log::warn!("canvas has no 2d context; frames will be skipped");
        }
        Self { canvas, ctx, core: EngineCore::new(config) }
    }

    // --- Delegated data inputs ---

    pub fn update_position(&mut self, x: f64, y: f64) {
        self.core.update_position(x, y);
    }

    pub fn reset_origin(&mut self) {
        self.core.reset_origin();
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.core.set_scale(scale);
    }

    // --- Viewport ---

    /// Match the canvas to its container's current size.
    ///
    /// Resizes the backing store to `size * dpr` only when the container size
    /// or pixel ratio changed.
    ///
    /// Returns `false` when the window or the canvas container is missing; the
    /// viewport is left as it was.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sync_viewport(&mut self) -> bool {
        let measured = self.measure_container();
        match self.core.apply_measurement(measured) {
            None => false,
            Some(changed) => {
                if changed {
                    let (width, height, dpr) = (self.core.camera.width, self.core.camera.height, self.core.dpr);
                    self.canvas.set_width((width * dpr).round() as u32);
                    self.canvas.set_height((height * dpr).round() as u32);
                }
                true
            }
        }
    }

    fn measure_container(&self) -> Option<(f64, f64, f64)> {
        let window = web_sys::window()?;
        let rect = self.canvas.parent_element()?.get_bounding_client_rect();
        Some((rect.width(), rect.height(), window.device_pixel_ratio().max(1.0)))
    }

    // --- Render ---

    /// Draw the current state to the canvas. Never fails; a frame that cannot
    /// be drawn is skipped.
    pub fn render(&self) {
        let Some(ctx) = self.ctx.as_ref() else {
            return;
        };
        if let Err(err) = render::draw(ctx, &self.core) {
            log::warn!("frame skipped: {err:?}");
        }
    }

    /// One animation frame: match the container, then draw. The frame is
    /// skipped when the container or window is missing.
    pub fn frame(&mut self) {
        if self.sync_viewport() {
            self.render();
        } else {
            log::debug!("canvas container missing; frame skipped");
        }
    }
}

impl MessageHandler for Engine {
    fn on_position_update(&mut self, x: f64, y: f64) {
        self.core.on_position_update(x, y);
    }

    fn on_origin_reset(&mut self) {
        self.core.on_origin_reset();
    }

    fn on_connection_change(&mut self, connected: bool) {
        self.core.on_connection_change(connected);
    }

    fn on_fix(&mut self, fix: &FixSummary) {
        self.core.on_fix(fix);
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(obj)) => match obj.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => Some(ctx),
            Err(_) => None,
        },
        _ => None,
    }
}
