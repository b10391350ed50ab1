//! Redraw loop driven by `requestAnimationFrame`.
//!
//! [`FrameLoop`] schedules one callback per display refresh while running and
//! cancels the pending request on [`FrameLoop::stop`]. [`FramePacer`] decides
//! which of those callbacks actually redraw, so the redraw rate is an explicit
//! setting instead of whatever the display refresh happens to be.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::engine::Engine;

/// Frame-rate limiter over animation-frame timestamps (milliseconds).
#[derive(Debug, Clone)]
pub struct FramePacer {
    min_interval_ms: f64,
    last_render_ms: Option<f64>,
}

impl FramePacer {
    /// `None` renders on every animation frame.
    #[must_use]
    pub fn new(max_fps: Option<u32>) -> Self {
        let min_interval_ms = max_fps.map_or(0.0, |fps| 1000.0 / f64::from(fps.max(1)));
        Self { min_interval_ms, last_render_ms: None }
    }

    #[must_use]
    pub fn min_interval_ms(&self) -> f64 {
        self.min_interval_ms
    }

    /// Whether the frame at `now_ms` should redraw. Records it when it does.
    pub fn should_render(&mut self, now_ms: f64) -> bool {
        if self.min_interval_ms > 0.0 {
            if let Some(last) = self.last_render_ms {
                if now_ms - last < self.min_interval_ms {
                    return false;
                }
            }
        }
        self.last_render_ms = Some(now_ms);
        true
    }

    /// Forget the last rendered frame so the next one draws immediately.
    pub fn reset(&mut self) {
        self.last_render_ms = None;
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

struct LoopState {
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<FrameCallback>>,
    pacer: RefCell<FramePacer>,
}

impl LoopState {
    fn schedule(&self) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window; animation loop idle");
            return;
        };
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            return;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.handle.set(Some(id)),
            Err(err) => log::warn!("requestAnimationFrame failed: {err:?}"),
        }
    }

    fn on_frame(&self, engine: &RefCell<Engine>, timestamp_ms: f64) {
        self.handle.set(None);
        if self.pacer.borrow_mut().should_render(timestamp_ms) {
            match engine.try_borrow_mut() {
                Ok(mut engine) => engine.frame(),
                Err(_) => log::warn!("engine busy; frame skipped"),
            }
        }
        self.schedule();
    }
}

/// Continuous redraw loop for an [`Engine`].
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    #[must_use]
    pub fn new(engine: Rc<RefCell<Engine>>, max_fps: Option<u32>) -> Self {
        let state = Rc::new(LoopState {
            handle: Cell::new(None),
            callback: RefCell::new(None),
            pacer: RefCell::new(FramePacer::new(max_fps)),
        });

        let weak: Weak<LoopState> = Rc::downgrade(&state);
        let cb = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            if let Some(state) = weak.upgrade() {
                state.on_frame(&engine, timestamp_ms);
            }
        }) as Box<dyn FnMut(f64)>);
        *state.callback.borrow_mut() = Some(cb);

        Self { state }
    }

    /// Begin scheduling frames. No-op while already running.
    pub fn start(&self) {
        if self.is_running() {
            return;
        }
        log::info!("animation started");
        self.state.pacer.borrow_mut().reset();
        self.state.schedule();
    }

    /// Cancel the pending frame request.
    pub fn stop(&self) {
        let Some(id) = self.state.handle.take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {err:?}");
            }
        }
        log::info!("animation stopped");
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.handle.get().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
