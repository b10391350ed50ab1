//! JavaScript-facing application context.
//!
//! The page's entry point constructs one [`GpsMap`] and passes it to its
//! socket and UI handlers; there is no module-level state. The host keeps the
//! transport: it forwards every socket event to [`GpsMap::handle_event`] and
//! emits [`reset_reference_event`] itself when the user resets the origin.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::animation::FrameLoop;
use crate::config::RendererConfig;
use crate::engine::{Engine, MessageHandler};
use crate::message::{self, RESET_REFERENCE_EVENT};
use crate::readout;

/// Install the panic hook and console logger once the module loads.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("gpsmap {} loaded", env!("CARGO_PKG_VERSION"));
    }
}

/// Event name the host emits to ask the backend to re-anchor its reference.
#[wasm_bindgen(js_name = resetReferenceEvent)]
#[must_use]
pub fn reset_reference_event() -> String {
    RESET_REFERENCE_EVENT.to_owned()
}

#[wasm_bindgen]
pub struct GpsMap {
    engine: Rc<RefCell<Engine>>,
    frames: FrameLoop,
}

#[wasm_bindgen]
impl GpsMap {
    /// Bind to the canvas with id `canvas_id`. `config_json` may be empty.
    ///
    /// # Errors
    ///
    /// Fails when the config is invalid or the element is missing or not a canvas.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: &str) -> Result<GpsMap, JsValue> {
        let config = RendererConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let canvas = find_canvas(canvas_id)?;

        let engine = Rc::new(RefCell::new(Engine::new(canvas, &config)));
        if !engine.borrow_mut().sync_viewport() {
            log::warn!("#{canvas_id} has no container; frames skipped until it is attached");
        }
        let frames = FrameLoop::new(Rc::clone(&engine), config.max_fps);

        log::info!("renderer bound to #{canvas_id} (scale {} m)", config.initial_scale);
        Ok(Self { engine, frames })
    }

    // --- Position updates ---

    #[wasm_bindgen(js_name = updatePosition)]
    pub fn update_position(&self, x: f64, y: f64) {
        self.with_engine(|engine| engine.update_position(x, y));
    }

    #[wasm_bindgen(js_name = resetOrigin)]
    pub fn reset_origin(&self) {
        self.with_engine(Engine::reset_origin);
    }

    #[wasm_bindgen(js_name = setScale)]
    pub fn set_scale(&self, scale: f64) {
        self.with_engine(|engine| engine.set_scale(scale));
    }

    /// Feed one socket event with its JSON payload.
    ///
    /// # Errors
    ///
    /// Returns the decode error text for unknown events or malformed payloads.
    #[wasm_bindgen(js_name = handleEvent)]
    pub fn handle_event(&self, event: &str, payload: &str) -> Result<(), JsValue> {
        let msg = message::decode(event, payload).map_err(|e| {
            log::warn!("dropped {event}: {e}");
            JsValue::from_str(&e.to_string())
        })?;
        self.with_engine(|engine| message::dispatch(engine, &msg));
        Ok(())
    }

    #[wasm_bindgen(js_name = setConnected)]
    pub fn set_connected(&self, connected: bool) {
        self.with_engine(|engine| engine.on_connection_change(connected));
    }

    // --- Animation ---

    pub fn start(&self) {
        self.frames.start();
    }

    pub fn stop(&self) {
        self.frames.stop();
    }

    #[wasm_bindgen(js_name = isRunning)]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }

    /// Re-read the container size now instead of on the next frame.
    pub fn resize(&self) {
        self.with_engine(|engine| {
            if !engine.sync_viewport() {
                log::warn!("resize skipped: canvas container missing");
            }
        });
    }

    /// Draw one frame immediately, independent of the animation loop.
    #[wasm_bindgen(js_name = renderOnce)]
    pub fn render_once(&self) {
        self.with_engine(Engine::frame);
    }

    // --- Readouts ---

    #[wasm_bindgen(js_name = scaleLabel)]
    #[must_use]
    pub fn scale_label(&self) -> String {
        self.read(|engine| readout::scale_label(engine.core.scale())).unwrap_or_default()
    }

    #[wasm_bindgen(js_name = positionLabels)]
    #[must_use]
    pub fn position_labels(&self) -> Vec<String> {
        self.read(|engine| {
            let p = engine.core.position();
            vec![
                readout::meters_label(p.x),
                readout::meters_label(p.y),
                readout::meters_label(engine.core.track.distance_from_origin()),
            ]
        })
        .unwrap_or_default()
    }

    #[wasm_bindgen(js_name = trailLength)]
    #[must_use]
    pub fn trail_length(&self) -> usize {
        self.read(|engine| engine.core.track.trail_len()).unwrap_or_default()
    }

    #[wasm_bindgen(js_name = isConnected)]
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.read(|engine| engine.core.is_connected()).unwrap_or_default()
    }

    #[wasm_bindgen(js_name = fixStatus)]
    #[must_use]
    pub fn fix_status(&self) -> Option<String> {
        self.read(|engine| engine.core.last_fix.as_ref().map(|fix| fix.fix_status.clone()))
            .flatten()
    }

    #[wasm_bindgen(js_name = visibleSatellites)]
    #[must_use]
    pub fn visible_satellites(&self) -> u32 {
        self.read(|engine| engine.core.last_fix.as_ref().map_or(0, |fix| fix.visible_satellites))
            .unwrap_or_default()
    }
}

impl GpsMap {
    fn with_engine<F: FnOnce(&mut Engine)>(&self, f: F) {
        match self.engine.try_borrow_mut() {
            Ok(mut engine) => f(&mut engine),
            Err(_) => log::warn!("engine busy; call dropped"),
        }
    }

    fn read<T, F: FnOnce(&Engine) -> T>(&self, f: F) -> Option<T> {
        match self.engine.try_borrow() {
            Ok(engine) => Some(f(&engine)),
            Err(_) => None,
        }
    }
}

fn find_canvas(canvas_id: &str) -> Result<HtmlCanvasElement, JsValue> {
    let document = web_sys::window()
        .ok_or("No window")?
        .document()
        .ok_or("No document")?;

    document
        .get_element_by_id(canvas_id)
        .ok_or("No canvas element found")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("Element is not a canvas"))
}
