//! Live GNSS position renderer for the browser.
//!
//! This crate is compiled to WebAssembly. It draws the receiver's current
//! position and its trail on a canvas in a local metric frame: meters east and
//! north of a reference origin, north up, with a grid that adapts to the
//! chosen scale. The host page owns the socket to the GNSS backend and only
//! forwards events into [`app::GpsMap`]; everything from decoding those events
//! to the per-frame redraw happens here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | `wasm_bindgen` application context used by the host page |
//! | [`engine`] | Message handler contract, testable [`engine::EngineCore`], canvas-owning [`engine::Engine`] |
//! | [`track`] | Current position, trail, origin flag |
//! | [`camera`] | Meters → pixels projection, bounds test, grid spacing |
//! | [`render`] | Scene rendering to a 2D context |
//! | [`animation`] | `requestAnimationFrame` loop and frame pacing |
//! | [`message`] | Backend socket event decoding and dispatch |
//! | [`readout`] | Scale and position labels for the page |
//! | [`config`] | Renderer configuration |
//! | [`consts`] | Shared numeric and style constants |

pub mod animation;
pub mod app;
pub mod camera;
pub mod config;
pub mod consts;
pub mod engine;
pub mod message;
pub mod readout;
pub mod render;
pub mod track;
