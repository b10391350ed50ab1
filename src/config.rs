//! Renderer configuration parsed from a JSON document supplied by the host page.

use serde::Deserialize;

use crate::consts::{DEFAULT_SCALE_M, DEFAULT_VIEW_FILL};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(String),
    #[error("initial_scale must be a positive finite number of meters, got {0}")]
    InvalidScale(f64),
    #[error("view_fill must be within (0, 1], got {0}")]
    InvalidViewFill(f64),
    #[error("max_fps must be greater than zero")]
    InvalidMaxFps,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererConfig {
    /// Meters shown from the center to the scaled edge at startup.
    pub initial_scale: f64,
    /// Fraction of the half shorter dimension that `scale` maps onto.
    pub view_fill: f64,
    /// Upper bound on redraws per second; `None` redraws on every animation frame.
    pub max_fps: Option<u32>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self { initial_scale: DEFAULT_SCALE_M, view_fill: DEFAULT_VIEW_FILL, max_fps: None }
    }
}

impl RendererConfig {
    /// Parse and validate a config document.
    ///
    /// An empty or whitespace-only string yields the defaults. Fields:
    /// - `initial_scale`: default 20.0
    /// - `view_fill`: default 0.9
    /// - `max_fps`: default unset (every frame)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields, and
    /// the [`validate`](Self::validate) errors for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns the first failing check: a non-positive or non-finite scale, a
    /// view fill outside `(0, 1]`, or a zero `max_fps`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.initial_scale.is_finite() && self.initial_scale > 0.0) {
            return Err(ConfigError::InvalidScale(self.initial_scale));
        }
        if !(self.view_fill > 0.0 && self.view_fill <= 1.0) {
            return Err(ConfigError::InvalidViewFill(self.view_fill));
        }
        if self.max_fps == Some(0) {
            return Err(ConfigError::InvalidMaxFps);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
