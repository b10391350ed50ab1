//! Text readouts for the host page's scale indicator and position fields.

#[cfg(test)]
#[path = "readout_test.rs"]
mod readout_test;

use crate::camera::grid_spacing;

/// Grid spacing as shown to the user: centimeters below one meter.
#[must_use]
pub fn grid_label(spacing: f64) -> String {
    if spacing < 1.0 {
        format!("{:.0}cm", spacing * 100.0)
    } else {
        format!("{spacing}m")
    }
}

/// Scale indicator, e.g. `Scale: ±20.0m  |  Grid: 5m`.
#[must_use]
pub fn scale_label(scale: f64) -> String {
    format!("Scale: ±{scale:.1}m  |  Grid: {}", grid_label(grid_spacing(scale)))
}

/// A metric value with two decimals, e.g. `3.00 m`.
#[must_use]
pub fn meters_label(value: f64) -> String {
    format!("{value:.2} m")
}
