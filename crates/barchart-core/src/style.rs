// File: crates/barchart-core/src/style.rs
// Summary: Drawing parameters for the bar chart view (stroke, font, tick count, spacing, density).

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::types::Color;

/// Upper bound for `y_tick_count`; more steps than this cannot be told apart on screen.
pub const MAX_Y_TICK_COUNT: u32 = 500;

/// Drawing parameters. Sizes suffixed `_dp` are density-independent and are
/// converted with [`ChartStyle::dp_to_px`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Color of axes, ticks, bars and labels.
    pub axis_color: Color,
    /// Y-axis stroke in pixels; the X axis and bars use one pixel more.
    pub stroke_width: f32,
    pub axis_font_size_dp: f32,
    /// Number of equal steps between zero and the max value on the Y axis.
    pub y_tick_count: u32,
    /// Distance between an axis and the labels beside it.
    pub axis_gap_dp: f32,
    /// Pixels per dp.
    pub density: f32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            axis_color: Color::from_argb(255, 0x3f, 0x51, 0xb5),
            stroke_width: 2.0,
            axis_font_size_dp: 14.0,
            y_tick_count: 9,
            axis_gap_dp: 14.0,
            density: 1.0,
        }
    }
}

impl ChartStyle {
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn dp_to_px(&self, dp: f32) -> f32 {
        dp * self.density
    }

    /// Label font size in pixels.
    pub fn font_size_px(&self) -> f32 {
        self.dp_to_px(self.axis_font_size_dp)
    }

    /// Axis-to-label distance in whole pixels.
    pub fn axis_gap_px(&self) -> i32 {
        self.dp_to_px(self.axis_gap_dp) as i32
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(ChartError::InvalidStyle(format!("density must be positive, got {}", self.density)));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width >= 0.0) {
            return Err(ChartError::InvalidStyle(format!("stroke_width must be >= 0, got {}", self.stroke_width)));
        }
        if !(self.axis_font_size_dp.is_finite() && self.axis_font_size_dp > 0.0) {
            return Err(ChartError::InvalidStyle("axis_font_size_dp must be positive".into()));
        }
        if !(self.axis_gap_dp.is_finite() && self.axis_gap_dp >= 0.0) {
            return Err(ChartError::InvalidStyle("axis_gap_dp must be >= 0".into()));
        }
        if self.y_tick_count == 0 || self.y_tick_count > MAX_Y_TICK_COUNT {
            return Err(ChartError::InvalidStyle(format!(
                "y_tick_count must be in 1..={MAX_Y_TICK_COUNT}, got {}",
                self.y_tick_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dp_conversion_scales_with_density() {
        let s = ChartStyle::default().with_density(2.0);
        assert_eq!(s.font_size_px(), 28.0);
        assert_eq!(s.axis_gap_px(), 28);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let s: ChartStyle = toml::from_str("y_tick_count = 4\ndensity = 1.5").unwrap();
        assert_eq!(s.y_tick_count, 4);
        assert_eq!(s.density, 1.5);
        assert_eq!(s.stroke_width, 2.0);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn zero_ticks_is_rejected() {
        let s = ChartStyle { y_tick_count: 0, ..ChartStyle::default() };
        assert!(matches!(s.validate(), Err(ChartError::InvalidStyle(_))));
    }

    #[test]
    fn oversized_tick_count_is_rejected() {
        let s = ChartStyle { y_tick_count: MAX_Y_TICK_COUNT, ..ChartStyle::default() };
        assert!(s.validate().is_ok());
        let s = ChartStyle { y_tick_count: 3_000_000, ..ChartStyle::default() };
        assert!(matches!(s.validate(), Err(ChartError::InvalidStyle(_))));
        let s = ChartStyle { y_tick_count: u32::MAX, ..ChartStyle::default() };
        assert!(s.validate().is_err());
    }
}
