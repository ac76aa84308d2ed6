// File: crates/barchart-core/src/layout.rs
// Summary: Pixel-space layout of the bar chart: cached text metrics, origin, bars and Y ticks.

use crate::data::BarData;
use crate::format::{format_data_value, format_tick_value};
use crate::geometry::{PointI32, RectI32};
use crate::style::{ChartStyle, MAX_Y_TICK_COUNT};
use crate::text::TextMetrics;
use crate::types::{px, Insets};

/// Metrics derived from the data set; recomputed only when the data changes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutMetrics {
    /// Largest value, never below zero.
    pub max_value: f32,
    /// Widest Y-axis label, in pixels.
    pub max_y_text_width: i32,
    /// Tallest X-axis label, in pixels.
    pub max_x_text_height: i32,
}

impl LayoutMetrics {
    /// Single linear scan over `data`. Empty data yields all zeros.
    /// Non-finite values do not take part in the max.
    pub fn measure<M: TextMetrics + ?Sized>(data: &[BarData], metrics: &M, style: &ChartStyle) -> Self {
        if data.is_empty() {
            return Self::default();
        }
        let size = style.font_size_px();
        let mut out = Self::default();
        for bar in data {
            if bar.value().is_finite() {
                out.max_value = out.max_value.max(bar.value());
            }
            let w = metrics.advance_width(&format_data_value(bar.value()), size).ceil() as i32;
            out.max_y_text_width = out.max_y_text_width.max(w);
            let h = metrics.text_bounds(bar.label(), size).height.ceil() as i32;
            out.max_x_text_height = out.max_x_text_height.max(h);
        }
        // The top tick label can be wider than any raw value ("99.0" vs "99").
        let top = metrics.advance_width(&format_tick_value(out.max_value), size).ceil() as i32;
        out.max_y_text_width = out.max_y_text_width.max(top);
        out
    }

    /// X-label height plus the gap between the labels and the X axis.
    pub fn x_axis_label_and_margin(&self, style: &ChartStyle) -> i32 {
        self.max_x_text_height + style.axis_gap_px()
    }
}

/// One bar and the placement of its X-axis label.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    pub rect: RectI32,
    pub label: String,
    /// Left edge and baseline of the label.
    pub label_origin: PointI32,
}

/// One Y-axis tick: marker line and its right-aligned value label.
#[derive(Clone, Debug, PartialEq)]
pub struct YTick {
    pub value: f32,
    pub label: String,
    pub line_from: PointI32,
    pub line_to: PointI32,
    pub label_origin: PointI32,
}

/// Everything the draw routine needs, in canvas pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    pub usable_width: i32,
    pub usable_height: i32,
    pub origin: PointI32,
    /// Height of the Y axis above the origin.
    pub plot_height: i32,
    pub y_axis: (PointI32, PointI32),
    pub x_axis: (PointI32, PointI32),
    /// Width of each of the `2n + 1` slots along the X axis.
    pub slot_width: i32,
    pub bars: Vec<BarGeometry>,
    pub y_ticks: Vec<YTick>,
}

/// Axis origin. Without data no room is reserved for X labels.
pub fn origin(
    has_data: bool,
    lm: &LayoutMetrics,
    size: (i32, i32),
    padding: &Insets,
    style: &ChartStyle,
) -> PointI32 {
    let x = px(padding.left)
        .saturating_add(lm.max_y_text_width)
        .saturating_add(style.axis_gap_px());
    let bottom = size.1.saturating_sub(px(padding.bottom));
    let y = if has_data { bottom.saturating_sub(lm.x_axis_label_and_margin(style)) } else { bottom };
    PointI32::new(x, y)
}

/// Ticks from `max_value` at the top of the plot down to zero at the origin,
/// in `style.y_tick_count` equal steps (clamped to `1..=MAX_Y_TICK_COUNT`).
pub fn y_ticks<M: TextMetrics + ?Sized>(
    origin: PointI32,
    plot_height: i32,
    max_value: f32,
    style: &ChartStyle,
    metrics: &M,
) -> Vec<YTick> {
    let steps = i64::from(style.y_tick_count.clamp(1, MAX_Y_TICK_COUNT));
    let gap = style.axis_gap_px();
    let size = style.font_size_px();
    let top = origin.y - plot_height;

    (0..=steps)
        .map(|i| {
            let value = max_value * (steps - i) as f32 / steps as f32;
            let label = format_tick_value(value);
            let bounds = metrics.text_bounds(&label, size);
            let offset = i64::from(plot_height) * i / steps;
            let y = top.saturating_add(i32::try_from(offset).unwrap_or(i32::MAX));
            YTick {
                value,
                line_from: PointI32::new(origin.x - (gap >> 1), y),
                line_to: PointI32::new(origin.x, y),
                label_origin: PointI32::new(
                    origin.x - bounds.width as i32 - gap,
                    y + ((bounds.height as i32) >> 1),
                ),
                label,
            }
        })
        .collect()
}

/// Left edge and baseline of an X-axis label centered on `center_x`.
pub fn x_label_origin<M: TextMetrics + ?Sized>(
    origin: PointI32,
    label: &str,
    center_x: i32,
    lm: &LayoutMetrics,
    style: &ChartStyle,
    metrics: &M,
) -> PointI32 {
    let bounds = metrics.text_bounds(label, style.font_size_px());
    PointI32::new(
        center_x - bounds.width as i32 / 2,
        origin.y + style.axis_gap_px() + lm.max_x_text_height,
    )
}

/// Full layout for a view of `size` pixels.
pub fn compute<M: TextMetrics + ?Sized>(
    data: &[BarData],
    lm: &LayoutMetrics,
    size: (i32, i32),
    padding: &Insets,
    style: &ChartStyle,
    metrics: &M,
) -> ChartGeometry {
    let usable_width = size.0.saturating_sub(px(padding.hsum())).max(0);
    let usable_height = size.1.saturating_sub(px(padding.vsum())).max(0);
    let gap = style.axis_gap_px();
    let origin = origin(!data.is_empty(), lm, size, padding, style);

    let plot_height = (usable_height - lm.x_axis_label_and_margin(style)).max(0);
    let x_axis_len = (usable_width - (lm.max_y_text_width + gap)).max(0);

    let mut geometry = ChartGeometry {
        usable_width,
        usable_height,
        origin,
        plot_height,
        y_axis: (origin, PointI32::new(origin.x, origin.y - plot_height)),
        x_axis: (origin, PointI32::new(origin.x + x_axis_len, origin.y)),
        slot_width: 0,
        bars: Vec::new(),
        y_ticks: Vec::new(),
    };
    if data.is_empty() {
        return geometry;
    }

    let slot_count = (data.len() as i32) * 2 + 1;
    let slot_width = x_axis_len / slot_count;
    geometry.slot_width = slot_width;
    geometry.bars = data
        .iter()
        .enumerate()
        .map(|(index, bar)| {
            let i = index as i32;
            let left = origin.x + (2 * i + 1) * slot_width;
            let right = origin.x + (2 * i + 2) * slot_width;
            let height = bar_height(plot_height, bar.value(), lm.max_value);
            let rect = RectI32::from_ltrb(left, origin.y - height, right, origin.y);
            BarGeometry {
                label_origin: x_label_origin(origin, bar.label(), rect.center_x(), lm, style, metrics),
                label: bar.label().to_owned(),
                rect,
            }
        })
        .collect();
    geometry.y_ticks = y_ticks(origin, plot_height, lm.max_value, style, metrics);
    geometry
}

/// Bar height in whole pixels; non-positive or non-finite values (or max) give an empty bar.
pub fn bar_height(plot_height: i32, value: f32, max_value: f32) -> i32 {
    if !(max_value.is_finite() && value.is_finite()) || max_value <= 0.0 || value <= 0.0 {
        return 0;
    }
    (plot_height as f32 * (value / max_value).min(1.0)) as i32
}
