// File: crates/barchart-core/src/view.rs
// Summary: Bar chart view: holds data and cached metrics, lays out and draws on demand.

use tracing::{debug, trace, warn};

use crate::canvas::{Canvas, Paint};
use crate::data::BarData;
use crate::geometry::PointI32;
use crate::layout::{self, ChartGeometry, LayoutMetrics};
use crate::style::ChartStyle;
use crate::text::TextMetrics;
use crate::types::{Insets, HEIGHT, WIDTH};

/// A view that paints a bar chart of a small labeled data set.
///
/// The host sets the data and size; the view recomputes its cached metrics and
/// marks itself invalidated. The host then calls [`BarChartView::on_draw`]
/// whenever it repaints.
pub struct BarChartView<M: TextMetrics> {
    data: Vec<BarData>,
    metrics: LayoutMetrics,
    style: ChartStyle,
    padding: Insets,
    width: i32,
    height: i32,
    text: M,
    invalidated: bool,
}

impl<M: TextMetrics> BarChartView<M> {
    pub fn new(text: M) -> Self {
        Self::with_style(text, ChartStyle::default())
    }

    pub fn with_style(text: M, style: ChartStyle) -> Self {
        Self {
            data: Vec::new(),
            metrics: LayoutMetrics::default(),
            style,
            padding: Insets::default(),
            width: WIDTH,
            height: HEIGHT,
            text,
            invalidated: true,
        }
    }

    /// Replace the data set, recompute cached metrics and request a redraw.
    pub fn set_y_axis_data(&mut self, data: Vec<BarData>) {
        self.data = data;
        self.remeasure();
        let non_finite = self.data.iter().filter(|b| !b.value().is_finite()).count();
        if non_finite > 0 {
            warn!(non_finite, "non-finite values are drawn as empty bars");
        }
        debug!(
            bars = self.data.len(),
            max_value = self.metrics.max_value,
            max_y_text_width = self.metrics.max_y_text_width,
            max_x_text_height = self.metrics.max_x_text_height,
            "bar data updated"
        );
        self.invalidate();
    }

    pub fn data(&self) -> &[BarData] { &self.data }

    pub fn max_value_of_data(&self) -> f32 { self.metrics.max_value }

    pub fn max_width_of_y_axis_text(&self) -> i32 { self.metrics.max_y_text_width }

    pub fn max_height_of_x_axis_text(&self) -> i32 { self.metrics.max_x_text_height }

    pub fn layout_metrics(&self) -> &LayoutMetrics { &self.metrics }

    pub fn style(&self) -> &ChartStyle { &self.style }

    /// Changing the style re-measures text, since font size and density feed the metrics.
    pub fn set_style(&mut self, style: ChartStyle) {
        self.style = style;
        self.remeasure();
        self.invalidate();
    }

    pub fn padding(&self) -> Insets { self.padding }

    pub fn set_padding(&mut self, padding: Insets) {
        if self.padding != padding {
            self.padding = padding;
            self.invalidate();
        }
    }

    pub fn size(&self) -> (i32, i32) { (self.width, self.height) }

    pub fn set_size(&mut self, width: i32, height: i32) {
        let (width, height) = (width.max(0), height.max(0));
        if (self.width, self.height) != (width, height) {
            self.width = width;
            self.height = height;
            self.invalidate();
        }
    }

    /// Request a redraw.
    pub fn invalidate(&mut self) { self.invalidated = true; }

    pub fn is_invalidated(&self) -> bool { self.invalidated }

    /// Return and clear the pending redraw request.
    pub fn take_invalidated(&mut self) -> bool {
        std::mem::take(&mut self.invalidated)
    }

    /// X-label height plus the gap between the labels and the X axis.
    pub fn x_axis_label_and_margin(&self) -> i32 {
        self.metrics.x_axis_label_and_margin(&self.style)
    }

    /// Axis origin in canvas coordinates.
    pub fn origin(&self) -> PointI32 {
        layout::origin(!self.data.is_empty(), &self.metrics, self.size(), &self.padding, &self.style)
    }

    /// Pixel layout for the current data, size and padding.
    pub fn geometry(&self) -> ChartGeometry {
        layout::compute(&self.data, &self.metrics, self.size(), &self.padding, &self.style, &self.text)
    }

    /// Draw routine: axes, then each bar with its label, then the Y-axis ticks.
    /// Without data only the axes frame is drawn.
    pub fn on_draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let g = self.geometry();
        trace!(width = self.width, height = self.height, bars = g.bars.len(), "draw");

        let mut paint = self.paint();
        canvas.draw_line(g.y_axis.0, g.y_axis.1, &paint);
        paint.stroke_width = self.style.stroke_width + 1.0;
        canvas.draw_line(g.x_axis.0, g.x_axis.1, &paint);

        if self.data.is_empty() {
            return;
        }
        for bar in &g.bars {
            canvas.draw_rect(bar.rect, &paint);
            canvas.draw_text(&bar.label, bar.label_origin, &paint);
        }
        self.draw_ticks(&g.y_ticks, canvas, &paint);
    }

    /// Draw the Y-axis tick markers and value labels for a plot of `plot_height`
    /// pixels above `origin`.
    pub fn show_y_axis_labels<C: Canvas + ?Sized>(&self, origin: PointI32, plot_height: i32, canvas: &mut C) {
        let ticks = layout::y_ticks(origin, plot_height, self.metrics.max_value, &self.style, &self.text);
        let mut paint = self.paint();
        paint.stroke_width = self.style.stroke_width + 1.0;
        self.draw_ticks(&ticks, canvas, &paint);
    }

    /// Draw one X-axis label centered under `center_x`.
    pub fn show_x_axis_label<C: Canvas + ?Sized>(&self, origin: PointI32, label: &str, center_x: i32, canvas: &mut C) {
        let at = layout::x_label_origin(origin, label, center_x, &self.metrics, &self.style, &self.text);
        canvas.draw_text(label, at, &self.paint());
    }

    fn draw_ticks<C: Canvas + ?Sized>(&self, ticks: &[layout::YTick], canvas: &mut C, paint: &Paint) {
        for tick in ticks {
            canvas.draw_line(tick.line_from, tick.line_to, paint);
            canvas.draw_text(&tick.label, tick.label_origin, paint);
        }
    }

    fn paint(&self) -> Paint {
        Paint {
            color: self.style.axis_color,
            stroke_width: self.style.stroke_width,
            text_size: self.style.font_size_px(),
        }
    }

    fn remeasure(&mut self) {
        self.metrics = LayoutMetrics::measure(&self.data, &self.text, &self.style);
    }
}
