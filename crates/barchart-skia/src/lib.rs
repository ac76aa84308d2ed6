// File: crates/barchart-skia/src/lib.rs
// Summary: Skia CPU raster backend: canvas adapter, font metrics and PNG/RGBA output for the bar chart view.

use std::path::Path;

use anyhow::{Context, Result};
use barchart_core::types::{HEIGHT, WIDTH};
use barchart_core::{BarChartView, Canvas, Color, Paint, PointI32, RectI32, TextBounds, TextMetrics};
use skia_safe as skia;
use tracing::debug;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub background: Color,
    /// Skip text primitives; snapshot tests use this to avoid font variance.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            background: Color::WHITE,
            draw_labels: true,
        }
    }
}

fn to_skia(color: Color) -> skia::Color {
    skia::Color::new(color.0)
}

fn default_font() -> skia::Font {
    match skia::FontMgr::default().legacy_make_typeface(None, skia::FontStyle::default()) {
        Some(typeface) => skia::Font::from_typeface(typeface, 12.0),
        None => skia::Font::default(),
    }
}

/// Measures text with the platform default typeface.
#[derive(Clone)]
pub struct SkiaTextMetrics {
    font: skia::Font,
}

impl SkiaTextMetrics {
    pub fn new() -> Self {
        Self { font: default_font() }
    }

    fn sized(&self, size: f32) -> skia::Font {
        let mut font = self.font.clone();
        font.set_size(size.max(1.0));
        font
    }
}

impl Default for SkiaTextMetrics {
    fn default() -> Self { Self::new() }
}

impl TextMetrics for SkiaTextMetrics {
    fn advance_width(&self, text: &str, size: f32) -> f32 {
        let (advance, _) = self.sized(size).measure_str(text, None);
        advance
    }

    fn text_bounds(&self, text: &str, size: f32) -> TextBounds {
        let (_, bounds) = self.sized(size).measure_str(text, None);
        TextBounds { width: bounds.width(), height: bounds.height() }
    }
}

/// Adapts a Skia canvas to the chart's drawing seam.
pub struct SkiaCanvas<'a> {
    canvas: &'a skia::Canvas,
    font: skia::Font,
    draw_labels: bool,
}

impl<'a> SkiaCanvas<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        Self { canvas, font: default_font(), draw_labels: true }
    }

    pub fn with_labels(mut self, draw_labels: bool) -> Self {
        self.draw_labels = draw_labels;
        self
    }

    fn paint(p: &Paint, style: skia::paint::Style) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(p.color));
        paint.set_anti_alias(true);
        paint.set_stroke_width(p.stroke_width);
        paint.set_style(style);
        paint
    }
}

impl Canvas for SkiaCanvas<'_> {
    fn draw_line(&mut self, from: PointI32, to: PointI32, paint: &Paint) {
        let stroke = Self::paint(paint, skia::paint::Style::Stroke);
        self.canvas.draw_line((from.x as f32, from.y as f32), (to.x as f32, to.y as f32), &stroke);
    }

    fn draw_rect(&mut self, rect: RectI32, paint: &Paint) {
        let fill = Self::paint(paint, skia::paint::Style::Fill);
        let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
        self.canvas.draw_rect(r, &fill);
    }

    fn draw_text(&mut self, text: &str, origin: PointI32, paint: &Paint) {
        if !self.draw_labels {
            return;
        }
        self.font.set_size(paint.text_size.max(1.0));
        let fill = Self::paint(paint, skia::paint::Style::Fill);
        self.canvas.draw_str(text, (origin.x as f32, origin.y as f32), &self.font, &fill);
    }
}

/// Size the view to the options, then draw it onto a fresh CPU raster surface.
pub fn render_to_surface<M: TextMetrics>(view: &mut BarChartView<M>, opts: &RenderOptions) -> Result<skia::Surface> {
    let (w, h) = (opts.width.max(1), opts.height.max(1));
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;

    view.set_size(w, h);
    {
        let canvas = surface.canvas();
        canvas.clear(to_skia(opts.background));
        let mut target = SkiaCanvas::new(canvas).with_labels(opts.draw_labels);
        view.on_draw(&mut target);
    }
    view.take_invalidated();
    debug!(width = w, height = h, bars = view.data().len(), "rendered bar chart");
    Ok(surface)
}

/// Render to encoded PNG bytes.
pub fn render_to_png_bytes<M: TextMetrics>(view: &mut BarChartView<M>, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = render_to_surface(view, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the chart to a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png<M: TextMetrics>(
    view: &mut BarChartView<M>,
    opts: &RenderOptions,
    output_png_path: impl AsRef<Path>,
) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(view, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote PNG");
    Ok(())
}

/// Render to an unpremultiplied RGBA8 buffer. Returns `(pixels, width, height, row_bytes)`.
pub fn render_to_rgba8<M: TextMetrics>(
    view: &mut BarChartView<M>,
    opts: &RenderOptions,
) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = render_to_surface(view, opts)?;
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        anyhow::bail!("reading back {w}x{h} pixels failed");
    }
    Ok((pixels, w as u32, h as u32, row_bytes))
}
