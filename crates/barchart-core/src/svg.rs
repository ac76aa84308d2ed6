// File: crates/barchart-core/src/svg.rs
// Summary: Canvas implementation that serializes primitives into a standalone SVG document.

use std::fmt::Write as _;

use crate::canvas::{Canvas, Paint};
use crate::geometry::{PointI32, RectI32};
use crate::types::Color;

pub struct SvgCanvas {
    width: i32,
    height: i32,
    body: String,
}

impl SvgCanvas {
    /// Start a document of `width` x `height` pixels filled with `background`.
    pub fn new(width: i32, height: i32, background: Color) -> Self {
        let mut body = String::new();
        let _ = writeln!(
            body,
            r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{}"{}/>"#,
            background.to_hex_rgb(),
            opacity_attr("fill-opacity", background),
        );
        Self { width, height, body }
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }
}

impl Canvas for SvgCanvas {
    fn draw_line(&mut self, from: PointI32, to: PointI32, paint: &Paint) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{}/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            paint.color.to_hex_rgb(),
            paint.stroke_width,
            opacity_attr("stroke-opacity", paint.color),
        );
    }

    fn draw_rect(&mut self, rect: RectI32, paint: &Paint) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}/>"#,
            rect.left,
            rect.top,
            rect.width().max(0),
            rect.height().max(0),
            paint.color.to_hex_rgb(),
            opacity_attr("fill-opacity", paint.color),
        );
    }

    fn draw_text(&mut self, text: &str, origin: PointI32, paint: &Paint) {
        let _ = writeln!(
            self.body,
            r#"<text x="{}" y="{}" font-family="sans-serif" font-size="{}" fill="{}"{}>{}</text>"#,
            origin.x,
            origin.y,
            paint.text_size,
            paint.color.to_hex_rgb(),
            opacity_attr("fill-opacity", paint.color),
            escape(text),
        );
    }
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.a() == 255 {
        String::new()
    } else {
        format!(r#" {name}="{:.3}""#, color.a() as f32 / 255.0)
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
