// File: crates/barchart-core/src/canvas.rs
// Summary: Renderer-agnostic drawing seam (lines, rectangles, text) and a recording implementation.

use crate::geometry::{PointI32, RectI32};
use crate::types::Color;

/// Pen state for one primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub color: Color,
    /// Line width in pixels; rectangles are always filled.
    pub stroke_width: f32,
    /// Text size in pixels.
    pub text_size: f32,
}

impl Default for Paint {
    fn default() -> Self {
        Self { color: Color::BLACK, stroke_width: 1.0, text_size: 12.0 }
    }
}

/// 2D drawing surface. Coordinates are canvas pixels, y grows downwards.
pub trait Canvas {
    fn draw_line(&mut self, from: PointI32, to: PointI32, paint: &Paint);
    /// Fill `rect`.
    fn draw_rect(&mut self, rect: RectI32, paint: &Paint);
    /// Draw `text` with its left edge at `origin.x` and baseline at `origin.y`.
    fn draw_text(&mut self, text: &str, origin: PointI32, paint: &Paint);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn draw_line(&mut self, from: PointI32, to: PointI32, paint: &Paint) {
        (**self).draw_line(from, to, paint)
    }
    fn draw_rect(&mut self, rect: RectI32, paint: &Paint) {
        (**self).draw_rect(rect, paint)
    }
    fn draw_text(&mut self, text: &str, origin: PointI32, paint: &Paint) {
        (**self).draw_text(text, origin, paint)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line { from: PointI32, to: PointI32, paint: Paint },
    Rect { rect: RectI32, paint: Paint },
    Text { text: String, origin: PointI32, paint: Paint },
}

/// Canvas that keeps every primitive in call order.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self { Self::default() }

    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    pub fn into_commands(self) -> Vec<DrawCommand> { self.commands }

    pub fn lines(&self) -> impl Iterator<Item = (PointI32, PointI32, &Paint)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, paint } => Some((*from, *to, paint)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = RectI32> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect { rect, .. } => Some(*rect),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, PointI32)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, origin, .. } => Some((text.as_str(), *origin)),
            _ => None,
        })
    }

    /// Replay the recorded primitives onto another canvas.
    pub fn replay<C: Canvas + ?Sized>(&self, target: &mut C) {
        for cmd in &self.commands {
            match cmd {
                DrawCommand::Line { from, to, paint } => target.draw_line(*from, *to, paint),
                DrawCommand::Rect { rect, paint } => target.draw_rect(*rect, paint),
                DrawCommand::Text { text, origin, paint } => target.draw_text(text, *origin, paint),
            }
        }
    }
}

impl Canvas for RecordingCanvas {
    fn draw_line(&mut self, from: PointI32, to: PointI32, paint: &Paint) {
        self.commands.push(DrawCommand::Line { from, to, paint: *paint });
    }
    fn draw_rect(&mut self, rect: RectI32, paint: &Paint) {
        self.commands.push(DrawCommand::Rect { rect, paint: *paint });
    }
    fn draw_text(&mut self, text: &str, origin: PointI32, paint: &Paint) {
        self.commands.push(DrawCommand::Text { text: text.to_owned(), origin, paint: *paint });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_preserves_order() {
        let paint = Paint::default();
        let mut rec = RecordingCanvas::new();
        rec.draw_line(PointI32::new(0, 0), PointI32::new(1, 1), &paint);
        rec.draw_text("a", PointI32::new(2, 2), &paint);
        rec.draw_rect(RectI32::from_ltrb(0, 0, 3, 3), &paint);

        let mut copy = RecordingCanvas::new();
        rec.replay(&mut copy);
        assert_eq!(rec.commands(), copy.commands());
        assert_eq!(copy.lines().count(), 1);
        assert_eq!(copy.texts().next(), Some(("a", PointI32::new(2, 2))));
    }
}
