// File: crates/barchart-core/src/text.rs
// Summary: Text measurement seam used by layout, with a font-free approximation.

/// Tight ink bounds of a string, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextBounds {
    pub width: f32,
    pub height: f32,
}

/// Measures label text. Backends implement this with their real fonts.
pub trait TextMetrics {
    /// Horizontal advance of `text` at `size` pixels.
    fn advance_width(&self, text: &str, size: f32) -> f32;
    /// Tight bounds of the glyphs of `text` at `size` pixels.
    fn text_bounds(&self, text: &str, size: f32) -> TextBounds;
}

impl<T: TextMetrics + ?Sized> TextMetrics for &T {
    fn advance_width(&self, text: &str, size: f32) -> f32 {
        (**self).advance_width(text, size)
    }
    fn text_bounds(&self, text: &str, size: f32) -> TextBounds {
        (**self).text_bounds(text, size)
    }
}

/// Deterministic estimate: every glyph is `advance` ems wide and `cap_height` ems tall.
/// Used for SVG output (fonts resolve in the viewer) and in tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproxTextMetrics {
    pub advance: f32,
    pub cap_height: f32,
}

impl Default for ApproxTextMetrics {
    fn default() -> Self {
        Self { advance: 0.6, cap_height: 0.7 }
    }
}

impl TextMetrics for ApproxTextMetrics {
    fn advance_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * self.advance
    }

    fn text_bounds(&self, text: &str, size: f32) -> TextBounds {
        if text.is_empty() {
            return TextBounds::default();
        }
        TextBounds { width: self.advance_width(text, size), height: size * self.cap_height }
    }
}
