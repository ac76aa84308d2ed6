// File: crates/barchart-core/src/types.rs
// Summary: Shared types and constants (sizes, colors, paddings).

use serde::{Deserialize, Serialize};

/// Default surface width in pixels.
pub const WIDTH: i32 = 720;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 480;

/// View padding, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same inset on every side.
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }
    /// Total horizontal inset (left + right), saturating.
    pub const fn hsum(&self) -> u32 { self.left.saturating_add(self.right) }
    /// Total vertical inset (top + bottom), saturating.
    pub const fn vsum(&self) -> u32 { self.top.saturating_add(self.bottom) }
}

/// Inset value as signed pixels, saturating at `i32::MAX`.
pub fn px(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(16)
    }
}

/// Packed 0xAARRGGBB color, independent of any rendering backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color::from_argb(255, 0, 0, 0);
    pub const WHITE: Color = Color::from_argb(255, 255, 255, 255);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }
    pub const fn a(self) -> u8 { (self.0 >> 24) as u8 }
    pub const fn r(self) -> u8 { (self.0 >> 16) as u8 }
    pub const fn g(self) -> u8 { (self.0 >> 8) as u8 }
    pub const fn b(self) -> u8 { self.0 as u8 }

    /// `#rrggbb` form used by the SVG writer.
    pub fn to_hex_rgb(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_channels_roundtrip() {
        let c = Color::from_argb(0x80, 0x12, 0x34, 0x56);
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (0x80, 0x12, 0x34, 0x56));
        assert_eq!(c.to_hex_rgb(), "#123456");
    }

    #[test]
    fn insets_sums() {
        let i = Insets::new(1, 2, 3, 4);
        assert_eq!(i.hsum(), 3);
        assert_eq!(i.vsum(), 7);
    }

    #[test]
    fn huge_insets_saturate() {
        let i = Insets::new(u32::MAX, 1, u32::MAX, 1);
        assert_eq!(i.hsum(), u32::MAX);
        assert_eq!(i.vsum(), u32::MAX);
        assert_eq!(px(u32::MAX), i32::MAX);
        assert_eq!(px(16), 16);
    }
}
