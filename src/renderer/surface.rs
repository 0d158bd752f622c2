//! Drawing surface abstraction
//!
//! The game only ever fills shapes and text, so a surface is a handful of
//! fill primitives. The browser backs it with a canvas 2D context; tests and
//! the headless runner record the calls instead.

use glam::Vec2;

use crate::sim::Rect;

/// Opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// From 0xRRGGBB
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// CSS colour string
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND_START: Color = Color::hex(0x1a1a1a);
    pub const BACKGROUND_END: Color = Color::hex(0x333333);
    pub const BALL: Color = Color::hex(0x00ff0d);
    pub const PADDLE: Color = Color::hex(0x15ff00);
    pub const SHADOW: Color = Color::hex(0x000000);
    pub const BRICK_SHADOW: Color = Color::hex(0x222222);
    pub const SCORE: Color = Color::hex(0xffffff);
    pub const LIFE: Color = Color::hex(0xff4444);
    pub const DEFEAT: Color = Color::hex(0xff0000);
}

/// Soft drop shadow under a filled shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub blur: f32,
}

/// Fill style for shapes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub shadow: Option<Shadow>,
}

impl Paint {
    pub const fn solid(color: Color) -> Self {
        Self {
            color,
            shadow: None,
        }
    }

    pub const fn with_shadow(color: Color, shadow_color: Color, blur: f32) -> Self {
        Self {
            color,
            shadow: Some(Shadow {
                color: shadow_color,
                blur,
            }),
        }
    }
}

/// Text font
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size_px: f32,
    pub family: &'static str,
}

impl Font {
    pub const fn new(size_px: f32, family: &'static str) -> Self {
        Self { size_px, family }
    }

    /// CSS font shorthand, e.g. `16px Arial`
    pub fn css(&self) -> String {
        format!("{}px {}", self.size_px, self.family)
    }
}

/// Linear gradient between two points
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    /// (offset in 0..=1, colour), in ascending offset order
    pub stops: Vec<(f32, Color)>,
}

/// Something the game can draw onto. Never read back.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn fill_rect(&mut self, rect: Rect, paint: &Paint);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &Font, color: Color);
    fn fill_rect_gradient(&mut self, rect: Rect, gradient: &LinearGradient);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(Color::hex(0x15ff00), Color::rgb(0x15, 0xff, 0x00));
        assert_eq!(colors::LIFE.css(), "rgb(255, 68, 68)");
    }

    #[test]
    fn test_font_css() {
        assert_eq!(Font::new(16.0, "Arial").css(), "16px Arial");
        assert_eq!(Font::new(40.0, "Comic Sans MS").css(), "40px Comic Sans MS");
    }
}
