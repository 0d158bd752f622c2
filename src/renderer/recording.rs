//! Recording surface
//!
//! Keeps every draw call as a [`DrawCommand`] instead of rasterising.
//! Used by the headless runner and by tests that check what got drawn.

use glam::Vec2;

use super::surface::{Color, Font, LinearGradient, Paint, Surface};
use crate::sim::Rect;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { rect: Rect, paint: Paint },
    Circle { center: Vec2, radius: f32, paint: Paint },
    Text { text: String, pos: Vec2, font: Font, color: Color },
    Gradient { rect: Rect, gradient: LinearGradient },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Forget everything drawn so far (start of a new frame)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded text strings, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.commands.push(DrawCommand::Rect { rect, paint: *paint });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            paint: *paint,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &Font, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            font: *font,
            color,
        });
    }

    fn fill_rect_gradient(&mut self, rect: Rect, gradient: &LinearGradient) {
        self.commands.push(DrawCommand::Gradient {
            rect,
            gradient: gradient.clone(),
        });
    }
}
