//! Collision detection for axis-aligned geometry
//!
//! Everything in the arena is a rectangle or a ball's center point, and the
//! ball only ever moves diagonally at fixed speed, so collisions reduce to
//! point-in-rectangle tests and "would the next step leave the arena" checks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, origin at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict containment: points on the border are outside
    #[inline]
    pub fn contains_point_exclusive(&self, p: Vec2) -> bool {
        p.x > self.x && p.x < self.right() && p.y > self.y && p.y < self.bottom()
    }
}

/// Which boundary of the arena the next step would cross
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallContact {
    /// Left or right wall: reflect dx
    pub side: bool,
    /// Ceiling: reflect dy
    pub top: bool,
    /// Floor: paddle bounce or a lost life
    pub bottom: bool,
}

/// Check the ball's next position against the arena walls
///
/// `top` and `bottom` are mutually exclusive; the ceiling wins if a tiny arena
/// makes both true at once.
pub fn wall_contact(pos: Vec2, vel: Vec2, radius: f32, width: f32, height: f32) -> WallContact {
    let next = pos + vel;
    let side = next.x > width - radius || next.x < radius;
    let top = next.y < radius;
    let bottom = !top && next.y > height - radius;
    WallContact { side, top, bottom }
}

/// Whether the ball's center is over the paddle span (edges included)
#[inline]
pub fn over_paddle(ball_x: f32, paddle_x: f32, paddle_width: f32) -> bool {
    ball_x >= paddle_x && ball_x <= paddle_x + paddle_width
}
