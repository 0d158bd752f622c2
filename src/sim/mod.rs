//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per frame, velocities in pixels per frame
//! - Input only through queued events
//! - Stable iteration order (grid scan order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod grid;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{Rect, WallContact, over_paddle, wall_contact};
pub use grid::{Brick, BrickGrid, BrickLayout, BrickStatus};
pub use input::{InputEvent, InputQueue, InputState, Key, TickInput};
pub use state::{Arena, Ball, GameEvent, GamePhase, GameState, Paddle};
pub use tick::tick;
