//! Game state and core simulation types
//!
//! Everything that changes during a game lives in [`GameState`], owned by the
//! game loop and handed to `tick` and the renderer by reference.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::BrickGrid;
use crate::config::GameConfig;

/// Playfield size, fixed for the whole game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Every brick destroyed
    Won,
    /// Out of lives
    Lost,
}

impl GamePhase {
    /// Won and Lost never transition out without a restart
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per frame; each component keeps its magnitude, only signs flip
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Serve position: centred, just above the floor, heading up and right
    pub fn serve(arena: Arena, config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(
                arena.width / 2.0,
                arena.height - crate::consts::BALL_START_LIFT,
            ),
            vel: Vec2::new(config.ball_speed, -config.ball_speed),
            radius: config.ball_radius,
        }
    }

    #[inline]
    pub fn reflect_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    #[inline]
    pub fn reflect_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Advance one frame
    #[inline]
    pub fn step(&mut self) {
        self.pos += self.vel;
    }
}

/// The player's paddle, sitting on the arena floor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Centred paddle
    pub fn centered(arena: Arena, config: &GameConfig) -> Self {
        Self {
            x: config.paddle_start_x(arena),
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    /// Rightmost legal left edge
    #[inline]
    pub fn max_x(&self, arena: Arena) -> f32 {
        (arena.width - self.width).max(0.0)
    }

    /// Move by `delta`, never past the walls
    pub fn nudge(&mut self, delta: f32, arena: Arena) {
        self.x = (self.x + delta).clamp(0.0, self.max_x(arena));
    }

    /// Centre the paddle under `center_x`, clamped to the arena
    pub fn center_on(&mut self, center_x: f32, arena: Arena) {
        self.x = (center_x - self.width / 2.0).clamp(0.0, self.max_x(arena));
    }

    pub fn at_left_wall(&self) -> bool {
        self.x <= 0.0
    }

    pub fn at_right_wall(&self, arena: Arena) -> bool {
        self.x >= self.max_x(arena)
    }
}

/// Something that happened during a tick, for logging and hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BrickBroken { row: usize, col: usize, score: u32 },
    PaddleHit,
    LifeLost { remaining: u32 },
    Won,
    Lost,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    /// Bricks destroyed so far
    pub score: u32,
    pub lives: u32,
    pub phase: GamePhase,
    /// Ticks run while Playing
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh game: full grid, ball served, paddle centred
    pub fn new(config: &GameConfig, arena: Arena) -> Self {
        Self {
            arena,
            ball: Ball::serve(arena, config),
            paddle: Paddle::centered(arena, config),
            bricks: BrickGrid::from_config(config),
            score: 0,
            lives: config.lives,
            phase: GamePhase::Playing,
            time_ticks: 0,
        }
    }

    /// Put ball and paddle back at their start positions after a lost life.
    /// Bricks, score and lives are untouched.
    pub fn reset_serve(&mut self, config: &GameConfig) {
        self.ball = Ball::serve(self.arena, config);
        self.paddle = Paddle::centered(self.arena, config);
    }

    /// Number of bricks in the grid, broken or not
    pub fn total_bricks(&self) -> u32 {
        u32::try_from(self.bricks.len()).unwrap_or(u32::MAX)
    }
}
