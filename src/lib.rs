//! Brick Breaker - A classic Breakout arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (ball, paddle, brick grid, game phase)
//! - `game`: The per-frame game loop tying input, simulation and rendering together
//! - `renderer`: Drawing onto an abstract 2D surface (canvas in the browser)
//! - `platform`: Hosts that schedule frames (browser loop, headless runner)
//! - `config`: Data-driven game constants

pub mod config;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game::{GameLoop, TickOutcome};

/// Game configuration constants (defaults for [`GameConfig`])
pub mod consts {
    /// Fallback arena size when no surface dictates one
    pub const ARENA_WIDTH: f32 = 900.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 16.0;
    /// Per-axis ball speed in pixels per frame
    pub const BALL_SPEED: f32 = 5.0;
    /// Ball spawns this far above the bottom edge
    pub const BALL_START_LIFT: f32 = 30.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Keyboard movement per frame
    pub const PADDLE_STEP: f32 = 7.0;

    /// Brick grid defaults (rows stack downward, columns run across)
    pub const BRICK_ROWS: usize = 6;
    pub const BRICK_COLS: usize = 12;
    pub const BRICK_WIDTH: f32 = 60.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;
    /// Upper bound on rows x cols accepted from a config
    pub const MAX_BRICKS: usize = 10_000;

    pub const START_LIVES: u32 = 10;

    /// Brick colour cycle: sin(now_ms / divisor), ~2.5s period
    pub const COLOR_CYCLE_DIVISOR_MS: f64 = 400.0;

    /// Headless frame time (60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}
