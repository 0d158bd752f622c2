//! Game configuration
//!
//! Every tunable constant lives here. Loaded from JSON (a file on native,
//! LocalStorage in the browser) and falls back to the classic layout.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Arena;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of its allowed range
    #[error("Invalid `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    /// Arena width used when the host has no surface of its own
    pub arena_width: f32,
    pub arena_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Per-axis speed in pixels per frame
    pub ball_speed: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Keyboard step per frame
    pub paddle_step: f32,

    // === Bricks ===
    pub brick_rows: usize,
    pub brick_cols: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,

    // === Rules ===
    pub lives: u32,

    // === Presentation ===
    /// Shown by the host when the grid is cleared
    pub victory_message: String,
    /// Drawn in place of the playfield once lives run out
    pub defeat_message: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_step: PADDLE_STEP,

            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,

            lives: START_LIVES,

            victory_message: "YOU WIN, CHAMPION!".to_string(),
            defeat_message: "GAME OVER".to_string(),
        }
    }
}

impl GameConfig {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "brick_breaker_config";

    /// Parse a config from JSON; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check every value is usable, including against the fallback arena
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.brick_rows == 0 {
            return Err(ConfigError::invalid("brick_rows", "must be at least 1"));
        }
        if self.brick_cols == 0 {
            return Err(ConfigError::invalid("brick_cols", "must be at least 1"));
        }
        if self.lives == 0 {
            return Err(ConfigError::invalid("lives", "must be at least 1"));
        }
        match self.brick_rows.checked_mul(self.brick_cols) {
            Some(total) if total <= MAX_BRICKS => {}
            _ => {
                return Err(ConfigError::invalid(
                    "brick_cols",
                    format!(
                        "{}x{} grid exceeds {} bricks",
                        self.brick_rows, self.brick_cols, MAX_BRICKS
                    ),
                ));
            }
        }

        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_step", self.paddle_step),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be a positive number, got {value}"),
                ));
            }
        }

        let non_negative = [
            ("brick_padding", self.brick_padding),
            ("brick_offset_top", self.brick_offset_top),
            ("brick_offset_left", self.brick_offset_left),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::invalid(
                    field,
                    format!("must not be negative, got {value}"),
                ));
            }
        }

        self.validate_for_arena(self.default_arena())
    }

    /// Check the config fits an arena of the given size
    pub fn validate_for_arena(&self, arena: Arena) -> Result<(), ConfigError> {
        if self.paddle_width > arena.width {
            return Err(ConfigError::invalid(
                "paddle_width",
                format!(
                    "paddle ({}) is wider than the arena ({})",
                    self.paddle_width, arena.width
                ),
            ));
        }
        if self.ball_radius * 2.0 > arena.width.min(arena.height) {
            return Err(ConfigError::invalid(
                "ball_radius",
                format!("ball does not fit a {}x{} arena", arena.width, arena.height),
            ));
        }
        // The ball centre has to get strictly inside the last column
        let grid_right = self.grid_right();
        if grid_right > arena.width - self.ball_radius {
            return Err(ConfigError::invalid(
                "brick_cols",
                format!(
                    "grid reaches x={} but the ball cannot pass x={}",
                    grid_right,
                    arena.width - self.ball_radius
                ),
            ));
        }
        Ok(())
    }

    /// Right edge of the last brick column
    pub fn grid_right(&self) -> f32 {
        self.brick_offset_left
            + self.brick_cols as f32 * (self.brick_width + self.brick_padding)
            - self.brick_padding
    }

    /// Arena used when the host does not provide one
    pub fn default_arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Number of bricks that must break to win
    pub fn total_bricks(&self) -> usize {
        self.brick_rows * self.brick_cols
    }

    /// Centred paddle position
    pub fn paddle_start_x(&self, arena: Arena) -> f32 {
        (arena.width - self.paddle_width) / 2.0
    }

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json_str(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.total_bricks(), 72);
        assert_eq!(config.lives, 10);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json_str(r#"{ "brick_rows": 1, "brick_cols": 1, "lives": 3 }"#)
            .unwrap();
        assert_eq!(config.total_bricks(), 1);
        assert_eq!(config.lives, 3);
        assert_eq!(config.ball_radius, BALL_RADIUS);
        assert_eq!(config.paddle_step, PADDLE_STEP);
    }

    #[test]
    fn test_malformed_json() {
        let err = GameConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_empty_grid_and_zero_lives() {
        let err = GameConfig::from_json_str(r#"{ "brick_cols": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "brick_cols", .. }));

        let err = GameConfig::from_json_str(r#"{ "lives": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "lives", .. }));
    }

    #[test]
    fn test_rejects_paddle_wider_than_arena() {
        let config = GameConfig::default();
        let err = config.validate_for_arena(Arena::new(50.0, 300.0)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "paddle_width", .. }));
        assert!(err.to_string().contains("paddle_width"));
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let err =
            GameConfig::from_json_str(r#"{ "brick_rows": 4294967296, "brick_cols": 4294967296 }"#)
                .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "brick_cols", .. }));

        let err = GameConfig::from_json_str(r#"{ "brick_rows": 10001, "brick_cols": 1 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));

        let config = GameConfig::from_json_str(r#"{ "brick_rows": 100, "brick_cols": 1 }"#)
            .unwrap();
        assert_eq!(config.total_bricks(), 100);
    }

    #[test]
    fn test_rejects_grid_the_ball_cannot_reach() {
        let config = GameConfig::default();
        assert_eq!(config.grid_right(), 860.0);
        assert!(config.validate_for_arena(Arena::new(876.0, 600.0)).is_ok());

        let err = config.validate_for_arena(Arena::new(800.0, 600.0)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "brick_cols", .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_paddle_start_centred() {
        let config = GameConfig::default();
        let arena = Arena::new(480.0, 320.0);
        assert_eq!(config.paddle_start_x(arena), 202.5);
    }
}
