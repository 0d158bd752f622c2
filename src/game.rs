//! The game loop
//!
//! [`GameLoop`] owns the game state and the pending input. Hosts feed it
//! input events whenever they arrive and call [`GameLoop::run_tick`] once per
//! frame; the returned [`TickOutcome`] tells them whether to keep scheduling.

use crate::config::{ConfigError, GameConfig};
use crate::renderer::{Surface, draw_frame};
use crate::sim::{
    Arena, GameEvent, GamePhase, GameState, InputEvent, InputQueue, InputState, tick,
};

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Schedule the next frame
    Continue,
    /// Out of lives. The defeat message has been drawn; stop scheduling.
    GameOver,
    /// Grid cleared: tell the player and restart the whole program
    Restart,
}

impl TickOutcome {
    /// Whether the host should request another frame
    pub fn keeps_running(self) -> bool {
        matches!(self, TickOutcome::Continue)
    }
}

pub struct GameLoop {
    config: GameConfig,
    state: GameState,
    keys: InputState,
    pending: InputQueue,
}

impl GameLoop {
    /// Start a game in the given arena
    pub fn new(config: GameConfig, arena: Arena) -> Result<Self, ConfigError> {
        config.validate()?;
        config.validate_for_arena(arena)?;

        log::info!(
            "New game: arena {}x{}, {}x{} bricks, {} lives",
            arena.width,
            arena.height,
            config.brick_rows,
            config.brick_cols,
            config.lives
        );

        Ok(Self {
            state: GameState::new(&config, arena),
            config,
            keys: InputState::default(),
            pending: InputQueue::new(),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn victory_message(&self) -> &str {
        &self.config.victory_message
    }

    /// Queue an input event for the next tick
    pub fn push_input(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Key-down by DOM key code; unknown keys are ignored
    pub fn key_down(&mut self, code: u32) {
        if let Some(event) = InputEvent::key_down(code) {
            self.push_input(event);
        }
    }

    /// Key-up by DOM key code; unknown keys are ignored
    pub fn key_up(&mut self, code: u32) {
        if let Some(event) = InputEvent::key_up(code) {
            self.push_input(event);
        }
    }

    /// Pointer moved to `x`, relative to the arena's left edge
    pub fn pointer_move(&mut self, x: f32) {
        self.push_input(InputEvent::PointerMove(x));
    }

    /// Run one frame: apply input, step the simulation, draw
    pub fn run_tick(&mut self, surface: &mut dyn Surface, now_ms: f64) -> TickOutcome {
        match self.state.phase {
            GamePhase::Won => {
                self.pending.clear();
                return TickOutcome::Restart;
            }
            GamePhase::Lost => {
                self.pending.clear();
                draw_frame(surface, &self.state, &self.config.defeat_message, now_ms);
                return TickOutcome::GameOver;
            }
            GamePhase::Playing => {}
        }

        let input = self.keys.apply(self.pending.drain());
        let events = tick(&mut self.state, &input, &self.config);
        for event in &events {
            log_event(event);
        }

        if self.state.phase == GamePhase::Won {
            return TickOutcome::Restart;
        }

        draw_frame(surface, &self.state, &self.config.defeat_message, now_ms);

        match self.state.phase {
            GamePhase::Lost => TickOutcome::GameOver,
            _ => TickOutcome::Continue,
        }
    }

    /// Start over in the same arena (hosts that cannot reload the program)
    pub fn restart(&mut self) {
        self.state = GameState::new(&self.config, self.state.arena);
        self.keys = InputState::default();
        self.pending.clear();
        log::info!("Game restarted");
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::LifeLost { remaining } => log::info!("Ball lost, {} lives left", remaining),
        GameEvent::Won => log::info!("All bricks destroyed - victory!"),
        GameEvent::Lost => log::info!("Out of lives - game over"),
        GameEvent::PaddleHit => log::debug!("Paddle hit"),
        GameEvent::BrickBroken { .. } => {}
    }
}
