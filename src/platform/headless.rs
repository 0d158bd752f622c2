//! Headless host
//!
//! Drives a [`GameLoop`] without a display: a simulated clock advances one
//! frame per tick, input comes from a script or the autopilot, and draw calls
//! land on a [`RecordingSurface`] that keeps only the latest frame.

use serde::Serialize;

use crate::consts::FRAME_MS;
use crate::game::{GameLoop, TickOutcome};
use crate::renderer::RecordingSurface;
use crate::sim::{GameState, InputEvent, autopilot};

/// Headless run settings
#[derive(Debug, Clone, Copy)]
pub struct HeadlessOptions {
    /// Stop after this many frames even if the game is still running
    pub max_frames: u64,
    /// Simulated time per frame
    pub frame_ms: f64,
}

impl Default for HeadlessOptions {
    fn default() -> Self {
        Self {
            // Ten minutes at 60 Hz
            max_frames: 60 * 60 * 10,
            frame_ms: FRAME_MS,
        }
    }
}

/// How a headless run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunOutcome {
    Won,
    Lost,
    FrameLimit,
}

/// Result of a headless run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub frames: u64,
    pub score: u32,
    pub lives: u32,
    pub total_bricks: u32,
}

/// Run with the autopilot at the controls
pub fn run(game: &mut GameLoop, options: HeadlessOptions) -> RunSummary {
    run_with(game, options, |state| autopilot::steer(state).into_iter().collect())
}

/// Run with `input` supplying each frame's events before the tick
pub fn run_with<F>(game: &mut GameLoop, options: HeadlessOptions, mut input: F) -> RunSummary
where
    F: FnMut(&GameState) -> Vec<InputEvent>,
{
    let arena = game.state().arena;
    let mut surface = RecordingSurface::new(arena.width, arena.height);
    let mut now_ms = 0.0;
    let mut frames = 0;

    let outcome = loop {
        if frames >= options.max_frames {
            break RunOutcome::FrameLimit;
        }

        for event in input(game.state()) {
            game.push_input(event);
        }

        surface.clear();
        let result = game.run_tick(&mut surface, now_ms);
        frames += 1;
        now_ms += options.frame_ms;

        match result {
            TickOutcome::Continue => {}
            TickOutcome::GameOver => break RunOutcome::Lost,
            TickOutcome::Restart => break RunOutcome::Won,
        }
    };

    let state = game.state();
    let summary = RunSummary {
        outcome,
        frames,
        score: state.score,
        lives: state.lives,
        total_bricks: state.total_bricks(),
    };
    log::info!(
        "Headless run finished: {:?} after {} frames, score {}/{}, {} lives left",
        summary.outcome,
        summary.frames,
        summary.score,
        summary.total_bricks,
        summary.lives
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::Arena;

    fn game(config: GameConfig) -> GameLoop {
        GameLoop::new(config, Arena::new(900.0, 600.0)).unwrap()
    }

    #[test]
    fn test_frame_limit() {
        let mut game = game(GameConfig::default());
        let options = HeadlessOptions {
            max_frames: 50,
            ..Default::default()
        };
        let summary = run(&mut game, options);
        assert_eq!(summary.outcome, RunOutcome::FrameLimit);
        assert_eq!(summary.frames, 50);
        assert_eq!(summary.lives, 10);
        assert_eq!(summary.total_bricks, 72);
    }

    #[test]
    fn test_no_input_loses_every_life() {
        // Paddle parked in the left corner; the serve path never comes near it
        let config = GameConfig {
            lives: 2,
            ..Default::default()
        };
        let mut game = game(config);
        let summary = run_with(&mut game, HeadlessOptions::default(), |_| {
            vec![InputEvent::PointerMove(1.0)]
        });
        assert_eq!(summary.outcome, RunOutcome::Lost);
        assert_eq!(summary.lives, 0);
        assert!(summary.frames < HeadlessOptions::default().max_frames);
    }

    #[test]
    fn test_autopilot_clears_small_grid() {
        let config = GameConfig {
            brick_rows: 1,
            brick_cols: 3,
            ..Default::default()
        };
        let mut game = game(config);
        let summary = run(&mut game, HeadlessOptions::default());
        assert_eq!(summary.outcome, RunOutcome::Won);
        assert_eq!(summary.score, 3);
        assert_eq!(summary.lives, 10);
    }

    #[test]
    fn test_summary_serializes() {
        let mut game = game(GameConfig::default());
        let options = HeadlessOptions {
            max_frames: 1,
            ..Default::default()
        };
        let json = serde_json::to_string(&run(&mut game, options)).unwrap();
        assert!(json.contains("\"outcome\":\"FrameLimit\""));
    }
}
