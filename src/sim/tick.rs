//! Per-frame simulation tick
//!
//! One call advances the game by exactly one frame. Velocities are in pixels
//! per frame, so there is no delta time. Order within a frame:
//! paddle input, brick hits, wall/paddle/floor checks, ball integration.

use super::collision::{over_paddle, wall_contact};
use super::input::TickInput;
use super::state::{GameEvent, GamePhase, GameState};
use crate::config::GameConfig;

/// Advance the game state by one frame
///
/// Terminal phases are frozen: nothing moves once the game is won or lost.
pub fn tick(state: &mut GameState, input: &TickInput, config: &GameConfig) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase.is_terminal() {
        return events;
    }

    state.time_ticks += 1;

    apply_paddle_input(state, input, config);

    // Brick hits, tested against the ball's current centre
    break_bricks(state, &mut events);
    if state.phase == GamePhase::Won {
        return events;
    }

    let contact = wall_contact(
        state.ball.pos,
        state.ball.vel,
        state.ball.radius,
        state.arena.width,
        state.arena.height,
    );
    if contact.side {
        state.ball.reflect_x();
    }
    if contact.top {
        state.ball.reflect_y();
    } else if contact.bottom {
        if over_paddle(state.ball.pos.x, state.paddle.x, state.paddle.width) {
            state.ball.reflect_y();
            events.push(GameEvent::PaddleHit);
        } else {
            lose_life(state, config, &mut events);
            // A fresh serve (or a frozen game) does not move this frame
            return events;
        }
    }

    state.ball.step();
    events
}

/// Pointer first, then held keys. Both write the same paddle position,
/// so whichever runs last wins.
fn apply_paddle_input(state: &mut GameState, input: &TickInput, config: &GameConfig) {
    let arena = state.arena;

    // Pointer positions outside the arena are ignored outright
    if let Some(x) = input.pointer_x.filter(|x| *x > 0.0 && *x < arena.width) {
        state.paddle.center_on(x, arena);
    }

    let paddle = &mut state.paddle;
    if input.right && !paddle.at_right_wall(arena) {
        paddle.nudge(config.paddle_step, arena);
    } else if input.left && !paddle.at_left_wall() {
        paddle.nudge(-config.paddle_step, arena);
    }
}

/// Break every active brick containing the ball's centre.
///
/// Each hit flips dy independently, so two hits in one frame cancel out.
fn break_bricks(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let pos = state.ball.pos;
    let hits: Vec<(usize, usize)> = state
        .bricks
        .active_bricks()
        .filter(|brick| brick.rect.contains_point_exclusive(pos))
        .map(|brick| (brick.row, brick.col))
        .collect();

    for (row, col) in hits {
        if !state.bricks.mark_broken(row, col) {
            continue;
        }
        state.ball.reflect_y();
        state.score += 1;
        log::debug!("Brick ({}, {}) broken, score {}", row, col, state.score);
        events.push(GameEvent::BrickBroken {
            row,
            col,
            score: state.score,
        });

        if state.score == state.total_bricks() && state.phase == GamePhase::Playing {
            state.phase = GamePhase::Won;
            events.push(GameEvent::Won);
        }
    }
}

fn lose_life(state: &mut GameState, config: &GameConfig, events: &mut Vec<GameEvent>) {
    state.lives = state.lives.saturating_sub(1);
    events.push(GameEvent::LifeLost {
        remaining: state.lives,
    });

    if state.lives == 0 {
        state.phase = GamePhase::Lost;
        events.push(GameEvent::Lost);
    } else {
        state.reset_serve(config);
    }
}
