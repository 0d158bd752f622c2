//! Idle/demo mode: the computer plays
//!
//! Produces pointer events that keep the paddle under the ball, with a slow
//! oscillating offset so the ball does not retrace one path forever.

use super::input::InputEvent;
use super::state::{GamePhase, GameState};

/// Pointer offset (in paddle half-widths) applied while tracking
const SWAY: f32 = 0.6;

/// Pointer event steering the paddle for the next tick, if any
pub fn steer(state: &GameState) -> Option<InputEvent> {
    if state.phase != GamePhase::Playing {
        return None;
    }

    let ball = &state.ball;
    // Lead the ball by one frame
    let target = ball.pos.x + ball.vel.x;

    // Only sway while the ball is heading up; line up squarely when it falls
    let time_factor = state.time_ticks as f32 * 0.01;
    let sway = if ball.vel.y < 0.0 {
        (time_factor.sin() * 0.7 + (time_factor * 0.3).sin() * 0.3)
            * SWAY
            * state.paddle.width
            / 2.0
    } else {
        0.0
    };

    // Keep strictly inside the arena or the event would be ignored
    let x = (target + sway).clamp(1.0, state.arena.width - 1.0);
    Some(InputEvent::PointerMove(x))
}
