//! Frame drawing
//!
//! Pure output: reads the game state, issues fill calls, mutates nothing.
//! Draw order is fixed: background, bricks, ball, paddle, score, lives.

use glam::Vec2;

use super::surface::{Color, Font, LinearGradient, Paint, Surface, colors};
use crate::consts::COLOR_CYCLE_DIVISOR_MS;
use crate::sim::{GamePhase, GameState, Rect};

const SCORE_FONT: Font = Font::new(16.0, "Arial");
const DEFEAT_FONT: Font = Font::new(40.0, "Comic Sans MS");

/// Life glyph radius and spacing, right-aligned along the top edge
const LIFE_RADIUS: f32 = 6.0;
const LIFE_SPACING: f32 = 15.0;
const HUD_BASELINE: f32 = 20.0;

/// Brick colour for a wall-clock time, cycling red/green every ~2.5 s
pub fn brick_color(now_ms: f64) -> Color {
    let shift = (128.0 + 128.0 * (now_ms / COLOR_CYCLE_DIVISOR_MS).sin())
        .floor()
        .clamp(0.0, 255.0) as u8;
    Color::rgb(shift, 255 - shift, 70)
}

/// Draw one frame for the current phase
///
/// Playing draws the full scene, Lost only the defeat message, Won nothing.
pub fn draw_frame(surface: &mut dyn Surface, state: &GameState, defeat_message: &str, now_ms: f64) {
    match state.phase {
        GamePhase::Playing => {
            draw_background(surface);
            draw_bricks(surface, state, now_ms);
            draw_ball(surface, state);
            draw_paddle(surface, state);
            draw_score(surface, state);
            draw_lives(surface, state);
        }
        GamePhase::Lost => draw_defeat(surface, defeat_message),
        GamePhase::Won => {}
    }
}

fn draw_background(surface: &mut dyn Surface) {
    let (w, h) = (surface.width(), surface.height());
    let gradient = LinearGradient {
        start: Vec2::ZERO,
        end: Vec2::new(w, h),
        stops: vec![(0.0, colors::BACKGROUND_START), (1.0, colors::BACKGROUND_END)],
    };
    surface.fill_rect_gradient(Rect::new(0.0, 0.0, w, h), &gradient);
}

fn draw_bricks(surface: &mut dyn Surface, state: &GameState, now_ms: f64) {
    let paint = Paint::with_shadow(brick_color(now_ms), colors::BRICK_SHADOW, 3.0);
    for brick in state.bricks.active_bricks() {
        surface.fill_rect(brick.rect, &paint);
    }
}

fn draw_ball(surface: &mut dyn Surface, state: &GameState) {
    let paint = Paint::with_shadow(colors::BALL, colors::SHADOW, 5.0);
    surface.fill_circle(state.ball.pos, state.ball.radius, &paint);
}

fn draw_paddle(surface: &mut dyn Surface, state: &GameState) {
    let paddle = &state.paddle;
    let rect = Rect::new(
        paddle.x,
        state.arena.height - paddle.height,
        paddle.width,
        paddle.height,
    );
    surface.fill_rect(rect, &Paint::with_shadow(colors::PADDLE, colors::SHADOW, 5.0));
}

fn draw_score(surface: &mut dyn Surface, state: &GameState) {
    surface.fill_text(
        &format!("Score: {}", state.score),
        Vec2::new(8.0, HUD_BASELINE),
        &SCORE_FONT,
        colors::SCORE,
    );
}

fn draw_lives(surface: &mut dyn Surface, state: &GameState) {
    let paint = Paint::solid(colors::LIFE);
    for i in 0..state.lives {
        let x = surface.width() - LIFE_SPACING * i as f32 - LIFE_SPACING;
        surface.fill_circle(Vec2::new(x, HUD_BASELINE), LIFE_RADIUS, &paint);
    }
}

fn draw_defeat(surface: &mut dyn Surface, message: &str) {
    let pos = Vec2::new(surface.width() / 4.0, surface.height() / 2.0);
    surface.fill_text(message, pos, &DEFEAT_FONT, colors::DEFEAT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::renderer::recording::{DrawCommand, RecordingSurface};
    use crate::sim::Arena;

    fn render(state: &GameState) -> RecordingSurface {
        let mut surface = RecordingSurface::new(state.arena.width, state.arena.height);
        draw_frame(&mut surface, state, "GAME OVER", 0.0);
        surface
    }

    #[test]
    fn test_brick_color_cycle() {
        // sin(0) = 0 -> shift 128
        assert_eq!(brick_color(0.0), Color::rgb(128, 127, 70));
        // Peak of the sine clamps to 255
        let peak = COLOR_CYCLE_DIVISOR_MS * std::f64::consts::FRAC_PI_2;
        assert_eq!(brick_color(peak), Color::rgb(255, 0, 70));
        // Trough
        assert_eq!(brick_color(peak * 3.0), Color::rgb(0, 255, 70));
    }

    #[test]
    fn test_draw_order() {
        let config = GameConfig {
            brick_rows: 1,
            brick_cols: 2,
            lives: 3,
            ..Default::default()
        };
        let state = GameState::new(&config, Arena::new(480.0, 320.0));
        let surface = render(&state);
        let cmds = surface.commands();

        // background, 2 bricks, ball, paddle, score, 3 lives
        assert_eq!(cmds.len(), 9);
        assert!(matches!(cmds[0], DrawCommand::Gradient { .. }));
        assert!(matches!(cmds[1], DrawCommand::Rect { rect, .. } if rect == Rect::new(30.0, 30.0, 60.0, 20.0)));
        assert!(matches!(cmds[2], DrawCommand::Rect { rect, .. } if rect == Rect::new(100.0, 30.0, 60.0, 20.0)));
        assert!(matches!(cmds[3], DrawCommand::Circle { radius, .. } if radius == 16.0));
        assert!(matches!(cmds[4], DrawCommand::Rect { rect, .. } if rect == Rect::new(202.5, 310.0, 75.0, 10.0)));
        assert!(matches!(&cmds[5], DrawCommand::Text { text, .. } if text == "Score: 0"));
        assert!(matches!(cmds[6], DrawCommand::Circle { center, .. } if center == Vec2::new(465.0, 20.0)));
        assert!(matches!(cmds[8], DrawCommand::Circle { center, .. } if center == Vec2::new(435.0, 20.0)));
    }

    #[test]
    fn test_broken_bricks_not_drawn() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, Arena::new(900.0, 600.0));
        state.bricks.mark_broken(0, 0);
        state.bricks.mark_broken(5, 11);
        let surface = render(&state);
        let bricks = surface
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { paint, .. } if paint.color != colors::PADDLE))
            .count();
        assert_eq!(bricks, 70);
    }

    #[test]
    fn test_lost_draws_only_message() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, Arena::new(480.0, 320.0));
        state.phase = GamePhase::Lost;
        let surface = render(&state);
        assert_eq!(
            surface.commands(),
            &[DrawCommand::Text {
                text: "GAME OVER".to_string(),
                pos: Vec2::new(120.0, 160.0),
                font: DEFEAT_FONT,
                color: colors::DEFEAT,
            }]
        );
    }

    #[test]
    fn test_won_draws_nothing() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, Arena::new(480.0, 320.0));
        state.phase = GamePhase::Won;
        assert!(render(&state).commands().is_empty());
    }
}
