//! Per-frame simulation step
//!
//! Advances the table by one tick. Paddles and the ball move a fixed amount
//! per call; only particle ageing uses the real elapsed time.

use super::ai::track_ball;
use super::collision;
use super::state::{GameState, Paddle};
use crate::palette;

/// Held-key state for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
}

/// Move the player paddle, clamping to the playfield
pub fn move_player(paddle: &mut Paddle, input: &TickInput) {
    let step = paddle.speed as f32;
    let max_y = paddle.max_y();

    if input.up && paddle.pos.y > 0.0 {
        paddle.pos.y = (paddle.pos.y - step).max(0.0);
    }
    if input.down && paddle.pos.y < max_y {
        paddle.pos.y = (paddle.pos.y + step).min(max_y);
    }
}

/// Advance the game state by one frame.
///
/// `dt` is the elapsed wall-clock time in seconds (particles only) and
/// `now_ms` timestamps any streak callout raised this frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, now_ms: u64) {
    move_player(&mut state.player, input);
    track_ball(&mut state.ai, state.ball.pos.y);

    state.ball.advance();

    state.particles.emit(state.ball.pos, palette::FIRE, &mut state.rng);
    state.particles.update(dt);

    collision::resolve(state, now_ms);

    state.time_ticks += 1;
}
