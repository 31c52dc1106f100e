//! Opponent paddle policy
//!
//! Reactive tracking: chase the ball's current height at a fixed speed. No
//! prediction, and the move is not re-clamped, so the paddle can overshoot an
//! edge by less than one step.

use super::state::Paddle;

/// Move `paddle` one step toward `ball_y`
pub fn track_ball(paddle: &mut Paddle, ball_y: f32) {
    let center = paddle.center_y();
    let step = paddle.speed as f32;

    if center < ball_y && paddle.pos.y < paddle.max_y() {
        paddle.pos.y += step;
    } else if center > ball_y && paddle.pos.y > 0.0 {
        paddle.pos.y -= step;
    }
}
