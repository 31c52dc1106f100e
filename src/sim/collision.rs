//! Collision detection and scoring
//!
//! Wall bounce, both paddle tests and the goal test are independent checks:
//! every one of them runs each frame regardless of what the others found.

use super::state::{Ball, GameEvent, GameState, Paddle, Side};
use super::streak::streak_message;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Ball touches or crosses the top or bottom wall
pub fn ball_hits_wall(ball: &Ball, height: f32) -> bool {
    ball.top() <= 0.0 || ball.bottom() >= height
}

/// Box-vs-box test between the paddle and the ball's bounding square
pub fn ball_overlaps_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.left() <= paddle.right()
        && ball.right() >= paddle.left()
        && ball.bottom() >= paddle.top()
        && ball.top() <= paddle.bottom()
}

/// Which side scores, if the ball has left the table
pub fn goal_scored(ball: &Ball, width: f32) -> Option<Side> {
    if ball.left() < 0.0 {
        Some(Side::Ai)
    } else if ball.right() > width {
        Some(Side::Player)
    } else {
        None
    }
}

/// Send the ball away from the paddle that hit it. Only the sign of the
/// horizontal velocity changes.
pub fn deflect(ball: &mut Ball, hit_by: Side) {
    ball.vel.x = match hit_by {
        Side::Player => ball.vel.x.abs(),
        Side::Ai => -ball.vel.x.abs(),
    };
}

/// Credit a point to `side`, raise a streak callout if earned, and re-serve
/// from the centre
pub fn award_point(state: &mut GameState, side: Side, now_ms: u64) {
    let streak = state.score.record(side);
    state.events.push(GameEvent::Scored {
        side,
        score: state.score.score(side),
        streak,
    });

    let message = streak_message(streak);
    if state.streak.announce(message, now_ms) {
        state.events.push(GameEvent::Streak { side, message });
    }

    state.ball.reset(&mut state.rng);
}

/// Run every collision and scoring check for this frame
pub fn resolve(state: &mut GameState, now_ms: u64) {
    if ball_hits_wall(&state.ball, SCREEN_HEIGHT as f32) {
        state.ball.vel.y = -state.ball.vel.y;
        state.events.push(GameEvent::WallBounce);
    }

    if ball_overlaps_paddle(&state.ball, &state.player) {
        deflect(&mut state.ball, Side::Player);
        state.events.push(GameEvent::PaddleHit { side: Side::Player });
    }

    if ball_overlaps_paddle(&state.ball, &state.ai) {
        deflect(&mut state.ball, Side::Ai);
        state.events.push(GameEvent::PaddleHit { side: Side::Ai });
    }

    if let Some(side) = goal_scored(&state.ball, SCREEN_WIDTH as f32) {
        award_point(state, side, now_ms);
    }
}
