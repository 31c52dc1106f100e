//! Scene painter
//!
//! Layer order is fixed: background, paddles, ball, trail, score, streak.

use super::{Rect, Renderer, TextAlign};
use crate::consts::{PARTICLE_DRAW_RADIUS, SCORE_TEXT_Y, SCREEN_WIDTH, STREAK_TEXT_Y};
use crate::palette;
use crate::sim::{Ball, GameState, Paddle, ParticleEmitter};

impl ParticleEmitter {
    /// Draw every live particle as a small disc, faded by its alpha
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for p in self.particles() {
            let color = p.color.with_alpha(p.alpha as u8);
            renderer.fill_circle(p.pos.as_ivec2(), PARTICLE_DRAW_RADIUS, color);
        }
    }
}

fn paddle_rect(paddle: &Paddle) -> Rect {
    Rect::new(
        paddle.pos.x as i32,
        paddle.pos.y as i32,
        paddle.width as u32,
        paddle.height as u32,
    )
}

fn draw_paddle<R: Renderer + ?Sized>(renderer: &mut R, paddle: &Paddle) {
    let rect = paddle_rect(paddle);
    renderer.fill_rect(rect, palette::PADDLE_FILL);
    renderer.draw_rect(rect, palette::PADDLE_OUTLINE);
}

fn draw_ball<R: Renderer + ?Sized>(renderer: &mut R, ball: &Ball) {
    renderer.fill_circle(ball.pos.as_ivec2(), ball.radius, palette::BALL);
}

/// Paint one frame. `streak` is the callout to show, if any.
///
/// Text that fails to render is skipped for this frame; everything else is
/// still drawn. Does not present.
pub fn render_scene<R: Renderer + ?Sized>(renderer: &mut R, state: &GameState, streak: Option<&str>) {
    renderer.clear(palette::BACKGROUND);

    draw_paddle(renderer, &state.player);
    draw_paddle(renderer, &state.ai);
    draw_ball(renderer, &state.ball);

    state.particles.render(renderer);

    let center_x = SCREEN_WIDTH / 2;
    if let Err(e) = renderer.draw_text(
        &state.score.label(),
        palette::SCORE_TEXT,
        center_x,
        SCORE_TEXT_Y,
        TextAlign::Center,
    ) {
        log::warn!("Skipping score text: {}", e);
    }

    if let Some(message) = streak {
        if let Err(e) = renderer.draw_text(
            message,
            palette::STREAK_TEXT,
            center_x,
            STREAK_TEXT_Y,
            TextAlign::Center,
        ) {
            log::warn!("Skipping streak text: {}", e);
        }
    }
}
