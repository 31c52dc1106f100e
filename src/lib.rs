//! Vector Pong - two paddles, one fireball
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, scoring, streaks, particles)
//! - `renderer`: Drawing surface abstraction and the scene painter
//! - `platform`: Input/clock abstraction and the SDL2 backend
//! - `game`: Per-frame orchestration (delta-time, ordering, pacing)
//! - `settings`: JSON-backed runtime settings

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{InitError, RenderError};
pub use game::{FrameStatus, Game};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 20;
    pub const PADDLE_HEIGHT: i32 = 100;
    /// Player paddle speed (pixels per tick)
    pub const PADDLE_SPEED: i32 = 5;
    /// Distance between a paddle and its side wall
    pub const PADDLE_MARGIN: i32 = 50;
    /// The AI paddle is this much slower than the player so it can be beaten
    pub const AI_SPEED_PENALTY: i32 = 2;

    /// Ball defaults
    pub const BALL_RADIUS: i32 = 10;
    /// Per-axis ball speed (pixels per tick). Never scaled, only sign-flipped.
    pub const BALL_SPEED: f32 = 5.0;

    /// Fireball trail
    pub const MAX_PARTICLES: usize = 500;
    /// Particle lifetime (seconds)
    pub const PARTICLE_LIFETIME: f32 = 1.0;
    /// On-screen particle disc radius (pixels)
    pub const PARTICLE_DRAW_RADIUS: i32 = 2;

    /// How long a streak callout stays on screen (ms)
    pub const STREAK_MESSAGE_DURATION_MS: u64 = 2000;

    /// Post-frame delay, roughly 60 Hz
    pub const FRAME_DELAY_MS: u32 = 16;

    /// HUD layout
    pub const SCORE_TEXT_Y: i32 = 20;
    pub const STREAK_TEXT_Y: i32 = 60;
    pub const FONT_SIZE: u16 = 24;
}

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const ORANGE_RED: Color = Color::rgb(255, 69, 0);

    /// Opaque colour
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Colours used by the scene painter and the fireball trail
pub mod palette {
    use super::Color;

    pub const BACKGROUND: Color = Color::BLACK;
    pub const PADDLE_FILL: Color = Color::GREEN;
    pub const PADDLE_OUTLINE: Color = Color::WHITE;
    pub const BALL: Color = Color::ORANGE_RED;
    pub const FIRE: Color = Color::ORANGE;
    pub const SCORE_TEXT: Color = Color::WHITE;
    pub const STREAK_TEXT: Color = Color::RED;
}
