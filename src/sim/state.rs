//! Game state and core simulation types
//!
//! Everything the frame step mutates lives in `GameState`; nothing is global.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::particles::ParticleEmitter;
use super::streak::StreakDisplay;
use crate::consts::*;

/// Which side of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left paddle, keyboard controlled
    Player,
    /// Right paddle, driven by the tracking policy
    Ai,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Ai => "AI",
        }
    }
}

/// Something noteworthy that happened during a tick (for logging/HUD)
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Ball touched the top or bottom wall
    WallBounce,
    /// Ball overlapped a paddle and was sent toward the opponent
    PaddleHit { side: Side },
    /// A point was scored
    Scored { side: Side, score: u32, streak: u32 },
    /// A streak callout became the active message
    Streak { side: Side, message: &'static str },
}

/// A paddle. Position is the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: i32,
    pub height: i32,
    /// Pixels per tick
    pub speed: i32,
}

impl Paddle {
    /// Paddle at column `x`, vertically centred
    pub fn new(x: f32, speed: i32) -> Self {
        Self {
            pos: Vec2::new(x, SCREEN_HEIGHT as f32 / 2.0 - PADDLE_HEIGHT as f32 / 2.0),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed,
        }
    }

    /// Left paddle
    pub fn player() -> Self {
        Self::new(PADDLE_MARGIN as f32, PADDLE_SPEED)
    }

    /// Right paddle, a little slower than the player's
    pub fn ai() -> Self {
        Self::new(
            (SCREEN_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH) as f32,
            PADDLE_SPEED - AI_SPEED_PENALTY,
        )
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width as f32
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height as f32
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height as f32 / 2.0
    }

    /// Lowest legal `y` for the top edge
    pub fn max_y(&self) -> f32 {
        (SCREEN_HEIGHT - self.height) as f32
    }
}

/// The ball. Position is the centre.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub radius: i32,
}

impl Ball {
    /// Ball at the centre of the screen with a random diagonal heading
    pub fn serve<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        };
        ball.reset(rng);
        ball
    }

    /// Back to the exact centre; each axis independently +/- `BALL_SPEED`
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pos = Vec2::new(SCREEN_WIDTH as f32 / 2.0, SCREEN_HEIGHT as f32 / 2.0);
        self.vel = Vec2::new(random_sign(rng) * BALL_SPEED, random_sign(rng) * BALL_SPEED);
    }

    /// Tick-based integration, not scaled by delta-time
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius as f32
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius as f32
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius as f32
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius as f32
    }
}

fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// Cumulative scores and consecutive-point streaks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub player: u32,
    pub ai: u32,
    pub player_streak: u32,
    pub ai_streak: u32,
}

impl Scoreboard {
    /// Credit a point: scorer's score and streak go up, the other streak resets.
    /// Returns the scorer's new streak.
    pub fn record(&mut self, side: Side) -> u32 {
        match side {
            Side::Player => {
                self.player += 1;
                self.player_streak += 1;
                self.ai_streak = 0;
                self.player_streak
            }
            Side::Ai => {
                self.ai += 1;
                self.ai_streak += 1;
                self.player_streak = 0;
                self.ai_streak
            }
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }

    /// "player : ai"
    pub fn label(&self) -> String {
        format!("{} : {}", self.player, self.ai)
    }
}

/// Complete session state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Source for serve directions and particle spray
    pub rng: Pcg32,
    pub player: Paddle,
    pub ai: Paddle,
    pub ball: Ball,
    /// Fireball trail (visual only)
    pub particles: ParticleEmitter,
    pub score: Scoreboard,
    /// Active streak callout
    pub streak: StreakDisplay,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::serve(&mut rng);
        Self {
            seed,
            rng,
            player: Paddle::player(),
            ai: Paddle::ai(),
            ball,
            particles: ParticleEmitter::new(MAX_PARTICLES),
            score: Scoreboard::default(),
            streak: StreakDisplay::default(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Override the particle pool size (0 disables the trail)
    pub fn with_particle_capacity(mut self, capacity: usize) -> Self {
        self.particles = ParticleEmitter::new(capacity);
        self
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddles_start_centered() {
        let state = GameState::new(1);
        assert_eq!(state.player.pos, Vec2::new(50.0, 250.0));
        assert_eq!(state.ai.pos, Vec2::new(730.0, 250.0));
        assert_eq!(state.player.center_y(), 300.0);
        assert_eq!(state.ai.speed, 3);
        assert_eq!(state.player.speed, 5);
    }

    #[test]
    fn test_ball_serves_from_center_on_diagonal() {
        let state = GameState::new(42);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel.x.abs(), BALL_SPEED);
        assert_eq!(state.ball.vel.y.abs(), BALL_SPEED);
        assert_eq!(state.ball.radius, 10);
    }

    #[test]
    fn test_same_seed_same_serve() {
        let a = GameState::new(7);
        let b = GameState::new(7);
        assert_eq!(a.ball, b.ball);
    }

    #[test]
    fn test_reset_covers_all_four_headings() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut ball = Ball::serve(&mut rng);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            ball.pos = Vec2::new(-50.0, 12.0);
            ball.reset(&mut rng);
            assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
            seen.insert((ball.vel.x as i32, ball.vel.y as i32));
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_scoreboard_record() {
        let mut score = Scoreboard::default();
        assert_eq!(score.record(Side::Player), 1);
        assert_eq!(score.record(Side::Player), 2);
        assert_eq!(score.record(Side::Ai), 1);
        assert_eq!(score.player_streak, 0);
        assert_eq!(score.player, 2);
        assert_eq!(score.ai, 1);
        assert_eq!(score.label(), "2 : 1");
    }

    #[test]
    fn test_ball_edges() {
        let ball = Ball {
            pos: Vec2::new(5.0, 300.0),
            vel: Vec2::new(-5.0, 5.0),
            radius: 10,
        };
        assert_eq!(ball.left(), -5.0);
        assert_eq!(ball.right(), 15.0);
        assert_eq!(ball.top(), 290.0);
        assert_eq!(ball.bottom(), 310.0);
    }

    #[test]
    fn test_zero_capacity_disables_trail() {
        let state = GameState::new(1).with_particle_capacity(0);
        assert_eq!(state.particles.capacity(), 0);
    }
}
