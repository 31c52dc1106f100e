//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only
//! - Time comes in as arguments, never read from a clock
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod particles;
pub mod state;
pub mod streak;
pub mod tick;

pub use ai::track_ball;
pub use collision::{award_point, ball_hits_wall, ball_overlaps_paddle, deflect, goal_scored, resolve};
pub use particles::{Particle, ParticleEmitter};
pub use state::{Ball, GameEvent, GameState, Paddle, Scoreboard, Side};
pub use streak::{StreakDisplay, streak_message};
pub use tick::{TickInput, move_player, tick};
