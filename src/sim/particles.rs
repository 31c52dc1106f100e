//! Fireball trail particles
//!
//! Purely cosmetic. Particles age in real seconds (delta-time), unlike the
//! paddles and ball which move a fixed amount per tick.

use glam::Vec2;
use rand::Rng;

use crate::Color;
use crate::consts::PARTICLE_LIFETIME;

/// A single trail particle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Units per second
    pub vel: Vec2,
    /// 0-255, proportional to remaining lifetime
    pub alpha: f32,
    /// Seconds left
    pub lifetime: f32,
    pub color: Color,
}

/// Bounded pool of short-lived particles
#[derive(Debug, Clone)]
pub struct ParticleEmitter {
    particles: Vec<Particle>,
    capacity: usize,
}

impl ParticleEmitter {
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Spawn one particle at `pos` with a random heading and speed.
    /// Silently dropped when the pool is full.
    pub fn emit<R: Rng + ?Sized>(&mut self, pos: Vec2, color: Color, rng: &mut R) {
        if self.particles.len() >= self.capacity {
            return;
        }

        let angle = (rng.random_range(0..360) as f32).to_radians();
        // Literal trail formula: whole tenths in [5.0, 9.9]
        let speed = rng.random_range(0..50) as f32 / 10.0 + 5.0;

        self.particles.push(Particle {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            alpha: 255.0,
            lifetime: PARTICLE_LIFETIME,
            color,
        });
    }

    /// Move and age every particle, dropping the expired ones in a single
    /// compacting pass.
    pub fn update(&mut self, dt: f32) {
        self.particles.retain_mut(|p| {
            p.pos += p.vel * dt;
            p.lifetime -= dt;
            if p.lifetime <= 0.0 {
                return false;
            }
            p.alpha = (p.lifetime / PARTICLE_LIFETIME) * 255.0;
            true
        });
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
