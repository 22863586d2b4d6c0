use rand::Rng;
use ratatui::style::Color;

use crate::config::{PARTICLE_DECAY, PARTICLE_GRAVITY, PIXELS_PER_CELL};
use crate::snake::Position;

/// Recipe for a burst of particles released by a pickup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleBatch {
    pub count: usize,
    /// Maximum speed on each axis, in pixels per frame.
    pub spread: f32,
    pub palette: &'static [Color],
    pub life: f32,
}

/// One short-lived visual effect, in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub color: Color,
    pub life: f32,
}

impl Particle {
    /// Advances one frame of motion and ageing.
    fn update(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += PARTICLE_GRAVITY;
        self.life -= PARTICLE_DECAY;
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Unordered collection of live particles.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Releases `batch` from the centre of `cell`.
    pub fn emit<R: Rng + ?Sized>(&mut self, rng: &mut R, cell: Position, batch: &ParticleBatch) {
        if batch.palette.is_empty() || batch.spread <= 0.0 {
            return;
        }

        let speed = batch.spread / PIXELS_PER_CELL;
        let origin_x = cell.x as f32 + 0.5;
        let origin_y = cell.y as f32 + 0.5;

        self.particles.reserve(batch.count);
        for _ in 0..batch.count {
            let color = batch.palette[rng.gen_range(0..batch.palette.len())];
            self.particles.push(Particle {
                x: origin_x,
                y: origin_y,
                vx: rng.gen_range(-speed..=speed),
                vy: rng.gen_range(-speed..=speed),
                color,
                life: batch.life,
            });
        }
    }

    /// Steps every particle and drops the ones whose life ran out.
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}
