//! Falling snow drawn over the glass.
//!
//! A fixed set of particles is created once and recycled forever: anything
//! that falls past the bottom edge is moved back above the top.

use crate::config::ParticleParams;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    /// Radius in px.
    pub size: f32,
    /// Downward movement per frame, px.
    pub speed: f32,
    pub opacity: f32,
    /// Horizontal drift per frame, px.
    pub wind: f32,
}

pub struct ParticleSystem {
    particles: Vec<Particle>,
    params: ParticleParams,
    rng: StdRng,
}

#[inline]
fn sample(rng: &mut StdRng, (lo, hi): (f32, f32)) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

impl ParticleSystem {
    pub fn new(params: ParticleParams) -> Self {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(params, rng)
    }

    pub fn seeded(params: ParticleParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    fn with_rng(params: ParticleParams, mut rng: StdRng) -> Self {
        let [w, h] = params.reference_extent;
        let particles = (0..params.count)
            .map(|_| Particle {
                x: sample(&mut rng, (0.0, w)),
                y: sample(&mut rng, (0.0, h)),
                size: sample(&mut rng, params.size),
                speed: sample(&mut rng, params.speed),
                opacity: sample(&mut rng, params.opacity),
                wind: sample(&mut rng, params.wind),
            })
            .collect();
        Self {
            particles,
            params,
            rng,
        }
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

    /// Move every particle one frame and recycle those below the viewport.
    pub fn advance(&mut self, viewport: Vec2) {
        for p in &mut self.particles {
            p.y += p.speed;
            p.x += p.wind;
            if p.y > viewport.y {
                p.y = self.params.respawn_y;
                p.x = sample(&mut self.rng, (0.0, viewport.x));
            }
        }
    }
}
