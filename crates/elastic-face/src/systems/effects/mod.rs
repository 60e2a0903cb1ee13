//! Particle effects: factory, integrator and the bounded live set.
//!
//! `EffectsState` is the facade the rest of the simulation talks to. It owns
//! the random source so that every probabilistic decision in a frame draws
//! from one injectable stream.

mod color;
mod factory;
mod particle;
mod rng;

pub use color::Hsl;
pub use factory::ParticleFactory;
pub use particle::{Particle, ParticleKind, ParticleShape};
pub use rng::{RandomSource, Rng, SequenceRng};

use glam::Vec2;

/// All live particles plus the machinery to spawn and advance them.
pub struct EffectsState {
    pub particles: Vec<Particle>,
    pub rng: Box<dyn RandomSource>,
    factory: ParticleFactory,
    canvas_size: f32,
    max_live: usize,
}

impl EffectsState {
    /// Create an EffectsState with a seeded xorshift source.
    pub fn new(seed: u64, canvas_size: f32, max_live: usize) -> Self {
        Self::with_source(Box::new(Rng::new(seed.wrapping_add(7919))), canvas_size, max_live)
    }

    /// Create an EffectsState drawing from a caller-supplied random source.
    pub fn with_source(rng: Box<dyn RandomSource>, canvas_size: f32, max_live: usize) -> Self {
        EffectsState {
            particles: Vec::with_capacity(max_live.min(1024)),
            rng,
            factory: ParticleFactory::new(),
            canvas_size,
            max_live,
        }
    }

    /// Spawn a burst. `None` uses the kind's default count.
    /// Returns how many particles were added.
    pub fn spawn(&mut self, kind: ParticleKind, position: Vec2, count: Option<usize>) -> usize {
        let burst = self.factory.spawn(kind, position, count, self.rng.as_mut());
        let added = burst.len();
        self.particles.extend(burst);
        self.enforce_cap();
        added
    }

    /// Spawn a single particle of `kind` with probability `p`.
    pub fn maybe_spawn(&mut self, kind: ParticleKind, position: Vec2, p: f32) -> bool {
        if self.rng.chance(p) {
            self.spawn(kind, position, Some(1));
            true
        } else {
            false
        }
    }

    /// Advance every particle one tick and drop the spent ones.
    pub fn tick(&mut self) {
        let canvas = self.canvas_size;
        self.particles.retain_mut(|p| p.tick(canvas));
    }

    fn enforce_cap(&mut self) {
        if self.particles.len() > self.max_live {
            let excess = self.particles.len() - self.max_live;
            self.particles.drain(..excess);
            log::debug!("particle cap {} reached, evicted {} oldest", self.max_live, excess);
        }
    }

    /// Clear all particles.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn max_live(&self) -> usize {
        self.max_live
    }
}
