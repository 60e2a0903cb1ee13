//! Particle construction with kind-specific randomized parameters.

use std::f32::consts::TAU;

use glam::Vec2;

use super::color::Hsl;
use super::particle::{Particle, ParticleKind, ParticleShape};
use super::rng::RandomSource;

/// Hands out monotonic particle ids and builds bursts.
#[derive(Debug, Clone, Default)]
pub struct ParticleFactory {
    next_id: u64,
}

impl ParticleFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Burst size used when the caller doesn't ask for a specific count.
    pub fn default_count(kind: ParticleKind) -> usize {
        match kind {
            ParticleKind::Sparkle | ParticleKind::Trail => 1,
            ParticleKind::Pop => 6,
            ParticleKind::Confetti => 20,
        }
    }

    /// Build `count` particles of `kind` at `position`.
    pub fn spawn(
        &mut self,
        kind: ParticleKind,
        position: Vec2,
        count: Option<usize>,
        rng: &mut dyn RandomSource,
    ) -> Vec<Particle> {
        let count = count.unwrap_or_else(|| Self::default_count(kind));
        (0..count)
            .map(|i| {
                let id = self.next_id;
                self.next_id += 1;
                match kind {
                    ParticleKind::Sparkle => sparkle(id, position, rng),
                    ParticleKind::Trail => trail(id, position, rng),
                    ParticleKind::Pop => pop(id, position, i, count, rng),
                    ParticleKind::Confetti => confetti(id, position, i, rng),
                }
            })
            .collect()
    }

    /// Id the next particle will receive.
    pub fn peek_id(&self) -> u64 {
        self.next_id
    }
}

fn sparkle(id: u64, position: Vec2, rng: &mut dyn RandomSource) -> Particle {
    let velocity = Vec2::new(rng.signed(1.0), rng.signed(1.0));
    let size = rng.range(2.0, 6.0);
    let decay = rng.range(0.02, 0.04);
    let color = Hsl::new(rng.range(40.0, 100.0), 100.0, 60.0);
    Particle::new(id, ParticleKind::Sparkle, position, velocity, size, color, decay)
}

fn trail(id: u64, position: Vec2, rng: &mut dyn RandomSource) -> Particle {
    let velocity = Vec2::new(rng.signed(0.5), rng.signed(0.5));
    let size = rng.range(3.0, 5.0);
    let decay = rng.range(0.05, 0.08);
    let color = Hsl::new(rng.range(180.0, 240.0), 80.0, 70.0);
    Particle::new(id, ParticleKind::Trail, position, velocity, size, color, decay)
}

fn pop(id: u64, position: Vec2, index: usize, count: usize, rng: &mut dyn RandomSource) -> Particle {
    let angle = index as f32 / count.max(1) as f32 * TAU;
    let speed = rng.range(2.0, 4.0);
    let velocity = Vec2::new(angle.cos(), angle.sin()) * speed;
    let size = rng.range(3.0, 7.0);
    let color = Hsl::new(rng.range(0.0, 60.0), 100.0, 55.0);
    let mut p = Particle::new(id, ParticleKind::Pop, position, velocity, size, color, 0.03);
    p.bounce = Some(0.6);
    p
}

fn confetti(id: u64, position: Vec2, index: usize, rng: &mut dyn RandomSource) -> Particle {
    let velocity = Vec2::new(rng.signed(4.0), rng.range(-8.0, -2.0));
    let size = rng.range(6.0, 10.0);
    let decay = rng.range(0.01, 0.015);
    let color = Hsl::new(rng.range(0.0, 360.0), 90.0, 60.0);
    let mut p = Particle::new(id, ParticleKind::Confetti, position, velocity, size, color, decay);
    p.rotation = rng.range(0.0, 360.0);
    p.rotation_speed = Some(rng.signed(10.0));
    p.gravity = Some(0.15);
    p.shape = if index % 2 == 0 { ParticleShape::Rect } else { ParticleShape::Circle };
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::effects::rng::{Rng, SequenceRng};

    #[test]
    fn ids_are_monotonic_across_bursts() {
        let mut factory = ParticleFactory::new();
        let mut rng = Rng::new(1);
        let a = factory.spawn(ParticleKind::Pop, Vec2::ZERO, None, &mut rng);
        let b = factory.spawn(ParticleKind::Sparkle, Vec2::ZERO, Some(3), &mut rng);
        let ids: Vec<u64> = a.iter().chain(b.iter()).map(|p| p.id).collect();
        assert_eq!(ids, (0..9).collect::<Vec<u64>>());
    }

    #[test]
    fn sparkle_parameters_follow_random_source() {
        let mut factory = ParticleFactory::new();
        let mut rng = SequenceRng::constant(0.5);
        let p = &factory.spawn(ParticleKind::Sparkle, Vec2::new(5.0, 6.0), None, &mut rng)[0];
        assert_eq!(p.position, Vec2::new(5.0, 6.0));
        assert_eq!(p.velocity, Vec2::ZERO);
        assert_eq!(p.size, 4.0);
        assert!((p.decay - 0.03).abs() < 1e-6);
        assert_eq!(p.color.hue, 70.0);
        assert_eq!(p.life, 1.0);
    }

    #[test]
    fn pops_fan_out_radially() {
        let mut factory = ParticleFactory::new();
        let mut rng = SequenceRng::constant(0.0);
        let pops = factory.spawn(ParticleKind::Pop, Vec2::ZERO, Some(4), &mut rng);
        assert_eq!(pops.len(), 4);
        assert!((pops[0].velocity - Vec2::new(2.0, 0.0)).length() < 1e-5);
        assert!((pops[1].velocity - Vec2::new(0.0, 2.0)).length() < 1e-5);
        assert!(pops.iter().all(|p| p.bounce == Some(0.6)));
    }

    #[test]
    fn confetti_is_upward_and_alternates_shape() {
        let mut factory = ParticleFactory::new();
        let mut rng = Rng::new(99);
        let burst = factory.spawn(ParticleKind::Confetti, Vec2::ZERO, None, &mut rng);
        assert_eq!(burst.len(), 20);
        for (i, p) in burst.iter().enumerate() {
            assert!(p.velocity.y < 0.0, "confetti should launch upward");
            assert_eq!(p.gravity, Some(0.15));
            assert!(p.rotation_speed.is_some());
            let expected = if i % 2 == 0 { ParticleShape::Rect } else { ParticleShape::Circle };
            assert_eq!(p.shape, expected);
        }
    }
}
