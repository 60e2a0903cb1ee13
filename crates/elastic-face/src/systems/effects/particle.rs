//! Decorative particles: sparkles, pops, trails and confetti.

use glam::Vec2;
use serde::Serialize;

use super::color::Hsl;

/// What spawned the particle; decides its randomized parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParticleKind {
    Sparkle,
    Pop,
    Trail,
    Confetti,
}

impl ParticleKind {
    pub const ALL: [ParticleKind; 4] = [Self::Sparkle, Self::Pop, Self::Trail, Self::Confetti];

    /// Wire id used in the particle frame buffer.
    pub fn id(self) -> u32 {
        match self {
            Self::Sparkle => 0,
            Self::Pop => 1,
            Self::Trail => 2,
            Self::Confetti => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParticleShape {
    #[default]
    Circle,
    Rect,
}

/// A single particle with kinematics, look and remaining life.
#[derive(Debug, Clone)]
pub struct Particle {
    pub id: u64,
    pub kind: ParticleKind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub color: Hsl,
    pub shape: ParticleShape,
    /// Rotation in degrees.
    pub rotation: f32,
    /// Degrees per tick.
    pub rotation_speed: Option<f32>,
    /// Added to vertical velocity every tick.
    pub gravity: Option<f32>,
    /// Restitution against the canvas edges (pops only).
    pub bounce: Option<f32>,
    /// Remaining life in `[0, 1]`, starts at 1.
    pub life: f32,
    pub decay: f32,
}

impl Particle {
    pub fn new(id: u64, kind: ParticleKind, position: Vec2, velocity: Vec2, size: f32, color: Hsl, decay: f32) -> Self {
        Particle {
            id,
            kind,
            position,
            velocity,
            size,
            color,
            shape: ParticleShape::Circle,
            rotation: 0.0,
            rotation_speed: None,
            gravity: None,
            bounce: None,
            life: 1.0,
            decay,
        }
    }

    /// Advance one tick inside a square canvas of side `canvas_size`.
    /// Returns false once the particle is spent.
    pub fn tick(&mut self, canvas_size: f32) -> bool {
        self.position += self.velocity;
        if let Some(g) = self.gravity {
            self.velocity.y += g;
        }
        if let Some(speed) = self.rotation_speed {
            self.rotation += speed;
        }
        self.life -= self.decay;

        if self.kind == ParticleKind::Pop {
            if let Some(restitution) = self.bounce {
                reflect_axis(&mut self.position.x, &mut self.velocity.x, canvas_size, restitution);
                reflect_axis(&mut self.position.y, &mut self.velocity.y, canvas_size, restitution);
            }
        }

        self.life > 0.0
    }

    /// Opacity derived from remaining life.
    pub fn opacity(&self) -> f32 {
        self.life.clamp(0.0, 1.0)
    }
}

fn reflect_axis(pos: &mut f32, vel: &mut f32, max: f32, restitution: f32) {
    if *pos < 0.0 {
        *pos = 0.0;
        *vel = -*vel * restitution;
    } else if *pos > max {
        *pos = max;
        *vel = -*vel * restitution;
    }
}
