//! Flat frame buffers read by the JavaScript presentation layer.
//! Must stay in sync with the host's `protocol.ts`.
//!
//! Layout (all values f32 / 4 bytes unless noted):
//! ```text
//! [Elements: 7 × 6 floats]        x, y, scale_x, scale_y, animating, kind
//! [Particles: n × 10 floats]      x, y, size, rotation, r, g, b, opacity, kind, shape
//! [Sounds: m × 1 byte]            SoundEvent::id()
//! ```
//! Element order follows `ElementKind::ALL`.

use bytemuck::{Pod, Zeroable};

use crate::api::face::ElasticFace;
use crate::api::types::SoundEvent;
use crate::core::element::{ElementKind, ElementState};
use crate::systems::effects::{Particle, ParticleShape};

/// Protocol version exposed to the host.
pub const PROTOCOL_VERSION: u32 = 1;

/// Floats per element instance (fixed wire format).
pub const ELEMENT_FLOATS: usize = 6;

/// Floats per particle instance (fixed wire format).
pub const PARTICLE_FLOATS: usize = 10;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ElementInstance {
    /// Rendered offset from rest, canvas units.
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    /// 1.0 while easing back to rest.
    pub animating: f32,
    /// `ElementKind` index.
    pub kind: f32,
}

impl From<&ElementState> for ElementInstance {
    fn from(state: &ElementState) -> Self {
        let offset = state.rendered_offset();
        Self {
            x: offset.x,
            y: offset.y,
            scale_x: state.scale.x,
            scale_y: state.scale.y,
            animating: if state.animating { 1.0 } else { 0.0 },
            kind: state.kind.index() as f32,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Degrees.
    pub rotation: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub opacity: f32,
    /// `ParticleKind::id()`.
    pub kind: f32,
    /// 0 circle, 1 rect.
    pub shape: f32,
}

impl From<&Particle> for ParticleInstance {
    fn from(p: &Particle) -> Self {
        let [r, g, b] = p.color.to_rgb();
        Self {
            x: p.position.x,
            y: p.position.y,
            size: p.size,
            rotation: p.rotation,
            r,
            g,
            b,
            opacity: p.opacity(),
            kind: p.kind.id() as f32,
            shape: match p.shape {
                ParticleShape::Circle => 0.0,
                ParticleShape::Rect => 1.0,
            },
        }
    }
}

/// Reusable buffers rebuilt once per frame.
pub struct FrameBuffers {
    pub elements: [ElementInstance; ElementKind::COUNT],
    pub particles: Vec<ParticleInstance>,
    pub sounds: Vec<u8>,
}

impl FrameBuffers {
    pub fn with_capacity(max_particles: usize) -> Self {
        Self {
            elements: [ElementInstance::default(); ElementKind::COUNT],
            particles: Vec::with_capacity(max_particles),
            sounds: Vec::with_capacity(32),
        }
    }

    /// Repack from the face's current state and this frame's sounds.
    pub fn pack(&mut self, face: &ElasticFace, sounds: &[SoundEvent]) {
        for (slot, state) in self.elements.iter_mut().zip(face.elements().iter()) {
            *slot = ElementInstance::from(state);
        }
        self.particles.clear();
        self.particles.extend(face.effects().particles.iter().map(ParticleInstance::from));
        self.sounds.clear();
        self.sounds.extend(sounds.iter().map(|s| s.id()));
    }

    pub fn element_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.elements)
    }

    pub fn particle_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.particles)
    }

    /// Raw pointer to element data for direct memory reads.
    pub fn elements_ptr(&self) -> *const f32 {
        self.elements.as_ptr() as *const f32
    }

    /// Raw pointer to particle data for direct memory reads.
    pub fn particles_ptr(&self) -> *const f32 {
        self.particles.as_ptr() as *const f32
    }

    pub fn particle_count(&self) -> u32 {
        self.particles.len() as u32
    }

    pub fn sounds_ptr(&self) -> *const u8 {
        self.sounds.as_ptr()
    }

    pub fn sound_count(&self) -> u32 {
        self.sounds.len() as u32
    }
}

impl Default for FrameBuffers {
    fn default() -> Self {
        Self::with_capacity(512)
    }
}
