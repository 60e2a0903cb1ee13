//! Read-only per-frame snapshot handed to the presentation layer.

use serde::Serialize;

use crate::api::face::ElasticFace;
use crate::api::types::Mood;
use crate::core::element::{ElementKind, ElementState};
use crate::core::modes::PhysicsModes;
use crate::systems::effects::{Particle, ParticleKind, ParticleShape};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementFrame {
    pub kind: ElementKind,
    pub offset: [f32; 2],
    pub scale: [f32; 2],
    pub animating: bool,
}

impl From<&ElementState> for ElementFrame {
    fn from(state: &ElementState) -> Self {
        Self {
            kind: state.kind,
            offset: state.rendered_offset().to_array(),
            scale: state.scale.to_array(),
            animating: state.animating,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleFrame {
    pub id: u64,
    pub kind: ParticleKind,
    pub shape: ParticleShape,
    pub position: [f32; 2],
    pub size: f32,
    pub color: [f32; 3],
    pub opacity: f32,
    pub rotation: f32,
}

impl From<&Particle> for ParticleFrame {
    fn from(p: &Particle) -> Self {
        Self {
            id: p.id,
            kind: p.kind,
            shape: p.shape,
            position: p.position.to_array(),
            size: p.size,
            color: p.color.to_rgb(),
            opacity: p.opacity(),
            rotation: p.rotation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceFrame {
    pub elements: Vec<ElementFrame>,
    pub particles: Vec<ParticleFrame>,
    pub mood: Mood,
    pub face_color: &'static str,
    pub cheek_color: &'static str,
    pub modes: PhysicsModes,
    pub dragging: Option<ElementKind>,
}

impl FaceFrame {
    pub fn capture(face: &ElasticFace) -> Self {
        let mood = face.mood();
        Self {
            elements: face.elements().iter().map(ElementFrame::from).collect(),
            particles: face.effects().particles.iter().map(ParticleFrame::from).collect(),
            mood,
            face_color: mood.face_color(),
            cheek_color: mood.cheek_color(),
            modes: face.modes(),
            dragging: face.dragging(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
