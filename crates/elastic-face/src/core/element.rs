use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One draggable part of the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    LeftEye,
    RightEye,
    Nose,
    Mouth,
    LeftCheek,
    RightCheek,
    Face,
}

impl ElementKind {
    pub const COUNT: usize = 7;

    pub const ALL: [ElementKind; Self::COUNT] = [
        Self::LeftEye,
        Self::RightEye,
        Self::Nose,
        Self::Mouth,
        Self::LeftCheek,
        Self::RightCheek,
        Self::Face,
    ];

    /// Stable index into per-element arrays and the wire format.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::LeftEye => "leftEye",
            Self::RightEye => "rightEye",
            Self::Nose => "nose",
            Self::Mouth => "mouth",
            Self::LeftCheek => "leftCheek",
            Self::RightCheek => "rightCheek",
            Self::Face => "face",
        }
    }

    /// Rest position in canvas coordinates (400x400 view box, y down).
    /// This is the only table of rest positions; everything else reads it.
    pub fn rest_position(self) -> Vec2 {
        match self {
            Self::LeftEye => Vec2::new(170.0, 170.0),
            Self::RightEye => Vec2::new(230.0, 170.0),
            Self::Nose => Vec2::new(200.0, 200.0),
            Self::Mouth => Vec2::new(200.0, 250.0),
            Self::LeftCheek => Vec2::new(150.0, 220.0),
            Self::RightCheek => Vec2::new(250.0, 220.0),
            Self::Face => Vec2::new(200.0, 200.0),
        }
    }
}

/// Mutable per-element simulation state.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementState {
    pub kind: ElementKind,
    /// Displacement from rest owned by drag and the free integrators.
    pub offset: Vec2,
    pub velocity: Vec2,
    pub jiggle_phase: f32,
    /// Easing back to rest after a release; the host animates this.
    pub animating: bool,
    pub last_update_ms: Option<f64>,
    /// Non-uniform scale; only the face outline ever leaves (1, 1).
    pub scale: Vec2,
    /// Displacement induced by a neighbour's drag, recomputed every tick.
    pub chain_offset: Vec2,
}

impl ElementState {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            offset: Vec2::ZERO,
            velocity: Vec2::ZERO,
            jiggle_phase: 0.0,
            animating: false,
            last_update_ms: None,
            scale: Vec2::ONE,
            chain_offset: Vec2::ZERO,
        }
    }

    /// Offset the host should draw.
    pub fn rendered_offset(&self) -> Vec2 {
        self.offset + self.chain_offset
    }

    /// Where the element currently sits on the canvas.
    pub fn canvas_position(&self) -> Vec2 {
        self.kind.rest_position() + self.rendered_offset()
    }

    /// Snap back to rest, as the delayed release reset does.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.velocity = Vec2::ZERO;
        self.scale = Vec2::ONE;
        self.chain_offset = Vec2::ZERO;
        self.animating = false;
    }
}

/// The seven face parts, created once and alive for the whole session.
#[derive(Debug, Clone)]
pub struct FaceElements {
    states: [ElementState; ElementKind::COUNT],
}

impl FaceElements {
    pub fn new() -> Self {
        Self {
            states: ElementKind::ALL.map(ElementState::new),
        }
    }

    pub fn get(&self, kind: ElementKind) -> &ElementState {
        &self.states[kind.index()]
    }

    pub fn get_mut(&mut self, kind: ElementKind) -> &mut ElementState {
        &mut self.states[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementState> {
        self.states.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ElementState> {
        self.states.iter_mut()
    }
}

impl Default for FaceElements {
    fn default() -> Self {
        Self::new()
    }
}
