use serde::{Deserialize, Serialize};

/// Expression the face is currently wearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mood {
    #[default]
    Happy,
    Surprised,
    Sleepy,
    Angry,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Self::Happy, Self::Surprised, Self::Sleepy, Self::Angry];

    pub fn name(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Surprised => "surprised",
            Self::Sleepy => "sleepy",
            Self::Angry => "angry",
        }
    }

    /// Wire index used by the web bridge.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Face fill colour as `#RRGGBB`.
    pub fn face_color(self) -> &'static str {
        match self {
            Self::Happy => "#FFD93D",
            Self::Surprised => "#FFE55C",
            Self::Sleepy => "#E6D7FF",
            Self::Angry => "#FF6B6B",
        }
    }

    /// Cheek fill colour as `#RRGGBB`.
    pub fn cheek_color(self) -> &'static str {
        match self {
            Self::Happy => "#FFB347",
            Self::Surprised => "#FFCC5C",
            Self::Sleepy => "#D4C4FF",
            Self::Angry => "#FF4757",
        }
    }

    /// The short sweep played when this mood is picked.
    pub fn tone(self) -> ToneSpec {
        match self {
            Self::Happy => ToneSpec::sweep(200.0, 400.0, 0.3),
            Self::Surprised => ToneSpec::sweep(150.0, 600.0, 0.2),
            Self::Sleepy => ToneSpec::sweep(100.0, 80.0, 0.5),
            Self::Angry => ToneSpec::sweep(60.0, 40.0, 0.4),
        }
    }
}

/// Exponential frequency sweep with an exponential gain fade.
/// The host synthesizes it; the core only describes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToneSpec {
    pub start_hz: f32,
    pub end_hz: f32,
    pub duration_s: f32,
    pub gain: f32,
}

impl ToneSpec {
    pub const fn sweep(start_hz: f32, end_hz: f32, duration_s: f32) -> Self {
        Self { start_hz, end_hz, duration_s, gain: 0.3 }
    }
}

/// A sound emitted by the simulation during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SoundEvent {
    /// Released drag.
    Boing,
    /// Element hit a wall in bounce mode.
    Pop,
    Mood(Mood),
}

impl SoundEvent {
    /// Numeric id for the flat sound buffer: 0 boing, 1 pop, 10 + mood index.
    pub fn id(self) -> u8 {
        match self {
            Self::Boing => 0,
            Self::Pop => 1,
            Self::Mood(mood) => 10 + mood as u8,
        }
    }

    pub fn tone(self) -> ToneSpec {
        match self {
            Self::Boing => ToneSpec::sweep(80.0, 40.0, 0.3),
            Self::Pop => ToneSpec { start_hz: 600.0, end_hz: 300.0, duration_s: 0.08, gain: 0.15 },
            Self::Mood(mood) => mood.tone(),
        }
    }
}
