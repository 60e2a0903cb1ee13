pub mod api;
pub mod bridge;
pub mod core;
pub mod input;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{ConfigError, FaceConfig};
pub use api::face::ElasticFace;
pub use api::types::{Mood, SoundEvent, ToneSpec};
pub use bridge::frame::{ElementFrame, FaceFrame, ParticleFrame};
pub use bridge::protocol::{ElementInstance, FrameBuffers, ParticleInstance, PROTOCOL_VERSION};
pub use crate::core::element::{ElementKind, ElementState, FaceElements};
pub use crate::core::modes::{PhysicsMode, PhysicsModes};
pub use crate::core::time::TimeScale;
pub use crate::core::timer::{ResetTimers, TimerHandle};
pub use input::drag::{DragController, DragState};
pub use input::queue::{InputEvent, InputQueue};
pub use systems::effects::{
    EffectsState, Hsl, Particle, ParticleFactory, ParticleKind, ParticleShape,
    RandomSource, Rng, SequenceRng,
};
