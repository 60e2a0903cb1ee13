use glam::Vec2;

use crate::api::config::FaceConfig;
use crate::api::types::{Mood, SoundEvent};
use crate::bridge::frame::FaceFrame;
use crate::core::element::{ElementKind, FaceElements};
use crate::core::modes::{PhysicsMode, PhysicsModes};
use crate::core::time::TimeScale;
use crate::core::timer::ResetTimers;
use crate::input::drag::{DragController, DragSample, Release};
use crate::input::queue::InputEvent;
use crate::systems::effects::{EffectsState, ParticleKind, RandomSource};
use crate::systems::physics::tick_elements;

/// The whole interactive face: seven elements, the active physics modes,
/// the drag state machine and the particle effects.
///
/// Single-threaded and frame-driven. Input handlers and [`ElasticFace::tick`]
/// run one after the other on the host's thread.
pub struct ElasticFace {
    config: FaceConfig,
    time: TimeScale,
    elements: FaceElements,
    modes: PhysicsModes,
    drag: DragController,
    timers: ResetTimers,
    effects: EffectsState,
    sounds: Vec<SoundEvent>,
    mood: Mood,
    now_ms: f64,
}

impl ElasticFace {
    pub fn new(config: FaceConfig) -> Self {
        let effects = EffectsState::new(config.seed, config.canvas.size, config.particles.max_live);
        Self::with_effects(config, effects)
    }

    /// Build a face whose particles draw from `rng` (deterministic tests, replays).
    pub fn with_random_source(config: FaceConfig, rng: Box<dyn RandomSource>) -> Self {
        let effects = EffectsState::with_source(rng, config.canvas.size, config.particles.max_live);
        Self::with_effects(config, effects)
    }

    fn with_effects(config: FaceConfig, effects: EffectsState) -> Self {
        Self {
            time: TimeScale::from_config(&config.canvas),
            config,
            elements: FaceElements::new(),
            modes: PhysicsModes::default(),
            drag: DragController::new(),
            timers: ResetTimers::new(),
            effects,
            sounds: Vec::new(),
            mood: Mood::default(),
            now_ms: 0.0,
        }
    }

    // -- Input --

    /// Dispatch one queued input event.
    pub fn apply_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { element, x, y } => {
                if self.pointer_down(element) {
                    self.pointer_move(Vec2::new(x, y));
                }
            }
            InputEvent::PointerMove { x, y } => {
                self.pointer_move(Vec2::new(x, y));
            }
            InputEvent::PointerUp => {
                self.pointer_up();
            }
            InputEvent::ToggleMode(mode) => {
                self.toggle_mode(mode);
            }
            InputEvent::SetMood(mood) => self.set_mood(mood),
        }
    }

    pub fn pointer_down(&mut self, element: ElementKind) -> bool {
        self.drag.pointer_down(element, &mut self.elements, &mut self.timers)
    }

    /// `pointer` is in canvas coordinates.
    pub fn pointer_move(&mut self, pointer: Vec2) -> Option<DragSample> {
        self.drag.pointer_move(pointer, &mut self.elements, &self.config, &mut self.effects)
    }

    pub fn pointer_up(&mut self) -> Option<Release> {
        self.drag.pointer_up(
            &mut self.elements,
            &self.modes,
            &self.config,
            &mut self.timers,
            self.now_ms,
            &mut self.effects,
            &mut self.sounds,
        )
    }

    /// Flip a physics mode. All velocities and jiggle phases restart from zero.
    pub fn toggle_mode(&mut self, mode: PhysicsMode) -> bool {
        let enabled = self.modes.toggle(mode);
        for state in self.elements.iter_mut() {
            state.velocity = Vec2::ZERO;
            state.jiggle_phase = 0.0;
        }
        let centre = Vec2::splat(self.config.canvas.size / 2.0);
        self.effects.spawn(ParticleKind::Sparkle, centre, Some(self.config.particles.toggle_burst));
        log::info!("physics mode {:?} {}", mode, if enabled { "on" } else { "off" });
        enabled
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
        self.sounds.push(SoundEvent::Mood(mood));
        let at = ElementKind::Face.rest_position();
        self.effects.spawn(ParticleKind::Sparkle, at, Some(self.config.particles.mood_burst));
        log::info!("mood: {}", mood.name());
    }

    // -- Frame --

    /// Stamp the wall clock before dispatching this frame's input, so release
    /// timers are scheduled against the current time.
    pub fn begin_frame(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }

    /// Advance one frame at wall-clock `now_ms`: fire due resets, integrate
    /// the elements, then the particles.
    pub fn tick(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
        self.tick_elements(now_ms);
        self.tick_particles();
    }

    /// Element half of the frame (resets plus physics modes).
    pub fn tick_elements(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
        for kind in self.timers.due(now_ms) {
            self.elements.get_mut(kind).reset();
        }
        tick_elements(
            &mut self.elements,
            &self.modes,
            self.drag.target(),
            &self.config,
            &self.time,
            now_ms,
            &mut self.effects,
            &mut self.sounds,
        );
    }

    /// Particle half of the frame.
    pub fn tick_particles(&mut self) {
        self.effects.tick();
    }

    /// Sounds emitted since the last call.
    pub fn take_sounds(&mut self) -> Vec<SoundEvent> {
        std::mem::take(&mut self.sounds)
    }

    pub fn pending_sounds(&self) -> &[SoundEvent] {
        &self.sounds
    }

    /// Read-only snapshot for the presentation layer.
    pub fn frame(&self) -> FaceFrame {
        FaceFrame::capture(self)
    }

    /// Teardown: cancel pending resets and drop transient state.
    pub fn shutdown(&mut self) {
        self.timers.cancel_all();
        self.effects.clear();
        self.sounds.clear();
        log::info!("elastic face shut down");
    }

    // -- Accessors --

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    pub fn elements(&self) -> &FaceElements {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut FaceElements {
        &mut self.elements
    }

    pub fn modes(&self) -> PhysicsModes {
        self.modes
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn dragging(&self) -> Option<ElementKind> {
        self.drag.target()
    }

    pub fn timers(&self) -> &ResetTimers {
        &self.timers
    }

    pub fn effects(&self) -> &EffectsState {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut EffectsState {
        &mut self.effects
    }
}

impl Default for ElasticFace {
    fn default() -> Self {
        Self::new(FaceConfig::default())
    }
}
