use glam::Vec2;

use crate::api::config::FaceConfig;
use crate::api::types::SoundEvent;
use crate::core::element::{ElementKind, FaceElements};
use crate::core::modes::PhysicsModes;
use crate::core::timer::{ResetTimers, TimerHandle};
use crate::systems::effects::{EffectsState, ParticleKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ElementKind),
}

/// Outcome of a pointer move while dragging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    pub element: ElementKind,
    /// Offset written onto the element, magnitude at most `max_distance`.
    pub offset: Vec2,
    /// Unclamped distance over `max_distance`; above 1 means the clamp engaged.
    pub stretch_ratio: f32,
}

/// Outcome of letting go of an element.
#[derive(Debug)]
pub struct Release {
    pub element: ElementKind,
    pub distance: f32,
    pub confetti: bool,
    pub reset: Option<TimerHandle>,
}

/// Clamp `raw` radially to `max_distance`. Returns the clamped offset and the
/// stretch ratio of the raw input.
pub fn clamp_drag(raw: Vec2, max_distance: f32) -> (Vec2, f32) {
    let distance = raw.length();
    let ratio = distance / max_distance;
    if distance > max_distance {
        (raw * (max_distance / distance), ratio)
    } else {
        (raw, ratio)
    }
}

/// Idle / dragging state machine turning pointer input into element offsets.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn target(&self) -> Option<ElementKind> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(kind) => Some(kind),
        }
    }

    /// Grab `element`. Ignored while another drag is in progress.
    pub fn pointer_down(&mut self, element: ElementKind, elements: &mut FaceElements, timers: &mut ResetTimers) -> bool {
        if let DragState::Dragging(current) = self.state {
            log::debug!("pointer down on {} ignored, already dragging {}", element.name(), current.name());
            return false;
        }
        self.state = DragState::Dragging(element);
        timers.cancel_for(element);
        let state = elements.get_mut(element);
        state.velocity = Vec2::ZERO;
        state.animating = false;
        // A push left over from the previous drag would render past max_distance
        state.chain_offset = Vec2::ZERO;
        log::debug!("drag begin: {}", element.name());
        true
    }

    /// Move the grabbed element toward `pointer` (canvas coordinates).
    pub fn pointer_move(
        &mut self,
        pointer: Vec2,
        elements: &mut FaceElements,
        config: &FaceConfig,
        effects: &mut EffectsState,
    ) -> Option<DragSample> {
        let element = self.target()?;
        let centre = Vec2::splat(config.canvas.size / 2.0);
        let (offset, stretch_ratio) = clamp_drag(pointer - centre, config.drag.max_distance);

        let state = elements.get_mut(element);
        state.offset = offset;
        state.animating = false;
        let at = state.canvas_position();

        effects.maybe_spawn(ParticleKind::Sparkle, at, config.drag.sparkle_chance);
        effects.maybe_spawn(ParticleKind::Trail, at, config.drag.trail_chance);
        if stretch_ratio > config.drag.confetti_stretch_ratio {
            effects.maybe_spawn(ParticleKind::Confetti, at, config.drag.confetti_chance);
        }

        Some(DragSample { element, offset, stretch_ratio })
    }

    /// Let go. Returns `None` when nothing was being dragged.
    #[allow(clippy::too_many_arguments)]
    pub fn pointer_up(
        &mut self,
        elements: &mut FaceElements,
        modes: &PhysicsModes,
        config: &FaceConfig,
        timers: &mut ResetTimers,
        now_ms: f64,
        effects: &mut EffectsState,
        sounds: &mut Vec<SoundEvent>,
    ) -> Option<Release> {
        let element = self.target()?;
        self.state = DragState::Idle;
        sounds.push(SoundEvent::Boing);

        let state = elements.get_mut(element);
        let distance = state.offset.length();
        let at = state.canvas_position();
        let mut reset = None;

        if modes.bounce {
            state.velocity = state.offset * config.drag.release_velocity_factor;
        } else {
            state.animating = true;
            if !modes.gravity {
                let due = now_ms + config.drag.reset_delay_ms;
                reset = Some(timers.schedule(element, due));
            }
        }

        let confetti = distance > config.drag.release_confetti_distance;
        if confetti {
            effects.spawn(ParticleKind::Confetti, at, Some(config.drag.release_confetti_count));
        }

        log::debug!("drag release: {} at distance {:.1}", element.name(), distance);
        Some(Release { element, distance, confetti, reset })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::effects::{RandomSource, Rng, SequenceRng};

    struct Fixture {
        drag: DragController,
        elements: FaceElements,
        timers: ResetTimers,
        config: FaceConfig,
        effects: EffectsState,
        sounds: Vec<SoundEvent>,
    }

    impl Fixture {
        fn new() -> Self {
            let config = FaceConfig::default();
            let effects = EffectsState::new(11, config.canvas.size, config.particles.max_live);
            Self {
                drag: DragController::new(),
                elements: FaceElements::new(),
                timers: ResetTimers::new(),
                config,
                effects,
                sounds: Vec::new(),
            }
        }

        fn release(&mut self, modes: PhysicsModes) -> Option<Release> {
            self.drag.pointer_up(
                &mut self.elements,
                &modes,
                &self.config,
                &mut self.timers,
                1_000.0,
                &mut self.effects,
                &mut self.sounds,
            )
        }
    }

    #[test]
    fn clamp_keeps_short_drags() {
        let (offset, ratio) = clamp_drag(Vec2::new(30.0, 40.0), 150.0);
        assert_eq!(offset, Vec2::new(30.0, 40.0));
        assert!((ratio - 50.0 / 150.0).abs() < 1e-6);
    }

    #[test]
    fn clamp_scales_long_drags_radially() {
        let (offset, ratio) = clamp_drag(Vec2::new(300.0, 400.0), 150.0);
        assert!((offset.length() - 150.0).abs() < 1e-3);
        assert!((offset.normalize() - Vec2::new(0.6, 0.8)).length() < 1e-5);
        assert!((ratio - 500.0 / 150.0).abs() < 1e-4);
    }

    #[test]
    fn offset_never_exceeds_max_while_dragging() {
        let mut f = Fixture::new();
        let mut rng = Rng::new(1234);
        assert!(f.drag.pointer_down(ElementKind::Mouth, &mut f.elements, &mut f.timers));
        for _ in 0..2_000 {
            let pointer = Vec2::new(rng.range(-2_000.0, 2_000.0), rng.range(-2_000.0, 2_000.0));
            f.drag.pointer_move(pointer, &mut f.elements, &f.config, &mut f.effects);
            let len = f.elements.get(ElementKind::Mouth).offset.length();
            assert!(len <= f.config.drag.max_distance + 1e-3, "offset {} exceeded max", len);
        }
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut f = Fixture::new();
        assert!(f.drag.pointer_move(Vec2::new(300.0, 300.0), &mut f.elements, &f.config, &mut f.effects).is_none());
        assert!(f.elements.iter().all(|s| s.offset == Vec2::ZERO));
    }

    #[test]
    fn pointer_down_zeroes_velocity_and_cancels_reset() {
        let mut f = Fixture::new();
        f.elements.get_mut(ElementKind::Nose).velocity = Vec2::new(5.0, 5.0);
        f.timers.schedule(ElementKind::Nose, 50.0);
        f.drag.pointer_down(ElementKind::Nose, &mut f.elements, &mut f.timers);
        assert_eq!(f.elements.get(ElementKind::Nose).velocity, Vec2::ZERO);
        assert!(!f.timers.is_pending(ElementKind::Nose));
        assert_eq!(f.drag.state(), DragState::Dragging(ElementKind::Nose));
    }

    #[test]
    fn second_pointer_down_is_ignored() {
        let mut f = Fixture::new();
        f.drag.pointer_down(ElementKind::Nose, &mut f.elements, &mut f.timers);
        assert!(!f.drag.pointer_down(ElementKind::Face, &mut f.elements, &mut f.timers));
        assert_eq!(f.drag.target(), Some(ElementKind::Nose));
    }

    #[test]
    fn near_max_stretch_can_spawn_confetti() {
        let mut f = Fixture::new();
        f.effects = EffectsState::with_source(Box::new(SequenceRng::constant(0.0)), 400.0, 1000);
        f.drag.pointer_down(ElementKind::Face, &mut f.elements, &mut f.timers);
        f.drag.pointer_move(Vec2::new(390.0, 200.0), &mut f.elements, &f.config, &mut f.effects);
        let kinds: Vec<ParticleKind> = f.effects.particles.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![ParticleKind::Sparkle, ParticleKind::Trail, ParticleKind::Confetti]);

        f.effects.clear();
        f.drag.pointer_move(Vec2::new(250.0, 200.0), &mut f.elements, &f.config, &mut f.effects);
        assert!(f.effects.particles.iter().all(|p| p.kind != ParticleKind::Confetti));
    }

    #[test]
    fn plain_release_schedules_reset() {
        let mut f = Fixture::new();
        f.drag.pointer_down(ElementKind::LeftEye, &mut f.elements, &mut f.timers);
        f.drag.pointer_move(Vec2::new(250.0, 200.0), &mut f.elements, &f.config, &mut f.effects);
        let release = f.release(PhysicsModes::default()).unwrap();

        assert!(release.reset.is_some());
        assert!(f.elements.get(ElementKind::LeftEye).animating);
        assert_eq!(f.sounds, vec![SoundEvent::Boing]);
        assert_eq!(f.timers.due(1_099.0), Vec::<ElementKind>::new());
        assert_eq!(f.timers.due(1_100.0), vec![ElementKind::LeftEye]);
        assert_eq!(f.drag.state(), DragState::Idle);
    }

    #[test]
    fn bounce_release_carries_velocity() {
        let mut f = Fixture::new();
        f.drag.pointer_down(ElementKind::Nose, &mut f.elements, &mut f.timers);
        f.drag.pointer_move(Vec2::new(280.0, 140.0), &mut f.elements, &f.config, &mut f.effects);
        let release = f.release(PhysicsModes { bounce: true, ..Default::default() }).unwrap();

        assert!(release.reset.is_none());
        let nose = f.elements.get(ElementKind::Nose);
        assert!((nose.velocity - Vec2::new(8.0, -6.0)).length() < 1e-5);
        assert!(!nose.animating);
    }

    #[test]
    fn gravity_release_animates_without_reset() {
        let mut f = Fixture::new();
        f.drag.pointer_down(ElementKind::Mouth, &mut f.elements, &mut f.timers);
        let release = f.release(PhysicsModes { gravity: true, ..Default::default() }).unwrap();
        assert!(release.reset.is_none());
        assert!(f.elements.get(ElementKind::Mouth).animating);
    }

    #[test]
    fn jiggle_release_still_animates_and_resets() {
        let mut f = Fixture::new();
        f.drag.pointer_down(ElementKind::Mouth, &mut f.elements, &mut f.timers);
        f.drag.pointer_move(Vec2::new(260.0, 260.0), &mut f.elements, &f.config, &mut f.effects);
        let release = f.release(PhysicsModes { jiggle: true, ..Default::default() }).unwrap();

        assert!(release.reset.is_some());
        assert!(f.elements.get(ElementKind::Mouth).animating);
        assert!(f.timers.is_pending(ElementKind::Mouth));
    }

    #[test]
    fn pointer_down_drops_stale_chain_offset() {
        let mut f = Fixture::new();
        f.elements.get_mut(ElementKind::LeftCheek).chain_offset = Vec2::new(-13.0, 5.0);
        f.drag.pointer_down(ElementKind::LeftCheek, &mut f.elements, &mut f.timers);
        f.drag.pointer_move(Vec2::new(50.0, 200.0), &mut f.elements, &f.config, &mut f.effects);

        let cheek = f.elements.get(ElementKind::LeftCheek);
        assert_eq!(cheek.chain_offset, Vec2::ZERO);
        assert!(cheek.rendered_offset().length() <= f.config.drag.max_distance + 1e-3);
    }

    #[test]
    fn long_stretch_release_spawns_confetti() {
        let mut f = Fixture::new();
        f.drag.pointer_down(ElementKind::RightCheek, &mut f.elements, &mut f.timers);
        f.drag.pointer_move(Vec2::new(200.0, 330.0), &mut f.elements, &f.config, &mut f.effects);
        f.effects.clear();
        let release = f.release(PhysicsModes::default()).unwrap();

        assert!(release.confetti);
        assert_eq!(f.effects.len(), f.config.drag.release_confetti_count);
        assert!(f.effects.particles.iter().all(|p| p.kind == ParticleKind::Confetti));
    }

    #[test]
    fn release_while_idle_is_noop() {
        let mut f = Fixture::new();
        assert!(f.release(PhysicsModes::default()).is_none());
        assert!(f.sounds.is_empty());
    }
}
