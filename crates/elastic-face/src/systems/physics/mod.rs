//! Per-element integrators for the toggleable physics modes.
//!
//! Each mode is a free function over one `ElementState` so they compose in
//! a single pass; `tick_elements` runs them in order jiggle, gravity,
//! bounce, then chain reaction.

mod bounce;
mod chain;
mod gravity;
mod jiggle;

pub use bounce::bounce_step;
pub use chain::{apply_chain_reaction, clear_chain, influence};
pub use gravity::gravity_step;
pub use jiggle::jiggle_step;

use crate::api::config::FaceConfig;
use crate::api::types::SoundEvent;
use crate::core::element::{ElementKind, FaceElements};
use crate::core::modes::PhysicsModes;
use crate::core::time::TimeScale;
use crate::systems::effects::{EffectsState, ParticleKind};

/// Advance every element one frame. `dragged` is skipped by the free
/// integrators but still drives the chain reaction.
#[allow(clippy::too_many_arguments)]
pub fn tick_elements(
    elements: &mut FaceElements,
    modes: &PhysicsModes,
    dragged: Option<ElementKind>,
    config: &FaceConfig,
    time: &TimeScale,
    now_ms: f64,
    effects: &mut EffectsState,
    sounds: &mut Vec<SoundEvent>,
) {
    for state in elements.iter_mut() {
        let dt = time.delta(state.last_update_ms, now_ms);
        state.last_update_ms = Some(now_ms);
        if Some(state.kind) == dragged {
            continue;
        }

        if modes.jiggle && !state.animating {
            jiggle_step(state, &config.jiggle, dt);
        }
        if modes.gravity {
            gravity_step(state, &config.gravity, dt, !modes.bounce);
        }
        if modes.bounce {
            for hit in bounce_step(state, &config.bounce, dt) {
                effects.spawn(ParticleKind::Pop, hit, Some(config.bounce.pop_count));
                sounds.push(SoundEvent::Pop);
            }
        }
    }

    match dragged {
        Some(kind) if modes.chain_reaction => {
            for other in apply_chain_reaction(elements, kind, &config.chain) {
                let at = elements.get(other).canvas_position();
                effects.maybe_spawn(ParticleKind::Sparkle, at, config.chain.sparkle_chance);
            }
        }
        _ => clear_chain(elements),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (FaceElements, FaceConfig, TimeScale, EffectsState, Vec<SoundEvent>) {
        let config = FaceConfig::default();
        let time = TimeScale::from_config(&config.canvas);
        let effects = EffectsState::new(1, config.canvas.size, config.particles.max_live);
        (FaceElements::new(), config, time, effects, Vec::new())
    }

    #[test]
    fn dragged_element_is_left_alone() {
        let (mut elements, config, time, mut effects, mut sounds) = setup();
        let modes = PhysicsModes { gravity: true, ..Default::default() };
        elements.get_mut(ElementKind::Nose).offset = Vec2::new(10.0, 10.0);

        tick_elements(&mut elements, &modes, Some(ElementKind::Nose), &config, &time, 0.0, &mut effects, &mut sounds);

        assert_eq!(elements.get(ElementKind::Nose).offset, Vec2::new(10.0, 10.0));
        assert_eq!(elements.get(ElementKind::Nose).last_update_ms, Some(0.0));
        assert!(elements.get(ElementKind::Mouth).velocity.y > 0.0);
    }

    #[test]
    fn bounce_hit_spawns_pops_and_sound() {
        let (mut elements, config, time, mut effects, mut sounds) = setup();
        let modes = PhysicsModes { bounce: true, ..Default::default() };
        let mouth = elements.get_mut(ElementKind::Mouth);
        mouth.offset = Vec2::new(-148.0, 0.0);
        mouth.velocity = Vec2::new(-6.0, 0.0);

        tick_elements(&mut elements, &modes, None, &config, &time, 0.0, &mut effects, &mut sounds);

        let mouth = elements.get(ElementKind::Mouth);
        assert!(mouth.velocity.x > 0.0);
        assert!(mouth.velocity.x < 6.0);
        assert_eq!(effects.len(), config.bounce.pop_count);
        assert!(effects.particles.iter().all(|p| p.kind == ParticleKind::Pop));
        assert_eq!(sounds, vec![SoundEvent::Pop]);
    }

    #[test]
    fn gravity_with_bounce_integrates_once() {
        let (mut elements, config, time, mut effects, mut sounds) = setup();
        let modes = PhysicsModes { gravity: true, bounce: true, ..Default::default() };
        let nose = elements.get_mut(ElementKind::Nose);
        nose.velocity = Vec2::new(0.0, 2.0);

        tick_elements(&mut elements, &modes, None, &config, &time, 0.0, &mut effects, &mut sounds);

        // vy 2 + 0.5 gravity, applied to the offset a single time
        let nose = elements.get(ElementKind::Nose);
        assert_eq!(nose.offset.y, 2.5);
        assert_eq!(nose.velocity.y, 2.5 * config.bounce.friction);
        assert!(sounds.is_empty());
    }

    #[test]
    fn gravity_with_bounce_falls_onto_wall() {
        let (mut elements, config, time, mut effects, mut sounds) = setup();
        let modes = PhysicsModes { gravity: true, bounce: true, ..Default::default() };
        let mouth = elements.get_mut(ElementKind::Mouth);
        mouth.offset = Vec2::new(0.0, 148.0);
        mouth.velocity = Vec2::new(0.0, 4.0);

        tick_elements(&mut elements, &modes, None, &config, &time, 0.0, &mut effects, &mut sounds);

        let mouth = elements.get(ElementKind::Mouth);
        assert_eq!(mouth.offset.y, config.bounce.boundary);
        assert!(mouth.velocity.y < 0.0, "velocity should flip");
        assert!(mouth.velocity.y.abs() < 4.5, "velocity should be damped");
        let expected = -4.5 * config.bounce.wall_damping * config.bounce.friction;
        assert!((mouth.velocity.y - expected).abs() < 1e-5, "vy was {}", mouth.velocity.y);
        assert_eq!(effects.len(), config.bounce.pop_count);
        assert!(effects.particles.iter().all(|p| p.kind == ParticleKind::Pop));
        assert_eq!(sounds, vec![SoundEvent::Pop]);
    }

    #[test]
    fn modes_compose_in_one_tick() {
        let (mut elements, config, time, mut effects, mut sounds) = setup();
        let modes = PhysicsModes { jiggle: true, gravity: true, ..Default::default() };
        elements.get_mut(ElementKind::LeftEye).offset = Vec2::new(40.0, 0.0);

        tick_elements(&mut elements, &modes, None, &config, &time, 0.0, &mut effects, &mut sounds);

        let eye = elements.get(ElementKind::LeftEye);
        assert!(eye.jiggle_phase > 0.0, "jiggle should have run");
        assert!(eye.velocity.y > 0.0, "gravity should have run");
    }

    #[test]
    fn chain_offsets_clear_without_drag() {
        let (mut elements, config, time, mut effects, mut sounds) = setup();
        let modes = PhysicsModes { chain_reaction: true, ..Default::default() };
        elements.get_mut(ElementKind::Face).offset = Vec2::new(100.0, 0.0);

        tick_elements(&mut elements, &modes, Some(ElementKind::Face), &config, &time, 0.0, &mut effects, &mut sounds);
        assert!(elements.get(ElementKind::LeftCheek).chain_offset.length() > 0.0);

        tick_elements(&mut elements, &modes, None, &config, &time, 16.67, &mut effects, &mut sounds);
        assert_eq!(elements.get(ElementKind::LeftCheek).chain_offset, Vec2::ZERO);
    }
}
