use glam::Vec2;

use crate::api::config::JiggleConfig;
use crate::core::element::ElementState;

/// Decaying wobble back toward rest. Once the offset drops to the rest
/// threshold it snaps to zero and the phase restarts.
pub fn jiggle_step(state: &mut ElementState, cfg: &JiggleConfig, dt: f32) {
    let magnitude = state.offset.length();
    if magnitude <= cfg.rest_threshold {
        if magnitude > 0.0 {
            state.offset = Vec2::ZERO;
            state.jiggle_phase = 0.0;
        }
        return;
    }

    state.jiggle_phase += cfg.phase_step * dt;
    let phase = state.jiggle_phase;
    let wobble = Vec2::new(phase.sin(), (phase * cfg.y_phase_rate).cos()) * magnitude;
    state.offset += wobble * cfg.perturbation;
    state.offset *= cfg.damping;
}
