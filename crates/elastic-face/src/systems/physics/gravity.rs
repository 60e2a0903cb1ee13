use crate::api::config::GravityConfig;
use crate::core::element::ElementState;

/// Accelerate downward up to terminal velocity. When `integrate` is false the
/// bounce integrator owns position and walls, so only velocity changes here.
pub fn gravity_step(state: &mut ElementState, cfg: &GravityConfig, dt: f32, integrate: bool) {
    state.velocity.y = (state.velocity.y + cfg.acceleration * dt).min(cfg.terminal_velocity);
    if !integrate {
        return;
    }

    state.offset.y += state.velocity.y * dt;
    if state.offset.y > cfg.floor {
        state.offset.y = cfg.floor;
        state.velocity.y = -state.velocity.y * cfg.floor_damping;
    }
}
