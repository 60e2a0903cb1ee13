use glam::Vec2;

use crate::api::config::BounceConfig;
use crate::core::element::ElementState;

/// Free flight inside a square of half-width `boundary` around rest, with
/// damped reflection off the walls and constant friction.
/// Returns the canvas positions of any wall hits this tick.
pub fn bounce_step(state: &mut ElementState, cfg: &BounceConfig, dt: f32) -> Vec<Vec2> {
    let mut hits = Vec::new();
    state.offset += state.velocity * dt;

    for axis in 0..2 {
        let pos = state.offset[axis];
        if pos.abs() > cfg.boundary {
            state.offset[axis] = cfg.boundary.copysign(pos);
            state.velocity[axis] = -state.velocity[axis] * cfg.wall_damping;
            hits.push(state.canvas_position());
        }
    }

    state.velocity *= cfg.friction;
    hits
}
