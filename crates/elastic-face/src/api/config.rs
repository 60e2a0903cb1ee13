use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading or validating a [`FaceConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not parse face config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Canvas geometry and frame timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Side of the square view box in canvas units.
    pub size: f32,
    /// Wall-clock milliseconds that count as one simulated time unit.
    pub frame_ms: f32,
    /// Largest simulated step a single frame may take (stalled tab, debugger).
    pub max_frame_delta: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { size: 400.0, frame_ms: 16.67, max_frame_delta: 4.0 }
    }
}

/// Pointer dragging and release behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    pub max_distance: f32,
    pub sparkle_chance: f32,
    pub trail_chance: f32,
    pub confetti_chance: f32,
    /// Stretch ratio (raw distance / max distance) above which confetti may spawn.
    pub confetti_stretch_ratio: f32,
    pub release_velocity_factor: f32,
    pub reset_delay_ms: f64,
    pub release_confetti_distance: f32,
    pub release_confetti_count: usize,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            max_distance: 150.0,
            sparkle_chance: 0.3,
            trail_chance: 0.5,
            confetti_chance: 0.1,
            confetti_stretch_ratio: 0.8,
            release_velocity_factor: 0.1,
            reset_delay_ms: 100.0,
            release_confetti_distance: 100.0,
            release_confetti_count: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JiggleConfig {
    /// Offsets at or below this magnitude count as settled.
    pub rest_threshold: f32,
    /// Phase advance per simulated time unit (radians).
    pub phase_step: f32,
    /// Vertical wobble runs at this multiple of the horizontal phase.
    pub y_phase_rate: f32,
    /// Fraction of the wobble added to the offset each tick.
    pub perturbation: f32,
    pub damping: f32,
}

impl Default for JiggleConfig {
    fn default() -> Self {
        Self {
            rest_threshold: 0.5,
            phase_step: 0.3,
            y_phase_rate: 1.3,
            perturbation: 0.05,
            damping: 0.9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityConfig {
    pub acceleration: f32,
    pub terminal_velocity: f32,
    /// Lowest offset (y down) an element may fall to.
    pub floor: f32,
    pub floor_damping: f32,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self { acceleration: 0.5, terminal_velocity: 15.0, floor: 150.0, floor_damping: 0.6 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BounceConfig {
    /// Offset limit on both axes, in either direction.
    pub boundary: f32,
    pub wall_damping: f32,
    pub friction: f32,
    pub pop_count: usize,
}

impl Default for BounceConfig {
    fn default() -> Self {
        Self { boundary: 150.0, wall_damping: 0.7, friction: 0.98, pop_count: 6 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub influence_radius: f32,
    pub influence_strength: f32,
    pub sparkle_chance: f32,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self { influence_radius: 80.0, influence_strength: 0.3, sparkle_chance: 0.05 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Hard cap on live particles; the oldest are evicted beyond it.
    pub max_live: usize,
    pub mood_burst: usize,
    pub toggle_burst: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self { max_live: 400, mood_burst: 12, toggle_burst: 8 }
    }
}

/// Every tunable of the simulation. Missing JSON fields fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceConfig {
    pub canvas: CanvasConfig,
    pub drag: DragConfig,
    pub jiggle: JiggleConfig,
    pub gravity: GravityConfig,
    pub bounce: BounceConfig,
    pub chain: ChainConfig,
    pub particles: ParticleConfig,
    /// Seed for the particle random source.
    pub seed: u64,
}

impl FaceConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FaceConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the numeric invariants the integrators rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("canvas.size", self.canvas.size)?;
        positive("canvas.frame_ms", self.canvas.frame_ms)?;
        positive("canvas.max_frame_delta", self.canvas.max_frame_delta)?;
        positive("drag.max_distance", self.drag.max_distance)?;
        positive("gravity.acceleration", self.gravity.acceleration)?;
        positive("gravity.terminal_velocity", self.gravity.terminal_velocity)?;
        positive("gravity.floor", self.gravity.floor)?;
        positive("bounce.boundary", self.bounce.boundary)?;
        positive("chain.influence_radius", self.chain.influence_radius)?;
        positive("jiggle.rest_threshold", self.jiggle.rest_threshold)?;
        positive("jiggle.phase_step", self.jiggle.phase_step)?;

        unit_open("jiggle.damping", self.jiggle.damping)?;
        unit_open("gravity.floor_damping", self.gravity.floor_damping)?;
        unit_open("bounce.wall_damping", self.bounce.wall_damping)?;
        unit_open("bounce.friction", self.bounce.friction)?;

        for (field, p) in [
            ("drag.sparkle_chance", self.drag.sparkle_chance),
            ("drag.trail_chance", self.drag.trail_chance),
            ("drag.confetti_chance", self.drag.confetti_chance),
            ("chain.sparkle_chance", self.chain.sparkle_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(invalid(field, format!("{} is not a probability", p)));
            }
        }

        if self.jiggle.perturbation < 0.0 {
            return Err(invalid("jiggle.perturbation", "must not be negative".into()));
        }
        // Worst case the wobble adds perturbation * sqrt(2) * |offset| before damping.
        let contraction = self.jiggle.damping * (1.0 + self.jiggle.perturbation * std::f32::consts::SQRT_2);
        if contraction >= 1.0 {
            return Err(invalid(
                "jiggle.perturbation",
                format!("damping * (1 + perturbation * sqrt 2) = {:.3} does not settle", contraction),
            ));
        }

        if self.particles.max_live == 0 {
            return Err(invalid("particles.max_live", "must be at least 1".into()));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidValue { field, reason }
}

fn positive(field: &'static str, v: f32) -> Result<(), ConfigError> {
    if v > 0.0 && v.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("{} must be positive", v)))
    }
}

fn unit_open(field: &'static str, v: f32) -> Result<(), ConfigError> {
    if v > 0.0 && v < 1.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{} must be in (0, 1)", v)))
    }
}
