use crate::api::config::CanvasConfig;

/// Converts wall-clock milliseconds into simulated time units.
/// One unit is one nominal frame (16.67 ms at 60 Hz).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    frame_ms: f32,
    max_delta: f32,
}

impl TimeScale {
    pub fn new(frame_ms: f32, max_delta: f32) -> Self {
        Self { frame_ms, max_delta }
    }

    pub fn from_config(canvas: &CanvasConfig) -> Self {
        Self::new(canvas.frame_ms, canvas.max_frame_delta)
    }

    /// Simulated units elapsed since `last_ms`. A first update counts as one unit.
    /// Clock skew yields zero; stalls are capped at `max_delta`.
    pub fn delta(&self, last_ms: Option<f64>, now_ms: f64) -> f32 {
        match last_ms {
            None => 1.0,
            Some(last) => {
                let units = ((now_ms - last) / self.frame_ms as f64) as f32;
                units.clamp(0.0, self.max_delta)
            }
        }
    }

    pub fn frame_ms(&self) -> f32 {
        self.frame_ms
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::from_config(&CanvasConfig::default())
    }
}
