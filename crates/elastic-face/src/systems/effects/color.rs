//! HSL particle colours and their RGB conversion for the frame buffers.

use serde::Serialize;

/// Colour in HSL space. Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self { hue, saturation, lightness }
    }

    /// Convert to linear RGB components in `[0, 1]`.
    pub fn to_rgb(self) -> [f32; 3] {
        let h = self.hue.rem_euclid(360.0);
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let secondary = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - chroma / 2.0;

        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (chroma, secondary, 0.0),
            1 => (secondary, chroma, 0.0),
            2 => (0.0, chroma, secondary),
            3 => (0.0, secondary, chroma),
            4 => (secondary, 0.0, chroma),
            _ => (chroma, 0.0, secondary),
        };
        [r + m, g + m, b + m]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-3)
    }

    #[test]
    fn primary_hues() {
        assert!(approx(Hsl::new(0.0, 100.0, 50.0).to_rgb(), [1.0, 0.0, 0.0]));
        assert!(approx(Hsl::new(120.0, 100.0, 50.0).to_rgb(), [0.0, 1.0, 0.0]));
        assert!(approx(Hsl::new(240.0, 100.0, 50.0).to_rgb(), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn hue_wraps() {
        assert!(approx(Hsl::new(360.0, 100.0, 50.0).to_rgb(), [1.0, 0.0, 0.0]));
    }
}
